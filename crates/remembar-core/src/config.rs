//! Configuration for the memory bridge.
//!
//! Read once at startup and handed to the client and server explicitly.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::{RemembarError, RemembarResult};

/// Default store location (tunnelled ChromaDB service).
pub const DEFAULT_STORE_URL: &str = "https://memary-chromadb.ngrok-free.app";
/// Tenant used when neither the environment nor the caller names one.
pub const DEFAULT_TENANT_ID: &str = "default_user";
pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8000;
/// Upper bound on search results, whatever the caller asks for.
pub const MAX_SEARCH_RESULTS: usize = 10;
pub const DEFAULT_SEARCH_RESULTS: usize = 5;

/// Immutable bridge configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BridgeConfig {
    /// Base URL of the remote store, without trailing slash.
    pub store_url: String,
    /// Tenant that memories are filed under by default.
    pub tenant_id: String,
    /// Listener host.
    pub host: String,
    /// Listener port.
    pub port: u16,
    /// Send the tunnel's browser-warning bypass header.
    pub tunnel_bypass: bool,
    /// Timeout for add/search/item calls.
    pub request_timeout: Duration,
    /// Timeout for the health probe.
    pub health_timeout: Duration,
    /// Cap applied to every search.
    pub max_search_results: usize,
}

impl Default for BridgeConfig {
    fn default() -> Self {
        Self {
            store_url: DEFAULT_STORE_URL.to_string(),
            tenant_id: DEFAULT_TENANT_ID.to_string(),
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            tunnel_bypass: true,
            request_timeout: Duration::from_secs(10),
            health_timeout: Duration::from_secs(5),
            max_search_results: MAX_SEARCH_RESULTS,
        }
    }
}

impl BridgeConfig {
    /// Create a config pointing at the given store, other fields default.
    pub fn new(store_url: impl Into<String>) -> RemembarResult<Self> {
        Ok(Self {
            store_url: normalize_url(&store_url.into())?,
            ..Self::default()
        })
    }

    /// Set the default tenant.
    pub fn with_tenant(mut self, tenant_id: impl Into<String>) -> Self {
        self.tenant_id = tenant_id.into();
        self
    }

    /// Enable or disable the tunnel bypass header.
    pub fn with_tunnel_bypass(mut self, enabled: bool) -> Self {
        self.tunnel_bypass = enabled;
        self
    }

    /// Set the timeout used for add/search calls.
    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    /// Set the timeout used for the health probe.
    pub fn with_health_timeout(mut self, timeout: Duration) -> Self {
        self.health_timeout = timeout;
        self
    }

    /// Load configuration from process environment variables.
    ///
    /// - `CHROMADB_URL` - store base URL
    /// - `TENANT_ID` - default tenant
    /// - `HOST` / `PORT` - listener address
    /// - `REMEMBAR_TUNNEL_BYPASS` - `false`/`0`/`no`/`off` disables the header
    /// - `REMEMBAR_REQUEST_TIMEOUT_SECS` / `REMEMBAR_HEALTH_TIMEOUT_SECS`
    pub fn from_env() -> RemembarResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> RemembarResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(url) = non_empty(lookup("CHROMADB_URL")) {
            config.store_url = normalize_url(&url)?;
        }

        if let Some(tenant) = non_empty(lookup("TENANT_ID")) {
            config.tenant_id = tenant;
        }

        if let Some(host) = non_empty(lookup("HOST")) {
            config.host = host;
        }

        if let Some(port) = non_empty(lookup("PORT")) {
            config.port = port.parse().map_err(|_| {
                RemembarError::configuration(format!("PORT must be a valid port number, got '{}'", port))
            })?;
        }

        if let Some(flag) = non_empty(lookup("REMEMBAR_TUNNEL_BYPASS")) {
            config.tunnel_bypass = !matches!(
                flag.to_ascii_lowercase().as_str(),
                "0" | "false" | "no" | "off"
            );
        }

        if let Some(secs) = non_empty(lookup("REMEMBAR_REQUEST_TIMEOUT_SECS")) {
            config.request_timeout = parse_secs("REMEMBAR_REQUEST_TIMEOUT_SECS", &secs)?;
        }

        if let Some(secs) = non_empty(lookup("REMEMBAR_HEALTH_TIMEOUT_SECS")) {
            config.health_timeout = parse_secs("REMEMBAR_HEALTH_TIMEOUT_SECS", &secs)?;
        }

        Ok(config)
    }

    /// Full URL for a store endpoint path such as `/add_note`.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.store_url, path.trim_start_matches('/'))
    }

    /// Tenant to use for a call, preferring the caller's session.
    pub fn tenant_for(&self, session: Option<&str>) -> String {
        match session.map(str::trim) {
            Some(s) if !s.is_empty() => s.to_string(),
            _ => self.tenant_id.clone(),
        }
    }

    /// Clamp a requested result count into `1..=max_search_results`.
    pub fn clamp_results(&self, requested: Option<usize>) -> usize {
        requested
            .unwrap_or(DEFAULT_SEARCH_RESULTS)
            .clamp(1, self.max_search_results.max(1))
    }

    /// Listener address as `host:port`.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.map(|v| v.trim().to_string()).filter(|v| !v.is_empty())
}

fn normalize_url(raw: &str) -> RemembarResult<String> {
    let parsed = Url::parse(raw.trim())
        .map_err(|e| RemembarError::configuration(format!("invalid store URL '{}': {}", raw, e)))?;
    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(RemembarError::configuration(format!(
            "store URL must be http or https, got '{}'",
            parsed.scheme()
        )));
    }
    Ok(parsed.as_str().trim_end_matches('/').to_string())
}

fn parse_secs(key: &str, value: &str) -> RemembarResult<Duration> {
    value
        .parse::<u64>()
        .ok()
        .filter(|s| *s > 0)
        .map(Duration::from_secs)
        .ok_or_else(|| {
            RemembarError::configuration(format!("{} must be a positive integer, got '{}'", key, value))
        })
}
