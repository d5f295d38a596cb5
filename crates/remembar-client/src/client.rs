//! Store client implementation.

use std::time::Duration;

use remembar_core::error::{RemembarError, RemembarResult, StoreError, StoreResult};
use remembar_core::types::{AddNoteResponse, MemoryRequest, SearchRequest, SearchResponse, TrackItemRequest};
use remembar_core::BridgeConfig;

use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use reqwest::{Client, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};
use url::Url;

/// Header that tells the ngrok edge to skip its browser interstitial.
pub const TUNNEL_BYPASS_HEADER: &str = "ngrok-skip-browser-warning";

/// Client for the remote memory store.
#[derive(Debug, Clone)]
pub struct StoreClient {
    client: Client,
    config: BridgeConfig,
}

impl StoreClient {
    /// Create a new store client.
    pub fn new(config: BridgeConfig) -> RemembarResult<Self> {
        let client = Client::builder()
            .user_agent(concat!("remembar/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| RemembarError::Client(e.to_string()))?;

        Ok(Self { client, config })
    }

    /// The configuration this client was built with.
    pub fn config(&self) -> &BridgeConfig {
        &self.config
    }

    fn headers(&self) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        if self.config.tunnel_bypass {
            headers.insert(TUNNEL_BYPASS_HEADER, HeaderValue::from_static("true"));
        }
        headers
    }

    /// Store a note.
    pub async fn add_note(&self, request: &MemoryRequest) -> StoreResult<AddNoteResponse> {
        let builder = self
            .client
            .post(self.config.endpoint("/add_note"))
            .json(request);

        self.send_json("add_note", builder, self.config.request_timeout)
            .await
    }

    /// Run a semantic search.
    pub async fn search_semantic(&self, request: &SearchRequest) -> StoreResult<SearchResponse> {
        let builder = self
            .client
            .post(self.config.endpoint("/search_semantic"))
            .json(request);

        self.send_json("search_semantic", builder, self.config.request_timeout)
            .await
    }

    /// Probe the store's health endpoint.
    ///
    /// Succeeds only on HTTP 200; the body is ignored.
    pub async fn health(&self) -> StoreResult<()> {
        let builder = self.client.get(self.config.endpoint("/healthz"));
        self.send("healthz", builder, self.config.health_timeout)
            .await
            .map(|_| ())
    }

    /// Record where an item was last put.
    pub async fn track_item(&self, request: &TrackItemRequest) -> StoreResult<serde_json::Value> {
        let builder = self
            .client
            .post(self.config.endpoint("/track_item"))
            .json(request);

        self.send_json("track_item", builder, self.config.request_timeout)
            .await
    }

    /// Look up a tracked item by name within a tenant.
    pub async fn find_item(&self, item_name: &str, tenant_id: &str) -> StoreResult<serde_json::Value> {
        let mut url = Url::parse(&self.config.endpoint("/find"))
            .map_err(|e| StoreError::decode(format!("invalid store URL: {}", e)))?;
        url.path_segments_mut()
            .map_err(|_| StoreError::decode("store URL cannot take a path"))?
            .push(item_name);
        url.query_pairs_mut().append_pair("tenant_id", tenant_id);

        let builder = self.client.get(url);
        self.send_json("find_item", builder, self.config.request_timeout)
            .await
    }

    async fn send_json<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        builder: RequestBuilder,
        timeout: Duration,
    ) -> StoreResult<T> {
        let response = self.send(endpoint, builder, timeout).await?;

        let body = response
            .bytes()
            .await
            .map_err(|e| transport_error(endpoint, e))?;

        serde_json::from_slice(&body).map_err(|e| {
            warn!(endpoint, error = %e, "Store returned an unreadable body");
            StoreError::from(e)
        })
    }

    async fn send(
        &self,
        endpoint: &str,
        builder: RequestBuilder,
        timeout: Duration,
    ) -> StoreResult<reqwest::Response> {
        debug!(endpoint, timeout_ms = %timeout.as_millis(), "Calling memory store");

        let response = builder
            .headers(self.headers())
            .timeout(timeout)
            .send()
            .await
            .map_err(|e| transport_error(endpoint, e))?;

        let status = response.status();
        if status != StatusCode::OK {
            warn!(endpoint, status = %status.as_u16(), "Store returned non-200 status");
            return Err(StoreError::status(status.as_u16()));
        }

        Ok(response)
    }
}

fn transport_error(endpoint: &str, err: reqwest::Error) -> StoreError {
    warn!(endpoint, error = %err, timed_out = err.is_timeout(), "Store request failed");
    StoreError::Network {
        message: format!("{} request failed: {}", endpoint, err),
        timed_out: err.is_timeout(),
        source: Some(Box::new(err)),
    }
}
