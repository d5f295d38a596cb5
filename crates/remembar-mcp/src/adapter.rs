//! Maps each tool call onto one store request and renders the outcome.
//!
//! Every operation returns something printable. Store failures are sorted
//! into three tiers (store said no, store unreachable, anything else) and
//! each tier has its own wording; nothing is raised to the caller.

use remembar_client::StoreClient;
use remembar_core::error::{ErrorKind, RemembarResult, StoreError};
use remembar_core::types::{
    is_truthy, MemoryRequest, Priority, SearchMatch, SearchRequest, ServerStatus, StoreStatus,
    TrackItemRequest,
};
use remembar_core::BridgeConfig;
use tracing::{info, warn};

pub const SERVER_NAME: &str = "RemembarMCP";
pub const SERVER_DESCRIPTION: &str = "Memory assistant for Alzheimer's patients";

/// Shown whenever the store cannot be reached at all.
pub const NETWORK_ERROR_MESSAGE: &str =
    "Network error: Unable to reach memory database. Please check your connection.";

pub const STORE_REJECTED_MESSAGE: &str = "Failed to save memory. Please try again.";
pub const SEARCH_REJECTED_MESSAGE: &str = "Failed to search memories. Please try again.";

/// Tools advertised in the status record.
pub const FEATURES: [&str; 4] = ["add_memory", "search_memory", "track_item", "find_item"];

/// Stateless bridge between tool calls and the store.
#[derive(Debug, Clone)]
pub struct Adapter {
    client: StoreClient,
}

impl Adapter {
    /// Create an adapter for the given configuration.
    pub fn new(config: BridgeConfig) -> RemembarResult<Self> {
        Ok(Self {
            client: StoreClient::new(config)?,
        })
    }

    pub fn config(&self) -> &BridgeConfig {
        self.client.config()
    }

    /// Save a note and return a confirmation for the user.
    ///
    /// Unknown priorities are stored as `med`.
    pub async fn store(
        &self,
        text: &str,
        priority: Option<&str>,
        tags: Option<Vec<String>>,
        session: Option<&str>,
    ) -> String {
        let priority = priority.map(Priority::parse_lenient).unwrap_or_default();
        let request = MemoryRequest::new(self.config().tenant_for(session), text)
            .with_priority(priority)
            .with_tags(tags.unwrap_or_default());

        match self.client.add_note(&request).await {
            Ok(reply) if reply.ok => {
                let note_id = reply.note_id_label();
                info!(note_id = %note_id, tenant = %request.tenant_id, %priority, "Memory saved");
                format!(
                    "✓ Memory saved successfully! (ID: {})\n\nI'll remember: {}",
                    note_id, text
                )
            }
            Ok(_) => {
                warn!(tenant = %request.tenant_id, "Store declined to save memory");
                STORE_REJECTED_MESSAGE.to_string()
            }
            Err(err) => describe_failure(&err, "Error saving memory"),
        }
    }

    /// Search memories and return a readable list.
    ///
    /// The requested count is clamped to the configured maximum, and no more
    /// than that many matches are listed even if the store returns extra.
    pub async fn search(&self, query: &str, limit: Option<usize>, session: Option<&str>) -> String {
        let n_results = self.config().clamp_results(limit);
        let request = SearchRequest::new(self.config().tenant_for(session), query, n_results);

        match self.client.search_semantic(&request).await {
            Ok(reply) if reply.ok => {
                info!(
                    tenant = %request.tenant_id,
                    requested = n_results,
                    returned = reply.results.len(),
                    "Memory search completed"
                );
                format_search_results(query, &reply.results, n_results)
            }
            Ok(_) => {
                warn!(tenant = %request.tenant_id, "Store declined search");
                SEARCH_REJECTED_MESSAGE.to_string()
            }
            Err(err) => describe_failure(&err, "Error searching memories"),
        }
    }

    /// Report server identity and whether the store answers its health probe.
    pub async fn status(&self) -> ServerStatus {
        let chromadb_status = match self.client.health().await {
            Ok(()) => StoreStatus::Connected,
            Err(err) => {
                warn!(error = %err, "Store health check failed");
                StoreStatus::Disconnected
            }
        };

        ServerStatus {
            server_name: SERVER_NAME.to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            description: SERVER_DESCRIPTION.to_string(),
            chromadb_url: self.config().store_url.clone(),
            chromadb_status,
            tenant_id: self.config().tenant_id.clone(),
            features: FEATURES.iter().map(|f| f.to_string()).collect(),
        }
    }

    /// Remember where a physical item was put.
    pub async fn track_item(
        &self,
        item_name: &str,
        location: &str,
        description: Option<&str>,
        session: Option<&str>,
    ) -> String {
        let mut request =
            TrackItemRequest::new(self.config().tenant_for(session), item_name, location);
        if let Some(description) = description.filter(|d| !d.trim().is_empty()) {
            request = request.with_description(description);
        }

        match self.client.track_item(&request).await {
            Ok(reply) if reply_ok(&reply) => {
                format!("✓ Got it! I'll remember your {} is at: {}", item_name, location)
            }
            Ok(_) => "Failed to track item. Please try again.".to_string(),
            Err(err) => describe_failure(&err, "Error tracking item"),
        }
    }

    /// Tell the user where a tracked item was last seen.
    pub async fn find_item(&self, item_name: &str, session: Option<&str>) -> String {
        let tenant_id = self.config().tenant_for(session);
        match self.client.find_item(item_name, &tenant_id).await {
            Ok(reply) => format_found_item(item_name, &reply),
            Err(err) => describe_failure(&err, "Error finding item"),
        }
    }
}

/// A reply counts as success unless it carries a falsy `ok`.
fn reply_ok(reply: &serde_json::Value) -> bool {
    reply.get("ok").map(is_truthy).unwrap_or(true)
}

/// Render a store failure for the user.
///
/// `generic_prefix` names the operation for failures outside the network and
/// status tiers, e.g. `Error saving memory`.
pub fn describe_failure(err: &StoreError, generic_prefix: &str) -> String {
    match (err.kind(), err.status_code()) {
        (ErrorKind::Remote, Some(status)) => {
            format!("Error connecting to memory database. Status: {}", status)
        }
        (ErrorKind::Transport, _) => NETWORK_ERROR_MESSAGE.to_string(),
        _ => format!("{}: {}", generic_prefix, err),
    }
}

/// Format matches as a list with a confidence marker and provenance line.
pub fn format_search_results(query: &str, matches: &[SearchMatch], limit: usize) -> String {
    if matches.is_empty() {
        return format!(
            "I couldn't find any memories matching '{}'. Try rephrasing or add this as a new memory!",
            query
        );
    }

    let shown = &matches[..matches.len().min(limit)];
    let mut text = format!("Found {} relevant memories:\n\n", shown.len());

    for m in shown {
        text.push_str(m.confidence_marker());
        text.push(' ');
        text.push_str(&m.document);
        text.push('\n');

        if let Some(provenance) = m.provenance() {
            text.push_str(&format!("   ({})\n", provenance.label()));
        }

        text.push('\n');
    }

    text.trim().to_string()
}

fn format_found_item(item_name: &str, reply: &serde_json::Value) -> String {
    if !reply_ok(reply) {
        return format!("I don't have a location saved for '{}' yet.", item_name);
    }

    // Some deployments nest the record under "item".
    let record = reply.get("item").unwrap_or(reply);
    let location = record
        .get("location")
        .and_then(|v| v.as_str())
        .filter(|l| !l.is_empty());

    match location {
        Some(location) => {
            let mut text = format!("📍 Your {} is at: {}", item_name, location);
            if let Some(description) = record
                .get("description")
                .and_then(|v| v.as_str())
                .filter(|d| !d.is_empty())
            {
                text.push_str(&format!(" ({})", description));
            }
            text
        }
        None => format!("I don't have a location saved for '{}' yet.", item_name),
    }
}
