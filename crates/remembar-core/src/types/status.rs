//! Server information record.

use serde::{Deserialize, Serialize};
use strum::Display;

/// Reachability of the remote store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum StoreStatus {
    Connected,
    Disconnected,
}

/// Record returned by the `get_server_info` tool.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerStatus {
    pub server_name: String,
    pub version: String,
    pub description: String,
    pub chromadb_url: String,
    pub chromadb_status: StoreStatus,
    pub tenant_id: String,
    pub features: Vec<String>,
}

impl ServerStatus {
    pub fn is_connected(&self) -> bool {
        self.chromadb_status == StoreStatus::Connected
    }
}
