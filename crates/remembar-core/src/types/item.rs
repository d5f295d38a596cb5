//! Tracked item types.

use serde::{Deserialize, Serialize};

/// Body of a `POST /track_item` call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrackItemRequest {
    pub tenant_id: String,
    pub item_name: String,
    pub location: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl TrackItemRequest {
    pub fn new(
        tenant_id: impl Into<String>,
        item_name: impl Into<String>,
        location: impl Into<String>,
    ) -> Self {
        Self {
            tenant_id: tenant_id.into(),
            item_name: item_name.into(),
            location: location.into(),
            description: None,
        }
    }

    /// Set the free-text description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}
