//! Semantic search types.

use serde::{Deserialize, Serialize};

/// Collections queried on every search: visual stream entities and typed notes.
pub const SEARCH_COLLECTIONS: [&str; 2] = ["entities_stream_v1", "user_notes_v1"];

/// Distance below which a match is flagged as highly relevant.
pub const HIGH_CONFIDENCE_DISTANCE: f64 = 0.5;

/// Body of a `POST /search_semantic` call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchRequest {
    pub tenant_id: String,
    pub query_text: String,
    pub collections: Vec<String>,
    pub n_results: usize,
}

impl SearchRequest {
    /// Create a request over the default collections.
    ///
    /// `n_results` is sent as given; callers clamp it first.
    pub fn new(tenant_id: impl Into<String>, query: impl Into<String>, n_results: usize) -> Self {
        Self {
            tenant_id: tenant_id.into(),
            query_text: query.into(),
            collections: SEARCH_COLLECTIONS.iter().map(|c| c.to_string()).collect(),
            n_results,
        }
    }
}

/// Reply from `POST /search_semantic`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchResponse {
    #[serde(default, deserialize_with = "super::deserialize_truthy")]
    pub ok: bool,
    #[serde(default)]
    pub results: Vec<SearchMatch>,
}

/// One match returned by the store.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchMatch {
    #[serde(default)]
    pub document: String,
    /// Vector distance; lower is more relevant.
    #[serde(default)]
    pub distance: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<serde_json::Map<String, serde_json::Value>>,
}

/// Where a match came from, judged by its metadata keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Provenance {
    /// Captured from the camera stream (`frame_ts` present).
    VisualMemory,
    /// A typed note (`note_id` present).
    Notes,
}

impl Provenance {
    pub fn label(&self) -> &'static str {
        match self {
            Provenance::VisualMemory => "from visual memory",
            Provenance::Notes => "from your notes",
        }
    }
}

impl SearchMatch {
    pub fn is_high_confidence(&self) -> bool {
        self.distance < HIGH_CONFIDENCE_DISTANCE
    }

    /// Marker shown in front of the match text.
    pub fn confidence_marker(&self) -> &'static str {
        if self.is_high_confidence() {
            "🔥"
        } else {
            "✓"
        }
    }

    /// Provenance, with visual memory taking precedence over notes.
    pub fn provenance(&self) -> Option<Provenance> {
        let metadata = self.metadata.as_ref()?;
        if metadata.contains_key("frame_ts") {
            Some(Provenance::VisualMemory)
        } else if metadata.contains_key("note_id") {
            Some(Provenance::Notes)
        } else {
            None
        }
    }
}
