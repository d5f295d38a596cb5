//! MCP tool input definitions.
//!
//! These types are used with `schemars::JsonSchema` to generate the JSON Schema
//! that MCP clients use to understand tool parameters.

use rmcp::schemars::{self, JsonSchema};
use serde::{Deserialize, Serialize};

/// Input for add_memory tool.
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct AddMemoryInput {
    /// The memory or information to store.
    pub text: String,

    /// Priority level: 'low', 'med', or 'high'. Anything else is stored as 'med'.
    #[serde(default = "default_priority")]
    pub priority: String,

    /// Tags to categorize the memory.
    #[serde(default)]
    pub tags: Option<Vec<String>>,

    /// Session or user to file the memory under.
    /// Defaults to the server's configured tenant.
    #[serde(default)]
    pub session_id: Option<String>,
}

fn default_priority() -> String {
    "med".to_string()
}

/// Input for search_memory tool.
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct SearchMemoryInput {
    /// Natural language question or search term.
    pub query: String,

    /// Number of results to return (at most 10).
    #[serde(default = "default_n_results")]
    pub n_results: usize,

    /// Session or user whose memories to search.
    #[serde(default)]
    pub session_id: Option<String>,
}

fn default_n_results() -> usize {
    5
}

/// Input for track_item tool.
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct TrackItemInput {
    /// Name of the item, e.g. "keys".
    pub item_name: String,

    /// Where the item is now.
    pub location: String,

    /// Optional description to tell similar items apart.
    #[serde(default)]
    pub description: Option<String>,

    #[serde(default)]
    pub session_id: Option<String>,
}

/// Input for find_item tool.
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct FindItemInput {
    /// Name of the item to look up.
    pub item_name: String,

    /// Session or user whose items to search.
    #[serde(default)]
    pub session_id: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_memory_input_schema() {
        let schema = rmcp::schemars::schema_for!(AddMemoryInput);
        let json = serde_json::to_string_pretty(&schema).unwrap();
        assert!(json.contains("text"));
        assert!(json.contains("priority"));
        assert!(json.contains("tags"));
        assert!(json.contains("session_id"));
    }

    #[test]
    fn test_add_memory_input_defaults() {
        let input: AddMemoryInput = serde_json::from_str(r#"{"text": "keys on hook"}"#).unwrap();
        assert_eq!(input.priority, "med");
        assert!(input.tags.is_none());
        assert!(input.session_id.is_none());
    }

    #[test]
    fn test_search_memory_input_default_n_results() {
        let input: SearchMemoryInput = serde_json::from_str(r#"{"query": "keys"}"#).unwrap();
        assert_eq!(input.n_results, 5);
    }

    #[test]
    fn test_search_memory_input_custom_n_results() {
        let input: SearchMemoryInput =
            serde_json::from_str(r#"{"query": "keys", "n_results": 25}"#).unwrap();
        assert_eq!(input.n_results, 25);
    }
}
