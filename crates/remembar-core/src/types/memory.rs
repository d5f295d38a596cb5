//! Note storage types.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString, IntoStaticStr};

/// How important a stored note is.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    IntoStaticStr,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    #[default]
    Med,
    High,
}

impl Priority {
    /// Parse a caller-supplied priority, falling back to `med` for anything
    /// that is not exactly `low`, `med` or `high`.
    pub fn parse_lenient(value: &str) -> Self {
        value.parse().unwrap_or_default()
    }
}

/// Body of a `POST /add_note` call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MemoryRequest {
    pub tenant_id: String,
    pub text: String,
    /// Input channel; this bridge only ever submits typed text.
    pub modality: String,
    pub priority: Priority,
    pub tags: Vec<String>,
    /// Always sent, `null` unless the note is attached to a tracked entity.
    pub linked_entity: Option<String>,
}

impl MemoryRequest {
    /// Create a request with default priority and no tags.
    pub fn new(tenant_id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            tenant_id: tenant_id.into(),
            text: text.into(),
            modality: "typed".to_string(),
            priority: Priority::default(),
            tags: Vec::new(),
            linked_entity: None,
        }
    }

    /// Set the priority.
    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }

    /// Set the tags.
    pub fn with_tags(mut self, tags: Vec<String>) -> Self {
        self.tags = tags;
        self
    }
}

/// Reply from `POST /add_note`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AddNoteResponse {
    #[serde(default, deserialize_with = "super::deserialize_truthy")]
    pub ok: bool,
    /// Identifier assigned by the store; string or number depending on backend.
    #[serde(default)]
    pub note_id: Option<serde_json::Value>,
}

impl AddNoteResponse {
    /// Note identifier as display text, `unknown` when the store sent none.
    pub fn note_id_label(&self) -> String {
        match &self.note_id {
            Some(serde_json::Value::String(id)) if !id.is_empty() => id.clone(),
            Some(serde_json::Value::Null) | None => "unknown".to_string(),
            Some(serde_json::Value::String(_)) => "unknown".to_string(),
            Some(other) => other.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_priority_parse_lenient() {
        assert_eq!(Priority::parse_lenient("low"), Priority::Low);
        assert_eq!(Priority::parse_lenient("high"), Priority::High);
        assert_eq!(Priority::parse_lenient("urgent"), Priority::Med);
        assert_eq!(Priority::parse_lenient(""), Priority::Med);
        assert_eq!(Priority::parse_lenient("HIGH"), Priority::Med);
    }

    #[test]
    fn test_priority_display() {
        assert_eq!(Priority::Med.to_string(), "med");
        let name: &'static str = Priority::High.into();
        assert_eq!(name, "high");
    }

    #[test]
    fn test_memory_request_body_shape() {
        let request = MemoryRequest::new("default_user", "Keys are on the hook")
            .with_priority(Priority::High)
            .with_tags(vec!["keys".to_string()]);
        let body = serde_json::to_value(&request).unwrap();

        assert_eq!(
            body,
            json!({
                "tenant_id": "default_user",
                "text": "Keys are on the hook",
                "modality": "typed",
                "priority": "high",
                "tags": ["keys"],
                "linked_entity": null
            })
        );
    }

    #[test]
    fn test_note_id_label() {
        let with_string: AddNoteResponse =
            serde_json::from_value(json!({"ok": true, "note_id": "n-1"})).unwrap();
        assert_eq!(with_string.note_id_label(), "n-1");

        let with_number: AddNoteResponse =
            serde_json::from_value(json!({"ok": true, "note_id": 17})).unwrap();
        assert_eq!(with_number.note_id_label(), "17");

        let missing: AddNoteResponse = serde_json::from_value(json!({"ok": true})).unwrap();
        assert_eq!(missing.note_id_label(), "unknown");
    }
}
