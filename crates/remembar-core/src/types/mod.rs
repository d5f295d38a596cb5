//! Request and response types exchanged with the remote store.

mod item;
mod memory;
mod search;
mod status;

pub use item::*;
pub use memory::*;
pub use search::*;
pub use status::*;

use serde::{Deserialize, Deserializer};

/// Truthiness of a JSON value as the store's Python clients see it:
/// `null`, `false`, `0`, `""`, `[]` and `{}` are false, everything else true.
pub fn is_truthy(value: &serde_json::Value) -> bool {
    use serde_json::Value;

    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map(|f| f != 0.0).unwrap_or(true),
        Value::String(s) => !s.is_empty(),
        Value::Array(a) => !a.is_empty(),
        Value::Object(o) => !o.is_empty(),
    }
}

/// Deserialize a success flag that may arrive as `1`, `"yes"` or `null`.
fn deserialize_truthy<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    serde_json::Value::deserialize(deserializer).map(|v| is_truthy(&v))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_is_truthy() {
        assert!(is_truthy(&json!(true)));
        assert!(is_truthy(&json!(1)));
        assert!(is_truthy(&json!("yes")));
        assert!(!is_truthy(&json!(0)));
        assert!(!is_truthy(&json!(0.0)));
        assert!(!is_truthy(&json!("")));
        assert!(!is_truthy(&json!(null)));
        assert!(!is_truthy(&json!([])));
    }

    #[test]
    fn test_success_flag_accepts_truthy_values() {
        let note: AddNoteResponse = serde_json::from_value(json!({"ok": 1, "note_id": "n1"})).unwrap();
        assert!(note.ok);
        assert_eq!(note.note_id_label(), "n1");

        let search: SearchResponse = serde_json::from_value(json!({"ok": 0, "results": []})).unwrap();
        assert!(!search.ok);

        let null_flag: AddNoteResponse = serde_json::from_value(json!({"ok": null})).unwrap();
        assert!(!null_flag.ok);
    }
}
