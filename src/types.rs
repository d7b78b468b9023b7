//! Core types for the checklist.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One to-do entry.
///
/// Serialized field names are camelCase so the persisted JSON is a plain
/// array of `{"id", "title", "isChecked"}` objects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskRecord {
    /// Unique, immutable once created.
    pub id: String,
    /// Kept exactly as entered, including surrounding whitespace.
    pub title: String,
    pub is_checked: bool,
}

impl TaskRecord {
    /// Create an unchecked record with a freshly generated id.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            id: generate_id(),
            title: title.into(),
            is_checked: false,
        }
    }
}

/// Generate a unique task id: UUID v4, falling back to a coarse
/// millisecond timestamp if the UUID is somehow nil.
///
/// Collisions are not otherwise mitigated; acceptable for single-user,
/// low-volume use.
pub fn generate_id() -> String {
    let id = Uuid::new_v4();
    if id.is_nil() {
        chrono::Utc::now().timestamp_millis().to_string()
    } else {
        id.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_record_is_unchecked_and_keeps_title_verbatim() {
        let task = TaskRecord::new("  Buy milk ");
        assert_eq!(task.title, "  Buy milk ");
        assert!(!task.is_checked);
        assert!(!task.id.is_empty());
    }

    #[test]
    fn generated_ids_are_unique() {
        assert_ne!(generate_id(), generate_id());
    }

    #[test]
    fn serializes_with_camel_case_checked_flag() {
        let task = TaskRecord {
            id: "t1".to_string(),
            title: "Call mom".to_string(),
            is_checked: true,
        };
        let json = serde_json::to_value(&task).expect("serialize");
        assert_eq!(json["isChecked"], serde_json::Value::Bool(true));
        assert!(json.get("is_checked").is_none());
    }
}
