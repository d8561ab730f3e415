//! The Hoge record type and its request payload

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The stored Hoge resource.
///
/// The identifier is client-supplied and immutable after creation. Both
/// timestamps are owned by the store: `created_at` is set once at insert and
/// preserved across updates, `updated_at` reflects the most recent write.
///
/// Wire shape: `{"id": "...", "value": "...", "createdAt": "...", "updatedAt": "..."}`
/// with RFC3339 timestamps.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Hoge {
    /// Unique identifier (the storage key)
    pub id: String,

    /// Payload value
    #[serde(default)]
    pub value: String,

    /// When this record was first inserted
    pub created_at: DateTime<Utc>,

    /// When this record was last written
    pub updated_at: DateTime<Utc>,
}

/// Request payload bound by the write handlers.
///
/// Clients may post a full record; timestamps in the body are ignored since
/// the store manages them. Unknown fields are skipped by serde.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HogeDraft {
    pub id: String,
    pub value: String,
}

impl HogeDraft {
    pub fn new(id: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            value: value.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_wire_shape_uses_camel_case() {
        let now = Utc::now();
        let record = Hoge {
            id: "hoge".to_string(),
            value: "hogehoge".to_string(),
            created_at: now,
            updated_at: now,
        };

        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["id"], "hoge");
        assert_eq!(json["value"], "hogehoge");
        assert!(json.get("createdAt").is_some());
        assert!(json.get("updatedAt").is_some());
        assert!(json.get("created_at").is_none());
    }

    #[test]
    fn test_record_roundtrip() {
        let now = Utc::now();
        let record = Hoge {
            id: "hoge".to_string(),
            value: "hogehoge".to_string(),
            created_at: now,
            updated_at: now,
        };

        let json = serde_json::to_string(&record).unwrap();
        let parsed: Hoge = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, record);
    }

    #[test]
    fn test_draft_ignores_client_timestamps() {
        let draft: HogeDraft = serde_json::from_str(
            r#"{"id": "hoge", "value": "hogehoge", "createdAt": "2020-01-01T00:00:00Z"}"#,
        )
        .unwrap();

        assert_eq!(draft.id, "hoge");
        assert_eq!(draft.value, "hogehoge");
    }

    #[test]
    fn test_draft_defaults_missing_fields() {
        let draft: HogeDraft = serde_json::from_str(r#"{"value": "hogehoge"}"#).unwrap();
        assert_eq!(draft.id, "");
        assert_eq!(draft.value, "hogehoge");
    }
}
