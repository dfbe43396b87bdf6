//! Common types used across the frontend application.
//!
//! # Categories
//!
//! - **API Types** - records returned by the extraction backend
//! - **File Types** - metadata about the selected upload
//! - **Error Types** - frontend error handling

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use thiserror::Error;

// =============================================================================
// API Types
// =============================================================================

/// Structured fields extracted from one résumé.
///
/// Returned by `POST /upload` and, with a `timestamp`, as entries of
/// `GET /history`. The shape is trusted as-is: absent and `null` fields
/// deserialize to `None`, and off-type values are shown as text rather
/// than failing the whole response.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ExtractionResult {
    #[serde(default, deserialize_with = "lenient_text")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub email: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub phone: Option<String>,
    /// Skills in backend order
    #[serde(default, deserialize_with = "lenient_list")]
    pub skills: Option<Vec<String>>,
    /// Experience sentences in backend order
    #[serde(default, deserialize_with = "lenient_list")]
    pub experience: Option<Vec<String>>,
    /// Creation time, only set on history entries
    #[serde(
        default,
        deserialize_with = "lenient_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub timestamp: Option<String>,
}

/// Display text of a scalar; `null` has none.
fn value_text(value: Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s),
        other => Some(other.to_string()),
    }
}

fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(value_text(Value::deserialize(deserializer)?))
}

/// Arrays keep their non-null items as text; a lone scalar is a one-item list.
fn lenient_list<'de, D>(deserializer: D) -> Result<Option<Vec<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Null => None,
        Value::Array(items) => Some(items.into_iter().filter_map(value_text).collect()),
        other => value_text(other).map(|item| vec![item]),
    })
}

// =============================================================================
// File Types
// =============================================================================

/// Metadata captured when the user picks a file.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct FileInfo {
    pub name: String,
    /// MIME type reported by the browser (may be empty)
    pub mime: String,
    /// Size in bytes
    pub size: u64,
}

// =============================================================================
// Error Types
// =============================================================================

/// Details of a non-2xx HTTP response.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ResponseDetails {
    pub status: u16,
    pub status_text: String,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

/// Frontend application errors.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum AppError {
    /// The request could not be built.
    #[error("Failed to build request: {0}")]
    Request(String),

    /// No response was received.
    #[error("HTTP request failed: {0}")]
    Network(String),

    /// Non-2xx response.
    #[error("Server error ({}): {}", .0.status, .0.status_text)]
    Status(Box<ResponseDetails>),

    /// Response body did not match the expected shape.
    #[error("Failed to parse response: {0}")]
    Decode(String),
}

impl AppError {
    /// Response details, when the server answered.
    pub fn response(&self) -> Option<&ResponseDetails> {
        match self {
            AppError::Status(details) => Some(details),
            _ => None,
        }
    }
}

/// Result type alias for frontend operations.
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_result_deserialization() {
        let json = r#"{
            "name": "Jane Doe",
            "email": "jane@x.com",
            "phone": "555-1234",
            "skills": ["Go", "SQL"],
            "experience": ["Built API"]
        }"#;

        let result: ExtractionResult = serde_json::from_str(json).unwrap();
        assert_eq!(result.name.as_deref(), Some("Jane Doe"));
        assert_eq!(result.email.as_deref(), Some("jane@x.com"));
        assert_eq!(result.phone.as_deref(), Some("555-1234"));
        assert_eq!(result.skills, Some(vec!["Go".to_string(), "SQL".to_string()]));
        assert_eq!(result.experience, Some(vec!["Built API".to_string()]));
        assert!(result.timestamp.is_none());
    }

    #[test]
    fn test_missing_and_null_fields() {
        let json = r#"{"name": null, "skills": null, "unexpected": 42}"#;

        let result: ExtractionResult = serde_json::from_str(json).unwrap();
        assert_eq!(result, ExtractionResult::default());
    }

    #[test]
    fn test_off_type_fields_are_kept_as_text() {
        let json = r#"{"name":"Jane","phone":5551234,"skills":["Go",null,3],"experience":"Built API"}"#;

        let result: ExtractionResult = serde_json::from_str(json).unwrap();
        assert_eq!(result.name.as_deref(), Some("Jane"));
        assert_eq!(result.phone.as_deref(), Some("5551234"));
        assert_eq!(result.skills, Some(vec!["Go".to_string(), "3".to_string()]));
        assert_eq!(result.experience, Some(vec!["Built API".to_string()]));
    }

    #[test]
    fn test_history_entries_keep_timestamp() {
        let json = r#"[
            {"name": "A", "timestamp": "2024-05-01T09:30:00.123456"},
            {"name": "B", "timestamp": "2024-04-30T18:00:00"}
        ]"#;

        let history: Vec<ExtractionResult> = serde_json::from_str(json).unwrap();
        assert_eq!(history.len(), 2);
        assert_eq!(history[0].timestamp.as_deref(), Some("2024-05-01T09:30:00.123456"));
        assert_eq!(history[1].name.as_deref(), Some("B"));
    }

    #[test]
    fn test_status_error_display() {
        let err = AppError::Status(Box::new(ResponseDetails {
            status: 500,
            status_text: "Internal Server Error".to_string(),
            ..Default::default()
        }));

        assert_eq!(err.to_string(), "Server error (500): Internal Server Error");
        assert_eq!(err.response().map(|r| r.status), Some(500));
        assert!(AppError::Network("offline".into()).response().is_none());
    }
}
