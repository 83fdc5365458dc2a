use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// One `field: message` item parsed out of an error message
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ErrorEntry {
    /// Field the message refers to (absent when the segment had no colon)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
    /// Human-readable message for this entry
    pub message: String,
}

impl ErrorEntry {
    /// Create an entry without a field
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            field: None,
            message: message.into(),
        }
    }

    /// Create an entry attached to a field
    pub fn with_field(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: Some(field.into()),
            message: message.into(),
        }
    }
}

/// Split a `field1: msg1; field2: msg2; msg3` message into entries.
///
/// Segments are separated by `;` and empty segments are skipped. Each segment
/// is split on its first `:` only, so messages may contain further colons.
pub fn parse_entries(message: &str) -> Vec<ErrorEntry> {
    message
        .split(';')
        .filter(|segment| !segment.is_empty())
        .map(|segment| match segment.split_once(':') {
            Some((field, msg)) => ErrorEntry::with_field(field.trim(), msg.trim()),
            None => ErrorEntry::new(segment.trim()),
        })
        .collect()
}
