use serde::Serialize;
use utoipa::ToSchema;

use super::entry::ErrorEntry;
use super::internal::InternalCause;

/// Structured error response sent to API clients
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct ErrorResponse {
    /// HTTP status code
    pub code: u16,
    /// Original error message
    pub message: String,
    /// Server-side cause (present only when attached)
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<String>)]
    pub internal: Option<InternalCause>,
    /// Per-field errors parsed from the message (omitted when empty)
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<ErrorEntry>,
}

impl ErrorResponse {
    /// Create a new error response without an internal cause
    pub fn new(code: u16, message: impl Into<String>, errors: Vec<ErrorEntry>) -> Self {
        Self {
            code,
            message: message.into(),
            internal: None,
            errors,
        }
    }

    /// Attach the internal cause
    pub fn with_internal(mut self, cause: InternalCause) -> Self {
        self.internal = Some(cause);
        self
    }

    /// Copy of this response safe to show to clients
    pub fn without_internal(&self) -> Self {
        Self {
            internal: None,
            ..self.clone()
        }
    }
}
