use std::error::Error;
use std::fmt;

use super::entry::{parse_entries, ErrorEntry};
use super::internal::InternalCause;
use super::response::ErrorResponse;

/// An HTTP error in the making: status, client message and optional cause.
///
/// The message follows the `field1: msg1; field2: msg2; msg3` convention and
/// is parsed into [`ErrorEntry`] values whenever a response is produced.
#[derive(Debug, Clone)]
pub struct HttpErrors {
    status_code: u16,
    message: String,
    internal: Option<InternalCause>,
    entries: Vec<ErrorEntry>,
}

impl HttpErrors {
    /// Create a new error with a status code and message
    pub fn new(status_code: u16, message: impl Into<String>) -> Self {
        Self {
            status_code,
            message: message.into(),
            internal: None,
            entries: Vec::new(),
        }
    }

    /// HTTP status code as given
    pub fn status_code(&self) -> u16 {
        self.status_code
    }

    /// Client-facing message as given
    pub fn error_message(&self) -> &str {
        &self.message
    }

    /// Entries from the last parse (empty until a parse has run)
    pub fn entries(&self) -> &[ErrorEntry] {
        &self.entries
    }

    /// Stored internal cause, if any
    pub fn internal(&self) -> Option<&InternalCause> {
        self.internal.as_ref()
    }

    /// Re-derive `entries` from the current message
    pub fn parse_entries(&mut self) {
        self.entries = parse_entries(&self.message);
    }

    /// Record the cause and return a response that does not carry it.
    ///
    /// The cause stays on `self` for [`HttpErrors::unwrap_cause`] and logging.
    /// Use [`HttpErrors::with_internal`] to have it on the response as well.
    pub fn set_internal(&mut self, cause: impl Into<InternalCause>) -> ErrorResponse {
        self.internal = Some(cause.into());
        self.to_response()
    }

    /// Record the cause and return a response carrying it
    pub fn with_internal(&mut self, cause: impl Into<InternalCause>) -> ErrorResponse {
        let cause = cause.into();
        self.internal = Some(cause.clone());
        self.to_response().with_internal(cause)
    }

    /// The error wrapped by the internal cause, if any
    pub fn unwrap_cause(&self) -> Option<&(dyn Error + 'static)> {
        self.internal.as_ref().and_then(InternalCause::source)
    }

    /// Parse the message and build a response without the internal cause
    pub fn to_response(&mut self) -> ErrorResponse {
        self.parse_entries();
        ErrorResponse::new(self.status_code, self.message.clone(), self.entries.clone())
    }
}

/// Helpers for common statuses
impl HttpErrors {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(400, message)
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::new(401, message)
    }

    pub fn forbidden(message: impl Into<String>) -> Self {
        Self::new(403, message)
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(404, message)
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self::new(409, message)
    }

    pub fn unprocessable(message: impl Into<String>) -> Self {
        Self::new(422, message)
    }

    pub fn internal_error(message: impl Into<String>) -> Self {
        Self::new(500, message)
    }
}

impl fmt::Display for HttpErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl Error for HttpErrors {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.internal
            .as_ref()
            .map(|cause| cause.as_error() as &(dyn Error + 'static))
    }
}
