//! Structured HTTP errors built from delimited messages

pub mod entry;
pub mod internal;
pub mod response;
pub mod result;

pub use entry::{parse_entries, ErrorEntry};
pub use internal::InternalCause;
pub use response::ErrorResponse;
pub use result::HttpErrors;
