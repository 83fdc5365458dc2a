pub mod config;
pub mod errors;
pub mod openapi;
pub mod transport;

pub use errors::{parse_entries, ErrorEntry, ErrorResponse, HttpErrors, InternalCause};
