//! axum adapter for [`ErrorResponse`] and [`HttpErrors`]
//!
//! The error types stay framework-free; this module is the only place they
//! meet axum. The internal cause travels on the response extensions so that
//! [`error_logging_middleware`] can log it without it reaching the client, or
//! put it back into the body when its `Config` has `expose_internal` set.

pub mod middleware;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use tracing::debug;

use crate::config::Config;
use crate::errors::{ErrorResponse, HttpErrors};

pub use middleware::error_logging_middleware;

impl ErrorResponse {
    /// Render as an HTTP response with a JSON body.
    ///
    /// Codes outside the valid HTTP range render as 500. The internal cause is
    /// only kept in the body when `config.expose_internal` is set.
    pub fn render(mut self, config: &Config) -> Response {
        let status =
            StatusCode::from_u16(self.code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        let full = self.internal.is_some().then(|| self.clone());
        if !config.expose_internal {
            self.internal = None;
        }

        let mut response = (status, Json(self)).into_response();
        if let Some(full) = full {
            if let Some(cause) = full.internal.clone() {
                debug!(status = %status.as_u16(), internal = %cause, "Attaching internal cause");
                response.extensions_mut().insert(cause);
            }
            response.extensions_mut().insert(FullBody(full));
        }
        response
    }
}

/// Response body including the internal cause, kept for the middleware
#[derive(Clone)]
pub(crate) struct FullBody(pub(crate) ErrorResponse);

impl IntoResponse for ErrorResponse {
    fn into_response(self) -> Response {
        self.render(&Config::default())
    }
}

impl IntoResponse for HttpErrors {
    fn into_response(mut self) -> Response {
        let response = match self.internal().cloned() {
            Some(cause) => self.with_internal(cause),
            None => self.to_response(),
        };
        response.into_response()
    }
}
