use axum::{
    body::Body,
    extract::{Request, State},
    http::header::CONTENT_LENGTH,
    middleware::Next,
    response::Response,
};
use std::time::Instant;
use tracing::{error, warn};
use uuid::Uuid;

use super::FullBody;
use crate::config::Config;
use crate::errors::{ErrorResponse, InternalCause};

/// Log failed responses together with their internal cause.
///
/// The [`InternalCause`] extension is consumed here so it does not travel
/// further than the server's own logs. With `expose_internal` set, error
/// bodies are re-rendered with the cause included.
pub async fn error_logging_middleware(
    State(config): State<Config>,
    request: Request,
    next: Next,
) -> Response {
    let start = Instant::now();
    let request_id = Uuid::new_v4().to_string();
    let method = request.method().to_string();
    let path = request.uri().path().to_string();

    let mut response = next.run(request).await;

    let duration = start.elapsed();
    let status = response.status();
    let full_body = response.extensions_mut().remove::<FullBody>();
    let internal = response
        .extensions_mut()
        .remove::<InternalCause>()
        .map(|cause| cause.to_string())
        .unwrap_or_default();

    if status.is_server_error() {
        error!(
            request_id = %request_id,
            method = %method,
            path = %path,
            status = %status.as_u16(),
            duration_ms = %duration.as_millis(),
            internal = %internal,
            "Request failed (server error)"
        );
    } else if status.is_client_error() && config.log_client_errors {
        warn!(
            request_id = %request_id,
            method = %method,
            path = %path,
            status = %status.as_u16(),
            duration_ms = %duration.as_millis(),
            internal = %internal,
            "Request failed (client error)"
        );
    }

    match full_body {
        Some(FullBody(body)) if config.expose_internal => expose_internal(response, &body),
        _ => response,
    }
}

/// Swap the client body for one that carries the internal cause
fn expose_internal(response: Response, body: &ErrorResponse) -> Response {
    match serde_json::to_vec(body) {
        Ok(bytes) => {
            let (mut parts, _) = response.into_parts();
            parts.headers.remove(CONTENT_LENGTH);
            Response::from_parts(parts, Body::from(bytes))
        }
        Err(e) => {
            warn!(error = %e, "Failed to serialize error body with internal cause");
            response
        }
    }
}
