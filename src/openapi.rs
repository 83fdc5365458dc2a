use utoipa::OpenApi;

use crate::errors::{ErrorEntry, ErrorResponse};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "httpe",
        version = "0.1.0",
        description = "Structured HTTP error responses with per-field error entries parsed from `field: message; ...` strings.",
    ),
    components(schemas(ErrorResponse, ErrorEntry))
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schemas_registered() {
        let doc = serde_json::to_value(ApiDoc::openapi()).unwrap();
        let schemas = &doc["components"]["schemas"];
        assert!(schemas["ErrorResponse"].is_object());
        assert!(schemas["ErrorEntry"].is_object());
    }
}
