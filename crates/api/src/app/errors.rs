use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use storefront_core::DomainError;
use storefront_infra::product_service::ServiceError;

pub const PRODUCT_NOT_FOUND: &str = "Product not found.";
pub const PRODUCT_DELETED: &str = "Product deleted successfully.";

pub fn service_error_to_response(err: ServiceError) -> axum::response::Response {
    match err {
        ServiceError::NotFound => not_found(),
        ServiceError::Repository(e) => {
            tracing::error!("product store failed: {e}");
            json_error(StatusCode::INTERNAL_SERVER_ERROR, "store_error", e.to_string())
        }
    }
}

pub fn domain_error_to_response(err: DomainError) -> axum::response::Response {
    match err {
        DomainError::Validation(msg) => json_error(StatusCode::BAD_REQUEST, "validation_error", msg),
        DomainError::InvalidId(msg) => json_error(StatusCode::BAD_REQUEST, "invalid_id", msg),
    }
}

/// Plain-text 404 shared by every lookup on `/products/{id}`.
pub fn not_found() -> axum::response::Response {
    (StatusCode::NOT_FOUND, PRODUCT_NOT_FOUND).into_response()
}

pub fn json_error(
    status: StatusCode,
    code: &'static str,
    message: impl Into<String>,
) -> axum::response::Response {
    (
        status,
        axum::Json(json!({
            "error": code,
            "message": message.into(),
        })),
    )
        .into_response()
}
