use axum::extract::rejection::{BytesRejection, PathRejection};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use userapi_core::DomainError;
use userapi_infra::StoreError;

/// Client input errors: bad path id or undecodable body.
pub fn domain_error_to_response(err: DomainError) -> axum::response::Response {
    tracing::debug!(error = %err, "rejected request input");
    match err {
        DomainError::InvalidId(msg) => json_error(StatusCode::BAD_REQUEST, "invalid_id", msg),
        DomainError::InvalidPayload(msg) => json_error(StatusCode::BAD_REQUEST, "invalid_body", msg),
    }
}

/// The path segment could not be extracted at all (e.g. not valid UTF-8).
pub fn path_rejection_to_response(rejection: PathRejection) -> axum::response::Response {
    tracing::debug!(error = %rejection, "rejected path parameter");
    json_error(rejection.status(), "invalid_id", rejection.body_text())
}

/// The body could not be buffered, most often because it exceeds the size limit (413).
pub fn bytes_rejection_to_response(rejection: BytesRejection) -> axum::response::Response {
    tracing::debug!(error = %rejection, "rejected request body");
    json_error(rejection.status(), "invalid_body", rejection.body_text())
}

/// Store failures surface as JSON 5xx/409 responses; the process keeps serving.
pub fn store_error_to_response(operation: &'static str, err: StoreError) -> axum::response::Response {
    tracing::error!(operation, error = %err, "user store operation failed");
    match err {
        StoreError::Connect(msg) => json_error(StatusCode::SERVICE_UNAVAILABLE, "store_unavailable", msg),
        StoreError::Constraint(msg) => json_error(StatusCode::CONFLICT, "constraint_violation", msg),
        StoreError::Query(msg) => json_error(StatusCode::INTERNAL_SERVER_ERROR, "store_error", msg),
    }
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
