use axum::{
    http::{
        header::{ACCESS_CONTROL_ALLOW_METHODS, ALLOW},
        HeaderValue, StatusCode,
    },
    response::{IntoResponse, Response},
};

use crate::app::errors::json_error;

/// Headers-only answer to a CORS preflight.
///
/// The remaining CORS headers are added by `middleware::cors_headers`.
pub fn preflight(methods: &'static str) -> Response {
    (
        StatusCode::NO_CONTENT,
        [(ACCESS_CONTROL_ALLOW_METHODS, HeaderValue::from_static(methods))],
    )
        .into_response()
}

/// JSON 405 for a known path hit with a method it does not serve.
pub fn method_not_allowed(methods: &'static str) -> Response {
    let mut res = json_error(
        StatusCode::METHOD_NOT_ALLOWED,
        "method_not_allowed",
        format!("allowed methods: {methods}"),
    );
    let value = HeaderValue::from_static(methods);
    res.headers_mut().insert(ALLOW, value.clone());
    res.headers_mut().insert(ACCESS_CONTROL_ALLOW_METHODS, value);
    res
}
