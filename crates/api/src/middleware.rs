use std::time::Instant;

use axum::{
    extract::{MatchedPath, Request},
    http::{
        header::{
            ACCESS_CONTROL_ALLOW_HEADERS, ACCESS_CONTROL_ALLOW_METHODS,
            ACCESS_CONTROL_ALLOW_ORIGIN,
        },
        HeaderValue,
    },
    middleware::Next,
    response::Response,
};

/// Log one line per request: method, matched route, status and latency.
pub async fn trace_requests(req: Request, next: Next) -> Response {
    let method = req.method().clone();
    let route = req
        .extensions()
        .get::<MatchedPath>()
        .map(|p| p.as_str().to_owned())
        .unwrap_or_else(|| req.uri().path().to_owned());
    let started = Instant::now();

    let res = next.run(req).await;

    tracing::info!(
        method = %method,
        route = %route,
        status = res.status().as_u16(),
        latency_ms = started.elapsed().as_millis() as u64,
        "request handled"
    );
    res
}

/// Attach permissive CORS headers to every response.
///
/// `Access-Control-Allow-Methods` is the request's own method unless the
/// handler already set it (preflight responses list the route's methods).
pub async fn cors_headers(req: Request, next: Next) -> Response {
    let method = req.method().clone();
    let mut res = next.run(req).await;

    let headers = res.headers_mut();
    headers.insert(ACCESS_CONTROL_ALLOW_ORIGIN, HeaderValue::from_static("*"));
    headers.insert(
        ACCESS_CONTROL_ALLOW_HEADERS,
        HeaderValue::from_static("Content-Type"),
    );
    if !headers.contains_key(ACCESS_CONTROL_ALLOW_METHODS) {
        if let Ok(value) = HeaderValue::from_str(method.as_str()) {
            headers.insert(ACCESS_CONTROL_ALLOW_METHODS, value);
        }
    }

    res
}
