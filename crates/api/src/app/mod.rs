//! HTTP API application wiring (Axum router + service wiring).
//!
//! - `services.rs`: the injected store capability shared by all handlers
//! - `routes/`: HTTP routes + handlers
//! - `dto.rs`: request decoding, response envelope and messages
//! - `errors.rs`: consistent JSON error responses

use std::sync::Arc;

use axum::{routing::get, Extension, Router};
use tower::ServiceBuilder;

use userapi_infra::UserStore;

use crate::middleware;

pub mod dto;
pub mod errors;
pub mod routes;
pub mod services;

/// Build the full HTTP router (public entrypoint used by `main.rs` and tests).
pub fn build_app(users: Arc<dyn UserStore>) -> Router {
    let services = Arc::new(services::AppServices::new(users));

    Router::new()
        .route("/health", get(routes::system::health))
        .route("/ready", get(routes::system::ready))
        .merge(routes::router())
        .fallback(routes::system::not_found)
        .layer(Extension(services))
        .layer(
            ServiceBuilder::new()
                .layer(axum::middleware::from_fn(middleware::trace_requests))
                .layer(axum::middleware::from_fn(middleware::cors_headers)),
        )
}
