//! HTTP API: routing, handlers and request/response mapping for the user resource.

pub mod app;
pub mod config;
pub mod middleware;
