use axum::{
    routing::{delete, get, post},
    Router,
};

pub mod common;
pub mod system;
pub mod users;

/// Static route table for the user resource.
///
/// Every route also answers `OPTIONS` with a headers-only CORS preflight, and
/// any other method with a JSON 405.
pub fn router() -> Router {
    Router::new()
        .route(
            "/api/user/:id",
            get(users::get_user)
                .put(users::update_user)
                .options(|| async { common::preflight("GET, PUT") })
                .fallback(|| async { common::method_not_allowed("GET, PUT") }),
        )
        .route(
            "/api/user/",
            get(users::list_users)
                .options(|| async { common::preflight("GET") })
                .fallback(|| async { common::method_not_allowed("GET") }),
        )
        .route(
            "/api/newuser",
            post(users::create_user)
                .options(|| async { common::preflight("POST") })
                .fallback(|| async { common::method_not_allowed("POST") }),
        )
        .route(
            "/api/deleteuser/:id",
            delete(users::delete_user)
                .options(|| async { common::preflight("DELETE") })
                .fallback(|| async { common::method_not_allowed("DELETE") }),
        )
}
