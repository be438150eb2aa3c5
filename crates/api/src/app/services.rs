use std::sync::Arc;

use userapi_infra::UserStore;

/// Capabilities handed to every handler via `Extension<Arc<AppServices>>`.
///
/// Handlers see the store only through the `UserStore` trait, so the Postgres
/// adapter and the in-memory fake are interchangeable.
#[derive(Clone)]
pub struct AppServices {
    pub users: Arc<dyn UserStore>,
}

impl AppServices {
    pub fn new(users: Arc<dyn UserStore>) -> Self {
        Self { users }
    }
}
