use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;

use userapi_core::{User, UserFields, UserId};

/// User store operation error.
///
/// These are **infrastructure errors** (connectivity, statement failures,
/// constraint violations). "No such row" is not an error: lookups return
/// `Option`, mutations return an affected-row count.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// A connection to the store could not be opened or was lost.
    #[error("store connection failed: {0}")]
    Connect(String),

    /// The store rejected the row (unique, not-null, check, ...).
    #[error("constraint violation: {0}")]
    Constraint(String),

    /// Any other statement or row-mapping failure.
    #[error("query failed: {0}")]
    Query(String),
}

/// Single-row CRUD over the `users` table.
///
/// ## Connection scope
///
/// Each call owns whatever session it needs for its own duration and releases
/// it before returning, on success and on failure alike. Nothing is shared
/// across calls, so implementations hold no per-request state.
///
/// ## Semantics
///
/// - `insert` returns the id assigned by the store.
/// - `find_by_id` returns `Ok(None)` when no row matches.
/// - `find_all` returns rows in the store's natural order.
/// - `update` overwrites every writable field and returns the affected count (0 or 1).
/// - `delete` returns the affected count (0 or 1); deleting twice is not an error.
#[async_trait]
pub trait UserStore: Send + Sync {
    async fn insert(&self, user: &UserFields) -> Result<UserId, StoreError>;

    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, StoreError>;

    async fn find_all(&self) -> Result<Vec<User>, StoreError>;

    async fn update(&self, id: UserId, user: &UserFields) -> Result<u64, StoreError>;

    async fn delete(&self, id: UserId) -> Result<u64, StoreError>;

    /// Check that the store is reachable.
    async fn ping(&self) -> Result<(), StoreError>;
}

#[async_trait]
impl<S> UserStore for Arc<S>
where
    S: UserStore + ?Sized,
{
    async fn insert(&self, user: &UserFields) -> Result<UserId, StoreError> {
        (**self).insert(user).await
    }

    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, StoreError> {
        (**self).find_by_id(id).await
    }

    async fn find_all(&self) -> Result<Vec<User>, StoreError> {
        (**self).find_all().await
    }

    async fn update(&self, id: UserId, user: &UserFields) -> Result<u64, StoreError> {
        (**self).update(id, user).await
    }

    async fn delete(&self, id: UserId) -> Result<u64, StoreError> {
        (**self).delete(id).await
    }

    async fn ping(&self) -> Result<(), StoreError> {
        (**self).ping().await
    }
}
