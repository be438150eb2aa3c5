//! Data access for the `users` table.
//!
//! Handlers depend on the [`UserStore`] capability only; the Postgres adapter
//! and the in-memory fake are interchangeable behind it.

pub mod in_memory;
pub mod postgres;
pub mod r#trait;

pub use in_memory::InMemoryUserStore;
pub use postgres::PostgresUserStore;
pub use r#trait::{StoreError, UserStore};
