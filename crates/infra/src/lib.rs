//! Infrastructure layer: user persistence and store configuration.

pub mod config;
pub mod user_store;

pub use config::{ConfigError, StoreBackend, StoreConfig};
pub use user_store::{InMemoryUserStore, PostgresUserStore, StoreError, UserStore};
