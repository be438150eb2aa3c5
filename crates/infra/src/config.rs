//! Store configuration loaded from the process environment.

use std::sync::Arc;

use thiserror::Error;

use crate::user_store::{InMemoryUserStore, PostgresUserStore, StoreError, UserStore};

/// Primary connection string variable.
pub const DATABASE_URL: &str = "DATABASE_URL";
/// Accepted as a fallback for `DATABASE_URL`.
pub const POSTGRES_URL: &str = "POSTGRES_URL";
/// Selects the backend: `postgres` (default) or `memory`.
pub const USER_STORE: &str = "USER_STORE";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("DATABASE_URL (or POSTGRES_URL) must be set when USER_STORE=postgres")]
    MissingDatabaseUrl,

    #[error("unknown USER_STORE value {0:?}; expected \"postgres\" or \"memory\"")]
    UnknownBackend(String),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("invalid {name}: {reason}")]
    Invalid { name: &'static str, reason: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreBackend {
    Postgres { url: String },
    Memory,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    pub backend: StoreBackend,
}

impl StoreConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build from an arbitrary variable lookup (tests pass a map).
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        let backend = match non_empty(USER_STORE).as_deref().map(str::to_lowercase) {
            None => Self::postgres(&non_empty)?,
            Some(kind) if kind == "postgres" => Self::postgres(&non_empty)?,
            Some(kind) if kind == "memory" => StoreBackend::Memory,
            Some(other) => return Err(ConfigError::UnknownBackend(other)),
        };

        Ok(Self { backend })
    }

    fn postgres<F>(lookup: &F) -> Result<StoreBackend, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let url = lookup(DATABASE_URL)
            .or_else(|| lookup(POSTGRES_URL))
            .ok_or(ConfigError::MissingDatabaseUrl)?;
        Ok(StoreBackend::Postgres { url })
    }

    /// Construct the configured store.
    ///
    /// For Postgres this only parses the connection string; connections are
    /// opened per operation.
    pub fn build_store(&self) -> Result<Arc<dyn UserStore>, ConfigError> {
        match &self.backend {
            StoreBackend::Postgres { url } => Ok(Arc::new(PostgresUserStore::from_url(url)?)),
            StoreBackend::Memory => Ok(Arc::new(InMemoryUserStore::new())),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn defaults_to_postgres_and_requires_url() {
        assert_eq!(
            StoreConfig::from_lookup(lookup(&[])),
            Err(ConfigError::MissingDatabaseUrl)
        );
    }

    #[test]
    fn database_url_wins_over_postgres_url() {
        let cfg = StoreConfig::from_lookup(lookup(&[
            (DATABASE_URL, "postgres://a@db/one"),
            (POSTGRES_URL, "postgres://b@db/two"),
        ]))
        .unwrap();
        assert_eq!(
            cfg.backend,
            StoreBackend::Postgres { url: "postgres://a@db/one".to_string() }
        );
    }

    #[test]
    fn postgres_url_is_accepted_as_fallback() {
        let cfg = StoreConfig::from_lookup(lookup(&[(POSTGRES_URL, "postgres://b@db/two")])).unwrap();
        assert_eq!(
            cfg.backend,
            StoreBackend::Postgres { url: "postgres://b@db/two".to_string() }
        );
    }

    #[test]
    fn memory_backend_needs_no_url() {
        let cfg = StoreConfig::from_lookup(lookup(&[(USER_STORE, "Memory")])).unwrap();
        assert_eq!(cfg.backend, StoreBackend::Memory);
        assert!(cfg.build_store().is_ok());
    }

    #[test]
    fn unknown_backend_is_rejected() {
        assert_eq!(
            StoreConfig::from_lookup(lookup(&[(USER_STORE, "mysql")])),
            Err(ConfigError::UnknownBackend("mysql".to_string()))
        );
    }

    #[test]
    fn malformed_url_fails_when_building_store() {
        let cfg = StoreConfig::from_lookup(lookup(&[(DATABASE_URL, "nonsense")])).unwrap();
        assert!(matches!(cfg.build_store(), Err(ConfigError::Store(StoreError::Connect(_)))));
    }
}
