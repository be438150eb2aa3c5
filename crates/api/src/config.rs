//! Server configuration from the process environment.

use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use userapi_infra::{ConfigError, StoreConfig};

pub const BIND_ADDR: &str = "BIND_ADDR";
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub bind_addr: SocketAddr,
    pub store: StoreConfig,
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let raw = lookup(BIND_ADDR)
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = raw.trim().parse::<SocketAddr>().map_err(|e| ConfigError::Invalid {
            name: BIND_ADDR,
            reason: format!("{raw:?}: {e}"),
        })?;

        Ok(Self {
            bind_addr,
            store: StoreConfig::from_lookup(lookup)?,
        })
    }
}

/// Load `.env` from the working directory or one of its parents into the
/// process environment. Variables that are already set are left alone.
///
/// Returns the file that was loaded, or `None` when there is no `.env`.
pub fn load_dotenv() -> Result<Option<PathBuf>, dotenvy::Error> {
    found(dotenvy::dotenv())
}

/// Like [`load_dotenv`], for an explicit file.
pub fn load_dotenv_from(path: &Path) -> Result<Option<PathBuf>, dotenvy::Error> {
    found(dotenvy::from_path(path).map(|()| path.to_path_buf()))
}

fn found(result: Result<PathBuf, dotenvy::Error>) -> Result<Option<PathBuf>, dotenvy::Error> {
    match result {
        Ok(path) => Ok(Some(path)),
        Err(e) if e.not_found() => Ok(None),
        Err(e) => Err(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use userapi_infra::StoreBackend;

    #[test]
    fn defaults_to_port_8080() {
        let cfg = ServerConfig::from_lookup(|name| (name == "USER_STORE").then(|| "memory".to_string()))
            .unwrap();
        assert_eq!(cfg.bind_addr, DEFAULT_BIND_ADDR.parse::<SocketAddr>().unwrap());
        assert_eq!(cfg.store.backend, StoreBackend::Memory);
    }

    #[test]
    fn rejects_malformed_bind_addr() {
        let err = ServerConfig::from_lookup(|name| match name {
            "BIND_ADDR" => Some("localhost".to_string()),
            "USER_STORE" => Some("memory".to_string()),
            _ => None,
        })
        .unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { name: BIND_ADDR, .. }));
    }

    fn scratch_env_file(tag: &str, contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("userapi-{}-{tag}.env", std::process::id()));
        std::fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn dotenv_file_fills_unset_variables() {
        let path = scratch_env_file("fill", "USERAPI_DOTENV_FILL=127.0.0.1:9090\n");

        assert_eq!(load_dotenv_from(&path).unwrap(), Some(path.clone()));
        assert_eq!(std::env::var("USERAPI_DOTENV_FILL").as_deref(), Ok("127.0.0.1:9090"));

        let cfg = ServerConfig::from_lookup(|name| match name {
            "BIND_ADDR" => std::env::var("USERAPI_DOTENV_FILL").ok(),
            "USER_STORE" => Some("memory".to_string()),
            _ => None,
        })
        .unwrap();
        assert_eq!(cfg.bind_addr, "127.0.0.1:9090".parse::<SocketAddr>().unwrap());

        std::fs::remove_file(path).unwrap();
    }

    #[test]
    fn dotenv_file_does_not_override_the_environment() {
        // PATH is always set for the test process.
        let before = std::env::var("PATH").unwrap();
        let path = scratch_env_file("keep", "PATH=/from/dotenv\n");

        load_dotenv_from(&path).unwrap();
        assert_eq!(std::env::var("PATH").unwrap(), before);

        std::fs::remove_file(path).unwrap();
    }

    #[test]
    fn missing_dotenv_file_is_not_an_error() {
        let path = std::env::temp_dir().join("userapi-no-such-file.env");
        assert_eq!(load_dotenv_from(&path).unwrap(), None);
    }
}
