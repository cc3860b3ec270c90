//! Service configuration.
//!
//! Read once at start-up from the environment:
//!
//! - `FORGE_PORT` (falls back to `PORT`, default 8080)
//! - `FORGE_STORE_DIR` (default `Classes`)
//! - `FORGE_REMOVE_TIMEOUT_MS` (default 1000)
//! - `FORGE_LOG_FORMAT` (`json` for JSON logs, anything else for text)

use std::path::PathBuf;
use std::time::Duration;

use forge_store::{StoreConfig, DEFAULT_REMOVE_TIMEOUT};

/// Default directory for stored declarations.
pub const DEFAULT_STORE_DIR: &str = "Classes";

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

/// Service configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Port to bind the HTTP server to.
    pub port: u16,
    /// Directory of the declaration store.
    pub store_dir: PathBuf,
    /// Deadline for removing a declaration's artifacts.
    pub remove_timeout: Duration,
    pub log_format: LogFormat,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            port: 8080,
            store_dir: PathBuf::from(DEFAULT_STORE_DIR),
            remove_timeout: DEFAULT_REMOVE_TIMEOUT,
            log_format: LogFormat::Text,
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let port = match lookup("FORGE_PORT").or_else(|| lookup("PORT")) {
            Some(raw) => raw
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidNumber("FORGE_PORT".into(), raw))?,
            None => defaults.port,
        };
        let store_dir = lookup("FORGE_STORE_DIR")
            .filter(|dir| !dir.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or(defaults.store_dir);
        let remove_timeout = match lookup("FORGE_REMOVE_TIMEOUT_MS") {
            Some(raw) => Duration::from_millis(
                raw.trim()
                    .parse()
                    .map_err(|_| ConfigError::InvalidNumber("FORGE_REMOVE_TIMEOUT_MS".into(), raw))?,
            ),
            None => defaults.remove_timeout,
        };
        let log_format = match lookup("FORGE_LOG_FORMAT") {
            Some(raw) if raw.trim().eq_ignore_ascii_case("json") => LogFormat::Json,
            _ => LogFormat::Text,
        };

        Ok(Self {
            port,
            store_dir,
            remove_timeout,
            log_format,
        })
    }

    /// Store settings derived from this configuration.
    pub fn store_config(&self) -> StoreConfig {
        StoreConfig::new(&self.store_dir).with_remove_timeout(self.remove_timeout)
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} must be a non-negative integer, got \"{1}\"")]
    InvalidNumber(String, String),
}
