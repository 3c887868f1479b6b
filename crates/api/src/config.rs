//! Application configuration loaded from environment variables.

use projections::{DEFAULT_MAX_PAGE_SIZE, ReplayPolicy};
use thiserror::Error;

/// Errors raised for environment variables that are set but unusable.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid value for {name}: {value:?} ({reason})")]
    InvalidVar {
        name: &'static str,
        value: String,
        reason: String,
    },
}

/// Output format of the tracing subscriber.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

/// Server configuration with sensible defaults.
///
/// Reads from environment variables:
/// - `HOST` — bind address (default: `"0.0.0.0"`)
/// - `PORT` — listen port (default: `3000`)
/// - `RUST_LOG` — tracing filter directive (default: `"info"`)
/// - `LOG_FORMAT` — `text` or `json` (default: `text`)
/// - `DATABASE_URL` — PostgreSQL URL; unset means the in-memory view store
/// - `DATABASE_MAX_CONNECTIONS` — pool size (default: `5`)
/// - `MAX_PAGE_SIZE` — largest page a list query may request (default: `1000`)
/// - `CREATION_REPLAY_POLICY` — `preserve` or `overwrite` (default: `preserve`)
#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub log_level: String,
    pub log_format: LogFormat,
    pub database_url: Option<String>,
    pub database_max_connections: u32,
    pub max_page_size: u64,
    pub replay_policy: ReplayPolicy,
}

impl Config {
    /// Loads configuration from environment variables, falling back to defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Loads configuration through `lookup`, which returns the value of a
    /// variable if it is set.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let log_format = match lookup("LOG_FORMAT") {
            None => defaults.log_format,
            Some(value) => match value.to_ascii_lowercase().as_str() {
                "text" => LogFormat::Text,
                "json" => LogFormat::Json,
                _ => {
                    return Err(ConfigError::InvalidVar {
                        name: "LOG_FORMAT",
                        value,
                        reason: "expected \"text\" or \"json\"".to_string(),
                    });
                }
            },
        };

        let max_page_size = parse_var(&lookup, "MAX_PAGE_SIZE", defaults.max_page_size)?;
        if max_page_size == 0 {
            return Err(ConfigError::InvalidVar {
                name: "MAX_PAGE_SIZE",
                value: "0".to_string(),
                reason: "must be positive".to_string(),
            });
        }

        Ok(Self {
            host: lookup("HOST").unwrap_or(defaults.host),
            port: parse_var(&lookup, "PORT", defaults.port)?,
            log_level: lookup("RUST_LOG").unwrap_or(defaults.log_level),
            log_format,
            database_url: lookup("DATABASE_URL").filter(|url| !url.is_empty()),
            database_max_connections: parse_var(
                &lookup,
                "DATABASE_MAX_CONNECTIONS",
                defaults.database_max_connections,
            )?,
            max_page_size,
            replay_policy: parse_var(&lookup, "CREATION_REPLAY_POLICY", defaults.replay_policy)?,
        })
    }

    /// Returns the `"host:port"` bind address string.
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_var<T>(
    lookup: &impl Fn(&str) -> Option<String>,
    name: &'static str,
    default: T,
) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match lookup(name) {
        None => Ok(default),
        Some(value) => value.parse().map_err(|e: T::Err| ConfigError::InvalidVar {
            name,
            reason: e.to_string(),
            value,
        }),
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
            log_level: "info".to_string(),
            log_format: LogFormat::Text,
            database_url: None,
            database_max_connections: 5,
            max_page_size: DEFAULT_MAX_PAGE_SIZE,
            replay_policy: ReplayPolicy::PreserveExisting,
        }
    }
}
