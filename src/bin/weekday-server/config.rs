//! Server configuration.
//!
//! # Data Flow
//! ```text
//! config file (TOML)
//!     → load_config (read & deserialize)
//!     → ServerConfig::validate (semantic checks)
//!     → ServerConfig (immutable for the life of the process)
//! ```
//!
//! # Design Decisions
//! - Every field has a default so an empty file, or no file, is a valid config
//! - Validation separates syntactic (serde) from semantic checks

use std::net::SocketAddr;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation failed: {0}")]
    Validation(String),
}

/// Root configuration for the example server.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct ServerConfig {
    /// Listener configuration.
    pub listener: ListenerConfig,

    /// Log output settings.
    pub logging: LoggingConfig,
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ListenerConfig {
    /// Bind address (e.g., "127.0.0.1:8080").
    pub bind_address: String,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            bind_address: "127.0.0.1:8080".to_string(),
        }
    }
}

/// Log output settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directives, overridden by `RUST_LOG` when set.
    pub level: String,

    /// Output format.
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "weekday_server=info,route_scheme=debug,tower_http=info".to_string(),
            format: LogFormat::Pretty,
        }
    }
}

/// Log line format.
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable, for development.
    #[default]
    Pretty,
    /// One JSON object per line, for log aggregation.
    Json,
}

impl ServerConfig {
    /// Check values serde cannot.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.bind_address()?;
        if self.logging.level.trim().is_empty() {
            return Err(ConfigError::Validation("logging.level must not be empty".to_string()));
        }
        Ok(())
    }

    /// The listener address as a socket address.
    pub fn bind_address(&self) -> Result<SocketAddr, ConfigError> {
        self.listener.bind_address.parse().map_err(|_| {
            ConfigError::Validation(format!(
                "listener.bind_address `{}` is not a socket address",
                self.listener.bind_address
            ))
        })
    }
}

/// Load and validate configuration from a TOML file.
pub fn load_config(path: &Path) -> Result<ServerConfig, ConfigError> {
    let content = std::fs::read_to_string(path)?;
    let config: ServerConfig = toml::from_str(&content)?;

    config.validate()?;

    Ok(config)
}
