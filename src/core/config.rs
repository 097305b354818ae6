//! Configuration management for the MCP server.
//!
//! This module provides a centralized configuration structure populated from
//! environment variables (and a `.env` file, if present) on top of defaults.

use super::error::{Error, Result};
use super::transport::TransportConfig;
use crate::domains::gigapipe::{BackendConfig, ConfigSource};
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Selects how backend settings are resolved.
pub const CONFIG_MODE_VAR: &str = "GIGAPIPE_CONFIG_MODE";

/// Main configuration structure for the MCP server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server identification and metadata.
    pub server: ServerConfig,

    /// Logging configuration.
    pub logging: LoggingConfig,

    /// Transport configuration.
    pub transport: TransportConfig,

    /// Gigapipe backend configuration.
    pub backend: ConfigSource,
}

/// Server identification configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// The name of the server as reported to clients.
    pub name: String,

    /// The version of the server.
    pub version: String,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "trace").
    pub level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                name: "gigapipe-mcp".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            logging: LoggingConfig {
                level: "info".to_string(),
            },
            transport: TransportConfig::default(),
            backend: ConfigSource::default(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Server settings use the `MCP_` prefix (`MCP_SERVER_NAME`,
    /// `MCP_LOG_LEVEL`, `MCP_TRANSPORT`...). Backend settings use the
    /// `GIGAPIPE_` prefix and, unless `GIGAPIPE_CONFIG_MODE=startup`, are
    /// re-read on every tool call.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let mut config = Self::default();

        if let Ok(name) = std::env::var("MCP_SERVER_NAME") {
            config.server.name = name;
        }

        if let Ok(level) = std::env::var("MCP_LOG_LEVEL") {
            config.logging.level = level;
        }

        config.transport = TransportConfig::from_env();
        config.backend = backend_source(std::env::var(CONFIG_MODE_VAR).ok().as_deref());

        config
    }

    /// Check settings that would make every tool call fail.
    ///
    /// With per-invocation resolution only the environment at startup is
    /// checked; later changes are not validated.
    pub fn validate(&self) -> Result<()> {
        if self.server.name.trim().is_empty() {
            return Err(Error::config("server name must not be empty"));
        }

        let backend = self.backend.current();
        if backend.host.contains("://") {
            return Err(Error::config(format!(
                "GIGAPIPE_HOST must not include a scheme (got '{}'); \
                 https is selected automatically when credentials are set",
                backend.host
            )));
        }

        if !backend.username.is_empty() && backend.password.is_empty() {
            warn!(
                "GIGAPIPE_USERNAME is set without GIGAPIPE_PASSWORD; \
                 requests will use plain http without authentication"
            );
        }

        if let Ok(mode) = std::env::var(CONFIG_MODE_VAR) {
            if parse_mode(&mode).is_none() {
                warn!(
                    "Unknown {} '{}', reading backend settings on every call",
                    CONFIG_MODE_VAR, mode
                );
            }
        }

        Ok(())
    }

    /// One-line description of where backend settings come from.
    pub fn backend_summary(&self) -> String {
        match &self.backend {
            ConfigSource::Fixed(backend) => {
                format!("Backend settings fixed at startup: {}", backend.base_url())
            }
            ConfigSource::PerInvocation => {
                "Backend settings read from the environment on every call".to_string()
            }
        }
    }
}

/// Whether a `GIGAPIPE_CONFIG_MODE` value asks for startup resolution.
/// `None` for values that are not recognized.
fn parse_mode(mode: &str) -> Option<bool> {
    match mode.to_lowercase().as_str() {
        "startup" => Some(true),
        "" | "per-invocation" => Some(false),
        _ => None,
    }
}

/// Pick the backend config source for a `GIGAPIPE_CONFIG_MODE` value.
///
/// Unknown values fall back to per-invocation resolution; `validate` reports
/// them once logging is up.
fn backend_source(mode: Option<&str>) -> ConfigSource {
    if mode.and_then(parse_mode).unwrap_or(false) {
        ConfigSource::Fixed(BackendConfig::resolve())
    } else {
        ConfigSource::PerInvocation
    }
}
