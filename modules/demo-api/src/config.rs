//! Layered application configuration.
//!
//! Precedence, lowest to highest: built-in defaults, YAML file, environment
//! (`DEMO_API__*` with `__` separating nesting levels), CLI overrides.

use std::net::{IpAddr, SocketAddr};
use std::path::Path;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Yaml},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Environment variable prefix, e.g. `DEMO_API__SERVER__PORT=9000`.
const ENV_PREFIX: &str = "DEMO_API__";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse configuration: {0}")]
    Parse(#[from] Box<figment::Error>),

    #[error("invalid bind address `{0}`: host must be an IP address")]
    InvalidBindAddr(String),

    #[error("failed to render configuration: {0}")]
    Render(#[from] serde_json::Error),
}

/// HTTP listener settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Upper bound on handler time; requests past it get a 408.
    pub request_timeout_secs: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_owned(),
            port: 8000,
            request_timeout_secs: 30,
        }
    }
}

impl ServerConfig {
    /// Resolve the configured host/port into a socket address.
    ///
    /// # Errors
    /// Returns `ConfigError::InvalidBindAddr` if the host is not an IP
    /// address literal.
    pub fn bind_addr(&self) -> Result<SocketAddr, ConfigError> {
        let ip: IpAddr = self
            .host
            .parse()
            .map_err(|_| ConfigError::InvalidBindAddr(format!("{}:{}", self.host, self.port)))?;
        Ok(SocketAddr::new(ip, self.port))
    }
}

/// Output format for log lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

/// Logging settings consumed by [`crate::logging::init_logging`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// tracing env-filter directive, e.g. `info` or `demo_api=debug`.
    pub level: String,
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_owned(),
            format: LogFormat::Text,
        }
    }
}

/// Root configuration for the demo server.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub logging: LoggingConfig,
}

/// CLI flags that override file/env configuration.
///
/// Kept free of clap types so the binary crate owns argument parsing.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub port: Option<u16>,
    /// Count of `-v` flags: 1 info, 2 debug, 3+ trace. Zero keeps the
    /// configured level.
    pub verbose: u8,
}

impl AppConfig {
    /// Load configuration with the documented precedence. A `None` path
    /// skips the YAML layer entirely.
    ///
    /// # Errors
    /// Returns an error if the YAML file or environment values fail to
    /// parse into the config shape.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));
        if let Some(path) = path {
            figment = figment.merge(Yaml::file(path));
        }
        figment = figment.merge(Env::prefixed(ENV_PREFIX).split("__"));
        figment.extract().map_err(|e| ConfigError::Parse(Box::new(e)))
    }

    pub fn apply_cli_overrides(&mut self, overrides: &CliOverrides) {
        if let Some(port) = overrides.port {
            self.server.port = port;
        }
        match overrides.verbose {
            0 => {}
            1 => self.logging.level = "info".to_owned(),
            2 => self.logging.level = "debug".to_owned(),
            _ => self.logging.level = "trace".to_owned(),
        }
    }

    /// Render the effective configuration as pretty-printed JSON.
    ///
    /// # Errors
    /// Returns an error if serialization fails.
    pub fn to_json_pretty(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
