//! Receipt API configuration module.
//!
//! Configuration is loaded from `APP_*` environment variables with fallback
//! to defaults, e.g. `APP_PORT=9000`, `APP_REQUEST_TIMEOUT_SECS=30`.

use std::time::Duration;

use config::{Config, Environment};
use serde::{Deserialize, Serialize};

/// Prefix of every environment variable read by [`ApiConfig::load`].
pub const ENV_PREFIX: &str = "APP";

/// Receipt API configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Interface to bind
    pub host: String,

    /// HTTP server port
    pub port: u16,

    /// Per-request deadline; slower requests get 408
    pub request_timeout_secs: u64,

    /// How long in-flight requests may drain after a shutdown signal
    pub shutdown_timeout_secs: u64,

    /// Emit logs as JSON lines instead of human-readable text
    pub json_logs: bool,
}

impl Default for ApiConfig {
    fn default() -> Self {
        ApiConfig {
            host: "0.0.0.0".to_string(),
            port: 8080,
            request_timeout_secs: 60,
            shutdown_timeout_secs: 10,
            json_logs: true,
        }
    }
}

impl ApiConfig {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(Environment::with_prefix(ENV_PREFIX))
    }

    /// Load configuration from the given environment source, layered over
    /// the defaults.
    pub fn load_from(environment: Environment) -> Result<Self, ConfigError> {
        let config: ApiConfig = Config::builder()
            .add_source(Config::try_from(&ApiConfig::default())?)
            .add_source(environment.try_parsing(true))
            .build()?
            .try_deserialize()?;

        config.validate()?;
        Ok(config)
    }

    /// Reject values the server cannot run with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.host.trim().is_empty() {
            return Err(ConfigError::InvalidValue("host".to_string()));
        }
        if self.port == 0 {
            return Err(ConfigError::InvalidValue("port".to_string()));
        }
        if self.request_timeout_secs == 0 {
            return Err(ConfigError::InvalidValue("request_timeout_secs".to_string()));
        }
        if self.shutdown_timeout_secs == 0 {
            return Err(ConfigError::InvalidValue("shutdown_timeout_secs".to_string()));
        }
        Ok(())
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    pub fn shutdown_timeout(&self) -> Duration {
        Duration::from_secs(self.shutdown_timeout_secs)
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),

    #[error("Failed to load configuration: {0}")]
    Load(#[from] config::ConfigError),
}
