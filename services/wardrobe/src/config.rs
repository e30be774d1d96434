//! Service configuration
//!
//! Defaults first, then `WARDROBE_*` environment variables.

use config::{Config, Environment};
use serde::Deserialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    Load(#[from] config::ConfigError),
}

/// Where session records are kept
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionBackend {
    Redis,
    /// Process memory; sessions are lost on restart
    Memory,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServiceConfig {
    pub host: String,
    pub port: u16,
    pub session_backend: SessionBackend,
    pub log_level: String,
}

impl ServiceConfig {
    /// Load configuration from the environment
    ///
    /// # Environment Variables
    ///
    /// * `WARDROBE_HOST` - Bind address (default: 0.0.0.0)
    /// * `WARDROBE_PORT` - Listen port (default: 3001)
    /// * `WARDROBE_SESSION_BACKEND` - `redis` or `memory` (default: redis)
    /// * `WARDROBE_LOG_LEVEL` - Default log filter (default: info)
    pub fn from_env() -> Result<Self, ConfigError> {
        let config = Config::builder()
            .set_default("host", "0.0.0.0")?
            .set_default("port", 3001)?
            .set_default("session_backend", "redis")?
            .set_default("log_level", "info")?
            .add_source(Environment::with_prefix("WARDROBE").try_parsing(true))
            .build()?;

        Ok(config.try_deserialize()?)
    }

    /// Address to bind the listener to
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
