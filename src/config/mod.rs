//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `SOCKETIO_EMITTER` prefix and nested values use double underscores as separators.
//!
//! # Example
//!
//! ```no_run
//! use socketio_emitter::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Publishing with prefix {}", config.emitter.prefix);
//! ```

mod emitter;
mod error;
mod redis;

pub use emitter::EmitterConfig;
pub use error::{ConfigError, ValidationError};
pub use redis::RedisConfig;

use serde::Deserialize;

/// Root application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Emitter configuration (channel prefix)
    #[serde(default)]
    pub emitter: EmitterConfig,

    /// Redis configuration (pub/sub bus)
    pub redis: RedisConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `SOCKETIO_EMITTER` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `SOCKETIO_EMITTER__EMITTER__PREFIX=myapp` -> `emitter.prefix = myapp`
    /// - `SOCKETIO_EMITTER__REDIS__URL=...` -> `redis.url = ...`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if:
    /// - Required environment variables are missing
    /// - Values cannot be parsed into expected types
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("SOCKETIO_EMITTER")
                    .prefix_separator("__")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.emitter.validate()?;
        self.redis.validate()?;
        Ok(())
    }
}
