//! Layered configuration loading.
//!
//! Sources, highest priority first:
//! 1. Environment variables with the `REWARDLY_` prefix, `__` separating
//!    nested sections (`REWARDLY_DATABASE__URL` maps to `database.url`)
//! 2. `rewardly.toml` in the working directory, when present
//! 3. Built-in defaults

mod database;
mod error;

pub use database::{DatabaseConfig, PgPool};
pub use error::ConfigError;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};

/// Prefix of environment variables read by [`AppConfig::figment`].
pub const ENV_PREFIX: &str = "REWARDLY_";

/// Configuration file read by [`AppConfig::figment`].
pub const CONFIG_FILE: &str = "rewardly.toml";

/// Application configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct AppConfig {
    /// Database connection settings.
    #[serde(default)]
    pub database: DatabaseConfig,
}

impl AppConfig {
    /// Loads and validates configuration from every source.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Figment`] when a source cannot be parsed, or
    /// [`ConfigError::InvalidValue`] when the merged settings are unusable.
    pub fn load() -> Result<Self, ConfigError> {
        let config: Self = Self::figment().extract()?;
        config.validate()?;
        tracing::debug!(
            max_connections = config.database.max_connections,
            "configuration loaded"
        );
        Ok(config)
    }

    /// Builds the provider chain without extracting it.
    #[must_use]
    pub fn figment() -> Figment {
        Figment::from(Serialized::defaults(Self::default()))
            .merge(Toml::file(CONFIG_FILE))
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    /// Checks every section.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] for the first unusable setting.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.database.validate()
    }
}
