//! Configuration error types.

use diesel::r2d2::PoolError;
use thiserror::Error;

/// Errors raised while loading configuration or opening the connection pool.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Figment could not merge or extract the configuration.
    #[error("configuration error: {0}")]
    Figment(Box<figment::Error>),

    /// A configuration field has an unusable value.
    #[error("invalid configuration value for '{field}': {reason}")]
    InvalidValue {
        /// Dotted path of the offending field.
        field: &'static str,
        /// Human-readable description of the problem.
        reason: String,
    },

    /// The database connection pool could not be built.
    #[error("failed to build database pool: {0}")]
    Pool(#[from] PoolError),
}

impl From<figment::Error> for ConfigError {
    fn from(err: figment::Error) -> Self {
        Self::Figment(Box::new(err))
    }
}
