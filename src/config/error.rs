//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),

    #[error("Seed file {path} could not be read: {source}")]
    SeedFileUnreadable {
        path: String,
        source: std::io::Error,
    },

    #[error("Seed file {path} is not valid JSON: {source}")]
    SeedFileInvalid {
        path: String,
        source: serde_json::Error,
    },
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Required configuration missing: {0}")]
    MissingRequired(&'static str),

    #[error("Invalid port number")]
    InvalidPort,

    #[error("Invalid bind address: {0}")]
    InvalidBindAddress(String),

    #[error("Invalid request timeout")]
    InvalidTimeout,

    #[error("Invalid database URL format")]
    InvalidDatabaseUrl,

    #[error("Pool min_connections exceeds max_connections")]
    InvalidPoolSize,

    #[error("Pool size exceeds maximum allowed (100)")]
    PoolSizeTooLarge,

    #[error("Statement timeout must be between 1 and 300 seconds")]
    InvalidStatementTimeout,

    #[error(
        "Request timeout ({request}s) must exceed acquire timeout plus statement timeout ({store}s)"
    )]
    RequestTimeoutTooShort { request: u64, store: u64 },
}
