//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Invalid port number")]
    InvalidPort,

    #[error("Invalid request timeout")]
    InvalidTimeout,

    #[error("Invalid socket address: {0}")]
    InvalidSocketAddr(String),

    #[error("Name length bounds must satisfy 1 <= min <= max")]
    InvalidNameBounds,

    #[error("Session capacity ceiling must be between 1 and 100")]
    InvalidCapacityCeiling,

    #[error("Strict genre policy requires at least one allowed genre")]
    EmptyGenreList,

    #[error("Allowed genre '{0}' must be between 3 and 40 characters")]
    InvalidAllowedGenre(String),

    #[error("Token validity must be between 1 and 720 hours")]
    InvalidTokenValidity,
}
