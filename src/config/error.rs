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
    #[error("Required configuration missing: {0}")]
    MissingRequired(&'static str),

    #[error("Pagination page ceiling must be at least 1")]
    InvalidPageCeiling,

    #[error("Invalid base URL for {0}: must start with http:// or https://")]
    InvalidBaseUrl(&'static str),

    #[error("Invalid log filter directive: {0}")]
    InvalidLogFilter(String),
}
