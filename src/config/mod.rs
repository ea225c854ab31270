//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `PAYRIX` prefix and nested values use double underscores as separators.
//!
//! The deployment environment is resolved once, at load time, from the most
//! specific source available:
//!
//! 1. `PAYRIX__PAYMENT__ENVIRONMENT`
//! 2. `PAYRIX_ENV`
//! 3. `APP_ENV`
//! 4. `development`
//!
//! # Example
//!
//! ```no_run
//! use payrix_gateway::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.logging.init();
//! let gateway_config = config.gateway_config().expect("Invalid configuration");
//! ```

mod environment;
mod error;
mod logging;
mod payment;

pub use environment::Environment;
pub use error::{ConfigError, ValidationError};
pub use logging::LoggingConfig;
pub use payment::PaymentConfig;

use serde::Deserialize;

use crate::adapters::payrix::GatewayConfig;

/// Root application configuration
///
/// Load using [`AppConfig::load()`] which reads from environment variables.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Payment configuration (Payrix)
    #[serde(default)]
    pub payment: PaymentConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Resolved deployment environment
    #[serde(skip)]
    pub environment: Environment,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `PAYRIX` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    /// 5. Resolves the deployment environment
    ///
    /// # Environment Variable Format
    ///
    /// - `PAYRIX__PAYMENT__PRIVATE_TOKEN=...` -> `payment.private_token = ...`
    /// - `PAYRIX__LOGGING__FORMAT=json` -> `logging.format = json`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let mut config: AppConfig = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("PAYRIX")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        config.environment = Environment::resolve([
            config.payment.environment.clone(),
            std::env::var("PAYRIX_ENV").ok(),
            std::env::var("APP_ENV").ok(),
        ]);

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.payment.validate()?;
        self.logging.validate()?;
        Ok(())
    }

    /// Validated client configuration for the resolved environment.
    pub fn gateway_config(&self) -> Result<GatewayConfig, ConfigError> {
        self.validate()?;
        Ok(self.payment.gateway_config(self.environment)?)
    }

    /// Check if running in production environment
    pub fn is_production(&self) -> bool {
        self.environment.is_production()
    }
}
