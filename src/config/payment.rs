//! Payment configuration

use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;

use super::environment::Environment;
use super::error::ValidationError;
use crate::adapters::payrix::{GatewayConfig, DEFAULT_MAX_PAGES};

/// Payment configuration (Payrix)
#[derive(Debug, Clone, Deserialize)]
pub struct PaymentConfig {
    /// Payrix private API key
    #[serde(default)]
    pub private_token: Option<SecretString>,

    /// Explicit environment name; overrides `PAYRIX_ENV` and `APP_ENV`
    #[serde(default)]
    pub environment: Option<String>,

    /// Page ceiling for paginated searches
    #[serde(default = "default_max_pages")]
    pub max_pages: u32,

    /// Production base URL override
    pub live_url: Option<String>,

    /// Sandbox base URL override
    pub test_url: Option<String>,

    /// Risk API base URL override
    pub risk_url: Option<String>,
}

impl Default for PaymentConfig {
    fn default() -> Self {
        Self {
            private_token: None,
            environment: None,
            max_pages: default_max_pages(),
            live_url: None,
            test_url: None,
            risk_url: None,
        }
    }
}

impl PaymentConfig {
    /// Validate payment configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        let token_missing = self
            .private_token
            .as_ref()
            .map(|t| t.expose_secret().trim().is_empty())
            .unwrap_or(true);
        if token_missing {
            return Err(ValidationError::MissingRequired(
                "PAYRIX__PAYMENT__PRIVATE_TOKEN",
            ));
        }

        if self.max_pages == 0 {
            return Err(ValidationError::InvalidPageCeiling);
        }

        for (name, url) in [
            ("live_url", &self.live_url),
            ("test_url", &self.test_url),
            ("risk_url", &self.risk_url),
        ] {
            if let Some(url) = url {
                if !(url.starts_with("http://") || url.starts_with("https://")) {
                    return Err(ValidationError::InvalidBaseUrl(name));
                }
            }
        }

        Ok(())
    }

    /// Build the immutable client configuration for an environment.
    pub fn gateway_config(&self, environment: Environment) -> Result<GatewayConfig, ValidationError> {
        self.validate()?;

        let token = self
            .private_token
            .as_ref()
            .map(|t| t.expose_secret().clone())
            .ok_or(ValidationError::MissingRequired(
                "PAYRIX__PAYMENT__PRIVATE_TOKEN",
            ))?;

        let mut config =
            GatewayConfig::for_environment(token, environment).with_max_pages(self.max_pages);
        if let Some(url) = &self.live_url {
            config = config.with_live_url(url);
        }
        if let Some(url) = &self.test_url {
            config = config.with_test_url(url);
        }
        if let Some(url) = &self.risk_url {
            config = config.with_risk_url(url);
        }

        Ok(config)
    }
}

fn default_max_pages() -> u32 {
    DEFAULT_MAX_PAGES
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_token(token: &str) -> PaymentConfig {
        PaymentConfig {
            private_token: Some(SecretString::new(token.to_string())),
            ..Default::default()
        }
    }

    #[test]
    fn test_validation_missing_token() {
        let config = PaymentConfig::default();
        assert_eq!(
            config.validate(),
            Err(ValidationError::MissingRequired(
                "PAYRIX__PAYMENT__PRIVATE_TOKEN"
            ))
        );
    }

    #[test]
    fn test_validation_blank_token() {
        assert!(with_token("   ").validate().is_err());
    }

    #[test]
    fn test_validation_zero_page_ceiling() {
        let config = PaymentConfig {
            max_pages: 0,
            ..with_token("abc")
        };
        assert_eq!(config.validate(), Err(ValidationError::InvalidPageCeiling));
    }

    #[test]
    fn test_validation_bad_url_override() {
        let config = PaymentConfig {
            test_url: Some("localhost:8080".to_string()),
            ..with_token("abc")
        };
        assert_eq!(
            config.validate(),
            Err(ValidationError::InvalidBaseUrl("test_url"))
        );
    }

    #[test]
    fn test_validation_valid_config() {
        assert!(with_token("abc").validate().is_ok());
    }

    #[test]
    fn test_gateway_config_follows_environment() {
        let config = PaymentConfig {
            test_url: Some("http://127.0.0.1:9000".to_string()),
            max_pages: 7,
            ..with_token("abc")
        };

        let sandbox = config.gateway_config(Environment::Development).unwrap();
        assert!(sandbox.is_test());
        assert_eq!(sandbox.base_url(), "http://127.0.0.1:9000");
        assert_eq!(sandbox.max_pages(), 7);

        let live = config.gateway_config(Environment::Production).unwrap();
        assert!(!live.is_test());
        assert_eq!(live.base_url(), "https://api.payrix.com");
    }
}
