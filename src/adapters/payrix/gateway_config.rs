//! Payrix client configuration.

use secrecy::{ExposeSecret, SecretString};

use crate::config::Environment;

/// Production REST API.
pub const LIVE_URL: &str = "https://api.payrix.com";

/// Sandbox REST API.
pub const TEST_URL: &str = "https://test-api.payrix.com";

/// Versioned API hosting the risk decision service (production only).
pub const RISK_URL: &str = "https://apiv2.payrix.com";

/// Default ceiling on pages fetched by a single paginated call.
pub const DEFAULT_MAX_PAGES: u32 = 1_000;

/// Payrix API configuration.
///
/// Immutable once handed to the gateway.
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    /// Private API key.
    private_token: SecretString,

    /// Route calls to the sandbox.
    test: bool,

    live_url: String,
    test_url: String,
    risk_url: String,

    /// Maximum pages `get_all` will request before giving up.
    max_pages: u32,
}

impl GatewayConfig {
    /// Create a new configuration.
    pub fn new(private_token: impl Into<String>, test: bool) -> Self {
        Self {
            private_token: SecretString::new(private_token.into()),
            test,
            live_url: LIVE_URL.to_string(),
            test_url: TEST_URL.to_string(),
            risk_url: RISK_URL.to_string(),
            max_pages: DEFAULT_MAX_PAGES,
        }
    }

    /// Create a configuration whose mode follows the environment.
    pub fn for_environment(private_token: impl Into<String>, environment: Environment) -> Self {
        Self::new(private_token, environment.is_test_mode())
    }

    /// Override the production base URL (for testing).
    pub fn with_live_url(mut self, url: impl Into<String>) -> Self {
        self.live_url = url.into();
        self
    }

    /// Override the sandbox base URL (for testing).
    pub fn with_test_url(mut self, url: impl Into<String>) -> Self {
        self.test_url = url.into();
        self
    }

    /// Override the risk API base URL (for testing).
    pub fn with_risk_url(mut self, url: impl Into<String>) -> Self {
        self.risk_url = url.into();
        self
    }

    /// Set the pagination page ceiling. Values below 1 are raised to 1.
    pub fn with_max_pages(mut self, max_pages: u32) -> Self {
        self.max_pages = max_pages.max(1);
        self
    }

    pub fn is_test(&self) -> bool {
        self.test
    }

    /// Base URL for the configured mode.
    pub fn base_url(&self) -> &str {
        if self.test {
            &self.test_url
        } else {
            &self.live_url
        }
    }

    pub fn risk_url(&self) -> &str {
        &self.risk_url
    }

    pub fn max_pages(&self) -> u32 {
        self.max_pages
    }

    /// Exposes the private token (for building auth headers).
    pub(crate) fn private_token(&self) -> &str {
        self.private_token.expose_secret()
    }
}
