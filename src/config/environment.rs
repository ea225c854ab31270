//! Deployment environment and its resolution.

use serde::{Deserialize, Serialize};

/// Application environment
///
/// Anything other than `Production` routes gateway traffic to the sandbox.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(from = "String", rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Test,
    Staging,
    Production,
}

impl Environment {
    /// Parse an environment name. Unknown names are treated as development.
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "production" => Environment::Production,
            "staging" => Environment::Staging,
            "test" => Environment::Test,
            _ => Environment::Development,
        }
    }

    /// Pick the first non-blank name, most specific source first.
    ///
    /// Falls back to `Development` when every source is missing or blank.
    pub fn resolve<I, S>(candidates: I) -> Self
    where
        I: IntoIterator<Item = Option<S>>,
        S: AsRef<str>,
    {
        candidates
            .into_iter()
            .flatten()
            .find(|name| !name.as_ref().trim().is_empty())
            .map(|name| Self::from_name(name.as_ref()))
            .unwrap_or_default()
    }

    /// Check if running in production
    pub fn is_production(&self) -> bool {
        *self == Environment::Production
    }

    /// Whether gateway calls go to the sandbox.
    pub fn is_test_mode(&self) -> bool {
        !self.is_production()
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Development => "development",
            Environment::Test => "test",
            Environment::Staging => "staging",
            Environment::Production => "production",
        }
    }
}

impl From<String> for Environment {
    fn from(name: String) -> Self {
        Self::from_name(&name)
    }
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
