//! Structured logging setup.
//!
//! The gateway emits `tracing` events; binaries embedding it call
//! [`init_observability`] once at startup to install a subscriber.

use serde::Deserialize;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Log format configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable format for development.
    #[default]
    Pretty,
    /// JSON format for production log aggregation.
    Json,
}

/// Builds the filter: `RUST_LOG` when set, otherwise `default_directive`.
pub fn build_filter(default_directive: &str) -> Result<EnvFilter, tracing_subscriber::filter::ParseError> {
    match EnvFilter::try_from_default_env() {
        Ok(filter) => Ok(filter),
        Err(_) => EnvFilter::try_new(default_directive),
    }
}

/// Installs the global tracing subscriber.
///
/// Returns `false` when a subscriber was already installed (e.g. by a test
/// harness) or the directive does not parse.
pub fn init_observability(default_directive: &str, format: LogFormat) -> bool {
    let Ok(filter) = build_filter(default_directive) else {
        return false;
    };

    let registry = tracing_subscriber::registry().with(filter);

    let result = match format {
        LogFormat::Pretty => registry.with(fmt::layer().with_target(true)).try_init(),
        LogFormat::Json => registry
            .with(fmt::layer().json().with_current_span(true))
            .try_init(),
    };

    result.is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_format_deserializes_lowercase() {
        let format: LogFormat = serde_json::from_str("\"json\"").unwrap();
        assert_eq!(format, LogFormat::Json);
        assert_eq!(LogFormat::default(), LogFormat::Pretty);
    }

    #[test]
    fn build_filter_accepts_directives() {
        assert!(build_filter("info,payrix_gateway=debug").is_ok());
    }

    #[test]
    fn second_init_reports_false() {
        let _ = init_observability("warn", LogFormat::Pretty);
        assert!(!init_observability("warn", LogFormat::Json));
    }
}
