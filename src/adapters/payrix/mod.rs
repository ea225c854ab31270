//! Payrix payment gateway adapter.
//!
//! Implements the `PaymentGateway` port against the Payrix REST API:
//! - `PayrixGateway` - resource lookups, searches, mutations, risk decisions
//! - `GatewayConfig` - credentials, mode and host overrides
//! - URL and header construction helpers

mod auth;
mod gateway_config;
mod payrix_adapter;
mod url_builder;

pub use auth::{bearer_headers, search_headers, token_headers, API_KEY_HEADER, SEARCH_HEADER};
pub use gateway_config::{GatewayConfig, DEFAULT_MAX_PAGES, LIVE_URL, RISK_URL, TEST_URL};
pub use payrix_adapter::{PayrixGateway, PAGE_LIMIT};
pub use url_builder::{resource_url, risk_summary_url};
