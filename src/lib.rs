//! Payrix Gateway - Payment gateway client for the Payrix REST API
//!
//! This crate charges stored card tokens, voids and refunds transactions,
//! and looks up merchants, entities, chargebacks, disbursements and ledger
//! entries. Responses are normalized into a uniform `GatewayResponse`.
//!
//! # Example
//!
//! ```no_run
//! use payrix_gateway::adapters::{GatewayConfig, PayrixGateway};
//! use payrix_gateway::ports::PaymentGateway;
//!
//! # async fn run() {
//! let gateway = PayrixGateway::new(GatewayConfig::new("private-key", true));
//! let valid = gateway.merchant_valid("t1_mer_123").await;
//! # }
//! ```

pub mod adapters;
pub mod config;
pub mod domain;
pub mod observability;
pub mod ports;
