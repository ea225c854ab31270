//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `payrix` - Payrix REST API gateway
//! - `transport` - HTTP transports (reqwest, mock)

pub mod payrix;
pub mod transport;

pub use payrix::{GatewayConfig, PayrixGateway};
pub use transport::{MockTransport, ReqwestTransport};
