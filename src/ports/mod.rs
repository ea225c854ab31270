//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `PaymentGateway` - Call surface of the processor integration
//! - `HttpTransport` - Sends one HTTP request; the seam mocked in tests

mod http_transport;
mod payment_gateway;

pub use http_transport::{Headers, HttpMethod, HttpRequest, HttpResponse, HttpTransport};
pub use payment_gateway::{
    Disbursements, GatewayError, GatewayErrorCode, PaymentGateway, RiskDecision,
    MAX_ERROR_BODY_BYTES,
};
