//! HTTP transport implementations.
//!
//! - `ReqwestTransport` - real HTTPS client
//! - `MockTransport` - scripted responses for tests

mod mock_transport;
mod reqwest_transport;

pub use mock_transport::MockTransport;
pub use reqwest_transport::ReqwestTransport;
