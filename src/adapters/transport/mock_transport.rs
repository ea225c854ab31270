//! Mock transport for testing.
//!
//! Replays scripted responses in order and records every request so tests
//! can assert on URLs, headers and bodies without a network.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use serde_json::Value;

use crate::ports::{GatewayError, HttpRequest, HttpResponse, HttpTransport};

/// Mock transport for testing.
///
/// Clones share state, so a test can keep one handle while the gateway owns
/// another.
///
/// # Example
///
/// ```ignore
/// let transport = MockTransport::new();
/// transport.push_json(json!({"response": {"data": [{"id": "t1_mer_1"}]}}));
///
/// let gateway = PayrixGateway::with_transport(config, transport.clone());
/// assert!(gateway.merchant_valid("t1_mer_1").await);
/// assert_eq!(transport.call_count(), 1);
/// ```
#[derive(Clone, Default)]
pub struct MockTransport {
    inner: Arc<Mutex<MockState>>,
}

#[derive(Default)]
struct MockState {
    /// Responses returned in order, one per request.
    responses: VecDeque<Result<HttpResponse, GatewayError>>,

    /// Every request seen, in order.
    requests: Vec<HttpRequest>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Configuration Methods
    // ════════════════════════════════════════════════════════════════════════════

    /// Queue a raw response.
    pub fn push_response(&self, status: u16, body: impl Into<String>) {
        self.inner
            .lock()
            .unwrap()
            .responses
            .push_back(Ok(HttpResponse::new(status, body)));
    }

    /// Queue a 200 response with a JSON body.
    pub fn push_json(&self, body: Value) {
        self.push_response(200, body.to_string());
    }

    /// Queue a transport failure.
    pub fn push_error(&self, error: GatewayError) {
        self.inner.lock().unwrap().responses.push_back(Err(error));
    }

    /// Drop any responses not yet consumed.
    pub fn clear_responses(&self) {
        self.inner.lock().unwrap().responses.clear();
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Call Tracking
    // ════════════════════════════════════════════════════════════════════════════

    /// All recorded requests.
    pub fn requests(&self) -> Vec<HttpRequest> {
        self.inner.lock().unwrap().requests.clone()
    }

    pub fn last_request(&self) -> Option<HttpRequest> {
        self.inner.lock().unwrap().requests.last().cloned()
    }

    pub fn call_count(&self) -> usize {
        self.inner.lock().unwrap().requests.len()
    }

    /// Check if any request hit a URL containing `fragment`.
    pub fn was_called(&self, fragment: &str) -> bool {
        self.inner
            .lock()
            .unwrap()
            .requests
            .iter()
            .any(|r| r.url.contains(fragment))
    }
}

#[async_trait]
impl HttpTransport for MockTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, GatewayError> {
        let mut state = self.inner.lock().unwrap();
        state.requests.push(request);
        state
            .responses
            .pop_front()
            .unwrap_or_else(|| Err(GatewayError::network("No scripted response")))
    }
}
