//! reqwest-backed transport.

use async_trait::async_trait;

use crate::ports::{GatewayError, HttpMethod, HttpRequest, HttpResponse, HttpTransport};

/// Transport over a shared `reqwest::Client`.
///
/// Any status is returned as a response; only connection-level failures are
/// errors here.
#[derive(Debug, Clone, Default)]
pub struct ReqwestTransport {
    http_client: reqwest::Client,
}

impl ReqwestTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap a pre-configured client (timeouts, proxies, TLS settings).
    pub fn with_client(http_client: reqwest::Client) -> Self {
        Self { http_client }
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, GatewayError> {
        let mut builder = match request.method {
            HttpMethod::Get => self.http_client.get(&request.url),
            HttpMethod::Post => self.http_client.post(&request.url),
            HttpMethod::Put => self.http_client.put(&request.url),
        };

        for (name, value) in request.headers.iter() {
            builder = builder.header(name, value);
        }

        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        let response = builder
            .send()
            .await
            .map_err(|e| GatewayError::network(e.to_string()))?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| GatewayError::network(format!("Failed to read response body: {}", e)))?;

        Ok(HttpResponse::new(status, body))
    }
}
