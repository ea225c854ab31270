//! HTTP transport port.
//!
//! The gateway never talks to the network directly. It hands fully built
//! requests (URL, headers, JSON body) to an `HttpTransport` and interprets the
//! status and body that come back. The production adapter uses `reqwest`;
//! tests use a scripted mock.

use async_trait::async_trait;

use super::payment_gateway::GatewayError;

/// Header names whose values are never printed.
const REDACTED_HEADERS: &[&str] = &["apikey", "authorization"];

/// Port for sending a single HTTP request.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    /// Send the request and return the status and body.
    ///
    /// Only connection-level failures are errors; any HTTP status is returned
    /// as a response.
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, GatewayError>;
}

/// HTTP methods used by the gateway.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
        }
    }
}

impl std::fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Ordered request headers.
///
/// `Debug` output hides credential values.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Headers(Vec<(String, String)>);

impl Headers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a header, keeping insertion order.
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.0.push((name.into(), value.into()));
        self
    }

    /// Value of the first header with this name (case-insensitive).
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl std::fmt::Debug for Headers {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_map()
            .entries(self.0.iter().map(|(name, value)| {
                let shown = if REDACTED_HEADERS.contains(&name.to_ascii_lowercase().as_str()) {
                    "[REDACTED]"
                } else {
                    value.as_str()
                };
                (name.as_str(), shown)
            }))
            .finish()
    }
}

/// A fully built outbound request.
#[derive(Debug, Clone, PartialEq)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub url: String,
    pub headers: Headers,

    /// JSON-encoded body for POST and PUT.
    pub body: Option<String>,
}

impl HttpRequest {
    pub fn get(url: impl Into<String>, headers: Headers) -> Self {
        Self {
            method: HttpMethod::Get,
            url: url.into(),
            headers,
            body: None,
        }
    }

    pub fn with_body(method: HttpMethod, url: impl Into<String>, headers: Headers, body: String) -> Self {
        Self {
            method,
            url: url.into(),
            headers,
            body: Some(body),
        }
    }
}

/// Status and raw body of a response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// 2xx status.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}
