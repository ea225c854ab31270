//! Payment gateway port.
//!
//! Defines the call surface of the processor integration: transactions,
//! lookups of single resources, collection searches and the risk decision
//! lookup.
//!
//! # Conventions
//!
//! - **Blank ids short-circuit**: lookups and updates given a blank id return
//!   `Ok(None)` without touching the network.
//! - **API errors are data**: declines and validation failures come back as a
//!   `GatewayResponse` with `success == false`.
//! - **Transport errors propagate**: network, HTTP status and decoding
//!   failures are returned as `GatewayError`. Only `merchant_valid` folds
//!   them into its boolean.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::gateway::{
    Fields, GatewayResponse, Record, ResponseBody, TransactionOrigin, TransactionType,
};

/// Port for the processor's REST API.
///
/// `url_params` are extra pre-formatted query parameters
/// (`key[op]=value`) appended verbatim; `search` filters use the same format
/// and travel in the `search` header.
#[async_trait]
pub trait PaymentGateway: Send + Sync {
    /// Whether the merchant exists. Never fails: any error counts as invalid.
    async fn merchant_valid(&self, merchant_id: &str) -> bool;

    /// Charge a stored token.
    async fn token_purchase(
        &self,
        token: &str,
        currency: &str,
        amount: i64,
        origin: TransactionOrigin,
        txn_type: TransactionType,
        options: Fields,
    ) -> Result<GatewayResponse, GatewayError>;

    /// Reverse an earlier transaction.
    async fn void(
        &self,
        transaction_id: &str,
        txn_type: TransactionType,
        origin: TransactionOrigin,
        options: Fields,
    ) -> Result<GatewayResponse, GatewayError>;

    /// Refund an earlier transaction, fully when `amount` is `None`.
    async fn credit(
        &self,
        transaction_id: &str,
        txn_type: TransactionType,
        origin: TransactionOrigin,
        amount: Option<i64>,
        options: Fields,
    ) -> Result<GatewayResponse, GatewayError>;

    async fn token(&self, id: &str, url_params: &[String]) -> Result<Option<Record>, GatewayError>;

    async fn token_update(
        &self,
        id: &str,
        payload: Fields,
    ) -> Result<Option<GatewayResponse>, GatewayError>;

    async fn customer(&self, id: &str) -> Result<Option<Record>, GatewayError>;

    async fn merchant(&self, id: &str, url_params: &[String])
        -> Result<Option<Record>, GatewayError>;

    /// First page of merchants matching `search`.
    async fn merchants(
        &self,
        search: &[String],
        url_params: &[String],
    ) -> Result<Vec<Record>, GatewayError>;

    async fn entity(&self, id: &str, url_params: &[String]) -> Result<Option<Record>, GatewayError>;

    /// Update entity fields. Skipped when `fields` is empty.
    async fn entity_update(
        &self,
        id: &str,
        fields: Fields,
    ) -> Result<Option<GatewayResponse>, GatewayError>;

    async fn transaction(
        &self,
        id: &str,
        url_params: &[String],
    ) -> Result<Option<Record>, GatewayError>;

    /// First page of transactions matching `search`.
    async fn transactions(
        &self,
        search: &[String],
        url_params: &[String],
    ) -> Result<Vec<Record>, GatewayError>;

    /// Update transaction fields. Skipped when `fields` is empty.
    async fn transaction_update(
        &self,
        id: &str,
        fields: Fields,
    ) -> Result<Option<GatewayResponse>, GatewayError>;

    /// First page of ledger entries matching `search`.
    async fn entries(
        &self,
        search: &[String],
        url_params: &[String],
    ) -> Result<Vec<Record>, GatewayError>;

    async fn chargeback(
        &self,
        id: &str,
        url_params: &[String],
    ) -> Result<Option<Record>, GatewayError>;

    /// First page of chargebacks matching `search`.
    async fn chargebacks(
        &self,
        search: &[String],
        url_params: &[String],
    ) -> Result<Vec<Record>, GatewayError>;

    /// Risk policy summary for a transaction.
    ///
    /// Only available against production; returns `Ok(None)` in the sandbox.
    async fn decision(&self, transaction_id: &str) -> Result<Option<RiskDecision>, GatewayError>;

    async fn disbursement(
        &self,
        id: &str,
        url_params: &[String],
    ) -> Result<Option<Record>, GatewayError>;

    /// Disbursements matching `search`: the first page with its pagination
    /// details, or every page when `all` is set.
    async fn disbursements(
        &self,
        search: &[String],
        url_params: &[String],
        all: bool,
    ) -> Result<Disbursements, GatewayError>;

    /// First page of funds matching `search`.
    async fn funds(&self, search: &[String], url_params: &[String])
        -> Result<Vec<Record>, GatewayError>;

    /// Every disbursement entry matching `search`, across all pages.
    async fn disbursement_entries(
        &self,
        search: &[String],
        url_params: &[String],
    ) -> Result<Vec<Record>, GatewayError>;
}

/// Result of a risk decision lookup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskDecision {
    /// HTTP status of the risk API response.
    pub status: u16,

    /// Decoded JSON body: `null` when empty, the raw text as a string when
    /// it is not JSON.
    pub body: Value,
}

/// Result of a disbursement search.
#[derive(Debug, Clone, PartialEq)]
pub enum Disbursements {
    /// One page, including `details.page` for manual paging.
    Page(ResponseBody),

    /// Records from every page, in order.
    All(Vec<Record>),
}

impl Disbursements {
    /// Records regardless of how they were fetched.
    pub fn records(&self) -> &[Record] {
        match self {
            Disbursements::Page(body) => body.records(),
            Disbursements::All(records) => records,
        }
    }
}

/// Errors from gateway operations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GatewayError {
    /// Error code for categorization.
    pub code: GatewayErrorCode,

    /// Human-readable message.
    pub message: String,

    /// HTTP status, for `HttpStatus` errors.
    pub status: Option<u16>,
}

impl GatewayError {
    /// Create a new gateway error.
    pub fn new(code: GatewayErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            status: None,
        }
    }

    /// Create a network error.
    pub fn network(message: impl Into<String>) -> Self {
        Self::new(GatewayErrorCode::NetworkError, message)
    }

    /// Create an error for a non-2xx response.
    ///
    /// Only the first `MAX_ERROR_BODY_BYTES` of the body are kept.
    pub fn http_status(status: u16, body: &str) -> Self {
        Self {
            code: GatewayErrorCode::HttpStatus,
            message: format!("Payrix API returned {}: {}", status, excerpt(body)),
            status: Some(status),
        }
    }

    /// Create an error for a body that could not be decoded.
    pub fn invalid_response(message: impl Into<String>) -> Self {
        Self::new(GatewayErrorCode::InvalidResponse, message)
    }

    /// Create an error for a request that could not be encoded.
    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::new(GatewayErrorCode::InvalidRequest, message)
    }

    /// Create an error for a pagination run that hit the page ceiling.
    pub fn pagination_limit(endpoint: impl std::fmt::Display, max_pages: u32) -> Self {
        Self::new(
            GatewayErrorCode::PaginationLimitExceeded,
            format!(
                "{} still reported more pages after {} pages",
                endpoint, max_pages
            ),
        )
    }
}

/// Longest response body excerpt carried in an error message.
pub const MAX_ERROR_BODY_BYTES: usize = 512;

fn excerpt(body: &str) -> String {
    if body.len() <= MAX_ERROR_BODY_BYTES {
        return body.to_string();
    }
    let mut end = MAX_ERROR_BODY_BYTES;
    while !body.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}...", &body[..end])
}

impl std::fmt::Display for GatewayError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.code, self.message)
    }
}

impl std::error::Error for GatewayError {}

/// Gateway error codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GatewayErrorCode {
    /// Connection failed or the body could not be read.
    NetworkError,

    /// The server answered with a non-2xx status.
    HttpStatus,

    /// The body was not the expected JSON.
    InvalidResponse,

    /// The request body could not be encoded.
    InvalidRequest,

    /// `hasMore` never turned false within the page ceiling.
    PaginationLimitExceeded,
}

impl std::fmt::Display for GatewayErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            GatewayErrorCode::NetworkError => "network_error",
            GatewayErrorCode::HttpStatus => "http_status",
            GatewayErrorCode::InvalidResponse => "invalid_response",
            GatewayErrorCode::InvalidRequest => "invalid_request",
            GatewayErrorCode::PaginationLimitExceeded => "pagination_limit_exceeded",
        };
        write!(f, "{}", s)
    }
}
