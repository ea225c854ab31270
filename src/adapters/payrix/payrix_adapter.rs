//! Payrix payment gateway adapter.
//!
//! Implements the `PaymentGateway` trait for the Payrix REST API. Handles
//! transactions, resource lookups, collection searches with full pagination,
//! and the risk decision lookup.
//!
//! # Configuration
//!
//! ```ignore
//! let config = GatewayConfig::new(private_token, true);
//! let gateway = PayrixGateway::new(config);
//! ```

use async_trait::async_trait;
use serde_json::Value;

use crate::adapters::transport::ReqwestTransport;
use crate::domain::gateway::{
    payload, Endpoint, Fields, GatewayResponse, Record, ResponseBody, TransactionOrigin,
    TransactionType,
};
use crate::ports::{
    Disbursements, GatewayError, Headers, HttpMethod, HttpRequest, HttpTransport,
    PaymentGateway, RiskDecision,
};

use super::auth::{bearer_headers, search_headers, token_headers};
use super::gateway_config::GatewayConfig;
use super::url_builder::{resource_url, risk_summary_url};

/// Records requested per page when walking every page.
pub const PAGE_LIMIT: u32 = 100;

/// Payrix payment gateway adapter.
///
/// Holds only immutable configuration and the transport; every call is
/// independent of the others.
pub struct PayrixGateway<T = ReqwestTransport> {
    config: GatewayConfig,
    transport: T,
}

impl PayrixGateway<ReqwestTransport> {
    /// Create a gateway that talks to Payrix over HTTPS.
    pub fn new(config: GatewayConfig) -> Self {
        Self::with_transport(config, ReqwestTransport::new())
    }
}

impl<T: HttpTransport> PayrixGateway<T> {
    /// Create a gateway on top of a custom transport.
    pub fn with_transport(config: GatewayConfig, transport: T) -> Self {
        Self { config, transport }
    }

    pub fn config(&self) -> &GatewayConfig {
        &self.config
    }

    pub fn is_test(&self) -> bool {
        self.config.is_test()
    }

    fn url(&self, endpoint: Endpoint, id: Option<&str>, params: &[String]) -> String {
        resource_url(self.config.base_url(), endpoint, id, params)
    }

    fn token_headers(&self) -> Headers {
        token_headers(self.config.private_token())
    }

    fn search_headers(&self, search: &[String]) -> Headers {
        search_headers(self.config.private_token(), search)
    }

    /// Send a request and decode the JSON body.
    ///
    /// Non-2xx statuses, transport failures and undecodable bodies are errors.
    async fn request(&self, request: HttpRequest) -> Result<Value, GatewayError> {
        tracing::debug!(method = %request.method, url = %request.url, "Payrix request");

        let response = self.transport.send(request).await?;

        if !response.is_success() {
            let err = GatewayError::http_status(response.status, &response.body);
            tracing::error!(status = response.status, error = %err.message, "Payrix request failed");
            return Err(err);
        }

        serde_json::from_str(&response.body).map_err(|e| {
            tracing::warn!(error = %e, "Failed to parse Payrix response");
            GatewayError::invalid_response(format!("Invalid JSON: {}", e))
        })
    }

    /// GET a URL and return the raw `response` object with its typed view.
    ///
    /// A missing envelope decodes as an empty body.
    async fn fetch(&self, url: String, headers: Headers) -> Result<(Value, ResponseBody), GatewayError> {
        let json = self.request(HttpRequest::get(url, headers)).await?;
        decode_envelope(json)
    }

    /// Fetch one resource: the first record of `data`.
    ///
    /// A blank id returns `None` without a request.
    pub async fn get(
        &self,
        endpoint: Endpoint,
        id: &str,
        url_params: &[String],
    ) -> Result<Option<Record>, GatewayError> {
        if is_blank(id) {
            return Ok(None);
        }

        let url = self.url(endpoint, Some(id), url_params);
        let (_, body) = self.fetch(url, self.token_headers()).await?;
        Ok(body.into_first_record())
    }

    /// Fetch the first page of a collection with caller-built headers.
    pub async fn get_some(
        &self,
        endpoint: Endpoint,
        headers: Headers,
        url_params: &[String],
    ) -> Result<Vec<Record>, GatewayError> {
        let url = self.url(endpoint, None, url_params);
        let (_, body) = self.fetch(url, headers).await?;
        Ok(body.into_records())
    }

    /// Walk every page of a collection, `PAGE_LIMIT` records at a time.
    ///
    /// Stops when `details.page.hasMore` is false or absent. Fails with
    /// `PaginationLimitExceeded` if the server still reports more pages after
    /// the configured ceiling.
    pub async fn get_all(
        &self,
        endpoint: Endpoint,
        url_params: &[String],
        headers: Headers,
    ) -> Result<Vec<Record>, GatewayError> {
        let mut params = url_params.to_vec();
        params.push(format!("page[limit]={}", PAGE_LIMIT));

        let mut records = Vec::new();
        for page in 1..=self.config.max_pages() {
            let mut paged = params.clone();
            paged.push(format!("page[number]={}", page));

            let url = self.url(endpoint, None, &paged);
            let (_, body) = self.fetch(url, headers.clone()).await?;
            let has_more = body.has_more();
            let page_records = body.into_records();

            tracing::debug!(
                endpoint = %endpoint,
                page,
                records = page_records.len(),
                has_more,
                "Fetched Payrix page"
            );

            records.extend(page_records);
            if !has_more {
                return Ok(records);
            }
        }

        tracing::warn!(
            endpoint = %endpoint,
            max_pages = self.config.max_pages(),
            "Payrix pagination did not terminate"
        );
        Err(GatewayError::pagination_limit(endpoint, self.config.max_pages()))
    }

    /// POST a JSON body to a collection and normalize the result.
    pub async fn post(&self, endpoint: Endpoint, payload: &Fields) -> Result<GatewayResponse, GatewayError> {
        let url = self.url(endpoint, None, &[]);
        self.send_and_commit(HttpMethod::Post, url, payload).await
    }

    /// PUT a JSON body to one resource and normalize the result.
    pub async fn put(
        &self,
        endpoint: Endpoint,
        id: &str,
        payload: &Fields,
    ) -> Result<GatewayResponse, GatewayError> {
        let url = self.url(endpoint, Some(id), &[]);
        self.send_and_commit(HttpMethod::Put, url, payload).await
    }

    async fn send_and_commit(
        &self,
        method: HttpMethod,
        url: String,
        payload: &Fields,
    ) -> Result<GatewayResponse, GatewayError> {
        let body = serde_json::to_string(payload)
            .map_err(|e| GatewayError::invalid_request(format!("Failed to encode body: {}", e)))?;

        let json = self
            .request(HttpRequest::with_body(method, url, self.token_headers(), body))
            .await?;

        self.commit(json)
    }

    /// Normalize a decoded mutation response.
    fn commit(&self, json: Value) -> Result<GatewayResponse, GatewayError> {
        let (raw, body) = decode_envelope(json)?;
        if raw.is_null() {
            return Err(GatewayError::invalid_response("Missing response envelope"));
        }

        let response = GatewayResponse::commit(raw, &body, self.config.is_test());

        if !response.success {
            tracing::info!(
                message = %response.message,
                error_code = ?response.error_code,
                "Payrix declined request"
            );
        }

        Ok(response)
    }

    async fn update(
        &self,
        endpoint: Endpoint,
        id: &str,
        fields: Fields,
    ) -> Result<Option<GatewayResponse>, GatewayError> {
        if is_blank(id) || fields.is_empty() {
            return Ok(None);
        }
        self.put(endpoint, id, &fields).await.map(Some)
    }
}

#[async_trait]
impl<T: HttpTransport> PaymentGateway for PayrixGateway<T> {
    async fn merchant_valid(&self, merchant_id: &str) -> bool {
        if is_blank(merchant_id) {
            return false;
        }

        match self.get(Endpoint::Merchants, merchant_id, &[]).await {
            Ok(Some(record)) => record.id() == Some(merchant_id),
            Ok(None) => false,
            Err(e) => {
                tracing::warn!(
                    merchant_id = %merchant_id,
                    error = %e,
                    "Merchant lookup failed; treating as invalid"
                );
                false
            }
        }
    }

    async fn token_purchase(
        &self,
        token: &str,
        currency: &str,
        amount: i64,
        origin: TransactionOrigin,
        txn_type: TransactionType,
        options: Fields,
    ) -> Result<GatewayResponse, GatewayError> {
        let body = payload::token_purchase(token, currency, amount, origin, txn_type, options);
        self.post(Endpoint::Transactions, &body).await
    }

    async fn void(
        &self,
        transaction_id: &str,
        txn_type: TransactionType,
        origin: TransactionOrigin,
        options: Fields,
    ) -> Result<GatewayResponse, GatewayError> {
        let body = payload::void(transaction_id, txn_type, origin, options);
        self.post(Endpoint::Transactions, &body).await
    }

    async fn credit(
        &self,
        transaction_id: &str,
        txn_type: TransactionType,
        origin: TransactionOrigin,
        amount: Option<i64>,
        options: Fields,
    ) -> Result<GatewayResponse, GatewayError> {
        let body = payload::credit(transaction_id, txn_type, origin, amount, options);
        self.post(Endpoint::Transactions, &body).await
    }

    async fn token(&self, id: &str, url_params: &[String]) -> Result<Option<Record>, GatewayError> {
        self.get(Endpoint::Tokens, id, url_params).await
    }

    async fn token_update(
        &self,
        id: &str,
        payload: Fields,
    ) -> Result<Option<GatewayResponse>, GatewayError> {
        if is_blank(id) {
            return Ok(None);
        }
        self.put(Endpoint::Tokens, id, &payload).await.map(Some)
    }

    async fn customer(&self, id: &str) -> Result<Option<Record>, GatewayError> {
        self.get(Endpoint::Customers, id, &[]).await
    }

    async fn merchant(&self, id: &str, url_params: &[String]) -> Result<Option<Record>, GatewayError> {
        self.get(Endpoint::Merchants, id, url_params).await
    }

    async fn merchants(
        &self,
        search: &[String],
        url_params: &[String],
    ) -> Result<Vec<Record>, GatewayError> {
        self.get_some(Endpoint::Merchants, self.search_headers(search), url_params)
            .await
    }

    async fn entity(&self, id: &str, url_params: &[String]) -> Result<Option<Record>, GatewayError> {
        self.get(Endpoint::Entities, id, url_params).await
    }

    async fn entity_update(
        &self,
        id: &str,
        fields: Fields,
    ) -> Result<Option<GatewayResponse>, GatewayError> {
        self.update(Endpoint::Entities, id, fields).await
    }

    async fn transaction(
        &self,
        id: &str,
        url_params: &[String],
    ) -> Result<Option<Record>, GatewayError> {
        self.get(Endpoint::Transactions, id, url_params).await
    }

    async fn transactions(
        &self,
        search: &[String],
        url_params: &[String],
    ) -> Result<Vec<Record>, GatewayError> {
        self.get_some(Endpoint::Transactions, self.search_headers(search), url_params)
            .await
    }

    async fn transaction_update(
        &self,
        id: &str,
        fields: Fields,
    ) -> Result<Option<GatewayResponse>, GatewayError> {
        self.update(Endpoint::Transactions, id, fields).await
    }

    async fn entries(
        &self,
        search: &[String],
        url_params: &[String],
    ) -> Result<Vec<Record>, GatewayError> {
        self.get_some(Endpoint::Entries, self.search_headers(search), url_params)
            .await
    }

    async fn chargeback(
        &self,
        id: &str,
        url_params: &[String],
    ) -> Result<Option<Record>, GatewayError> {
        self.get(Endpoint::Chargebacks, id, url_params).await
    }

    async fn chargebacks(
        &self,
        search: &[String],
        url_params: &[String],
    ) -> Result<Vec<Record>, GatewayError> {
        self.get_some(Endpoint::Chargebacks, self.search_headers(search), url_params)
            .await
    }

    async fn decision(&self, transaction_id: &str) -> Result<Option<RiskDecision>, GatewayError> {
        if self.config.is_test() || is_blank(transaction_id) {
            return Ok(None);
        }

        let url = risk_summary_url(self.config.risk_url(), transaction_id);
        tracing::debug!(url = %url, "Payrix risk decision request");

        let response = self
            .transport
            .send(HttpRequest::get(url, bearer_headers(self.config.private_token())))
            .await?;

        let body = if response.body.trim().is_empty() {
            Value::Null
        } else {
            serde_json::from_str(&response.body).unwrap_or_else(|e| {
                tracing::warn!(
                    status = response.status,
                    error = %e,
                    "Risk decision body is not JSON; keeping raw text"
                );
                Value::String(response.body.clone())
            })
        };

        Ok(Some(RiskDecision {
            status: response.status,
            body,
        }))
    }

    async fn disbursement(
        &self,
        id: &str,
        url_params: &[String],
    ) -> Result<Option<Record>, GatewayError> {
        self.get(Endpoint::Disbursements, id, url_params).await
    }

    async fn disbursements(
        &self,
        search: &[String],
        url_params: &[String],
        all: bool,
    ) -> Result<Disbursements, GatewayError> {
        let headers = self.search_headers(search);

        if all {
            return self
                .get_all(Endpoint::Disbursements, url_params, headers)
                .await
                .map(Disbursements::All);
        }

        let url = self.url(Endpoint::Disbursements, None, url_params);
        let (_, body) = self.fetch(url, headers).await?;
        Ok(Disbursements::Page(body))
    }

    async fn funds(&self, search: &[String], url_params: &[String]) -> Result<Vec<Record>, GatewayError> {
        self.get_some(Endpoint::Funds, self.search_headers(search), url_params)
            .await
    }

    async fn disbursement_entries(
        &self,
        search: &[String],
        url_params: &[String],
    ) -> Result<Vec<Record>, GatewayError> {
        self.get_all(
            Endpoint::DisbursementEntries,
            url_params,
            self.search_headers(search),
        )
        .await
    }
}

/// Split a decoded body into the raw `response` object and its typed view.
///
/// Returns `Value::Null` and an empty body when there is no envelope.
fn decode_envelope(mut json: Value) -> Result<(Value, ResponseBody), GatewayError> {
    let raw = json
        .get_mut("response")
        .map(Value::take)
        .unwrap_or(Value::Null);

    if raw.is_null() {
        return Ok((raw, ResponseBody::default()));
    }

    let body = serde_json::from_value(raw.clone()).map_err(|e| {
        GatewayError::invalid_response(format!("Unexpected response envelope: {}", e))
    })?;

    Ok((raw, body))
}

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}
