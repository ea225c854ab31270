//! Integration tests for gateway flows through the public API.
//!
//! These tests drive `PayrixGateway` over a scripted `MockTransport`:
//! 1. Payment lifecycle (purchase, refund, void) normalizes responses
//! 2. Lookups and searches build the right requests
//! 3. Pagination walks every page and respects the page ceiling
//! 4. Every REST request carries the API key

use serde_json::{json, Value};

use payrix_gateway::adapters::{GatewayConfig, MockTransport, PayrixGateway};
use payrix_gateway::domain::gateway::{
    Fields, PaymentMethod, Record, TransactionOrigin, TransactionStatus, TransactionType,
};
use payrix_gateway::ports::{Disbursements, GatewayErrorCode, HttpMethod, PaymentGateway};

// =============================================================================
// Test Infrastructure
// =============================================================================

fn sandbox() -> (PayrixGateway<MockTransport>, MockTransport) {
    let transport = MockTransport::new();
    let gateway =
        PayrixGateway::with_transport(GatewayConfig::new("sandbox_key", true), transport.clone());
    (gateway, transport)
}

fn production() -> (PayrixGateway<MockTransport>, MockTransport) {
    let transport = MockTransport::new();
    let gateway =
        PayrixGateway::with_transport(GatewayConfig::new("live_key", false), transport.clone());
    (gateway, transport)
}

fn envelope(data: Value) -> Value {
    json!({"response": {"data": data, "errors": []}})
}

fn page(ids: &[&str], has_more: bool) -> Value {
    let data: Vec<Value> = ids.iter().map(|id| json!({"id": id})).collect();
    json!({"response": {"data": data, "details": {"page": {"hasMore": has_more}}}})
}

fn fields(value: Value) -> Fields {
    value.as_object().cloned().unwrap()
}

fn search(filters: &[&str]) -> Vec<String> {
    filters.iter().map(|f| f.to_string()).collect()
}

// =============================================================================
// Payment Lifecycle
// =============================================================================

#[tokio::test]
async fn purchase_then_refund() {
    let (gateway, transport) = sandbox();
    transport.push_json(envelope(json!([{
        "id": "t1_txn_1",
        "status": TransactionStatus::Approved.code(),
        "total": 400
    }])));
    transport.push_json(envelope(json!([{
        "id": "t1_txn_2",
        "fortxn": "t1_txn_1",
        "type": TransactionType::CreditCardRefund.code()
    }])));

    let purchase = gateway
        .token_purchase(
            "tok_visa",
            "USD",
            400,
            TransactionOrigin::Payframe,
            TransactionType::CreditCardSale,
            fields(json!({"order": "1234567"})),
        )
        .await
        .unwrap();

    assert!(purchase.is_success());
    assert!(purchase.test);
    let txn_id = purchase.authorization.clone().unwrap();
    assert_eq!(txn_id, "t1_txn_1");
    assert_eq!(
        purchase.first_record().unwrap().get_i64("status"),
        Some(TransactionStatus::Approved.code() as i64)
    );

    let refund = gateway
        .credit(
            &txn_id,
            TransactionType::CreditCardRefund,
            TransactionOrigin::Ecommerce,
            Some(200),
            Fields::new(),
        )
        .await
        .unwrap();

    assert!(refund.success);
    assert_eq!(refund.authorization.as_deref(), Some("t1_txn_2"));

    let requests = transport.requests();
    assert_eq!(requests.len(), 2);
    assert!(requests.iter().all(|r| r.method == HttpMethod::Post));
    let refund_body: Value = serde_json::from_str(requests[1].body.as_deref().unwrap()).unwrap();
    assert_eq!(
        refund_body,
        json!({"fortxn": "t1_txn_1", "type": 5, "origin": 2, "total": 200})
    );
}

#[tokio::test]
async fn full_refund_sends_null_total() {
    let (gateway, transport) = sandbox();
    transport.push_json(envelope(json!([{"id": "t1_txn_3"}])));

    gateway
        .credit(
            "t1_txn_1",
            TransactionType::EcheckRefund,
            TransactionOrigin::Ecommerce,
            None,
            Fields::new(),
        )
        .await
        .unwrap();

    let body: Value =
        serde_json::from_str(transport.last_request().unwrap().body.as_deref().unwrap()).unwrap();
    assert_eq!(body["total"], Value::Null);
    assert_eq!(body["type"], json!(8));
}

#[tokio::test]
async fn declined_void_reports_field() {
    let (gateway, transport) = sandbox();
    transport.push_json(json!({
        "response": {
            "data": [],
            "errors": [{"msg": "Transaction cannot be reversed", "field": "fortxn", "errorCode": "E42"}]
        }
    }));

    let response = gateway
        .void(
            "t1_txn_1",
            TransactionType::CreditCardReversed,
            TransactionOrigin::Ecommerce,
            Fields::new(),
        )
        .await
        .unwrap();

    assert!(!response.success);
    assert_eq!(response.message, "Transaction cannot be reversed (field: fortxn)");
    assert_eq!(response.error_code.as_deref(), Some("E42"));
    assert!(response.authorization.is_none());
}

#[tokio::test]
async fn production_responses_are_not_test() {
    let (gateway, transport) = production();
    transport.push_json(envelope(json!([{"id": "t1_txn_9"}])));

    let response = gateway
        .token_purchase(
            "tok",
            "USD",
            100,
            TransactionOrigin::Ecommerce,
            TransactionType::CreditCardSale,
            Fields::new(),
        )
        .await
        .unwrap();

    assert!(!response.test);
    assert_eq!(transport.last_request().unwrap().url, "https://api.payrix.com/txns");
}

// =============================================================================
// Lookups and Updates
// =============================================================================

#[tokio::test]
async fn token_lookup_and_update() {
    let (gateway, transport) = sandbox();
    transport.push_json(envelope(json!([{
        "id": "t1_tok_1",
        "payment": {"method": PaymentMethod::Visa.code()}
    }])));
    transport.push_json(envelope(json!([{"id": "t1_tok_1", "expiration": "1230"}])));

    let token = gateway
        .token("t1_tok_1", &search(&["expand[customer][]"]))
        .await
        .unwrap()
        .unwrap();
    let method = token.get("payment").and_then(|p| p["method"].as_i64()).unwrap();
    assert_eq!(PaymentMethod::name_for_code(method as i32), Some("Visa"));

    let updated = gateway
        .token_update("t1_tok_1", fields(json!({"expiration": "1230"})))
        .await
        .unwrap()
        .unwrap();
    assert!(updated.success);

    let requests = transport.requests();
    assert_eq!(
        requests[0].url,
        "https://test-api.payrix.com/tokens/t1_tok_1?expand[customer][]"
    );
    assert_eq!(requests[1].method, HttpMethod::Put);
    assert_eq!(requests[1].body.as_deref(), Some(r#"{"expiration":"1230"}"#));
}

#[tokio::test]
async fn lookups_are_idempotent() {
    let (gateway, transport) = sandbox();
    let body = envelope(json!([{"id": "t1_chb_1", "cycle": "first"}]));
    transport.push_json(body.clone());
    transport.push_json(body);

    let first = gateway.chargeback("t1_chb_1", &[]).await.unwrap();
    let second = gateway.chargeback("t1_chb_1", &[]).await.unwrap();

    assert_eq!(first, second);
    let requests = transport.requests();
    assert_eq!(requests[0], requests[1]);
}

#[tokio::test]
async fn blank_identifiers_make_no_requests() {
    let (gateway, transport) = production();

    assert!(gateway.token("", &[]).await.unwrap().is_none());
    assert!(gateway.customer("").await.unwrap().is_none());
    assert!(gateway.merchant(" ", &[]).await.unwrap().is_none());
    assert!(gateway.entity("", &[]).await.unwrap().is_none());
    assert!(gateway.transaction("", &[]).await.unwrap().is_none());
    assert!(gateway.chargeback("", &[]).await.unwrap().is_none());
    assert!(gateway.disbursement("", &[]).await.unwrap().is_none());
    assert!(gateway.decision("").await.unwrap().is_none());
    assert!(gateway
        .entity_update("", fields(json!({"custom": "x"})))
        .await
        .unwrap()
        .is_none());
    assert!(gateway
        .transaction_update("", fields(json!({"custom": "x"})))
        .await
        .unwrap()
        .is_none());
    assert!(!gateway.merchant_valid("").await);

    assert_eq!(transport.call_count(), 0);
}

#[tokio::test]
async fn merchant_validity() {
    let (gateway, transport) = sandbox();

    transport.push_json(envelope(json!([{"id": "t1_mer_1"}])));
    assert!(gateway.merchant_valid("t1_mer_1").await);

    transport.push_json(envelope(json!([{"id": "t1_mer_2"}])));
    assert!(!gateway.merchant_valid("t1_mer_1").await);

    transport.push_json(envelope(json!([])));
    assert!(!gateway.merchant_valid("t1_mer_1").await);

    transport.push_response(401, r#"{"errors": ["unauthorized"]}"#);
    assert!(!gateway.merchant_valid("t1_mer_1").await);

    assert_eq!(transport.call_count(), 4);
}

// =============================================================================
// Searches and Pagination
// =============================================================================

#[tokio::test]
async fn searches_route_to_their_endpoints() {
    let (gateway, transport) = sandbox();
    for _ in 0..5 {
        transport.push_json(envelope(json!([{"id": "x"}])));
    }

    let filters = search(&["entity[equals]=t1_ent_1"]);
    gateway.merchants(&filters, &[]).await.unwrap();
    gateway.transactions(&filters, &[]).await.unwrap();
    gateway.entries(&filters, &[]).await.unwrap();
    gateway.chargebacks(&filters, &[]).await.unwrap();
    gateway.funds(&filters, &[]).await.unwrap();

    let urls: Vec<String> = transport.requests().into_iter().map(|r| r.url).collect();
    assert_eq!(
        urls,
        vec![
            "https://test-api.payrix.com/merchants",
            "https://test-api.payrix.com/txns",
            "https://test-api.payrix.com/entries",
            "https://test-api.payrix.com/chargebacks",
            "https://test-api.payrix.com/funds",
        ]
    );
}

#[tokio::test]
async fn every_rest_request_carries_api_key() {
    let (gateway, transport) = sandbox();
    transport.push_json(envelope(json!([{"id": "t1_ent_1"}])));
    transport.push_json(envelope(json!([{"id": "t1_ent_1"}])));
    transport.push_json(page(&["a"], false));
    transport.push_json(envelope(json!([])));

    gateway.entity("t1_ent_1", &[]).await.unwrap();
    gateway
        .entity_update("t1_ent_1", fields(json!({"custom": "c"})))
        .await
        .unwrap();
    gateway.disbursements(&[], &[], true).await.unwrap();
    gateway.transactions(&[], &[]).await.unwrap();

    let requests = transport.requests();
    assert_eq!(requests.len(), 4);
    for request in &requests {
        assert_eq!(request.headers.get("APIKEY"), Some("sandbox_key"));
        assert_eq!(request.headers.get("content-type"), Some("application/json"));
    }
    assert!(requests.iter().all(|r| r.headers.get("search").is_none()));
}

#[tokio::test]
async fn disbursement_entries_walk_three_pages() {
    let (gateway, transport) = sandbox();
    transport.push_json(page(&["e1", "e2"], true));
    transport.push_json(page(&["e3", "e4"], true));
    transport.push_json(page(&["e5"], false));

    let records = gateway
        .disbursement_entries(&search(&["disbursement[equals]=t1_dbm_1"]), &[])
        .await
        .unwrap();

    let ids: Vec<&str> = records.iter().filter_map(Record::id).collect();
    assert_eq!(ids, vec!["e1", "e2", "e3", "e4", "e5"]);
    assert_eq!(transport.call_count(), 3);
    assert!(transport.was_called("page[number]=3"));
    assert!(!transport.was_called("page[number]=4"));
}

#[tokio::test]
async fn pagination_stops_at_ceiling() {
    let transport = MockTransport::new();
    let gateway = PayrixGateway::with_transport(
        GatewayConfig::new("k", true).with_max_pages(3),
        transport.clone(),
    );
    for _ in 0..5 {
        transport.push_json(page(&["x"], true));
    }

    let err = gateway.disbursements(&[], &[], true).await.unwrap_err();

    assert_eq!(err.code, GatewayErrorCode::PaginationLimitExceeded);
    assert_eq!(transport.call_count(), 3);
}

#[tokio::test]
async fn pagination_error_mid_walk_propagates() {
    let (gateway, transport) = sandbox();
    transport.push_json(page(&["a"], true));
    transport.push_response(502, "bad gateway");

    let err = gateway.disbursement_entries(&[], &[]).await.unwrap_err();
    assert_eq!(err.code, GatewayErrorCode::HttpStatus);
    assert_eq!(err.status, Some(502));
}

#[tokio::test]
async fn single_disbursement_page_exposes_details() {
    let (gateway, transport) = sandbox();
    transport.push_json(page(&["t1_dbm_1"], true));

    let result = gateway
        .disbursements(&search(&["status[equals]=3"]), &search(&["page[number]=2"]), false)
        .await
        .unwrap();

    let Disbursements::Page(body) = result else {
        panic!("Expected single page");
    };
    assert!(body.has_more());
    assert_eq!(body.records().len(), 1);
    assert_eq!(
        transport.last_request().unwrap().url,
        "https://test-api.payrix.com/disbursements?page[number]=2"
    );
}

// =============================================================================
// Risk Decisions
// =============================================================================

#[tokio::test]
async fn decision_only_in_production() {
    let (gateway, transport) = sandbox();
    assert!(gateway.decision("t1_txn_1").await.unwrap().is_none());
    assert_eq!(transport.call_count(), 0);

    let (gateway, transport) = production();
    transport.push_json(json!({"summary": {"action": "allow"}}));

    let decision = gateway.decision("t1_txn_1").await.unwrap().unwrap();
    assert_eq!(decision.status, 200);
    assert_eq!(decision.body["summary"]["action"], "allow");

    let request = transport.last_request().unwrap();
    assert!(request.url.starts_with("https://apiv2.payrix.com/risk/v2/decision/"));
    assert_eq!(request.headers.get("authorization"), Some("Bearer live_key"));
    assert_eq!(request.headers.get("login"), Some("required-but-not-used"));
}
