//! Request URL construction.
//!
//! Query parameters arrive pre-formatted (`field[equals]=value`,
//! `page[limit]=100`) and are appended verbatim: no validation, no
//! percent-encoding. Callers own their formatting.

use crate::domain::gateway::Endpoint;

/// URL of a collection or, with an id, of one resource in it.
pub fn resource_url(base_url: &str, endpoint: Endpoint, id: Option<&str>, params: &[String]) -> String {
    let mut url = format!("{}/{}", base_url, endpoint.path_segment());

    if let Some(id) = id.filter(|id| !id.trim().is_empty()) {
        url.push('/');
        url.push_str(id);
    }

    if !params.is_empty() {
        url.push('?');
        url.push_str(&params.join("&"));
    }

    url
}

/// Policy-run summary for a transaction on the risk API.
pub fn risk_summary_url(risk_base_url: &str, transaction_id: &str) -> String {
    format!(
        "{}/risk/v2/decision/policy-run-summary?stage=auth&transactionId={}",
        risk_base_url, transaction_id
    )
}
