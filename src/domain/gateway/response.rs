//! Normalized result of a mutating call.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::envelope::{ApiError, Record, ResponseBody};

/// Outcome of a POST or PUT against the processor.
///
/// API-level failures (declines, validation errors) are reported here with
/// `success == false`; they are never returned as `Err`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GatewayResponse {
    /// True when the response carried no errors.
    pub success: bool,

    /// First error message, with the offending field appended.
    pub message: String,

    /// The raw `response` object, for callers that need more than the
    /// normalized fields.
    pub params: Value,

    /// Whether the call went to the sandbox.
    pub test: bool,

    /// Processor error code of the first error.
    pub error_code: Option<String>,

    /// Id of the first returned record (the transaction id for purchases).
    pub authorization: Option<String>,
}

impl GatewayResponse {
    /// Builds the normalized response from a decoded envelope.
    pub fn commit(raw: Value, body: &ResponseBody, test: bool) -> Self {
        let errors = body.errors();

        Self {
            success: errors.is_empty(),
            message: error_message(errors),
            params: raw,
            test,
            error_code: errors.first().and_then(|e| e.error_code.clone()),
            authorization: body.records().first().and_then(Record::id).map(str::to_string),
        }
    }

    pub fn is_success(&self) -> bool {
        self.success
    }

    /// First record of the raw `data` array.
    pub fn first_record(&self) -> Option<Record> {
        self.params
            .get("data")
            .and_then(|d| d.get(0))
            .and_then(|r| serde_json::from_value(r.clone()).ok())
    }
}

/// Message for the first error: `msg`, then ` (field: X)` when a field is
/// named, trimmed. Empty when there are no errors.
pub fn error_message(errors: &[ApiError]) -> String {
    let Some(first) = errors.first() else {
        return String::new();
    };

    let mut message = first.msg.clone().unwrap_or_default();
    if let Some(field) = first.field.as_deref().filter(|f| !f.trim().is_empty()) {
        message.push_str(&format!(" (field: {})", field));
    }

    message.trim().to_string()
}
