//! Typed view of the processor's JSON response envelope.
//!
//! Every response has the shape
//!
//! ```text
//! { "response": { "data": [...], "errors": [...], "details": { "page": {...} } } }
//! ```
//!
//! Each level is optional. Some error responses nest `errors` under a `data`
//! object instead of returning a `data` array; [`ResponseData::Nested`]
//! captures that form.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// One JSON object from a `data` array.
///
/// Records are kept as loosely-typed maps because their fields differ per
/// collection and callers usually read a handful of them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record(Map<String, Value>);

impl Record {
    /// The record's `id` field, if it is a string.
    pub fn id(&self) -> Option<&str> {
        self.get_str("id")
    }

    /// Raw field value.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// String field value.
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.0.get(key).and_then(Value::as_str)
    }

    /// Integer field value.
    pub fn get_i64(&self, key: &str) -> Option<i64> {
        self.0.get(key).and_then(Value::as_i64)
    }

    /// All fields of the record.
    pub fn fields(&self) -> &Map<String, Value> {
        &self.0
    }

    pub fn into_fields(self) -> Map<String, Value> {
        self.0
    }
}

impl From<Map<String, Value>> for Record {
    fn from(fields: Map<String, Value>) -> Self {
        Self(fields)
    }
}

/// The `response` object of the envelope.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResponseBody {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<ResponseData>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<ApiError>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<ResponseDetails>,
}

/// Contents of `response.data`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ResponseData {
    /// The usual form: a list of records.
    Records(Vec<Record>),

    /// An object carrying errors instead of records.
    Nested(NestedData),

    /// Any other shape. Carries no records and no errors.
    Other(Value),
}

/// Object form of `response.data`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NestedData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<ApiError>>,
}

/// A single API-level error.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ApiError {
    #[serde(default)]
    pub msg: Option<String>,

    /// Request field the error refers to.
    #[serde(default)]
    pub field: Option<String>,

    /// Processor error code; numeric codes are rendered as strings.
    #[serde(
        rename = "errorCode",
        default,
        deserialize_with = "string_or_number",
        skip_serializing_if = "Option::is_none"
    )]
    pub error_code: Option<String>,
}

/// `response.details`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResponseDetails {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page: Option<PageDetails>,
}

/// Pagination metadata from `response.details.page`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PageDetails {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current: Option<u64>,

    #[serde(rename = "hasMore", default, skip_serializing_if = "Option::is_none")]
    pub has_more: Option<bool>,

    /// Fields this crate does not interpret (e.g. `limit`, `last`).
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ResponseBody {
    /// Records from `data`; empty when `data` is absent or not a list.
    pub fn records(&self) -> &[Record] {
        match &self.data {
            Some(ResponseData::Records(records)) => records,
            _ => &[],
        }
    }

    pub fn into_records(self) -> Vec<Record> {
        match self.data {
            Some(ResponseData::Records(records)) => records,
            _ => Vec::new(),
        }
    }

    /// First record of `data`, if any.
    pub fn into_first_record(self) -> Option<Record> {
        self.into_records().into_iter().next()
    }

    /// API errors for this response.
    ///
    /// Top-level `errors` take precedence whenever present, even if empty;
    /// otherwise errors nested under a `data` object are used.
    pub fn errors(&self) -> &[ApiError] {
        if let Some(errors) = &self.errors {
            return errors;
        }
        match &self.data {
            Some(ResponseData::Nested(NestedData {
                errors: Some(errors),
            })) => errors,
            _ => &[],
        }
    }

    /// Whether the server reports another page after this one.
    pub fn has_more(&self) -> bool {
        self.page().and_then(|p| p.has_more).unwrap_or(false)
    }

    pub fn page(&self) -> Option<&PageDetails> {
        self.details.as_ref().and_then(|d| d.page.as_ref())
    }
}

fn string_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        None | Some(Value::Null) => None,
        Some(Value::String(s)) => Some(s),
        Some(other) => Some(other.to_string()),
    })
}
