//! Payrix gateway domain module.
//!
//! Wire-level vocabulary of the processor and the pure logic that does not
//! need a network: code tables, collections, the response envelope, request
//! bodies and response normalization.
//!
//! # Module Structure
//!
//! - `codes` - Numeric and string code tables
//! - `endpoint` - REST collections and their path segments
//! - `envelope` - Typed `response` envelope and records
//! - `payload` - Transaction request bodies
//! - `response` - Normalized `GatewayResponse` (commit step)

mod codes;
mod endpoint;
mod envelope;
pub mod payload;
mod response;

pub use codes::{
    DisbursementEntryStatus, DisbursementEvent, DisbursementStatus, DisputeCycle, DisputeStatus,
    MerchantStatus, PaymentMethod, TransactionOrigin, TransactionStatus, TransactionType,
    UnknownCode, ITEM_UNIT_EACH,
};
pub use endpoint::Endpoint;
pub use envelope::{
    ApiError, NestedData, PageDetails, Record, ResponseBody, ResponseData, ResponseDetails,
};
pub use payload::Fields;
pub use response::{error_message, GatewayResponse};
