//! Request bodies for transaction calls.

use serde_json::{Map, Value};

use super::codes::{TransactionOrigin, TransactionType};

/// Extra request fields supplied by the caller (order id, description, tax,
/// or any field to update). Keys override the generated ones.
pub type Fields = Map<String, Value>;

/// Body for a sale or authorization against a stored token.
pub fn token_purchase(
    token: &str,
    currency: &str,
    amount: i64,
    origin: TransactionOrigin,
    txn_type: TransactionType,
    options: Fields,
) -> Fields {
    let mut payload = Fields::new();
    payload.insert("token".into(), Value::from(token));
    payload.insert("currency".into(), Value::from(currency));
    payload.insert("total".into(), Value::from(amount));
    payload.insert("origin".into(), origin.into());
    payload.insert("type".into(), txn_type.into());
    merge(payload, options)
}

/// Body for a reversal of an earlier transaction.
pub fn void(
    transaction_id: &str,
    txn_type: TransactionType,
    origin: TransactionOrigin,
    options: Fields,
) -> Fields {
    merge(referencing(transaction_id, txn_type, origin), options)
}

/// Body for a refund of an earlier transaction.
///
/// `total` is always sent; `null` asks the processor to refund the full
/// amount.
pub fn credit(
    transaction_id: &str,
    txn_type: TransactionType,
    origin: TransactionOrigin,
    amount: Option<i64>,
    options: Fields,
) -> Fields {
    let mut payload = referencing(transaction_id, txn_type, origin);
    payload.insert("total".into(), amount.map(Value::from).unwrap_or(Value::Null));
    merge(payload, options)
}

fn referencing(transaction_id: &str, txn_type: TransactionType, origin: TransactionOrigin) -> Fields {
    let mut payload = Fields::new();
    payload.insert("fortxn".into(), Value::from(transaction_id));
    payload.insert("type".into(), txn_type.into());
    payload.insert("origin".into(), origin.into());
    payload
}

fn merge(mut base: Fields, options: Fields) -> Fields {
    base.extend(options);
    base
}
