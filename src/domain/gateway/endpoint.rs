//! REST resources exposed by the processor.

use serde::{Deserialize, Serialize};

/// A top-level REST collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Endpoint {
    Merchants,
    Tokens,
    Customers,
    Transactions,
    Entities,
    Chargebacks,
    Disbursements,
    Funds,
    Entries,
    DisbursementEntries,
}

impl Endpoint {
    /// URL path segment for this collection.
    ///
    /// Transactions live under `txns`; every other collection uses its own name.
    pub fn path_segment(&self) -> &'static str {
        match self {
            Endpoint::Merchants => "merchants",
            Endpoint::Tokens => "tokens",
            Endpoint::Customers => "customers",
            Endpoint::Transactions => "txns",
            Endpoint::Entities => "entities",
            Endpoint::Chargebacks => "chargebacks",
            Endpoint::Disbursements => "disbursements",
            Endpoint::Funds => "funds",
            Endpoint::Entries => "entries",
            Endpoint::DisbursementEntries => "disbursementEntries",
        }
    }
}

impl std::fmt::Display for Endpoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.path_segment())
    }
}
