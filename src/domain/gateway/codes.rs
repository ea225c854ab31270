//! Processor code tables.
//!
//! Numeric and string codes defined by the Payrix API. The values are part of
//! the wire contract and must not change: numeric tables serialize as bare
//! integers, string tables as their exact tags.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

/// Unit of measure sent with line items.
pub const ITEM_UNIT_EACH: &str = "EACH";

/// A numeric code that is not part of the named table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("unknown {table} code: {code}")]
pub struct UnknownCode {
    pub table: &'static str,
    pub code: i32,
}

/// Declares a fieldless enum backed by fixed integer codes, with lossless
/// conversion in both directions and integer serde representation.
macro_rules! numeric_codes {
    (
        $(#[$meta:meta])*
        $name:ident as $table:literal {
            $( $(#[$vmeta:meta])* $variant:ident = $code:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $( $(#[$vmeta])* $variant ),+
        }

        impl $name {
            /// Every code in the table, in ascending order.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// Wire value of this code.
            pub fn code(&self) -> i32 {
                match self {
                    $( $name::$variant => $code ),+
                }
            }
        }

        impl TryFrom<i32> for $name {
            type Error = UnknownCode;

            fn try_from(code: i32) -> Result<Self, Self::Error> {
                match code {
                    $( $code => Ok($name::$variant), )+
                    other => Err(UnknownCode { table: $table, code: other }),
                }
            }
        }

        impl From<$name> for i32 {
            fn from(value: $name) -> i32 {
                value.code()
            }
        }

        impl From<$name> for serde_json::Value {
            fn from(value: $name) -> serde_json::Value {
                serde_json::Value::from(value.code())
            }
        }

        impl Serialize for $name {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_i32(self.code())
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let code = i32::deserialize(deserializer)?;
                $name::try_from(code).map_err(serde::de::Error::custom)
            }
        }
    };
}

numeric_codes! {
    /// Channel through which a transaction was initiated.
    TransactionOrigin as "transaction origin" {
        Ecommerce = 2,
        /// Tokenized card captured by the hosted payment frame.
        Payframe = 8,
    }
}

numeric_codes! {
    /// Transaction type.
    TransactionType as "transaction type" {
        CreditCardSale = 1,
        CreditCardAuth = 2,
        CreditCardCapture = 3,
        /// Void of a card transaction.
        CreditCardReversed = 4,
        CreditCardRefund = 5,
        EcheckSale = 7,
        EcheckRefund = 8,
        EcheckRedeposit = 11,
        EcheckVerification = 12,
    }
}

impl TransactionType {
    /// Returns true for eCheck (ACH) transaction types.
    pub fn is_echeck(&self) -> bool {
        matches!(
            self,
            TransactionType::EcheckSale
                | TransactionType::EcheckRefund
                | TransactionType::EcheckRedeposit
                | TransactionType::EcheckVerification
        )
    }

    /// Returns true for types that move money back to the payer.
    pub fn is_refund(&self) -> bool {
        matches!(
            self,
            TransactionType::CreditCardReversed
                | TransactionType::CreditCardRefund
                | TransactionType::EcheckRefund
                | TransactionType::EcheckRedeposit
        )
    }
}

numeric_codes! {
    /// Transaction status.
    TransactionStatus as "transaction status" {
        Pending = 0,
        Approved = 1,
        Failed = 2,
        Captured = 3,
        Settled = 4,
        Returned = 5,
    }
}

numeric_codes! {
    /// Merchant boarding status.
    MerchantStatus as "merchant status" {
        NotReady = 0,
        Ready = 1,
        Boarded = 2,
        Manual = 3,
        Closed = 4,
        Incomplete = 5,
        Denied = 6,
    }
}

numeric_codes! {
    /// Disbursement (payout) status.
    DisbursementStatus as "disbursement status" {
        Requested = 1,
        Processing = 2,
        Processed = 3,
        Failed = 4,
        Denied = 5,
        Returned = 6,
    }
}

numeric_codes! {
    /// Event that produced a disbursement entry.
    DisbursementEvent as "disbursement event" {
        Days = 1,
        Weeks = 2,
        Months = 3,
        Years = 4,
        Single = 5,
        Auth = 6,
        CreditCardCapture = 7,
        CreditCardRefund = 8,
        Board = 9,
        Payout = 10,
        Chargeback = 11,
        Overdraft = 12,
        Interchange = 13,
        Processor = 14,
        AchFail = 15,
        Account = 16,
        Sift = 17,
        Adjustment = 18,
        Retrieval = 19,
        Arbitration = 20,
        EcheckSale = 21,
        EcheckRefund = 22,
        EcheckReturn = 23,
        Settlement = 24,
        MisUse = 25,
        ProfitShare = 26,
        Unauth = 27,
        AchNoc = 28,
        EcheckNoc = 29,
        EcheckFail = 30,
        EcheckNsf = 31,
        Currency = 32,
        TerminalTxn = 33,
        ReversePayout = 34,
        PartialReversePayout = 35,
        ReserveEntry = 36,
        ReserveEntryRelease = 37,
        PendingEntry = 38,
        PendingPaid = 39,
        Remainder = 40,
        RemainderUsed = 41,
        PendingRefundCancelled = 42,
    }
}

numeric_codes! {
    /// Payment method recorded on a token or transaction.
    PaymentMethod as "payment method" {
        AmericanExpress = 1,
        Visa = 2,
        MasterCard = 3,
        DinersClub = 4,
        Discover = 5,
        DebitCard = 7,
        CheckingAccount = 8,
        SavingsAccount = 9,
        CorporateCheckingAccount = 10,
        CorporateSavingsAccount = 11,
    }
}

impl PaymentMethod {
    /// Human-readable name as shown by the processor.
    pub fn display_name(&self) -> &'static str {
        match self {
            PaymentMethod::AmericanExpress => "American Express",
            PaymentMethod::Visa => "Visa",
            PaymentMethod::MasterCard => "MasterCard",
            PaymentMethod::DinersClub => "Diners Club",
            PaymentMethod::Discover => "Discover",
            PaymentMethod::DebitCard => "Debit card",
            PaymentMethod::CheckingAccount => "Checking account",
            PaymentMethod::SavingsAccount => "Savings account",
            PaymentMethod::CorporateCheckingAccount => "Corporate checking account",
            PaymentMethod::CorporateSavingsAccount => "Corporate savings account",
        }
    }

    /// Looks up the display name for a raw method code.
    pub fn name_for_code(code: i32) -> Option<&'static str> {
        PaymentMethod::try_from(code).ok().map(|m| m.display_name())
    }
}

impl std::fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Stage of a chargeback dispute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DisputeCycle {
    Retrieval,
    First,
    Arbitration,
    Reversal,
    Representment,
    PreArbitration,
    ArbitrationLost,
    ArbitrationSplit,
    ArbitrationWon,
    IssuerAcceptPreArbitration,
    IssuerDeclinedPreArbitration,
    ResponseToIssuerPreArbitration,
}

impl DisputeCycle {
    /// Wire tag of this cycle.
    pub fn as_str(&self) -> &'static str {
        match self {
            DisputeCycle::Retrieval => "retrieval",
            DisputeCycle::First => "first",
            DisputeCycle::Arbitration => "arbitration",
            DisputeCycle::Reversal => "reversal",
            DisputeCycle::Representment => "representment",
            DisputeCycle::PreArbitration => "preArbitration",
            DisputeCycle::ArbitrationLost => "arbitrationLost",
            DisputeCycle::ArbitrationSplit => "arbitrationSplit",
            DisputeCycle::ArbitrationWon => "arbitrationWon",
            DisputeCycle::IssuerAcceptPreArbitration => "issuerAcceptPreArbitration",
            DisputeCycle::IssuerDeclinedPreArbitration => "issuerDeclinedPreArbitration",
            DisputeCycle::ResponseToIssuerPreArbitration => "responseToIssuerPreArbitration",
        }
    }
}

/// Chargeback dispute status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DisputeStatus {
    Open,
    Closed,
    Won,
    Lost,
}

impl DisputeStatus {
    /// Wire tag of this status.
    pub fn as_str(&self) -> &'static str {
        match self {
            DisputeStatus::Open => "open",
            DisputeStatus::Closed => "closed",
            DisputeStatus::Won => "won",
            DisputeStatus::Lost => "lost",
        }
    }
}

/// Status of an individual disbursement entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DisbursementEntryStatus {
    Pending,
    Processing,
    Processed,
}

impl DisbursementEntryStatus {
    /// Wire tag of this status.
    pub fn as_str(&self) -> &'static str {
        match self {
            DisbursementEntryStatus::Pending => "pending",
            DisbursementEntryStatus::Processing => "processing",
            DisbursementEntryStatus::Processed => "processed",
        }
    }
}
