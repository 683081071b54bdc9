//! Core domain types shown on the transfer screen.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::Amount;

/// Transaction identifier.
pub type TxId = u32;

/// Transfer identifier.
pub type TransferId = u32;

/// Outcome of a past transaction.
///
/// Unrecognized status text is kept verbatim in `Other` instead of being
/// rejected, so a fixture with an unexpected status still loads.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum TransactionStatus {
    Success,
    Pending,
    Failed,
    Other(String),
}

impl TransactionStatus {
    pub fn as_str(&self) -> &str {
        match self {
            TransactionStatus::Success => "success",
            TransactionStatus::Pending => "pending",
            TransactionStatus::Failed => "failed",
            TransactionStatus::Other(raw) => raw,
        }
    }
}

impl From<&str> for TransactionStatus {
    fn from(raw: &str) -> Self {
        match raw {
            "success" => TransactionStatus::Success,
            "pending" => TransactionStatus::Pending,
            "failed" => TransactionStatus::Failed,
            other => TransactionStatus::Other(other.to_string()),
        }
    }
}

impl From<String> for TransactionStatus {
    fn from(raw: String) -> Self {
        TransactionStatus::from(raw.as_str())
    }
}

impl From<TransactionStatus> for String {
    fn from(status: TransactionStatus) -> Self {
        status.as_str().to_string()
    }
}

impl fmt::Display for TransactionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A past money transfer listed in the history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: TxId,
    pub recipient: String,
    pub amount: Amount,
    pub status: TransactionStatus,
    pub date: NaiveDate,
}

/// Delivery status of a transfer returned by the feed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransferStatus {
    Completed,
    Pending,
}

/// How the recipient collects the money.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaymentMode {
    #[serde(rename = "Mobile Money")]
    MobileMoney,
    Cash,
    Bank,
}

impl fmt::Display for PaymentMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PaymentMode::MobileMoney => f.write_str("Mobile Money"),
            PaymentMode::Cash => f.write_str("Cash"),
            PaymentMode::Bank => f.write_str("Bank"),
        }
    }
}

/// An international transfer as delivered by the transfer feed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transfer {
    pub id: TransferId,
    pub recipient: String,
    /// Recipient phone number in its local format.
    pub phone: String,
    pub country: String,
    pub amount: Amount,
    /// Three-letter currency code, e.g. `XOF`.
    pub currency: String,
    pub status: TransferStatus,
    pub timestamp: DateTime<Utc>,
    /// Fee as a percentage of the amount.
    pub commission: f64,
    pub mode: PaymentMode,
}
