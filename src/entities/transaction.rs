// 🧾 Transaction Record - Immutable audit fact
//
// A transaction is a VALUE: once constructed it never changes. Two
// records with identical fields are still distinct entries in a log,
// which is why this type deliberately has no equality.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::LedgerError;

// ============================================================================
// TRANSACTION TYPE
// ============================================================================

/// Tag carried by every audit record, naming the mutation that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TransactionType {
    /// Money paid in through the public deposit path
    Deposit,

    /// Money taken out through the public withdraw path
    Withdraw,

    /// Debit leg of a transfer
    TransferSent,

    /// Credit leg of a transfer
    TransferReceived,

    /// Interest credited to a savings account
    InterestApplied,

    /// One-time overdraft fee on a checking account
    ExtraFee,
}

impl TransactionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionType::Deposit => "DEPOSIT",
            TransactionType::Withdraw => "WITHDRAW",
            TransactionType::TransferSent => "TRANSFER SENT",
            TransactionType::TransferReceived => "TRANSFER RECEIVED",
            TransactionType::InterestApplied => "INTEREST APPLIED",
            TransactionType::ExtraFee => "EXTRA FEE",
        }
    }
}

impl std::fmt::Display for TransactionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// TRANSACTION
// ============================================================================

/// A single balance-affecting event: what happened, how much, and when.
///
/// Fields are private and there are no mutators; a record can only be
/// read after construction. Serializes as `{type, amount, timestamp}`,
/// the row shape any persistence layer would store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transaction {
    #[serde(rename = "type")]
    kind: TransactionType,
    amount: f64,
    timestamp: DateTime<Utc>,
}

impl Transaction {
    /// Create a record stamped with the current time.
    ///
    /// Fails with `InvalidAmount` for a zero or negative amount — every
    /// entry in an audit log is strictly positive.
    pub fn new(kind: TransactionType, amount: f64) -> Result<Self, LedgerError> {
        if amount <= 0.0 {
            return Err(LedgerError::InvalidAmount { amount });
        }

        Ok(Transaction {
            kind,
            amount,
            timestamp: Utc::now(),
        })
    }

    pub fn kind(&self) -> TransactionType {
        self.kind
    }

    pub fn amount(&self) -> f64 {
        self.amount
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }
}

impl std::fmt::Display for Transaction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} - {} - ${}", self.timestamp, self.kind, self.amount)
    }
}

// ============================================================================
// TESTS
// ============================================================================
