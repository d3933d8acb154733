// Ledger Error Taxonomy
//
// Every fallible core operation returns one of these. All variants are
// local validation failures, detected before any state mutates for the
// step in question, and none are fatal to the process. A violated
// internal invariant is a different class entirely (a bug, not an input
// error) and is guarded by debug assertions in the account module.

use thiserror::Error;

/// Errors surfaced by the account/customer core.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LedgerError {
    /// A zero or negative amount was supplied to a deposit, withdrawal,
    /// transfer, or transaction record.
    #[error("invalid amount: {amount} (must be positive)")]
    InvalidAmount { amount: f64 },

    /// A savings debit would push the balance below zero.
    #[error("insufficient funds: balance {balance}, requested {requested}")]
    InsufficientFunds { balance: f64, requested: f64 },

    /// A checking debit, fee included, would breach the overdraft floor.
    #[error("overdraft limit exceeded: balance {balance}, requested {requested}, limit {limit}")]
    OverdraftLimitExceeded {
        balance: f64,
        requested: f64,
        limit: f64,
    },

    /// The account already belongs to a customer. There is no
    /// re-assignment path.
    #[error("account {account_id} is already assigned to customer {customer_id}")]
    AlreadyAssigned { account_id: u32, customer_id: u32 },

    /// Source and destination of a transfer are the same account.
    #[error("cannot transfer to the same account ({account_id})")]
    InvalidTarget { account_id: u32 },

    /// No account with this ID exists in the customer's set.
    #[error("account not found: {account_id}")]
    AccountNotFound { account_id: u32 },
}
