// 📜 Audit Log - Append-only transaction history
//
// One log per account, created with it and dying with it. Entries are
// never reordered or removed, and the only read path hands out a
// snapshot, so the internal sequence cannot be touched from outside.

use serde::{Deserialize, Serialize};

use super::transaction::Transaction;

/// Append-only, chronologically ordered record of an account's
/// balance-affecting events. Insertion order == chronological order.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct AuditLog {
    transactions: Vec<Transaction>,
}

impl AuditLog {
    pub fn new() -> Self {
        AuditLog {
            transactions: Vec::new(),
        }
    }

    /// Append a record as the new last element.
    ///
    /// Only a constructed `Transaction` can reach this log, and
    /// construction already enforces record validity, so appending is
    /// infallible.
    pub fn append(&mut self, transaction: Transaction) {
        self.transactions.push(transaction);
    }

    /// Independent copy of the log, oldest first. Mutating the returned
    /// vec never affects the internal sequence.
    pub fn snapshot(&self) -> Vec<Transaction> {
        self.transactions.clone()
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }
}

// ============================================================================
// TESTS
// ============================================================================
