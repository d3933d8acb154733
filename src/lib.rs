// SecureBank Ledger Kernel - Core Library
// Exposes the account/customer core for use in the CLI and tests

pub mod entities;
pub mod errors;
pub mod export;

// Re-export commonly used types
pub use entities::{
    Account, AccountKind, AuditLog, Customer, Transaction, TransactionType,
    INTEREST_RATE, OVERDRAFT_FEE, OVERDRAFT_LIMIT,
};
pub use errors::LedgerError;
pub use export::{statement_string, write_statement};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
