// Entity Models - the ledger core
//
// Each entity has:
// - Stable identity (integer ID) that never changes
// - State reachable only through its operation protocol
// - An append-only audit trail of every balance-affecting event

pub mod account;
pub mod audit;
pub mod customer;
pub mod transaction;

pub use account::{Account, AccountKind, INTEREST_RATE, OVERDRAFT_FEE, OVERDRAFT_LIMIT};
pub use audit::AuditLog;
pub use customer::Customer;
pub use transaction::{Transaction, TransactionType};
