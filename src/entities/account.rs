// 💳 Account Entity - Balance, withdrawal policy, audit trail
//
// "Account ID is IDENTITY (never changes), balance is a VALUE that only
// the protocol may move"
//
// Each account kind supplies its own debit policy:
// - Savings: floor at zero, 1.5% interest on demand
// - Checking: floor at -500, one-time $35 fee on the drop below zero
//
// Every successful mutation appends a record to the account's audit log,
// so the balance can always be replayed from history.

use serde::{Deserialize, Serialize};

use super::audit::AuditLog;
use super::transaction::{Transaction, TransactionType};
use crate::errors::LedgerError;

// ============================================================================
// POLICY CONSTANTS
// ============================================================================

/// Savings interest rate applied by `apply_interest` (1.5%).
pub const INTEREST_RATE: f64 = 0.015;

/// Most negative balance a checking account may reach.
pub const OVERDRAFT_LIMIT: f64 = -500.0;

/// One-time charge on the first drop below zero.
pub const OVERDRAFT_FEE: f64 = 35.0;

// ============================================================================
// ACCOUNT KIND
// ============================================================================

/// Withdrawal policy tag. The kind-specific numbers travel with the tag,
/// so a serialized account row carries its own policy fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum AccountKind {
    /// Floor at zero, interest-bearing.
    Savings { interest_rate: f64 },

    /// May run negative down to `overdraft_limit`; the first crossing
    /// below zero costs `overdraft_fee`.
    Checking {
        overdraft_limit: f64,
        overdraft_fee: f64,
    },
}

impl AccountKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            AccountKind::Savings { .. } => "Savings",
            AccountKind::Checking { .. } => "Checking",
        }
    }
}

// ============================================================================
// ACCOUNT ENTITY
// ============================================================================

/// A balance-holding entity with its own withdrawal policy and history.
///
/// Fields are private on purpose: the balance is reachable only through
/// deposit/withdraw/transfer, and the owner can be assigned exactly once.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Account {
    /// Stable identity - NEVER changes. Uniqueness across the system is
    /// the caller's responsibility (check `Customer::get_account` before
    /// constructing).
    account_id: u32,

    /// `None` until the account is opened under a customer. The
    /// assignment is a one-shot transition with no way back.
    #[serde(rename = "customer_id")]
    owner: Option<u32>,

    /// Current balance. Starts at 0.
    balance: f64,

    /// Withdrawal policy for this account.
    kind: AccountKind,

    /// Every balance-affecting event, in order.
    audit_log: AuditLog,
}

impl Account {
    /// New unassigned savings account with a zero balance.
    pub fn savings(account_id: u32) -> Self {
        Account {
            account_id,
            owner: None,
            balance: 0.0,
            kind: AccountKind::Savings {
                interest_rate: INTEREST_RATE,
            },
            audit_log: AuditLog::new(),
        }
    }

    /// New unassigned checking account with a zero balance.
    pub fn checking(account_id: u32) -> Self {
        Account {
            account_id,
            owner: None,
            balance: 0.0,
            kind: AccountKind::Checking {
                overdraft_limit: OVERDRAFT_LIMIT,
                overdraft_fee: OVERDRAFT_FEE,
            },
            audit_log: AuditLog::new(),
        }
    }

    // ========================================================================
    // OWNERSHIP
    // ========================================================================

    /// Assign this account to a customer. One-shot: a second call fails
    /// with `AlreadyAssigned` no matter which customer asks.
    pub fn assign_customer(&mut self, customer_id: u32) -> Result<(), LedgerError> {
        if let Some(existing) = self.owner {
            return Err(LedgerError::AlreadyAssigned {
                account_id: self.account_id,
                customer_id: existing,
            });
        }

        self.owner = Some(customer_id);
        Ok(())
    }

    // ========================================================================
    // MUTATION PROTOCOL
    // ========================================================================

    /// Pay money in through the public path.
    pub fn deposit(&mut self, amount: f64) -> Result<(), LedgerError> {
        self.credit(amount, TransactionType::Deposit)
    }

    /// Take money out under this account's withdrawal policy.
    pub fn withdraw(&mut self, amount: f64) -> Result<(), LedgerError> {
        self.debit(amount, TransactionType::Withdraw)
    }

    /// Fail fast when `destination` is not a legal transfer target.
    ///
    /// `transfer` runs the same check internally; it is exposed so a
    /// caller can reject a bad target before prompting for an amount.
    pub fn validate_transfer_target(&self, destination: &Account) -> Result<(), LedgerError> {
        if destination.account_id == self.account_id {
            return Err(LedgerError::InvalidTarget {
                account_id: self.account_id,
            });
        }

        Ok(())
    }

    /// Move `amount` to `destination`: a `TRANSFER SENT` debit on self
    /// followed by a `TRANSFER RECEIVED` credit on the destination.
    ///
    /// If the debit fails, the whole transfer aborts and neither account
    /// changes. The debit/credit pair carries no rollback log, so it is
    /// not atomic across a crash between the two steps; in-process the
    /// window is unobservable, because the credit leg cannot fail once
    /// the debit has validated the amount.
    pub fn transfer(
        &mut self,
        destination: &mut Account,
        amount: f64,
    ) -> Result<(), LedgerError> {
        self.validate_transfer_target(destination)?;
        self.debit(amount, TransactionType::TransferSent)?;
        destination.credit(amount, TransactionType::TransferReceived)
    }

    /// Credit interest on a savings balance: `balance * interest_rate`,
    /// logged as `INTEREST APPLIED`. Manually invoked, never scheduled.
    ///
    /// Returns the credited amount. A zero or negative balance yields
    /// `Some(0.0)` with no record appended; a non-interest-bearing
    /// account yields `None`.
    pub fn apply_interest(&mut self) -> Option<f64> {
        let rate = match self.kind {
            AccountKind::Savings { interest_rate } => interest_rate,
            AccountKind::Checking { .. } => return None,
        };

        let interest = self.balance * rate;
        if interest > 0.0 {
            self.credit(interest, TransactionType::InterestApplied)
                .expect("positive interest always passes credit validation");
            Some(interest)
        } else {
            Some(0.0)
        }
    }

    // ========================================================================
    // INTERNAL CREDIT / DEBIT
    // ========================================================================

    /// Single credit path shared by deposit, transfer-received, and
    /// interest. A rule added here applies to all three; a transfer
    /// credit can never bypass it.
    fn credit(&mut self, amount: f64, kind: TransactionType) -> Result<(), LedgerError> {
        // Record construction enforces amount > 0 before anything mutates.
        let record = Transaction::new(kind, amount)?;

        self.balance += amount;
        self.audit_log.append(record);
        Ok(())
    }

    /// Kind-dispatched debit policy. Validation completes before any
    /// state changes, so a failed debit leaves balance and log untouched.
    fn debit(&mut self, amount: f64, kind: TransactionType) -> Result<(), LedgerError> {
        match self.kind {
            AccountKind::Savings { .. } => self.debit_savings(amount, kind),
            AccountKind::Checking {
                overdraft_limit,
                overdraft_fee,
            } => self.debit_checking(amount, kind, overdraft_limit, overdraft_fee),
        }
    }

    /// Savings floor: the balance never goes below zero.
    fn debit_savings(&mut self, amount: f64, kind: TransactionType) -> Result<(), LedgerError> {
        let record = Transaction::new(kind, amount)?;

        if self.balance - amount < 0.0 {
            return Err(LedgerError::InsufficientFunds {
                balance: self.balance,
                requested: amount,
            });
        }

        self.balance -= amount;
        self.audit_log.append(record);

        debug_assert!(self.balance >= 0.0, "savings balance went negative");
        Ok(())
    }

    /// Checking floor: the balance never goes below `overdraft_limit`.
    fn debit_checking(
        &mut self,
        amount: f64,
        kind: TransactionType,
        overdraft_limit: f64,
        overdraft_fee: f64,
    ) -> Result<(), LedgerError> {
        let record = Transaction::new(kind, amount)?;

        let was_negative = self.balance < 0.0;
        let projected = self.balance - amount;

        // The fee triggers exactly once, on the crossing from non-negative
        // to negative. An account already below zero is never charged again.
        let fee = if projected < 0.0 && !was_negative {
            overdraft_fee
        } else {
            0.0
        };

        if projected - fee < overdraft_limit {
            return Err(LedgerError::OverdraftLimitExceeded {
                balance: self.balance,
                requested: amount,
                limit: overdraft_limit,
            });
        }

        self.balance -= amount;
        self.audit_log.append(record);

        if fee > 0.0 {
            // The fee is its own audit entry, separate from the
            // withdrawal that triggered it.
            let fee_record = Transaction::new(TransactionType::ExtraFee, fee)
                .expect("the fee is a positive constant");
            self.balance -= fee;
            self.audit_log.append(fee_record);
        }

        debug_assert!(
            self.balance >= overdraft_limit,
            "checking balance broke the overdraft floor"
        );
        Ok(())
    }

    // ========================================================================
    // READ-ONLY VIEWS
    // ========================================================================

    /// Snapshot of the transaction history, oldest first.
    pub fn history(&self) -> Vec<Transaction> {
        self.audit_log.snapshot()
    }

    pub fn balance(&self) -> f64 {
        self.balance
    }

    pub fn account_id(&self) -> u32 {
        self.account_id
    }

    /// Owning customer, if the account has been opened under one.
    pub fn customer_id(&self) -> Option<u32> {
        self.owner
    }

    pub fn kind(&self) -> &AccountKind {
        &self.kind
    }

    /// `true` for interest-bearing accounts.
    pub fn is_savings(&self) -> bool {
        matches!(self.kind, AccountKind::Savings { .. })
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    /// Checking account seeded with an opening deposit.
    fn checking_with(balance: f64) -> Account {
        let mut account = Account::checking(1);
        account.deposit(balance).unwrap();
        account
    }

    /// Savings account seeded with an opening deposit.
    fn savings_with(balance: f64) -> Account {
        let mut account = Account::savings(1);
        account.deposit(balance).unwrap();
        account
    }

    #[test]
    fn test_new_account_starts_empty_and_unassigned() {
        let account = Account::savings(7);

        assert_eq!(account.account_id(), 7);
        assert_eq!(account.customer_id(), None);
        assert_eq!(account.balance(), 0.0);
        assert!(account.history().is_empty());
    }

    #[test]
    fn test_deposit_updates_balance_and_history() {
        let mut account = Account::savings(1);
        account.deposit(100.0).unwrap();

        assert_eq!(account.balance(), 100.0);

        let history = account.history();
        assert_eq!(history.len(), 1);
        assert_eq!(history[0].kind(), TransactionType::Deposit);
        assert_eq!(history[0].amount(), 100.0);
    }

    #[test]
    fn test_deposit_rejects_non_positive_amounts() {
        let mut account = Account::checking(1);

        assert_eq!(
            account.deposit(0.0).unwrap_err(),
            LedgerError::InvalidAmount { amount: 0.0 }
        );
        assert_eq!(
            account.deposit(-50.0).unwrap_err(),
            LedgerError::InvalidAmount { amount: -50.0 }
        );
        assert_eq!(account.balance(), 0.0);
        assert!(account.history().is_empty());
    }

    #[test]
    fn test_deposit_order_does_not_matter() {
        let mut first = Account::savings(1);
        first.deposit(75.25).unwrap();
        first.deposit(20.5).unwrap();

        let mut second = Account::savings(2);
        second.deposit(20.5).unwrap();
        second.deposit(75.25).unwrap();

        assert_eq!(first.balance(), second.balance());
    }

    #[test]
    fn test_assign_customer_is_one_shot() {
        let mut account = Account::checking(5);

        account.assign_customer(10).unwrap();
        assert_eq!(account.customer_id(), Some(10));

        // A second assignment fails, even for the same customer.
        assert_eq!(
            account.assign_customer(11).unwrap_err(),
            LedgerError::AlreadyAssigned {
                account_id: 5,
                customer_id: 10
            }
        );
        assert_eq!(account.customer_id(), Some(10));
    }

    // ------------------------------------------------------------------------
    // Savings policy
    // ------------------------------------------------------------------------

    #[test]
    fn test_savings_withdraw_within_balance() {
        let mut account = savings_with(100.0);
        account.withdraw(50.0).unwrap();

        assert_eq!(account.balance(), 50.0);
    }

    #[test]
    fn test_savings_withdraw_exact_balance_to_zero() {
        let mut account = savings_with(100.0);
        account.withdraw(100.0).unwrap();

        assert_eq!(account.balance(), 0.0);
    }

    #[test]
    fn test_savings_insufficient_funds() {
        let mut account = savings_with(100.0);

        assert_eq!(
            account.withdraw(101.0).unwrap_err(),
            LedgerError::InsufficientFunds {
                balance: 100.0,
                requested: 101.0
            }
        );

        // Nothing changed: no balance movement, no record.
        assert_eq!(account.balance(), 100.0);
        assert_eq!(account.history().len(), 1);
    }

    #[test]
    fn test_savings_withdraw_rejects_non_positive_amounts() {
        let mut account = savings_with(100.0);

        assert_eq!(
            account.withdraw(-10.0).unwrap_err(),
            LedgerError::InvalidAmount { amount: -10.0 }
        );
        assert_eq!(account.balance(), 100.0);
    }

    #[test]
    fn test_apply_interest_credits_and_logs() {
        let mut account = savings_with(100.0);
        let interest = account.apply_interest();

        assert_eq!(interest, Some(1.5));
        assert_eq!(account.balance(), 101.5);

        let history = account.history();
        assert_eq!(history.len(), 2);
        assert_eq!(history[1].kind(), TransactionType::InterestApplied);
        assert_eq!(history[1].amount(), 1.5);
    }

    #[test]
    fn test_apply_interest_on_zero_balance_is_a_noop() {
        let mut account = Account::savings(1);
        let interest = account.apply_interest();

        assert_eq!(interest, Some(0.0));
        assert_eq!(account.balance(), 0.0);
        assert!(account.history().is_empty());
    }

    #[test]
    fn test_apply_interest_on_checking_yields_none() {
        let mut account = checking_with(100.0);
        assert_eq!(account.apply_interest(), None);
        assert_eq!(account.balance(), 100.0);
        assert_eq!(account.history().len(), 1);
    }

    // ------------------------------------------------------------------------
    // Checking policy
    // ------------------------------------------------------------------------

    #[test]
    fn test_checking_withdraw_within_balance_no_fee() {
        let mut account = checking_with(100.0);
        account.withdraw(50.0).unwrap();

        assert_eq!(account.balance(), 50.0);
        assert_eq!(account.history().len(), 2);
    }

    #[test]
    fn test_checking_withdraw_to_zero_no_fee() {
        let mut account = checking_with(100.0);
        account.withdraw(100.0).unwrap();

        assert_eq!(account.balance(), 0.0);
        assert_eq!(account.history().len(), 2);
    }

    #[test]
    fn test_checking_overdraft_fee_applied_on_crossing() {
        // 100 - 150 = -50, plus the one-time 35 fee -> -85
        let mut account = checking_with(100.0);
        account.withdraw(150.0).unwrap();

        assert_eq!(account.balance(), -85.0);

        // The fee is its own entry, after the withdrawal that caused it.
        let history = account.history();
        assert_eq!(history.len(), 3);
        assert_eq!(history[1].kind(), TransactionType::Withdraw);
        assert_eq!(history[1].amount(), 150.0);
        assert_eq!(history[2].kind(), TransactionType::ExtraFee);
        assert_eq!(history[2].amount(), 35.0);
    }

    #[test]
    fn test_checking_no_second_fee_while_negative() {
        let mut account = checking_with(100.0);
        account.withdraw(150.0).unwrap();
        assert_eq!(account.balance(), -85.0);

        // Already negative: -85 - 10 = -95, no further fee.
        account.withdraw(10.0).unwrap();
        assert_eq!(account.balance(), -95.0);

        let fee_entries = account
            .history()
            .iter()
            .filter(|tx| tx.kind() == TransactionType::ExtraFee)
            .count();
        assert_eq!(fee_entries, 1);
    }

    #[test]
    fn test_checking_exact_overdraft_limit_boundary() {
        // Max swing from 100: 100 + 500 - 35 = 565, landing exactly on -500.
        let mut account = checking_with(100.0);
        account.withdraw(565.0).unwrap();

        assert_eq!(account.balance(), -500.0);
    }

    #[test]
    fn test_checking_just_over_limit_rejected() {
        let mut account = checking_with(100.0);

        assert_eq!(
            account.withdraw(565.01).unwrap_err(),
            LedgerError::OverdraftLimitExceeded {
                balance: 100.0,
                requested: 565.01,
                limit: -500.0
            }
        );
        assert_eq!(account.balance(), 100.0);
        assert_eq!(account.history().len(), 1);
    }

    #[test]
    fn test_checking_withdraw_rejects_non_positive_amounts() {
        let mut account = checking_with(100.0);

        assert_eq!(
            account.withdraw(0.0).unwrap_err(),
            LedgerError::InvalidAmount { amount: 0.0 }
        );
        assert_eq!(account.balance(), 100.0);
    }

    // ------------------------------------------------------------------------
    // Transfers
    // ------------------------------------------------------------------------

    #[test]
    fn test_transfer_moves_funds_and_logs_both_sides() {
        let mut sender = checking_with(100.0);
        let mut receiver = Account::savings(2);

        sender.transfer(&mut receiver, 50.0).unwrap();

        assert_eq!(sender.balance(), 50.0);
        assert_eq!(receiver.balance(), 50.0);

        let sent = sender.history();
        assert_eq!(sent.last().unwrap().kind(), TransactionType::TransferSent);
        assert_eq!(sent.last().unwrap().amount(), 50.0);

        let received = receiver.history();
        assert_eq!(received.len(), 1);
        assert_eq!(received[0].kind(), TransactionType::TransferReceived);
        assert_eq!(received[0].amount(), 50.0);
    }

    #[test]
    fn test_transfer_conservation_with_overdraft_fee() {
        let mut sender = checking_with(100.0);
        let mut receiver = Account::savings(2);
        let total_before = sender.balance() + receiver.balance();

        // 100 - 150 crosses zero on the sender, costing the fee.
        sender.transfer(&mut receiver, 150.0).unwrap();

        assert_eq!(sender.balance(), -85.0);
        assert_eq!(receiver.balance(), 150.0);

        // Money is conserved up to the fee charged on the sender.
        let total_after = sender.balance() + receiver.balance();
        assert_eq!(total_after, total_before - OVERDRAFT_FEE);
    }

    #[test]
    fn test_failed_transfer_leaves_both_accounts_untouched() {
        let mut sender = savings_with(100.0);
        let mut receiver = Account::checking(2);

        let result = sender.transfer(&mut receiver, 200.0);
        assert_eq!(
            result.unwrap_err(),
            LedgerError::InsufficientFunds {
                balance: 100.0,
                requested: 200.0
            }
        );

        assert_eq!(sender.balance(), 100.0);
        assert_eq!(sender.history().len(), 1);
        assert_eq!(receiver.balance(), 0.0);
        assert!(receiver.history().is_empty());
    }

    #[test]
    fn test_transfer_to_self_rejected() {
        // Two objects sharing an ID are "the same account" as far as the
        // ledger is concerned; ID is the identity notion.
        let mut sender = savings_with(100.0);
        let mut same_id = Account::savings(1);

        assert_eq!(
            sender.transfer(&mut same_id, 10.0).unwrap_err(),
            LedgerError::InvalidTarget { account_id: 1 }
        );
        assert_eq!(sender.balance(), 100.0);
    }

    #[test]
    fn test_validate_transfer_target() {
        let sender = Account::savings(1);
        let other = Account::checking(2);
        let same_id = Account::checking(1);

        assert!(sender.validate_transfer_target(&other).is_ok());
        assert_eq!(
            sender.validate_transfer_target(&same_id).unwrap_err(),
            LedgerError::InvalidTarget { account_id: 1 }
        );
    }

    #[test]
    fn test_transfer_can_trigger_overdraft_rejection() {
        let mut sender = checking_with(100.0);
        let mut receiver = Account::savings(2);

        let result = sender.transfer(&mut receiver, 1000.0);
        assert!(matches!(
            result,
            Err(LedgerError::OverdraftLimitExceeded { .. })
        ));
        assert_eq!(sender.balance(), 100.0);
        assert_eq!(receiver.balance(), 0.0);
    }

    // ------------------------------------------------------------------------
    // Debit floors, replayed over longer sequences
    // ------------------------------------------------------------------------

    #[test]
    fn test_balance_never_breaks_the_floor_over_a_sequence() {
        let mut account = checking_with(100.0);

        for amount in [40.0, 80.0, 120.0, 200.0, 300.0, 150.0] {
            // Successes and rejections may interleave; the floor holds
            // after every step.
            let _ = account.withdraw(amount);
            assert!(account.balance() >= OVERDRAFT_LIMIT);
        }
    }

    #[test]
    fn test_savings_balance_never_negative_over_a_sequence() {
        let mut account = savings_with(100.0);

        for amount in [30.0, 50.0, 40.0, 10.0, 25.0] {
            let _ = account.withdraw(amount);
            assert!(account.balance() >= 0.0);
        }
    }
}
