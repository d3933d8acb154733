// 👤 Customer Entity - Owns accounts, assigns identity exactly once
//
// A customer exclusively owns its accounts for the lifetime of the model;
// only funds move between accounts, never the accounts themselves. Every
// account in the set carries this customer's ID, enforced at the door by
// `open_account`.

use serde::{Deserialize, Serialize};

use super::account::Account;
use crate::errors::LedgerError;

/// A customer and the accounts opened under their ID, in insertion order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Customer {
    customer_id: u32,
    first_name: String,
    last_name: String,
    email: String,
    accounts: Vec<Account>,
}

impl Customer {
    pub fn new(customer_id: u32, first_name: String, last_name: String, email: String) -> Self {
        Customer {
            customer_id,
            first_name,
            last_name,
            email,
            accounts: Vec::new(),
        }
    }

    /// Open `account` under this customer: assign ownership, then add it
    /// to the owned set. Propagates `AlreadyAssigned` when the account
    /// already belongs to someone; on failure the set is unchanged.
    pub fn open_account(&mut self, mut account: Account) -> Result<(), LedgerError> {
        account.assign_customer(self.customer_id)?;
        debug_assert_eq!(
            account.customer_id(),
            Some(self.customer_id),
            "account assignment failed"
        );

        self.accounts.push(account);
        Ok(())
    }

    /// Linear lookup by account ID. `None` when absent — lookups never
    /// error.
    pub fn get_account(&self, account_id: u32) -> Option<&Account> {
        self.accounts.iter().find(|a| a.account_id() == account_id)
    }

    /// Mutable counterpart of `get_account`, for running the mutation
    /// protocol on an owned account.
    pub fn get_account_mut(&mut self, account_id: u32) -> Option<&mut Account> {
        self.accounts
            .iter_mut()
            .find(|a| a.account_id() == account_id)
    }

    /// Transfer between two of this customer's accounts, addressed by ID.
    ///
    /// The indexed rendition of `Account::transfer`: both legs are split
    /// out of the owned vec, then the account protocol does the rest.
    /// Fails with `AccountNotFound` for a missing ID and `InvalidTarget`
    /// for a self-transfer; any debit failure aborts with both accounts
    /// untouched.
    pub fn transfer(&mut self, from_id: u32, to_id: u32, amount: f64) -> Result<(), LedgerError> {
        if from_id == to_id {
            return Err(LedgerError::InvalidTarget {
                account_id: from_id,
            });
        }

        let from_idx = self
            .position(from_id)
            .ok_or(LedgerError::AccountNotFound {
                account_id: from_id,
            })?;
        let to_idx = self
            .position(to_id)
            .ok_or(LedgerError::AccountNotFound { account_id: to_id })?;

        let (from, to) = if from_idx < to_idx {
            let (left, right) = self.accounts.split_at_mut(to_idx);
            (&mut left[from_idx], &mut right[0])
        } else {
            let (left, right) = self.accounts.split_at_mut(from_idx);
            (&mut right[0], &mut left[to_idx])
        };

        from.transfer(to, amount)
    }

    fn position(&self, account_id: u32) -> Option<usize> {
        self.accounts
            .iter()
            .position(|a| a.account_id() == account_id)
    }

    // ========================================================================
    // READ-ONLY VIEWS
    // ========================================================================

    pub fn customer_id(&self) -> u32 {
        self.customer_id
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    /// Snapshot of the owned accounts, insertion order. A copy, not an
    /// alias — mutating the returned vec never touches the real set.
    pub fn accounts(&self) -> Vec<Account> {
        self.accounts.clone()
    }

    pub fn account_count(&self) -> usize {
        self.accounts.len()
    }
}

// ============================================================================
// TESTS
// ============================================================================
