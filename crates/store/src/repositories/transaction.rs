//! Transaction repository: atomic ledger posting.
//!
//! Every mutation runs under the state's write lock. The posting plan is
//! validated against the live accounts first; only then do the
//! transaction row and every balance adjustment apply, all before the
//! lock drops. A reader can never observe the row without its balance
//! effect or vice versa.

use chrono::Utc;
use strata_core::ledger::{
    BalanceAdjustment, LedgerError, LedgerService, PostTransactionInput, Transaction,
    UpdateTransactionInput,
};
use strata_shared::types::{AccountId, BuildingId, TransactionId};

use crate::error::StoreError;
use crate::state::State;
use crate::MemoryStore;

/// Repository for ledger postings.
pub struct TransactionRepository {
    store: MemoryStore,
}

impl TransactionRepository {
    pub(crate) fn new(store: MemoryStore) -> Self {
        Self { store }
    }

    /// Post a transaction: create the row and raise the target account's
    /// actual amount by the signed amount, atomically.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` for an unknown account and a validation error
    /// when the account belongs to another building.
    pub fn post(&self, input: PostTransactionInput) -> Result<Transaction, StoreError> {
        let mut state = self.store.write();

        let account = state
            .account(input.account_id)
            .ok_or(LedgerError::AccountNotFound(input.account_id))?;
        if account.building_id != input.building_id {
            return Err(LedgerError::AccountBuildingMismatch(input.account_id).into());
        }

        let transaction = LedgerService::build_transaction(input, Utc::now());
        let plan = LedgerService::plan_post(&transaction);
        Self::apply_plan(&mut state, &plan)?;

        tracing::info!(
            transaction_id = %transaction.id,
            account_id = %transaction.account_id,
            amount = %transaction.amount,
            month = %transaction.reference_month,
            "transaction posted"
        );
        state.transactions.push(transaction.clone());
        Ok(transaction)
    }

    /// Update a transaction.
    ///
    /// Same account: only the amount delta applies. Moved account: the
    /// old amount is reversed from the old account and the new amount
    /// applied to the new one. Row change and adjustments commit
    /// together.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` for an unknown transaction or target account,
    /// and a validation error for a cross-building target.
    pub fn update(
        &self,
        id: TransactionId,
        update: UpdateTransactionInput,
    ) -> Result<Transaction, StoreError> {
        let mut state = self.store.write();

        let current = state
            .transaction(id)
            .ok_or(LedgerError::TransactionNotFound(id))?
            .clone();

        if let Some(new_account_id) = update.account_id {
            let target = state
                .account(new_account_id)
                .ok_or(LedgerError::AccountNotFound(new_account_id))?;
            if target.building_id != current.building_id {
                return Err(LedgerError::AccountBuildingMismatch(new_account_id).into());
            }
        }

        let plan = LedgerService::plan_update(&current, &update);
        Self::apply_plan(&mut state, &plan)?;

        let stored = state
            .transactions
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or(LedgerError::TransactionNotFound(id))?;
        LedgerService::apply_update(stored, update, Utc::now());
        let updated = stored.clone();

        tracing::info!(
            transaction_id = %id,
            account_id = %updated.account_id,
            amount = %updated.amount,
            "transaction updated"
        );
        Ok(updated)
    }

    /// Delete a transaction: subtract its amount from its account, then
    /// remove the row, atomically.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` for an unknown transaction.
    pub fn delete(&self, id: TransactionId) -> Result<(), StoreError> {
        let mut state = self.store.write();

        let current = state
            .transaction(id)
            .ok_or(LedgerError::TransactionNotFound(id))?
            .clone();

        let plan = LedgerService::plan_delete(&current);
        Self::apply_plan(&mut state, &plan)?;
        state.transactions.retain(|t| t.id != id);

        tracing::info!(transaction_id = %id, "transaction deleted");
        Ok(())
    }

    /// Fetch a transaction by id.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` for an unknown id.
    pub fn get(&self, id: TransactionId) -> Result<Transaction, StoreError> {
        self.store
            .read()
            .transaction(id)
            .cloned()
            .ok_or_else(|| LedgerError::TransactionNotFound(id).into())
    }

    /// All postings of a building, in creation order.
    #[must_use]
    pub fn list(&self, building_id: BuildingId) -> Vec<Transaction> {
        self.store
            .read()
            .transactions
            .iter()
            .filter(|t| t.building_id == building_id)
            .cloned()
            .collect()
    }

    /// All postings against one account, in creation order.
    #[must_use]
    pub fn list_for_account(&self, account_id: AccountId) -> Vec<Transaction> {
        self.store
            .read()
            .transactions
            .iter()
            .filter(|t| t.account_id == account_id)
            .cloned()
            .collect()
    }

    /// Verify `actual_amount == Σ posting amounts` for an account.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` for an unknown account and a consistency error
    /// when the recorded amount diverges from the recomputed sum.
    pub fn audit_account(&self, account_id: AccountId) -> Result<(), StoreError> {
        let state = self.store.read();
        let account = state
            .account(account_id)
            .ok_or(LedgerError::AccountNotFound(account_id))?;
        LedgerService::check_consistency(account_id, account.actual_amount, &state.transactions)?;
        Ok(())
    }

    /// Apply a posting plan: all targets are checked before any balance
    /// moves, so a failing plan changes nothing.
    fn apply_plan(state: &mut State, plan: &[BalanceAdjustment]) -> Result<(), StoreError> {
        for adjustment in plan {
            if state.account(adjustment.account_id).is_none() {
                return Err(LedgerError::AccountNotFound(adjustment.account_id).into());
            }
        }
        for adjustment in plan {
            if let Some(account) = state.account_mut(adjustment.account_id) {
                account.actual_amount += adjustment.delta;
                account.updated_at = Utc::now();
            }
        }
        Ok(())
    }
}
