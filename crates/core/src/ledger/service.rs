//! Ledger service: posting plans and the consistency invariant.
//!
//! Every mutation of a transaction row implies one or two account-balance
//! deltas. The service computes those deltas as pure data; applying a
//! plan together with its row change is the store's job and must be
//! atomic per the concurrency model.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use strata_shared::types::{AccountId, TransactionId};

use super::error::LedgerError;
use super::types::{
    BalanceAdjustment, PostTransactionInput, Transaction, UpdateTransactionInput,
};

/// Ledger service for posting-plan computation.
pub struct LedgerService;

impl LedgerService {
    /// Build the transaction row for a new posting.
    #[must_use]
    pub fn build_transaction(input: PostTransactionInput, now: DateTime<Utc>) -> Transaction {
        Transaction {
            id: TransactionId::new(),
            building_id: input.building_id,
            account_id: input.account_id,
            amount: input.amount,
            reference_month: input.reference_month,
            description: input.description,
            created_at: now,
            updated_at: now,
        }
    }

    /// Plan for posting a new transaction: the target account gains the
    /// full signed amount.
    #[must_use]
    pub fn plan_post(transaction: &Transaction) -> Vec<BalanceAdjustment> {
        vec![BalanceAdjustment {
            account_id: transaction.account_id,
            delta: transaction.amount,
        }]
    }

    /// Plan for updating a transaction.
    ///
    /// If the posting stays on its account, only the amount delta is
    /// applied (never the full new amount, which would double-count).
    /// If it moves, the old amount is reversed from the old account and
    /// the new amount applied to the new one.
    #[must_use]
    pub fn plan_update(current: &Transaction, update: &UpdateTransactionInput) -> Vec<BalanceAdjustment> {
        let new_account = update.account_id.unwrap_or(current.account_id);
        let new_amount = update.amount.unwrap_or(current.amount);

        if new_account == current.account_id {
            vec![BalanceAdjustment {
                account_id: current.account_id,
                delta: new_amount - current.amount,
            }]
        } else {
            vec![
                BalanceAdjustment {
                    account_id: current.account_id,
                    delta: -current.amount,
                },
                BalanceAdjustment {
                    account_id: new_account,
                    delta: new_amount,
                },
            ]
        }
    }

    /// Plan for deleting a transaction: the amount is subtracted back
    /// out before the row is removed.
    #[must_use]
    pub fn plan_delete(transaction: &Transaction) -> Vec<BalanceAdjustment> {
        vec![BalanceAdjustment {
            account_id: transaction.account_id,
            delta: -transaction.amount,
        }]
    }

    /// Apply a validated update to the transaction row.
    pub fn apply_update(
        transaction: &mut Transaction,
        update: UpdateTransactionInput,
        now: DateTime<Utc>,
    ) {
        if let Some(account_id) = update.account_id {
            transaction.account_id = account_id;
        }
        if let Some(amount) = update.amount {
            transaction.amount = amount;
        }
        if let Some(month) = update.reference_month {
            transaction.reference_month = month;
        }
        if let Some(description) = update.description {
            transaction.description = Some(description);
        }
        transaction.updated_at = now;
    }

    /// Verify the ledger invariant for one account:
    /// `actual_amount == Σ amounts of its postings`.
    ///
    /// # Errors
    ///
    /// Returns `LedgerError::Diverged` when the recorded amount and the
    /// recomputed sum differ.
    pub fn check_consistency<'a, I>(
        account_id: AccountId,
        recorded: Decimal,
        postings: I,
    ) -> Result<(), LedgerError>
    where
        I: IntoIterator<Item = &'a Transaction>,
    {
        let computed: Decimal = postings
            .into_iter()
            .filter(|t| t.account_id == account_id)
            .map(|t| t.amount)
            .sum();

        if computed == recorded {
            Ok(())
        } else {
            Err(LedgerError::Diverged {
                account_id,
                recorded,
                computed,
            })
        }
    }
}
