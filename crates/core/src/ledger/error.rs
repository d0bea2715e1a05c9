//! Ledger error types.

use rust_decimal::Decimal;
use strata_shared::error::ErrorKind;
use strata_shared::types::{AccountId, TransactionId};
use thiserror::Error;

/// Errors from ledger operations.
#[derive(Debug, Error)]
pub enum LedgerError {
    /// Transaction not found.
    #[error("Transaction not found: {0}")]
    TransactionNotFound(TransactionId),

    /// Account not found.
    #[error("Account not found: {0}")]
    AccountNotFound(AccountId),

    /// Posting targets an account of another building.
    #[error("Account {0} belongs to another building")]
    AccountBuildingMismatch(AccountId),

    /// Recorded actual amount diverged from the posting sum.
    ///
    /// Must never occur while postings commit atomically; when it does,
    /// the operation fails entirely rather than partially applying.
    #[error(
        "Ledger diverged for account {account_id}: recorded {recorded}, postings sum to {computed}"
    )]
    Diverged {
        /// The diverged account.
        account_id: AccountId,
        /// The stored actual amount.
        recorded: Decimal,
        /// The recomputed sum of postings.
        computed: Decimal,
    },
}

impl LedgerError {
    /// Returns the error kind for API mapping.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::TransactionNotFound(_) | Self::AccountNotFound(_) => ErrorKind::NotFound,
            Self::AccountBuildingMismatch(_) => ErrorKind::Validation,
            Self::Diverged { .. } => ErrorKind::Consistency,
        }
    }
}
