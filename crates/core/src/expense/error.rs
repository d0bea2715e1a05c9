//! Expense error types.

use strata_shared::error::ErrorKind;
use strata_shared::types::{AdditionalChargeId, ExpenseEntryId};
use thiserror::Error;

/// Errors from expense and charge operations.
#[derive(Debug, Error)]
pub enum ExpenseError {
    /// Expense amounts must be positive.
    #[error("Expense amount must be positive")]
    NonPositiveAmount,

    /// Expense entry not found.
    #[error("Expense entry not found: {0}")]
    EntryNotFound(ExpenseEntryId),

    /// Additional charge not found.
    #[error("Additional charge not found: {0}")]
    ChargeNotFound(AdditionalChargeId),
}

impl ExpenseError {
    /// Returns the error kind for API mapping.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::NonPositiveAmount => ErrorKind::Validation,
            Self::EntryNotFound(_) | Self::ChargeNotFound(_) => ErrorKind::NotFound,
        }
    }
}
