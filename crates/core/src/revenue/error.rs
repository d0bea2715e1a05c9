//! Revenue error types.

use strata_shared::error::ErrorKind;
use strata_shared::types::{AccountId, PeriodBound, RevenueAccountId};
use thiserror::Error;

/// Errors from revenue-account operations.
#[derive(Debug, Error)]
pub enum RevenueError {
    /// Validity window start is after its end.
    #[error("Invalid validity window: start {start} is after end {end}")]
    InvalidWindow {
        /// Window start.
        start: PeriodBound,
        /// Window end.
        end: PeriodBound,
    },

    /// Extension would move the end backwards.
    #[error("Cannot extend revenue to {requested}: current end is {current}")]
    ExtensionBackward {
        /// The current end bound.
        current: PeriodBound,
        /// The rejected new end bound.
        requested: PeriodBound,
    },

    /// Linked account belongs to another building.
    #[error("Account {account_id} belongs to another building")]
    AccountBuildingMismatch {
        /// The offending account reference.
        account_id: AccountId,
    },

    /// Revenue account not found.
    #[error("Revenue account not found: {0}")]
    NotFound(RevenueAccountId),

    /// Linked account not found.
    #[error("Account not found: {0}")]
    AccountNotFound(AccountId),
}

impl RevenueError {
    /// Returns the error kind for API mapping.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidWindow { .. }
            | Self::ExtensionBackward { .. }
            | Self::AccountBuildingMismatch { .. } => ErrorKind::Validation,
            Self::NotFound(_) | Self::AccountNotFound(_) => ErrorKind::NotFound,
        }
    }
}
