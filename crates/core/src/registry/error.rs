//! Registry error types.

use strata_shared::error::ErrorKind;
use strata_shared::types::{AccountId, BuildingId};
use thiserror::Error;

/// Errors from chart-of-accounts operations.
#[derive(Debug, Error)]
pub enum RegistryError {
    /// Account code already exists in this building.
    #[error("Account code {code:?} already exists in building {building_id}")]
    DuplicateCode {
        /// Building the collision occurred in.
        building_id: BuildingId,
        /// The colliding code.
        code: String,
    },

    /// Extraordinary balances require a balance name.
    #[error("Balance name is required for extraordinary balances")]
    MissingBalanceName,

    /// Parent account not found.
    #[error("Parent account not found: {0}")]
    ParentNotFound(AccountId),

    /// Parent account belongs to another building.
    #[error("Parent account {parent_id} belongs to another building")]
    ParentBuildingMismatch {
        /// The offending parent reference.
        parent_id: AccountId,
    },

    /// Account not found.
    #[error("Account not found: {0}")]
    AccountNotFound(AccountId),

    /// No account with this code in the building.
    #[error("No account with code {code:?} in building {building_id}")]
    CodeNotFound {
        /// Building searched.
        building_id: BuildingId,
        /// The missing code.
        code: String,
    },

    /// A snapshot already exists for this account and month.
    #[error("Balance snapshot already exists for account {account_id} in {month}")]
    DuplicateSnapshot {
        /// The snapshotted account.
        account_id: AccountId,
        /// The already-closed month.
        month: strata_shared::types::Month,
    },

    /// Account still has postings and cannot be deleted.
    #[error("Account {account_id} has {count} transactions and cannot be deleted")]
    HasTransactions {
        /// The account targeted for deletion.
        account_id: AccountId,
        /// Number of postings still referencing it.
        count: usize,
    },
}

impl RegistryError {
    /// Returns the error kind for API mapping.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::DuplicateCode { .. } | Self::DuplicateSnapshot { .. } => ErrorKind::Duplicate,
            Self::MissingBalanceName
            | Self::ParentBuildingMismatch { .. }
            | Self::HasTransactions { .. } => ErrorKind::Validation,
            Self::ParentNotFound(_) | Self::AccountNotFound(_) | Self::CodeNotFound { .. } => {
                ErrorKind::NotFound
            }
        }
    }
}
