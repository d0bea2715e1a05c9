//! Store error type: the union of the module errors it surfaces.

use strata_core::apportion::ApportionError;
use strata_core::expense::ExpenseError;
use strata_core::ledger::LedgerError;
use strata_core::registry::RegistryError;
use strata_core::reports::ReportError;
use strata_core::revenue::RevenueError;
use strata_shared::error::ErrorKind;
use thiserror::Error;

/// Errors surfaced by store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Chart-of-accounts error.
    #[error(transparent)]
    Registry(#[from] RegistryError),

    /// Ledger error.
    #[error(transparent)]
    Ledger(#[from] LedgerError),

    /// Revenue-account error.
    #[error(transparent)]
    Revenue(#[from] RevenueError),

    /// Expense or charge error.
    #[error(transparent)]
    Expense(#[from] ExpenseError),

    /// Fee apportionment error.
    #[error(transparent)]
    Apportion(#[from] ApportionError),

    /// Report aggregation error.
    #[error(transparent)]
    Report(#[from] ReportError),
}

impl StoreError {
    /// Returns the error kind for API mapping.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Registry(e) => e.kind(),
            Self::Ledger(e) => e.kind(),
            Self::Revenue(e) => e.kind(),
            Self::Expense(e) => e.kind(),
            Self::Apportion(e) => e.kind(),
            Self::Report(e) => e.kind(),
        }
    }
}

impl From<StoreError> for strata_shared::error::AppError {
    fn from(err: StoreError) -> Self {
        Self {
            kind: err.kind(),
            message: err.to_string(),
        }
    }
}
