//! Apportionment error types.

use strata_shared::error::ErrorKind;
use strata_shared::types::BuildingId;
use thiserror::Error;

/// Errors from fee apportionment.
#[derive(Debug, Error)]
pub enum ApportionError {
    /// The building has no units to apportion across.
    #[error("No units found for building {0}")]
    NoUnits(BuildingId),
}

impl ApportionError {
    /// Returns the error kind for API mapping.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::NoUnits(_) => ErrorKind::NotFound,
        }
    }
}
