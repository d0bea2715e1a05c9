//! Report error types.

use strata_shared::error::ErrorKind;
use strata_shared::types::Month;
use thiserror::Error;

/// Errors from report aggregation.
#[derive(Debug, Error)]
pub enum ReportError {
    /// Fiscal window start is after its end.
    #[error("Invalid report window: {start} is after {end}")]
    InvalidWindow {
        /// Requested window start.
        start: Month,
        /// Requested window end.
        end: Month,
    },
}

impl ReportError {
    /// Returns the error kind for API mapping.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidWindow { .. } => ErrorKind::Validation,
        }
    }
}
