//! Revenue account domain types.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use strata_shared::types::{AccountId, BuildingId, FiscalWindow, Month, PeriodBound, RevenueAccountId};

/// A fixed recurring monthly revenue line.
///
/// `account_name` is denormalized from the linked account at creation
/// time for display; it is not re-synced if the account is later renamed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RevenueAccount {
    /// Unique identifier.
    pub id: RevenueAccountId,
    /// Building this revenue belongs to.
    pub building_id: BuildingId,
    /// Linked chart-of-accounts entry.
    pub account_id: Option<AccountId>,
    /// Denormalized `"CODE - NAME"` of the linked account.
    pub account_name: String,
    /// Amount repeated for every covered month.
    pub monthly_amount: Decimal,
    /// First bound of the validity window.
    pub start: PeriodBound,
    /// Last bound of the validity window (moves forward on extension).
    pub end: PeriodBound,
    /// Fiscal-year start marker for the building.
    pub fiscal_year_start: PeriodBound,
    /// Fiscal-year end marker for the building.
    pub fiscal_year_end: PeriodBound,
    /// Set once the window has been extended; never cleared.
    pub is_extended: bool,
    /// When the revenue account was created.
    pub created_at: DateTime<Utc>,
    /// When the revenue account was last updated.
    pub updated_at: DateTime<Utc>,
}

impl RevenueAccount {
    /// True if the validity window covers the month (inclusive bounds,
    /// lexicographic comparison semantics).
    #[must_use]
    pub fn covers_month(&self, month: Month) -> bool {
        self.start.at_or_before(month) && self.end.at_or_after(month)
    }

    /// True if the window covers the year (year-truncated matching, the
    /// comparison fee calculation uses).
    #[must_use]
    pub fn covers_year(&self, year: u16) -> bool {
        self.start.year() <= year && year <= self.end.year()
    }

    /// The fiscal window carried on this revenue account.
    #[must_use]
    pub fn fiscal_window(&self) -> FiscalWindow {
        FiscalWindow {
            start: self.fiscal_year_start,
            end: self.fiscal_year_end,
        }
    }
}

/// Input for creating a revenue account.
#[derive(Debug, Clone)]
pub struct CreateRevenueAccountInput {
    /// Building the revenue belongs to.
    pub building_id: BuildingId,
    /// Chart-of-accounts entry to link and denormalize from.
    pub account_id: AccountId,
    /// Monthly amount.
    pub monthly_amount: Decimal,
    /// First bound of the validity window.
    pub start: PeriodBound,
    /// Last bound of the validity window.
    pub end: PeriodBound,
    /// Fiscal-year start marker.
    pub fiscal_year_start: PeriodBound,
    /// Fiscal-year end marker.
    pub fiscal_year_end: PeriodBound,
}
