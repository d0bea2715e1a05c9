//! Revenue service: creation and window extension.

use chrono::{DateTime, Utc};
use strata_shared::types::{PeriodBound, RevenueAccountId};

use super::error::RevenueError;
use super::types::{CreateRevenueAccountInput, RevenueAccount};
use crate::registry::Account;

/// Revenue service for validity-window rules.
pub struct RevenueService;

impl RevenueService {
    /// Build a revenue account, denormalizing the display name from the
    /// linked account.
    ///
    /// # Errors
    ///
    /// Returns `RevenueError` when the window is inverted or the linked
    /// account belongs to another building.
    pub fn build(
        input: CreateRevenueAccountInput,
        account: &Account,
        now: DateTime<Utc>,
    ) -> Result<RevenueAccount, RevenueError> {
        if account.building_id != input.building_id {
            return Err(RevenueError::AccountBuildingMismatch {
                account_id: input.account_id,
            });
        }
        if input.start > input.end {
            return Err(RevenueError::InvalidWindow {
                start: input.start,
                end: input.end,
            });
        }

        Ok(RevenueAccount {
            id: RevenueAccountId::new(),
            building_id: input.building_id,
            account_id: Some(input.account_id),
            account_name: account.display_name(),
            monthly_amount: input.monthly_amount,
            start: input.start,
            end: input.end,
            fiscal_year_start: input.fiscal_year_start,
            fiscal_year_end: input.fiscal_year_end,
            is_extended: false,
            created_at: now,
            updated_at: now,
        })
    }

    /// Extend the validity window.
    ///
    /// The end bound only ever moves forward; a successful extension
    /// sets `is_extended`, which then never clears.
    ///
    /// # Errors
    ///
    /// Returns `RevenueError::ExtensionBackward` if the new end precedes
    /// the current one.
    pub fn extend(
        revenue: &mut RevenueAccount,
        new_end: PeriodBound,
        now: DateTime<Utc>,
    ) -> Result<(), RevenueError> {
        if new_end < revenue.end {
            return Err(RevenueError::ExtensionBackward {
                current: revenue.end,
                requested: new_end,
            });
        }
        revenue.end = new_end;
        revenue.is_extended = true;
        revenue.updated_at = now;
        Ok(())
    }
}
