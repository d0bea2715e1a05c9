//! Expense service: classification and the outside-fiscal-period flag.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use strata_shared::types::{AdditionalChargeId, ExpenseEntryId, FiscalWindow, Month};

use super::error::ExpenseError;
use super::types::{
    AdditionalCharge, ExpenseEntry, RecordChargeInput, RecordExpenseInput, UpdateChargeInput,
};

/// Expense service for entry construction and reclassification.
pub struct ExpenseService;

impl ExpenseService {
    /// Derive the outside-fiscal-period flag for a month.
    ///
    /// Without a known fiscal window the flag stays `false`: the period
    /// cannot be determined, so the entry is assumed in-period.
    #[must_use]
    pub fn outside_fiscal_period(window: Option<FiscalWindow>, month: Month) -> bool {
        window.is_some_and(|w| !w.contains(month))
    }

    /// Build an expense entry, deriving its fiscal-period flag.
    ///
    /// # Errors
    ///
    /// Returns `ExpenseError::NonPositiveAmount` for zero or negative
    /// amounts.
    pub fn build_entry(
        input: RecordExpenseInput,
        window: Option<FiscalWindow>,
        now: DateTime<Utc>,
    ) -> Result<ExpenseEntry, ExpenseError> {
        if input.amount <= Decimal::ZERO {
            return Err(ExpenseError::NonPositiveAmount);
        }

        Ok(ExpenseEntry {
            id: ExpenseEntryId::new(),
            building_id: input.building_id,
            parent_account: input.parent_account,
            account_name: input.account_name,
            amount: input.amount,
            reference_month: input.reference_month,
            description: input.description,
            is_outside_fiscal_period: Self::outside_fiscal_period(window, input.reference_month),
            created_at: now,
            updated_at: now,
        })
    }

    /// Recompute the fiscal-period flag against the current window.
    ///
    /// Runs on every save so a window registered later corrects older
    /// entries on their next write.
    pub fn reclassify(entry: &mut ExpenseEntry, window: Option<FiscalWindow>, now: DateTime<Utc>) {
        entry.is_outside_fiscal_period =
            Self::outside_fiscal_period(window, entry.reference_month);
        entry.updated_at = now;
    }

    /// Build an additional charge. Charges carry no derived flag;
    /// activity is the `active` boolean plus the month match downstream.
    ///
    /// # Errors
    ///
    /// Returns `ExpenseError::NonPositiveAmount` for zero or negative
    /// amounts.
    pub fn build_charge(
        input: RecordChargeInput,
        now: DateTime<Utc>,
    ) -> Result<AdditionalCharge, ExpenseError> {
        if input.total_amount <= Decimal::ZERO {
            return Err(ExpenseError::NonPositiveAmount);
        }

        Ok(AdditionalCharge {
            id: AdditionalChargeId::new(),
            building_id: input.building_id,
            name: input.name,
            description: input.description,
            total_amount: input.total_amount,
            reference_month: input.reference_month,
            active: input.active,
            created_at: now,
            updated_at: now,
        })
    }

    /// Apply a partial update to an additional charge.
    pub fn apply_charge_update(
        charge: &mut AdditionalCharge,
        update: UpdateChargeInput,
        now: DateTime<Utc>,
    ) {
        if let Some(name) = update.name {
            charge.name = name;
        }
        if let Some(description) = update.description {
            charge.description = description;
        }
        if let Some(total_amount) = update.total_amount {
            charge.total_amount = total_amount;
        }
        if let Some(month) = update.reference_month {
            charge.reference_month = month;
        }
        if let Some(active) = update.active {
            charge.active = active;
        }
        charge.updated_at = now;
    }
}
