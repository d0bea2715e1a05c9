//! Expense and additional-charge domain types.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use strata_shared::types::{AdditionalChargeId, BuildingId, ExpenseEntryId, Month};

/// The five fixed parent buckets expenses are classified into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParentAccount {
    /// Payroll and social charges.
    PersonnelAndCharges,
    /// Fees and public taxes.
    FeesAndPublicTaxes,
    /// Service contracts.
    Contracts,
    /// Maintenance.
    Maintenance,
    /// Everything else.
    Miscellaneous,
}

/// A monthly actual expense bucketed into one parent account.
///
/// `is_outside_fiscal_period` is derived at write time and recomputed on
/// every save.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExpenseEntry {
    /// Unique identifier.
    pub id: ExpenseEntryId,
    /// Building the expense belongs to.
    pub building_id: BuildingId,
    /// Parent bucket.
    pub parent_account: ParentAccount,
    /// Display name of the expense line.
    pub account_name: String,
    /// Expense amount.
    pub amount: Decimal,
    /// Accounting month.
    pub reference_month: Month,
    /// Free-form description.
    pub description: String,
    /// True when the reference month falls outside the building's
    /// fiscal window.
    pub is_outside_fiscal_period: bool,
    /// When the entry was created.
    pub created_at: DateTime<Utc>,
    /// When the entry was last updated.
    pub updated_at: DateTime<Utc>,
}

/// Input for recording an expense entry.
#[derive(Debug, Clone)]
pub struct RecordExpenseInput {
    /// Building the expense belongs to.
    pub building_id: BuildingId,
    /// Parent bucket.
    pub parent_account: ParentAccount,
    /// Display name of the expense line.
    pub account_name: String,
    /// Expense amount.
    pub amount: Decimal,
    /// Accounting month.
    pub reference_month: Month,
    /// Free-form description.
    pub description: String,
}

/// A named apportionable amount for one reference month.
///
/// Contributes to the fee-apportionment denominator exactly when
/// `active` and the reference month matches the query month.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdditionalCharge {
    /// Unique identifier.
    pub id: AdditionalChargeId,
    /// Building the charge belongs to.
    pub building_id: BuildingId,
    /// Charge name.
    pub name: String,
    /// Free-form description.
    pub description: String,
    /// Total amount to apportion across units.
    pub total_amount: Decimal,
    /// The month the charge applies to.
    pub reference_month: Month,
    /// Whether the charge is active.
    pub active: bool,
    /// When the charge was created.
    pub created_at: DateTime<Utc>,
    /// When the charge was last updated.
    pub updated_at: DateTime<Utc>,
}

impl AdditionalCharge {
    /// True when this charge contributes to the given month's collection.
    #[must_use]
    pub fn applies_to(&self, month: Month) -> bool {
        self.active && self.reference_month == month
    }
}

/// Input for recording an additional charge.
#[derive(Debug, Clone)]
pub struct RecordChargeInput {
    /// Building the charge belongs to.
    pub building_id: BuildingId,
    /// Charge name.
    pub name: String,
    /// Free-form description.
    pub description: String,
    /// Total amount to apportion.
    pub total_amount: Decimal,
    /// The month the charge applies to.
    pub reference_month: Month,
    /// Whether the charge starts active.
    pub active: bool,
}

/// Partial update for an additional charge.
#[derive(Debug, Clone, Default)]
pub struct UpdateChargeInput {
    /// New name.
    pub name: Option<String>,
    /// New description.
    pub description: Option<String>,
    /// New total amount.
    pub total_amount: Option<Decimal>,
    /// New reference month.
    pub reference_month: Option<Month>,
    /// New active flag.
    pub active: Option<bool>,
}
