//! Report data types.
//!
//! Aggregates serialize with camelCase field names: they are the stable
//! contract consumed by the PDF/Excel rendering collaborator.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use strata_shared::types::{AccountId, BuildingId, Month};

use crate::expense::ParentAccount;

/// Per-month expense totals split across the five parent buckets.
///
/// Field names match the bucket identifiers on the wire.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpensesByParent {
    /// Payroll and social charges.
    pub personnel_and_charges: Decimal,
    /// Fees and public taxes.
    pub fees_and_public_taxes: Decimal,
    /// Service contracts.
    pub contracts: Decimal,
    /// Maintenance.
    pub maintenance: Decimal,
    /// Everything else.
    pub miscellaneous: Decimal,
}

impl ExpensesByParent {
    /// Add an amount to the given bucket.
    pub fn add(&mut self, parent: ParentAccount, amount: Decimal) {
        match parent {
            ParentAccount::PersonnelAndCharges => self.personnel_and_charges += amount,
            ParentAccount::FeesAndPublicTaxes => self.fees_and_public_taxes += amount,
            ParentAccount::Contracts => self.contracts += amount,
            ParentAccount::Maintenance => self.maintenance += amount,
            ParentAccount::Miscellaneous => self.miscellaneous += amount,
        }
    }

    /// Sum across all buckets.
    #[must_use]
    pub fn total(&self) -> Decimal {
        self.personnel_and_charges
            + self.fees_and_public_taxes
            + self.contracts
            + self.maintenance
            + self.miscellaneous
    }
}

/// One revenue account's contribution to a month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RevenueByAccount {
    /// Denormalized revenue account name.
    pub account_name: String,
    /// Monthly amount contributed.
    pub amount: Decimal,
}

/// One month of the financial report.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyReportRow {
    /// The month.
    pub month: Month,
    /// Total revenue from accounts covering this month.
    pub total_revenue: Decimal,
    /// Total expenses recorded for this month.
    pub total_expenses: Decimal,
    /// True when the month lies outside the queried fiscal window
    /// (possible when the window was extended by a revenue account).
    pub is_outside_fiscal_period: bool,
    /// Expense totals per parent bucket.
    pub expenses_by_parent: ExpensesByParent,
    /// Revenue contributions by account.
    pub revenue_by_account: Vec<RevenueByAccount>,
}

/// The assembled month-by-month financial report.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyReport {
    /// Building the report covers.
    pub building_id: BuildingId,
    /// Queried fiscal-year start.
    pub fiscal_year_start: Month,
    /// Queried fiscal-year end.
    pub fiscal_year_end: Month,
    /// Sum of all monthly revenue over the report window.
    pub total_planned_revenue: Decimal,
    /// Sum of all monthly expenses over the report window.
    pub total_actual_expenses: Decimal,
    /// Per-month rows spanning the (possibly extended) window.
    pub monthly_data: Vec<MonthlyReportRow>,
}

/// One month of an account's expected/actual series.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountMonthRow {
    /// The month.
    pub month: Month,
    /// The account's expected amount, nonzero only inside the assembly
    /// period.
    pub expected_amount: Decimal,
    /// Sum of the month's postings against the account.
    pub actual_amount: Decimal,
}

/// An account's twelve-month expected/actual series.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountMonthlyData {
    /// The account.
    pub account_id: AccountId,
    /// The calendar year covered.
    pub year: u16,
    /// Twelve rows, January through December.
    pub monthly_data: Vec<AccountMonthRow>,
}

/// Tri-state budget-health flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthFlag {
    /// Spending pace fits inside the revenue budget.
    Green,
    /// Projected overrun of at most 20%.
    Yellow,
    /// Projected overrun above 20%.
    Red,
}

/// Projected year-end spending health.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetHealth {
    /// Months with nonzero actual expense.
    pub completed_months: usize,
    /// Months in the report window.
    pub total_months: usize,
    /// Average spend over completed months.
    pub avg_monthly_spend: Decimal,
    /// Average spend projected over the whole window.
    pub projected_annual: Decimal,
    /// Projected overrun percentage relative to total revenue.
    pub overrun_pct: Decimal,
    /// The resulting flag.
    pub flag: HealthFlag,
}
