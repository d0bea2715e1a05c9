//! Report assembly.

use rust_decimal::Decimal;
use strata_shared::types::{BuildingId, Month};

use super::error::ReportError;
use super::types::{
    AccountMonthRow, AccountMonthlyData, BudgetHealth, ExpensesByParent, HealthFlag,
    MonthlyReport, MonthlyReportRow, RevenueByAccount,
};
use crate::expense::ExpenseEntry;
use crate::ledger::Transaction;
use crate::registry::Account;
use crate::revenue::RevenueAccount;

/// Service for assembling financial reports.
pub struct ReportService;

impl ReportService {
    /// Build the month-by-month report over the fiscal window.
    ///
    /// The window extends forward to the latest month any revenue
    /// account still covers; it never shrinks. Months past the queried
    /// window are flagged outside the fiscal period.
    ///
    /// # Errors
    ///
    /// Returns `ReportError::InvalidWindow` when the start is after the
    /// end.
    pub fn build_monthly_report(
        building_id: BuildingId,
        fiscal_year_start: Month,
        fiscal_year_end: Month,
        revenues: &[RevenueAccount],
        expenses: &[ExpenseEntry],
    ) -> Result<MonthlyReport, ReportError> {
        if fiscal_year_start > fiscal_year_end {
            return Err(ReportError::InvalidWindow {
                start: fiscal_year_start,
                end: fiscal_year_end,
            });
        }

        let window_end = revenues
            .iter()
            .map(|r| r.end.last_covered_month())
            .fold(fiscal_year_end, Month::max);

        let mut monthly_data = Vec::new();
        let mut total_planned_revenue = Decimal::ZERO;
        let mut total_actual_expenses = Decimal::ZERO;

        for month in fiscal_year_start.through(window_end) {
            let mut revenue_by_account = Vec::new();
            let mut total_revenue = Decimal::ZERO;
            for revenue in revenues.iter().filter(|r| r.covers_month(month)) {
                total_revenue += revenue.monthly_amount;
                revenue_by_account.push(RevenueByAccount {
                    account_name: revenue.account_name.clone(),
                    amount: revenue.monthly_amount,
                });
            }

            let mut expenses_by_parent = ExpensesByParent::default();
            for expense in expenses.iter().filter(|e| e.reference_month == month) {
                expenses_by_parent.add(expense.parent_account, expense.amount);
            }
            let total_expenses = expenses_by_parent.total();

            total_planned_revenue += total_revenue;
            total_actual_expenses += total_expenses;

            monthly_data.push(MonthlyReportRow {
                month,
                total_revenue,
                total_expenses,
                is_outside_fiscal_period: month < fiscal_year_start || month > fiscal_year_end,
                expenses_by_parent,
                revenue_by_account,
            });
        }

        Ok(MonthlyReport {
            building_id,
            fiscal_year_start,
            fiscal_year_end,
            total_planned_revenue,
            total_actual_expenses,
            monthly_data,
        })
    }

    /// One account's expected/actual series for a calendar year.
    ///
    /// Expected is the account's flat expected amount for every month
    /// inside its assembly period and zero outside; actual sums the
    /// month's postings against the account.
    #[must_use]
    pub fn account_monthly_data(
        account: &Account,
        transactions: &[Transaction],
        year: u16,
    ) -> AccountMonthlyData {
        let monthly_data = (1..=12u8)
            .filter_map(|m| Month::new(year, m).ok())
            .map(|month| {
                let expected_amount = if account.assembly_covers(month) {
                    account.expected_amount
                } else {
                    Decimal::ZERO
                };
                let actual_amount = transactions
                    .iter()
                    .filter(|t| t.account_id == account.id && t.reference_month == month)
                    .map(|t| t.amount)
                    .sum();

                AccountMonthRow { month, expected_amount, actual_amount }
            })
            .collect();

        AccountMonthlyData { account_id: account.id, year, monthly_data }
    }

    /// Project year-end spending and classify it against revenue.
    ///
    /// Undefined (None) when no month has spending yet or when revenue
    /// is not positive.
    #[must_use]
    pub fn budget_health(
        monthly_data: &[MonthlyReportRow],
        total_revenue: Decimal,
    ) -> Option<BudgetHealth> {
        let completed_months = monthly_data
            .iter()
            .filter(|row| row.total_expenses > Decimal::ZERO)
            .count();
        if completed_months == 0 || total_revenue <= Decimal::ZERO {
            return None;
        }

        let total_expense: Decimal = monthly_data.iter().map(|row| row.total_expenses).sum();
        let total_months = monthly_data.len();

        let avg_monthly_spend = total_expense / Decimal::from(completed_months as u64);
        let projected_annual = avg_monthly_spend * Decimal::from(total_months as u64);
        let overrun_pct =
            ((projected_annual / total_revenue) * Decimal::ONE_HUNDRED - Decimal::ONE_HUNDRED)
                .round_dp(2);

        let flag = if projected_annual <= total_revenue {
            HealthFlag::Green
        } else if overrun_pct <= Decimal::from(20u8) {
            HealthFlag::Yellow
        } else {
            HealthFlag::Red
        };

        Some(BudgetHealth {
            completed_months,
            total_months,
            avg_monthly_spend,
            projected_annual,
            overrun_pct,
            flag,
        })
    }
}
