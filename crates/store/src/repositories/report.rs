//! Report aggregation queries.

use strata_core::registry::RegistryError;
use strata_core::reports::{AccountMonthlyData, BudgetHealth, MonthlyReport, ReportService};
use strata_shared::types::{AccountId, BuildingId, Month};

use crate::error::StoreError;
use crate::MemoryStore;

/// Repository for report aggregation queries.
pub struct ReportRepository {
    store: MemoryStore,
}

impl ReportRepository {
    pub(crate) fn new(store: MemoryStore) -> Self {
        Self { store }
    }

    /// Build the month-by-month financial report over one consistent
    /// snapshot of revenues and expenses.
    ///
    /// # Errors
    ///
    /// Returns a validation error for an inverted window.
    pub fn monthly_report(
        &self,
        building_id: BuildingId,
        fiscal_year_start: Month,
        fiscal_year_end: Month,
    ) -> Result<MonthlyReport, StoreError> {
        let state = self.store.read();

        let revenues: Vec<_> = state
            .revenues
            .iter()
            .filter(|r| r.building_id == building_id)
            .cloned()
            .collect();
        let expenses: Vec<_> = state
            .expenses
            .iter()
            .filter(|e| e.building_id == building_id)
            .cloned()
            .collect();

        Ok(ReportService::build_monthly_report(
            building_id,
            fiscal_year_start,
            fiscal_year_end,
            &revenues,
            &expenses,
        )?)
    }

    /// One account's expected/actual series for a calendar year.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` for an unknown account.
    pub fn account_monthly_data(
        &self,
        account_id: AccountId,
        year: u16,
    ) -> Result<AccountMonthlyData, StoreError> {
        let state = self.store.read();
        let account = state
            .account(account_id)
            .ok_or(RegistryError::AccountNotFound(account_id))?;
        Ok(ReportService::account_monthly_data(
            account,
            &state.transactions,
            year,
        ))
    }

    /// The projected year-end budget-health flag for the fiscal window.
    ///
    /// `None` when no month has spending yet or planned revenue is zero.
    ///
    /// # Errors
    ///
    /// Returns a validation error for an inverted window.
    pub fn budget_health(
        &self,
        building_id: BuildingId,
        fiscal_year_start: Month,
        fiscal_year_end: Month,
    ) -> Result<Option<BudgetHealth>, StoreError> {
        let report = self.monthly_report(building_id, fiscal_year_start, fiscal_year_end)?;
        Ok(ReportService::budget_health(
            &report.monthly_data,
            report.total_planned_revenue,
        ))
    }
}
