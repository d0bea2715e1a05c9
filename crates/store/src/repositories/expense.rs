//! Expense repository for entries and additional charges.

use chrono::Utc;
use strata_core::expense::{
    AdditionalCharge, ExpenseEntry, ExpenseError, ExpenseService, RecordChargeInput,
    RecordExpenseInput, UpdateChargeInput,
};
use strata_shared::types::{AdditionalChargeId, BuildingId, ExpenseEntryId, Month};

use crate::error::StoreError;
use crate::MemoryStore;

/// Repository for expense entries and additional charges.
pub struct ExpenseRepository {
    store: MemoryStore,
}

impl ExpenseRepository {
    pub(crate) fn new(store: MemoryStore) -> Self {
        Self { store }
    }

    /// Record an expense entry, deriving its outside-fiscal-period flag
    /// from the building's fiscal window at write time.
    ///
    /// # Errors
    ///
    /// Returns a validation error for non-positive amounts.
    pub fn record_entry(&self, input: RecordExpenseInput) -> Result<ExpenseEntry, StoreError> {
        let mut state = self.store.write();

        let window = state.fiscal_window(input.building_id);
        let entry = ExpenseService::build_entry(input, window, Utc::now())?;
        tracing::debug!(
            entry_id = %entry.id,
            month = %entry.reference_month,
            outside = entry.is_outside_fiscal_period,
            "expense entry recorded"
        );
        state.expenses.push(entry.clone());
        Ok(entry)
    }

    /// Delete an expense entry.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` for an unknown id.
    pub fn delete_entry(&self, id: ExpenseEntryId) -> Result<(), StoreError> {
        let mut state = self.store.write();
        if !state.expenses.iter().any(|e| e.id == id) {
            return Err(ExpenseError::EntryNotFound(id).into());
        }
        state.expenses.retain(|e| e.id != id);
        Ok(())
    }

    /// Expense entries of a building, optionally narrowed to one month.
    #[must_use]
    pub fn list_entries(
        &self,
        building_id: BuildingId,
        month: Option<Month>,
    ) -> Vec<ExpenseEntry> {
        self.store
            .read()
            .expenses
            .iter()
            .filter(|e| e.building_id == building_id)
            .filter(|e| month.is_none_or(|m| e.reference_month == m))
            .cloned()
            .collect()
    }

    /// Record an additional charge.
    ///
    /// # Errors
    ///
    /// Returns a validation error for non-positive amounts.
    pub fn record_charge(&self, input: RecordChargeInput) -> Result<AdditionalCharge, StoreError> {
        let mut state = self.store.write();
        let charge = ExpenseService::build_charge(input, Utc::now())?;
        state.charges.push(charge.clone());
        Ok(charge)
    }

    /// Update an additional charge with partial fields.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` for an unknown id.
    pub fn update_charge(
        &self,
        id: AdditionalChargeId,
        update: UpdateChargeInput,
    ) -> Result<AdditionalCharge, StoreError> {
        let mut state = self.store.write();
        let charge = state
            .charges
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or(ExpenseError::ChargeNotFound(id))?;
        ExpenseService::apply_charge_update(charge, update, Utc::now());
        Ok(charge.clone())
    }

    /// Delete an additional charge.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` for an unknown id.
    pub fn delete_charge(&self, id: AdditionalChargeId) -> Result<(), StoreError> {
        let mut state = self.store.write();
        if !state.charges.iter().any(|c| c.id == id) {
            return Err(ExpenseError::ChargeNotFound(id).into());
        }
        state.charges.retain(|c| c.id != id);
        Ok(())
    }

    /// Additional charges of a building, optionally narrowed to one
    /// month.
    #[must_use]
    pub fn list_charges(
        &self,
        building_id: BuildingId,
        month: Option<Month>,
    ) -> Vec<AdditionalCharge> {
        self.store
            .read()
            .charges
            .iter()
            .filter(|c| c.building_id == building_id)
            .filter(|c| month.is_none_or(|m| c.reference_month == m))
            .cloned()
            .collect()
    }
}
