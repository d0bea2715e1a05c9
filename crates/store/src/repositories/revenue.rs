//! Revenue repository for validity-window operations.

use chrono::Utc;
use strata_core::revenue::{
    CreateRevenueAccountInput, RevenueAccount, RevenueError, RevenueService,
};
use strata_shared::types::{BuildingId, FiscalWindow, PeriodBound, RevenueAccountId};

use crate::error::StoreError;
use crate::MemoryStore;

/// Repository for revenue accounts.
pub struct RevenueRepository {
    store: MemoryStore,
}

impl RevenueRepository {
    pub(crate) fn new(store: MemoryStore) -> Self {
        Self { store }
    }

    /// Create a revenue account, denormalizing the linked account's
    /// display name.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` for an unknown account, and validation errors
    /// for an inverted window or a cross-building account.
    pub fn create(&self, input: CreateRevenueAccountInput) -> Result<RevenueAccount, StoreError> {
        let mut state = self.store.write();

        let account = state
            .account(input.account_id)
            .ok_or(RevenueError::AccountNotFound(input.account_id))?
            .clone();

        let revenue = RevenueService::build(input, &account, Utc::now())?;
        tracing::debug!(revenue_id = %revenue.id, account = %revenue.account_name, "revenue account created");
        state.revenues.push(revenue.clone());
        Ok(revenue)
    }

    /// Extend a revenue account's validity window.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` for an unknown id and a validation error when
    /// the new end precedes the current one.
    pub fn extend(
        &self,
        id: RevenueAccountId,
        new_end: PeriodBound,
    ) -> Result<RevenueAccount, StoreError> {
        let mut state = self.store.write();

        let revenue = state
            .revenues
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or(RevenueError::NotFound(id))?;

        RevenueService::extend(revenue, new_end, Utc::now())?;
        tracing::info!(revenue_id = %id, end = %revenue.end, "revenue period extended");
        Ok(revenue.clone())
    }

    /// Remove a revenue account (whole-row removal only).
    ///
    /// # Errors
    ///
    /// Returns `NotFound` for an unknown id.
    pub fn delete(&self, id: RevenueAccountId) -> Result<(), StoreError> {
        let mut state = self.store.write();
        if !state.revenues.iter().any(|r| r.id == id) {
            return Err(RevenueError::NotFound(id).into());
        }
        state.revenues.retain(|r| r.id != id);
        Ok(())
    }

    /// All revenue accounts of a building, in creation order.
    #[must_use]
    pub fn list(&self, building_id: BuildingId) -> Vec<RevenueAccount> {
        self.store
            .read()
            .revenues
            .iter()
            .filter(|r| r.building_id == building_id)
            .cloned()
            .collect()
    }

    /// Register the building-level fiscal window (the single source of
    /// truth; overrides the first-revenue-account fallback).
    pub fn set_fiscal_window(&self, building_id: BuildingId, window: FiscalWindow) {
        let mut state = self.store.write();
        if let Some(entry) = state
            .fiscal_windows
            .iter_mut()
            .find(|(b, _)| *b == building_id)
        {
            entry.1 = window;
        } else {
            state.fiscal_windows.push((building_id, window));
        }
    }

    /// The building's fiscal window, if determinable.
    #[must_use]
    pub fn fiscal_window(&self, building_id: BuildingId) -> Option<FiscalWindow> {
        self.store.read().fiscal_window(building_id)
    }
}
