//! Fee apportionment queries.

use strata_core::apportion::{FeeSchedule, FeeService, FractionValidation};
use strata_shared::types::{BuildingId, Month};

use crate::error::StoreError;
use crate::MemoryStore;

/// Repository for fee apportionment queries.
pub struct FeeRepository {
    store: MemoryStore,
}

impl FeeRepository {
    pub(crate) fn new(store: MemoryStore) -> Self {
        Self { store }
    }

    /// Compute the fee schedule for a building and reference month over
    /// one consistent snapshot of units, revenues, and charges.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` when the building has no units.
    pub fn calculate_fees(
        &self,
        building_id: BuildingId,
        reference_month: Month,
    ) -> Result<FeeSchedule, StoreError> {
        let state = self.store.read();

        let revenues: Vec<_> = state
            .revenues
            .iter()
            .filter(|r| r.building_id == building_id)
            .cloned()
            .collect();
        let charges: Vec<_> = state
            .charges
            .iter()
            .filter(|c| c.building_id == building_id)
            .cloned()
            .collect();

        Ok(FeeService::calculate_fees(
            building_id,
            reference_month,
            state.units_for(building_id),
            &revenues,
            &charges,
        )?)
    }

    /// Validate that the building's ideal fractions sum to 1.0.
    #[must_use]
    pub fn validate_fractions(&self, building_id: BuildingId) -> FractionValidation {
        let state = self.store.read();
        FeeService::validate_fractions(state.units_for(building_id))
    }
}
