//! Read-only mirror of the externally-owned unit directory.
//!
//! The core never mutates unit data; `replace` syncs the mirror from
//! the building-management collaborator.

use strata_core::apportion::UnitShare;
use strata_shared::types::BuildingId;

use crate::MemoryStore;

/// Mirror of the unit directory for one store.
pub struct UnitDirectory {
    store: MemoryStore,
}

impl UnitDirectory {
    pub(crate) fn new(store: MemoryStore) -> Self {
        Self { store }
    }

    /// Replace the mirrored units of a building.
    pub fn replace(&self, building_id: BuildingId, units: Vec<UnitShare>) {
        let mut state = self.store.write();
        if let Some(entry) = state.units.iter_mut().find(|(b, _)| *b == building_id) {
            entry.1 = units;
        } else {
            state.units.push((building_id, units));
        }
    }

    /// Units of a building, as last synced.
    #[must_use]
    pub fn list(&self, building_id: BuildingId) -> Vec<UnitShare> {
        self.store.read().units_for(building_id).to_vec()
    }
}
