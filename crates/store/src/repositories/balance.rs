//! Balance repository for month-close snapshots.
//!
//! Snapshots are append-only history: one per `(building, account,
//! month)`, never overwritten, never recomputed retroactively.

use chrono::Utc;
use strata_core::registry::{BalanceSnapshot, RecordBalanceInput, RegistryError, RegistryService};
use strata_shared::types::{AccountId, BuildingId};

use crate::error::StoreError;
use crate::MemoryStore;

/// Repository for month-close balance snapshots.
pub struct BalanceRepository {
    store: MemoryStore,
}

impl BalanceRepository {
    pub(crate) fn new(store: MemoryStore) -> Self {
        Self { store }
    }

    /// Record a month-close snapshot.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` for an unknown account, a duplicate error when
    /// the `(building, account, month)` slot is already closed, and a
    /// validation error for an extraordinary snapshot without a name.
    pub fn record(&self, input: RecordBalanceInput) -> Result<BalanceSnapshot, StoreError> {
        let mut state = self.store.write();

        if state.account(input.account_id).is_none() {
            return Err(RegistryError::AccountNotFound(input.account_id).into());
        }
        if state.snapshots.iter().any(|s| {
            s.building_id == input.building_id
                && s.account_id == input.account_id
                && s.reference_month == input.reference_month
        }) {
            return Err(RegistryError::DuplicateSnapshot {
                account_id: input.account_id,
                month: input.reference_month,
            }
            .into());
        }

        let snapshot = RegistryService::build_snapshot(input, Utc::now())?;
        tracing::debug!(
            snapshot_id = %snapshot.id,
            account_id = %snapshot.account_id,
            month = %snapshot.reference_month,
            "balance snapshot recorded"
        );
        state.snapshots.push(snapshot.clone());
        Ok(snapshot)
    }

    /// All snapshots of a building, in creation order.
    #[must_use]
    pub fn list(&self, building_id: BuildingId) -> Vec<BalanceSnapshot> {
        self.store
            .read()
            .snapshots
            .iter()
            .filter(|s| s.building_id == building_id)
            .cloned()
            .collect()
    }

    /// Snapshot history for one account, in creation order.
    #[must_use]
    pub fn list_for_account(&self, account_id: AccountId) -> Vec<BalanceSnapshot> {
        self.store
            .read()
            .snapshots
            .iter()
            .filter(|s| s.account_id == account_id)
            .cloned()
            .collect()
    }
}
