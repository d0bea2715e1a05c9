//! In-process store for the Strata financials core.
//!
//! This crate is the reference implementation of the persistence
//! collaborator boundary: repository abstractions over one shared,
//! snapshot-consistent state.
//!
//! Concurrency model: every ledger mutation (post/update/delete) runs
//! inside the state's write lock — the plan is validated first, then the
//! transaction-row change and all account-balance adjustments apply
//! together before the lock is released. Readers (fees, reports) take
//! the read lock and observe a consistent-as-of-read-time snapshot.

pub mod error;
pub mod repositories;

mod state;

use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use repositories::{
    AccountRepository, BalanceRepository, ExpenseRepository, FeeRepository, ReportRepository,
    RevenueRepository, TransactionRepository, UnitDirectory,
};
use state::State;

pub use error::StoreError;

/// Handle to the shared in-process state.
///
/// Cheap to clone; all clones see the same state.
#[derive(Clone, Default)]
pub struct MemoryStore {
    state: Arc<RwLock<State>>,
}

impl MemoryStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Repository for chart-of-accounts operations.
    #[must_use]
    pub fn accounts(&self) -> AccountRepository {
        AccountRepository::new(self.clone())
    }

    /// Repository for ledger postings.
    #[must_use]
    pub fn transactions(&self) -> TransactionRepository {
        TransactionRepository::new(self.clone())
    }

    /// Repository for revenue accounts.
    #[must_use]
    pub fn revenues(&self) -> RevenueRepository {
        RevenueRepository::new(self.clone())
    }

    /// Repository for expense entries and additional charges.
    #[must_use]
    pub fn expenses(&self) -> ExpenseRepository {
        ExpenseRepository::new(self.clone())
    }

    /// Repository for month-close balance snapshots.
    #[must_use]
    pub fn balances(&self) -> BalanceRepository {
        BalanceRepository::new(self.clone())
    }

    /// Read-only mirror of the externally-owned unit directory.
    #[must_use]
    pub fn units(&self) -> UnitDirectory {
        UnitDirectory::new(self.clone())
    }

    /// Fee apportionment queries.
    #[must_use]
    pub fn fees(&self) -> FeeRepository {
        FeeRepository::new(self.clone())
    }

    /// Report aggregation queries.
    #[must_use]
    pub fn reports(&self) -> ReportRepository {
        ReportRepository::new(self.clone())
    }

    /// Shared read access to the state.
    ///
    /// A poisoned lock only ever wraps state that finished its last
    /// mutation: every write validates before touching anything.
    pub(crate) fn read(&self) -> RwLockReadGuard<'_, State> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    /// Exclusive write access to the state.
    pub(crate) fn write(&self) -> RwLockWriteGuard<'_, State> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }
}
