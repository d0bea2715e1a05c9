//! The shared in-process state.
//!
//! Entities live in insertion-ordered vectors: "first row" semantics
//! (used for the fiscal-window fallback) then mean earliest created,
//! exactly like the source system's lowest-primary-key row.

use strata_core::apportion::UnitShare;
use strata_core::expense::{AdditionalCharge, ExpenseEntry};
use strata_core::ledger::Transaction;
use strata_core::registry::{Account, BalanceSnapshot};
use strata_core::revenue::RevenueAccount;
use strata_shared::types::{AccountId, BuildingId, FiscalWindow, TransactionId};

/// All stored entities, guarded by the store's `RwLock`.
#[derive(Default)]
pub(crate) struct State {
    pub accounts: Vec<Account>,
    pub transactions: Vec<Transaction>,
    pub revenues: Vec<RevenueAccount>,
    pub expenses: Vec<ExpenseEntry>,
    pub charges: Vec<AdditionalCharge>,
    pub snapshots: Vec<BalanceSnapshot>,
    pub units: Vec<(BuildingId, Vec<UnitShare>)>,
    pub fiscal_windows: Vec<(BuildingId, FiscalWindow)>,
}

impl State {
    pub fn account(&self, id: AccountId) -> Option<&Account> {
        self.accounts.iter().find(|a| a.id == id)
    }

    pub fn account_mut(&mut self, id: AccountId) -> Option<&mut Account> {
        self.accounts.iter_mut().find(|a| a.id == id)
    }

    pub fn transaction(&self, id: TransactionId) -> Option<&Transaction> {
        self.transactions.iter().find(|t| t.id == id)
    }

    pub fn transaction_count_for(&self, account_id: AccountId) -> usize {
        self.transactions
            .iter()
            .filter(|t| t.account_id == account_id)
            .count()
    }

    /// The building's fiscal window: the explicitly registered one when
    /// present, otherwise the first revenue account's markers (source
    /// behavior), otherwise unknown.
    pub fn fiscal_window(&self, building_id: BuildingId) -> Option<FiscalWindow> {
        self.fiscal_windows
            .iter()
            .find(|(b, _)| *b == building_id)
            .map(|(_, w)| *w)
            .or_else(|| {
                self.revenues
                    .iter()
                    .find(|r| r.building_id == building_id)
                    .map(strata_core::revenue::RevenueAccount::fiscal_window)
            })
    }

    pub fn units_for(&self, building_id: BuildingId) -> &[UnitShare] {
        self.units
            .iter()
            .find(|(b, _)| *b == building_id)
            .map_or(&[], |(_, units)| units.as_slice())
    }
}
