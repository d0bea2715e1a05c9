//! Common types used across the application.

pub mod id;
pub mod period;

#[cfg(test)]
mod period_tests;

pub use id::{
    AccountId, AdditionalChargeId, BalanceSnapshotId, BuildingId, ExpenseEntryId,
    RevenueAccountId, TransactionId, UnitId,
};
pub use period::{FiscalWindow, Month, MonthRange, PeriodBound, PeriodParseError};
