//! Expense entries and additional charges.
//!
//! Actual expenses land in one of five fixed parent buckets and are
//! flagged when they fall outside the building's fiscal window.
//! Additional charges are apportionable one-off amounts keyed by month.

pub mod error;
pub mod service;
pub mod types;

pub use error::ExpenseError;
pub use service::ExpenseService;
pub use types::{
    AdditionalCharge, ExpenseEntry, ParentAccount, RecordChargeInput, RecordExpenseInput,
    UpdateChargeInput,
};
