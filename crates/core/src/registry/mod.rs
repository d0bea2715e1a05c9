//! Chart of accounts.
//!
//! Hierarchical financial accounts per building, each carrying an
//! expected monthly amount and a running actual amount. The actual
//! amount is mutated only by the ledger module.

pub mod error;
pub mod service;
pub mod types;

pub use error::RegistryError;
pub use service::RegistryService;
pub use types::{
    Account, AccountIntent, AccountKind, BalanceClass, BalanceSnapshot, CreateAccountInput,
    ExpectedTotals, RecordBalanceInput, UpdateAccountInput,
};
