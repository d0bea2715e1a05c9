//! Ledger posting logic.
//!
//! This module implements the account-ledger core:
//! - Transaction rows (one signed posting against one account)
//! - Posting plans: the balance adjustments a post/update/delete implies
//! - The invariant check `actual_amount == Σ transaction amounts`
//!
//! Plans are pure data; the store applies a plan and its row change as a
//! single atomic unit so readers never observe a half-applied posting.

pub mod error;
pub mod service;
pub mod types;

#[cfg(test)]
mod service_props;

pub use error::LedgerError;
pub use service::LedgerService;
pub use types::{
    BalanceAdjustment, PostTransactionInput, Transaction, UpdateTransactionInput,
};
