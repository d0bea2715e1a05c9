//! Ledger domain types.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use strata_shared::types::{AccountId, BuildingId, Month, TransactionId};

/// A single posting against one account.
///
/// The amount is signed: positive postings raise the account's actual
/// amount, negative postings lower it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transaction {
    /// Unique identifier.
    pub id: TransactionId,
    /// Building this posting belongs to.
    pub building_id: BuildingId,
    /// Account the posting applies to.
    pub account_id: AccountId,
    /// Signed amount.
    pub amount: Decimal,
    /// Accounting month this posting belongs to.
    pub reference_month: Month,
    /// Optional description.
    pub description: Option<String>,
    /// When the posting was created.
    pub created_at: DateTime<Utc>,
    /// When the posting was last updated.
    pub updated_at: DateTime<Utc>,
}

/// Input for posting a new transaction.
#[derive(Debug, Clone)]
pub struct PostTransactionInput {
    /// Building the posting belongs to.
    pub building_id: BuildingId,
    /// Account the posting applies to.
    pub account_id: AccountId,
    /// Signed amount.
    pub amount: Decimal,
    /// Accounting month.
    pub reference_month: Month,
    /// Optional description.
    pub description: Option<String>,
}

/// Partial update for an existing transaction.
#[derive(Debug, Clone, Default)]
pub struct UpdateTransactionInput {
    /// Move the posting to a different account.
    pub account_id: Option<AccountId>,
    /// Change the amount.
    pub amount: Option<Decimal>,
    /// Change the accounting month.
    pub reference_month: Option<Month>,
    /// Change the description.
    pub description: Option<String>,
}

/// One account-balance change implied by a ledger operation.
///
/// A plan is a list of adjustments that must all apply together with
/// the transaction-row change, or not at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BalanceAdjustment {
    /// The account whose actual amount moves.
    pub account_id: AccountId,
    /// The signed delta to apply.
    pub delta: Decimal,
}
