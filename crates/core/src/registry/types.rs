//! Chart of accounts domain types.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use strata_shared::types::{AccountId, BuildingId, Month};

/// Position of an account in the chart hierarchy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccountKind {
    /// Top-level account.
    Main,
    /// Sub account under a main account.
    Sub,
    /// Detailed account under a sub account.
    Detailed,
}

/// Balance classification.
///
/// Ordinary accounts cover regular recurring budgets; extraordinary
/// accounts track special assessments and require a display name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BalanceClass {
    /// Regular recurring account.
    Ordinary,
    /// Special/one-off assessment account.
    Extraordinary,
}

/// A chart-of-accounts entry.
///
/// `(building_id, code)` is unique. `actual_amount` is a running total
/// mutated only by ledger postings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Account {
    /// Unique identifier.
    pub id: AccountId,
    /// Building this account belongs to.
    pub building_id: BuildingId,
    /// Account code, unique per building.
    pub code: String,
    /// Account name.
    pub name: String,
    /// Position in the hierarchy.
    pub kind: AccountKind,
    /// Parent account (must belong to the same building).
    pub parent_id: Option<AccountId>,
    /// Balance classification.
    pub balance_class: BalanceClass,
    /// Display name for extraordinary balances.
    pub balance_name: Option<String>,
    /// Expected monthly amount while the assembly period is active.
    pub expected_amount: Decimal,
    /// Running actual amount (sum of all posted transactions).
    pub actual_amount: Decimal,
    /// Start of the assembly period, if budgeted.
    pub assembly_start: Option<NaiveDate>,
    /// End of the assembly period, if budgeted.
    pub assembly_end: Option<NaiveDate>,
    /// Fiscal year marker.
    pub fiscal_year: Option<u16>,
    /// When the account was created.
    pub created_at: DateTime<Utc>,
    /// When the account was last updated.
    pub updated_at: DateTime<Utc>,
}

impl Account {
    /// Display name used when denormalizing into revenue accounts.
    #[must_use]
    pub fn display_name(&self) -> String {
        format!("{} - {}", self.code, self.name)
    }

    /// True if the month falls inside the account's assembly period.
    ///
    /// Accounts without a complete assembly period cover no month.
    #[must_use]
    pub fn assembly_covers(&self, month: Month) -> bool {
        match (self.assembly_start, self.assembly_end) {
            (Some(start), Some(end)) => {
                Month::from_date(start) <= month && month <= Month::from_date(end)
            }
            _ => false,
        }
    }
}

/// Caller intent when resolving an account by code.
///
/// The source system silently created missing budget categories; here
/// the caller must state whether creation is acceptable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccountIntent {
    /// Fail with `NotFound` when the code is absent.
    MustExist,
    /// Create the account from the provided input when absent.
    CreateIfMissing,
}

/// Input for creating an account.
#[derive(Debug, Clone)]
pub struct CreateAccountInput {
    /// Building the account belongs to.
    pub building_id: BuildingId,
    /// Account code, unique per building.
    pub code: String,
    /// Account name.
    pub name: String,
    /// Position in the hierarchy.
    pub kind: AccountKind,
    /// Optional parent account.
    pub parent_id: Option<AccountId>,
    /// Balance classification.
    pub balance_class: BalanceClass,
    /// Display name, required for extraordinary balances.
    pub balance_name: Option<String>,
    /// Expected monthly amount.
    pub expected_amount: Decimal,
    /// Assembly period start.
    pub assembly_start: Option<NaiveDate>,
    /// Assembly period end.
    pub assembly_end: Option<NaiveDate>,
    /// Fiscal year marker.
    pub fiscal_year: Option<u16>,
}

/// Partial update for an account.
///
/// `actual_amount` is deliberately absent: only the ledger mutates it.
#[derive(Debug, Clone, Default)]
pub struct UpdateAccountInput {
    /// New code (rejected if it collides within the building).
    pub code: Option<String>,
    /// New name.
    pub name: Option<String>,
    /// New hierarchy position.
    pub kind: Option<AccountKind>,
    /// New parent account.
    pub parent_id: Option<AccountId>,
    /// New balance classification.
    pub balance_class: Option<BalanceClass>,
    /// New balance display name.
    pub balance_name: Option<String>,
    /// New expected monthly amount.
    pub expected_amount: Option<Decimal>,
    /// New assembly period start.
    pub assembly_start: Option<NaiveDate>,
    /// New assembly period end.
    pub assembly_end: Option<NaiveDate>,
    /// New fiscal year marker.
    pub fiscal_year: Option<u16>,
}

/// Expected-amount totals split by balance classification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExpectedTotals {
    /// Sum over ordinary accounts.
    pub ordinary: Decimal,
    /// Sum over extraordinary accounts.
    pub extraordinary: Decimal,
}

/// A month-close balance snapshot for one account.
///
/// Append-only history: one snapshot per `(building, account, month)`,
/// never recomputed retroactively.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BalanceSnapshot {
    /// Unique identifier.
    pub id: strata_shared::types::BalanceSnapshotId,
    /// Building the snapshot belongs to.
    pub building_id: BuildingId,
    /// The snapshotted account.
    pub account_id: AccountId,
    /// The closed month.
    pub reference_month: Month,
    /// Balance at month close.
    pub balance: Decimal,
    /// Delinquent (overdue) amount at month close.
    pub delinquency: Decimal,
    /// Balance classification at snapshot time.
    pub balance_class: BalanceClass,
    /// Display name, required for extraordinary balances.
    pub balance_name: Option<String>,
    /// Free-form notes.
    pub notes: String,
    /// When the snapshot was recorded.
    pub created_at: DateTime<Utc>,
}

/// Input for recording a month-close balance snapshot.
#[derive(Debug, Clone)]
pub struct RecordBalanceInput {
    /// Building the snapshot belongs to.
    pub building_id: BuildingId,
    /// The account to snapshot.
    pub account_id: AccountId,
    /// The closed month.
    pub reference_month: Month,
    /// Balance at month close.
    pub balance: Decimal,
    /// Delinquent amount at month close.
    pub delinquency: Decimal,
    /// Balance classification.
    pub balance_class: BalanceClass,
    /// Display name, required for extraordinary balances.
    pub balance_name: Option<String>,
    /// Free-form notes.
    pub notes: String,
}
