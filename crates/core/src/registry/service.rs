//! Registry service for account validation and construction.
//!
//! Pure business logic: persistence lookups are injected as closures so
//! the rules stay testable without a store.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use strata_shared::types::{AccountId, BuildingId};

use super::error::RegistryError;
use super::types::{
    Account, BalanceClass, CreateAccountInput, ExpectedTotals, UpdateAccountInput,
};

/// Registry service for chart-of-accounts rules.
pub struct RegistryService;

impl RegistryService {
    /// Validate an account creation request.
    ///
    /// Checks, in order:
    /// 1. `(building, code)` uniqueness
    /// 2. extraordinary classification carries a non-empty balance name
    /// 3. the parent, if any, exists and belongs to the same building
    ///
    /// # Errors
    ///
    /// Returns `RegistryError` if any rule is violated.
    pub fn validate_create<C, P>(
        input: &CreateAccountInput,
        code_exists: C,
        parent_building: P,
    ) -> Result<(), RegistryError>
    where
        C: Fn(&str) -> bool,
        P: Fn(AccountId) -> Option<BuildingId>,
    {
        if code_exists(&input.code) {
            return Err(RegistryError::DuplicateCode {
                building_id: input.building_id,
                code: input.code.clone(),
            });
        }

        Self::validate_balance_class(input.balance_class, input.balance_name.as_deref())?;

        if let Some(parent_id) = input.parent_id {
            Self::validate_parent(input.building_id, parent_id, &parent_building)?;
        }

        Ok(())
    }

    /// Build the account record from validated input.
    ///
    /// The actual amount always starts at zero; only ledger postings
    /// move it.
    #[must_use]
    pub fn build_account(input: CreateAccountInput, now: DateTime<Utc>) -> Account {
        Account {
            id: AccountId::new(),
            building_id: input.building_id,
            code: input.code,
            name: input.name,
            kind: input.kind,
            parent_id: input.parent_id,
            balance_class: input.balance_class,
            balance_name: input.balance_name,
            expected_amount: input.expected_amount,
            actual_amount: Decimal::ZERO,
            assembly_start: input.assembly_start,
            assembly_end: input.assembly_end,
            fiscal_year: input.fiscal_year,
            created_at: now,
            updated_at: now,
        }
    }

    /// Validate a partial update against the current account state.
    ///
    /// # Errors
    ///
    /// Returns `RegistryError` on code collision, invalid balance
    /// classification, or a cross-building parent.
    pub fn validate_update<C, P>(
        account: &Account,
        update: &UpdateAccountInput,
        code_exists_other: C,
        parent_building: P,
    ) -> Result<(), RegistryError>
    where
        C: Fn(&str) -> bool,
        P: Fn(AccountId) -> Option<BuildingId>,
    {
        if let Some(code) = &update.code {
            if code != &account.code && code_exists_other(code) {
                return Err(RegistryError::DuplicateCode {
                    building_id: account.building_id,
                    code: code.clone(),
                });
            }
        }

        let class = update.balance_class.unwrap_or(account.balance_class);
        let name = update
            .balance_name
            .as_deref()
            .or(account.balance_name.as_deref());
        Self::validate_balance_class(class, name)?;

        if let Some(parent_id) = update.parent_id {
            Self::validate_parent(account.building_id, parent_id, &parent_building)?;
        }

        Ok(())
    }

    /// Apply a validated partial update in place.
    pub fn apply_update(account: &mut Account, update: UpdateAccountInput, now: DateTime<Utc>) {
        if let Some(code) = update.code {
            account.code = code;
        }
        if let Some(name) = update.name {
            account.name = name;
        }
        if let Some(kind) = update.kind {
            account.kind = kind;
        }
        if let Some(parent_id) = update.parent_id {
            account.parent_id = Some(parent_id);
        }
        if let Some(class) = update.balance_class {
            account.balance_class = class;
        }
        if let Some(balance_name) = update.balance_name {
            account.balance_name = Some(balance_name);
        }
        if let Some(expected) = update.expected_amount {
            account.expected_amount = expected;
        }
        if let Some(start) = update.assembly_start {
            account.assembly_start = Some(start);
        }
        if let Some(end) = update.assembly_end {
            account.assembly_end = Some(end);
        }
        if let Some(year) = update.fiscal_year {
            account.fiscal_year = Some(year);
        }
        account.updated_at = now;
    }

    /// Validate that an account may be deleted.
    ///
    /// Deletion is forbidden while postings still reference the account;
    /// there is no cascade.
    ///
    /// # Errors
    ///
    /// Returns `RegistryError::HasTransactions` when postings remain.
    pub fn validate_delete(account: &Account, transaction_count: usize) -> Result<(), RegistryError> {
        if transaction_count > 0 {
            return Err(RegistryError::HasTransactions {
                account_id: account.id,
                count: transaction_count,
            });
        }
        Ok(())
    }

    /// Expected-amount totals split by balance classification.
    #[must_use]
    pub fn expected_totals_by_class(accounts: &[Account]) -> ExpectedTotals {
        let mut totals = ExpectedTotals {
            ordinary: Decimal::ZERO,
            extraordinary: Decimal::ZERO,
        };
        for account in accounts {
            match account.balance_class {
                BalanceClass::Ordinary => totals.ordinary += account.expected_amount,
                BalanceClass::Extraordinary => totals.extraordinary += account.expected_amount,
            }
        }
        totals
    }

    /// Build a month-close balance snapshot.
    ///
    /// # Errors
    ///
    /// Returns `RegistryError::MissingBalanceName` for an extraordinary
    /// snapshot without a display name. Per-month uniqueness is the
    /// store's check.
    pub fn build_snapshot(
        input: super::types::RecordBalanceInput,
        now: DateTime<Utc>,
    ) -> Result<super::types::BalanceSnapshot, RegistryError> {
        Self::validate_balance_class(input.balance_class, input.balance_name.as_deref())?;

        Ok(super::types::BalanceSnapshot {
            id: strata_shared::types::BalanceSnapshotId::new(),
            building_id: input.building_id,
            account_id: input.account_id,
            reference_month: input.reference_month,
            balance: input.balance,
            delinquency: input.delinquency,
            balance_class: input.balance_class,
            balance_name: input.balance_name,
            notes: input.notes,
            created_at: now,
        })
    }

    fn validate_balance_class(
        class: BalanceClass,
        balance_name: Option<&str>,
    ) -> Result<(), RegistryError> {
        if class == BalanceClass::Extraordinary
            && balance_name.is_none_or(|name| name.trim().is_empty())
        {
            return Err(RegistryError::MissingBalanceName);
        }
        Ok(())
    }

    fn validate_parent<P>(
        building_id: BuildingId,
        parent_id: AccountId,
        parent_building: &P,
    ) -> Result<(), RegistryError>
    where
        P: Fn(AccountId) -> Option<BuildingId>,
    {
        match parent_building(parent_id) {
            None => Err(RegistryError::ParentNotFound(parent_id)),
            Some(parent) if parent != building_id => {
                Err(RegistryError::ParentBuildingMismatch { parent_id })
            }
            Some(_) => Ok(()),
        }
    }
}
