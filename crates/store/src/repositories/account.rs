//! Account repository for chart-of-accounts operations.

use chrono::Utc;
use strata_core::registry::{
    Account, AccountIntent, CreateAccountInput, ExpectedTotals, RegistryError, RegistryService,
    UpdateAccountInput,
};
use strata_shared::types::{AccountId, BuildingId};

use crate::error::StoreError;
use crate::state::State;
use crate::MemoryStore;

/// Repository for chart-of-accounts operations.
pub struct AccountRepository {
    store: MemoryStore,
}

impl AccountRepository {
    pub(crate) fn new(store: MemoryStore) -> Self {
        Self { store }
    }

    /// Create an account.
    ///
    /// # Errors
    ///
    /// Returns a duplicate error on `(building, code)` collision, and
    /// validation errors for a missing extraordinary balance name or a
    /// cross-building parent.
    pub fn create(&self, input: CreateAccountInput) -> Result<Account, StoreError> {
        let mut state = self.store.write();
        Self::create_locked(&mut state, input)
    }

    /// Update an account with partial fields.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` for an unknown id and the same validation
    /// errors as creation.
    pub fn update(&self, id: AccountId, update: UpdateAccountInput) -> Result<Account, StoreError> {
        let mut state = self.store.write();

        let account = state
            .account(id)
            .ok_or(RegistryError::AccountNotFound(id))?
            .clone();

        RegistryService::validate_update(
            &account,
            &update,
            |code| {
                state
                    .accounts
                    .iter()
                    .any(|a| a.building_id == account.building_id && a.id != id && a.code == code)
            },
            |parent_id| state.account(parent_id).map(|a| a.building_id),
        )?;

        let stored = state
            .account_mut(id)
            .ok_or(RegistryError::AccountNotFound(id))?;
        RegistryService::apply_update(stored, update, Utc::now());
        Ok(stored.clone())
    }

    /// Delete an account.
    ///
    /// Forbidden while postings still reference it; deleting the
    /// postings first is an explicit operator choice.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` for an unknown id, or a validation error
    /// naming the remaining posting count.
    pub fn delete(&self, id: AccountId) -> Result<(), StoreError> {
        let mut state = self.store.write();

        let account = state
            .account(id)
            .ok_or(RegistryError::AccountNotFound(id))?
            .clone();
        RegistryService::validate_delete(&account, state.transaction_count_for(id))?;

        state.accounts.retain(|a| a.id != id);
        tracing::debug!(account_id = %id, "account deleted");
        Ok(())
    }

    /// Fetch an account by id.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` for an unknown id.
    pub fn get(&self, id: AccountId) -> Result<Account, StoreError> {
        self.store
            .read()
            .account(id)
            .cloned()
            .ok_or_else(|| RegistryError::AccountNotFound(id).into())
    }

    /// Resolve an account by `(building, code)` with explicit intent.
    ///
    /// # Errors
    ///
    /// With `MustExist`, returns `NotFound` when the code is absent.
    pub fn resolve(
        &self,
        input: CreateAccountInput,
        intent: AccountIntent,
    ) -> Result<Account, StoreError> {
        let mut state = self.store.write();

        if let Some(existing) = state
            .accounts
            .iter()
            .find(|a| a.building_id == input.building_id && a.code == input.code)
        {
            return Ok(existing.clone());
        }

        match intent {
            AccountIntent::MustExist => Err(RegistryError::CodeNotFound {
                building_id: input.building_id,
                code: input.code,
            }
            .into()),
            AccountIntent::CreateIfMissing => Self::create_locked(&mut state, input),
        }
    }

    /// All accounts of a building, in creation order.
    #[must_use]
    pub fn list(&self, building_id: BuildingId) -> Vec<Account> {
        self.store
            .read()
            .accounts
            .iter()
            .filter(|a| a.building_id == building_id)
            .cloned()
            .collect()
    }

    /// Expected-amount totals split by balance classification.
    #[must_use]
    pub fn expected_totals(&self, building_id: BuildingId) -> ExpectedTotals {
        RegistryService::expected_totals_by_class(&self.list(building_id))
    }

    fn create_locked(state: &mut State, input: CreateAccountInput) -> Result<Account, StoreError> {
        RegistryService::validate_create(
            &input,
            |code| {
                state
                    .accounts
                    .iter()
                    .any(|a| a.building_id == input.building_id && a.code == code)
            },
            |parent_id| state.account(parent_id).map(|a| a.building_id),
        )?;

        let account = RegistryService::build_account(input, Utc::now());
        tracing::debug!(account_id = %account.id, code = %account.code, "account created");
        state.accounts.push(account.clone());
        Ok(account)
    }
}
