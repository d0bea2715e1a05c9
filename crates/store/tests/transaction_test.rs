//! Ledger posting flows against the store.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use strata_core::ledger::{PostTransactionInput, UpdateTransactionInput};
use strata_core::registry::{AccountKind, BalanceClass, CreateAccountInput};
use strata_shared::error::ErrorKind;
use strata_shared::types::{AccountId, BuildingId, Month};
use strata_store::MemoryStore;

fn month(s: &str) -> Month {
    s.parse().unwrap()
}

fn account_input(building_id: BuildingId, code: &str) -> CreateAccountInput {
    CreateAccountInput {
        building_id,
        code: code.to_string(),
        name: format!("Account {code}"),
        kind: AccountKind::Main,
        parent_id: None,
        balance_class: BalanceClass::Ordinary,
        balance_name: None,
        expected_amount: dec!(1000.00),
        assembly_start: None,
        assembly_end: None,
        fiscal_year: None,
    }
}

fn post_input(
    building_id: BuildingId,
    account_id: AccountId,
    amount: Decimal,
    m: &str,
) -> PostTransactionInput {
    PostTransactionInput {
        building_id,
        account_id,
        amount,
        reference_month: month(m),
        description: None,
    }
}

#[test]
fn post_increments_actual_amount() {
    let store = MemoryStore::new();
    let building = BuildingId::new();
    let account = store.accounts().create(account_input(building, "1.01")).unwrap();
    assert_eq!(account.actual_amount, Decimal::ZERO);

    store
        .transactions()
        .post(post_input(building, account.id, dec!(100.00), "2025-01"))
        .unwrap();
    assert_eq!(store.accounts().get(account.id).unwrap().actual_amount, dec!(100.00));

    store
        .transactions()
        .post(post_input(building, account.id, dec!(-30.00), "2025-01"))
        .unwrap();
    assert_eq!(store.accounts().get(account.id).unwrap().actual_amount, dec!(70.00));

    store.transactions().audit_account(account.id).unwrap();
}

#[test]
fn update_same_account_applies_delta_only() {
    let store = MemoryStore::new();
    let building = BuildingId::new();
    let account = store.accounts().create(account_input(building, "1.01")).unwrap();

    let tx = store
        .transactions()
        .post(post_input(building, account.id, dec!(50.00), "2025-01"))
        .unwrap();
    store
        .transactions()
        .update(tx.id, UpdateTransactionInput {
            amount: Some(dec!(80.00)),
            ..UpdateTransactionInput::default()
        })
        .unwrap();

    // 80, not 50 + 80.
    assert_eq!(store.accounts().get(account.id).unwrap().actual_amount, dec!(80.00));
    store.transactions().audit_account(account.id).unwrap();
}

#[test]
fn update_moves_posting_between_accounts() {
    // Post 50.00 to X, then update it to 80.00 while moving it to Y:
    // X drops back by 50.00, Y gains 80.00.
    let store = MemoryStore::new();
    let building = BuildingId::new();
    let x = store.accounts().create(account_input(building, "1.01")).unwrap();
    let y = store.accounts().create(account_input(building, "1.02")).unwrap();

    let tx = store
        .transactions()
        .post(post_input(building, x.id, dec!(50.00), "2025-01"))
        .unwrap();
    assert_eq!(store.accounts().get(x.id).unwrap().actual_amount, dec!(50.00));

    let updated = store
        .transactions()
        .update(tx.id, UpdateTransactionInput {
            account_id: Some(y.id),
            amount: Some(dec!(80.00)),
            ..UpdateTransactionInput::default()
        })
        .unwrap();

    assert_eq!(updated.account_id, y.id);
    assert_eq!(updated.amount, dec!(80.00));
    assert_eq!(store.accounts().get(x.id).unwrap().actual_amount, Decimal::ZERO);
    assert_eq!(store.accounts().get(y.id).unwrap().actual_amount, dec!(80.00));

    store.transactions().audit_account(x.id).unwrap();
    store.transactions().audit_account(y.id).unwrap();
}

#[test]
fn delete_subtracts_amount_before_removal() {
    let store = MemoryStore::new();
    let building = BuildingId::new();
    let account = store.accounts().create(account_input(building, "1.01")).unwrap();

    let tx = store
        .transactions()
        .post(post_input(building, account.id, dec!(50.00), "2025-01"))
        .unwrap();
    store.transactions().delete(tx.id).unwrap();

    assert_eq!(store.accounts().get(account.id).unwrap().actual_amount, Decimal::ZERO);
    assert!(store.transactions().get(tx.id).is_err());
    assert!(store.transactions().list_for_account(account.id).is_empty());
}

#[test]
fn post_to_unknown_account_is_not_found() {
    let store = MemoryStore::new();
    let building = BuildingId::new();
    let err = store
        .transactions()
        .post(post_input(building, AccountId::new(), dec!(10.00), "2025-01"))
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotFound);
}

#[test]
fn post_to_cross_building_account_is_rejected() {
    let store = MemoryStore::new();
    let account = store
        .accounts()
        .create(account_input(BuildingId::new(), "1.01"))
        .unwrap();

    let err = store
        .transactions()
        .post(post_input(BuildingId::new(), account.id, dec!(10.00), "2025-01"))
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Validation);
}

#[test]
fn failed_move_leaves_no_partial_state() {
    let store = MemoryStore::new();
    let building = BuildingId::new();
    let account = store.accounts().create(account_input(building, "1.01")).unwrap();
    let tx = store
        .transactions()
        .post(post_input(building, account.id, dec!(50.00), "2025-01"))
        .unwrap();

    // Moving to a nonexistent account must fail without touching the
    // old account or the row.
    let err = store
        .transactions()
        .update(tx.id, UpdateTransactionInput {
            account_id: Some(AccountId::new()),
            amount: Some(dec!(80.00)),
            ..UpdateTransactionInput::default()
        })
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotFound);

    assert_eq!(store.accounts().get(account.id).unwrap().actual_amount, dec!(50.00));
    let row = store.transactions().get(tx.id).unwrap();
    assert_eq!(row.amount, dec!(50.00));
    assert_eq!(row.account_id, account.id);
    store.transactions().audit_account(account.id).unwrap();
}

#[test]
fn account_deletion_is_blocked_while_postings_exist() {
    let store = MemoryStore::new();
    let building = BuildingId::new();
    let account = store.accounts().create(account_input(building, "1.01")).unwrap();
    let tx = store
        .transactions()
        .post(post_input(building, account.id, dec!(25.00), "2025-01"))
        .unwrap();

    let err = store.accounts().delete(account.id).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Validation);

    store.transactions().delete(tx.id).unwrap();
    store.accounts().delete(account.id).unwrap();
    assert!(store.accounts().get(account.id).is_err());
}

#[test]
fn duplicate_code_is_a_conflict() {
    let store = MemoryStore::new();
    let building = BuildingId::new();
    store.accounts().create(account_input(building, "1.01")).unwrap();

    let err = store.accounts().create(account_input(building, "1.01")).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Duplicate);

    // The flattened API-layer form keeps the kind and message.
    let app: strata_shared::error::AppError = err.into();
    assert_eq!(app.status_code(), 409);
    assert_eq!(app.error_code(), "DUPLICATE_ERROR");

    // Same code in another building is fine.
    store
        .accounts()
        .create(account_input(BuildingId::new(), "1.01"))
        .unwrap();
}

#[test]
fn resolve_requires_stated_intent() {
    use strata_core::registry::AccountIntent;

    let store = MemoryStore::new();
    let building = BuildingId::new();

    let err = store
        .accounts()
        .resolve(account_input(building, "9.99"), AccountIntent::MustExist)
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotFound);

    let created = store
        .accounts()
        .resolve(account_input(building, "9.99"), AccountIntent::CreateIfMissing)
        .unwrap();
    let resolved = store
        .accounts()
        .resolve(account_input(building, "9.99"), AccountIntent::MustExist)
        .unwrap();
    assert_eq!(created.id, resolved.id);
}
