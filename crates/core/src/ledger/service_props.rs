//! Property tests for the ledger posting plans.
//!
//! The invariant under test: for any account, at any time,
//! `actual_amount == Σ amounts of its non-deleted postings`, across any
//! sequence of post/update/delete operations, including updates that
//! move a posting to a different account.

use std::collections::HashMap;

use chrono::Utc;
use proptest::prelude::*;
use rust_decimal::Decimal;
use strata_shared::types::{AccountId, BuildingId};

use super::service::LedgerService;
use super::types::{PostTransactionInput, Transaction, UpdateTransactionInput};

/// A randomized ledger operation over a small pool of accounts.
#[derive(Debug, Clone)]
enum Op {
    Post { account: usize, amount: Decimal },
    Update { row: usize, account: Option<usize>, amount: Option<Decimal> },
    Delete { row: usize },
}

/// Minimal store model: balances plus transaction rows, mutated only
/// through the service's plans.
struct MiniLedger {
    accounts: Vec<AccountId>,
    balances: HashMap<AccountId, Decimal>,
    rows: Vec<Transaction>,
}

impl MiniLedger {
    fn new(account_count: usize) -> Self {
        let accounts: Vec<AccountId> = (0..account_count).map(|_| AccountId::new()).collect();
        let balances = accounts.iter().map(|id| (*id, Decimal::ZERO)).collect();
        Self { accounts, balances, rows: Vec::new() }
    }

    fn apply_plan(&mut self, plan: &[super::types::BalanceAdjustment]) {
        for adjustment in plan {
            *self.balances.get_mut(&adjustment.account_id).unwrap() += adjustment.delta;
        }
    }

    fn run(&mut self, op: &Op) {
        match *op {
            Op::Post { account, amount } => {
                let tx = LedgerService::build_transaction(
                    PostTransactionInput {
                        building_id: BuildingId::new(),
                        account_id: self.accounts[account % self.accounts.len()],
                        amount,
                        reference_month: "2025-01".parse().unwrap(),
                        description: None,
                    },
                    Utc::now(),
                );
                let plan = LedgerService::plan_post(&tx);
                self.apply_plan(&plan);
                self.rows.push(tx);
            }
            Op::Update { row, account, amount } => {
                if self.rows.is_empty() {
                    return;
                }
                let idx = row % self.rows.len();
                let update = UpdateTransactionInput {
                    account_id: account.map(|a| self.accounts[a % self.accounts.len()]),
                    amount,
                    ..UpdateTransactionInput::default()
                };
                let plan = LedgerService::plan_update(&self.rows[idx], &update);
                self.apply_plan(&plan);
                LedgerService::apply_update(&mut self.rows[idx], update, Utc::now());
            }
            Op::Delete { row } => {
                if self.rows.is_empty() {
                    return;
                }
                let idx = row % self.rows.len();
                let plan = LedgerService::plan_delete(&self.rows[idx]);
                self.apply_plan(&plan);
                self.rows.swap_remove(idx);
            }
        }
    }

    fn assert_consistent(&self) -> Result<(), TestCaseError> {
        for (account_id, balance) in &self.balances {
            let result = LedgerService::check_consistency(*account_id, *balance, &self.rows);
            prop_assert!(
                result.is_ok(),
                "account {account_id} diverged: {:?}",
                result
            );
        }
        Ok(())
    }
}

fn amount_strategy() -> impl Strategy<Value = Decimal> {
    (-100_000i64..100_000i64).prop_map(|n| Decimal::new(n, 2))
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        (0usize..3, amount_strategy()).prop_map(|(account, amount)| Op::Post { account, amount }),
        (any::<usize>(), proptest::option::of(0usize..3), proptest::option::of(amount_strategy()))
            .prop_map(|(row, account, amount)| Op::Update { row, account, amount }),
        any::<usize>().prop_map(|row| Op::Delete { row }),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Ledger consistency holds after every single operation in any
    /// sequence of posts, updates (including account moves), and deletes.
    #[test]
    fn prop_ledger_consistency_under_any_sequence(
        ops in prop::collection::vec(op_strategy(), 1..40),
    ) {
        let mut ledger = MiniLedger::new(3);
        for op in &ops {
            ledger.run(op);
            ledger.assert_consistent()?;
        }
    }

    /// The adjustments of an update plan always sum to `new - old`,
    /// whether or not the posting moves between accounts.
    #[test]
    fn prop_update_plan_conserves_delta(
        old_amount in amount_strategy(),
        new_amount in proptest::option::of(amount_strategy()),
        moves in any::<bool>(),
    ) {
        let tx = LedgerService::build_transaction(
            PostTransactionInput {
                building_id: BuildingId::new(),
                account_id: AccountId::new(),
                amount: old_amount,
                reference_month: "2025-01".parse().unwrap(),
                description: None,
            },
            Utc::now(),
        );
        let update = UpdateTransactionInput {
            account_id: moves.then(AccountId::new),
            amount: new_amount,
            ..UpdateTransactionInput::default()
        };
        let plan = LedgerService::plan_update(&tx, &update);

        let total: Decimal = plan.iter().map(|a| a.delta).sum();
        let expected = new_amount.unwrap_or(old_amount) - old_amount;
        prop_assert_eq!(total, expected);
    }

    /// Posting then deleting a transaction is a no-op on balances.
    #[test]
    fn prop_post_then_delete_is_identity(amount in amount_strategy()) {
        let tx = LedgerService::build_transaction(
            PostTransactionInput {
                building_id: BuildingId::new(),
                account_id: AccountId::new(),
                amount,
                reference_month: "2025-06".parse().unwrap(),
                description: None,
            },
            Utc::now(),
        );
        let post = LedgerService::plan_post(&tx);
        let delete = LedgerService::plan_delete(&tx);
        let net: Decimal = post.iter().chain(delete.iter()).map(|a| a.delta).sum();
        prop_assert_eq!(net, Decimal::ZERO);
    }

    /// A same-account update never emits more than one adjustment, and a
    /// move always emits exactly two targeting distinct accounts.
    #[test]
    fn prop_update_plan_shape(
        amount in amount_strategy(),
        new_amount in amount_strategy(),
        moves in any::<bool>(),
    ) {
        let tx = LedgerService::build_transaction(
            PostTransactionInput {
                building_id: BuildingId::new(),
                account_id: AccountId::new(),
                amount,
                reference_month: "2025-01".parse().unwrap(),
                description: None,
            },
            Utc::now(),
        );
        let update = UpdateTransactionInput {
            account_id: moves.then(AccountId::new),
            amount: Some(new_amount),
            ..UpdateTransactionInput::default()
        };
        let plan = LedgerService::plan_update(&tx, &update);

        if moves {
            prop_assert_eq!(plan.len(), 2);
            prop_assert_ne!(plan[0].account_id, plan[1].account_id);
        } else {
            prop_assert_eq!(plan.len(), 1);
            prop_assert_eq!(plan[0].account_id, tx.account_id);
        }
    }
}
