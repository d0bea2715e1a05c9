//! Property tests for fee apportionment.

use chrono::Utc;
use proptest::prelude::*;
use rust_decimal::Decimal;
use strata_shared::types::{BuildingId, UnitId};

use super::service::FeeService;
use super::types::UnitShare;
use crate::expense::{ExpenseService, RecordChargeInput};
use crate::revenue::RevenueAccount;

fn make_unit(fraction: Decimal) -> UnitShare {
    UnitShare {
        unit_id: UnitId::new(),
        unit_number: "u".to_string(),
        owner: None,
        ideal_fraction: fraction,
        area: Decimal::ZERO,
    }
}

fn make_revenue(building_id: BuildingId, amount: Decimal) -> RevenueAccount {
    RevenueAccount {
        id: strata_shared::types::RevenueAccountId::new(),
        building_id,
        account_id: None,
        account_name: "3.01 - Common area fee".to_string(),
        monthly_amount: amount,
        start: "2025".parse().unwrap(),
        end: "2025".parse().unwrap(),
        fiscal_year_start: "2025-01".parse().unwrap(),
        fiscal_year_end: "2025-12".parse().unwrap(),
        is_extended: false,
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}

/// Fractions in `[0.0001, 0.5]`, 4 decimal places.
fn fraction_strategy() -> impl Strategy<Value = Decimal> {
    (1i64..=5_000i64).prop_map(|n| Decimal::new(n, 4))
}

/// Monetary amounts in `[0.01, 100000.00]`.
fn amount_strategy() -> impl Strategy<Value = Decimal> {
    (1i64..=10_000_000i64).prop_map(|n| Decimal::new(n, 2))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Conservation: the rounded per-unit fees sum to the exact
    /// apportionment of the collection across the given fractions,
    /// within 0.01 per unit of rounding slack.
    #[test]
    fn prop_fee_sum_conserves_collection(
        fractions in prop::collection::vec(fraction_strategy(), 1..30),
        regular in amount_strategy(),
        additional in amount_strategy(),
    ) {
        let building = BuildingId::new();
        let units: Vec<UnitShare> = fractions.iter().copied().map(make_unit).collect();
        let revenues = vec![make_revenue(building, regular)];
        let charges = vec![ExpenseService::build_charge(
            RecordChargeInput {
                building_id: building,
                name: "c".to_string(),
                description: String::new(),
                total_amount: additional,
                reference_month: "2025-06".parse().unwrap(),
                active: true,
            },
            Utc::now(),
        ).unwrap()];

        let schedule = FeeService::calculate_fees(
            building,
            "2025-06".parse().unwrap(),
            &units,
            &revenues,
            &charges,
        ).unwrap();

        let fee_sum: Decimal = schedule.per_unit_fees.iter().map(|f| f.total_fee).sum();
        let fraction_sum: Decimal = fractions.iter().copied().sum();
        let exact = schedule.total_monthly_collection * fraction_sum;

        let unit_count = Decimal::from(units.len() as u64);
        let slack = Decimal::new(1, 2) * unit_count;
        prop_assert!(
            (fee_sum - exact).abs() <= slack,
            "fee sum {fee_sum} deviates from exact {exact} by more than {slack}"
        );
    }

    /// Repeated calculation over the same inputs is identical.
    #[test]
    fn prop_calculation_is_pure(
        fractions in prop::collection::vec(fraction_strategy(), 1..10),
        regular in amount_strategy(),
    ) {
        let building = BuildingId::new();
        let units: Vec<UnitShare> = fractions.iter().copied().map(make_unit).collect();
        let revenues = vec![make_revenue(building, regular)];

        let month = "2025-06".parse().unwrap();
        let first = FeeService::calculate_fees(building, month, &units, &revenues, &[]).unwrap();
        let second = FeeService::calculate_fees(building, month, &units, &revenues, &[]).unwrap();

        prop_assert_eq!(first.total_monthly_collection, second.total_monthly_collection);
        for (a, b) in first.per_unit_fees.iter().zip(second.per_unit_fees.iter()) {
            prop_assert_eq!(a.total_fee, b.total_fee);
        }
    }

    /// Fraction validation is idempotent and order-independent.
    #[test]
    fn prop_validation_idempotent_and_order_independent(
        mut fractions in prop::collection::vec(fraction_strategy(), 1..20),
    ) {
        let units: Vec<UnitShare> = fractions.iter().copied().map(make_unit).collect();
        let first = FeeService::validate_fractions(&units);
        let second = FeeService::validate_fractions(&units);
        prop_assert_eq!(&first, &second);

        fractions.reverse();
        let reversed_units: Vec<UnitShare> =
            fractions.iter().copied().map(make_unit).collect();
        let reversed = FeeService::validate_fractions(&reversed_units);
        prop_assert_eq!(first.total_fraction, reversed.total_fraction);
        prop_assert_eq!(first.is_valid, reversed.is_valid);
    }

    /// Each unit's fee is monotone in its fraction: a strictly larger
    /// fraction never yields a smaller total fee.
    #[test]
    fn prop_fee_monotone_in_fraction(
        small in fraction_strategy(),
        bump in fraction_strategy(),
        regular in amount_strategy(),
    ) {
        let building = BuildingId::new();
        let large = small + bump;
        let units = vec![make_unit(small), make_unit(large)];
        let revenues = vec![make_revenue(building, regular)];

        let schedule = FeeService::calculate_fees(
            building,
            "2025-06".parse().unwrap(),
            &units,
            &revenues,
            &[],
        ).unwrap();

        prop_assert!(
            schedule.per_unit_fees[0].total_fee <= schedule.per_unit_fees[1].total_fee
        );
    }
}
