//! Fee apportionment calculations.
//!
//! Pure functions of their inputs: no side effects, safe to call
//! repeatedly and concurrently with postings.

use rust_decimal::{Decimal, RoundingStrategy};
use strata_shared::types::{BuildingId, Month};

use super::error::ApportionError;
use super::types::{FeeSchedule, FractionValidation, UnitFee, UnitShare};
use crate::expense::AdditionalCharge;
use crate::revenue::RevenueAccount;

/// Fee apportionment service.
pub struct FeeService;

impl FeeService {
    /// Tolerance for the ideal-fraction sum check: `|Σ − 1.0| < 1e-4`.
    #[must_use]
    pub fn fraction_tolerance() -> Decimal {
        Decimal::new(1, 4)
    }

    /// Validate that a building's ideal fractions sum to 1.0.
    ///
    /// Zero units yield the vacuous-truth result
    /// `{is_valid: true, total_fraction: 0.0, unit_count: 0}`.
    #[must_use]
    pub fn validate_fractions(units: &[UnitShare]) -> FractionValidation {
        let total: Decimal = units.iter().map(|u| u.ideal_fraction).sum();
        let is_valid = units.is_empty()
            || (total - Decimal::ONE).abs() < Self::fraction_tolerance();

        FractionValidation {
            is_valid,
            total_fraction: total.round_dp(6),
            unit_count: units.len(),
        }
    }

    /// Compute the fee schedule for a building and reference month.
    ///
    /// The regular budget sums revenue accounts whose validity window
    /// covers the *year* of the reference month (year-truncated
    /// matching, preserved from the source system). Additional charges
    /// contribute when active and matching the month exactly. Per-unit
    /// fees round half-up to 2 decimals.
    ///
    /// # Errors
    ///
    /// Returns `ApportionError::NoUnits` when the building has no units.
    pub fn calculate_fees(
        building_id: BuildingId,
        reference_month: Month,
        units: &[UnitShare],
        revenues: &[RevenueAccount],
        charges: &[AdditionalCharge],
    ) -> Result<FeeSchedule, ApportionError> {
        if units.is_empty() {
            return Err(ApportionError::NoUnits(building_id));
        }

        let total_regular_budget: Decimal = revenues
            .iter()
            .filter(|r| r.covers_year(reference_month.year()))
            .map(|r| r.monthly_amount)
            .sum();

        let total_additional_charges: Decimal = charges
            .iter()
            .filter(|c| c.applies_to(reference_month))
            .map(|c| c.total_amount)
            .sum();

        let total_monthly_collection = total_regular_budget + total_additional_charges;

        let validation = Self::validate_fractions(units);

        let per_unit_fees = units
            .iter()
            .map(|unit| {
                let regular_fee = total_regular_budget * unit.ideal_fraction;
                let additional_fee = total_additional_charges * unit.ideal_fraction;
                let total_fee = regular_fee + additional_fee;

                UnitFee {
                    unit_id: unit.unit_id,
                    unit_number: unit.unit_number.clone(),
                    owner_name: unit.owner.clone().unwrap_or_default(),
                    ideal_fraction: unit.ideal_fraction,
                    regular_fee: Self::round_fee(regular_fee),
                    additional_fee: Self::round_fee(additional_fee),
                    total_fee: Self::round_fee(total_fee),
                }
            })
            .collect();

        Ok(FeeSchedule {
            building_id,
            reference_month,
            total_regular_budget,
            total_additional_charges,
            total_monthly_collection,
            total_ideal_fraction: validation.total_fraction,
            is_ideal_fraction_valid: validation.is_valid,
            per_unit_fees,
        })
    }

    /// Half-up rounding to 2 decimal places.
    fn round_fee(amount: Decimal) -> Decimal {
        amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
    }
}
