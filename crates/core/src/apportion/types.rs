//! Fee apportionment types.
//!
//! The aggregate types serialize with camelCase field names: they are
//! the stable contract consumed by the report-rendering collaborator.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use strata_shared::types::{BuildingId, Month, UnitId};

/// A unit's share data, as supplied by the unit directory collaborator.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UnitShare {
    /// Unit identifier.
    pub unit_id: UnitId,
    /// Unit number (display).
    pub unit_number: String,
    /// Owner name, if recorded.
    pub owner: Option<String>,
    /// Proportional ownership share; all units of a building should sum
    /// to 1.0.
    pub ideal_fraction: Decimal,
    /// Unit area in square meters.
    pub area: Decimal,
}

/// One unit's computed fees for a reference month.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UnitFee {
    /// Unit identifier.
    pub unit_id: UnitId,
    /// Unit number (display).
    pub unit_number: String,
    /// Owner name; empty string when not recorded.
    pub owner_name: String,
    /// The fraction used as the apportionment weight.
    pub ideal_fraction: Decimal,
    /// Share of the regular budget, rounded to 2 decimals.
    pub regular_fee: Decimal,
    /// Share of the additional charges, rounded to 2 decimals.
    pub additional_fee: Decimal,
    /// Total fee, rounded to 2 decimals.
    pub total_fee: Decimal,
}

/// The full fee schedule for a building and reference month.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeeSchedule {
    /// Building the schedule applies to.
    pub building_id: BuildingId,
    /// The queried reference month.
    pub reference_month: Month,
    /// Sum of revenue accounts whose period covers the reference year.
    pub total_regular_budget: Decimal,
    /// Sum of active additional charges for the exact month.
    pub total_additional_charges: Decimal,
    /// Regular budget plus additional charges.
    pub total_monthly_collection: Decimal,
    /// Sum of all units' ideal fractions.
    pub total_ideal_fraction: Decimal,
    /// True when the fractions sum to 1.0 within tolerance.
    pub is_ideal_fraction_valid: bool,
    /// Per-unit fee rows.
    pub per_unit_fees: Vec<UnitFee>,
}

/// Result of the standalone fraction validation query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FractionValidation {
    /// True when the fractions sum to 1.0 within tolerance.
    ///
    /// Vacuously true for a building with no units.
    pub is_valid: bool,
    /// Sum of the fractions, rounded to 6 decimals.
    pub total_fraction: Decimal,
    /// Number of units considered.
    pub unit_count: usize,
}
