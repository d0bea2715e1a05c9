//! Ideal-fraction fee apportionment.
//!
//! Distributes a building's total monthly collection (regular revenue
//! budget plus active additional charges) across units in proportion to
//! each unit's ideal fraction, and validates that the fractions sum
//! to 1.0.

pub mod error;
pub mod service;
pub mod types;

#[cfg(test)]
mod service_props;

pub use error::ApportionError;
pub use service::FeeService;
pub use types::{FeeSchedule, FractionValidation, UnitFee, UnitShare};
