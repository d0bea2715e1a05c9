//! Shared types and errors for Strata.
//!
//! This crate provides common types used across all other crates:
//! - Typed IDs for entity references
//! - Accounting period types (`Month`, `PeriodBound`, `FiscalWindow`)
//! - The application-wide error taxonomy

pub mod error;
pub mod types;


pub use error::{AppError, AppResult, ErrorKind};
