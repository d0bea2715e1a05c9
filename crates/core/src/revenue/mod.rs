//! Fixed monthly revenue accounts.
//!
//! Each revenue account repeats a fixed monthly amount across a validity
//! window and carries the building's fiscal-year markers. Windows can be
//! extended forward, never shrunk.

pub mod error;
pub mod service;
pub mod types;

pub use error::RevenueError;
pub use service::RevenueService;
pub use types::{CreateRevenueAccountInput, RevenueAccount};
