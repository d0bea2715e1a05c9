//! Repository abstractions for data access.
//!
//! Repositories provide a clean interface over the shared state, hiding
//! the locking discipline from the rest of the application.

pub mod account;
pub mod balance;
pub mod expense;
pub mod fees;
pub mod report;
pub mod revenue;
pub mod transaction;
pub mod unit;

pub use account::AccountRepository;
pub use balance::BalanceRepository;
pub use expense::ExpenseRepository;
pub use fees::FeeRepository;
pub use report::ReportRepository;
pub use revenue::RevenueRepository;
pub use transaction::TransactionRepository;
pub use unit::UnitDirectory;
