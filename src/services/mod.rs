//! Service layer for pocket-tracker
//!
//! The service layer sits on top of the preference store, handling
//! validation at the boundary and feeding stored data to the reports.

pub mod budget;
pub mod transaction;

pub use budget::BudgetService;
pub use transaction::{CreateTransactionInput, TransactionService};
