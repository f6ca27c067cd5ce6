//! Display formatting for terminal output
//!
//! Renders reports and transactions as plain text tables, with amounts
//! formatted for the selected currency.

pub mod budget;
pub mod currency;
pub mod dashboard;
pub mod transaction;

pub use budget::{format_budget_status, progress_bar};
pub use currency::{format_money, CurrencyFormat};
pub use dashboard::{format_category_breakdown, format_series, format_summary};
pub use transaction::{format_date, format_transaction_details, format_transaction_list};
