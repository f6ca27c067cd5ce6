//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod backup;
pub mod budget;
pub mod currency;
pub mod dashboard;
pub mod export;
pub mod transaction;

pub use backup::{handle_backup_command, BackupCommands};
pub use budget::{handle_budget_command, BudgetCommands};
pub use currency::{handle_currency_command, CurrencyCommands};
pub use dashboard::handle_dashboard_command;
pub use export::{handle_export_command, ExportCommands};
pub use transaction::{handle_transaction_command, TransactionCommands};

use chrono::{DateTime, Datelike, NaiveDate, Utc};

use crate::error::{PocketError, PocketResult};
use crate::models::Money;

/// Parse a `YYYY-MM` month argument
pub fn parse_month(input: &str) -> PocketResult<(i32, u32)> {
    let date = NaiveDate::parse_from_str(&format!("{}-01", input.trim()), "%Y-%m-%d")
        .map_err(|_| {
            PocketError::Validation(format!("Invalid month '{}', expected YYYY-MM", input))
        })?;
    Ok((date.year(), date.month()))
}

/// The month argument if given, otherwise the current month
pub fn month_or_current(input: Option<&str>) -> PocketResult<(i32, u32)> {
    match input {
        Some(month) => parse_month(month),
        None => {
            let today = Utc::now().date_naive();
            Ok((today.year(), today.month()))
        }
    }
}

/// "March 2025"
pub fn month_label(year: i32, month: u32) -> String {
    NaiveDate::from_ymd_opt(year, month, 1)
        .map(|d| d.format("%B %Y").to_string())
        .unwrap_or_else(|| format!("{}-{:02}", year, month))
}

/// Parse a user-entered amount, refusing negatives
pub fn parse_amount(input: &str) -> PocketResult<Money> {
    let amount = Money::parse(input)
        .map_err(|e| PocketError::Validation(format!("Invalid amount '{}': {}", input, e)))?;
    if amount.is_negative() {
        return Err(PocketError::Validation(format!(
            "Amount cannot be negative: {}",
            input
        )));
    }
    Ok(amount)
}

/// Parse a `YYYY-MM-DD` date argument as midnight UTC
pub fn parse_date(input: &str) -> PocketResult<DateTime<Utc>> {
    let date = NaiveDate::parse_from_str(input.trim(), "%Y-%m-%d").map_err(|_| {
        PocketError::Validation(format!("Invalid date '{}', expected YYYY-MM-DD", input))
    })?;
    Ok(date.and_time(chrono::NaiveTime::MIN).and_utc())
}
