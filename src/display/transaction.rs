//! Transaction display formatting
//!
//! Provides the transaction list table and single-transaction details.

use std::fmt::Write;

use chrono::{DateTime, Utc};
use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::models::{CurrencyCode, Transaction};

use super::currency::format_money;

const FALLBACK_DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Tabled)]
struct TransactionRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Type")]
    kind: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Amount")]
    amount: String,
    #[tabled(rename = "Note")]
    note: String,
}

/// Format a date with a user-supplied strftime pattern
///
/// An invalid pattern falls back to `%Y-%m-%d` instead of failing.
pub fn format_date(date: &DateTime<Utc>, pattern: &str) -> String {
    let mut output = String::new();
    if write!(output, "{}", date.format(pattern)).is_err() {
        output.clear();
        output.push_str(&date.format(FALLBACK_DATE_FORMAT).to_string());
    }
    output
}

/// Format a list of transactions as a table
pub fn format_transaction_list(
    transactions: &[Transaction],
    currency: CurrencyCode,
    date_format: &str,
) -> String {
    if transactions.is_empty() {
        return "No transactions found.\n".to_string();
    }

    let rows = transactions.iter().map(|txn| TransactionRow {
        id: txn.id.short(),
        date: format_date(&txn.date, date_format),
        kind: txn.kind.to_string(),
        category: truncate(&txn.category, 20),
        amount: signed_amount(txn, currency),
        note: txn.note.as_deref().map(|n| truncate(n, 30)).unwrap_or_default(),
    });

    let mut table = Table::new(rows);
    table.with(Style::rounded());
    format!("{}\n", table)
}

/// Format transaction details for display
pub fn format_transaction_details(
    txn: &Transaction,
    currency: CurrencyCode,
    date_format: &str,
) -> String {
    let mut output = String::new();

    output.push_str(&format!("Transaction: {}\n", txn.id));
    output.push_str(&format!("Full ID:     {}\n", txn.id.as_uuid()));
    output.push_str(&format!("Date:        {}\n", format_date(&txn.date, date_format)));
    output.push_str(&format!("Type:        {}\n", txn.kind));
    output.push_str(&format!("Category:    {}\n", txn.category));
    output.push_str(&format!("Amount:      {}\n", format_money(txn.amount, currency)));

    if let Some(note) = &txn.note {
        output.push_str(&format!("Note:        {}\n", note));
    }

    output
}

fn signed_amount(txn: &Transaction, currency: CurrencyCode) -> String {
    let formatted = format_money(txn.amount, currency);
    if txn.is_income() {
        format!("+{}", formatted)
    } else {
        format!("-{}", formatted)
    }
}

/// Truncate a string to a maximum number of characters
fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Money, TransactionType};
    use chrono::TimeZone;

    fn sample() -> Transaction {
        Transaction::new(
            TransactionType::Expense,
            Money::from_cents(1250),
            "Food",
            Utc.with_ymd_and_hms(2025, 1, 15, 9, 0, 0).unwrap(),
        )
        .with_note("lunch")
    }

    #[test]
    fn test_format_date() {
        let date = Utc.with_ymd_and_hms(2025, 1, 5, 0, 0, 0).unwrap();
        assert_eq!(format_date(&date, "%Y-%m-%d"), "2025-01-05");
        assert_eq!(format_date(&date, "%b %d"), "Jan 05");
        assert_eq!(format_date(&date, "%Q"), "2025-01-05");
    }

    #[test]
    fn test_empty_list() {
        assert_eq!(
            format_transaction_list(&[], CurrencyCode::Usd, "%Y-%m-%d"),
            "No transactions found.\n"
        );
    }

    #[test]
    fn test_list_rows() {
        let txn = sample();
        let output = format_transaction_list(&[txn.clone()], CurrencyCode::Usd, "%Y-%m-%d");

        assert!(output.contains("Category"));
        assert!(output.contains(&txn.id.short()));
        assert!(output.contains("2025-01-15"));
        assert!(output.contains("-$12.50"));
        assert!(output.contains("lunch"));
    }

    #[test]
    fn test_details() {
        let txn = sample();
        let output = format_transaction_details(&txn, CurrencyCode::Eur, "%Y-%m-%d");
        assert!(output.contains("Amount:      12,50 €"));
        assert!(output.contains("Note:        lunch"));
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("Food", 10), "Food");
        assert_eq!(truncate("Entertainment", 8), "Enter...");
    }
}
