//! Dashboard display formatting
//!
//! Text stand-ins for the dashboard charts: headline totals, the category
//! breakdown and the income and expense series.

use chrono::DateTime;
use tabled::builder::Builder;
use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::models::CurrencyCode;
use crate::reports::{CategoryTotal, DashboardSummary, SeriesPoint};

use super::currency::format_money;
use super::transaction::format_date;

const EMPTY_PLACEHOLDER: &str = "No transactions yet";

#[derive(Tabled)]
struct CategoryRow {
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Amount")]
    amount: String,
    #[tabled(rename = "Share")]
    share: String,
    #[tabled(rename = "Color")]
    color: &'static str,
}

#[derive(Tabled)]
struct SeriesRow {
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Total")]
    total: String,
}

/// Headline figures
pub fn format_summary(summary: &DashboardSummary, currency: CurrencyCode) -> String {
    let mut builder = Builder::default();
    builder.push_record([String::from("Total income"), format_money(summary.total_income, currency)]);
    builder.push_record([String::from("Total expenses"), format_money(summary.total_expense, currency)]);
    builder.push_record([String::from("Balance"), format_money(summary.balance, currency)]);
    builder.push_record([String::from("Transactions"), summary.transaction_count.to_string()]);

    let mut table = builder.build();
    table.with(Style::rounded());
    format!("{}\n", table)
}

/// Category breakdown with each category's share of the total
pub fn format_category_breakdown(totals: &[CategoryTotal], currency: CurrencyCode) -> String {
    let mut output = String::from("Totals by category\n");
    if totals.is_empty() {
        output.push_str(EMPTY_PLACEHOLDER);
        output.push('\n');
        return output;
    }

    let rows = totals.iter().map(|t| CategoryRow {
        category: t.category.clone(),
        amount: format_money(t.total, currency),
        share: format!("{:.1}%", t.share),
        color: t.color,
    });

    let mut table = Table::new(rows);
    table.with(Style::rounded());
    output.push_str(&table.to_string());
    output.push('\n');
    output
}

/// A date series, labelled with the chart date pattern
pub fn format_series(
    title: &str,
    points: &[SeriesPoint],
    currency: CurrencyCode,
    date_format: &str,
) -> String {
    let mut output = format!("{}\n", title);
    if points.is_empty() {
        output.push_str(EMPTY_PLACEHOLDER);
        output.push('\n');
        return output;
    }

    let rows = points.iter().map(|p| SeriesRow {
        date: DateTime::from_timestamp_millis(p.date)
            .map(|d| format_date(&d, date_format))
            .unwrap_or_else(|| p.date.to_string()),
        total: format_money(p.total, currency),
    });

    let mut table = Table::new(rows);
    table.with(Style::rounded());
    output.push_str(&table.to_string());
    output.push('\n');
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Money, Transaction, TransactionType};
    use crate::reports::{by_category, by_series, PeriodScope};
    use chrono::{TimeZone, Utc};

    fn txn(kind: TransactionType, cents: i64, category: &str, day: u32) -> Transaction {
        Transaction::new(
            kind,
            Money::from_cents(cents),
            category,
            Utc.with_ymd_and_hms(2025, 3, day, 0, 0, 0).unwrap(),
        )
    }

    #[test]
    fn test_empty_placeholders() {
        let breakdown = format_category_breakdown(&[], CurrencyCode::Usd);
        assert!(breakdown.contains(EMPTY_PLACEHOLDER));

        let series = format_series("Income", &[], CurrencyCode::Usd, "%b %d");
        assert!(series.starts_with("Income\n"));
        assert!(series.contains(EMPTY_PLACEHOLDER));
    }

    #[test]
    fn test_category_breakdown() {
        let transactions = vec![
            txn(TransactionType::Expense, 7500, "Food", 1),
            txn(TransactionType::Expense, 2500, "Transport", 2),
        ];
        let totals = by_category(&transactions, &PeriodScope::AllTime);
        let output = format_category_breakdown(&totals, CurrencyCode::Usd);

        assert!(output.contains("Food"));
        assert!(output.contains("$75.00"));
        assert!(output.contains("75.0%"));
        assert!(output.contains("25.0%"));
    }

    #[test]
    fn test_series_uses_chart_labels() {
        let transactions = vec![
            txn(TransactionType::Income, 100_000, "Salary", 5),
            txn(TransactionType::Income, 5_000, "Bonus", 5),
        ];
        let points = by_series(&transactions, TransactionType::Income);
        let output = format_series("Income", &points, CurrencyCode::Usd, "%b %d");

        assert!(output.contains("Mar 05"));
        assert!(output.contains("$1,050.00"));
    }

    #[test]
    fn test_summary() {
        let transactions = vec![
            txn(TransactionType::Income, 10_000, "Salary", 1),
            txn(TransactionType::Expense, 12_500, "Bills", 2),
        ];
        let summary = DashboardSummary::from_transactions(&transactions);
        let output = format_summary(&summary, CurrencyCode::Usd);

        assert!(output.contains("$100.00"));
        assert!(output.contains("-$25.00"));
    }
}
