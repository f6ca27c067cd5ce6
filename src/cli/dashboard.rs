//! Dashboard CLI command
//!
//! Prints the headline totals, the category breakdown and the income and
//! expense series, recomputed from the store on every run.

use crate::config::Settings;
use crate::display::{format_category_breakdown, format_series, format_summary};
use crate::error::PocketResult;
use crate::models::TransactionType;
use crate::reports::{by_category, by_series, DashboardSummary, PeriodScope};
use crate::storage::PreferenceStore;

use super::{month_label, parse_month};

/// Handle the dashboard command
///
/// With a month, every section is limited to that month.
pub fn handle_dashboard_command(
    store: &dyn PreferenceStore,
    settings: &Settings,
    month: Option<String>,
) -> PocketResult<()> {
    let currency = store.selected_currency()?;

    let (scope, title) = match month {
        Some(m) => {
            let (year, month) = parse_month(&m)?;
            (
                PeriodScope::Month { year, month },
                format!("Dashboard: {}", month_label(year, month)),
            )
        }
        None => (PeriodScope::AllTime, "Dashboard: all time".to_string()),
    };

    let transactions: Vec<_> = store
        .transactions()?
        .into_iter()
        .filter(|t| scope.contains(t))
        .collect();

    println!("{}", title);
    println!("{}", "=".repeat(title.chars().count()));
    print!(
        "{}",
        format_summary(&DashboardSummary::from_transactions(&transactions), currency)
    );
    println!();
    print!(
        "{}",
        format_category_breakdown(&by_category(&transactions, &scope), currency)
    );
    println!();
    print!(
        "{}",
        format_series(
            "Income",
            &by_series(&transactions, TransactionType::Income),
            currency,
            &settings.chart_date_format,
        )
    );
    println!();
    print!(
        "{}",
        format_series(
            "Expenses",
            &by_series(&transactions, TransactionType::Expense),
            currency,
            &settings.chart_date_format,
        )
    );

    Ok(())
}
