//! Budget display formatting
//!
//! Renders a budget status as a breakdown table, a progress bar and the
//! tier alert.

use tabled::builder::Builder;
use tabled::settings::Style;

use crate::models::CurrencyCode;
use crate::reports::BudgetStatus;

use super::currency::format_money;

const BAR_WIDTH: usize = 20;

/// Format a budget status for display
pub fn format_budget_status(status: &BudgetStatus, currency: CurrencyCode, month: &str) -> String {
    let mut output = String::new();
    output.push_str(&format!("Budget for {}\n", month));

    let mut builder = Builder::default();
    builder.push_record([String::from("Monthly budget"), format_money(status.budget, currency)]);
    builder.push_record([String::from("Total expenses"), format_money(status.spent, currency)]);
    builder.push_record([String::from("Remaining"), format_money(status.remaining, currency)]);
    let overspent = status.overspent();
    if !overspent.is_zero() {
        builder.push_record([String::from("Overspent"), format_money(overspent, currency)]);
    }
    let mut table = builder.build();
    table.with(Style::rounded());
    output.push_str(&table.to_string());
    output.push('\n');

    output.push_str(&format!(
        "{} {}%\n",
        progress_bar(status.percent_used),
        status.percent_used
    ));
    output.push_str(&status.usage_line());
    output.push('\n');

    let icon = if status.tier.is_alert() { "⚠" } else { "✓" };
    output.push_str(&format!("{} {}\n", icon, status.message()));

    output
}

/// A fixed-width bar, one cell per 5%
pub fn progress_bar(percent: u8) -> String {
    let filled = usize::from(percent.min(100)) * BAR_WIDTH / 100;
    format!(
        "[{}{}]",
        "█".repeat(filled),
        "░".repeat(BAR_WIDTH - filled)
    )
}
