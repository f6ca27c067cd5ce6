//! Budget CLI commands
//!
//! Implements CLI commands for viewing the monthly budget status and
//! setting the budget ceiling.

use clap::Subcommand;

use crate::display::{format_budget_status, format_money};
use crate::error::PocketResult;
use crate::services::BudgetService;
use crate::storage::PreferenceStore;

use super::{month_label, month_or_current, parse_amount};

/// Budget subcommands
#[derive(Subcommand)]
pub enum BudgetCommands {
    /// Show budget usage for a month
    Show {
        /// Month to report on (YYYY-MM, defaults to the current month)
        #[arg(short, long)]
        month: Option<String>,
    },

    /// Set the monthly budget
    Set {
        /// Amount (e.g., "500" or "500.00")
        #[arg(allow_hyphen_values = true)]
        amount: String,
    },
}

/// Handle a budget command
pub fn handle_budget_command(store: &dyn PreferenceStore, cmd: BudgetCommands) -> PocketResult<()> {
    let service = BudgetService::new(store);
    let currency = store.selected_currency()?;

    match cmd {
        BudgetCommands::Show { month } => {
            let (year, month) = month_or_current(month.as_deref())?;
            let status = service.status_for(year, month)?;
            print!(
                "{}",
                format_budget_status(&status, currency, &month_label(year, month))
            );
        }

        BudgetCommands::Set { amount } => {
            let amount = parse_amount(&amount)?;
            let amount = service.set_budget(amount)?;
            println!("Monthly budget set to {}", format_money(amount, currency));
        }
    }

    Ok(())
}
