//! Currency CLI commands
//!
//! Shows and changes the display currency. The currency only affects
//! formatting; stored amounts are never converted.

use clap::Subcommand;
use tabled::settings::Style;
use tabled::{Table, Tabled};
use tracing::info;

use crate::display::format_money;
use crate::error::{PocketError, PocketResult};
use crate::models::{CurrencyCode, Money};
use crate::storage::PreferenceStore;

const SAMPLE: Money = Money::from_cents(123_456);

/// Currency subcommands
#[derive(Subcommand)]
pub enum CurrencyCommands {
    /// Show the selected currency
    Show,

    /// List supported currencies
    List,

    /// Select the display currency
    Set {
        /// ISO code (e.g., "EUR")
        code: String,
    },
}

#[derive(Tabled)]
struct CurrencyRow {
    #[tabled(rename = "Code")]
    code: &'static str,
    #[tabled(rename = "Example")]
    example: String,
    #[tabled(rename = "Selected")]
    selected: &'static str,
}

/// Handle a currency command
pub fn handle_currency_command(
    store: &dyn PreferenceStore,
    cmd: CurrencyCommands,
) -> PocketResult<()> {
    let current = store.selected_currency()?;

    match cmd {
        CurrencyCommands::Show => {
            println!("{} (e.g. {})", current, format_money(SAMPLE, current));
        }

        CurrencyCommands::List => {
            let rows = CurrencyCode::ALL.iter().map(|&code| CurrencyRow {
                code: code.code(),
                example: format_money(SAMPLE, code),
                selected: if code == current { "*" } else { "" },
            });
            let mut table = Table::new(rows);
            table.with(Style::rounded());
            println!("{}", table);
        }

        CurrencyCommands::Set { code } => {
            let code: CurrencyCode = code.parse().map_err(PocketError::Validation)?;
            store.set_selected_currency(code)?;
            info!(%code, "currency selected");
            println!("Display currency set to {}", code);
        }
    }

    Ok(())
}
