//! CLI commands for data export
//!
//! One-way exports for use outside pocket-tracker. Backups that can be
//! restored are under `pocket backup`.

use std::fs::File;
use std::io::{self, BufWriter};
use std::path::PathBuf;

use clap::Subcommand;

use crate::error::{PocketError, PocketResult};
use crate::export::export_transactions_csv;
use crate::reports::PeriodScope;
use crate::services::TransactionService;
use crate::storage::PreferenceStore;

use super::parse_month;

/// Export subcommands
#[derive(Subcommand, Debug)]
pub enum ExportCommands {
    /// Export transactions to CSV, newest first
    Csv {
        /// Output file path (writes to stdout when omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Only this month (YYYY-MM)
        #[arg(short, long)]
        month: Option<String>,
    },
}

/// Handle export commands
pub fn handle_export_command(store: &dyn PreferenceStore, cmd: ExportCommands) -> PocketResult<()> {
    match cmd {
        ExportCommands::Csv { output, month } => {
            let scope = match month {
                Some(m) => {
                    let (year, month) = parse_month(&m)?;
                    PeriodScope::Month { year, month }
                }
                None => PeriodScope::AllTime,
            };
            let transactions = TransactionService::new(store).list_in(&scope)?;

            match output {
                Some(path) => {
                    let file = File::create(&path).map_err(|e| {
                        PocketError::Export(format!(
                            "Failed to create file {}: {}",
                            path.display(),
                            e
                        ))
                    })?;
                    let count = export_transactions_csv(&transactions, BufWriter::new(file))?;
                    println!("Exported {} transactions to: {}", count, path.display());
                }
                None => {
                    export_transactions_csv(&transactions, io::stdout().lock())?;
                }
            }
        }
    }

    Ok(())
}
