//! Transaction CLI commands
//!
//! Implements CLI commands for adding, editing, deleting and listing
//! income and expense transactions.

use chrono::Utc;
use clap::Subcommand;

use crate::config::Settings;
use crate::display::{format_money, format_transaction_details, format_transaction_list};
use crate::error::{PocketError, PocketResult};
use crate::models::{TransactionEdit, TransactionType};
use crate::reports::PeriodScope;
use crate::services::{CreateTransactionInput, TransactionService};
use crate::storage::PreferenceStore;

use super::{parse_amount, parse_date, parse_month};

/// Transaction subcommands
#[derive(Subcommand)]
pub enum TransactionCommands {
    /// Add a new transaction
    Add {
        /// Transaction type: income or expense
        kind: String,
        /// Amount (e.g., "12.50")
        #[arg(allow_hyphen_values = true)]
        amount: String,
        /// Category label (e.g., "Food", "Salary")
        category: String,
        /// Transaction date (YYYY-MM-DD, defaults to now)
        #[arg(short, long)]
        date: Option<String>,
        /// Free-form note
        #[arg(short, long)]
        note: Option<String>,
    },

    /// Edit an existing transaction
    Edit {
        /// Transaction ID (full, short or prefix)
        id: String,
        /// New amount
        #[arg(short, long, allow_hyphen_values = true)]
        amount: Option<String>,
        /// New category
        #[arg(short, long)]
        category: Option<String>,
        /// New type: income or expense
        #[arg(short = 't', long = "type")]
        kind: Option<String>,
        /// New date (YYYY-MM-DD)
        #[arg(short, long)]
        date: Option<String>,
        /// New note
        #[arg(short, long, conflicts_with = "clear_note")]
        note: Option<String>,
        /// Remove the note
        #[arg(long)]
        clear_note: bool,
    },

    /// Delete a transaction
    Delete {
        /// Transaction ID (full, short or prefix)
        id: String,
    },

    /// Show a single transaction
    Show {
        /// Transaction ID (full, short or prefix)
        id: String,
    },

    /// List transactions, newest first
    List {
        /// Only this month (YYYY-MM)
        #[arg(short, long)]
        month: Option<String>,
        /// Number of transactions to show
        #[arg(short, long, default_value = "20")]
        limit: usize,
    },
}

/// Handle a transaction command
pub fn handle_transaction_command(
    store: &dyn PreferenceStore,
    settings: &Settings,
    cmd: TransactionCommands,
) -> PocketResult<()> {
    let service = TransactionService::new(store);
    let currency = store.selected_currency()?;

    match cmd {
        TransactionCommands::Add {
            kind,
            amount,
            category,
            date,
            note,
        } => {
            let input = CreateTransactionInput {
                kind: parse_kind(&kind)?,
                amount: parse_amount(&amount)?,
                category,
                date: match date {
                    Some(d) => parse_date(&d)?,
                    None => Utc::now(),
                },
                note,
            };
            let txn = service.create(input)?;
            println!(
                "Added {} {} in {} ({})",
                txn.kind,
                format_money(txn.amount, currency),
                txn.category,
                txn.id
            );
        }

        TransactionCommands::Edit {
            id,
            amount,
            category,
            kind,
            date,
            note,
            clear_note,
        } => {
            let edit = TransactionEdit {
                amount: amount.as_deref().map(parse_amount).transpose()?,
                category,
                kind: kind.as_deref().map(parse_kind).transpose()?,
                date: date.as_deref().map(parse_date).transpose()?,
                note: if clear_note { Some(None) } else { note.map(Some) },
            };
            let txn = service.update(&id, &edit)?;
            println!("Updated transaction {}", txn.id);
            print!(
                "{}",
                format_transaction_details(&txn, currency, &settings.date_format)
            );
        }

        TransactionCommands::Delete { id } => {
            let txn = service.delete(&id)?;
            println!(
                "Deleted {} {} in {} ({})",
                txn.kind,
                format_money(txn.amount, currency),
                txn.category,
                txn.id
            );
        }

        TransactionCommands::Show { id } => {
            let txn = service.find(&id)?;
            print!(
                "{}",
                format_transaction_details(&txn, currency, &settings.date_format)
            );
        }

        TransactionCommands::List { month, limit } => {
            let scope = match month {
                Some(m) => {
                    let (year, month) = parse_month(&m)?;
                    PeriodScope::Month { year, month }
                }
                None => PeriodScope::AllTime,
            };
            let transactions = service.list_in(&scope)?;
            let total = transactions.len();
            let shown: Vec<_> = transactions.into_iter().take(limit).collect();

            print!(
                "{}",
                format_transaction_list(&shown, currency, &settings.date_format)
            );
            if total > shown.len() {
                println!("Showing {} of {} transactions", shown.len(), total);
            }
        }
    }

    Ok(())
}

fn parse_kind(input: &str) -> PocketResult<TransactionType> {
    input.parse().map_err(PocketError::Validation)
}
