use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::debug;

use pocket::cli::{
    handle_backup_command, handle_budget_command, handle_currency_command,
    handle_dashboard_command, handle_export_command, handle_transaction_command,
};
use pocket::config::paths::DATA_DIR_ENV;
use pocket::config::{PocketPaths, Settings};
use pocket::log::init_logging;
use pocket::storage::{JsonPreferenceStore, PreferenceStore};

#[derive(Parser)]
#[command(
    name = "pocket",
    version,
    about = "Track income and expenses against a monthly budget",
    long_about = "pocket-tracker records income and expense transactions, \
                  compares monthly spending with your budget, summarises \
                  spending by category and date, and keeps JSON backups \
                  of your transactions."
)]
struct Cli {
    /// Enable debug logging on stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Directory holding settings, data and backups
    #[arg(long, global = true, env = DATA_DIR_ENV)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Monthly budget commands
    #[command(subcommand)]
    Budget(pocket::cli::BudgetCommands),

    /// Transaction management commands
    #[command(subcommand, alias = "transaction")]
    Txn(pocket::cli::TransactionCommands),

    /// Show totals, category breakdown and income/expense series
    Dashboard {
        /// Limit to one month (YYYY-MM)
        #[arg(short, long)]
        month: Option<String>,
    },

    /// Export or restore a JSON backup of all transactions
    #[command(subcommand)]
    Backup(pocket::cli::BackupCommands),

    /// One-way data export
    #[command(subcommand)]
    Export(pocket::cli::ExportCommands),

    /// Display currency commands
    #[command(subcommand)]
    Currency(pocket::cli::CurrencyCommands),

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    // Initialize paths and settings
    let paths = match cli.data_dir {
        Some(dir) => PocketPaths::with_base_dir(dir),
        None => PocketPaths::new()?,
    };
    paths.ensure_directories()?;
    let settings = Settings::load_or_create(&paths)?;
    debug!(base_dir = %paths.base_dir().display(), "paths resolved");

    let store = JsonPreferenceStore::open(paths.preferences_file())?;

    match cli.command {
        Some(Commands::Budget(cmd)) => handle_budget_command(&store, cmd)?,
        Some(Commands::Txn(cmd)) => handle_transaction_command(&store, &settings, cmd)?,
        Some(Commands::Dashboard { month }) => handle_dashboard_command(&store, &settings, month)?,
        Some(Commands::Backup(cmd)) => handle_backup_command(&store, &paths, &settings, cmd)?,
        Some(Commands::Export(cmd)) => handle_export_command(&store, cmd)?,
        Some(Commands::Currency(cmd)) => handle_currency_command(&store, cmd)?,
        Some(Commands::Config) => {
            if !paths.settings_file().exists() {
                settings.save(&paths)?;
            }
            println!("pocket-tracker Configuration");
            println!("============================");
            println!("Base directory:   {}", paths.base_dir().display());
            println!("Settings file:    {}", paths.settings_file().display());
            println!("Data file:        {}", paths.preferences_file().display());
            println!("Backup directory: {}", paths.backup_dir().display());
            println!();
            println!("Settings:");
            println!("  Backup file:       {}", settings.backup_file);
            println!("  Date format:       {}", settings.date_format);
            println!("  Chart date format: {}", settings.chart_date_format);
            println!("  Currency:          {}", store.selected_currency()?);
        }
        None => {
            println!("pocket-tracker - income and expense tracking");
            println!();
            println!("Run 'pocket --help' for usage information.");
        }
    }

    Ok(())
}
