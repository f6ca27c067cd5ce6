//! Backup CLI commands
//!
//! Implements manual export and import of the transaction list as a JSON
//! file in the backup directory.

use clap::Subcommand;

use crate::backup::{BackupManager, FileBackupTarget};
use crate::config::{PocketPaths, Settings};
use crate::error::PocketResult;
use crate::storage::PreferenceStore;

/// Backup subcommands
#[derive(Subcommand)]
pub enum BackupCommands {
    /// Export all transactions to a backup file
    Export {
        /// Backup file name inside the backup directory
        #[arg(short, long)]
        name: Option<String>,
    },

    /// Replace all transactions with the contents of a backup file
    Import {
        /// Backup file name inside the backup directory
        #[arg(short, long)]
        name: Option<String>,
    },

    /// Check that a backup file can be restored, without restoring it
    Verify {
        /// Backup file name inside the backup directory
        #[arg(short, long)]
        name: Option<String>,
    },
}

/// Handle a backup command
pub fn handle_backup_command(
    store: &dyn PreferenceStore,
    paths: &PocketPaths,
    settings: &Settings,
    cmd: BackupCommands,
) -> PocketResult<()> {
    let target = FileBackupTarget::new(paths.backup_dir());
    let manager = BackupManager::new(store, &target);

    match cmd {
        BackupCommands::Export { name } => {
            let name = name.unwrap_or_else(|| settings.backup_file.clone());
            let summary = manager.export_to(&name)?;
            println!(
                "Exported {} transaction(s) ({} bytes)",
                summary.transaction_count, summary.size_bytes
            );
            println!("Location: {}", target.path_for(&summary.name)?.display());
        }

        BackupCommands::Import { name } => {
            let name = name.unwrap_or_else(|| settings.backup_file.clone());
            let result = manager.restore_from(&name)?;
            println!("{}", result.summary());
        }

        BackupCommands::Verify { name } => {
            let name = name.unwrap_or_else(|| settings.backup_file.clone());
            let count = manager.validate(&name)?;
            println!("Backup {} is valid: {} transaction(s)", name, count);
        }
    }

    Ok(())
}
