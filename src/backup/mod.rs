//! Manual transaction backups
//!
//! Provides export and restore of the canonical transaction list.
//!
//! # Architecture
//!
//! - `codec`: JSON serialization of a transaction list, with validation on read
//! - `target`: where backup bytes live (`FileBackupTarget`, `MemoryBackupTarget`)
//! - `BackupManager`: connects the preference store to a target
//!
//! Restoring is destructive: the backup replaces the current list rather
//! than merging with it, and a backup that fails validation changes nothing.
//!
//! # Example
//!
//! ```rust,ignore
//! use pocket::backup::{BackupManager, FileBackupTarget};
//!
//! let target = FileBackupTarget::new(paths.backup_dir());
//! let manager = BackupManager::new(&store, &target);
//! manager.export_to("transactions_backup.json")?;
//! let result = manager.restore_from("transactions_backup.json")?;
//! println!("{}", result.summary());
//! ```

pub mod codec;
mod manager;
mod target;

pub use codec::{export, import};
pub use manager::{BackupManager, ExportSummary, RestoreResult};
pub use target::{BackupTarget, FileBackupTarget, MemoryBackupTarget};
