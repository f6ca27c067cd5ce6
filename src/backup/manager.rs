//! Backup manager
//!
//! Moves the canonical transaction list between the preference store and a
//! backup target. Restore is all or nothing: the blob is read and fully
//! validated before the store is touched.

use tracing::{info, warn};

use crate::error::PocketResult;
use crate::storage::PreferenceStore;

use super::codec;
use super::target::BackupTarget;

/// Outcome of an export
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportSummary {
    pub name: String,
    pub transaction_count: usize,
    pub size_bytes: usize,
}

/// Outcome of a restore
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RestoreResult {
    pub name: String,
    /// Transactions held before the restore replaced them
    pub replaced_count: usize,
    pub restored_count: usize,
}

impl RestoreResult {
    pub fn summary(&self) -> String {
        format!(
            "Restored {} transaction(s) from {} (replaced {})",
            self.restored_count, self.name, self.replaced_count
        )
    }
}

/// Export and restore transaction backups
pub struct BackupManager<'a> {
    store: &'a dyn PreferenceStore,
    target: &'a dyn BackupTarget,
}

impl<'a> BackupManager<'a> {
    pub fn new(store: &'a dyn PreferenceStore, target: &'a dyn BackupTarget) -> Self {
        Self { store, target }
    }

    /// Write every stored transaction to the target under `name`
    pub fn export_to(&self, name: &str) -> PocketResult<ExportSummary> {
        let transactions = self.store.transactions()?;
        let blob = codec::export(&transactions)?;
        self.target.write(name, blob.as_bytes())?;

        info!(name, count = transactions.len(), "backup exported");
        Ok(ExportSummary {
            name: name.to_string(),
            transaction_count: transactions.len(),
            size_bytes: blob.len(),
        })
    }

    /// Replace the stored transactions with the backup under `name`
    ///
    /// On any error the store is left exactly as it was.
    pub fn restore_from(&self, name: &str) -> PocketResult<RestoreResult> {
        let bytes = self.target.read(name)?;
        let restored = codec::import_bytes(&bytes).map_err(|e| {
            warn!(name, error = %e, "backup rejected");
            e
        })?;

        let replaced_count = self.store.transactions()?.len();
        let restored_count = restored.len();
        self.store.save_transactions(restored)?;

        info!(name, restored_count, replaced_count, "backup restored");
        Ok(RestoreResult {
            name: name.to_string(),
            replaced_count,
            restored_count,
        })
    }

    /// Check that the backup under `name` would restore, without restoring it
    ///
    /// Returns the number of transactions it holds.
    pub fn validate(&self, name: &str) -> PocketResult<usize> {
        let bytes = self.target.read(name)?;
        Ok(codec::import_bytes(&bytes)?.len())
    }
}
