//! Backup targets
//!
//! A target is a named, byte-addressable place to keep backup blobs. File
//! handles are opened per call and closed when the call returns, on success
//! or failure alike.

use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::RwLock;

use tracing::debug;

use crate::error::{PocketError, PocketResult};
use crate::storage::write_bytes_atomic;

/// Somewhere backups can be written to and read from
pub trait BackupTarget {
    /// Store `bytes` under `name`, replacing any previous content
    fn write(&self, name: &str, bytes: &[u8]) -> PocketResult<()>;

    /// Read the bytes stored under `name`
    fn read(&self, name: &str) -> PocketResult<Vec<u8>>;
}

/// Reject names that would escape the target's namespace
fn check_name(name: &str) -> PocketResult<()> {
    let invalid = name.trim().is_empty()
        || name.contains('/')
        || name.contains('\\')
        || name == "."
        || name == "..";
    if invalid {
        return Err(PocketError::Validation(format!(
            "Invalid backup name '{}'",
            name
        )));
    }
    Ok(())
}

/// Backups stored as files in one directory
#[derive(Debug, Clone)]
pub struct FileBackupTarget {
    dir: PathBuf,
}

impl FileBackupTarget {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Full path a backup name resolves to
    pub fn path_for(&self, name: &str) -> PocketResult<PathBuf> {
        check_name(name)?;
        Ok(self.dir.join(name))
    }
}

impl BackupTarget for FileBackupTarget {
    fn write(&self, name: &str, bytes: &[u8]) -> PocketResult<()> {
        let path = self.path_for(name)?;
        write_bytes_atomic(&path, bytes).map_err(|e| {
            PocketError::StorageUnavailable(format!("Cannot write {}: {}", path.display(), e))
        })?;
        debug!(path = %path.display(), bytes = bytes.len(), "backup written");
        Ok(())
    }

    fn read(&self, name: &str) -> PocketResult<Vec<u8>> {
        let path = self.path_for(name)?;
        fs::read(&path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => {
                PocketError::StorageUnavailable(format!("No backup at {}", path.display()))
            }
            _ => PocketError::StorageUnavailable(format!("Cannot read {}: {}", path.display(), e)),
        })
    }
}

/// Backups kept in memory, for tests and embedding
#[derive(Debug, Default)]
pub struct MemoryBackupTarget {
    files: RwLock<HashMap<String, Vec<u8>>>,
}

impl MemoryBackupTarget {
    pub fn new() -> Self {
        Self::default()
    }
}

impl BackupTarget for MemoryBackupTarget {
    fn write(&self, name: &str, bytes: &[u8]) -> PocketResult<()> {
        check_name(name)?;
        let mut files = self
            .files
            .write()
            .map_err(|e| PocketError::StorageUnavailable(format!("Lock poisoned: {}", e)))?;
        files.insert(name.to_string(), bytes.to_vec());
        Ok(())
    }

    fn read(&self, name: &str) -> PocketResult<Vec<u8>> {
        check_name(name)?;
        let files = self
            .files
            .read()
            .map_err(|e| PocketError::StorageUnavailable(format!("Lock poisoned: {}", e)))?;
        files
            .get(name)
            .cloned()
            .ok_or_else(|| PocketError::StorageUnavailable(format!("No backup named {}", name)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_file_target_round_trip() {
        let temp_dir = TempDir::new().unwrap();
        let target = FileBackupTarget::new(temp_dir.path().join("backups"));

        target.write("backup.json", b"[]").unwrap();
        assert_eq!(target.read("backup.json").unwrap(), b"[]");

        target.write("backup.json", b"[ ]").unwrap();
        assert_eq!(target.read("backup.json").unwrap(), b"[ ]");
    }

    #[test]
    fn test_missing_file_is_unavailable() {
        let temp_dir = TempDir::new().unwrap();
        let target = FileBackupTarget::new(temp_dir.path());

        let err = target.read("nothing.json").unwrap_err();
        assert!(matches!(err, PocketError::StorageUnavailable(_)));
    }

    #[test]
    fn test_unwritable_location_is_unavailable() {
        let temp_dir = TempDir::new().unwrap();
        let blocker = temp_dir.path().join("not-a-dir");
        fs::write(&blocker, "file").unwrap();
        let target = FileBackupTarget::new(&blocker);

        let err = target.write("backup.json", b"[]").unwrap_err();
        assert!(matches!(err, PocketError::StorageUnavailable(_)));
    }

    #[test]
    fn test_names_cannot_escape() {
        let target = MemoryBackupTarget::new();
        assert!(target.write("../evil.json", b"[]").unwrap_err().is_validation());
        assert!(target.write("", b"[]").unwrap_err().is_validation());
        assert!(FileBackupTarget::new("/tmp").path_for("a/b").is_err());
    }

    #[test]
    fn test_memory_target() {
        let target = MemoryBackupTarget::new();
        assert!(matches!(
            target.read("backup.json"),
            Err(PocketError::StorageUnavailable(_))
        ));
        target.write("backup.json", b"[]").unwrap();
        assert_eq!(target.read("backup.json").unwrap(), b"[]");
    }
}
