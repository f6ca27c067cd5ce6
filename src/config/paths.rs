//! Path management for pocket-tracker
//!
//! ## Path Resolution Order
//!
//! 1. `POCKET_DATA_DIR` environment variable (if set)
//! 2. The platform config directory from `directories`
//!    (e.g. `~/.config/pocket-tracker` on Linux)
//! 3. `$HOME/.config/pocket-tracker`

use std::path::PathBuf;

use directories::ProjectDirs;

use crate::error::PocketError;

/// Environment variable overriding the base directory
pub const DATA_DIR_ENV: &str = "POCKET_DATA_DIR";

const APP_NAME: &str = "pocket-tracker";

/// Manages all paths used by pocket-tracker
#[derive(Debug, Clone)]
pub struct PocketPaths {
    base_dir: PathBuf,
}

impl PocketPaths {
    /// Resolve the base directory
    ///
    /// # Errors
    ///
    /// Returns an error if no home or config directory can be determined.
    pub fn new() -> Result<Self, PocketError> {
        let base_dir = match std::env::var(DATA_DIR_ENV) {
            Ok(custom) if !custom.trim().is_empty() => PathBuf::from(custom),
            _ => resolve_default_path()?,
        };

        Ok(Self { base_dir })
    }

    /// Use a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the data directory (<base>/data/)
    pub fn data_dir(&self) -> PathBuf {
        self.base_dir.join("data")
    }

    /// Get the backup directory (<base>/backups/)
    pub fn backup_dir(&self) -> PathBuf {
        self.base_dir.join("backups")
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Get the path to the preference store (budget, currency, transactions)
    pub fn preferences_file(&self) -> PathBuf {
        self.data_dir().join("preferences.json")
    }

    /// Ensure the base, data and backup directories exist
    pub fn ensure_directories(&self) -> Result<(), PocketError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| PocketError::Io(format!("Failed to create base directory: {}", e)))?;

        std::fs::create_dir_all(self.data_dir())
            .map_err(|e| PocketError::Io(format!("Failed to create data directory: {}", e)))?;

        std::fs::create_dir_all(self.backup_dir())
            .map_err(|e| PocketError::Io(format!("Failed to create backup directory: {}", e)))?;

        Ok(())
    }
}

fn resolve_default_path() -> Result<PathBuf, PocketError> {
    if let Some(dirs) = ProjectDirs::from("", "", APP_NAME) {
        return Ok(dirs.config_dir().to_path_buf());
    }

    std::env::var("HOME")
        .map(|home| PathBuf::from(home).join(".config").join(APP_NAME))
        .map_err(|_| PocketError::Config("Could not determine a home directory".into()))
}
