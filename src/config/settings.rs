//! User settings for pocket-tracker
//!
//! Stored in `config.json`. Every field has a default so older or
//! hand-edited files keep loading.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::paths::PocketPaths;
use crate::error::PocketError;

/// User settings for pocket-tracker
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// File name used for manual backups inside the backup directory
    #[serde(default = "default_backup_file")]
    pub backup_file: String,

    /// strftime format for chart axis labels
    #[serde(default = "default_chart_date_format")]
    pub chart_date_format: String,

    /// strftime format for dates in listings
    #[serde(default = "default_date_format")]
    pub date_format: String,
}

fn default_schema_version() -> u32 {
    1
}

fn default_backup_file() -> String {
    "transactions_backup.json".to_string()
}

fn default_chart_date_format() -> String {
    "%b %d".to_string()
}

fn default_date_format() -> String {
    "%Y-%m-%d".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            backup_file: default_backup_file(),
            chart_date_format: default_chart_date_format(),
            date_format: default_date_format(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or use defaults if the file doesn't exist
    pub fn load_or_create(paths: &PocketPaths) -> Result<Self, PocketError> {
        let settings_path = paths.settings_file();

        if !settings_path.exists() {
            debug!(path = %settings_path.display(), "no settings file, using defaults");
            // Don't save yet - let caller decide when to persist
            return Ok(Settings::default());
        }

        let contents = std::fs::read_to_string(&settings_path)
            .map_err(|e| PocketError::Io(format!("Failed to read settings file: {}", e)))?;

        serde_json::from_str(&contents)
            .map_err(|e| PocketError::Config(format!("Failed to parse settings file: {}", e)))
    }

    /// Save settings to disk
    pub fn save(&self, paths: &PocketPaths) -> Result<(), PocketError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| PocketError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| PocketError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.backup_file, "transactions_backup.json");
        assert_eq!(settings.chart_date_format, "%b %d");
        assert_eq!(settings.schema_version, 1);
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let paths = PocketPaths::with_base_dir(temp_dir.path().to_path_buf());

        let settings = Settings {
            backup_file: "weekly.json".into(),
            ..Default::default()
        };
        settings.save(&paths).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded, settings);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let paths = PocketPaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.settings_file(), r#"{"date_format": "%d/%m/%Y"}"#).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.date_format, "%d/%m/%Y");
        assert_eq!(loaded.backup_file, "transactions_backup.json");
    }

    #[test]
    fn test_invalid_file_is_config_error() {
        let temp_dir = TempDir::new().unwrap();
        let paths = PocketPaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.settings_file(), "{").unwrap();

        assert!(matches!(
            Settings::load_or_create(&paths),
            Err(PocketError::Config(_))
        ));
    }
}
