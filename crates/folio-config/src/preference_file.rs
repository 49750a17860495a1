//! Preference file
//!
//! A TOML table whose string entries are preferences, e.g.
//!
//! ```toml
//! davian-space-theme = "dark"
//! ```
//!
//! Entries of other types are left alone.

use folio_theme::{PreferenceStore, StorageError};
use std::path::{Path, PathBuf};
use toml::Table;

const PREFERENCES_FILE: &str = "preferences.toml";

/// File-backed [`PreferenceStore`]
#[derive(Debug, Clone)]
pub struct PreferenceFile {
    /// `None` when the host has no config directory
    path: Option<PathBuf>,
}

impl PreferenceFile {
    /// Preference file inside the per-user config directory
    pub fn default_location() -> Self {
        Self {
            path: crate::config_dir().map(|dir| dir.join(PREFERENCES_FILE)),
        }
    }

    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Some(path.into()),
        }
    }

    fn read_entries(path: &Path) -> Result<Table, StorageError> {
        match std::fs::read_to_string(path) {
            Ok(content) => {
                toml::from_str(&content).map_err(|e| StorageError::Corrupt(e.to_string()))
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Table::new()),
            Err(e) => Err(e.into()),
        }
    }
}

impl PreferenceStore for PreferenceFile {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let path = self.path.as_deref().ok_or(StorageError::Unavailable)?;
        let entries = Self::read_entries(path)?;
        Ok(entries.get(key).and_then(|v| v.as_str()).map(str::to_string))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        let path = self.path.as_deref().ok_or(StorageError::Unavailable)?;

        // A corrupt file gets replaced rather than blocking every write
        let mut entries = Self::read_entries(path).unwrap_or_else(|e| {
            log::warn!("Rewriting preference file {}: {}", path.display(), e);
            Table::new()
        });
        entries.insert(key.to_string(), toml::Value::String(value.to_string()));

        let content =
            toml::to_string(&entries).map_err(|e| StorageError::Corrupt(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, content)?;
        Ok(())
    }
}
