//! File-based SettingsRepository implementation.

use std::fs;
use std::path::{Path, PathBuf};

use trader_core::SettingsStore;

use crate::repository::{Result, SettingsError, SettingsRepository};

/// Settings stored as one pretty-printed JSON document.
///
/// Saves go through a temp file and a rename so a crash never leaves a
/// half-written settings file behind.
pub struct FileSettingsRepository {
    path: PathBuf,
}

impl FileSettingsRepository {
    /// Create a repository for `path`, creating its parent directory.
    pub fn new(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        if let Some(dir) = path.parent()
            && !dir.as_os_str().is_empty()
        {
            fs::create_dir_all(dir).map_err(|e| SettingsError::io(dir, e))?;
        }
        Ok(Self { path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn backup_path(&self) -> PathBuf {
        self.path.with_extension("json.bak")
    }
}

impl SettingsRepository for FileSettingsRepository {
    fn load(&self) -> Result<Option<SettingsStore>> {
        if !self.path.exists() {
            return Ok(None);
        }

        let json = fs::read_to_string(&self.path).map_err(|e| SettingsError::io(&self.path, e))?;
        let store: SettingsStore =
            serde_json::from_str(&json).map_err(|source| SettingsError::Parse {
                path: self.path.clone(),
                source,
            })?;

        tracing::debug!(
            "Loaded settings with {} items from {}",
            store.items.len(),
            self.path.display()
        );

        Ok(Some(store))
    }

    fn save(&self, store: &SettingsStore) -> Result<()> {
        let temp_path = self.path.with_extension("json.tmp");

        let mut json = serde_json::to_string_pretty(store)?;
        json.push('\n');
        fs::write(&temp_path, json).map_err(|e| SettingsError::io(&temp_path, e))?;

        // Atomic rename
        fs::rename(&temp_path, &self.path).map_err(|e| SettingsError::io(&self.path, e))?;

        tracing::debug!("Saved settings: {}", self.path.display());

        Ok(())
    }

    fn preserve_unreadable(&self) -> Result<Option<PathBuf>> {
        if !self.path.exists() {
            return Ok(None);
        }

        let backup = self.backup_path();
        fs::copy(&self.path, &backup).map_err(|e| SettingsError::io(&backup, e))?;
        Ok(Some(backup))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use trader_core::ItemSettings;

    #[test]
    fn missing_file_loads_as_none() {
        let dir = tempfile::tempdir().unwrap();
        let repo = FileSettingsRepository::new(dir.path().join("config/config.json")).unwrap();

        assert!(repo.load().unwrap().is_none());
        assert!(dir.path().join("config").is_dir());
    }

    #[test]
    fn save_writes_pretty_json_and_reloads() {
        let dir = tempfile::tempdir().unwrap();
        let repo = FileSettingsRepository::new(dir.path().join("config.json")).unwrap();
        let mut store = SettingsStore::new();
        store.insert("b", ItemSettings::discovered("Bravo"));
        store.insert("a", ItemSettings::discovered("Alpha"));

        repo.save(&store).unwrap();

        let text = fs::read_to_string(repo.path()).unwrap();
        assert!(text.contains("\n  \"enableOverrides\": true"));
        assert!(!dir.path().join("config.json.tmp").exists());
        assert_eq!(repo.load().unwrap(), Some(store));
    }

    #[test]
    fn save_overwrites_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let repo = FileSettingsRepository::new(dir.path().join("config.json")).unwrap();
        repo.save(&SettingsStore::new()).unwrap();

        let mut store = SettingsStore::new();
        store.enable_overrides = false;
        repo.save(&store).unwrap();

        assert_eq!(repo.load().unwrap(), Some(store));
    }

    #[test]
    fn malformed_file_is_a_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let repo = FileSettingsRepository::new(dir.path().join("config.json")).unwrap();
        fs::write(repo.path(), "{ not json").unwrap();

        assert!(matches!(repo.load(), Err(SettingsError::Parse { .. })));

        let backup = repo.preserve_unreadable().unwrap().unwrap();
        assert_eq!(fs::read_to_string(backup).unwrap(), "{ not json");
    }
}
