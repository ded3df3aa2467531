//! Repository contract for the user-editable settings store.

use std::path::PathBuf;

use trader_core::SettingsStore;

use crate::repository::Result;

/// Repository for the per-item override settings.
///
/// The store is read once per bootstrap and written at most once.
pub trait SettingsRepository {
    /// Load the stored settings.
    ///
    /// Returns `Ok(None)` when nothing has been stored yet.
    fn load(&self) -> Result<Option<SettingsStore>>;

    /// Store the settings, replacing what was there.
    fn save(&self, store: &SettingsStore) -> Result<()>;

    /// Keep a copy of settings that failed to load before they are replaced.
    ///
    /// Returns where the copy went, if anywhere.
    fn preserve_unreadable(&self) -> Result<Option<PathBuf>> {
        Ok(None)
    }
}
