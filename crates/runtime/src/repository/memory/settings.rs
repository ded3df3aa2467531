//! In-memory SettingsRepository implementation for tests and local runs.

use std::sync::RwLock;

use trader_core::SettingsStore;

use crate::repository::{Result, SettingsError, SettingsRepository};

/// In-memory implementation of SettingsRepository.
///
/// Counts saves so callers can check the store is written at most once.
pub struct InMemorySettingsRepo {
    state: RwLock<MemoryState>,
}

#[derive(Default)]
struct MemoryState {
    store: Option<SettingsStore>,
    saves: usize,
}

impl InMemorySettingsRepo {
    /// Create a repository with nothing stored.
    pub fn new() -> Self {
        Self {
            state: RwLock::new(MemoryState::default()),
        }
    }

    /// Create a repository that already holds `store`.
    pub fn with_store(store: SettingsStore) -> Self {
        Self {
            state: RwLock::new(MemoryState {
                store: Some(store),
                saves: 0,
            }),
        }
    }

    /// The currently stored settings.
    pub fn stored(&self) -> Option<SettingsStore> {
        self.state.read().ok().and_then(|state| state.store.clone())
    }

    /// Number of successful saves.
    pub fn save_count(&self) -> usize {
        self.state.read().map(|state| state.saves).unwrap_or(0)
    }
}

impl Default for InMemorySettingsRepo {
    fn default() -> Self {
        Self::new()
    }
}

impl SettingsRepository for InMemorySettingsRepo {
    fn load(&self) -> Result<Option<SettingsStore>> {
        let state = self.state.read().map_err(|_| SettingsError::LockPoisoned)?;
        Ok(state.store.clone())
    }

    fn save(&self, store: &SettingsStore) -> Result<()> {
        let mut state = self
            .state
            .write()
            .map_err(|_| SettingsError::LockPoisoned)?;
        state.store = Some(store.clone());
        state.saves += 1;
        Ok(())
    }
}
