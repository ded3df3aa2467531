//! Error types raised by settings repositories.

use std::path::PathBuf;

use thiserror::Error;

/// Errors surfaced by settings repository implementations.
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("settings repository lock was poisoned")]
    LockPoisoned,

    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse settings at {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("failed to serialize settings: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl SettingsError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, SettingsError>;
