//! Content factory for loading the bundled trader data.

use std::path::{Path, PathBuf};

use trader_core::{TraderAssort, TraderBase};

use crate::loaders::{AssortLoader, LoadResult, TraderLoader};

/// Content factory that loads all trader content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── base.json
/// ├── assort.json
/// └── {avatar}.jpg
/// ```
///
/// The avatar image is not bundled with the crate; the packaged mod supplies
/// it. Only its path is resolved here, and a missing file is reported by the
/// caller as a warning.
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    /// Creates a new content factory pointing to a data directory.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Load the trader descriptor from `base.json`.
    pub fn load_trader_base(&self) -> LoadResult<TraderBase> {
        TraderLoader::load(&self.data_dir.join("base.json"))
    }

    /// Load the trader assortment from `assort.json`.
    pub fn load_assort(&self) -> LoadResult<TraderAssort> {
        AssortLoader::load(&self.data_dir.join("assort.json"))
    }

    /// Path of the avatar image for `base`.
    ///
    /// The image is expected next to the data files under the file name of
    /// the client-facing avatar path.
    pub fn avatar_path(&self, base: &TraderBase) -> LoadResult<PathBuf> {
        let file_name = Path::new(&base.avatar)
            .file_name()
            .ok_or_else(|| anyhow::anyhow!("Trader avatar '{}' has no file name", base.avatar))?;
        Ok(self.data_dir.join(file_name))
    }

    /// Returns the data directory path.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}
