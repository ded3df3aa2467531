//! Trader descriptor loader.

use std::path::Path;

use trader_core::TraderBase;

use crate::loaders::{LoadResult, read_json};

/// Loader for the trader descriptor (`base.json`).
pub struct TraderLoader;

impl TraderLoader {
    /// Load a trader descriptor from a JSON file.
    ///
    /// Fields the plugin does not use are kept in [`TraderBase::extra`] and
    /// handed to the host untouched.
    pub fn load(path: &Path) -> LoadResult<TraderBase> {
        let base: TraderBase = read_json(path, "trader base")?;

        if base.id.trim().is_empty() {
            anyhow::bail!("Trader base at {} has an empty _id", path.display());
        }

        Ok(base)
    }
}
