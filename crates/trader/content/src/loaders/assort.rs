//! Trader assortment loader.

use std::path::Path;

use trader_core::TraderAssort;

use crate::loaders::{LoadResult, read_json};

/// Loader for the trader assortment (`assort.json`).
pub struct AssortLoader;

impl AssortLoader {
    /// Load an assortment from a JSON file.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the JSON file with `items`, `barter_scheme` and
    ///   `loyal_level_items`
    pub fn load(path: &Path) -> LoadResult<TraderAssort> {
        read_json(path, "trader assort")
    }
}
