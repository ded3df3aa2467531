//! Content loaders for reading bundled trader data from files.

pub mod assort;
pub mod factory;
pub mod trader;

pub use assort::AssortLoader;
pub use factory::ContentFactory;
pub use trader::TraderLoader;

use std::path::Path;

use serde::de::DeserializeOwned;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}

/// Reads and deserializes a JSON file.
pub(crate) fn read_json<T: DeserializeOwned>(path: &Path, what: &str) -> LoadResult<T> {
    let content = read_file(path)?;
    serde_json::from_str(&content)
        .map_err(|e| anyhow::anyhow!("Failed to parse {} JSON at {}: {}", what, path.display(), e))
}
