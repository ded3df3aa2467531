//! Bundled trader content and its loaders.
//!
//! This crate reads the static JSON files shipped with the plugin:
//! - Trader descriptor (`base.json`)
//! - Trader assortment with price schemes and loyalty levels (`assort.json`)
//! - Avatar image path (resolved, never read)
//!
//! Loaders return `trader-core` types directly; the user-editable settings
//! file is not content and is handled by `trader-runtime`.

pub mod loaders;

pub use loaders::{AssortLoader, ContentFactory, LoadResult, TraderLoader};
