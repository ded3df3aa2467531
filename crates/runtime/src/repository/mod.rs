//! Repository layer for the settings store.
//!
//! The settings file is the only data this plugin owns. Bundled content
//! (trader base, assortment) is read by `trader-content`, never written.

mod error;
mod file;
mod memory;
mod traits;

pub use error::{Result, SettingsError};
pub use file::FileSettingsRepository;
pub use memory::InMemorySettingsRepo;
pub use traits::SettingsRepository;
