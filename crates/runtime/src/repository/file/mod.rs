//! File-based repository implementations.

mod settings;

pub use settings::FileSettingsRepository;
