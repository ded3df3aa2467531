//! In-memory repository implementations for tests and local runs.

mod settings;

pub use settings::InMemorySettingsRepo;
