//! Runtime services for the trader plugin.
//!
//! This crate sits between the pure merge in `trader-core` and the bootstrap
//! in `trader-plugin`:
//! - [`host`] defines the host service contracts and an in-memory host
//! - [`repository`] persists the user-editable settings store
//! - [`merger`] runs the catalog merge against a settings repository
pub mod host;
pub mod merger;
pub mod repository;

pub use host::{
    FleaMarketRegistry, HostError, ImageRouter, InMemoryHost, LazyLocale, LocaleRegistry,
    LocaleTransformer, RefreshWindow, ServerHost, TraderDatabase, TraderRefreshRegistry,
};
pub use merger::{MergeOutcome, SettingsMerger};
pub use repository::{
    FileSettingsRepository, InMemorySettingsRepo, SettingsError, SettingsRepository,
};
