//! Custom trader plugin for the game server.
//!
//! Registers the trader, its locale strings and its avatar with the host,
//! then hands over the bundled assortment with the user's per-item overrides
//! applied. [`TraderPlugin::on_load`] is the single entry point the host calls
//! once its database is ready.
pub mod config;
pub mod locales;
pub mod plugin;
pub mod registration;

pub use config::{ModMetadata, PluginConfig};
pub use locales::TraderLocale;
pub use plugin::{LoadOutcome, LoadSummary, TraderPlugin};
