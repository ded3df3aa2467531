//! Contracts for the host services the plugin registers with.

use std::path::Path;

use trader_core::{LocaleTable, Trader, TraderAssort};

use crate::host::{HostError, LocaleTransformer};

/// How often the host restocks a trader, in seconds.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RefreshWindow {
    pub min_seconds: u64,
    pub max_seconds: u64,
}

impl RefreshWindow {
    pub const fn from_hours(min_hours: u64, max_hours: u64) -> Self {
        Self {
            min_seconds: min_hours * 3600,
            max_seconds: max_hours * 3600,
        }
    }
}

/// Serves static images under client-facing routes.
pub trait ImageRouter {
    fn add_route(&mut self, route: &str, image_path: &Path);
}

/// Trader section of the host's trader config.
pub trait TraderRefreshRegistry {
    fn add_update_time(&mut self, trader_id: &str, window: RefreshWindow);
}

/// Traders whose offers appear on the flea market.
pub trait FleaMarketRegistry {
    /// Fails with [`HostError::AlreadyListed`] when the trader is present.
    fn add_trader(&mut self, trader_id: &str) -> Result<(), HostError>;
}

/// Trader table of the host database.
pub trait TraderDatabase {
    /// Fails with [`HostError::DuplicateTrader`] when the id is taken.
    fn insert_trader(&mut self, trader: Trader) -> Result<(), HostError>;

    /// Replaces the live assortment of a registered trader.
    fn set_assort(&mut self, trader_id: &str, assort: TraderAssort) -> Result<(), HostError>;
}

/// Global locale tables, materialized lazily by the host.
pub trait LocaleRegistry {
    /// Keys of every locale the host maintains.
    fn locales(&self) -> Vec<String>;

    /// Runs `transformer` on the locale's table once it is materialized.
    fn add_transformer(&mut self, locale: &str, transformer: LocaleTransformer);

    /// Materializes and returns a locale table.
    fn table(&mut self, locale: &str) -> Option<&LocaleTable>;
}

/// Every service the plugin needs from the host.
pub trait ServerHost:
    ImageRouter + TraderRefreshRegistry + FleaMarketRegistry + TraderDatabase + LocaleRegistry
{
}

impl<T> ServerHost for T where
    T: ImageRouter + TraderRefreshRegistry + FleaMarketRegistry + TraderDatabase + LocaleRegistry
{
}
