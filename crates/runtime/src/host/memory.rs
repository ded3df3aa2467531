//! In-memory [`ServerHost`](crate::host::ServerHost) for tests and local runs.

use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use trader_core::{LocaleTable, Trader, TraderAssort};

use crate::host::{
    FleaMarketRegistry, HostError, ImageRouter, LazyLocale, LocaleRegistry, LocaleTransformer,
    RefreshWindow, TraderDatabase, TraderRefreshRegistry,
};

/// Host services backed by plain maps.
#[derive(Debug, Default)]
pub struct InMemoryHost {
    routes: IndexMap<String, PathBuf>,
    update_times: Vec<(String, RefreshWindow)>,
    flea_market: IndexMap<String, bool>,
    traders: IndexMap<String, Trader>,
    locales: IndexMap<String, LazyLocale>,
}

impl InMemoryHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a locale whose table is built on first access.
    pub fn with_locale(mut self, locale: impl Into<String>, table: LocaleTable) -> Self {
        self.locales
            .insert(locale.into(), LazyLocale::from_table(table));
        self
    }

    /// Registers a trader as if another plugin had claimed the id.
    pub fn with_trader(mut self, trader: Trader) -> Self {
        self.traders.insert(trader.base.id.clone(), trader);
        self
    }

    /// Lists a trader on the flea market ahead of time.
    pub fn with_flea_market_trader(mut self, trader_id: impl Into<String>) -> Self {
        self.flea_market.insert(trader_id.into(), true);
        self
    }

    pub fn trader(&self, trader_id: &str) -> Option<&Trader> {
        self.traders.get(trader_id)
    }

    pub fn route(&self, route: &str) -> Option<&Path> {
        self.routes.get(route).map(PathBuf::as_path)
    }

    pub fn update_times(&self) -> &[(String, RefreshWindow)] {
        &self.update_times
    }

    pub fn is_flea_market_trader(&self, trader_id: &str) -> bool {
        self.flea_market.get(trader_id).copied().unwrap_or(false)
    }

    pub fn is_materialized(&self, locale: &str) -> bool {
        self.locales
            .get(locale)
            .is_some_and(LazyLocale::is_materialized)
    }
}

impl ImageRouter for InMemoryHost {
    fn add_route(&mut self, route: &str, image_path: &Path) {
        self.routes.insert(route.to_string(), image_path.to_path_buf());
    }
}

impl TraderRefreshRegistry for InMemoryHost {
    fn add_update_time(&mut self, trader_id: &str, window: RefreshWindow) {
        self.update_times.push((trader_id.to_string(), window));
    }
}

impl FleaMarketRegistry for InMemoryHost {
    fn add_trader(&mut self, trader_id: &str) -> Result<(), HostError> {
        if self.flea_market.contains_key(trader_id) {
            return Err(HostError::AlreadyListed(trader_id.to_string()));
        }
        self.flea_market.insert(trader_id.to_string(), true);
        Ok(())
    }
}

impl TraderDatabase for InMemoryHost {
    fn insert_trader(&mut self, trader: Trader) -> Result<(), HostError> {
        let id = trader.base.id.clone();
        if self.traders.contains_key(&id) {
            return Err(HostError::DuplicateTrader(id));
        }
        self.traders.insert(id, trader);
        Ok(())
    }

    fn set_assort(&mut self, trader_id: &str, assort: TraderAssort) -> Result<(), HostError> {
        let trader = self
            .traders
            .get_mut(trader_id)
            .ok_or_else(|| HostError::UnknownTrader(trader_id.to_string()))?;
        trader.assort = assort;
        Ok(())
    }
}

impl LocaleRegistry for InMemoryHost {
    fn locales(&self) -> Vec<String> {
        self.locales.keys().cloned().collect()
    }

    fn add_transformer(&mut self, locale: &str, transformer: LocaleTransformer) {
        if let Some(lazy) = self.locales.get_mut(locale) {
            lazy.add_transformer(transformer);
        }
    }

    fn table(&mut self, locale: &str) -> Option<&LocaleTable> {
        self.locales.get_mut(locale).map(|lazy| &*lazy.materialize())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Map;
    use trader_core::TraderBase;

    fn trader(id: &str) -> Trader {
        Trader::with_empty_assort(TraderBase {
            id: id.into(),
            name: "n".into(),
            nickname: "n".into(),
            avatar: "a.jpg".into(),
            location: "l".into(),
            extra: Map::new(),
        })
    }

    #[test]
    fn duplicate_trader_is_rejected() {
        let mut host = InMemoryHost::new();
        host.insert_trader(trader("t1")).unwrap();

        assert_eq!(
            host.insert_trader(trader("t1")),
            Err(HostError::DuplicateTrader("t1".into()))
        );
    }

    #[test]
    fn assort_requires_registered_trader() {
        let mut host = InMemoryHost::new();
        assert_eq!(
            host.set_assort("t1", TraderAssort::empty()),
            Err(HostError::UnknownTrader("t1".into()))
        );
    }

    #[test]
    fn flea_market_listing_is_unique() {
        let mut host = InMemoryHost::new().with_flea_market_trader("t1");
        assert!(host.add_trader("t1").is_err());
        assert!(host.add_trader("t2").is_ok());
        assert!(host.is_flea_market_trader("t2"));
    }

    #[test]
    fn unknown_locale_ignores_transformer() {
        let mut host = InMemoryHost::new().with_locale("en", LocaleTable::new());
        host.add_transformer(
            "xx",
            Box::new(|t: &mut LocaleTable| {
                t.insert("k".into(), "v".into());
            }),
        );

        assert!(host.table("xx").is_none());
        assert!(!host.is_materialized("en"));
        assert!(host.table("en").is_some());
        assert!(host.is_materialized("en"));
    }
}
