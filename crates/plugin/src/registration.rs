//! Helpers that register the trader with host services.
//!
//! Collisions with other plugins are logged and reported as `false`, never
//! raised, so the rest of the bootstrap still runs.

use tracing::{error, warn};
use trader_core::{Trader, TraderAssort, TraderBase};
use trader_runtime::{RefreshWindow, TraderDatabase, TraderRefreshRegistry};

/// Registers how often the host restocks the trader.
pub fn set_trader_update_time<H: TraderRefreshRegistry + ?Sized>(
    host: &mut H,
    base: &TraderBase,
    window: RefreshWindow,
) {
    host.add_update_time(&base.id, window);
}

/// Adds the trader to the database with an empty assortment.
///
/// Returns `false` when another plugin already uses the id.
pub fn add_trader_with_empty_assort<H: TraderDatabase + ?Sized>(
    host: &mut H,
    base: &TraderBase,
) -> bool {
    match host.insert_trader(Trader::with_empty_assort(base.clone())) {
        Ok(()) => true,
        Err(err) => {
            error!(
                trader = %base.id,
                "FAILED to add trader: {err}. This ID is already in use by another mod! Change the _id in base.json."
            );
            false
        }
    }
}

/// Replaces the trader's live assortment.
///
/// Returns `false` when the trader is not in the database.
pub fn overwrite_trader_assort<H: TraderDatabase + ?Sized>(
    host: &mut H,
    trader_id: &str,
    assort: TraderAssort,
) -> bool {
    match host.set_assort(trader_id, assort) {
        Ok(()) => true,
        Err(err) => {
            warn!(trader = %trader_id, "Cannot add assorts: {err}");
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Map;
    use trader_core::AssortItem;
    use trader_runtime::InMemoryHost;

    fn base() -> TraderBase {
        TraderBase {
            id: "t1".into(),
            name: "n".into(),
            nickname: "n".into(),
            avatar: "a.jpg".into(),
            location: "l".into(),
            extra: Map::new(),
        }
    }

    #[test]
    fn second_registration_reports_collision() {
        let mut host = InMemoryHost::new();

        assert!(add_trader_with_empty_assort(&mut host, &base()));
        assert!(!add_trader_with_empty_assort(&mut host, &base()));
    }

    #[test]
    fn assort_overwrites_placeholder() {
        let mut host = InMemoryHost::new();
        add_trader_with_empty_assort(&mut host, &base());
        let mut assort = TraderAssort::empty();
        assort.items.push(AssortItem::new("a1", "tpl"));

        assert!(overwrite_trader_assort(&mut host, "t1", assort.clone()));
        assert_eq!(host.trader("t1").unwrap().assort, assort);
        assert!(!overwrite_trader_assort(&mut host, "t2", assort));
    }

    #[test]
    fn update_time_is_recorded() {
        let mut host = InMemoryHost::new();
        set_trader_update_time(&mut host, &base(), RefreshWindow::from_hours(1, 2));

        assert_eq!(
            host.update_times(),
            [("t1".to_string(), RefreshWindow::from_hours(1, 2))]
        );
    }
}
