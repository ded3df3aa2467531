//! Catalog merge: reconciles the settings store against a trader assortment.
//!
//! The merge runs in two phases so the caller can persist the store in between:
//!
//! 1. [`discover_items`] adds default entries for priced items the store does
//!    not know yet.
//! 2. [`apply_overrides`] walks the store in its own order and removes,
//!    restocks and reprices items in the assortment.
//!
//! Both phases do nothing while `enable_overrides` is off. Prices are always
//! read from the assortment being edited, and [`apply_overrides`] consumes the
//! assortment and returns a [`MergedAssort`], which cannot be fed back in, so
//! a multiplier is applied exactly once per merge.

use tracing::{debug, warn};

use crate::assort::TraderAssort;
use crate::env::ItemNameOracle;
use crate::settings::{
    ItemSettings, MIN_PRICE_MULTIPLIER, SettingsStore, StockRule, UNKNOWN_ITEM_NAME,
};

/// Assortment that has been through [`apply_overrides`].
#[derive(Clone, Debug, PartialEq)]
pub struct MergedAssort(TraderAssort);

impl MergedAssort {
    pub fn assort(&self) -> &TraderAssort {
        &self.0
    }

    pub fn into_inner(self) -> TraderAssort {
        self.0
    }
}

/// Price change applied to one item.
#[derive(Clone, Debug, PartialEq)]
pub struct Repricing {
    pub id: String,
    pub from: f64,
    pub to: f64,
}

/// What a merge did, item by item.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MergeReport {
    /// Ids that received a new default settings entry.
    pub discovered: Vec<String>,
    /// Ids removed from the assortment.
    pub removed: Vec<String>,
    /// Ids whose stack was forced to a finite count.
    pub restocked: Vec<String>,
    pub repriced: Vec<Repricing>,
    /// Ids whose multiplier was rejected and reset to 1.0.
    pub invalid_multipliers: Vec<String>,
    /// Settings entries with no matching assortment item.
    pub stale: Vec<String>,
}

impl MergeReport {
    /// Whether discovery changed the store.
    pub fn settings_dirty(&self) -> bool {
        !self.discovered.is_empty()
    }
}

/// Computes an adjusted price: `max(1, round(current * multiplier))`.
///
/// Ties round away from zero.
pub fn reprice(current: f64, multiplier: f64) -> f64 {
    (current * multiplier).round().max(1.0)
}

/// Adds a default entry for every priced item missing from the store.
///
/// Names come from `names` keyed by the item's template, falling back to
/// [`UNKNOWN_ITEM_NAME`]. Returns the ids that were added, in assortment order.
pub fn discover_items(
    assort: &TraderAssort,
    store: &mut SettingsStore,
    names: Option<&dyn ItemNameOracle>,
) -> Vec<String> {
    if !store.enable_overrides {
        return Vec::new();
    }

    let mut discovered = Vec::new();
    for item in &assort.items {
        if !assort.has_price(&item.id) || store.contains(&item.id) {
            continue;
        }

        let name = names
            .and_then(|names| names.item_name(&item.template))
            .unwrap_or_else(|| UNKNOWN_ITEM_NAME.to_string());

        debug!(id = %item.id, name = %name, "discovered item");
        store.insert(item.id.clone(), ItemSettings::discovered(name));
        discovered.push(item.id.clone());
    }

    discovered
}

/// Applies every store entry to the assortment.
///
/// Invalid multipliers are reset to 1.0 in `store` and reported.
pub fn apply_overrides(
    mut assort: TraderAssort,
    store: &mut SettingsStore,
    report: &mut MergeReport,
) -> MergedAssort {
    if !store.enable_overrides {
        return MergedAssort(assort);
    }

    for (id, settings) in store.items.iter_mut() {
        if assort.item(id).is_none() {
            report.stale.push(id.clone());
            continue;
        }

        match settings.stock_rule() {
            StockRule::Remove => {
                assort.remove_item(id);
                report.removed.push(id.clone());
                continue;
            }
            StockRule::Fixed(count) => {
                if let Some(item) = assort.item_mut(id) {
                    item.set_finite_stock(count);
                    report.restocked.push(id.clone());
                }
            }
            StockRule::Default => {}
        }

        if !settings.has_valid_multiplier() {
            warn!(
                item = %settings.item_name,
                id = %id,
                multiplier = settings.price_multiplier,
                "price multiplier must be above {MIN_PRICE_MULTIPLIER}, using 1.0"
            );
            settings.price_multiplier = 1.0;
            report.invalid_multipliers.push(id.clone());
        }

        if settings.changes_price()
            && let Some(price) = assort.leading_price_mut(id)
        {
            let from = price.count.unwrap_or(1.0);
            let to = reprice(from, settings.price_multiplier);
            price.count = Some(to);
            report.repriced.push(Repricing {
                id: id.clone(),
                from,
                to,
            });
        }
    }

    MergedAssort(assort)
}
