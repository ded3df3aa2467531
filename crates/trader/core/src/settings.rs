//! User-editable per-item overrides.
//!
//! Serialized as
//! `{ "enableOverrides": bool, "items": { "<id>": { "itemName", "priceMultiplier", "stockCount" } } }`.
//! The legacy PascalCase keys are accepted on load and rewritten on save.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Display name used when no locale entry names the item.
pub const UNKNOWN_ITEM_NAME: &str = "Unknown Item";

/// `stockCount` value that removes the item from the assortment.
pub const REMOVE_STOCK: i64 = -1;

/// Multipliers at or below this are rejected.
pub const MIN_PRICE_MULTIPLIER: f64 = 0.001;

/// Multipliers this close to 1.0 leave prices untouched.
pub const MULTIPLIER_EPSILON: f64 = 0.001;

/// What a `stockCount` value asks of the merge.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StockRule {
    /// Drop the item, its price scheme and its loyalty level.
    Remove,
    /// Keep the catalog's stock.
    Default,
    /// Force a finite stack of this size.
    Fixed(u64),
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ItemSettings {
    #[serde(rename = "itemName", alias = "ItemName", default = "unknown_name")]
    pub item_name: String,

    #[serde(rename = "priceMultiplier", alias = "PriceMultiplier", default = "unit")]
    pub price_multiplier: f64,

    #[serde(rename = "stockCount", alias = "StockCount", default)]
    pub stock_count: i64,
}

impl ItemSettings {
    /// Default entry for a newly discovered item.
    pub fn discovered(item_name: impl Into<String>) -> Self {
        Self {
            item_name: item_name.into(),
            price_multiplier: 1.0,
            stock_count: 0,
        }
    }

    pub fn stock_rule(&self) -> StockRule {
        match self.stock_count {
            REMOVE_STOCK => StockRule::Remove,
            count if count > 0 => StockRule::Fixed(count as u64),
            _ => StockRule::Default,
        }
    }

    pub fn has_valid_multiplier(&self) -> bool {
        self.price_multiplier > MIN_PRICE_MULTIPLIER
    }

    pub fn changes_price(&self) -> bool {
        (self.price_multiplier - 1.0).abs() > MULTIPLIER_EPSILON
    }
}

impl Default for ItemSettings {
    fn default() -> Self {
        Self::discovered(UNKNOWN_ITEM_NAME)
    }
}

/// The on-disk settings document.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SettingsStore {
    #[serde(rename = "enableOverrides", alias = "EnableConfig", default = "enabled")]
    pub enable_overrides: bool,

    #[serde(alias = "Items", default)]
    pub items: IndexMap<String, ItemSettings>,
}

impl SettingsStore {
    pub fn new() -> Self {
        Self {
            enable_overrides: true,
            items: IndexMap::new(),
        }
    }

    pub fn get(&self, id: &str) -> Option<&ItemSettings> {
        self.items.get(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.items.contains_key(id)
    }

    pub fn insert(&mut self, id: impl Into<String>, settings: ItemSettings) {
        self.items.insert(id.into(), settings);
    }
}

impl Default for SettingsStore {
    fn default() -> Self {
        Self::new()
    }
}

fn unknown_name() -> String {
    UNKNOWN_ITEM_NAME.to_string()
}

fn unit() -> f64 {
    1.0
}

fn enabled() -> bool {
    true
}
