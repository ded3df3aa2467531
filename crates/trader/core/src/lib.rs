//! Trader data model and the catalog merge.
//!
//! `trader-core` defines the assortment, trader and settings shapes shared by
//! the other crates, plus the pure merge that applies per-item overrides to an
//! assortment. Nothing here touches the filesystem or the host; persistence
//! and host registration live in `trader-runtime` and `trader-plugin`.
pub mod assort;
pub mod env;
pub mod merge;
pub mod settings;
pub mod trader;

pub use assort::{AssortItem, BarterComponent, BarterScheme, ItemUpd, TraderAssort};
pub use env::{ItemNameOracle, LocaleTable};
pub use merge::{MergeReport, MergedAssort, Repricing, apply_overrides, discover_items, reprice};
pub use settings::{
    ItemSettings, MIN_PRICE_MULTIPLIER, MULTIPLIER_EPSILON, REMOVE_STOCK, SettingsStore,
    StockRule, UNKNOWN_ITEM_NAME,
};
pub use trader::{QUEST_ASSORT_BUCKETS, Trader, TraderBase};
