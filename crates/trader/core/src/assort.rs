//! Trader assortment: sellable items, their price schemes and loyalty levels.
//!
//! The shapes mirror the host's assortment JSON. Fields the plugin does not
//! interpret are captured in `extra` maps so a load/save cycle hands the host
//! exactly what the data file contained.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Price scheme of one item: alternatives, each a list of price components.
pub type BarterScheme = Vec<Vec<BarterComponent>>;

/// One stock-keeping unit offered by the trader.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AssortItem {
    #[serde(rename = "_id")]
    pub id: String,

    /// Template (kind) identifier used for locale lookups.
    #[serde(rename = "_tpl")]
    pub template: String,

    #[serde(rename = "parentId", default, skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<String>,

    #[serde(rename = "slotId", default, skip_serializing_if = "Option::is_none")]
    pub slot_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub upd: Option<ItemUpd>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl AssortItem {
    pub fn new(id: impl Into<String>, template: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            template: template.into(),
            parent_id: Some("hideout".to_string()),
            slot_id: Some("hideout".to_string()),
            upd: Some(ItemUpd::default()),
            extra: Map::new(),
        }
    }

    /// Forces a finite stack of `count` items.
    ///
    /// Items shipped without an `upd` block get one.
    pub fn set_finite_stock(&mut self, count: u64) {
        let upd = self.upd.get_or_insert_with(ItemUpd::default);
        upd.stack_objects_count = Some(count);
        upd.unlimited_count = Some(false);
    }

    pub fn stack_count(&self) -> Option<u64> {
        self.upd.as_ref().and_then(|upd| upd.stack_objects_count)
    }

    pub fn is_unlimited(&self) -> bool {
        self.upd
            .as_ref()
            .and_then(|upd| upd.unlimited_count)
            .unwrap_or(false)
    }
}

/// Mutable stock block of an assortment item.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ItemUpd {
    #[serde(rename = "UnlimitedCount", default, skip_serializing_if = "Option::is_none")]
    pub unlimited_count: Option<bool>,

    #[serde(rename = "StackObjectsCount", default, skip_serializing_if = "Option::is_none")]
    pub stack_objects_count: Option<u64>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A single price component: `count` units of the `template` currency/item.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BarterComponent {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub count: Option<f64>,

    #[serde(rename = "_tpl")]
    pub template: String,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl BarterComponent {
    pub fn new(template: impl Into<String>, count: f64) -> Self {
        Self {
            count: Some(count),
            template: template.into(),
            extra: Map::new(),
        }
    }
}

/// The full assortment handed to the host for one trader.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TraderAssort {
    #[serde(default)]
    pub items: Vec<AssortItem>,

    #[serde(default)]
    pub barter_scheme: IndexMap<String, BarterScheme>,

    #[serde(default)]
    pub loyal_level_items: IndexMap<String, u32>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl TraderAssort {
    /// An assortment with no items, used as the placeholder at registration.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn item(&self, id: &str) -> Option<&AssortItem> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn item_mut(&mut self, id: &str) -> Option<&mut AssortItem> {
        self.items.iter_mut().find(|item| item.id == id)
    }

    pub fn has_price(&self, id: &str) -> bool {
        self.barter_scheme.contains_key(id)
    }

    /// First component of the first alternative of an item's price scheme.
    pub fn leading_price_mut(&mut self, id: &str) -> Option<&mut BarterComponent> {
        self.barter_scheme
            .get_mut(id)
            .and_then(|scheme| scheme.first_mut())
            .and_then(|alternative| alternative.first_mut())
    }

    pub fn leading_price(&self, id: &str) -> Option<&BarterComponent> {
        self.barter_scheme
            .get(id)
            .and_then(|scheme| scheme.first())
            .and_then(|alternative| alternative.first())
    }

    /// Removes an item together with its price scheme and loyalty level.
    ///
    /// Returns `false` when the item was not in the list.
    pub fn remove_item(&mut self, id: &str) -> bool {
        let Some(index) = self.items.iter().position(|item| item.id == id) else {
            return false;
        };
        self.items.remove(index);
        self.barter_scheme.shift_remove(id);
        self.loyal_level_items.shift_remove(id);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ROUBLES: &str = "5449016a4bdc2d6f028b456f";

    fn sample() -> TraderAssort {
        let mut assort = TraderAssort::empty();
        assort.items.push(AssortItem::new("a1", "tpl-a"));
        assort.items.push(AssortItem::new("a2", "tpl-b"));
        assort
            .barter_scheme
            .insert("a1".into(), vec![vec![BarterComponent::new(ROUBLES, 100.0)]]);
        assort.loyal_level_items.insert("a1".into(), 1);
        assort
    }

    #[test]
    fn remove_item_drops_scheme_and_loyalty() {
        let mut assort = sample();

        assert!(assort.remove_item("a1"));
        assert!(assort.item("a1").is_none());
        assert!(!assort.barter_scheme.contains_key("a1"));
        assert!(!assort.loyal_level_items.contains_key("a1"));
        assert_eq!(assort.items.len(), 1);
    }

    #[test]
    fn remove_missing_item_is_noop() {
        let mut assort = sample();
        assert!(!assort.remove_item("nope"));
        assert_eq!(assort, sample());
    }

    #[test]
    fn finite_stock_creates_upd_block() {
        let mut item = AssortItem::new("a1", "tpl-a");
        item.upd = None;

        item.set_finite_stock(30);

        assert_eq!(item.stack_count(), Some(30));
        assert!(!item.is_unlimited());
    }

    #[test]
    fn unknown_fields_survive_json() {
        let json = r#"{
            "items": [{
                "_id": "a1", "_tpl": "tpl-a", "parentId": "hideout", "slotId": "hideout",
                "upd": {
                    "UnlimitedCount": true,
                    "StackObjectsCount": 999999,
                    "BuyRestrictionMax": 50
                }
            }],
            "barter_scheme": { "a1": [[{ "count": 120, "_tpl": "5449016a4bdc2d6f028b456f" }]] },
            "loyal_level_items": { "a1": 2 },
            "nextResupply": 0
        }"#;

        let assort: TraderAssort = serde_json::from_str(json).unwrap();
        let upd = assort.items[0].upd.as_ref().unwrap();
        assert_eq!(upd.extra.get("BuyRestrictionMax"), Some(&Value::from(50)));
        assert!(assort.extra.contains_key("nextResupply"));
        assert_eq!(assort.leading_price("a1").unwrap().count, Some(120.0));

        let again: TraderAssort =
            serde_json::from_str(&serde_json::to_string(&assort).unwrap()).unwrap();
        assert_eq!(again, assort);
    }
}
