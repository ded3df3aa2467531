//! Trader identity and the record registered in the host database.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::assort::TraderAssort;

/// Quest buckets every trader record carries.
pub const QUEST_ASSORT_BUCKETS: [&str; 3] = ["Started", "Success", "Fail"];

/// Trader descriptor shipped as `base.json`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TraderBase {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub nickname: String,
    /// Avatar path as the client requests it, e.g. `/files/trader/avatar/x.jpg`.
    pub avatar: String,
    pub location: String,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl TraderBase {
    /// Route under which the avatar image is served (avatar minus `.jpg`).
    pub fn avatar_route(&self) -> &str {
        self.avatar.strip_suffix(".jpg").unwrap_or(&self.avatar)
    }
}

/// A trader as stored in the host database.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Trader {
    pub base: TraderBase,
    pub assort: TraderAssort,
    #[serde(rename = "questassort")]
    pub quest_assort: IndexMap<String, IndexMap<String, String>>,
    #[serde(default)]
    pub dialogue: IndexMap<String, Vec<String>>,
}

impl Trader {
    /// A trader with an empty assortment and empty quest buckets.
    pub fn with_empty_assort(base: TraderBase) -> Self {
        let quest_assort = QUEST_ASSORT_BUCKETS
            .iter()
            .map(|bucket| (bucket.to_string(), IndexMap::new()))
            .collect();

        Self {
            base,
            assort: TraderAssort::empty(),
            quest_assort,
            dialogue: IndexMap::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base(avatar: &str) -> TraderBase {
        TraderBase {
            id: "t1".into(),
            name: "Full Name".into(),
            nickname: "Nick".into(),
            avatar: avatar.into(),
            location: "Somewhere".into(),
            extra: Map::new(),
        }
    }

    #[test]
    fn avatar_route_strips_jpg() {
        assert_eq!(
            base("/files/trader/avatar/nick.jpg").avatar_route(),
            "/files/trader/avatar/nick"
        );
        assert_eq!(base("/files/a.png").avatar_route(), "/files/a.png");
    }

    #[test]
    fn empty_trader_has_quest_buckets() {
        let trader = Trader::with_empty_assort(base("a.jpg"));
        assert!(trader.assort.items.is_empty());
        let buckets: Vec<_> = trader.quest_assort.keys().map(String::as_str).collect();
        assert_eq!(buckets, QUEST_ASSORT_BUCKETS);
    }
}
