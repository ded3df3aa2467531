//! Checks the data files shipped in `data/` against the loaders.

use std::path::PathBuf;

use trader_content::ContentFactory;

fn bundled() -> ContentFactory {
    ContentFactory::new(PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data"))
}

#[test]
fn bundled_base_loads() {
    let base = bundled().load_trader_base().expect("base.json should parse");

    assert_eq!(base.nickname, "Vafelz");
    assert_eq!(base.avatar_route(), "/files/trader/avatar/vafelz");
}

#[test]
fn every_bundled_item_is_priced() {
    let assort = bundled().load_assort().expect("assort.json should parse");

    assert!(!assort.items.is_empty());
    for item in &assort.items {
        let price = assort
            .leading_price(&item.id)
            .and_then(|component| component.count)
            .unwrap_or_else(|| panic!("item {} has no price", item.id));
        assert!(price >= 1.0, "item {} priced at {}", item.id, price);
        assert!(assort.loyal_level_items.contains_key(&item.id));
    }
}
