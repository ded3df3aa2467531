//! Read-only lookups the merge needs from the host.

use std::collections::HashMap;

/// Key/value strings of one locale, e.g. `"<tpl> Name" -> "7.62x39mm PS"`.
pub type LocaleTable = HashMap<String, String>;

/// Resolves display names for item templates.
pub trait ItemNameOracle {
    fn item_name(&self, template: &str) -> Option<String>;
}

impl ItemNameOracle for LocaleTable {
    fn item_name(&self, template: &str) -> Option<String> {
        self.get(&format!("{template} Name")).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn locale_table_names_templates() {
        let mut table = LocaleTable::new();
        table.insert("tpl-a Name".into(), "Alpha".into());
        table.insert("tpl-a ShortName".into(), "A".into());

        assert_eq!(table.item_name("tpl-a").as_deref(), Some("Alpha"));
        assert_eq!(table.item_name("tpl-b"), None);
    }
}
