//! Locale strings for the trader.

use tracing::debug;
use trader_core::{LocaleTable, TraderBase};
use trader_runtime::LocaleRegistry;

/// The five display strings the client looks up for a trader.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TraderLocale {
    trader_id: String,
    full_name: String,
    first_name: String,
    nickname: String,
    location: String,
    description: String,
}

impl TraderLocale {
    pub fn new(base: &TraderBase, first_name: &str, description: &str) -> Self {
        Self {
            trader_id: base.id.clone(),
            full_name: base.name.clone(),
            first_name: first_name.to_string(),
            nickname: base.nickname.clone(),
            location: base.location.clone(),
            description: description.to_string(),
        }
    }

    /// Locale keys and their values.
    pub fn entries(&self) -> [(String, String); 5] {
        let id = &self.trader_id;
        [
            (format!("{id} FullName"), self.full_name.clone()),
            (format!("{id} FirstName"), self.first_name.clone()),
            (format!("{id} Nickname"), self.nickname.clone()),
            (format!("{id} Location"), self.location.clone()),
            (format!("{id} Description"), self.description.clone()),
        ]
    }

    /// Queues the entries for every locale the host maintains.
    ///
    /// Nothing is written until the host materializes a locale, and keys that
    /// already exist are left alone.
    pub fn register<H: LocaleRegistry + ?Sized>(&self, host: &mut H) {
        let locales = host.locales();
        for locale in &locales {
            let entries = self.entries();
            host.add_transformer(
                locale,
                Box::new(move |table: &mut LocaleTable| {
                    for (key, value) in &entries {
                        table.entry(key.clone()).or_insert_with(|| value.clone());
                    }
                }),
            );
        }
        debug!(trader = %self.trader_id, locales = locales.len(), "queued trader locale strings");
    }
}
