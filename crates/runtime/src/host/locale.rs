//! Lazily materialized locale tables.

use std::fmt;

use trader_core::LocaleTable;

/// Edit applied to a locale table when it is materialized.
pub type LocaleTransformer = Box<dyn Fn(&mut LocaleTable) + Send + Sync>;

type LocaleSource = Box<dyn FnOnce() -> LocaleTable + Send + Sync>;

/// A locale table that is built on first access.
///
/// Transformers registered before materialization run, in registration order,
/// right after the table is built. Transformers registered afterwards run
/// immediately.
pub struct LazyLocale {
    source: Option<LocaleSource>,
    table: Option<LocaleTable>,
    transformers: Vec<LocaleTransformer>,
}

impl LazyLocale {
    /// A locale built from `source` on first access.
    pub fn new(source: impl FnOnce() -> LocaleTable + Send + Sync + 'static) -> Self {
        Self {
            source: Some(Box::new(source)),
            table: None,
            transformers: Vec::new(),
        }
    }

    /// A locale whose table is known up front but still treated as pending.
    pub fn from_table(table: LocaleTable) -> Self {
        Self::new(move || table)
    }

    pub fn is_materialized(&self) -> bool {
        self.table.is_some()
    }

    pub fn add_transformer(&mut self, transformer: LocaleTransformer) {
        match self.table.as_mut() {
            Some(table) => transformer(table),
            None => self.transformers.push(transformer),
        }
    }

    /// Builds the table if needed and returns it.
    pub fn materialize(&mut self) -> &LocaleTable {
        if self.table.is_none() {
            let mut table = self.source.take().map(|source| source()).unwrap_or_default();
            for transformer in self.transformers.drain(..) {
                transformer(&mut table);
            }
            self.table = Some(table);
        }
        self.table.get_or_insert_with(LocaleTable::new)
    }
}

impl fmt::Debug for LazyLocale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LazyLocale")
            .field("materialized", &self.is_materialized())
            .field("pending_transformers", &self.transformers.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicBool, Ordering};

    fn table(pairs: &[(&str, &str)]) -> LocaleTable {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn source_runs_on_first_access_only() {
        let built = Arc::new(AtomicBool::new(false));
        let flag = built.clone();
        let mut locale = LazyLocale::new(move || {
            flag.store(true, Ordering::SeqCst);
            table(&[("k", "v")])
        });

        locale.add_transformer(Box::new(|t: &mut LocaleTable| {
            t.entry("added".into()).or_insert_with(|| "yes".into());
        }));
        assert!(!built.load(Ordering::SeqCst));
        assert!(!locale.is_materialized());

        let t = locale.materialize();
        assert_eq!(t.get("added").map(String::as_str), Some("yes"));
        assert!(built.load(Ordering::SeqCst));
    }

    #[test]
    fn late_transformer_applies_immediately() {
        let mut locale = LazyLocale::from_table(table(&[("k", "v")]));
        locale.materialize();

        locale.add_transformer(Box::new(|t: &mut LocaleTable| {
            t.insert("late".into(), "1".into());
        }));

        assert_eq!(locale.materialize().get("late").map(String::as_str), Some("1"));
    }
}
