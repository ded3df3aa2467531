//! Runs the catalog merge against a settings repository.
//!
//! Order of operations:
//! 1. Load the store. A missing store starts empty and must be saved; an
//!    unreadable one is logged and replaced by an empty store.
//! 2. Discover priced items the store does not know.
//! 3. Save the store if it is new or discovery changed it.
//! 4. Apply the overrides to the assortment.

use tracing::{debug, error, info, warn};
use trader_core::{
    ItemNameOracle, MergeReport, MergedAssort, SettingsStore, TraderAssort, apply_overrides,
    discover_items,
};

use crate::repository::{Result, SettingsRepository};

/// Result of a merge run.
#[derive(Debug)]
pub struct MergeOutcome {
    pub assort: MergedAssort,
    /// Store as it stands after the merge, including reset multipliers.
    pub store: SettingsStore,
    pub report: MergeReport,
    /// Whether the store was written during this run.
    pub saved: bool,
}

/// Applies the settings held by a repository to an assortment.
pub struct SettingsMerger<R> {
    repository: R,
}

impl<R: SettingsRepository> SettingsMerger<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    pub fn repository(&self) -> &R {
        &self.repository
    }

    /// Merges the stored settings into `assort`.
    ///
    /// Only a failed save is an error; a failed load falls back to an empty
    /// store.
    pub fn merge(
        &self,
        assort: TraderAssort,
        names: Option<&dyn ItemNameOracle>,
    ) -> Result<MergeOutcome> {
        let (mut store, mut needs_save, unreadable) = match self.repository.load() {
            Ok(Some(store)) => (store, false, false),
            Ok(None) => {
                debug!("no settings stored yet, starting empty");
                (SettingsStore::new(), true, false)
            }
            Err(err) => {
                error!(error = %err, "error reading settings, using defaults");
                (SettingsStore::new(), false, true)
            }
        };

        if !store.enable_overrides {
            info!("overrides disabled, assortment left as shipped");
            let mut report = MergeReport::default();
            let assort = apply_overrides(assort, &mut store, &mut report);
            return Ok(MergeOutcome {
                assort,
                store,
                report,
                saved: false,
            });
        }

        let mut report = MergeReport {
            discovered: discover_items(&assort, &mut store, names),
            ..MergeReport::default()
        };
        needs_save |= report.settings_dirty();

        if needs_save {
            if unreadable {
                match self.repository.preserve_unreadable() {
                    Ok(Some(backup)) => {
                        warn!(backup = %backup.display(), "kept a copy of the unreadable settings")
                    }
                    Ok(None) => {}
                    Err(err) => warn!(error = %err, "could not back up unreadable settings"),
                }
            }
            self.repository.save(&store)?;
            info!(
                discovered = report.discovered.len(),
                "settings file updated/created"
            );
        }

        let assort = apply_overrides(assort, &mut store, &mut report);

        info!(
            removed = report.removed.len(),
            restocked = report.restocked.len(),
            repriced = report.repriced.len(),
            invalid = report.invalid_multipliers.len(),
            "applied item overrides"
        );

        Ok(MergeOutcome {
            assort,
            store,
            report,
            saved: needs_save,
        })
    }
}
