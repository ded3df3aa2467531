//! One-shot bootstrap of the trader.
use std::any::Any;
use std::panic::{self, AssertUnwindSafe};

use anyhow::{Context, Result};
use tracing::{debug, error, info, info_span, warn};
use trader_content::ContentFactory;
use trader_core::{ItemNameOracle, MergeReport};
use trader_runtime::{FileSettingsRepository, ServerHost, SettingsMerger};

use crate::config::{ModMetadata, PluginConfig};
use crate::locales::TraderLocale;
use crate::registration;

/// What a successful load did.
#[derive(Clone, Debug)]
pub struct LoadSummary {
    pub trader_id: String,
    pub nickname: String,
    /// `false` when another plugin already owned the trader id.
    pub registered: bool,
    pub report: MergeReport,
    pub settings_saved: bool,
}

/// Result of [`TraderPlugin::on_load`].
#[derive(Clone, Debug)]
pub enum LoadOutcome {
    Loaded(LoadSummary),
    /// The load was aborted; the message has already been logged.
    Failed { message: String },
}

impl LoadOutcome {
    pub fn is_loaded(&self) -> bool {
        matches!(self, Self::Loaded(_))
    }

    pub fn summary(&self) -> Option<&LoadSummary> {
        match self {
            Self::Loaded(summary) => Some(summary),
            Self::Failed { .. } => None,
        }
    }
}

/// The trader plugin, loaded once after the host database is ready.
pub struct TraderPlugin {
    config: PluginConfig,
}

impl TraderPlugin {
    pub fn new(config: PluginConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &PluginConfig {
        &self.config
    }

    pub fn metadata(&self) -> &ModMetadata {
        &self.config.metadata
    }

    /// Loads the trader into `host`.
    ///
    /// Never fails and never unwinds into the host: errors and panics are
    /// logged under the plugin tag and reported as [`LoadOutcome::Failed`].
    pub fn on_load<H: ServerHost + ?Sized>(&self, host: &mut H) -> LoadOutcome {
        let span = info_span!("plugin", tag = %self.config.tag);
        let _guard = span.enter();

        match panic::catch_unwind(AssertUnwindSafe(|| self.load(host))) {
            Ok(Ok(summary)) => {
                info!("Trader {} loaded successfully.", summary.nickname);
                LoadOutcome::Loaded(summary)
            }
            Ok(Err(err)) => {
                error!("Critical error: {err:#}");
                error!("{err:?}");
                LoadOutcome::Failed {
                    message: format!("{err:#}"),
                }
            }
            Err(payload) => {
                let message = panic_message(payload.as_ref()).to_string();
                error!("Critical error: {message}");
                LoadOutcome::Failed { message }
            }
        }
    }

    fn load<H: ServerHost + ?Sized>(&self, host: &mut H) -> Result<LoadSummary> {
        let data_dir = self.config.data_dir();
        debug!(data_dir = %data_dir.display(), "loading trader content");
        let content = ContentFactory::new(data_dir);

        let base = content
            .load_trader_base()
            .context("failed to load trader base")?;

        let avatar = content.avatar_path(&base)?;
        if !avatar.exists() {
            warn!(path = %avatar.display(), "trader avatar image is missing");
        }
        host.add_route(base.avatar_route(), &avatar);

        registration::set_trader_update_time(host, &base, self.config.refresh);

        let registered = registration::add_trader_with_empty_assort(host, &base);

        TraderLocale::new(&base, &self.config.first_name, &self.config.description)
            .register(host);

        let assort = content
            .load_assort()
            .context("failed to load trader assort")?;

        let merger = SettingsMerger::new(
            FileSettingsRepository::new(self.config.settings_path())
                .context("failed to prepare settings directory")?,
        );
        let outcome = {
            let names = host.table(&self.config.name_locale);
            if names.is_none() {
                debug!(locale = %self.config.name_locale, "locale not available for item names");
            }
            merger
                .merge(assort, names.map(|table| table as &dyn ItemNameOracle))
                .context("failed to apply item settings")?
        };

        // A foreign trader under our id keeps its own assortment.
        if registered {
            registration::overwrite_trader_assort(host, &base.id, outcome.assort.into_inner());
        }

        if let Err(err) = host.add_trader(&base.id) {
            warn!("Trader {} already in Ragfair config: {err}", base.id);
        }

        Ok(LoadSummary {
            trader_id: base.id,
            nickname: base.nickname,
            registered,
            report: outcome.report,
            settings_saved: outcome.saved,
        })
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> &str {
    payload
        .downcast_ref::<&str>()
        .copied()
        .or_else(|| payload.downcast_ref::<String>().map(String::as_str))
        .unwrap_or("Unknown error")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn panic_payloads_are_readable() {
        let payload: Box<dyn Any + Send> = Box::new("boom");
        assert_eq!(panic_message(payload.as_ref()), "boom");

        let payload: Box<dyn Any + Send> = Box::new(String::from("bang"));
        assert_eq!(panic_message(payload.as_ref()), "bang");

        let payload: Box<dyn Any + Send> = Box::new(7u8);
        assert_eq!(panic_message(payload.as_ref()), "Unknown error");
    }

    #[test]
    fn missing_content_fails_without_unwinding() {
        let dir = tempfile::tempdir().unwrap();
        let plugin = TraderPlugin::new(PluginConfig::new(dir.path()));
        let mut host = trader_runtime::InMemoryHost::new();

        let outcome = plugin.on_load(&mut host);

        match outcome {
            LoadOutcome::Failed { message } => {
                assert!(message.contains("trader base"), "{message}")
            }
            LoadOutcome::Loaded(_) => panic!("load should fail without data"),
        }
    }
}
