//! Loads the trader plugin against an in-memory host.
//!
//! Run with: `cargo run -p trader-harness -- [MOD_DIR] [EN_LOCALE_JSON]`
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use trader_core::LocaleTable;
use trader_plugin::{LoadOutcome, PluginConfig, TraderPlugin};
use trader_runtime::InMemoryHost;

/// Loads the trader plugin against an in-memory host and prints a summary
#[derive(Parser)]
#[command(name = "trader-harness")]
#[command(about = "Development harness for the trader plugin", long_about = None)]
#[command(version)]
struct Args {
    /// Mod directory holding `data/` and `config/` (defaults to the current directory)
    #[arg(value_name = "MOD_DIR")]
    mod_dir: Option<PathBuf>,

    /// Flat JSON object of `en` locale keys, used to name discovered items
    #[arg(value_name = "EN_LOCALE_JSON")]
    en_locale: Option<PathBuf>,
}

fn main() -> Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let mod_dir = match args.mod_dir {
        Some(dir) => dir,
        None => env::current_dir().context("failed to resolve current directory")?,
    };
    let en = match args.en_locale.as_deref() {
        Some(path) => load_locale(path)?,
        None => LocaleTable::new(),
    };

    let mut host = InMemoryHost::new().with_locale("en", en);
    let plugin = TraderPlugin::new(PluginConfig::new(&mod_dir));
    tracing::info!(
        plugin = %plugin.metadata().name,
        version = %plugin.metadata().version,
        mod_dir = %mod_dir.display(),
        "loading plugin"
    );

    match plugin.on_load(&mut host) {
        LoadOutcome::Loaded(summary) => {
            let items = host
                .trader(&summary.trader_id)
                .map_or(0, |trader| trader.assort.items.len());
            let report = &summary.report;
            println!("trader:      {} ({})", summary.nickname, summary.trader_id);
            println!("registered:  {}", summary.registered);
            println!("items:       {items}");
            println!("discovered:  {}", report.discovered.len());
            println!("removed:     {}", report.removed.len());
            println!("restocked:   {}", report.restocked.len());
            println!("repriced:    {}", report.repriced.len());
            println!("invalid:     {}", report.invalid_multipliers.len());
            println!("stale:       {}", report.stale.len());
            println!("settings:    {}", plugin.config().settings_path().display());
            Ok(ExitCode::SUCCESS)
        }
        LoadOutcome::Failed { message } => {
            eprintln!("load failed: {message}");
            Ok(ExitCode::FAILURE)
        }
    }
}

fn load_locale(path: &Path) -> Result<LocaleTable> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("failed to read locale file {}", path.display()))?;
    serde_json::from_str(&contents)
        .with_context(|| format!("failed to parse locale file {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn args_are_well_formed() {
        Args::command().debug_assert();
    }

    #[test]
    fn positional_paths_are_optional() {
        let args = Args::try_parse_from(["trader-harness"]).unwrap();
        assert!(args.mod_dir.is_none() && args.en_locale.is_none());

        let args = Args::try_parse_from(["trader-harness", "mods/all-ammo", "en.json"]).unwrap();
        assert_eq!(args.mod_dir, Some(PathBuf::from("mods/all-ammo")));
        assert_eq!(args.en_locale, Some(PathBuf::from("en.json")));
    }

    #[test]
    fn flags_are_not_taken_as_paths() {
        let err = Args::try_parse_from(["trader-harness", "--help"]).err().unwrap();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayHelp);

        assert!(Args::try_parse_from(["trader-harness", "--bogus"]).is_err());
        assert!(Args::try_parse_from(["trader-harness", "a", "b", "c"]).is_err());
    }
}
