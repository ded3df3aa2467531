//! Plugin configuration and metadata.
use std::path::{Path, PathBuf};

use trader_runtime::RefreshWindow;

/// Identity reported to the host's mod loader.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ModMetadata {
    pub guid: String,
    pub name: String,
    pub author: String,
    pub contributors: Vec<String>,
    pub version: String,
    /// Semver range of host versions this plugin supports.
    pub host_version: String,
    pub url: String,
    pub license: String,
    pub is_bundle_mod: bool,
}

impl Default for ModMetadata {
    fn default() -> Self {
        Self {
            guid: "com.tiltushkin.allammo".to_string(),
            name: "Tiltushkin-AllAmmo".to_string(),
            author: "Tiltushkin".to_string(),
            contributors: vec!["Tiltushkin".to_string()],
            version: "1.3.0".to_string(),
            host_version: "~4.0.0".to_string(),
            url: "https://github.com/Tiltushkin/Tiltushkin-AllAmmo-CSharp/".to_string(),
            license: "MIT".to_string(),
            is_bundle_mod: false,
        }
    }
}

/// Configuration required to load the trader.
///
/// Relative paths are resolved against `mod_dir`, the directory the host
/// loaded the plugin from.
#[derive(Clone, Debug)]
pub struct PluginConfig {
    /// Tag attached to every log line of the plugin.
    pub tag: String,
    pub metadata: ModMetadata,
    pub mod_dir: PathBuf,
    pub data_dir: PathBuf,
    pub settings_path: PathBuf,
    /// Trader first name shown in the client.
    pub first_name: String,
    pub description: String,
    pub refresh: RefreshWindow,
    /// Locale used to name newly discovered items in the settings file.
    pub name_locale: String,
}

impl PluginConfig {
    pub fn new(mod_dir: impl Into<PathBuf>) -> Self {
        Self {
            mod_dir: mod_dir.into(),
            ..Self::default()
        }
    }

    /// Absolute directory holding `base.json`, `assort.json` and the avatar.
    pub fn data_dir(&self) -> PathBuf {
        self.resolve(&self.data_dir)
    }

    /// Absolute path of the user-editable settings file.
    pub fn settings_path(&self) -> PathBuf {
        self.resolve(&self.settings_path)
    }

    fn resolve(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.mod_dir.join(path)
        }
    }
}

impl Default for PluginConfig {
    fn default() -> Self {
        Self {
            tag: "AllAmmo".to_string(),
            metadata: ModMetadata::default(),
            mod_dir: PathBuf::from("."),
            data_dir: PathBuf::from("data"),
            settings_path: PathBuf::from("config/config.json"),
            first_name: "VAFELZ".to_string(),
            description: "All Ammo Trader.".to_string(),
            refresh: RefreshWindow::from_hours(1, 2),
            name_locale: "en".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paths_resolve_against_mod_dir() {
        let config = PluginConfig::new("/srv/mods/allammo");

        assert_eq!(config.data_dir(), Path::new("/srv/mods/allammo/data"));
        assert_eq!(
            config.settings_path(),
            Path::new("/srv/mods/allammo/config/config.json")
        );
    }

    #[test]
    fn absolute_paths_are_kept() {
        let mut config = PluginConfig::new("/srv/mods/allammo");
        config.settings_path = PathBuf::from("/etc/allammo.json");

        assert_eq!(config.settings_path(), Path::new("/etc/allammo.json"));
    }

    #[test]
    fn default_refresh_is_one_to_two_hours() {
        let config = PluginConfig::default();
        assert_eq!(config.refresh.min_seconds, 3600);
        assert_eq!(config.refresh.max_seconds, 7200);
    }
}
