//! Runtime configuration and its environment loader.

use std::env;
use std::path::PathBuf;

use forge_core::{BuildConfig, Locale};

/// Runtime configuration shared by the store, repositories and content loading.
#[derive(Clone, Debug, PartialEq)]
pub struct RuntimeConfig {
    /// Content directory; `None` serves the bundled defaults.
    pub data_dir: Option<PathBuf>,
    /// Directory holding `saved_builds.json`.
    pub save_dir: PathBuf,
    pub locale: Locale,
    pub build: BuildConfig,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            data_dir: None,
            save_dir: default_save_dir(),
            locale: Locale::default(),
            build: BuildConfig::default(),
        }
    }
}

impl RuntimeConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `FORGE_DATA_DIR` - Content directory (default: bundled content)
    /// - `FORGE_SAVE_DIR` - Saved-build directory (default: platform data dir)
    /// - `FORGE_LOCALE` - Skill name locale, `en` or `pt` (default: en)
    /// - `FORGE_MAX_SAVED_BUILDS` - Saved-build limit (default: 50)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(dir) = read_env::<PathBuf>("FORGE_DATA_DIR") {
            config.data_dir = Some(dir);
        }
        if let Some(dir) = read_env::<PathBuf>("FORGE_SAVE_DIR") {
            config.save_dir = dir;
        }
        if let Some(locale) = read_env::<Locale>("FORGE_LOCALE") {
            config.locale = locale;
        }
        if let Some(limit) = read_env::<usize>("FORGE_MAX_SAVED_BUILDS") {
            config.build.max_saved_builds = limit.max(1);
        }

        config
    }

    pub fn max_saved_builds(&self) -> usize {
        self.build.max_saved_builds
    }
}

/// Platform data directory for saved builds.
///
/// - Linux: `~/.local/share/forge` (or `$XDG_DATA_HOME/forge`)
/// - macOS: `~/Library/Application Support/forge`
/// - Windows: `%APPDATA%\forge`
/// - Fallback: `./save_data`
pub fn default_save_dir() -> PathBuf {
    directories::ProjectDirs::from("", "", "forge")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("./save_data"))
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_use_bundled_content() {
        let config = RuntimeConfig::default();
        assert_eq!(config.data_dir, None);
        assert_eq!(config.locale, Locale::En);
        assert_eq!(config.max_saved_builds(), 50);
    }
}
