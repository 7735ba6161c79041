//! Application configuration.
//!
//! Runtime settings are read from an optional `config.toml` plus
//! environment variable overrides (using `__` as the nesting separator, so
//! `LOGGING__LEVEL=debug` overrides `[logging] level`). Every field has a
//! default, which keeps the binary usable against the bundled `data/`
//! directory with no configuration at all.

use config::{Config, Environment, File};
use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;

use crate::error::{AppError, AppResult};

const DEFAULT_THEME_MANIFEST: &str = "data/theme.json";
const DEFAULT_LOCALE_REGISTRY: &str = "data/config.json";
const DEFAULT_LOCALES_DIR: &str = "data/locales";
const DEFAULT_LOCALE_LOAD_TIMEOUT_MS: u64 = 5_000;

/// Main application configuration
#[derive(Debug, Deserialize, Default, Clone)]
pub struct AppConfig {
    theme_manifest: Option<String>,
    locale_registry: Option<String>,
    locales_dir: Option<String>,
    locale_load_timeout_ms: Option<u64>,
    settings_file: Option<String>,
    #[serde(default)]
    logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from `config.toml` (optional) and the
    /// environment.
    pub fn load() -> AppResult<Self> {
        dotenv::dotenv().ok();

        let file_source = File::with_name("config.toml").required(false);
        let env_source = Environment::default().separator("__");

        let config = Config::builder()
            .add_source(file_source)
            .add_source(env_source)
            .build()
            .map_err(|e| {
                AppError::Config(format!(
                    "Configuration loading failed: {e}. Please check your config.toml file and environment variables."
                ))
            })?;

        config
            .try_deserialize::<AppConfig>()
            .map_err(|e| AppError::Config(format!("Failed to deserialize config: {e}")))
    }

    /// Build a configuration pointing at an explicit data layout. Used by
    /// tests and tools that resolve a site outside the working directory.
    pub fn with_paths(
        theme_manifest: impl Into<String>,
        locale_registry: impl Into<String>,
        locales_dir: impl Into<String>,
    ) -> Self {
        Self {
            theme_manifest: Some(theme_manifest.into()),
            locale_registry: Some(locale_registry.into()),
            locales_dir: Some(locales_dir.into()),
            ..Self::default()
        }
    }

    /// Path to the theme manifest JSON file.
    pub fn theme_manifest(&self) -> PathBuf {
        PathBuf::from(self.theme_manifest.as_deref().unwrap_or(DEFAULT_THEME_MANIFEST))
    }

    /// Path to the locale registry JSON file.
    pub fn locale_registry(&self) -> PathBuf {
        PathBuf::from(self.locale_registry.as_deref().unwrap_or(DEFAULT_LOCALE_REGISTRY))
    }

    /// Directory holding one `<code>.json` content file per language.
    pub fn locales_dir(&self) -> PathBuf {
        PathBuf::from(self.locales_dir.as_deref().unwrap_or(DEFAULT_LOCALES_DIR))
    }

    /// Upper bound on a single locale content load. A read that exceeds
    /// this is recorded as a per-language load failure, which keeps the
    /// "all languages attempted" barrier reachable.
    pub fn locale_load_timeout(&self) -> Duration {
        Duration::from_millis(
            self.locale_load_timeout_ms
                .unwrap_or(DEFAULT_LOCALE_LOAD_TIMEOUT_MS),
        )
    }

    /// Location of the persisted-selection store.
    pub fn settings_file(&self) -> PathBuf {
        match &self.settings_file {
            Some(path) => PathBuf::from(path),
            None => crate::storage::FileSettingsStore::default_path(),
        }
    }

    pub fn logging(&self) -> &LoggingConfig {
        &self.logging
    }
}

/// Additional logging configuration
#[derive(Debug, Deserialize, Default, Clone)]
pub struct LoggingConfig {
    level: Option<String>,
    file: Option<String>,
}

impl LoggingConfig {
    pub fn level(&self) -> &str {
        self.level.as_deref().unwrap_or("info")
    }

    pub fn file(&self) -> Option<&str> {
        self.file.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.theme_manifest(), PathBuf::from("data/theme.json"));
        assert_eq!(config.locale_registry(), PathBuf::from("data/config.json"));
        assert_eq!(config.locales_dir(), PathBuf::from("data/locales"));
        assert_eq!(config.locale_load_timeout(), Duration::from_millis(5_000));
        assert_eq!(config.logging().level(), "info");
        assert_eq!(config.logging().file(), None);
    }

    #[test]
    fn test_explicit_values_win() {
        let config: AppConfig = toml::from_str(
            r#"
            theme_manifest = "custom/theme.json"
            locale_load_timeout_ms = 250

            [logging]
            level = "debug"
            "#,
        )
        .expect("valid toml");

        assert_eq!(config.theme_manifest(), PathBuf::from("custom/theme.json"));
        assert_eq!(config.locale_load_timeout(), Duration::from_millis(250));
        assert_eq!(config.logging().level(), "debug");
    }
}
