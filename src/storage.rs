//! Persisted selection storage.
//!
//! The active theme id and language code survive restarts through a small
//! key/value store. Stored values are advisory caches: they are revalidated
//! against the live registries on every initialization, so a stale or
//! hand-edited entry can never select a variant that no longer exists.

use crate::error::{AppError, AppResult};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// Storage key for the active theme id.
pub const THEME_KEY: &str = "theme";
/// Storage key for the active language code.
pub const LANGUAGE_KEY: &str = "language";

/// Key/value store for persisted variant selections.
///
/// Each resource kind has exactly one writer (its manager); reads may come
/// from anywhere.
pub trait SettingsStore: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> AppResult<()>;
}

/// JSON-file-backed settings store.
///
/// The whole store is one flat JSON object, rewritten on every `set`. The
/// file lives under the user configuration directory by default.
pub struct FileSettingsStore {
    path: PathBuf,
    values: Mutex<HashMap<String, String>>,
}

impl FileSettingsStore {
    /// Open a store at `path`, loading existing values when present.
    ///
    /// A missing file is an empty store; an unreadable or malformed file is
    /// treated the same way after a warning, since persisted selections are
    /// only advisory.
    pub fn open(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref().to_path_buf();
        let values = match std::fs::read_to_string(&path) {
            Ok(raw) => match serde_json::from_str::<HashMap<String, String>>(&raw) {
                Ok(values) => values,
                Err(e) => {
                    log::warn!(
                        "Settings file '{}' is malformed ({e}); starting with empty settings",
                        path.display()
                    );
                    HashMap::new()
                }
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => HashMap::new(),
            Err(e) => {
                log::warn!(
                    "Failed to read settings file '{}': {e}; starting with empty settings",
                    path.display()
                );
                HashMap::new()
            }
        };

        Self {
            path,
            values: Mutex::new(values),
        }
    }

    /// Default store location: `<user config dir>/vitrine/settings.json`,
    /// falling back to the working directory when no config dir exists.
    pub fn default_path() -> PathBuf {
        match dirs::config_dir() {
            Some(dir) => dir.join("vitrine").join("settings.json"),
            None => PathBuf::from(".vitrine-settings.json"),
        }
    }

    fn flush(&self, values: &HashMap<String, String>) -> AppResult<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(|e| {
                    AppError::Storage(format!(
                        "Failed to create settings directory '{}': {e}",
                        parent.display()
                    ))
                })?;
            }
        }

        let raw = serde_json::to_string_pretty(values)
            .map_err(|e| AppError::Storage(format!("Failed to serialize settings: {e}")))?;
        std::fs::write(&self.path, raw).map_err(|e| {
            AppError::Storage(format!(
                "Failed to write settings file '{}': {e}",
                self.path.display()
            ))
        })
    }
}

impl SettingsStore for FileSettingsStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values
            .lock()
            .ok()
            .and_then(|values| values.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> AppResult<()> {
        let mut values = self
            .values
            .lock()
            .map_err(|_| AppError::Storage("Settings store lock poisoned".to_string()))?;
        values.insert(key.to_string(), value.to_string());
        self.flush(&values)
    }
}

/// In-memory settings store for tests and ephemeral sessions.
#[derive(Default)]
pub struct MemorySettingsStore {
    values: Mutex<HashMap<String, String>>,
}

impl MemorySettingsStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Convenience constructor seeding initial key/value pairs.
    pub fn with_values(pairs: &[(&str, &str)]) -> Self {
        let store = Self::new();
        {
            let mut values = store.values.lock().expect("fresh mutex");
            for (k, v) in pairs {
                values.insert((*k).to_string(), (*v).to_string());
            }
        }
        store
    }
}

impl SettingsStore for MemorySettingsStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values
            .lock()
            .ok()
            .and_then(|values| values.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> AppResult<()> {
        let mut values = self
            .values
            .lock()
            .map_err(|_| AppError::Storage("Settings store lock poisoned".to_string()))?;
        values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use claims::assert_ok;

    #[test]
    fn test_file_store_round_trip() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("settings.json");

        let store = FileSettingsStore::open(&path);
        assert_eq!(store.get(THEME_KEY), None);
        assert_ok!(store.set(THEME_KEY, "default"));
        assert_ok!(store.set(LANGUAGE_KEY, "ar"));

        // A fresh handle sees the persisted values.
        let reopened = FileSettingsStore::open(&path);
        assert_eq!(reopened.get(THEME_KEY), Some("default".to_string()));
        assert_eq!(reopened.get(LANGUAGE_KEY), Some("ar".to_string()));
    }

    #[test]
    fn test_file_store_tolerates_malformed_file() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("settings.json");
        std::fs::write(&path, "not json at all").expect("write fixture");

        let store = FileSettingsStore::open(&path);
        assert_eq!(store.get(THEME_KEY), None);
        assert_ok!(store.set(THEME_KEY, "default"));
        assert_eq!(store.get(THEME_KEY), Some("default".to_string()));
    }

    #[test]
    fn test_memory_store_seeding() {
        let store = MemorySettingsStore::with_values(&[(THEME_KEY, "light")]);
        assert_eq!(store.get(THEME_KEY), Some("light".to_string()));
        assert_eq!(store.get(LANGUAGE_KEY), None);
    }
}
