//! Theme manifest loading and normalization.
//!
//! The external manifest is a single JSON file holding every theme, so
//! "loading" a theme later is a plain lookup. Loading here absorbs every
//! failure mode into the built-in fallback rather than propagating errors:
//! the site never renders with zero themes.
//!
//! Normalization rules:
//! - missing or empty `themes` substitutes the built-in manifest wholesale
//! - an explicit `defaultThemeId` that is not a key of `themes` also
//!   substitutes the built-in manifest wholesale
//! - an absent `defaultThemeId` resolves to the first declared theme
//! - entries with invalid ids or undeserializable bodies are skipped

use crate::theme::types::{ThemeDefinition, ThemeManifest};
use crate::theme::validation::ThemeIdValidator;
use crate::validation::Validator;
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Deserialize)]
struct RawManifest {
    #[serde(rename = "defaultThemeId")]
    default_theme_id: Option<String>,
    themes: Option<serde_json::Map<String, serde_json::Value>>,
}

/// Load and normalize the theme manifest at `path`.
///
/// Never fails: a missing or unparseable file logs a warning and yields the
/// built-in fallback manifest.
pub fn load_manifest(path: &Path) -> ThemeManifest {
    let raw = match std::fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(e) => {
            log::warn!(
                "Failed to read theme manifest '{}': {e}; using built-in fallback theme",
                path.display()
            );
            return ThemeManifest::builtin_fallback();
        }
    };

    manifest_from_str(&raw)
}

/// Normalize a manifest from its raw JSON text.
pub fn manifest_from_str(raw: &str) -> ThemeManifest {
    match serde_json::from_str::<RawManifest>(raw) {
        Ok(manifest) => normalize(manifest),
        Err(e) => {
            log::warn!("Theme manifest is not valid JSON ({e}); using built-in fallback theme");
            ThemeManifest::builtin_fallback()
        }
    }
}

fn normalize(raw: RawManifest) -> ThemeManifest {
    let validator = ThemeIdValidator;

    let mut themes: Vec<(String, ThemeDefinition)> = Vec::new();
    for (id, value) in raw.themes.unwrap_or_default() {
        if let Err(e) = validator.validate(&id) {
            log::warn!("Skipping theme entry: {}", e.user_message());
            continue;
        }
        match serde_json::from_value::<ThemeDefinition>(value) {
            Ok(definition) => themes.push((id, definition)),
            Err(e) => {
                log::warn!("Skipping theme '{id}': {e}");
            }
        }
    }

    if themes.is_empty() {
        log::warn!("Theme manifest declares no usable themes; using built-in fallback theme");
        return ThemeManifest::builtin_fallback();
    }

    let default_theme_id = match raw.default_theme_id {
        Some(id) => {
            if themes.iter().any(|(candidate, _)| *candidate == id) {
                id
            } else {
                // A dangling explicit default invalidates the manifest as a
                // whole rather than silently rebinding it.
                log::warn!(
                    "defaultThemeId '{id}' is not a declared theme; using built-in fallback theme"
                );
                return ThemeManifest::builtin_fallback();
            }
        }
        None => {
            let first = themes[0].0.clone();
            log::info!("Theme manifest has no defaultThemeId; defaulting to first theme '{first}'");
            first
        }
    };

    ThemeManifest::from_parts(default_theme_id, themes)
}
