//! Locale registry loading and normalization.
//!
//! Mirrors the theme manifest loader's posture: registry problems are
//! absorbed into warnings and fallbacks rather than propagated, so the site
//! always has at least one language. Entries with invalid codes and
//! duplicate codes (first declaration wins) are dropped during
//! normalization.

use crate::locale::types::{LanguageDescriptor, LocaleRegistry};
use crate::locale::validation::LanguageCodeValidator;
use crate::validation::Validator;
use std::path::Path;

/// Load and normalize the locale registry at `path`.
///
/// Never fails: a missing or unparseable file logs a warning and yields the
/// built-in English-only registry.
pub fn load_registry(path: &Path) -> LocaleRegistry {
    let raw = match std::fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(e) => {
            log::warn!(
                "Failed to read locale registry '{}': {e}; using built-in fallback registry",
                path.display()
            );
            return LocaleRegistry::builtin_fallback();
        }
    };

    registry_from_str(&raw)
}

/// Normalize a registry from its raw JSON text.
pub fn registry_from_str(raw: &str) -> LocaleRegistry {
    match serde_json::from_str::<LocaleRegistry>(raw) {
        Ok(registry) => normalize(registry),
        Err(e) => {
            log::warn!("Locale registry is not valid JSON ({e}); using built-in fallback registry");
            LocaleRegistry::builtin_fallback()
        }
    }
}

fn normalize(registry: LocaleRegistry) -> LocaleRegistry {
    let validator = LanguageCodeValidator;

    let mut languages: Vec<LanguageDescriptor> = Vec::new();
    for language in registry.languages {
        if let Err(e) = validator.validate(&language.value) {
            log::warn!("Skipping language entry: {}", e.user_message());
            continue;
        }
        if languages.iter().any(|kept| kept.value == language.value) {
            log::warn!(
                "Skipping duplicate declaration of language '{}'",
                language.value
            );
            continue;
        }
        languages.push(language);
    }

    if languages.is_empty() {
        log::warn!("Locale registry declares no usable languages; using built-in fallback registry");
        return LocaleRegistry::builtin_fallback();
    }

    let default_language = match registry.default_language {
        Some(default) if languages.iter().any(|lang| lang.value == default) => Some(default),
        Some(default) => {
            log::warn!(
                "defaultLanguage '{default}' is not a declared language; defaulting to first language '{}'",
                languages[0].value
            );
            None
        }
        None => None,
    };

    LocaleRegistry {
        languages,
        default_language,
    }
}
