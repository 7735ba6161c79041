use crate::icon::ThemeGlyph;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// Static asset references carried by a theme.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeAssets {
    pub logo: String,
    pub icon: String,
    #[serde(rename = "lucideIcon", default, skip_serializing_if = "Option::is_none")]
    pub lucide_icon: Option<String>,
}

impl ThemeAssets {
    /// Resolved switcher glyph; defaults to `Moon` when the manifest names
    /// nothing (or something unrecognized).
    pub fn glyph(&self) -> ThemeGlyph {
        self.lucide_icon
            .as_deref()
            .map(ThemeGlyph::parse)
            .unwrap_or_default()
    }
}

/// A single theme: its assets plus a flat mapping of CSS custom property
/// names to authored values.
///
/// Every manifest key except `assets` is a CSS variable. Values are either
/// hex colors (converted to HSL triples at propagation time) or raw CSS
/// strings passed through unchanged. The authored key order is preserved.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ThemeDefinition {
    pub assets: ThemeAssets,
    #[serde(flatten)]
    variables: serde_json::Map<String, serde_json::Value>,
}

impl ThemeDefinition {
    /// CSS variable entries in declared order. Non-string values are
    /// skipped rather than rejected.
    pub fn variables(&self) -> impl Iterator<Item = (&str, &str)> {
        self.variables
            .iter()
            .filter_map(|(key, value)| value.as_str().map(|v| (key.as_str(), v)))
    }

    /// Look up a single authored variable value.
    pub fn variable(&self, key: &str) -> Option<&str> {
        self.variables.get(key).and_then(|v| v.as_str())
    }
}

/// The normalized theme registry: an ordered set of theme definitions and a
/// default id guaranteed to be a member of the set.
#[derive(Debug, Clone, PartialEq)]
pub struct ThemeManifest {
    default_theme_id: String,
    themes: Vec<(String, ThemeDefinition)>,
}

impl ThemeManifest {
    /// Build a manifest from already-validated parts.
    ///
    /// Callers (the normalizer and the built-in fallback) must guarantee a
    /// non-empty theme list containing `default_theme_id`.
    pub(crate) fn from_parts(default_theme_id: String, themes: Vec<(String, ThemeDefinition)>) -> Self {
        debug_assert!(themes.iter().any(|(id, _)| *id == default_theme_id));
        Self {
            default_theme_id,
            themes,
        }
    }

    pub fn default_theme_id(&self) -> &str {
        &self.default_theme_id
    }

    /// Theme ids in declared order.
    pub fn theme_ids(&self) -> impl Iterator<Item = &str> {
        self.themes.iter().map(|(id, _)| id.as_str())
    }

    pub fn get(&self, id: &str) -> Option<&ThemeDefinition> {
        self.themes
            .iter()
            .find(|(candidate, _)| candidate == id)
            .map(|(_, definition)| definition)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    pub fn len(&self) -> usize {
        self.themes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.themes.is_empty()
    }

    /// The built-in last-resort manifest: one complete dark theme named
    /// `default`, substituted whenever the external manifest is absent or
    /// malformed beyond repair.
    pub fn builtin_fallback() -> Self {
        BUILTIN_FALLBACK.clone()
    }
}

static BUILTIN_FALLBACK: Lazy<ThemeManifest> = Lazy::new(|| {
    let definition: ThemeDefinition =
        serde_json::from_str(BUILTIN_FALLBACK_THEME).expect("built-in fallback theme is valid");
    ThemeManifest::from_parts("default".to_string(), vec![("default".to_string(), definition)])
});

const BUILTIN_FALLBACK_THEME: &str = r##"{
    "assets": {
        "logo": "/logo.svg",
        "icon": "/logo.svg",
        "lucideIcon": "Moon"
    },
    "background": "#09090b",
    "foreground": "#fafafa",
    "card": "#09090b",
    "card-foreground": "#fafafa",
    "popover": "#09090b",
    "popover-foreground": "#fafafa",
    "primary": "#e7b910",
    "primary-foreground": "#18181b",
    "secondary": "#27272a",
    "secondary-foreground": "#fafafa",
    "muted": "#27272a",
    "muted-foreground": "#a1a1aa",
    "accent": "#db1436",
    "accent-foreground": "#fafafa",
    "destructive": "#7f1d1d",
    "destructive-foreground": "#fafafa",
    "border": "#27272a",
    "input": "#27272a",
    "ring": "#d4d4d8",
    "radius": "0.5rem"
}"##;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_fallback_is_complete() {
        let manifest = ThemeManifest::builtin_fallback();
        assert_eq!(manifest.default_theme_id(), "default");
        assert!(manifest.contains("default"));

        let theme = manifest.get("default").expect("default theme present");
        assert_eq!(theme.assets.icon, "/logo.svg");
        assert_eq!(theme.assets.glyph(), ThemeGlyph::Moon);
        assert_eq!(theme.variable("background"), Some("#09090b"));
        assert_eq!(theme.variable("radius"), Some("0.5rem"));
        assert_eq!(theme.variables().count(), 20);
    }

    #[test]
    fn test_definition_preserves_declared_order() {
        let theme: ThemeDefinition = serde_json::from_str(
            r##"{
                "assets": { "logo": "/l.svg", "icon": "/i.svg" },
                "zeta": "#111111",
                "alpha": "#222222",
                "mid": "1rem"
            }"##,
        )
        .expect("valid theme");

        let keys: Vec<&str> = theme.variables().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["zeta", "alpha", "mid"]);
    }

    #[test]
    fn test_non_string_values_are_skipped() {
        let theme: ThemeDefinition = serde_json::from_str(
            r##"{
                "assets": { "logo": "/l.svg", "icon": "/i.svg" },
                "good": "#ffffff",
                "bad": 42
            }"##,
        )
        .expect("valid theme");

        assert_eq!(theme.variables().count(), 1);
        assert_eq!(theme.variable("bad"), None);
    }
}
