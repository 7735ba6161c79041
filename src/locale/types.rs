use once_cell::sync::Lazy;
use serde::Deserialize;

/// One declared display language.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LanguageDescriptor {
    /// Language code, also the content file stem (`<value>.json`).
    pub value: String,
    /// Human-readable menu label.
    pub label: String,
    /// Right-to-left text direction.
    #[serde(default)]
    pub rtl: bool,
}

/// The declared language registry. Declaration order defines menu
/// presentation order; `value` is unique across the sequence.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LocaleRegistry {
    pub languages: Vec<LanguageDescriptor>,
    #[serde(rename = "defaultLanguage")]
    pub default_language: Option<String>,
}

/// Translation content for one language: an arbitrarily nested JSON value,
/// opaque to the resolver. Consumers navigate it defensively.
pub type LocaleContent = serde_json::Value;

impl LocaleRegistry {
    /// Declared language codes in order.
    pub fn codes(&self) -> impl Iterator<Item = &str> {
        self.languages.iter().map(|lang| lang.value.as_str())
    }

    pub fn contains(&self, code: &str) -> bool {
        self.languages.iter().any(|lang| lang.value == code)
    }

    pub fn descriptor(&self, code: &str) -> Option<&LanguageDescriptor> {
        self.languages.iter().find(|lang| lang.value == code)
    }

    /// The configured default language when it is declared, otherwise the
    /// first declared language.
    ///
    /// The registry is never empty: loading substitutes the built-in
    /// fallback before an empty registry can exist.
    pub fn default_code(&self) -> &str {
        if let Some(default) = &self.default_language {
            if self.contains(default) {
                return default;
            }
        }
        &self.languages[0].value
    }

    /// Built-in last-resort registry: English only.
    pub fn builtin_fallback() -> Self {
        BUILTIN_FALLBACK.clone()
    }
}

static BUILTIN_FALLBACK: Lazy<LocaleRegistry> = Lazy::new(|| LocaleRegistry {
    languages: vec![LanguageDescriptor {
        value: "en".to_string(),
        label: "English".to_string(),
        rtl: false,
    }],
    default_language: Some("en".to_string()),
});
