//! Document environment state.
//!
//! [`DocumentEnvironment`] models the ambient document surface the resolved
//! theme and locale are propagated into: the `lang` and `dir` attributes,
//! the CSS custom properties on the root element, and the favicon href.
//! It is a plain value owned by the [`crate::site::Site`] boundary and
//! handed to consumers by reference; nothing else in the crate mutates it.
//! All setters are idempotent, so re-applying the same resolved variant
//! leaves the environment observably unchanged.

use std::collections::BTreeMap;

/// Text direction for the document `dir` attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextDirection {
    #[default]
    Ltr,
    Rtl,
}

impl TextDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            TextDirection::Ltr => "ltr",
            TextDirection::Rtl => "rtl",
        }
    }
}

/// The ambient document state produced by environment propagation.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DocumentEnvironment {
    lang: String,
    dir: TextDirection,
    css_vars: BTreeMap<String, String>,
    favicon: String,
}

impl DocumentEnvironment {
    pub fn new() -> Self {
        Self::default()
    }

    /// The document `lang` attribute.
    pub fn lang(&self) -> &str {
        &self.lang
    }

    pub fn set_lang(&mut self, lang: &str) {
        self.lang = lang.to_string();
    }

    /// The document `dir` attribute.
    pub fn dir(&self) -> TextDirection {
        self.dir
    }

    pub fn set_dir(&mut self, dir: TextDirection) {
        self.dir = dir;
    }

    /// Look up a CSS custom property by its full name (e.g. `--primary`).
    pub fn css_var(&self, name: &str) -> Option<&str> {
        self.css_vars.get(name).map(String::as_str)
    }

    pub fn set_css_var(&mut self, name: String, value: String) {
        self.css_vars.insert(name, value);
    }

    /// All currently set CSS custom properties.
    pub fn css_vars(&self) -> &BTreeMap<String, String> {
        &self.css_vars
    }

    pub fn favicon(&self) -> &str {
        &self.favicon
    }

    pub fn set_favicon(&mut self, href: &str) {
        self.favicon = href.to_string();
    }
}
