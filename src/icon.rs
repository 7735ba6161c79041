//! Theme glyph identifiers.
//!
//! Theme manifests may name a decorative glyph for the theme switcher via
//! `assets.lucideIcon`. The supported set is a closed enumeration and the
//! lookup is total: unrecognized names resolve to [`ThemeGlyph::Moon`]
//! instead of failing or falling back to any dynamic name-to-asset lookup.

/// Glyphs a theme may reference from its manifest.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeGlyph {
    Moon,
    Sun,
    Monitor,
    Palette,
    Sparkles,
    Star,
}

impl ThemeGlyph {
    /// Resolve a manifest glyph name. Total; unknown names map to `Moon`.
    pub fn parse(name: &str) -> Self {
        match name {
            "Moon" => ThemeGlyph::Moon,
            "Sun" => ThemeGlyph::Sun,
            "Monitor" => ThemeGlyph::Monitor,
            "Palette" => ThemeGlyph::Palette,
            "Sparkles" => ThemeGlyph::Sparkles,
            "Star" => ThemeGlyph::Star,
            _ => ThemeGlyph::Moon,
        }
    }

    /// The manifest-facing name of the glyph.
    pub fn name(&self) -> &'static str {
        match self {
            ThemeGlyph::Moon => "Moon",
            ThemeGlyph::Sun => "Sun",
            ThemeGlyph::Monitor => "Monitor",
            ThemeGlyph::Palette => "Palette",
            ThemeGlyph::Sparkles => "Sparkles",
            ThemeGlyph::Star => "Star",
        }
    }
}

impl Default for ThemeGlyph {
    fn default() -> Self {
        ThemeGlyph::Moon
    }
}
