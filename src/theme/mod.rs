//! # Theme System Module
//!
//! Configuration-driven theming for the site: a JSON manifest declares the
//! available themes, each a flat mapping of CSS custom property names to
//! authored values plus an `assets` record. The active theme is switchable
//! at runtime and persisted across sessions.
//!
//! ## Architecture
//!
//! - **[`ThemeManager`]** - selection state, runtime switching, propagation
//! - **[`manifest`]** - manifest loading, normalization and fallback
//! - **[`ThemeManifest`] / [`ThemeDefinition`]** - the normalized registry
//! - **Theme Validation** - id validation applied during normalization
//!
//! ## Fallback behavior
//!
//! The loader never fails outward. A missing or malformed manifest, an
//! empty theme set, or a `defaultThemeId` pointing at a theme that does not
//! exist all resolve to a built-in complete dark theme, so the site never
//! renders with zero themes. A persisted selection that no longer names a
//! manifest member silently reverts to the default.
//!
//! ## Basic Usage
//!
//! ```no_run
//! use std::sync::Arc;
//! use vitrine::document::DocumentEnvironment;
//! use vitrine::storage::FileSettingsStore;
//! use vitrine::theme::{ThemeManager, manifest};
//!
//! let manifest = manifest::load_manifest(std::path::Path::new("data/theme.json"));
//! let store = Arc::new(FileSettingsStore::open(FileSettingsStore::default_path()));
//! let mut themes = ThemeManager::init(manifest, store);
//!
//! let mut env = DocumentEnvironment::new();
//! themes.apply(&mut env);
//! themes.select("light", &mut env);
//! ```

pub mod manager;
pub mod manifest;
pub mod types;
pub mod validation;

pub use manager::ThemeManager;
pub use types::{ThemeAssets, ThemeDefinition, ThemeManifest};
