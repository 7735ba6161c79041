//! The site resolution boundary.
//!
//! [`Site`] is the provider consumers go through: it owns both resource
//! managers, the [`DocumentEnvironment`] they propagate into, and (via the
//! managers) the persisted selection store. Readers receive resolved state
//! through its accessors instead of reaching into shared globals.

use crate::config::AppConfig;
use crate::document::DocumentEnvironment;
use crate::locale::{LocaleLoader, LocaleManager};
use crate::storage::SettingsStore;
use crate::theme::{ThemeManager, manifest};
use std::sync::Arc;

/// What the top-level render path should show.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderState {
    /// The aggregate locale load has not completed; render nothing.
    Loading,
    /// All resolved; render the site.
    Ready,
    /// The active language's content failed to load. The only user-facing
    /// hard error in the system: shown as an explicit screen naming the
    /// offending language and how an operator can fix it, never as a blank
    /// page.
    ConfigurationError { language: String, details: String },
}

/// Resolved site state: themes, locales and the document environment.
pub struct Site {
    themes: ThemeManager,
    locales: LocaleManager,
    env: DocumentEnvironment,
}

impl Site {
    /// Resolve everything: read both registries, restore persisted
    /// selections, load all declared locale content behind the aggregate
    /// barrier, and propagate the resolved variants into the document
    /// environment.
    ///
    /// Never fails: registry problems degrade to built-in fallbacks and
    /// content problems become per-language failures carried in the
    /// returned state.
    pub async fn initialize(config: &AppConfig, store: Arc<dyn SettingsStore>) -> Self {
        let manifest = manifest::load_manifest(&config.theme_manifest());
        let registry = crate::locale::registry::load_registry(&config.locale_registry());

        let mut env = DocumentEnvironment::new();

        let themes = ThemeManager::init(manifest, store.clone());
        themes.apply(&mut env);

        let mut locales = LocaleManager::init(registry, store);
        let loader = LocaleLoader::new(config.locales_dir(), config.locale_load_timeout());
        locales.load(&loader).await;
        locales.apply(&mut env);

        Self {
            themes,
            locales,
            env,
        }
    }

    /// The state the top-level render path must show right now.
    pub fn render_state(&self) -> RenderState {
        if !self.locales.is_ready() {
            return RenderState::Loading;
        }

        if let Some(failure) = self.locales.active_failure() {
            let language = self.locales.active_id().to_string();
            let details = format!(
                "Translations for \"{language}\" could not be loaded: {failure}. \
                Add a \"{language}.json\" content file to the locales directory, \
                or remove \"{language}\" from the language configuration, then reload."
            );
            return RenderState::ConfigurationError { language, details };
        }

        RenderState::Ready
    }

    /// Switch the active theme; invalid ids are ignored.
    pub fn select_theme(&mut self, id: &str) -> bool {
        self.themes.select(id, &mut self.env)
    }

    /// Switch the active language; undeclared codes are ignored.
    pub fn select_language(&mut self, code: &str) -> bool {
        self.locales.select(code, &mut self.env)
    }

    pub fn themes(&self) -> &ThemeManager {
        &self.themes
    }

    pub fn locales(&self) -> &LocaleManager {
        &self.locales
    }

    /// The propagated document environment.
    pub fn environment(&self) -> &DocumentEnvironment {
        &self.env
    }

    /// Defensive translation lookup in the active language, dotted-path
    /// style (`translate("hero.title")`).
    pub fn translate(&self, path: &str) -> Option<&str> {
        self.locales.lookup(path)
    }
}
