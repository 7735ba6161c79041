use crate::document::{DocumentEnvironment, TextDirection};
use crate::locale::loader::{LoadFailure, LocaleLoader};
use crate::locale::types::{LanguageDescriptor, LocaleContent, LocaleRegistry};
use crate::storage::{LANGUAGE_KEY, SettingsStore};
use std::collections::BTreeMap;
use std::sync::Arc;

/// Lifecycle of the aggregate locale load.
///
/// `Loading` lasts from construction until every declared language has been
/// attempted; consumers render nothing during it so partially translated
/// content never flashes on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LocaleState {
    Loading,
    Ready,
}

/// Locale selection state, content cache and propagation.
///
/// Like the theme manager, the active code is always a registry member and
/// this manager is the single writer of the persisted `"language"` key.
/// Unlike themes, content arrives asynchronously: per-language failures are
/// tracked here, and a failed *active* language is surfaced by the site as
/// an explicit configuration error rather than an empty page.
pub struct LocaleManager {
    registry: LocaleRegistry,
    active: String,
    contents: BTreeMap<String, LocaleContent>,
    failures: BTreeMap<String, LoadFailure>,
    state: LocaleState,
    store: Arc<dyn SettingsStore>,
}

impl LocaleManager {
    /// Resolve the initial selection: the persisted code when it is still
    /// declared, otherwise the configured default (or first declared
    /// language). Content is not loaded yet; the manager starts `Loading`.
    pub fn init(registry: LocaleRegistry, store: Arc<dyn SettingsStore>) -> Self {
        let active = match store.get(LANGUAGE_KEY) {
            Some(saved) if registry.contains(&saved) => saved,
            Some(saved) => {
                log::warn!(
                    "Persisted language '{saved}' is not declared in the registry; reverting to default '{}'",
                    registry.default_code()
                );
                registry.default_code().to_string()
            }
            None => registry.default_code().to_string(),
        };

        let manager = Self {
            registry,
            active,
            contents: BTreeMap::new(),
            failures: BTreeMap::new(),
            state: LocaleState::Loading,
            store,
        };
        manager.persist();
        manager
    }

    /// Run the aggregate load: attempt every declared language, record
    /// per-language outcomes, then transition to `Ready`. This is the
    /// synchronization barrier locale-dependent rendering waits on.
    pub async fn load(&mut self, loader: &LocaleLoader) {
        let results = loader.load_all(&self.registry.languages).await;

        self.contents.clear();
        self.failures.clear();
        for (code, result) in results {
            match result {
                Ok(content) => {
                    self.contents.insert(code, content);
                }
                Err(failure) => {
                    self.failures.insert(code, failure);
                }
            }
        }

        self.state = LocaleState::Ready;
        log::info!(
            "Locale load complete: {} loaded, {} failed",
            self.contents.len(),
            self.failures.len()
        );
    }

    pub fn state(&self) -> LocaleState {
        self.state
    }

    pub fn is_ready(&self) -> bool {
        self.state == LocaleState::Ready
    }

    /// Declared languages in registry order, for menu presentation.
    pub fn languages(&self) -> &[LanguageDescriptor] {
        &self.registry.languages
    }

    pub fn active_id(&self) -> &str {
        &self.active
    }

    /// The descriptor of the active language.
    pub fn descriptor(&self) -> &LanguageDescriptor {
        self.registry
            .descriptor(&self.active)
            .expect("active language is always a registry member")
    }

    /// Text direction of the active language: `Rtl` iff its descriptor
    /// declares `rtl: true`.
    pub fn direction(&self) -> TextDirection {
        if self.descriptor().rtl {
            TextDirection::Rtl
        } else {
            TextDirection::Ltr
        }
    }

    /// Switch to `code` and propagate it into `env`.
    ///
    /// Codes not declared in the registry are silently ignored; returns
    /// whether the switch took effect. Switching to a language whose
    /// content failed to load is allowed; the failure then surfaces
    /// through [`Self::active_failure`].
    pub fn select(&mut self, code: &str, env: &mut DocumentEnvironment) -> bool {
        if !self.registry.contains(code) {
            log::debug!("Ignoring selection of undeclared language '{code}'");
            return false;
        }

        self.active = code.to_string();
        self.apply(env);
        self.persist();
        log::info!("Switched to language '{code}'");
        true
    }

    /// Apply the active language to the document environment: `lang` and
    /// `dir` attributes. Idempotent.
    pub fn apply(&self, env: &mut DocumentEnvironment) {
        env.set_lang(&self.active);
        env.set_dir(self.direction());
    }

    /// Content of the active language, if it loaded.
    pub fn content(&self) -> Option<&LocaleContent> {
        self.contents.get(&self.active)
    }

    /// Recorded failure for a specific language, if any.
    pub fn failure(&self, code: &str) -> Option<&LoadFailure> {
        self.failures.get(code)
    }

    /// Recorded failure for the *active* language. `Some` here means the
    /// render path must show the configuration-error state.
    pub fn active_failure(&self) -> Option<&LoadFailure> {
        self.failures.get(&self.active)
    }

    /// Defensive dotted-path lookup into the active content, e.g.
    /// `lookup("hero.title")`. Missing segments, non-object intermediates
    /// and non-string leaves all yield `None`; dependent UI is simply
    /// omitted.
    pub fn lookup(&self, path: &str) -> Option<&str> {
        let mut node = self.content()?;
        for segment in path.split('.') {
            node = node.get(segment)?;
        }
        node.as_str()
    }

    fn persist(&self) {
        if let Err(e) = self.store.set(LANGUAGE_KEY, &self.active) {
            log::warn!("Failed to persist language selection: {e}");
        }
    }
}
