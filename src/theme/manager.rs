use crate::color::hex_to_hsl_triple;
use crate::document::DocumentEnvironment;
use crate::storage::{SettingsStore, THEME_KEY};
use crate::theme::types::{ThemeAssets, ThemeDefinition, ThemeManifest};
use std::sync::Arc;

/// Theme selection state and propagation.
///
/// Holds the normalized manifest plus the currently active theme id. The
/// active id is always a member of the manifest: initialization validates
/// the persisted selection against the registry, and invalid `select`
/// requests are ignored. The manager is the single writer of the persisted
/// `"theme"` key and the only producer of theme-derived document state.
pub struct ThemeManager {
    manifest: ThemeManifest,
    active: String,
    store: Arc<dyn SettingsStore>,
}

impl ThemeManager {
    /// Resolve the initial selection: the persisted theme id when it is
    /// still a manifest member, otherwise the manifest default.
    pub fn init(manifest: ThemeManifest, store: Arc<dyn SettingsStore>) -> Self {
        let active = match store.get(THEME_KEY) {
            Some(saved) if manifest.contains(&saved) => saved,
            Some(saved) => {
                log::warn!(
                    "Persisted theme '{saved}' is not defined in the manifest; reverting to default '{}'",
                    manifest.default_theme_id()
                );
                manifest.default_theme_id().to_string()
            }
            None => manifest.default_theme_id().to_string(),
        };

        let manager = Self {
            manifest,
            active,
            store,
        };
        manager.persist();
        manager
    }

    /// Theme ids in declared manifest order.
    pub fn available(&self) -> Vec<&str> {
        self.manifest.theme_ids().collect()
    }

    pub fn active_id(&self) -> &str {
        &self.active
    }

    /// The resolved definition of the active theme.
    pub fn definition(&self) -> &ThemeDefinition {
        self.manifest
            .get(&self.active)
            .expect("active theme is always a manifest member")
    }

    pub fn assets(&self) -> &ThemeAssets {
        &self.definition().assets
    }

    /// Switch to `id` and propagate it into `env`.
    ///
    /// Ids not present in the manifest are silently ignored (the selection
    /// state never holds an undefined theme); returns whether the switch
    /// took effect.
    pub fn select(&mut self, id: &str, env: &mut DocumentEnvironment) -> bool {
        if !self.manifest.contains(id) {
            log::debug!("Ignoring selection of unknown theme '{id}'");
            return false;
        }

        self.active = id.to_string();
        self.apply(env);
        self.persist();
        log::info!("Switched to theme '{id}'");
        true
    }

    /// Apply the active theme to the document environment: one CSS custom
    /// property per manifest key (hex values converted to HSL triples,
    /// everything else passed through) plus the favicon. Idempotent.
    pub fn apply(&self, env: &mut DocumentEnvironment) {
        let definition = self.definition();
        for (key, value) in definition.variables() {
            let css_value = if value.starts_with('#') {
                hex_to_hsl_triple(value)
            } else {
                value.to_string()
            };
            env.set_css_var(format!("--{key}"), css_value);
        }
        env.set_favicon(&definition.assets.icon);
    }

    fn persist(&self) {
        if let Err(e) = self.store.set(THEME_KEY, &self.active) {
            log::warn!("Failed to persist theme selection: {e}");
        }
    }
}
