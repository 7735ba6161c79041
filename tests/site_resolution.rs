//! End-to-end resolution tests: registries on disk, persisted selections,
//! propagation into the document environment.

use std::path::Path;
use std::sync::Arc;
use vitrine::config::AppConfig;
use vitrine::document::TextDirection;
use vitrine::site::{RenderState, Site};
use vitrine::storage::{
    FileSettingsStore, LANGUAGE_KEY, MemorySettingsStore, SettingsStore, THEME_KEY,
};

const THEME_MANIFEST: &str = r##"{
    "defaultThemeId": "dark",
    "themes": {
        "dark": {
            "assets": { "logo": "/logo.svg", "icon": "/dark.svg", "lucideIcon": "Moon" },
            "background": "#09090b",
            "primary": "#e7b910",
            "radius": "0.5rem"
        },
        "light": {
            "assets": { "logo": "/logo.svg", "icon": "/light.svg", "lucideIcon": "Sun" },
            "background": "#fafafa",
            "primary": "#0066cc",
            "radius": "0.5rem"
        }
    }
}"##;

const LOCALE_REGISTRY: &str = r#"{
    "languages": [
        { "value": "en", "label": "English" },
        { "value": "ar", "label": "العربية", "rtl": true },
        { "value": "de", "label": "Deutsch" }
    ],
    "defaultLanguage": "en"
}"#;

fn write_fixture(root: &Path) -> AppConfig {
    let locales = root.join("locales");
    std::fs::create_dir_all(&locales).expect("create locales dir");
    std::fs::write(root.join("theme.json"), THEME_MANIFEST).expect("write theme manifest");
    std::fs::write(root.join("config.json"), LOCALE_REGISTRY).expect("write locale registry");
    std::fs::write(
        locales.join("en.json"),
        r#"{ "hero": { "title": "Hello" } }"#,
    )
    .expect("write en");
    std::fs::write(
        locales.join("ar.json"),
        r#"{ "hero": { "title": "مرحبا" } }"#,
    )
    .expect("write ar");
    std::fs::write(
        locales.join("de.json"),
        r#"{ "hero": { "title": "Hallo" } }"#,
    )
    .expect("write de");

    AppConfig::with_paths(
        root.join("theme.json").display().to_string(),
        root.join("config.json").display().to_string(),
        locales.display().to_string(),
    )
}

#[tokio::test]
async fn resolves_defaults_and_propagates_environment() {
    let dir = tempfile::tempdir().expect("temp dir");
    let config = write_fixture(dir.path());
    let store = Arc::new(MemorySettingsStore::new());

    let site = Site::initialize(&config, store).await;

    assert_eq!(site.render_state(), RenderState::Ready);
    assert_eq!(site.themes().active_id(), "dark");
    assert_eq!(site.locales().active_id(), "en");

    let env = site.environment();
    assert_eq!(env.lang(), "en");
    assert_eq!(env.dir(), TextDirection::Ltr);
    assert_eq!(env.favicon(), "/dark.svg");
    assert_eq!(env.css_var("--background"), Some("240 10% 3.9%"));
    assert_eq!(env.css_var("--primary"), Some("47 87% 48.4%"));
    assert_eq!(env.css_var("--radius"), Some("0.5rem"));

    assert_eq!(site.translate("hero.title"), Some("Hello"));
}

#[tokio::test]
async fn honors_persisted_selections() {
    let dir = tempfile::tempdir().expect("temp dir");
    let config = write_fixture(dir.path());
    let store = Arc::new(MemorySettingsStore::with_values(&[
        (THEME_KEY, "light"),
        (LANGUAGE_KEY, "ar"),
    ]));

    let site = Site::initialize(&config, store).await;

    assert_eq!(site.themes().active_id(), "light");
    assert_eq!(site.locales().active_id(), "ar");
    assert_eq!(site.environment().dir(), TextDirection::Rtl);
    assert_eq!(site.environment().lang(), "ar");
    assert_eq!(site.environment().favicon(), "/light.svg");
}

#[tokio::test]
async fn reverts_stale_persisted_selections_to_defaults() {
    let dir = tempfile::tempdir().expect("temp dir");
    let config = write_fixture(dir.path());
    let store = Arc::new(MemorySettingsStore::with_values(&[
        (THEME_KEY, "sepia"),
        (LANGUAGE_KEY, "fr"),
    ]));

    let site = Site::initialize(&config, store.clone()).await;

    assert_eq!(site.themes().active_id(), "dark");
    assert_eq!(site.locales().active_id(), "en");
    // The revalidated values are written back to the store.
    assert_eq!(store.get(THEME_KEY), Some("dark".to_string()));
    assert_eq!(store.get(LANGUAGE_KEY), Some("en".to_string()));
}

#[tokio::test]
async fn invalid_selections_are_ignored() {
    let dir = tempfile::tempdir().expect("temp dir");
    let config = write_fixture(dir.path());
    let mut site = Site::initialize(&config, Arc::new(MemorySettingsStore::new())).await;

    let before = site.environment().clone();
    assert!(!site.select_theme("sepia"));
    assert!(!site.select_language("fr"));
    assert_eq!(site.themes().active_id(), "dark");
    assert_eq!(site.locales().active_id(), "en");
    assert_eq!(site.environment(), &before);
}

#[tokio::test]
async fn switching_variants_is_idempotent() {
    let dir = tempfile::tempdir().expect("temp dir");
    let config = write_fixture(dir.path());
    let mut site = Site::initialize(&config, Arc::new(MemorySettingsStore::new())).await;

    assert!(site.select_theme("light"));
    assert!(site.select_language("ar"));
    let once = site.environment().clone();

    assert!(site.select_theme("light"));
    assert!(site.select_language("ar"));
    assert_eq!(site.environment(), &once);
}

#[tokio::test]
async fn rtl_follows_the_descriptor_flag_exactly() {
    let dir = tempfile::tempdir().expect("temp dir");
    let config = write_fixture(dir.path());
    let mut site = Site::initialize(&config, Arc::new(MemorySettingsStore::new())).await;

    assert!(site.select_language("ar"));
    assert_eq!(site.environment().dir(), TextDirection::Rtl);

    assert!(site.select_language("de"));
    assert_eq!(site.environment().dir(), TextDirection::Ltr);
}

#[tokio::test]
async fn missing_theme_manifest_falls_back_to_builtin() {
    let dir = tempfile::tempdir().expect("temp dir");
    let config = write_fixture(dir.path());
    std::fs::remove_file(dir.path().join("theme.json")).expect("remove manifest");

    let site = Site::initialize(&config, Arc::new(MemorySettingsStore::new())).await;

    // The site still renders with the built-in complete theme.
    assert_eq!(site.render_state(), RenderState::Ready);
    assert_eq!(site.themes().available(), vec!["default"]);
    assert_eq!(site.themes().active_id(), "default");
    assert_eq!(site.environment().css_var("--background"), Some("240 10% 3.9%"));
}

#[tokio::test]
async fn selections_survive_across_sessions() {
    let dir = tempfile::tempdir().expect("temp dir");
    let config = write_fixture(dir.path());
    let settings_path = dir.path().join("settings.json");

    {
        let store = Arc::new(FileSettingsStore::open(&settings_path));
        let mut site = Site::initialize(&config, store).await;
        assert!(site.select_theme("light"));
        assert!(site.select_language("de"));
    }

    // A fresh process restores the persisted choices.
    let store = Arc::new(FileSettingsStore::open(&settings_path));
    let site = Site::initialize(&config, store).await;
    assert_eq!(site.themes().active_id(), "light");
    assert_eq!(site.locales().active_id(), "de");
}
