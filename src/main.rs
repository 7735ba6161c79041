use clap::Parser;
use std::sync::Arc;
use vitrine::config::AppConfig;
use vitrine::site::{RenderState, Site};
use vitrine::storage::FileSettingsStore;

/// Resolve the site's theme and locale data and print the resulting
/// document environment. Exits non-zero when the active language's content
/// cannot be loaded, so the check is usable in CI against the data files.
#[derive(Debug, Parser)]
#[command(name = "vitrine", version, about)]
struct Args {
    /// Switch to this theme before printing (persisted like any selection)
    #[arg(long)]
    theme: Option<String>,

    /// Switch to this language before printing (persisted like any selection)
    #[arg(long)]
    language: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let config = AppConfig::load()?;
    vitrine::logger::setup_logger(config.logging())?;

    let store = Arc::new(FileSettingsStore::open(config.settings_file()));
    let mut site = Site::initialize(&config, store).await;

    if let Some(theme) = &args.theme {
        if !site.select_theme(theme) {
            log::warn!("--theme '{theme}' is not defined in the manifest; keeping current selection");
        }
    }
    if let Some(language) = &args.language {
        if !site.select_language(language) {
            log::warn!(
                "--language '{language}' is not declared in the registry; keeping current selection"
            );
        }
    }

    print_summary(&site);

    match site.render_state() {
        RenderState::Ready => Ok(()),
        RenderState::ConfigurationError { details, .. } => {
            anyhow::bail!("configuration error: {details}")
        }
        // Unreachable after initialize: the aggregate load barrier has
        // already been crossed.
        RenderState::Loading => anyhow::bail!("locale content still loading"),
    }
}

fn print_summary(site: &Site) {
    let env = site.environment();

    println!("Themes:");
    for id in site.themes().available() {
        let marker = if id == site.themes().active_id() { "*" } else { " " };
        println!("  {marker} {id}");
    }
    println!(
        "  glyph: {}  favicon: {}",
        site.themes().assets().glyph().name(),
        env.favicon()
    );

    println!("Languages:");
    for lang in site.locales().languages() {
        let marker = if lang.value == site.locales().active_id() {
            "*"
        } else {
            " "
        };
        let failed = if site.locales().failure(&lang.value).is_some() {
            " (failed to load)"
        } else {
            ""
        };
        println!("  {marker} {} - {}{failed}", lang.value, lang.label);
    }
    println!("  lang=\"{}\" dir=\"{}\"", env.lang(), env.dir().as_str());

    println!("CSS custom properties ({}):", env.css_vars().len());
    for (name, value) in env.css_vars() {
        println!("  {name}: {value}");
    }
}
