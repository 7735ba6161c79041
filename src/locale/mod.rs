//! # Locale System Module
//!
//! Display language resolution for the site. A JSON registry declares the
//! available languages (code, menu label, optional RTL flag); one content
//! file per language holds the translation strings. The active language is
//! switchable at runtime and persisted across sessions.
//!
//! ## Architecture
//!
//! - **[`LocaleManager`]** - selection state, content cache, propagation
//! - **[`LocaleLoader`]** - async per-language content loading
//! - **[`registry`]** - registry loading, normalization and fallback
//! - **Locale Validation** - language code validation at registry load
//!
//! ## Loading model
//!
//! All declared languages are loaded eagerly and independently at startup;
//! the manager stays in `Loading` until every one has been *attempted*
//! (success or failure), and consumers render nothing before that barrier.
//! A language that fails to load stays selectable; the failure is carried
//! as data and, when the failed language is active, surfaces as the site's
//! only user-facing hard error state.

pub mod loader;
pub mod manager;
pub mod registry;
pub mod types;
pub mod validation;

pub use loader::{LoadFailure, LocaleLoader};
pub use manager::{LocaleManager, LocaleState};
pub use types::{LanguageDescriptor, LocaleContent, LocaleRegistry};
