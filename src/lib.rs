//! Vitrine: the resolution core of a client-rendered portfolio site.
//!
//! Two parallel resolvers share one design: discover the available variants
//! of a named resource from static configuration, pick the active one
//! (persisted selection over configured default), expose it through the
//! [`site::Site`] provider, and fall back safely on partial failure. The
//! pattern is applied to two resource kinds:
//!
//! - **Visual themes** ([`theme`]) - a single JSON manifest mapping CSS
//!   custom property names to authored values, resolved synchronously.
//! - **Display locales** ([`locale`]) - a declared language registry with
//!   one content file per language, loaded asynchronously and
//!   independently, including right-to-left layout support.
//!
//! Resolved variants are propagated into a [`document::DocumentEnvironment`]
//! (lang/dir attributes, CSS custom properties, favicon) that consumers
//! read; selections persist across sessions through a [`storage`] store.

pub mod color;
pub mod config;
pub mod document;
pub mod error;
pub mod icon;
pub mod locale;
pub mod logger;
pub mod site;
pub mod storage;
pub mod theme;
pub mod validation;

pub use config::AppConfig;
pub use document::{DocumentEnvironment, TextDirection};
pub use error::{AppError, AppResult};
pub use site::{RenderState, Site};
