use std::fmt::Display;

/// Application-wide error types for the site resolution runtime.
///
/// Failures in discovery and selection are absorbed close to where they
/// happen (see the fallback policies in [`crate::theme`] and
/// [`crate::locale`]); the variants here cover the cases that still need to
/// travel across module boundaries.
///
/// # Error Categories
///
/// - [`Config`] - configuration and manifest loading/validation errors
/// - [`Locale`] - locale registry and content resolution errors
/// - [`Storage`] - persisted-selection store read/write failures
/// - [`Io`] - underlying file system failures
///
/// [`Config`]: AppError::Config
/// [`Locale`]: AppError::Locale
/// [`Storage`]: AppError::Storage
/// [`Io`]: AppError::Io
#[derive(Debug, Clone, PartialEq)]
pub enum AppError {
    /// Configuration loading and validation errors.
    ///
    /// Raised when `config.toml`, the theme manifest, or the locale
    /// registry cannot be loaded or fails validation beyond what the
    /// built-in fallbacks can absorb.
    Config(String),

    /// Locale registry and content resolution errors.
    Locale(String),

    /// Persisted-selection store failures.
    ///
    /// The store is advisory, so callers typically log these and continue
    /// with the configured defaults.
    Storage(String),

    /// File system and I/O operation failures.
    Io(String),
}

impl Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::Config(msg) => write!(f, "Configuration Error: {msg}"),
            AppError::Locale(msg) => write!(f, "Locale Error: {msg}"),
            AppError::Storage(msg) => write!(f, "Storage Error: {msg}"),
            AppError::Io(msg) => write!(f, "I/O Error: {msg}"),
        }
    }
}

impl std::error::Error for AppError {}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::Io(err.to_string())
    }
}

/// Result type alias for application operations
pub type AppResult<T> = Result<T, AppError>;
