//! Asynchronous per-language content loading.
//!
//! Each declared language maps to one `<code>.json` file under the locales
//! directory. Loads are independent and unordered; a failure in one
//! language never prevents the others from loading, and every declared
//! language is attempted even when earlier ones fail. Failures are data
//! ([`LoadFailure`]), never errors thrown past this boundary.

use crate::locale::types::{LanguageDescriptor, LocaleContent};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;
use tokio::sync::oneshot;
use tokio::task::JoinSet;

/// Why a single language's content could not be resolved.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoadFailure {
    #[error("content file not found: {path}")]
    Missing { path: String },

    #[error("failed to read '{path}': {reason}")]
    Io { path: String, reason: String },

    #[error("failed to parse '{path}': {reason}")]
    Parse { path: String, reason: String },

    #[error("load timed out after {millis}ms: {path}")]
    Timeout { path: String, millis: u64 },
}

/// Outcome of one aggregate load: every declared code maps to either its
/// parsed content or an explicit failure.
pub type LoadResults = BTreeMap<String, Result<LocaleContent, LoadFailure>>;

/// Loader for locale content files.
pub struct LocaleLoader {
    dir: PathBuf,
    timeout: Duration,
}

impl LocaleLoader {
    /// A loader reading `<code>.json` files from `dir`, bounding each read
    /// by `timeout` so a hung load degrades to a failure instead of
    /// blocking the aggregate barrier forever.
    pub fn new(dir: impl Into<PathBuf>, timeout: Duration) -> Self {
        Self {
            dir: dir.into(),
            timeout,
        }
    }

    /// Attempt every declared language and report per-language outcomes.
    ///
    /// Idempotent: given unchanged files, repeated calls return the same
    /// results. The returned map always covers exactly the declared codes.
    pub async fn load_all(&self, languages: &[LanguageDescriptor]) -> LoadResults {
        let mut tasks = JoinSet::new();
        for language in languages {
            let code = language.value.clone();
            let path = self.dir.join(format!("{code}.json"));
            let timeout = self.timeout;
            tasks.spawn(async move {
                let result = load_one(&path, timeout).await;
                (code, result)
            });
        }

        let mut results = LoadResults::new();
        while let Some(joined) = tasks.join_next().await {
            match joined {
                Ok((code, result)) => {
                    if let Err(failure) = &result {
                        log::warn!("Locale '{code}' failed to load: {failure}");
                    }
                    results.insert(code, result);
                }
                Err(e) => {
                    log::error!("Locale load task failed to complete: {e}");
                }
            }
        }

        // A panicked or cancelled task still counts as an attempt.
        for language in languages {
            results.entry(language.value.clone()).or_insert_with(|| {
                Err(LoadFailure::Io {
                    path: self
                        .dir
                        .join(format!("{}.json", language.value))
                        .display()
                        .to_string(),
                    reason: "load task aborted".to_string(),
                })
            });
        }

        results
    }
}

async fn load_one(path: &Path, timeout: Duration) -> Result<LocaleContent, LoadFailure> {
    let display_path = path.display().to_string();

    // The read runs on a detached plain thread, not the runtime's blocking
    // pool. Runtime shutdown waits for in-flight blocking tasks, so a read
    // hung on something like a dead mount would stall process exit long
    // after the timeout below already promoted it to a failure.
    let (tx, rx) = oneshot::channel();
    let read_path = path.to_path_buf();
    std::thread::spawn(move || {
        let _ = tx.send(std::fs::read_to_string(read_path));
    });

    let read = match tokio::time::timeout(timeout, rx).await {
        Ok(Ok(read)) => read,
        Ok(Err(_)) => {
            return Err(LoadFailure::Io {
                path: display_path,
                reason: "read thread terminated unexpectedly".to_string(),
            });
        }
        Err(_) => {
            return Err(LoadFailure::Timeout {
                path: display_path,
                millis: timeout.as_millis() as u64,
            });
        }
    };

    let raw = match read {
        Ok(raw) => raw,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(LoadFailure::Missing { path: display_path });
        }
        Err(e) => {
            return Err(LoadFailure::Io {
                path: display_path,
                reason: e.to_string(),
            });
        }
    };

    serde_json::from_str(&raw).map_err(|e| LoadFailure::Parse {
        path: display_path,
        reason: e.to_string(),
    })
}
