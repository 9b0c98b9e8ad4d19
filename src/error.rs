use std::path::PathBuf;
use thiserror::Error;

/// Collection-level failures.
///
/// Per-package problems (missing metadata, unreadable evidence, odd license
/// text) never surface here; they degrade to empty or unknown values on the
/// record instead.
#[derive(Debug, Error)]
pub enum InventoryError {
    #[error("Could not find a site-packages directory under {path}\n\n💡 Hint: pass the site-packages directory or virtual environment path explicitly")]
    SitePackagesNotFound { path: PathBuf },

    #[error("Failed to enumerate packages in {path}: {source}")]
    Enumerate {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid package path: {path}\nReason: {reason}")]
    InvalidPath { path: PathBuf, reason: String },

    #[error("Failed to run Python interpreter {python}: {source}")]
    Interpreter {
        python: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Python interpreter {python} did not report its search path: {reason}")]
    InterpreterOutput { python: PathBuf, reason: String },
}

pub type Result<T> = std::result::Result<T, InventoryError>;
