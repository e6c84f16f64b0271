use std::path::{Path, PathBuf};

use thiserror::Error;

/// Failure to read the name list at startup.
///
/// Both variants are recoverable: the caller shows a notice and carries on
/// with an empty list.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoadError {
    #[error("List file '{}' not found", .path.display())]
    NotFound { path: PathBuf },

    #[error("Failed to read list file '{}': {message}", .path.display())]
    Unreadable { path: PathBuf, message: String },
}

impl LoadError {
    pub fn path(&self) -> &Path {
        match self {
            LoadError::NotFound { path } | LoadError::Unreadable { path, .. } => path,
        }
    }
}

/// Custom error types for lolaunch
#[derive(Debug, Error)]
pub enum LauncherError {
    #[error("Could not open {target}: {message}")]
    OpenFailed { target: String, message: String },

    #[error("Invalid config file '{}': {message}", .path.display())]
    InvalidConfig { path: PathBuf, message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod error_tests;
