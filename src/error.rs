use std::path::PathBuf;

use thiserror::Error;

/// Startup errors for placepick
///
/// Provider failures never surface here: the widget degrades to showing no
/// suggestions instead (see `places::PlacesError`).
#[derive(Debug, Error)]
pub enum PlacepickError {
    #[error("Failed to read config {}: {source}", .path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config {}: {message}", .path.display())]
    ConfigParse { path: PathBuf, message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod error_tests;
