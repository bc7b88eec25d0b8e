//! Typed error variants for catalog loading.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur when loading or parsing the emoji catalog.
///
/// A failed load is terminal for the load operation but not for the
/// application: callers render a visible error placeholder instead of
/// propagating further.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The remote catalog fetch failed (DNS, connection, TLS, non-2xx
    /// response, or a truncated body read).
    #[error("catalog request failed: {0}")]
    Network(#[source] Box<ureq::Error>),

    /// The response or file contents were not the expected array of emoji
    /// entries.
    #[error("catalog data is not an emoji entry array: {0}")]
    Parse(#[from] serde_json::Error),

    /// A bundled catalog file could not be read.
    #[error("failed to read catalog file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl From<ureq::Error> for CatalogError {
    fn from(e: ureq::Error) -> Self {
        CatalogError::Network(Box::new(e))
    }
}
