//! Typed error variants for the favorites client.

use thiserror::Error;

/// Errors produced by favorites store operations.
///
/// Every failure is terminal for the triggering operation: there are no
/// retries and no partial results. Callers surface the message inline.
#[derive(Debug, Error)]
pub enum FavoritesError {
    /// The HTTP round trip failed (DNS, connection, TLS, non-2xx response,
    /// or a truncated body read).
    #[error("favorites request failed: {0}")]
    Transport(#[source] Box<ureq::Error>),

    /// The response body was not the JSON the store is expected to return.
    #[error("favorites response is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    /// The configured favorites server URL is unusable.
    #[error("invalid favorites server URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },
}

impl From<ureq::Error> for FavoritesError {
    fn from(e: ureq::Error) -> Self {
        FavoritesError::Transport(Box::new(e))
    }
}
