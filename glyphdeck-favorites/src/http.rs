//! HTTP agent and base-URL validation for the favorites client.

use crate::error::FavoritesError;
use std::time::Duration;
use ureq::Agent;
use ureq::tls::{RootCerts, TlsConfig, TlsProvider};

/// Global timeout for all favorites operations (30 seconds).
const HTTP_TIMEOUT: Duration = Duration::from_secs(30);

/// Maximum response body size for favorites API responses (1 MB). The store
/// returns name arrays and tiny status objects; anything larger is a
/// misbehaving server.
pub const MAX_API_RESPONSE_SIZE: u64 = 1024 * 1024;

/// Validate and normalize the favorites server base URL.
///
/// Enforces an `http` or `https` scheme with a host — the store is commonly
/// self-hosted, so plain HTTP to a local server is allowed. The returned URL
/// always has a trailing-slash path so endpoint joins append rather than
/// replace the last path segment.
pub fn validate_base_url(raw: &str) -> Result<url::Url, FavoritesError> {
    let mut parsed = url::Url::parse(raw).map_err(|e| FavoritesError::InvalidUrl {
        url: raw.to_string(),
        reason: e.to_string(),
    })?;

    match parsed.scheme() {
        "http" | "https" => {}
        scheme => {
            return Err(FavoritesError::InvalidUrl {
                url: raw.to_string(),
                reason: format!("unsupported scheme '{scheme}'; only http and https are allowed"),
            });
        }
    }

    if parsed.host_str().is_none() {
        return Err(FavoritesError::InvalidUrl {
            url: raw.to_string(),
            reason: "missing host".to_string(),
        });
    }

    if !parsed.path().ends_with('/') {
        let path = format!("{}/", parsed.path());
        parsed.set_path(&path);
    }

    Ok(parsed)
}

/// Create a new HTTP agent configured with native-tls and a global timeout.
pub fn agent() -> Agent {
    let tls_config = TlsConfig::builder()
        .provider(TlsProvider::NativeTls)
        .root_certs(RootCerts::PlatformVerifier)
        .build();

    Agent::config_builder()
        .tls_config(tls_config)
        .timeout_global(Some(HTTP_TIMEOUT))
        .build()
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_http_and_https() {
        assert!(validate_base_url("http://localhost:5050").is_ok());
        assert!(validate_base_url("https://favorites.example.com").is_ok());
    }

    #[test]
    fn test_normalizes_trailing_slash() {
        let base = validate_base_url("http://localhost:5050").unwrap();
        assert_eq!(base.path(), "/");

        let base = validate_base_url("https://example.com/api").unwrap();
        assert_eq!(base.path(), "/api/");

        // Already-normalized input is left alone
        let base = validate_base_url("https://example.com/api/").unwrap();
        assert_eq!(base.path(), "/api/");
    }

    #[test]
    fn test_rejects_other_schemes() {
        let err = validate_base_url("file:///etc/passwd").unwrap_err();
        assert!(matches!(err, FavoritesError::InvalidUrl { .. }));

        let err = validate_base_url("ftp://example.com").unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("ftp"), "error should name the scheme: {msg}");
    }

    #[test]
    fn test_rejects_unparseable_url() {
        assert!(validate_base_url("not a url at all").is_err());
    }
}
