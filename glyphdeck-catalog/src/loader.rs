//! Catalog loading from the remote API or a bundled JSON file.

use crate::entry::EmojiEntry;
use crate::error::CatalogError;
use std::path::PathBuf;
use std::time::Duration;
use ureq::Agent;
use ureq::tls::{RootCerts, TlsConfig, TlsProvider};

/// Global timeout for catalog fetches (30 seconds). A hung request must not
/// leave the UI waiting forever.
const HTTP_TIMEOUT: Duration = Duration::from_secs(30);

/// Maximum catalog response size (10 MB). The full public catalog is well
/// under 1 MB; anything larger is a misbehaving server.
pub const MAX_CATALOG_RESPONSE_SIZE: u64 = 10 * 1024 * 1024;

/// Where the catalog comes from: the remote "all emojis" endpoint or a
/// local JSON dump of the same array shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogSource {
    Remote(String),
    File(PathBuf),
}

/// Create a new HTTP agent configured with native-tls and a global timeout.
fn agent() -> Agent {
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

/// Load the full catalog from the given source.
///
/// # Errors
///
/// Returns [`CatalogError::Network`] when the remote fetch fails,
/// [`CatalogError::Io`] when a bundled file cannot be read, and
/// [`CatalogError::Parse`] when the data is not the expected entry array.
pub fn load(source: &CatalogSource) -> Result<Vec<EmojiEntry>, CatalogError> {
    match source {
        CatalogSource::Remote(url) => load_remote(url),
        CatalogSource::File(path) => load_file(path),
    }
}

fn load_remote(url: &str) -> Result<Vec<EmojiEntry>, CatalogError> {
    log::info!("Fetching emoji catalog from {url}");
    let text = agent()
        .get(url)
        .header("User-Agent", "glyphdeck")
        .header("Accept", "application/json")
        .call()?
        .into_body()
        .with_config()
        .limit(MAX_CATALOG_RESPONSE_SIZE)
        .read_to_string()?;

    parse_catalog(&text)
}

fn load_file(path: &PathBuf) -> Result<Vec<EmojiEntry>, CatalogError> {
    log::info!("Loading emoji catalog from file {}", path.display());
    let text = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
        path: path.clone(),
        source,
    })?;

    parse_catalog(&text)
}

/// Parse catalog text as an array of [`EmojiEntry`] values.
pub fn parse_catalog(text: &str) -> Result<Vec<EmojiEntry>, CatalogError> {
    let entries: Vec<EmojiEntry> = serde_json::from_str(text)?;
    log::info!("Catalog loaded: {} entries", entries.len());
    Ok(entries)
}
