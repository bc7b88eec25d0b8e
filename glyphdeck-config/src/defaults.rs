//! Default values for config fields, referenced from serde attributes.

/// Sentinel user identity when none is configured.
pub fn user() -> String {
    "guest".to_string()
}

/// Public "all emojis" catalog endpoint.
pub fn catalog_url() -> String {
    "https://emojihub.yurace.pro/api/all".to_string()
}

/// Favorites store, self-hosted by default.
pub fn favorites_url() -> String {
    "http://localhost:5050".to_string()
}
