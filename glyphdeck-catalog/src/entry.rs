//! Catalog data model.
//!
//! Mirrors the wire format of the public emoji catalog API: every entry
//! carries a unique `name`, a `category`, a finer-grained `group`, and an
//! ordered list of HTML-entity glyph renderings plus the matching `U+XXXX`
//! code point labels.

use serde::{Deserialize, Serialize};

/// One emoji in the catalog. Immutable once loaded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmojiEntry {
    /// Unique name within the catalog, e.g. `"grinning face"`.
    pub name: String,

    /// Coarse category, e.g. `"smileys and people"`. Drives the category
    /// selector in the UI.
    pub category: String,

    /// Finer-grained group within the category, e.g. `"face positive"`.
    #[serde(default)]
    pub group: String,

    /// Ordered HTML-entity renderings of the glyph, e.g. `["&#128512;"]`.
    /// Never empty in catalog data; the first element is the one shown.
    #[serde(rename = "htmlCode")]
    pub glyph_variants: Vec<String>,

    /// `U+XXXX` code point labels matching `glyph_variants`.
    #[serde(default)]
    pub unicode: Vec<String>,
}

impl EmojiEntry {
    /// The character to display for this entry.
    ///
    /// Decodes the first glyph variant from its HTML-entity form. Falls back
    /// to the raw variant string when it cannot be decoded, and to the empty
    /// string when the variant list is empty (malformed catalog data).
    pub fn display_glyph(&self) -> String {
        self.glyph_variants
            .first()
            .map(|raw| decode_html_entity(raw).unwrap_or_else(|| raw.clone()))
            .unwrap_or_default()
    }
}

/// Decode a single numeric HTML entity (`&#128512;` or `&#x1F600;`) into the
/// character it names.
///
/// Returns `None` for anything that is not exactly one well-formed numeric
/// entity naming a valid Unicode scalar value.
pub fn decode_html_entity(raw: &str) -> Option<String> {
    let body = raw.strip_prefix("&#")?.strip_suffix(';')?;
    let code = if let Some(hex) = body.strip_prefix('x').or_else(|| body.strip_prefix('X')) {
        u32::from_str_radix(hex, 16).ok()?
    } else {
        body.parse::<u32>().ok()?
    };
    char::from_u32(code).map(|c| c.to_string())
}
