//! Emoji catalog support for glyphdeck.
//!
//! This crate owns the catalog side of the application:
//!
//! - The [`EmojiEntry`] data model and HTML-entity glyph decoding
//! - Loading the catalog from the remote API or a bundled JSON file
//! - The filter engine that derives the visible subset from a search
//!   query and a category selector

pub mod entry;
pub mod error;
pub mod filter;
pub mod loader;

// Re-export main types for convenience
pub use entry::{EmojiEntry, decode_html_entity};
pub use error::CatalogError;
pub use filter::{ALL_CATEGORIES, categories, filter};
pub use loader::{CatalogSource, load, parse_catalog};
