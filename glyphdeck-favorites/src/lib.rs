//! Remote favorites for glyphdeck.
//!
//! The favorites store is a small JSON-over-HTTP service keyed by user name:
//!
//! - `GET    /favorites/{user}` — array of favorited emoji names
//! - `POST   /favorites/{user}` with `{"name": ...}` — add (idempotent)
//! - `DELETE /favorites/{user}` with `{"name": ...}` — remove (idempotent)
//!
//! The store is the source of truth; this crate keeps no durable copy, only
//! the transient results of the last query. Import and export of favorites
//! files live in [`transfer`].

pub mod client;
pub mod error;
mod http;
pub mod transfer;

pub use client::FavoritesClient;
pub use error::FavoritesError;
pub use transfer::{ExportedFile, ImportReport, TransferError, export_favorites, import_favorites};
