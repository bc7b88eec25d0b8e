//! Favorites import and export.
//!
//! The interchange format is a JSON array of catalog-entry-shaped objects.
//! Export pretty-prints the current user's favorited entries; import accepts
//! any array whose elements carry at least a `name` field and adds each name
//! to the user's favorites. Import is a union: it never removes names that
//! are already favorited.

use crate::client::FavoritesClient;
use crate::error::FavoritesError;
use glyphdeck_catalog::EmojiEntry;
use serde::Deserialize;
use std::collections::BTreeSet;
use thiserror::Error;

/// Errors produced by import/export operations.
#[derive(Debug, Error)]
pub enum TransferError {
    /// The favorites file was not a JSON array of entries with names.
    #[error("favorites file is not a JSON array of named entries: {0}")]
    Parse(#[from] serde_json::Error),

    /// A favorites store operation failed before any per-name work started
    /// (listing for export; per-name add failures are reported, not raised).
    #[error(transparent)]
    Favorites(#[from] FavoritesError),
}

/// A rendered export, ready to be written wherever the caller chooses.
#[derive(Debug, Clone)]
pub struct ExportedFile {
    /// Conventional file name: `<user>_favorites.json`.
    pub suggested_name: String,
    /// Pretty-printed JSON array of the favorited catalog entries.
    pub contents: String,
    /// Number of entries in the file.
    pub entry_count: usize,
}

/// Outcome of a batch import. Partial failure accumulates here instead of
/// aborting the sequence: names that fail to add are reported alongside the
/// ones that succeeded.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImportReport {
    /// Names successfully added, in file order.
    pub imported: Vec<String>,
    /// `(name, error)` pairs for adds that failed.
    pub failed: Vec<(String, String)>,
}

impl ImportReport {
    /// True when every entry in the file was added.
    pub fn is_complete(&self) -> bool {
        self.failed.is_empty()
    }

    /// One-line human-readable summary.
    pub fn summary(&self) -> String {
        if self.is_complete() {
            format!("Imported {} favorites", self.imported.len())
        } else {
            format!(
                "Imported {} favorites, {} failed",
                self.imported.len(),
                self.failed.len()
            )
        }
    }
}

/// A row of an import file. Only `name` matters; all other fields are
/// ignored.
#[derive(Debug, Deserialize)]
struct ImportRow {
    name: String,
}

/// Render an export of `names` by cross-referencing the catalog.
///
/// Names with no catalog entry are silently dropped — the file format
/// carries full entries, and an unknown name has none.
pub fn render_export(
    catalog: &[EmojiEntry],
    names: &BTreeSet<String>,
    user: &str,
) -> Result<ExportedFile, TransferError> {
    let entries: Vec<&EmojiEntry> = catalog.iter().filter(|e| names.contains(&e.name)).collect();
    let contents = serde_json::to_string_pretty(&entries)?;
    Ok(ExportedFile {
        suggested_name: format!("{user}_favorites.json"),
        contents,
        entry_count: entries.len(),
    })
}

/// Fetch the current user's favorites and render them as an export file.
pub fn export_favorites(
    client: &FavoritesClient,
    catalog: &[EmojiEntry],
) -> Result<ExportedFile, TransferError> {
    let names = client.list()?;
    log::info!(
        "Exporting {} favorites for user '{}'",
        names.len(),
        client.user()
    );
    render_export(catalog, &names, client.user())
}

/// Parse an import file into the sequence of names it carries.
///
/// A parse failure rejects the whole file; no adds are issued.
pub fn parse_import(text: &str) -> Result<Vec<String>, TransferError> {
    let rows: Vec<ImportRow> = serde_json::from_str(text)?;
    Ok(rows.into_iter().map(|row| row.name).collect())
}

/// Import favorites from file text: one sequential `add` per name.
///
/// Adds are issued in file order and awaited one at a time. Failures do not
/// abort the sequence; they accumulate in the returned [`ImportReport`].
pub fn import_favorites(
    text: &str,
    client: &FavoritesClient,
) -> Result<ImportReport, TransferError> {
    let names = parse_import(text)?;
    log::info!(
        "Importing {} favorites for user '{}'",
        names.len(),
        client.user()
    );

    let mut report = ImportReport::default();
    for name in names {
        match client.add(&name) {
            Ok(()) => report.imported.push(name),
            Err(e) => {
                log::warn!("Import of '{name}' failed: {e}");
                report.failed.push((name, e.to_string()));
            }
        }
    }
    Ok(report)
}
