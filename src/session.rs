//! Browser session state machine.
//!
//! Every UI gesture and every completed background task becomes an
//! [`Action`]; [`BrowserState::apply`] is a pure transition from (state,
//! action) to (new state, side-effecting [`Effect`]s). The rendering surface
//! only reads state and emits actions, so the whole favorites/filter/detail
//! flow is testable without a window.

use glyphdeck_catalog::{EmojiEntry, filter};
use glyphdeck_favorites::ImportReport;
use std::collections::BTreeSet;
use std::path::PathBuf;

/// Which collection the card grid shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    /// The whole catalog.
    All,
    /// Only entries the current user has favorited.
    Favorites,
}

/// One input to the state machine: a UI gesture or a completed task.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    CatalogLoaded(Vec<EmojiEntry>),
    CatalogFailed(String),
    FavoritesLoaded(BTreeSet<String>),
    FavoritesFailed(String),
    QueryChanged(String),
    CategoryChanged(String),
    SwitchView(View),
    /// Favorite toggle on a card: add or remove based on displayed state.
    ToggleFavorite(String),
    /// Remove control in the favorites view.
    RemoveFavorite(String),
    OpenDetails(String),
    CloseDetails,
    FavoriteAdded(String),
    FavoriteRemoved(String),
    FavoriteOpFailed { name: String, message: String },
    RefreshRequested,
    ReloadCatalogRequested,
    ImportRequested(PathBuf),
    ImportFinished(Result<ImportReport, String>),
    ExportRequested(PathBuf),
    ExportFinished(Result<(PathBuf, usize), String>),
    DismissBanner,
}

/// A side effect the caller must execute (network or file work).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    LoadCatalog,
    FetchFavorites,
    AddFavorite(String),
    DropFavorite(String),
    ImportFile(PathBuf),
    ExportFile(PathBuf),
}

/// Complete session state: catalog, favorite membership at last sync, the
/// current filter, and transient UI slots.
#[derive(Debug, Clone)]
pub struct BrowserState {
    pub user: String,
    pub catalog: Vec<EmojiEntry>,
    /// Favorite membership as of the last sync. Toggles flip this
    /// optimistically; there is no rollback when the remote call fails, the
    /// failure is surfaced in `banner` instead.
    pub favorites: BTreeSet<String>,
    pub query: String,
    pub category: String,
    pub view: View,
    /// Shared slot holding the entry whose details view is open.
    pub details: Option<EmojiEntry>,
    /// Terminal catalog-load failure; rendered as a placeholder instead of
    /// the card grid.
    pub catalog_error: Option<String>,
    /// Last operation error, shown inline until dismissed or replaced.
    pub banner: Option<String>,
    /// Last operation status line (import/export summaries).
    pub status: Option<String>,
    pub loading_catalog: bool,
    pub syncing_favorites: bool,
}

impl BrowserState {
    /// Fresh session for `user`, plus the initial load effects.
    pub fn new(user: impl Into<String>) -> (Self, Vec<Effect>) {
        let state = Self {
            user: user.into(),
            catalog: Vec::new(),
            favorites: BTreeSet::new(),
            query: String::new(),
            category: filter::ALL_CATEGORIES.to_string(),
            view: View::All,
            details: None,
            catalog_error: None,
            banner: None,
            status: None,
            loading_catalog: true,
            syncing_favorites: true,
        };
        (state, vec![Effect::LoadCatalog, Effect::FetchFavorites])
    }

    /// Apply one action, returning the effects the caller must run.
    pub fn apply(&mut self, action: Action) -> Vec<Effect> {
        match action {
            Action::CatalogLoaded(entries) => {
                self.catalog = entries;
                self.catalog_error = None;
                self.loading_catalog = false;
                Vec::new()
            }
            Action::CatalogFailed(message) => {
                self.catalog_error = Some(message);
                self.loading_catalog = false;
                Vec::new()
            }
            Action::FavoritesLoaded(names) => {
                self.favorites = names;
                self.syncing_favorites = false;
                Vec::new()
            }
            Action::FavoritesFailed(message) => {
                self.syncing_favorites = false;
                self.banner = Some(message);
                Vec::new()
            }
            Action::QueryChanged(query) => {
                self.query = query;
                Vec::new()
            }
            Action::CategoryChanged(category) => {
                self.category = category;
                Vec::new()
            }
            Action::SwitchView(view) => {
                self.view = view;
                Vec::new()
            }
            Action::ToggleFavorite(name) => {
                // Direction follows the currently displayed state; the flip
                // is optimistic and not rolled back on failure.
                if self.favorites.remove(&name) {
                    vec![Effect::DropFavorite(name)]
                } else {
                    self.favorites.insert(name.clone());
                    vec![Effect::AddFavorite(name)]
                }
            }
            Action::RemoveFavorite(name) => {
                self.favorites.remove(&name);
                vec![Effect::DropFavorite(name)]
            }
            Action::OpenDetails(name) => {
                self.details = self.catalog.iter().find(|e| e.name == name).cloned();
                Vec::new()
            }
            Action::CloseDetails => {
                self.details = None;
                Vec::new()
            }
            Action::FavoriteAdded(_) => Vec::new(),
            Action::FavoriteRemoved(_) => {
                // In the favorites view a confirmed removal resynchronizes
                // against the store, replacing the old full-page reload.
                if self.view == View::Favorites {
                    self.syncing_favorites = true;
                    vec![Effect::FetchFavorites]
                } else {
                    Vec::new()
                }
            }
            Action::FavoriteOpFailed { name, message } => {
                self.banner = Some(format!("Favorite update for '{name}' failed: {message}"));
                Vec::new()
            }
            Action::RefreshRequested => {
                self.syncing_favorites = true;
                vec![Effect::FetchFavorites]
            }
            Action::ReloadCatalogRequested => {
                self.catalog_error = None;
                self.loading_catalog = true;
                vec![Effect::LoadCatalog]
            }
            Action::ImportRequested(path) => {
                self.status = Some("Importing favorites...".to_string());
                vec![Effect::ImportFile(path)]
            }
            Action::ImportFinished(Ok(report)) => {
                if !report.is_complete() {
                    self.banner = Some(format!(
                        "{} entries failed to import",
                        report.failed.len()
                    ));
                }
                self.status = Some(report.summary());
                self.syncing_favorites = true;
                vec![Effect::FetchFavorites]
            }
            Action::ImportFinished(Err(message)) => {
                self.status = None;
                self.banner = Some(message);
                Vec::new()
            }
            Action::ExportRequested(path) => {
                self.status = Some("Exporting favorites...".to_string());
                vec![Effect::ExportFile(path)]
            }
            Action::ExportFinished(Ok((path, count))) => {
                self.status = Some(format!(
                    "Exported {} favorites to {}",
                    count,
                    path.display()
                ));
                Vec::new()
            }
            Action::ExportFinished(Err(message)) => {
                self.status = None;
                self.banner = Some(message);
                Vec::new()
            }
            Action::DismissBanner => {
                self.banner = None;
                Vec::new()
            }
        }
    }

    /// The entries the card grid shows under the current filter and view.
    pub fn visible_entries(&self) -> Vec<&EmojiEntry> {
        let mut rows = filter::filter(&self.catalog, &self.query, &self.category);
        if self.view == View::Favorites {
            rows.retain(|e| self.favorites.contains(&e.name));
        }
        rows
    }

    /// Categories for the selector, in catalog order.
    pub fn categories(&self) -> Vec<String> {
        filter::categories(&self.catalog)
    }

    /// Displayed favorite state of a card.
    pub fn is_favorite(&self, name: &str) -> bool {
        self.favorites.contains(name)
    }
}
