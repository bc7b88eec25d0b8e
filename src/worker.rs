//! Background execution of session effects.
//!
//! Network and file work must not block the UI thread, so each [`Effect`]
//! runs on its own short-lived thread and reports back over an mpsc channel.
//! Requests are independent and uncancellable; outcomes may arrive in any
//! order, so each carries enough context to be applied on its own.

use crate::session::Effect;
use glyphdeck_catalog::{CatalogSource, EmojiEntry, loader};
use glyphdeck_favorites::{FavoritesClient, ImportReport, transfer};
use std::collections::BTreeSet;
use std::path::PathBuf;
use std::sync::mpsc::{Receiver, Sender, channel};

/// Completion message for one background task. Errors cross the channel as
/// display strings; the state machine only surfaces them.
#[derive(Debug)]
pub enum TaskOutcome {
    Catalog(Result<Vec<EmojiEntry>, String>),
    Favorites(Result<BTreeSet<String>, String>),
    Added {
        name: String,
        result: Result<(), String>,
    },
    Removed {
        name: String,
        result: Result<(), String>,
    },
    Imported(Result<ImportReport, String>),
    Exported(Result<(PathBuf, usize), String>),
}

/// Runs effects on background threads and collects their outcomes.
pub struct Worker {
    tx: Sender<TaskOutcome>,
    rx: Receiver<TaskOutcome>,
    client: FavoritesClient,
    source: CatalogSource,
    in_flight: usize,
}

impl Worker {
    pub fn new(client: FavoritesClient, source: CatalogSource) -> Self {
        let (tx, rx) = channel();
        Self {
            tx,
            rx,
            client,
            source,
            in_flight: 0,
        }
    }

    /// True while any task is still running; the UI keeps repainting to
    /// pick up the outcome.
    pub fn busy(&self) -> bool {
        self.in_flight > 0
    }

    /// Drain every outcome that has arrived since the last poll.
    pub fn poll(&mut self) -> Vec<TaskOutcome> {
        let outcomes: Vec<TaskOutcome> = self.rx.try_iter().collect();
        self.in_flight = self.in_flight.saturating_sub(outcomes.len());
        outcomes
    }

    /// Start one effect. `catalog` is snapshotted for exports, which
    /// cross-reference entries offline.
    pub fn run(&mut self, effect: Effect, catalog: &[EmojiEntry]) {
        self.in_flight += 1;
        let tx = self.tx.clone();
        match effect {
            Effect::LoadCatalog => {
                let source = self.source.clone();
                std::thread::spawn(move || {
                    let result = loader::load(&source).map_err(|e| e.to_string());
                    let _ = tx.send(TaskOutcome::Catalog(result));
                });
            }
            Effect::FetchFavorites => {
                let client = self.client.clone();
                std::thread::spawn(move || {
                    let result = client.list().map_err(|e| e.to_string());
                    let _ = tx.send(TaskOutcome::Favorites(result));
                });
            }
            Effect::AddFavorite(name) => {
                let client = self.client.clone();
                std::thread::spawn(move || {
                    let result = client.add(&name).map_err(|e| e.to_string());
                    let _ = tx.send(TaskOutcome::Added { name, result });
                });
            }
            Effect::DropFavorite(name) => {
                let client = self.client.clone();
                std::thread::spawn(move || {
                    let result = client.remove(&name).map_err(|e| e.to_string());
                    let _ = tx.send(TaskOutcome::Removed { name, result });
                });
            }
            Effect::ImportFile(path) => {
                let client = self.client.clone();
                std::thread::spawn(move || {
                    let result = std::fs::read_to_string(&path)
                        .map_err(|e| format!("failed to read {}: {e}", path.display()))
                        .and_then(|text| {
                            transfer::import_favorites(&text, &client).map_err(|e| e.to_string())
                        });
                    let _ = tx.send(TaskOutcome::Imported(result));
                });
            }
            Effect::ExportFile(path) => {
                let client = self.client.clone();
                let catalog = catalog.to_vec();
                std::thread::spawn(move || {
                    let result = transfer::export_favorites(&client, &catalog)
                        .map_err(|e| e.to_string())
                        .and_then(|exported| {
                            std::fs::write(&path, &exported.contents)
                                .map_err(|e| format!("failed to write {}: {e}", path.display()))
                                .map(|_| (path, exported.entry_count))
                        });
                    let _ = tx.send(TaskOutcome::Exported(result));
                });
            }
        }
    }
}
