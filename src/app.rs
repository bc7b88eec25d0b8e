//! Application shell: owns the session state and the background worker,
//! maps UI gestures and task outcomes to session actions, and runs the
//! returned effects.

use crate::cards_ui::{self, CardAction};
use crate::details_ui::{self, DetailsAction};
use crate::session::{Action, BrowserState, View};
use crate::worker::{TaskOutcome, Worker};
use glyphdeck_catalog::ALL_CATEGORIES;
use glyphdeck_config::Config;
use glyphdeck_favorites::FavoritesClient;
use std::time::Duration;

pub struct GlyphdeckApp {
    state: BrowserState,
    worker: Worker,
}

/// Build the app from config and run the window until it closes.
pub fn run(config: Config) -> anyhow::Result<()> {
    let client = FavoritesClient::new(&config.favorites_url, config.user.clone())?;
    let source = crate::cli::catalog_source(&config);

    let (state, effects) = BrowserState::new(config.user.clone());
    let mut worker = Worker::new(client, source);
    for effect in effects {
        worker.run(effect, &state.catalog);
    }
    let app = GlyphdeckApp { state, worker };

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1080.0, 720.0])
            .with_title("glyphdeck"),
        ..Default::default()
    };
    eframe::run_native("glyphdeck", options, Box::new(move |_cc| Ok(Box::new(app))))
        .map_err(|e| anyhow::anyhow!("failed to run window: {e}"))
}

impl GlyphdeckApp {
    fn dispatch(&mut self, action: Action) {
        for effect in self.state.apply(action) {
            self.worker.run(effect, &self.state.catalog);
        }
    }
}

/// Translate a completed background task into a session action.
fn outcome_action(outcome: TaskOutcome) -> Action {
    match outcome {
        TaskOutcome::Catalog(Ok(entries)) => Action::CatalogLoaded(entries),
        TaskOutcome::Catalog(Err(message)) => Action::CatalogFailed(message),
        TaskOutcome::Favorites(Ok(names)) => Action::FavoritesLoaded(names),
        TaskOutcome::Favorites(Err(message)) => Action::FavoritesFailed(message),
        TaskOutcome::Added {
            name,
            result: Ok(()),
        } => Action::FavoriteAdded(name),
        TaskOutcome::Added {
            name,
            result: Err(message),
        } => Action::FavoriteOpFailed { name, message },
        TaskOutcome::Removed {
            name,
            result: Ok(()),
        } => Action::FavoriteRemoved(name),
        TaskOutcome::Removed {
            name,
            result: Err(message),
        } => Action::FavoriteOpFailed { name, message },
        TaskOutcome::Imported(result) => Action::ImportFinished(result),
        TaskOutcome::Exported(result) => Action::ExportFinished(result),
    }
}

impl eframe::App for GlyphdeckApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        for outcome in self.worker.poll() {
            let action = outcome_action(outcome);
            self.dispatch(action);
        }

        let mut actions: Vec<Action> = Vec::new();

        egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
            ui.add_space(4.0);
            ui.horizontal(|ui| {
                let mut query = self.state.query.clone();
                let response = ui.add(
                    egui::TextEdit::singleline(&mut query)
                        .hint_text("Search emojis")
                        .desired_width(220.0),
                );
                if response.changed() {
                    actions.push(Action::QueryChanged(query));
                }

                let mut category = self.state.category.clone();
                egui::ComboBox::from_id_salt("category_filter")
                    .selected_text(category.clone())
                    .show_ui(ui, |ui| {
                        ui.selectable_value(
                            &mut category,
                            ALL_CATEGORIES.to_string(),
                            ALL_CATEGORIES,
                        );
                        for name in self.state.categories() {
                            ui.selectable_value(&mut category, name.clone(), &name);
                        }
                    });
                if category != self.state.category {
                    actions.push(Action::CategoryChanged(category));
                }

                ui.separator();

                if ui
                    .selectable_label(self.state.view == View::All, "All emojis")
                    .clicked()
                {
                    actions.push(Action::SwitchView(View::All));
                }
                let favorites_label = format!("Favorites ({})", self.state.favorites.len());
                if ui
                    .selectable_label(self.state.view == View::Favorites, favorites_label)
                    .clicked()
                {
                    actions.push(Action::SwitchView(View::Favorites));
                }

                if ui
                    .button("⟳")
                    .on_hover_text("Resync favorites from the store")
                    .clicked()
                {
                    actions.push(Action::RefreshRequested);
                }

                ui.separator();

                if ui.button("Import").clicked()
                    && let Some(path) = rfd::FileDialog::new()
                        .add_filter("JSON", &["json"])
                        .pick_file()
                {
                    actions.push(Action::ImportRequested(path));
                }
                if ui.button("Export").clicked()
                    && let Some(path) = rfd::FileDialog::new()
                        .add_filter("JSON", &["json"])
                        .set_file_name(format!("{}_favorites.json", self.state.user))
                        .save_file()
                {
                    actions.push(Action::ExportRequested(path));
                }

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(
                        egui::RichText::new(format!("user: {}", self.state.user))
                            .color(egui::Color32::GRAY),
                    );
                    if self.worker.busy() {
                        ui.spinner();
                    }
                });
            });
            ui.add_space(4.0);
        });

        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                if let Some(banner) = self.state.banner.clone() {
                    ui.label(
                        egui::RichText::new(banner).color(egui::Color32::from_rgb(255, 100, 100)),
                    );
                    if ui.small_button("✕").clicked() {
                        actions.push(Action::DismissBanner);
                    }
                } else if let Some(ref status) = self.state.status {
                    ui.label(status);
                } else {
                    ui.label(format!("{} emojis", self.state.catalog.len()));
                }
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            if let Some(ref message) = self.state.catalog_error {
                ui.vertical_centered(|ui| {
                    ui.add_space(48.0);
                    ui.label(
                        egui::RichText::new("Could not load the emoji catalog")
                            .strong()
                            .color(egui::Color32::from_rgb(255, 100, 100)),
                    );
                    ui.label(message);
                    if ui.button("Retry").clicked() {
                        actions.push(Action::ReloadCatalogRequested);
                    }
                });
            } else if self.state.loading_catalog {
                ui.centered_and_justified(|ui| {
                    ui.spinner();
                });
            } else {
                let card_action = {
                    let entries = self.state.visible_entries();
                    cards_ui::render(ui, &entries, &self.state.favorites, self.state.view)
                };
                match card_action {
                    CardAction::ToggleFavorite(name) => {
                        actions.push(Action::ToggleFavorite(name))
                    }
                    CardAction::Remove(name) => actions.push(Action::RemoveFavorite(name)),
                    CardAction::OpenDetails(name) => actions.push(Action::OpenDetails(name)),
                    CardAction::None => {}
                }
            }
        });

        if let Some(entry) = self.state.details.clone() {
            match details_ui::render(ctx, &entry, self.state.is_favorite(&entry.name)) {
                DetailsAction::Close => actions.push(Action::CloseDetails),
                DetailsAction::ToggleFavorite(name) => {
                    actions.push(Action::ToggleFavorite(name))
                }
                DetailsAction::None => {}
            }
        }

        for action in actions {
            self.dispatch(action);
        }

        if self.worker.busy() {
            ctx.request_repaint_after(Duration::from_millis(100));
        }
    }
}
