//! Card grid rendering.
//!
//! Renders one interactive card per visible entry and returns the user's
//! action instead of mutating state directly; the caller feeds it into the
//! session state machine.

use crate::session::View;
use glyphdeck_catalog::EmojiEntry;
use std::collections::BTreeSet;

const CARD_WIDTH: f32 = 150.0;
const GLYPH_SIZE: f32 = 40.0;

/// Action produced by one frame of the card grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CardAction {
    /// No card was interacted with this frame.
    None,
    /// Favorite toggle clicked; direction follows displayed state.
    ToggleFavorite(String),
    /// Remove control clicked (favorites view only).
    Remove(String),
    /// Card body or info control clicked.
    OpenDetails(String),
}

/// Render the card grid. Returns at most one action per frame.
pub fn render(
    ui: &mut egui::Ui,
    entries: &[&EmojiEntry],
    favorites: &BTreeSet<String>,
    view: View,
) -> CardAction {
    let mut action = CardAction::None;

    if entries.is_empty() {
        ui.centered_and_justified(|ui| {
            let message = match view {
                View::All => "No emojis match the current filter",
                View::Favorites => "No favorites yet — star an emoji to keep it here",
            };
            ui.label(egui::RichText::new(message).color(egui::Color32::GRAY));
        });
        return action;
    }

    egui::ScrollArea::vertical()
        .auto_shrink([false; 2])
        .show(ui, |ui| {
            ui.horizontal_wrapped(|ui| {
                for entry in entries {
                    let card_action = card(ui, entry, favorites.contains(&entry.name), view);
                    if card_action != CardAction::None {
                        action = card_action;
                    }
                }
            });
        });

    action
}

fn card(ui: &mut egui::Ui, entry: &EmojiEntry, is_favorite: bool, view: View) -> CardAction {
    let mut action = CardAction::None;

    let response = ui
        .group(|ui| {
            ui.set_width(CARD_WIDTH);
            ui.vertical_centered(|ui| {
                ui.label(egui::RichText::new(entry.display_glyph()).size(GLYPH_SIZE));
                ui.label(egui::RichText::new(&entry.name).strong());
                ui.label(
                    egui::RichText::new(&entry.category)
                        .small()
                        .color(egui::Color32::GRAY),
                );
                ui.horizontal(|ui| {
                    let (star, tip) = if is_favorite {
                        ("★", "Remove from favorites")
                    } else {
                        ("☆", "Add to favorites")
                    };
                    if ui.button(star).on_hover_text(tip).clicked() {
                        action = CardAction::ToggleFavorite(entry.name.clone());
                    }
                    if view == View::Favorites {
                        if ui.button("✕").on_hover_text("Remove and resync").clicked() {
                            action = CardAction::Remove(entry.name.clone());
                        }
                        if ui.button("ℹ").on_hover_text("Details").clicked() {
                            action = CardAction::OpenDetails(entry.name.clone());
                        }
                    }
                });
            });
        })
        .response;

    // Clicking the card body (not a control) opens the details view. The
    // buttons above are smaller hit targets, so they win the pointer; the
    // action check keeps a button click from double-firing.
    let body = response.interact(egui::Sense::click());
    if action == CardAction::None && body.clicked() {
        action = CardAction::OpenDetails(entry.name.clone());
    }

    action
}
