//! Details overlay for a single emoji.
//!
//! Renders an egui modal window for the entry held in the session's details
//! slot, showing the full glyph variant and code point lists alongside a
//! favorite toggle. Returns the user's action.

use glyphdeck_catalog::EmojiEntry;

/// Action returned by the details overlay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DetailsAction {
    /// Overlay is still open, no action taken.
    None,
    /// User closed the overlay.
    Close,
    /// User toggled the favorite state from the overlay.
    ToggleFavorite(String),
}

/// Render the details overlay for `entry`.
pub fn render(ctx: &egui::Context, entry: &EmojiEntry, is_favorite: bool) -> DetailsAction {
    let mut action = DetailsAction::None;

    egui::Window::new("Emoji Details")
        .collapsible(false)
        .resizable(false)
        .default_width(360.0)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.label(egui::RichText::new(entry.display_glyph()).size(72.0));
                ui.heading(&entry.name);
            });
            ui.add_space(8.0);

            ui.label(format!("Category: {}", entry.category));
            if !entry.group.is_empty() {
                ui.label(format!("Group: {}", entry.group));
            }
            if !entry.unicode.is_empty() {
                ui.label(format!("Code points: {}", entry.unicode.join(" ")));
            }
            if entry.glyph_variants.len() > 1 {
                ui.label(format!(
                    "Variants: {}",
                    entry.glyph_variants.join(" ")
                ));
            }

            ui.add_space(12.0);
            ui.separator();
            ui.add_space(4.0);
            ui.horizontal(|ui| {
                let label = if is_favorite {
                    "★ Unfavorite"
                } else {
                    "☆ Favorite"
                };
                if ui.button(label).clicked() {
                    action = DetailsAction::ToggleFavorite(entry.name.clone());
                }
                if ui.button("Close").clicked() {
                    action = DetailsAction::Close;
                }
            });
        });

    action
}
