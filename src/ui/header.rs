//! Header panel UI rendering
//!
//! Font controls (descriptor, size, letter spacing) and the "add label" input.

use eframe::egui;
use egui::Color32;
use midfit::FontFamilyKind;
use crate::app::AppState;

/// Result of user interaction with the header panel
pub enum HeaderInteraction {
    /// User submitted a new label
    AddLabelRequested(String),
}

/// Renders the header with font controls and the label input
///
/// # Arguments
/// * `ui` - The egui UI context for drawing
/// * `state` - Mutable reference to application state
///
/// # Returns
/// * `Option<HeaderInteraction>` - User interaction result
pub fn render_header(ui: &mut egui::Ui, state: &mut AppState) -> Option<HeaderInteraction> {
    let mut interaction = None;

    ui.horizontal(|ui| {
        ui.label("Font:");
        let response = ui.add(egui::TextEdit::singleline(&mut state.font_text).desired_width(140.0));
        if response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
            state.apply_font_text();
        }

        let mut slider_changed = false;
        slider_changed |= ui
            .add(egui::Slider::new(&mut state.font.size, 6.0..=48.0).text("size"))
            .changed();
        slider_changed |= ui
            .add(egui::Slider::new(&mut state.font.letter_spacing, 0.0..=8.0).text("spacing"))
            .changed();

        let mut monospace = state.font.family == FontFamilyKind::Monospace;
        if ui.checkbox(&mut monospace, "Monospace").changed() {
            state.font.family = if monospace {
                FontFamilyKind::Monospace
            } else {
                FontFamilyKind::Proportional
            };
            slider_changed = true;
        }

        if slider_changed {
            state.sync_font_text();
        }

        if let Some(error) = &state.font_error {
            ui.label(egui::RichText::new(error).color(Color32::RED));
        }
    });

    ui.horizontal(|ui| {
        ui.label("New label:");
        let response = ui.add(egui::TextEdit::singleline(&mut state.new_label_text).desired_width(320.0));
        let submitted = response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
        if ui.button("➕ Add").clicked() || submitted {
            let text = std::mem::take(&mut state.new_label_text);
            interaction = Some(HeaderInteraction::AddLabelRequested(text));
        }
    });

    interaction
}
