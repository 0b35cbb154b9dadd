//! Status bar UI rendering
//!
//! Shows how many labels are abbreviated at the current width.

use eframe::egui;
use egui::RichText;
use crate::app::AppState;

/// Renders the status panel at the bottom of the window
///
/// # Arguments
/// * `ui` - The egui UI context for drawing
/// * `state` - Reference to application state
pub fn render_status_bar(ui: &mut egui::Ui, state: &AppState) {
    ui.horizontal(|ui| {
        ui.label(RichText::new(format!("Labels: {}", state.labels().len())).strong());
        ui.label(RichText::new("|").strong());

        let truncated = state.truncated_count();
        let text = RichText::new(format!("Abbreviated: {}", truncated)).strong();
        if truncated > 0 {
            ui.label(text.color(egui::Color32::YELLOW));
        } else {
            ui.label(text);
        }

        ui.label(RichText::new("|").strong());
        ui.label(RichText::new(format!("Font: {}", state.font)).strong());
        ui.label(RichText::new(format!("Panel: {:.0}px", state.side_panel_width)).strong());
    });
}
