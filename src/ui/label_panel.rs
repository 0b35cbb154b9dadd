//! Label list rendering
//!
//! One row per label: a remove button followed by a [`FitLabel`] that takes
//! the rest of the row and abbreviates itself when the panel is resized.

use eframe::egui;
use midfit::FitLabel;
use crate::app::AppState;

/// Result of user interaction with the label list
pub enum LabelPanelInteraction {
    /// Remove button of the label at this index was clicked
    RemoveRequested(usize),
}

/// Renders every label in a scrollable list
///
/// # Arguments
/// * `ui` - The egui UI context for drawing
/// * `state` - Mutable reference to application state
///
/// # Returns
/// * `Option<LabelPanelInteraction>` - User interaction result
pub fn render_label_panel(ui: &mut egui::Ui, state: &mut AppState) -> Option<LabelPanelInteraction> {
    let mut interaction = None;
    let font = state.font.clone();

    if state.labels().is_empty() {
        ui.label(egui::RichText::new("No labels").weak());
        return None;
    }

    egui::ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui| {
            for (index, label) in state.labels_mut().iter_mut().enumerate() {
                ui.horizontal(|ui| {
                    if ui.small_button("✕").on_hover_text("Remove label").clicked() {
                        interaction = Some(LabelPanelInteraction::RemoveRequested(index));
                    }
                    ui.add(FitLabel::new(label, &font));
                });
            }
        });

    interaction
}
