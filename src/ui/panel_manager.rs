//! Panel orchestration and layout management.
//!
//! Lays out the header, the resizable label side panel, a details view of
//! what every label currently shows, and the status bar.

use crate::app::AppState;
use crate::ui::{header, label_panel, status_bar};

/// Result of panel interactions that need to be handled by the application.
pub enum PanelInteraction {
    /// User submitted a new label
    AddLabelRequested(String),
    /// User removed a label
    RemoveLabelRequested(usize),
}

/// Manages the layout and rendering of all UI panels.
pub struct PanelManager;

impl PanelManager {
    /// Renders all panels in the application window.
    ///
    /// Called from the eframe::App::update() implementation.
    pub fn render_all_panels(ctx: &egui::Context, state: &mut AppState) -> Option<PanelInteraction> {
        let mut interaction: Option<PanelInteraction> = None;

        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            if let Some(header::HeaderInteraction::AddLabelRequested(text)) = header::render_header(ui, state) {
                interaction = Some(PanelInteraction::AddLabelRequested(text));
            }
        });

        egui::TopBottomPanel::bottom("status_panel").show(ctx, |ui| {
            status_bar::render_status_bar(ui, state);
        });

        let label_frame = egui::Frame::default()
            .inner_margin(egui::Margin::same(4))
            .fill(ctx.style().visuals.panel_fill);

        let side = egui::SidePanel::left("label_panel")
            .default_width(state.side_panel_width)
            .width_range(24.0..=ctx.content_rect().width() * 0.9)
            .resizable(true)
            .frame(label_frame)
            .show(ctx, |ui| {
                ui.heading("Labels");
                ui.separator();

                if let Some(label_panel::LabelPanelInteraction::RemoveRequested(index)) =
                    label_panel::render_label_panel(ui, state)
                {
                    interaction = Some(PanelInteraction::RemoveLabelRequested(index));
                }
            });
        state.side_panel_width = side.response.rect.width();

        // Details: what each label currently shows
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Details");
            ui.separator();
            egui::Grid::new("label_details").striped(true).show(ui, |ui| {
                ui.strong("Chars");
                ui.strong("Shown");
                ui.strong("Full text");
                ui.end_row();

                for label in state.labels() {
                    let full_len = label.full_text().chars().count();
                    let shown_len = label.displayed().chars().count();
                    ui.label(format!("{} / {}", shown_len, full_len));
                    ui.monospace(label.displayed());
                    ui.label(label.full_text());
                    ui.end_row();
                }
            });
        });

        interaction
    }
}
