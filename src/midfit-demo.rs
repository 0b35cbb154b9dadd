//! Middle-ellipsis label demo
//!
//! An egui application showing a list of labels in a resizable side panel.
//! Each label abbreviates itself in the middle (`abc…hij`) to fit its row and
//! refits whenever the panel is resized or the font changes.

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use eframe::egui;
use midfit::FontSpec;
use tracing::info;

mod app;
mod ui;

use app::{AppState, SettingsCoordinator, DEFAULT_LABELS};
use ui::panel_manager::{PanelInteraction, PanelManager};

const LABELS_KEY: &str = "labels";
const FONT_KEY: &str = "font";
const SIDE_PANEL_WIDTH_KEY: &str = "side_panel_width";

/// Main application entry point that initializes logging and launches the demo.
fn main() -> eframe::Result {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .compact()
        .init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([900.0, 480.0])
            .with_title("midfit demo"),
        ..Default::default()
    };

    eframe::run_native(
        "midfit demo",
        options,
        Box::new(|cc| Ok(Box::new(MidfitDemoApp::new(cc)))),
    )
}

/// The demo application. Rendering is delegated to `PanelManager`.
struct MidfitDemoApp {
    state: AppState,
}

impl MidfitDemoApp {
    /// Creates the app with labels, font and layout restored from persistent storage.
    fn new(cc: &eframe::CreationContext) -> Self {
        let default_labels: Vec<String> = DEFAULT_LABELS.iter().map(|s| s.to_string()).collect();
        let labels: Vec<String> = SettingsCoordinator::load_setting_or(cc.storage, LABELS_KEY, default_labels);
        let font: FontSpec = SettingsCoordinator::load_setting_checked(cc.storage, FONT_KEY, FontSpec::default(), |f: &FontSpec| {
            f.validate().is_ok()
        });
        let side_panel_width: f32 = SettingsCoordinator::load_setting_or(cc.storage, SIDE_PANEL_WIDTH_KEY, 260.0);

        info!(labels = labels.len(), %font, "starting demo");

        Self {
            state: AppState::new(&cc.egui_ctx, &labels, font, side_panel_width),
        }
    }

    fn handle_panel_interaction(&mut self, interaction: PanelInteraction, ctx: &egui::Context) {
        match interaction {
            PanelInteraction::AddLabelRequested(text) => {
                self.state.add_label(ctx, &text);
            }
            PanelInteraction::RemoveLabelRequested(index) => {
                self.state.remove_label(index);
            }
        }
    }
}

impl eframe::App for MidfitDemoApp {
    /// Called when the app is being shut down and periodically by eframe.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        SettingsCoordinator::save_setting(storage, LABELS_KEY, &self.state.label_texts());
        SettingsCoordinator::save_setting(storage, FONT_KEY, &self.state.font);
        SettingsCoordinator::save_setting(storage, SIDE_PANEL_WIDTH_KEY, &self.state.side_panel_width);
    }

    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if let Some(interaction) = PanelManager::render_all_panels(ctx, &mut self.state) {
            self.handle_panel_interaction(interaction, ctx);
        }
    }
}
