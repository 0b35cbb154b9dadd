//! Centralized application state for the label demo.
//!
//! Groups the fitted labels, the shared font and the text buffers of the
//! header controls.

use midfit::{FitLabelState, FontSpec};
use tracing::info;

/// Labels shown when nothing was persisted yet.
pub const DEFAULT_LABELS: &[&str] = &[
    "quarterly-report-final-v2-reviewed.pdf",
    "/home/user/projects/midfit/src/widget.rs",
    "Middle ellipsis keeps both ends readable",
    "短いラベル",
    "https://example.com/a/very/deeply/nested/resource?with=query&and=more",
];

/// Main application state.
pub struct AppState {
    /// Fitted labels in display order
    labels: Vec<FitLabelState>,

    /// Font shared by every label
    pub font: FontSpec,

    /// Text buffer for the font descriptor input
    pub font_text: String,

    /// Last font descriptor parse error (if any)
    pub font_error: Option<String>,

    /// Text buffer for the "add label" input
    pub new_label_text: String,

    /// Width of the resizable label side panel
    pub side_panel_width: f32,
}

impl AppState {
    /// Creates state for `labels`, measuring through `ctx`'s fonts.
    pub fn new(ctx: &egui::Context, labels: &[String], font: FontSpec, side_panel_width: f32) -> Self {
        Self {
            labels: labels.iter().map(|text| FitLabelState::new(ctx, text.as_str())).collect(),
            font_text: font.to_string(),
            font,
            font_error: None,
            new_label_text: String::new(),
            side_panel_width,
        }
    }

    // ===== Label Queries =====

    pub fn labels(&self) -> &[FitLabelState] {
        &self.labels
    }

    pub fn labels_mut(&mut self) -> &mut [FitLabelState] {
        &mut self.labels
    }

    /// Full texts of all labels, in order (what gets persisted).
    pub fn label_texts(&self) -> Vec<String> {
        self.labels.iter().map(|label| label.full_text().to_string()).collect()
    }

    /// Number of labels currently shown abbreviated.
    pub fn truncated_count(&self) -> usize {
        self.labels.iter().filter(|label| label.is_truncated()).count()
    }

    // ===== Mutations =====

    /// Appends a label; blank input is ignored.
    pub fn add_label(&mut self, ctx: &egui::Context, text: &str) -> bool {
        let text = text.trim();
        if text.is_empty() {
            return false;
        }
        info!(label = text, "adding label");
        self.labels.push(FitLabelState::new(ctx, text));
        true
    }

    /// Removes the label at `index`, if it exists.
    pub fn remove_label(&mut self, index: usize) {
        if index < self.labels.len() {
            let removed = self.labels.remove(index);
            info!(label = removed.full_text(), "removed label");
        }
    }

    /// Parses the font descriptor buffer and applies it on success.
    pub fn apply_font_text(&mut self) {
        match self.font_text.parse::<FontSpec>() {
            Ok(parsed) => {
                self.font = parsed.with_letter_spacing(self.font.letter_spacing);
                self.font_error = None;
            }
            Err(err) => self.font_error = Some(err.to_string()),
        }
    }

    /// Keeps the descriptor buffer in step after slider edits.
    pub fn sync_font_text(&mut self) {
        self.font_text = self.font.to_string();
        self.font_error = None;
    }
}
