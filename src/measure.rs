//! Measurement surface implementations
//!
//! - [`GalleyMeasure`] lays text out with egui's font system (pixels)
//! - [`FixedAdvanceMeasure`] counts terminal cells (columns, or pixels for a
//!   fixed-pitch font with known advance)

use std::sync::Arc;

use egui::text::{LayoutJob, TextFormat};
use unicode_width::UnicodeWidthChar;

use crate::font::FontSpec;
use crate::traits::MeasureSurface;

/// Measures text by laying it out on an off-screen egui painter.
///
/// Layout goes through egui's galley cache, so re-measuring the same candidate
/// across frames is cheap.
pub struct GalleyMeasure {
    painter: egui::Painter,
    font: FontSpec,
    text: String,
}

impl GalleyMeasure {
    /// Creates a scratch painter on the background layer of `ctx`.
    pub fn new(ctx: &egui::Context) -> Self {
        let painter = egui::Painter::new(ctx.clone(), egui::LayerId::background(), egui::Rect::EVERYTHING);
        Self {
            painter,
            font: FontSpec::default(),
            text: String::new(),
        }
    }

    pub fn font(&self) -> &FontSpec {
        &self.font
    }

    fn layout(&self) -> Arc<egui::Galley> {
        let format = TextFormat {
            font_id: self.font.font_id(),
            extra_letter_spacing: self.font.letter_spacing,
            color: egui::Color32::WHITE,
            ..Default::default()
        };
        // Default wrap width is unbounded, so this never breaks lines
        let job = LayoutJob::single_section(self.text.clone(), format);
        self.painter.layout_job(job)
    }
}

impl MeasureSurface for GalleyMeasure {
    fn set_font(&mut self, font: &FontSpec) {
        if &self.font != font {
            self.font = font.clone();
        }
    }

    fn set_text(&mut self, text: &str) {
        self.text.clear();
        self.text.push_str(text);
    }

    fn rendered_width(&self) -> f32 {
        if self.text.is_empty() {
            return 0.0;
        }
        self.layout().size().x
    }
}

/// Measures text as display cells times a fixed advance.
///
/// Wide characters (CJK, most emoji) count as two cells, combining marks and
/// control characters as zero. With the default advance of 1.0 the width is
/// the number of terminal columns.
#[derive(Debug, Clone)]
pub struct FixedAdvanceMeasure {
    advance: f32,
    letter_spacing: f32,
    cells: usize,
    chars: usize,
}

impl Default for FixedAdvanceMeasure {
    fn default() -> Self {
        Self::new(1.0)
    }
}

impl FixedAdvanceMeasure {
    pub fn new(advance: f32) -> Self {
        Self {
            advance,
            letter_spacing: 0.0,
            cells: 0,
            chars: 0,
        }
    }

    /// Returns the width of one cell
    pub fn advance(&self) -> f32 {
        self.advance
    }
}

impl MeasureSurface for FixedAdvanceMeasure {
    /// Only letter spacing is taken from the font; the advance is fixed at
    /// construction.
    fn set_font(&mut self, font: &FontSpec) {
        self.letter_spacing = font.letter_spacing;
    }

    fn set_text(&mut self, text: &str) {
        self.cells = text.chars().map(|c| c.width().unwrap_or(0)).sum();
        self.chars = text.chars().count();
    }

    fn rendered_width(&self) -> f32 {
        self.cells as f32 * self.advance + self.chars as f32 * self.letter_spacing
    }
}
