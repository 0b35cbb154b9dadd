//! egui label that abbreviates itself in the middle to fit its row.

use egui::{Response, RichText, Ui, Widget};
use tracing::trace;

use crate::fit_text::FitText;
use crate::font::FontSpec;
use crate::measure::GalleyMeasure;
use crate::resize::ResizeObserver;

/// Persistent state of one [`FitLabel`]: the fitter and its resize observer.
///
/// Lives across frames in the application state.
pub struct FitLabelState {
    fit: FitText<GalleyMeasure>,
    observer: ResizeObserver,
    last_font: Option<FontSpec>,
}

impl FitLabelState {
    pub fn new(ctx: &egui::Context, full: impl Into<String>) -> Self {
        Self {
            fit: FitText::new(full, GalleyMeasure::new(ctx)),
            observer: ResizeObserver::new(),
            last_font: None,
        }
    }

    pub fn full_text(&self) -> &str {
        self.fit.full_text()
    }

    /// Text shown on the last frame (empty before layout settles)
    pub fn displayed(&self) -> &str {
        self.fit.displayed().unwrap_or("")
    }

    pub fn is_truncated(&self) -> bool {
        self.fit.is_truncated()
    }

    /// Samples the available width and refits on a resize or font change.
    ///
    /// The font is only remembered once a fit ran against a settled width, so
    /// an unsettled first frame is retried on the next one.
    fn sync(&mut self, font: &FontSpec, avail: f32) {
        let resized = self.observer.observe(avail).is_some();
        let font_changed = self.last_font.as_ref() != Some(font);
        if !resized && !font_changed {
            return;
        }

        trace!(avail, resized, font_changed, "fit label notified");
        self.fit.recompute(font, avail);
        if avail > 0.0 {
            self.last_font = Some(font.clone());
        }
    }
}

/// Single-line label showing as much of its text as the row allows.
///
/// When abbreviated, hovering shows the full text.
///
/// ```ignore
/// ui.add(FitLabel::new(&mut state.label, &state.font));
/// ```
pub struct FitLabel<'a> {
    state: &'a mut FitLabelState,
    font: &'a FontSpec,
}

impl<'a> FitLabel<'a> {
    pub fn new(state: &'a mut FitLabelState, font: &'a FontSpec) -> Self {
        Self { state, font }
    }
}

impl Widget for FitLabel<'_> {
    fn ui(self, ui: &mut Ui) -> Response {
        let avail = ui.available_width();
        self.state.sync(self.font, avail);

        let text = RichText::new(self.state.displayed())
            .font(self.font.font_id())
            .extra_letter_spacing(self.font.letter_spacing);
        let response = ui.add(egui::Label::new(text).wrap_mode(egui::TextWrapMode::Extend));

        if self.state.is_truncated() {
            response.on_hover_text(self.state.full_text())
        } else {
            response
        }
    }
}
