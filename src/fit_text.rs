//! Label fitting component
//!
//! Owns the full text of one label together with its measurement surface and
//! recomputes the displayed text whenever it is told the available width
//! changed.

use tracing::debug;

use crate::fit::fit;
use crate::font::FontSpec;
use crate::traits::{Container, DisplaySurface, MeasureSurface};

/// One label, its scratch measuring surface, and what it currently shows.
pub struct FitText<M> {
    full: String,
    measure: M,
    displayed: Option<String>,
}

impl<M: std::fmt::Debug> std::fmt::Debug for FitText<M> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FitText")
            .field("full", &self.full)
            .field("displayed", &self.displayed)
            .field("measure", &self.measure)
            .finish()
    }
}

impl<M: MeasureSurface> FitText<M> {
    /// Creates a fitter for `full`. Nothing is displayed until the first
    /// recompute with a settled width.
    pub fn new(full: impl Into<String>, measure: M) -> Self {
        Self {
            full: full.into(),
            measure,
            displayed: None,
        }
    }

    /// Creates a fitter for the full text a container carries.
    pub fn from_container<C: Container + ?Sized>(container: &C, measure: M) -> Self {
        Self::new(container.full_text(), measure)
    }

    /// Returns the complete label
    pub fn full_text(&self) -> &str {
        &self.full
    }

    /// Returns the last fitted text, or `None` before the first settled layout
    pub fn displayed(&self) -> Option<&str> {
        self.displayed.as_deref()
    }

    /// Returns true if the displayed text is an abbreviation
    pub fn is_truncated(&self) -> bool {
        self.displayed.as_deref().is_some_and(|shown| shown != self.full)
    }

    /// Returns the measurement surface
    pub fn measure(&self) -> &M {
        &self.measure
    }

    /// Refits the label for `avail` under `font`.
    ///
    /// Returns true if the displayed text changed. A zero (unsettled) width
    /// leaves the previous text in place.
    pub fn recompute(&mut self, font: &FontSpec, avail: f32) -> bool {
        self.refit(font, avail).unwrap_or(false)
    }

    /// `None` while the width is unsettled, otherwise whether the text changed.
    fn refit(&mut self, font: &FontSpec, avail: f32) -> Option<bool> {
        let Self { full, measure, displayed } = self;

        measure.set_font(font);
        let Some(next) = fit(full, avail, |candidate| measure.measure(candidate)) else {
            debug!(avail, "layout not settled, keeping previous text");
            return None;
        };

        if displayed.as_deref() == Some(next.as_str()) {
            return Some(false);
        }

        debug!(
            avail,
            full_len = full.chars().count(),
            shown_len = next.chars().count(),
            "label refitted"
        );
        *displayed = Some(next);
        Some(true)
    }

    /// Resize callback: syncs the display font onto the measurement surface,
    /// refits against the container width and pushes the result to `display`.
    ///
    /// The display is written on every settled update, even when the text is
    /// unchanged, so a fresh display handed to an already fitted label still
    /// receives its text. Returns true if the display was written.
    pub fn update<C, D>(&mut self, container: &C, display: &mut D) -> bool
    where
        C: Container + ?Sized,
        D: DisplaySurface + ?Sized,
    {
        let font = display.font();
        let avail = container.current_width();
        if self.refit(&font, avail).is_none() {
            return false;
        }
        match self.displayed.as_deref() {
            Some(text) => {
                display.set_text(text);
                true
            }
            None => false,
        }
    }
}
