use crate::font::FontSpec;

/// The box a label lives in.
///
/// Provides the width available for the label and the full text it should show.
pub trait Container {
    /// Returns the current layout width (zero while layout has not settled)
    fn current_width(&self) -> f32;

    /// Returns the complete label text
    fn full_text(&self) -> &str;
}

/// Scratch surface used to measure candidate strings.
///
/// A measurement surface is owned by exactly one fitter and is mutated on
/// every measurement, so implementations may cache layout state freely.
pub trait MeasureSurface {
    /// Applies the font used by the display surface
    fn set_font(&mut self, font: &FontSpec);

    /// Replaces the text being measured
    fn set_text(&mut self, text: &str);

    /// Returns the width of the current text under the current font
    fn rendered_width(&self) -> f32;

    /// Convenience: set the text and return its width
    fn measure(&mut self, text: &str) -> f32 {
        self.set_text(text);
        self.rendered_width()
    }
}

/// Surface that finally shows the fitted text.
pub trait DisplaySurface {
    /// Returns the font the display renders with
    fn font(&self) -> FontSpec;

    /// Replaces the displayed text
    fn set_text(&mut self, text: &str);
}

impl<M: MeasureSurface + ?Sized> MeasureSurface for Box<M> {
    fn set_font(&mut self, font: &FontSpec) {
        (**self).set_font(font)
    }

    fn set_text(&mut self, text: &str) {
        (**self).set_text(text)
    }

    fn rendered_width(&self) -> f32 {
        (**self).rendered_width()
    }
}
