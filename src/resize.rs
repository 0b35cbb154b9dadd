//! Resize notifications for immediate-mode UIs.
//!
//! egui has no layout callbacks, so the width a widget receives is sampled
//! every frame and turned into a notification only when it actually changes.

/// Default tolerance below which width jitter is ignored, in points.
pub const DEFAULT_TOLERANCE: f32 = 0.5;

/// Tracks the last observed width of one container.
#[derive(Debug, Clone)]
pub struct ResizeObserver {
    last_width: Option<f32>,
    tolerance: f32,
}

impl Default for ResizeObserver {
    fn default() -> Self {
        Self::new()
    }
}

impl ResizeObserver {
    pub fn new() -> Self {
        Self::with_tolerance(DEFAULT_TOLERANCE)
    }

    pub fn with_tolerance(tolerance: f32) -> Self {
        Self {
            last_width: None,
            tolerance: tolerance.max(0.0),
        }
    }

    /// Records a width sample.
    ///
    /// Returns `Some(width)` on the very first sample and whenever the width
    /// moved by more than the tolerance since the last notification.
    pub fn observe(&mut self, width: f32) -> Option<f32> {
        let changed = match self.last_width {
            None => true,
            Some(last) => (width - last).abs() > self.tolerance,
        };
        if changed {
            self.last_width = Some(width);
            Some(width)
        } else {
            None
        }
    }

    /// Width of the last notification, if any.
    pub fn last_width(&self) -> Option<f32> {
        self.last_width
    }

    /// Forces the next sample to notify.
    pub fn reset(&mut self) {
        self.last_width = None;
    }
}
