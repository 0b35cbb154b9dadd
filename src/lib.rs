pub mod traits;
pub mod fit;
pub mod fit_text;
pub mod font;
pub mod measure;
pub mod resize;
pub mod widget;
pub mod config;

// Export surface traits
pub use traits::{Container, DisplaySurface, MeasureSurface};

// Export the fitting algorithm
pub use fit::{fit, truncate_middle, split_truncation, max_half_length, ELLIPSIS};

// Export the fitting component
pub use fit_text::FitText;

// Export font descriptors
pub use font::{FontSpec, FontFamilyKind, FontSpecError};

// Export measurement surfaces
pub use measure::{GalleyMeasure, FixedAdvanceMeasure};

// Export resize detection and the egui widget
pub use resize::ResizeObserver;
pub use widget::{FitLabel, FitLabelState};

// Export CLI configuration
pub use config::FitConfig;
