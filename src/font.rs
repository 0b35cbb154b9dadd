//! Font descriptors shared between display and measurement surfaces.
//!
//! A [`FontSpec`] is what gets copied from the display surface to the
//! measurement surface before every fit, so both lay text out identically.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Font family, mapped onto egui's two built-in families.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum FontFamilyKind {
    #[default]
    Proportional,
    Monospace,
}

impl FontFamilyKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            FontFamilyKind::Proportional => "proportional",
            FontFamilyKind::Monospace => "monospace",
        }
    }
}

/// Size, family and letter spacing of rendered text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FontSpec {
    /// Font size in points
    pub size: f32,
    pub family: FontFamilyKind,
    /// Extra space added after every character, in points
    #[serde(default)]
    pub letter_spacing: f32,
}

impl Default for FontSpec {
    fn default() -> Self {
        Self {
            size: 14.0,
            family: FontFamilyKind::Proportional,
            letter_spacing: 0.0,
        }
    }
}

impl FontSpec {
    pub fn new(size: f32, family: FontFamilyKind) -> Self {
        Self {
            size,
            family,
            letter_spacing: 0.0,
        }
    }

    pub fn monospace(size: f32) -> Self {
        Self::new(size, FontFamilyKind::Monospace)
    }

    pub fn proportional(size: f32) -> Self {
        Self::new(size, FontFamilyKind::Proportional)
    }

    pub fn with_letter_spacing(mut self, letter_spacing: f32) -> Self {
        self.letter_spacing = letter_spacing;
        self
    }

    /// Converts to the egui font identifier used for layout.
    pub fn font_id(&self) -> egui::FontId {
        let family = match self.family {
            FontFamilyKind::Proportional => egui::FontFamily::Proportional,
            FontFamilyKind::Monospace => egui::FontFamily::Monospace,
        };
        egui::FontId::new(self.size, family)
    }

    /// Checks the values a stored or hand-built spec may carry: a finite
    /// positive size and a finite, non-negative letter spacing.
    pub fn validate(&self) -> Result<(), FontSpecError> {
        if !(self.size.is_finite() && self.size > 0.0) {
            return Err(FontSpecError::NonPositiveSize(self.size));
        }
        if !(self.letter_spacing.is_finite() && self.letter_spacing >= 0.0) {
            return Err(FontSpecError::InvalidLetterSpacing(self.letter_spacing));
        }
        Ok(())
    }
}

/// Errors from parsing a font descriptor string.
#[derive(Debug, Error, PartialEq)]
pub enum FontSpecError {
    #[error("empty font descriptor")]
    Empty,
    #[error("font size must look like '14px', got '{0}'")]
    InvalidSize(String),
    #[error("font size must be positive and finite, got {0}")]
    NonPositiveSize(f32),
    #[error("letter spacing must be finite and not negative, got {0}")]
    InvalidLetterSpacing(f32),
    #[error("unknown font family '{0}'")]
    UnknownFamily(String),
}

/// Parses descriptors like `"14px monospace"` or `"12.5px"`.
///
/// Accepted families: `monospace`, `proportional`, `sans-serif`, `serif`.
/// The family defaults to proportional when omitted.
impl FromStr for FontSpec {
    type Err = FontSpecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut tokens = s.split_whitespace();
        let size_token = tokens.next().ok_or(FontSpecError::Empty)?;

        let number = size_token
            .strip_suffix("px")
            .ok_or_else(|| FontSpecError::InvalidSize(size_token.to_string()))?;
        let size: f32 = number
            .parse()
            .map_err(|_| FontSpecError::InvalidSize(size_token.to_string()))?;
        let rest: Vec<&str> = tokens.collect();
        let family = match rest.join(" ").to_ascii_lowercase().as_str() {
            "" | "proportional" | "sans-serif" | "serif" => FontFamilyKind::Proportional,
            "monospace" => FontFamilyKind::Monospace,
            other => return Err(FontSpecError::UnknownFamily(other.to_string())),
        };

        let spec = Self::new(size, family);
        spec.validate()?;
        Ok(spec)
    }
}

impl fmt::Display for FontSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}px {}", self.size, self.family.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_size_and_family() {
        let spec: FontSpec = "14px monospace".parse().unwrap();
        assert_eq!(spec, FontSpec::monospace(14.0));

        let spec: FontSpec = "12.5px".parse().unwrap();
        assert_eq!(spec, FontSpec::proportional(12.5));

        let spec: FontSpec = "  16px   Sans-Serif ".parse().unwrap();
        assert_eq!(spec.family, FontFamilyKind::Proportional);
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!("".parse::<FontSpec>(), Err(FontSpecError::Empty));
        assert_eq!(
            "14pt".parse::<FontSpec>(),
            Err(FontSpecError::InvalidSize("14pt".to_string()))
        );
        assert_eq!("0px".parse::<FontSpec>(), Err(FontSpecError::NonPositiveSize(0.0)));
        assert_eq!(
            "14px cursive".parse::<FontSpec>(),
            Err(FontSpecError::UnknownFamily("cursive".to_string()))
        );
    }

    #[test]
    fn test_display_round_trips() {
        let spec = FontSpec::monospace(13.0);
        let parsed: FontSpec = spec.to_string().parse().unwrap();
        assert_eq!(parsed, spec);
    }

    #[test]
    fn test_letter_spacing_defaults_when_missing() {
        let spec: FontSpec = serde_json::from_str(r#"{"size": 11.0, "family": "Monospace"}"#).unwrap();
        assert_eq!(spec.letter_spacing, 0.0);
        assert_eq!(spec.font_id(), egui::FontId::monospace(11.0));
    }

    #[test]
    fn test_validate_rejects_unusable_values() {
        assert_eq!(FontSpec::default().validate(), Ok(()));
        assert_eq!(FontSpec::monospace(12.0).with_letter_spacing(1.5).validate(), Ok(()));

        assert_eq!(FontSpec::monospace(0.0).validate(), Err(FontSpecError::NonPositiveSize(0.0)));
        assert_eq!(FontSpec::monospace(-3.0).validate(), Err(FontSpecError::NonPositiveSize(-3.0)));
        assert!(FontSpec::monospace(f32::NAN).validate().is_err());
        assert!(FontSpec::monospace(f32::INFINITY).validate().is_err());
        assert_eq!(
            FontSpec::default().with_letter_spacing(-1.0).validate(),
            Err(FontSpecError::InvalidLetterSpacing(-1.0))
        );
    }

    #[test]
    fn test_parse_rejects_infinite_size() {
        assert_eq!(
            "infpx".parse::<FontSpec>(),
            Err(FontSpecError::NonPositiveSize(f32::INFINITY))
        );
    }
}
