//! Length units and their conversion to pixels.
//!
//! Absolute units convert at a fixed 96 pixels per inch. The font-relative
//! units (`em`, `ex`) have no fixed pixel size; they are resolved by
//! [`CssLength::compute`](crate::computed::CssLength::compute) once font
//! metrics are known.

use std::fmt;

/// Pixels per inch used for every absolute unit.
pub const PIXELS_PER_INCH: f64 = 96.0;

/// The unit attached to a length value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Dimension {
    /// CSS pixels.
    #[default]
    Px,
    /// Multiple of the element's font size.
    Em,
    /// Multiple of the element's x-height.
    Ex,
    /// Points (1/72 inch).
    Pt,
    /// Millimetres.
    Mm,
    /// Centimetres.
    Cm,
    /// Inches.
    In,
    /// Picas (12 points).
    Pc,
}

impl Dimension {
    /// Pixels per unit, or `None` for font-relative units.
    pub fn pixels_per_unit(self) -> Option<f32> {
        let factor = match self {
            Dimension::Px => 1.0,
            Dimension::Pt => PIXELS_PER_INCH / 72.0,
            Dimension::Mm => PIXELS_PER_INCH / 25.4,
            Dimension::Cm => PIXELS_PER_INCH / 2.54,
            Dimension::In => PIXELS_PER_INCH,
            Dimension::Pc => 12.0 * PIXELS_PER_INCH / 72.0,
            Dimension::Em | Dimension::Ex => return None,
        };
        Some(factor as f32)
    }

    pub fn is_font_relative(self) -> bool {
        matches!(self, Dimension::Em | Dimension::Ex)
    }

    /// Parse a unit suffix such as `"px"` (case-insensitive).
    pub fn from_suffix(suffix: &str) -> Option<Self> {
        match suffix.to_ascii_lowercase().as_str() {
            "px" => Some(Dimension::Px),
            "em" => Some(Dimension::Em),
            "ex" => Some(Dimension::Ex),
            "pt" => Some(Dimension::Pt),
            "mm" => Some(Dimension::Mm),
            "cm" => Some(Dimension::Cm),
            "in" => Some(Dimension::In),
            "pc" => Some(Dimension::Pc),
            _ => None,
        }
    }

    pub fn suffix(self) -> &'static str {
        match self {
            Dimension::Px => "px",
            Dimension::Em => "em",
            Dimension::Ex => "ex",
            Dimension::Pt => "pt",
            Dimension::Mm => "mm",
            Dimension::Cm => "cm",
            Dimension::In => "in",
            Dimension::Pc => "pc",
        }
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.suffix())
    }
}
