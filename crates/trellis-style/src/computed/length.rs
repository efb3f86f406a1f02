use std::fmt;

use crate::Style;
use crate::types::{Dimension, StyleValue};

/// Font metrics needed to resolve `em` and `ex` lengths.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FontMetrics {
    pub em_size: f32,
    pub ex_size: f32,
}

impl FontMetrics {
    pub fn new(em_size: f32, ex_size: f32) -> Self {
        Self { em_size, ex_size }
    }

    /// Metrics for a font size when no x-height is known (ex = em / 2).
    pub fn from_em(em_size: f32) -> Self {
        Self::new(em_size, em_size * 0.5)
    }
}

impl Default for FontMetrics {
    fn default() -> Self {
        Self::from_em(16.0)
    }
}

/// A length together with its unit.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CssLength {
    pub value: f32,
    pub unit: Dimension,
}

impl CssLength {
    pub fn new(value: f32, unit: Dimension) -> Self {
        Self { value, unit }
    }

    pub fn px(value: f32) -> Self {
        Self::new(value, Dimension::Px)
    }

    /// Extract a length from a stored value.
    pub fn from_value(value: &StyleValue) -> Option<Self> {
        match value {
            StyleValue::Length(v, unit) => Some(Self::new(*v, *unit)),
            // Unitless zero is a valid length.
            StyleValue::Number(v) if *v == 0.0 => Some(Self::px(0.0)),
            _ => None,
        }
    }

    /// Convert to pixels using the font sizes of the element.
    pub fn compute(self, em_size: f32, ex_size: f32) -> CssLength {
        let px = match self.unit {
            Dimension::Em => self.value * em_size,
            Dimension::Ex => self.value * ex_size,
            unit => self.value * unit.pixels_per_unit().unwrap_or(1.0),
        };
        CssLength::px(px)
    }

    pub fn to_px(self, metrics: &FontMetrics) -> f32 {
        self.compute(metrics.em_size, metrics.ex_size).value
    }
}

impl fmt::Display for CssLength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.value, self.unit)
    }
}

/// Length of a property in pixels, including `em`/`ex`.
///
/// This is the post-processing step [`Style::length`] leaves to its caller.
pub fn computed_length(style: &Style, property_name: &str, metrics: &FontMetrics) -> f32 {
    style
        .value(property_name)
        .and_then(CssLength::from_value)
        .map(|length| length.to_px(metrics))
        .unwrap_or(0.0)
}
