//! The discriminated value held by a style property.

use std::fmt;

use super::{Colorf, Dimension, ImageHandle};

/// The kind of value a property currently holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum StyleValueType {
    #[default]
    Undefined,
    Keyword,
    String,
    Url,
    Length,
    Percentage,
    Number,
    Color,
    Image,
}

/// A single typed property value.
///
/// The variant is the tag; each variant carries only the payload that is
/// meaningful for it, so two payloads can never be live at once.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum StyleValue {
    /// No value. Installing this into a store removes the property.
    #[default]
    Undefined,
    Keyword(String),
    String(String),
    Url(String),
    Length(f32, Dimension),
    /// Percentage as written, so `50%` is stored as `50.0`.
    Percentage(f32),
    Number(f32),
    Color(Colorf),
    Image(ImageHandle),
}

impl StyleValue {
    pub fn keyword(text: impl Into<String>) -> Self {
        StyleValue::Keyword(text.into())
    }

    pub fn string(text: impl Into<String>) -> Self {
        StyleValue::String(text.into())
    }

    pub fn url(text: impl Into<String>) -> Self {
        StyleValue::Url(text.into())
    }

    pub fn length(value: f32, dimension: Dimension) -> Self {
        StyleValue::Length(value, dimension)
    }

    pub fn px(value: f32) -> Self {
        StyleValue::Length(value, Dimension::Px)
    }

    pub fn percentage(value: f32) -> Self {
        StyleValue::Percentage(value)
    }

    pub fn number(value: f32) -> Self {
        StyleValue::Number(value)
    }

    pub fn color(color: Colorf) -> Self {
        StyleValue::Color(color)
    }

    pub fn image(image: ImageHandle) -> Self {
        StyleValue::Image(image)
    }

    pub fn value_type(&self) -> StyleValueType {
        match self {
            StyleValue::Undefined => StyleValueType::Undefined,
            StyleValue::Keyword(_) => StyleValueType::Keyword,
            StyleValue::String(_) => StyleValueType::String,
            StyleValue::Url(_) => StyleValueType::Url,
            StyleValue::Length(..) => StyleValueType::Length,
            StyleValue::Percentage(_) => StyleValueType::Percentage,
            StyleValue::Number(_) => StyleValueType::Number,
            StyleValue::Color(_) => StyleValueType::Color,
            StyleValue::Image(_) => StyleValueType::Image,
        }
    }

    pub fn is_undefined(&self) -> bool {
        matches!(self, StyleValue::Undefined)
    }

    /// Whether this is the given keyword, e.g. `inherit`.
    pub fn is_keyword(&self, keyword: &str) -> bool {
        matches!(self, StyleValue::Keyword(k) if k == keyword)
    }
}

impl fmt::Display for StyleValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StyleValue::Undefined => Ok(()),
            StyleValue::Keyword(k) => f.write_str(k),
            StyleValue::String(s) => write!(f, "\"{s}\""),
            StyleValue::Url(u) => write!(f, "url({u})"),
            StyleValue::Length(v, d) => write!(f, "{v}{d}"),
            StyleValue::Percentage(p) => write!(f, "{p}%"),
            StyleValue::Number(n) => write!(f, "{n}"),
            StyleValue::Color(c) => write!(f, "{c}"),
            StyleValue::Image(image) => write!(f, "url({})", image.source),
        }
    }
}
