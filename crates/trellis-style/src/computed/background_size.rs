//! The `background-size` property.
//!
//! ```css
//! background-size: cover;
//! background-size: 50% auto, 2em 10px;
//! background-size: inherit;
//! ```
//!
//! At cascade time [`BackgroundSize::compute`] copies the parent's layers
//! for `inherit` and converts every length to pixels. Percentages and
//! `auto` are kept as they are until [`BackgroundSizeLayer::resolve`] runs
//! against the painted box.

use std::fmt;

use smallvec::{SmallVec, smallvec};

use crate::computed::CssLength;
use crate::parser::values::parse_component_values;
use crate::types::{ImageSource, StyleValue};
use crate::{Style, StyleError};

const PROPERTY: &str = "background-size";
const PROPERTY_X: &str = "background-size-x";
const PROPERTY_Y: &str = "background-size-y";

/// One axis of an explicit size.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum SizeValue {
    #[default]
    Auto,
    Length(CssLength),
    /// Percentage of the background positioning area, as written.
    Percentage(f32),
}

impl SizeValue {
    fn from_value(value: &StyleValue) -> Option<Self> {
        match value {
            StyleValue::Keyword(k) if k == "auto" => Some(SizeValue::Auto),
            StyleValue::Percentage(p) => Some(SizeValue::Percentage(*p)),
            other => CssLength::from_value(other).map(SizeValue::Length),
        }
    }

    fn to_value(self) -> StyleValue {
        match self {
            SizeValue::Auto => StyleValue::keyword("auto"),
            SizeValue::Length(l) => StyleValue::Length(l.value, l.unit),
            SizeValue::Percentage(p) => StyleValue::Percentage(p),
        }
    }

    fn compute(self, em_size: f32, ex_size: f32) -> Self {
        match self {
            SizeValue::Length(l) => SizeValue::Length(l.compute(em_size, ex_size)),
            other => other,
        }
    }

    /// Pixels along an axis of `extent` pixels; `None` for `auto`.
    ///
    /// `em`/`ex` lengths have no pixel size until [`BackgroundSize::compute`]
    /// has run; they resolve like `auto` instead of guessing.
    fn resolve(self, extent: f32) -> Option<f32> {
        match self {
            SizeValue::Auto => None,
            SizeValue::Length(l) => l.unit.pixels_per_unit().map(|ppu| l.value * ppu),
            SizeValue::Percentage(p) => Some(extent * p / 100.0),
        }
    }
}

impl fmt::Display for SizeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SizeValue::Auto => f.write_str("auto"),
            SizeValue::Length(l) => write!(f, "{l}"),
            SizeValue::Percentage(p) => write!(f, "{p}%"),
        }
    }
}

/// Size of a single background layer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BackgroundSizeLayer {
    /// Largest size that fits entirely inside the box.
    Contain,
    /// Smallest size that covers the whole box.
    Cover,
    /// Independent sizes per axis.
    Values { x: SizeValue, y: SizeValue },
}

impl Default for BackgroundSizeLayer {
    fn default() -> Self {
        BackgroundSizeLayer::Values {
            x: SizeValue::Auto,
            y: SizeValue::Auto,
        }
    }
}

impl BackgroundSizeLayer {
    fn parse(values: &[StyleValue]) -> Option<Self> {
        match values {
            [StyleValue::Keyword(k)] if k == "contain" => Some(BackgroundSizeLayer::Contain),
            [StyleValue::Keyword(k)] if k == "cover" => Some(BackgroundSizeLayer::Cover),
            [x] => Some(BackgroundSizeLayer::Values {
                x: SizeValue::from_value(x)?,
                y: SizeValue::Auto,
            }),
            [x, y] => Some(BackgroundSizeLayer::Values {
                x: SizeValue::from_value(x)?,
                y: SizeValue::from_value(y)?,
            }),
            _ => None,
        }
    }

    fn compute(self, em_size: f32, ex_size: f32) -> Self {
        match self {
            BackgroundSizeLayer::Values { x, y } => BackgroundSizeLayer::Values {
                x: x.compute(em_size, ex_size),
                y: y.compute(em_size, ex_size),
            },
            other => other,
        }
    }

    /// Concrete painted size for a box of `box_width` x `box_height`.
    ///
    /// Expects a computed layer (see [`BackgroundSize::compute`]). `auto` uses the image's intrinsic size or ratio when there is an
    /// image, and 100% of the box otherwise.
    pub fn resolve(&self, box_width: f32, box_height: f32, image: Option<&ImageSource>) -> (f32, f32) {
        let intrinsic = image.filter(|i| i.width > 0.0 && i.height > 0.0);

        match *self {
            BackgroundSizeLayer::Contain | BackgroundSizeLayer::Cover => {
                let Some(image) = intrinsic else {
                    return (box_width, box_height);
                };
                let sx = box_width / image.width;
                let sy = box_height / image.height;
                let scale = if matches!(self, BackgroundSizeLayer::Contain) {
                    sx.min(sy)
                } else {
                    sx.max(sy)
                };
                (image.width * scale, image.height * scale)
            }
            BackgroundSizeLayer::Values { x, y } => {
                let ratio = intrinsic.and_then(ImageSource::aspect_ratio);
                match (x.resolve(box_width), y.resolve(box_height)) {
                    (Some(w), Some(h)) => (w, h),
                    (Some(w), None) => (w, ratio.map(|r| w / r).unwrap_or(box_height)),
                    (None, Some(h)) => (ratio.map(|r| h * r).unwrap_or(box_width), h),
                    (None, None) => intrinsic
                        .map(|i| (i.width, i.height))
                        .unwrap_or((box_width, box_height)),
                }
            }
        }
    }
}

impl fmt::Display for BackgroundSizeLayer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BackgroundSizeLayer::Contain => f.write_str("contain"),
            BackgroundSizeLayer::Cover => f.write_str("cover"),
            BackgroundSizeLayer::Values { x, y } => write!(f, "{x} {y}"),
        }
    }
}

/// Specified or computed value of `background-size`.
#[derive(Debug, Clone, PartialEq)]
pub enum BackgroundSize {
    /// Take the parent's computed layers when computed.
    Inherit,
    /// Locally specified layers, in paint order.
    Value(SmallVec<[BackgroundSizeLayer; 1]>),
}

impl Default for BackgroundSize {
    fn default() -> Self {
        BackgroundSize::Value(smallvec![BackgroundSizeLayer::default()])
    }
}

impl BackgroundSize {
    /// Parse the textual form, including comma separated layer lists.
    pub fn parse(input: &str) -> Result<Self, StyleError> {
        let input = input.trim();
        if input.eq_ignore_ascii_case("inherit") {
            return Ok(BackgroundSize::Inherit);
        }
        if input.eq_ignore_ascii_case("initial") {
            return Ok(BackgroundSize::default());
        }

        let layers = input
            .split(',')
            .map(|layer| {
                parse_component_values(layer)
                    .and_then(|values| BackgroundSizeLayer::parse(&values))
                    .ok_or_else(|| StyleError::invalid_value(PROPERTY, input))
            })
            .collect::<Result<SmallVec<_>, _>>()?;

        Ok(BackgroundSize::Value(layers))
    }

    /// Read the value a [`Style`] holds.
    ///
    /// A style stores a single layer; a missing property reads as
    /// `auto auto`.
    pub fn from_style(style: &Style) -> Self {
        match style.keyword(PROPERTY) {
            "inherit" => return BackgroundSize::Inherit,
            "contain" => return BackgroundSize::Value(smallvec![BackgroundSizeLayer::Contain]),
            "cover" => return BackgroundSize::Value(smallvec![BackgroundSizeLayer::Cover]),
            _ => {}
        }

        let axis = |name: &str| {
            style
                .value(name)
                .and_then(SizeValue::from_value)
                .unwrap_or_default()
        };
        BackgroundSize::Value(smallvec![BackgroundSizeLayer::Values {
            x: axis(PROPERTY_X),
            y: axis(PROPERTY_Y),
        }])
    }

    /// Store this value in a [`Style`]. Only the first layer is kept.
    pub fn write_to_style(&self, style: &mut Style) {
        let layer = match self {
            BackgroundSize::Inherit => {
                style.set(PROPERTY, StyleValue::keyword("inherit"));
                style.remove(PROPERTY_X);
                style.remove(PROPERTY_Y);
                return;
            }
            BackgroundSize::Value(layers) => layers.first().copied().unwrap_or_default(),
        };

        match layer {
            BackgroundSizeLayer::Contain | BackgroundSizeLayer::Cover => {
                style.set(PROPERTY, StyleValue::keyword(layer.to_string()));
                style.remove(PROPERTY_X);
                style.remove(PROPERTY_Y);
            }
            BackgroundSizeLayer::Values { x, y } => {
                style.remove(PROPERTY);
                style.set(PROPERTY_X, x.to_value());
                style.set(PROPERTY_Y, y.to_value());
            }
        }
    }

    /// Resolve against the parent and the element's font sizes.
    ///
    /// `inherit` copies the parent's already computed layers verbatim (the
    /// initial value when there is no parent). Otherwise every length is
    /// converted to pixels while percentages and `auto` are left for paint
    /// time.
    pub fn compute(&mut self, parent: Option<&BackgroundSize>, em_size: f32, ex_size: f32) {
        *self = match self {
            BackgroundSize::Inherit => match parent {
                Some(parent) if matches!(parent, BackgroundSize::Value(_)) => parent.clone(),
                _ => BackgroundSize::default(),
            },
            BackgroundSize::Value(layers) => BackgroundSize::Value(
                layers
                    .iter()
                    .map(|layer| layer.compute(em_size, ex_size))
                    .collect(),
            ),
        };
    }

    /// Layers in paint order. Empty for an uncomputed `inherit`.
    pub fn layers(&self) -> &[BackgroundSizeLayer] {
        match self {
            BackgroundSize::Inherit => &[],
            BackgroundSize::Value(layers) => layers,
        }
    }
}

impl fmt::Display for BackgroundSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BackgroundSize::Inherit => f.write_str("inherit"),
            BackgroundSize::Value(layers) => {
                for (i, layer) in layers.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{layer}")?;
                }
                Ok(())
            }
        }
    }
}
