//! Floating point RGBA colour.
//!
//! Colours are stored the way the paint layer consumes them: four `f32`
//! channels in the `0.0..=1.0` range. The default colour is fully
//! transparent black, which doubles as the "not set" sentinel returned by
//! [`Style::color`](crate::Style::color).
//!
//! ## Supported Colour Formats
//!
//! - **Hex**: `#RGB`, `#RGBA`, `#RRGGBB`, `#RRGGBBAA`
//! - **RGB**: `rgb(r, g, b)`, `rgba(r, g, b, a)`
//! - **Named**: CSS colour names like `red`, `navy`, `rebeccapurple`
//! - **Special**: `transparent`

use std::fmt;

use phf::phf_map;

use crate::StyleError;

/// An RGBA colour with `f32` channels.
///
/// # Examples
///
/// ```
/// use trellis_style::types::Colorf;
///
/// let red = Colorf::from_rgb8(255, 0, 0);
/// assert_eq!(red, Colorf::new(1.0, 0.0, 0.0, 1.0));
///
/// let parsed = Colorf::parse("#ff000080").unwrap();
/// assert!((parsed.a - 128.0 / 255.0).abs() < 1e-6);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Colorf {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

/// Named colours, stored as 8-bit channels.
static NAMED_COLORS: phf::Map<&'static str, (u8, u8, u8)> = phf_map! {
    "black" => (0, 0, 0),
    "white" => (255, 255, 255),
    "red" => (255, 0, 0),
    "green" => (0, 128, 0),
    "lime" => (0, 255, 0),
    "blue" => (0, 0, 255),
    "yellow" => (255, 255, 0),
    "cyan" => (0, 255, 255),
    "aqua" => (0, 255, 255),
    "magenta" => (255, 0, 255),
    "fuchsia" => (255, 0, 255),
    "gray" => (128, 128, 128),
    "grey" => (128, 128, 128),
    "silver" => (192, 192, 192),
    "maroon" => (128, 0, 0),
    "olive" => (128, 128, 0),
    "purple" => (128, 0, 128),
    "teal" => (0, 128, 128),
    "navy" => (0, 0, 128),
    "orange" => (255, 165, 0),
    "coral" => (255, 127, 80),
    "tomato" => (255, 99, 71),
    "gold" => (255, 215, 0),
    "pink" => (255, 192, 203),
    "brown" => (165, 42, 42),
    "indigo" => (75, 0, 130),
    "violet" => (238, 130, 238),
    "crimson" => (220, 20, 60),
    "salmon" => (250, 128, 114),
    "skyblue" => (135, 206, 235),
    "steelblue" => (70, 130, 180),
    "slategray" => (112, 128, 144),
    "lightgray" => (211, 211, 211),
    "darkgray" => (169, 169, 169),
    "dimgray" => (105, 105, 105),
    "whitesmoke" => (245, 245, 245),
    "gainsboro" => (220, 220, 220),
    "aliceblue" => (240, 248, 255),
    "beige" => (245, 245, 220),
    "ivory" => (255, 255, 240),
    "khaki" => (240, 230, 140),
    "lavender" => (230, 230, 250),
    "turquoise" => (64, 224, 208),
    "chocolate" => (210, 105, 30),
    "firebrick" => (178, 34, 34),
    "forestgreen" => (34, 139, 34),
    "seagreen" => (46, 139, 87),
    "royalblue" => (65, 105, 225),
    "midnightblue" => (25, 25, 112),
    "rebeccapurple" => (102, 51, 153),
};

impl Colorf {
    pub const TRANSPARENT: Self = Self::new(0.0, 0.0, 0.0, 0.0);
    pub const BLACK: Self = Self::new(0.0, 0.0, 0.0, 1.0);
    pub const WHITE: Self = Self::new(1.0, 1.0, 1.0, 1.0);

    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Create an opaque colour from 8-bit channels.
    pub fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Self::from_rgba8(r, g, b, 255)
    }

    /// Create a colour from 8-bit channels including alpha.
    pub fn from_rgba8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self::new(
            r as f32 / 255.0,
            g as f32 / 255.0,
            b as f32 / 255.0,
            a as f32 / 255.0,
        )
    }

    pub fn is_transparent(&self) -> bool {
        self.a == 0.0
    }

    /// Look up a named colour (case-insensitive).
    pub fn named(name: &str) -> Option<Self> {
        let lower = name.to_ascii_lowercase();
        if lower == "transparent" {
            return Some(Self::TRANSPARENT);
        }
        NAMED_COLORS
            .get(lower.as_str())
            .map(|&(r, g, b)| Self::from_rgb8(r, g, b))
    }

    /// Parse a colour from a CSS colour string.
    pub fn parse(input: &str) -> Result<Self, StyleError> {
        let input = input.trim();
        if input.is_empty() {
            return Err(StyleError::InvalidColor("empty color string".to_string()));
        }

        if let Some(hex) = input.strip_prefix('#') {
            return Self::parse_hex(hex);
        }

        let lower = input.to_ascii_lowercase();
        if lower.starts_with("rgb") {
            return Self::parse_rgb_func(&lower);
        }

        Self::named(&lower).ok_or_else(|| StyleError::InvalidColor(format!("unknown color: {input}")))
    }

    fn parse_hex(hex: &str) -> Result<Self, StyleError> {
        let digits = hex
            .chars()
            .map(|c| {
                c.to_digit(16)
                    .map(|d| d as u8)
                    .ok_or_else(|| StyleError::InvalidColor(format!("invalid hex digit: {c}")))
            })
            .collect::<Result<Vec<u8>, _>>()?;

        match digits.as_slice() {
            [r, g, b] => Ok(Self::from_rgb8(r * 17, g * 17, b * 17)),
            [r, g, b, a] => Ok(Self::from_rgba8(r * 17, g * 17, b * 17, a * 17)),
            [r1, r2, g1, g2, b1, b2] => Ok(Self::from_rgb8(
                r1 * 16 + r2,
                g1 * 16 + g2,
                b1 * 16 + b2,
            )),
            [r1, r2, g1, g2, b1, b2, a1, a2] => Ok(Self::from_rgba8(
                r1 * 16 + r2,
                g1 * 16 + g2,
                b1 * 16 + b2,
                a1 * 16 + a2,
            )),
            _ => Err(StyleError::InvalidColor(format!(
                "invalid hex color length: {}",
                digits.len()
            ))),
        }
    }

    fn parse_rgb_func(input: &str) -> Result<Self, StyleError> {
        let start = input
            .find('(')
            .ok_or_else(|| StyleError::InvalidColor("missing '(' in rgb function".to_string()))?;
        let end = input
            .rfind(')')
            .ok_or_else(|| StyleError::InvalidColor("missing ')' in rgb function".to_string()))?;
        if end < start {
            return Err(StyleError::InvalidColor(input.to_string()));
        }

        let parts: Vec<&str> = input[start + 1..end].split(',').map(str::trim).collect();
        if parts.len() < 3 || parts.len() > 4 {
            return Err(StyleError::InvalidColor(
                "rgb requires 3 or 4 components".to_string(),
            ));
        }

        let channel = |s: &str| -> Result<f32, StyleError> {
            let value: f32 = s
                .parse()
                .map_err(|_| StyleError::InvalidColor(format!("invalid number: {s}")))?;
            if !(0.0..=255.0).contains(&value) {
                return Err(StyleError::InvalidColor(format!(
                    "value out of range (0-255): {s}"
                )));
            }
            Ok(value / 255.0)
        };

        let a = match parts.get(3) {
            Some(s) => s
                .parse::<f32>()
                .map_err(|_| StyleError::InvalidColor(format!("invalid alpha: {s}")))?
                .clamp(0.0, 1.0),
            None => 1.0,
        };

        Ok(Self::new(channel(parts[0])?, channel(parts[1])?, channel(parts[2])?, a))
    }
}

impl fmt::Display for Colorf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let to8 = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
        write!(
            f,
            "rgba({}, {}, {}, {})",
            to8(self.r),
            to8(self.g),
            to8(self.b),
            self.a
        )
    }
}
