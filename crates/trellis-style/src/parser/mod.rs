//! Declaration parsing.
//!
//! Textual declarations such as `margin: 4px 8px` are parsed with `nom`
//! into typed [`StyleValue`](crate::StyleValue)s and installed into a
//! [`Style`]. Each property's parser is found through [`PROPERTY_PARSERS`],
//! a map built at compile time.
//!
//! ## Submodules
//!
//! - [`units`]: numbers, dimensions and percentages
//! - [`values`]: identifiers, strings, urls, colours and value lists
//! - [`properties`]: one parser per property or shorthand
//!
//! ## Example
//!
//! ```rust
//! use trellis_style::Style;
//!
//! let mut style = Style::new();
//! style.set_declaration("padding", "2px 4px").unwrap();
//! assert_eq!(style.length("padding-left"), 4.0);
//!
//! let applied = style.apply_declarations("flex: 1 1 auto; color: red; bogus: 1");
//! assert_eq!(applied, 2);
//! assert_eq!(style.number("flex-grow"), 1.0);
//! ```

pub mod properties;
pub mod units;
pub mod values;

use log::warn;
use nom::{
    IResult,
    character::complete::{char, multispace0},
    combinator::{all_consuming, map, rest},
    sequence::{delimited, separated_pair},
};
use phf::phf_map;

use crate::parser::values::parse_ident;
use crate::{Style, StyleError};

use properties::*;

/// Installs the parsed form of `value` for the property `name`.
pub type PropertyParser = fn(&mut Style, &str, &str) -> Result<(), StyleError>;

/// Property name -> parser.
pub static PROPERTY_PARSERS: phf::Map<&'static str, PropertyParser> = phf_map! {
    "margin" => parse_margin as PropertyParser,
    "margin-top" => parse_margin_side as PropertyParser,
    "margin-right" => parse_margin_side as PropertyParser,
    "margin-bottom" => parse_margin_side as PropertyParser,
    "margin-left" => parse_margin_side as PropertyParser,
    "padding" => parse_padding as PropertyParser,
    "padding-top" => parse_padding_side as PropertyParser,
    "padding-right" => parse_padding_side as PropertyParser,
    "padding-bottom" => parse_padding_side as PropertyParser,
    "padding-left" => parse_padding_side as PropertyParser,
    "border-width" => parse_border_width as PropertyParser,
    "border-top-width" => parse_border_side_width as PropertyParser,
    "border-right-width" => parse_border_side_width as PropertyParser,
    "border-bottom-width" => parse_border_side_width as PropertyParser,
    "border-left-width" => parse_border_side_width as PropertyParser,
    "width" => parse_size as PropertyParser,
    "height" => parse_size as PropertyParser,
    "min-width" => parse_size as PropertyParser,
    "min-height" => parse_size as PropertyParser,
    "max-width" => parse_max_size as PropertyParser,
    "max-height" => parse_max_size as PropertyParser,
    "overflow" => parse_overflow as PropertyParser,
    "overflow-x" => parse_overflow_axis as PropertyParser,
    "overflow-y" => parse_overflow_axis as PropertyParser,
    "color" => parse_color as PropertyParser,
    "background-color" => parse_color as PropertyParser,
    "background-image" => parse_background_image as PropertyParser,
    "background-size" => parse_background_size as PropertyParser,
    "font-size" => parse_font_size as PropertyParser,
    "line-height" => parse_line_height as PropertyParser,
    "flex" => parse_flex as PropertyParser,
    "flex-grow" => parse_flex_factor as PropertyParser,
    "flex-shrink" => parse_flex_factor as PropertyParser,
    "flex-basis" => parse_flex_basis as PropertyParser,
    "display" => parse_display as PropertyParser,
    "visibility" => parse_visibility as PropertyParser,
    "content" => parse_content as PropertyParser,
};

/// Look up the parser for a property.
pub fn property_parser(name: &str) -> Option<PropertyParser> {
    PROPERTY_PARSERS.get(name).copied()
}

/// Parse `name: value` (a trailing `;` is not allowed).
fn parse_name_value(input: &str) -> IResult<&str, (&str, &str)> {
    all_consuming(separated_pair(
        delimited(multispace0, parse_ident, multispace0),
        char(':'),
        map(rest, str::trim),
    ))(input)
}

/// Split one declaration into its lowercased name and trimmed value.
pub fn parse_declaration(input: &str) -> Result<(String, String), StyleError> {
    let (_, (name, value)) =
        parse_name_value(input).map_err(|e| StyleError::InvalidSyntax(e.to_string()))?;
    if value.is_empty() {
        return Err(StyleError::InvalidSyntax(format!("missing value in '{}'", input.trim())));
    }
    Ok((name.to_ascii_lowercase(), value.to_string()))
}

impl Style {
    /// Parse `value` for the property `name` and install the result.
    ///
    /// On error the style is left unchanged.
    pub fn set_declaration(&mut self, name: &str, value: &str) -> Result<(), StyleError> {
        let name = name.trim().to_ascii_lowercase();
        let parser =
            property_parser(&name).ok_or_else(|| StyleError::UnknownProperty(name.clone()))?;
        parser(self, &name, value)
    }

    /// Apply a `;` separated declaration block such as `"width: 10px; color: red"`.
    ///
    /// Declarations that fail to parse are logged and skipped. Returns the
    /// number of declarations applied.
    pub fn apply_declarations(&mut self, block: &str) -> usize {
        let mut applied = 0;
        for declaration in block.split(';').filter(|d| !d.trim().is_empty()) {
            let result = parse_declaration(declaration)
                .and_then(|(name, value)| self.set_declaration(&name, &value));
            match result {
                Ok(()) => applied += 1,
                Err(e) => warn!("skipping declaration '{}': {e}", declaration.trim()),
            }
        }
        applied
    }
}
