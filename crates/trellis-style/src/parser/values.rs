//! Component value parsing: identifiers, strings, urls and colours.

use nom::{
    IResult,
    branch::alt,
    bytes::complete::{tag_no_case, take_till, take_until, take_while, take_while1},
    character::complete::{char, hex_digit1, multispace0},
    combinator::{map, map_res, opt, recognize, verify},
    multi::many1,
    sequence::{delimited, pair, preceded, terminated, tuple},
};

use crate::parser::units::parse_numeric;
use crate::types::{Colorf, StyleValue};

/// Parse a CSS identifier such as `auto` or `border-box`.
pub fn parse_ident(input: &str) -> IResult<&str, &str> {
    verify(
        take_while1(|c: char| c.is_ascii_alphanumeric() || c == '-' || c == '_'),
        |s: &str| !s.starts_with(|c: char| c.is_ascii_digit()),
    )(input)
}

/// Parse a single- or double-quoted string, returning the inner text.
pub fn parse_quoted(input: &str) -> IResult<&str, &str> {
    alt((
        delimited(char('"'), take_till(|c: char| c == '"'), char('"')),
        delimited(char('\''), take_till(|c: char| c == '\''), char('\'')),
    ))(input)
}

/// Parse `url(...)`, with or without quotes around the address.
pub fn parse_url(input: &str) -> IResult<&str, String> {
    map(
        preceded(tag_no_case("url("), terminated(take_until(")"), char(')'))),
        |inner: &str| inner.trim().trim_matches(|c: char| c == '"' || c == '\'').to_string(),
    )(input)
}

/// Parse a colour literal: `#hex`, `rgb(...)` or `rgba(...)`.
///
/// Named colours are identifiers and are resolved by the property parsers
/// that expect a colour.
pub fn parse_color_literal(input: &str) -> IResult<&str, Colorf> {
    map_res(
        alt((
            recognize(pair(char('#'), hex_digit1)),
            recognize(tuple((
                tag_no_case("rgb"),
                opt(tag_no_case("a")),
                char('('),
                take_while(|c: char| c != ')'),
                char(')'),
            ))),
        )),
        Colorf::parse,
    )(input)
}

/// Parse one component value, skipping leading whitespace.
pub fn parse_component_value(input: &str) -> IResult<&str, StyleValue> {
    preceded(
        multispace0,
        alt((
            map(parse_url, StyleValue::Url),
            map(parse_quoted, StyleValue::string),
            map(parse_color_literal, StyleValue::Color),
            parse_numeric,
            map(parse_ident, |s: &str| StyleValue::keyword(s.to_ascii_lowercase())),
        )),
    )(input)
}

/// Parse a whitespace separated list of component values.
///
/// Returns `None` unless the whole input is consumed.
pub fn parse_component_values(input: &str) -> Option<Vec<StyleValue>> {
    let (rest, values) = many1(parse_component_value)(input).ok()?;
    rest.trim().is_empty().then_some(values)
}

/// Reinterpret a keyword as a named colour when possible.
pub fn as_color(value: StyleValue) -> Option<StyleValue> {
    match value {
        StyleValue::Color(_) => Some(value),
        StyleValue::Keyword(ref name) => Colorf::named(name).map(StyleValue::Color),
        _ => None,
    }
}
