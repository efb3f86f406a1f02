use nom::{
    IResult,
    branch::alt,
    character::complete::{alpha0, char, digit1, one_of},
    combinator::{map_res, opt, recognize},
    sequence::{pair, tuple},
};

use crate::types::{Dimension, StyleValue};

/// Parse a floating point or integer number, with optional sign.
///
/// Accepts `12`, `-3.5`, `+1` and `.25`.
pub fn parse_number(input: &str) -> IResult<&str, f32> {
    map_res(
        recognize(tuple((
            opt(one_of("+-")),
            alt((
                recognize(pair(digit1, opt(pair(char('.'), digit1)))),
                recognize(pair(char('.'), digit1)),
            )),
        ))),
        |s: &str| s.parse::<f32>(),
    )(input)
}

/// Parse a number followed by an optional unit or `%`.
///
/// - `12px` -> [`StyleValue::Length`]
/// - `50%` -> [`StyleValue::Percentage`]
/// - `1.5` -> [`StyleValue::Number`]
///
/// An unknown unit suffix fails instead of leaving letters behind.
pub fn parse_numeric(input: &str) -> IResult<&str, StyleValue> {
    let (rest, value) = parse_number(input)?;

    if let Ok((rest, _)) = char::<&str, nom::error::Error<&str>>('%')(rest) {
        return Ok((rest, StyleValue::Percentage(value)));
    }

    let (after, suffix) = alpha0(rest)?;
    if suffix.is_empty() {
        return Ok((rest, StyleValue::Number(value)));
    }

    match Dimension::from_suffix(suffix) {
        Some(dimension) => Ok((after, StyleValue::Length(value, dimension))),
        None => Err(nom::Err::Error(nom::error::Error::new(
            rest,
            nom::error::ErrorKind::Tag,
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_number_forms() {
        assert_eq!(parse_number("12"), Ok(("", 12.0)));
        assert_eq!(parse_number("-3.5rest"), Ok(("rest", -3.5)));
        assert_eq!(parse_number("+1"), Ok(("", 1.0)));
        assert_eq!(parse_number(".25"), Ok(("", 0.25)));
        assert!(parse_number("px").is_err());
    }

    #[test]
    fn test_parse_numeric_units() {
        assert_eq!(
            parse_numeric("2pt"),
            Ok(("", StyleValue::Length(2.0, Dimension::Pt)))
        );
        assert_eq!(
            parse_numeric("1.5EM"),
            Ok(("", StyleValue::Length(1.5, Dimension::Em)))
        );
        assert_eq!(parse_numeric("50% x"), Ok((" x", StyleValue::Percentage(50.0))));
        assert_eq!(parse_numeric("3 4"), Ok((" 4", StyleValue::Number(3.0))));
    }

    #[test]
    fn test_parse_numeric_unknown_unit() {
        assert!(parse_numeric("10vw").is_err());
    }
}
