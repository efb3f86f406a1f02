//! Parsers for individual properties.
//!
//! Every parser has the [`PropertyParser`](super::PropertyParser) shape:
//! it receives the store, the property name it was registered under and
//! the raw value text, and installs one or more typed values. Shorthands
//! expand into their longhands; nothing is stored when the value is
//! invalid.

use log::debug;

use crate::computed::BackgroundSize;
use crate::parser::values::{as_color, parse_component_values};
use crate::types::{ContentOverflow, StyleValue};
use crate::{Style, StyleError};

const SIDES: [&str; 4] = ["top", "right", "bottom", "left"];

/// Keywords every property accepts.
fn global_keyword(value: &str) -> Option<StyleValue> {
    match value.trim().to_ascii_lowercase().as_str() {
        keyword @ ("inherit" | "initial") => Some(StyleValue::keyword(keyword)),
        _ => None,
    }
}

fn values_of(name: &str, value: &str) -> Result<Vec<StyleValue>, StyleError> {
    parse_component_values(value).ok_or_else(|| StyleError::invalid_value(name, value))
}

fn single_value(name: &str, value: &str) -> Result<StyleValue, StyleError> {
    match values_of(name, value)?.as_slice() {
        [single] => Ok(single.clone()),
        _ => Err(StyleError::invalid_value(name, value)),
    }
}

fn is_length(value: &StyleValue) -> bool {
    match value {
        StyleValue::Length(..) => true,
        StyleValue::Number(n) => *n == 0.0,
        _ => false,
    }
}

/// Normalise unitless zero to `0px`.
fn as_length(value: StyleValue) -> StyleValue {
    match value {
        StyleValue::Number(n) if n == 0.0 => StyleValue::px(0.0),
        other => other,
    }
}

fn keyword_in(value: &StyleValue, allowed: &[&str]) -> bool {
    matches!(value, StyleValue::Keyword(k) if allowed.contains(&k.as_str()))
}

/// Length, percentage or one of `keywords`.
fn length_percentage_or(value: StyleValue, keywords: &[&str]) -> Option<StyleValue> {
    match value {
        StyleValue::Percentage(_) => Some(value),
        v if is_length(&v) => Some(as_length(v)),
        v if keyword_in(&v, keywords) => Some(v),
        _ => None,
    }
}

/// Expand the 1-4 value box shorthand into top/right/bottom/left.
fn expand_box<T: Clone>(values: &[T]) -> Option<[T; 4]> {
    match values {
        [all] => Some([all.clone(), all.clone(), all.clone(), all.clone()]),
        [v, h] => Some([v.clone(), h.clone(), v.clone(), h.clone()]),
        [t, h, b] => Some([t.clone(), h.clone(), b.clone(), h.clone()]),
        [t, r, b, l] => Some([t.clone(), r.clone(), b.clone(), l.clone()]),
        _ => None,
    }
}

fn set_sides(style: &mut Style, prefix: &str, suffix: &str, values: [StyleValue; 4]) {
    for (side, value) in SIDES.iter().zip(values) {
        style.set(&format!("{prefix}-{side}{suffix}"), value);
    }
}

fn parse_box_shorthand(
    style: &mut Style,
    name: &str,
    value: &str,
    suffix: &str,
    item: fn(StyleValue) -> Option<StyleValue>,
) -> Result<(), StyleError> {
    if let Some(keyword) = global_keyword(value) {
        set_sides(style, name_prefix(name, suffix), suffix, [
            keyword.clone(),
            keyword.clone(),
            keyword.clone(),
            keyword,
        ]);
        return Ok(());
    }

    let items = values_of(name, value)?
        .into_iter()
        .map(item)
        .collect::<Option<Vec<_>>>()
        .ok_or_else(|| StyleError::invalid_value(name, value))?;
    let sides = expand_box(&items).ok_or_else(|| StyleError::invalid_value(name, value))?;
    set_sides(style, name_prefix(name, suffix), suffix, sides);
    Ok(())
}

/// `border-width` -> `border`, `margin` -> `margin`.
fn name_prefix<'a>(name: &'a str, suffix: &str) -> &'a str {
    name.strip_suffix(suffix).unwrap_or(name)
}

fn margin_item(value: StyleValue) -> Option<StyleValue> {
    length_percentage_or(value, &["auto"])
}

fn padding_item(value: StyleValue) -> Option<StyleValue> {
    length_percentage_or(value, &[])
}

fn border_width_item(value: StyleValue) -> Option<StyleValue> {
    match value {
        StyleValue::Keyword(ref k) => match k.as_str() {
            "thin" => Some(StyleValue::px(1.0)),
            "medium" => Some(StyleValue::px(3.0)),
            "thick" => Some(StyleValue::px(5.0)),
            _ => None,
        },
        v if is_length(&v) => Some(as_length(v)),
        _ => None,
    }
}

/// Run a single-value parser, accepting the global keywords first.
fn parse_single(
    style: &mut Style,
    name: &str,
    value: &str,
    item: impl FnOnce(StyleValue) -> Option<StyleValue>,
) -> Result<(), StyleError> {
    let parsed = match global_keyword(value) {
        Some(keyword) => keyword,
        None => item(single_value(name, value)?)
            .ok_or_else(|| StyleError::invalid_value(name, value))?,
    };
    style.set(name, parsed);
    Ok(())
}

pub(super) fn parse_margin(style: &mut Style, name: &str, value: &str) -> Result<(), StyleError> {
    parse_box_shorthand(style, name, value, "", margin_item)
}

pub(super) fn parse_padding(style: &mut Style, name: &str, value: &str) -> Result<(), StyleError> {
    parse_box_shorthand(style, name, value, "", padding_item)
}

pub(super) fn parse_border_width(
    style: &mut Style,
    name: &str,
    value: &str,
) -> Result<(), StyleError> {
    parse_box_shorthand(style, name, value, "-width", border_width_item)
}

pub(super) fn parse_margin_side(style: &mut Style, name: &str, value: &str) -> Result<(), StyleError> {
    parse_single(style, name, value, margin_item)
}

pub(super) fn parse_padding_side(
    style: &mut Style,
    name: &str,
    value: &str,
) -> Result<(), StyleError> {
    parse_single(style, name, value, padding_item)
}

pub(super) fn parse_border_side_width(
    style: &mut Style,
    name: &str,
    value: &str,
) -> Result<(), StyleError> {
    parse_single(style, name, value, border_width_item)
}

/// `width`, `height`, `min-width`, `min-height`.
pub(super) fn parse_size(style: &mut Style, name: &str, value: &str) -> Result<(), StyleError> {
    parse_single(style, name, value, |v| length_percentage_or(v, &["auto"]))
}

/// `max-width`, `max-height`.
pub(super) fn parse_max_size(style: &mut Style, name: &str, value: &str) -> Result<(), StyleError> {
    parse_single(style, name, value, |v| length_percentage_or(v, &["none"]))
}

fn overflow_item(value: StyleValue) -> Option<StyleValue> {
    match value {
        StyleValue::Keyword(k) if ContentOverflow::from_keyword(&k).is_some() => {
            Some(StyleValue::Keyword(k))
        }
        _ => None,
    }
}

pub(super) fn parse_overflow(style: &mut Style, name: &str, value: &str) -> Result<(), StyleError> {
    let (x, y) = match global_keyword(value) {
        Some(keyword) => (keyword.clone(), keyword),
        None => {
            let items = values_of(name, value)?
                .into_iter()
                .map(overflow_item)
                .collect::<Option<Vec<_>>>()
                .ok_or_else(|| StyleError::invalid_value(name, value))?;
            match items.as_slice() {
                [both] => (both.clone(), both.clone()),
                [x, y] => (x.clone(), y.clone()),
                _ => return Err(StyleError::invalid_value(name, value)),
            }
        }
    };
    style.set("overflow-x", x);
    style.set("overflow-y", y);
    Ok(())
}

pub(super) fn parse_overflow_axis(
    style: &mut Style,
    name: &str,
    value: &str,
) -> Result<(), StyleError> {
    parse_single(style, name, value, overflow_item)
}

pub(super) fn parse_color(style: &mut Style, name: &str, value: &str) -> Result<(), StyleError> {
    parse_single(style, name, value, |v| {
        if keyword_in(&v, &["currentcolor"]) {
            return Some(v);
        }
        as_color(v)
    })
}

pub(super) fn parse_background_image(
    style: &mut Style,
    name: &str,
    value: &str,
) -> Result<(), StyleError> {
    parse_single(style, name, value, |v| match v {
        StyleValue::Url(_) => Some(v),
        k if keyword_in(&k, &["none"]) => Some(k),
        _ => None,
    })
}

pub(super) fn parse_background_size(
    style: &mut Style,
    _name: &str,
    value: &str,
) -> Result<(), StyleError> {
    let size = BackgroundSize::parse(value)?;
    if size.layers().len() > 1 {
        debug!("background-size: storing first of {} layers", size.layers().len());
    }
    size.write_to_style(style);
    Ok(())
}

pub(super) fn parse_font_size(style: &mut Style, name: &str, value: &str) -> Result<(), StyleError> {
    const KEYWORDS: &[&str] = &[
        "xx-small", "x-small", "small", "medium", "large", "x-large", "xx-large", "smaller",
        "larger",
    ];
    parse_single(style, name, value, |v| length_percentage_or(v, KEYWORDS))
}

pub(super) fn parse_line_height(
    style: &mut Style,
    name: &str,
    value: &str,
) -> Result<(), StyleError> {
    parse_single(style, name, value, |v| match v {
        StyleValue::Number(_) | StyleValue::Percentage(_) | StyleValue::Length(..) => Some(v),
        k if keyword_in(&k, &["normal"]) => Some(k),
        _ => None,
    })
}

fn flex_factor(value: StyleValue) -> Option<StyleValue> {
    match value {
        StyleValue::Number(n) if n >= 0.0 => Some(value),
        _ => None,
    }
}

fn flex_basis(value: StyleValue) -> Option<StyleValue> {
    length_percentage_or(value, &["auto", "content"])
}

/// `flex: none | auto | <grow> [<shrink>] [<basis>]`.
pub(super) fn parse_flex(style: &mut Style, name: &str, value: &str) -> Result<(), StyleError> {
    let invalid = || StyleError::invalid_value(name, value);

    let (grow, shrink, basis) = if let Some(keyword) = global_keyword(value) {
        (keyword.clone(), keyword.clone(), keyword)
    } else {
        let values = values_of(name, value)?;
        match values.as_slice() {
            [StyleValue::Keyword(k)] if k == "none" => (
                StyleValue::number(0.0),
                StyleValue::number(0.0),
                StyleValue::keyword("auto"),
            ),
            [StyleValue::Keyword(k)] if k == "auto" => (
                StyleValue::number(1.0),
                StyleValue::number(1.0),
                StyleValue::keyword("auto"),
            ),
            [grow] => (
                flex_factor(grow.clone()).ok_or_else(invalid)?,
                StyleValue::number(1.0),
                StyleValue::px(0.0),
            ),
            [grow, second] => match flex_factor(second.clone()) {
                Some(shrink) => (
                    flex_factor(grow.clone()).ok_or_else(invalid)?,
                    shrink,
                    StyleValue::px(0.0),
                ),
                None => (
                    flex_factor(grow.clone()).ok_or_else(invalid)?,
                    StyleValue::number(1.0),
                    flex_basis(second.clone()).ok_or_else(invalid)?,
                ),
            },
            [grow, shrink, basis] => (
                flex_factor(grow.clone()).ok_or_else(invalid)?,
                flex_factor(shrink.clone()).ok_or_else(invalid)?,
                flex_basis(basis.clone()).ok_or_else(invalid)?,
            ),
            _ => return Err(invalid()),
        }
    };

    style.set("flex-grow", grow);
    style.set("flex-shrink", shrink);
    style.set("flex-basis", basis);
    Ok(())
}

pub(super) fn parse_flex_factor(
    style: &mut Style,
    name: &str,
    value: &str,
) -> Result<(), StyleError> {
    parse_single(style, name, value, flex_factor)
}

pub(super) fn parse_flex_basis(style: &mut Style, name: &str, value: &str) -> Result<(), StyleError> {
    parse_single(style, name, value, flex_basis)
}

pub(super) fn parse_display(style: &mut Style, name: &str, value: &str) -> Result<(), StyleError> {
    parse_single(style, name, value, |v| {
        keyword_in(&v, &["none", "block", "inline", "inline-block", "flex", "inline-flex"])
            .then_some(v)
    })
}

pub(super) fn parse_visibility(style: &mut Style, name: &str, value: &str) -> Result<(), StyleError> {
    parse_single(style, name, value, |v| {
        keyword_in(&v, &["visible", "hidden", "collapse"]).then_some(v)
    })
}

pub(super) fn parse_content(style: &mut Style, name: &str, value: &str) -> Result<(), StyleError> {
    parse_single(style, name, value, |v| match v {
        StyleValue::String(_) => Some(v),
        k if keyword_in(&k, &["none", "normal"]) => Some(k),
        _ => None,
    })
}
