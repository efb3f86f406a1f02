//! Per-element typed property storage.
//!
//! A [`Style`] maps property names to [`StyleValue`]s. All queries are
//! total: asking for a property that is missing, or that holds a different
//! kind of value, returns the kind's default (`""`, `0.0`, transparent,
//! `None`). Callers that need to tell the two apart use [`Style::has`] or
//! [`Style::value_type`].
//!
//! ## Inheritance
//!
//! A style may point at a base style holding inherited or default values.
//! The accessors never walk that link on their own; cascade resolution is
//! done one level up through [`Style::resolve_with_fallback`], so the caller
//! decides how many levels to consult.
//!
//! ```rust
//! use std::rc::Rc;
//! use trellis_style::{Style, StyleValue};
//!
//! let mut defaults = Style::new();
//! defaults.set("color", StyleValue::keyword("black"));
//! let defaults = Rc::new(defaults);
//!
//! let mut local = Style::new();
//! local.set_base(&defaults);
//!
//! assert!(!local.has("color"));
//! let base = local.base().unwrap();
//! let value = local.resolve_with_fallback("color", &base);
//! assert_eq!(value, Some(&StyleValue::keyword("black")));
//! ```

use std::collections::HashMap;
use std::rc::{Rc, Weak};

use log::trace;

use crate::types::{Colorf, Dimension, ImageHandle, StyleValue, StyleValueType};

/// Typed property store for one element.
#[derive(Debug, Clone, Default)]
pub struct Style {
    properties: HashMap<String, StyleValue>,
    base: Weak<Style>,
}

impl Style {
    pub fn new() -> Self {
        Self::default()
    }

    /// The base style, if one was set and is still alive.
    pub fn base(&self) -> Option<Rc<Style>> {
        self.base.upgrade()
    }

    /// Point this style at a base style. Only a weak reference is kept.
    pub fn set_base(&mut self, base: &Rc<Style>) {
        self.base = Rc::downgrade(base);
    }

    pub fn clear_base(&mut self) {
        self.base = Weak::new();
    }

    /// Install a value, replacing whatever the property held before.
    ///
    /// Setting [`StyleValue::Undefined`] removes the property.
    pub fn set(&mut self, property_name: &str, value: StyleValue) {
        if value.is_undefined() {
            if self.properties.remove(property_name).is_some() {
                trace!("style: removed {property_name}");
            }
            return;
        }

        trace!("style: {property_name} = {value}");
        match self.properties.get_mut(property_name) {
            Some(slot) => *slot = value,
            None => {
                self.properties.insert(property_name.to_string(), value);
            }
        }
    }

    pub fn remove(&mut self, property_name: &str) {
        self.set(property_name, StyleValue::Undefined);
    }

    pub fn has(&self, property_name: &str) -> bool {
        self.properties.contains_key(property_name)
    }

    /// Whether the property holds a value of the given kind.
    pub fn is(&self, property_name: &str, value_type: StyleValueType) -> bool {
        self.value_type(property_name) == value_type
    }

    /// Whether the property holds exactly this keyword.
    pub fn is_keyword(&self, property_name: &str, keyword: &str) -> bool {
        self.keyword(property_name) == keyword
    }

    pub fn value_type(&self, property_name: &str) -> StyleValueType {
        self.properties
            .get(property_name)
            .map(StyleValue::value_type)
            .unwrap_or_default()
    }

    /// The raw stored value.
    pub fn value(&self, property_name: &str) -> Option<&StyleValue> {
        self.properties.get(property_name)
    }

    /// Look the property up here, then in `fallback`.
    ///
    /// Exactly one level is consulted; chain calls to walk further.
    pub fn resolve_with_fallback<'a>(
        &'a self,
        property_name: &str,
        fallback: &'a Style,
    ) -> Option<&'a StyleValue> {
        self.value(property_name)
            .or_else(|| fallback.value(property_name))
    }

    pub fn keyword(&self, property_name: &str) -> &str {
        match self.properties.get(property_name) {
            Some(StyleValue::Keyword(text)) => text,
            _ => "",
        }
    }

    pub fn string(&self, property_name: &str) -> &str {
        match self.properties.get(property_name) {
            Some(StyleValue::String(text)) => text,
            _ => "",
        }
    }

    pub fn url(&self, property_name: &str) -> &str {
        match self.properties.get(property_name) {
            Some(StyleValue::Url(text)) => text,
            _ => "",
        }
    }

    /// Length in pixels.
    ///
    /// Absolute units are converted at 96 pixels per inch. Font-relative
    /// units (`em`, `ex`) need font metrics and answer `0.0` here; use
    /// [`computed_length`](crate::computed::computed_length) for those.
    pub fn length(&self, property_name: &str) -> f32 {
        match self.properties.get(property_name) {
            Some(StyleValue::Length(value, dimension)) => dimension
                .pixels_per_unit()
                .map(|factor| value * factor)
                .unwrap_or(0.0),
            _ => 0.0,
        }
    }

    /// The length as written, before any unit conversion.
    pub fn raw_length(&self, property_name: &str) -> Option<(f32, Dimension)> {
        match self.properties.get(property_name) {
            Some(StyleValue::Length(value, dimension)) => Some((*value, *dimension)),
            _ => None,
        }
    }

    pub fn percentage(&self, property_name: &str) -> f32 {
        match self.properties.get(property_name) {
            Some(StyleValue::Percentage(value)) => *value,
            _ => 0.0,
        }
    }

    pub fn number(&self, property_name: &str) -> f32 {
        match self.properties.get(property_name) {
            Some(StyleValue::Number(value)) => *value,
            _ => 0.0,
        }
    }

    pub fn color(&self, property_name: &str) -> Colorf {
        match self.properties.get(property_name) {
            Some(StyleValue::Color(color)) => *color,
            _ => Colorf::default(),
        }
    }

    pub fn image(&self, property_name: &str) -> Option<&ImageHandle> {
        match self.properties.get(property_name) {
            Some(StyleValue::Image(image)) => Some(image),
            _ => None,
        }
    }

    pub fn len(&self) -> usize {
        self.properties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    /// Iterate over all set properties in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &StyleValue)> {
        self.properties.iter().map(|(k, v)| (k.as_str(), v))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ImageSource;

    #[test]
    fn test_fresh_store_answers_defaults() {
        let style = Style::new();
        for name in ["width", "color", "background-image", "content"] {
            assert!(!style.has(name));
            assert_eq!(style.value_type(name), StyleValueType::Undefined);
            assert_eq!(style.keyword(name), "");
            assert_eq!(style.string(name), "");
            assert_eq!(style.url(name), "");
            assert_eq!(style.length(name), 0.0);
            assert_eq!(style.percentage(name), 0.0);
            assert_eq!(style.number(name), 0.0);
            assert_eq!(style.color(name), Colorf::default());
            assert!(style.image(name).is_none());
        }
        assert!(style.is_empty());
    }

    #[test]
    fn test_kind_mismatch_is_silent() {
        let mut style = Style::new();
        style.set("width", StyleValue::percentage(50.0));
        assert_eq!(style.length("width"), 0.0);
        assert_eq!(style.number("width"), 0.0);
        assert_eq!(style.keyword("width"), "");
        assert_eq!(style.percentage("width"), 50.0);
    }

    #[test]
    fn test_overwrite_with_different_kind() {
        let mut style = Style::new();
        style.set("color", StyleValue::color(Colorf::WHITE));
        style.set("color", StyleValue::keyword("inherit"));

        assert!(!style.is("color", StyleValueType::Color));
        assert!(style.is("color", StyleValueType::Keyword));
        assert_eq!(style.color("color"), Colorf::default());
        assert_eq!(style.len(), 1);
    }

    #[test]
    fn test_set_undefined_removes() {
        let mut style = Style::new();
        style.set("width", StyleValue::px(10.0));
        style.set("width", StyleValue::Undefined);
        assert!(!style.has("width"));
        assert!(style.is_empty());

        // Removing something that was never set is a no-op.
        style.remove("height");
        assert!(style.is_empty());
    }

    #[test]
    fn test_length_units() {
        let mut style = Style::new();
        style.set("a", StyleValue::length(2.0, Dimension::Pt));
        style.set("b", StyleValue::length(1.0, Dimension::In));
        style.set("c", StyleValue::length(1.0, Dimension::Pc));
        style.set("d", StyleValue::length(3.0, Dimension::Em));

        assert!((style.length("a") - 2.0 * 96.0 / 72.0).abs() < 1e-5);
        assert_eq!(style.length("b"), 96.0);
        assert_eq!(style.length("c"), 16.0);
        assert_eq!(style.length("d"), 0.0);
        assert_eq!(style.raw_length("d"), Some((3.0, Dimension::Em)));
    }

    #[test]
    fn test_is_keyword() {
        let mut style = Style::new();
        style.set("display", StyleValue::keyword("block"));
        assert!(style.is_keyword("display", "block"));
        assert!(!style.is_keyword("display", "none"));
        assert!(!style.is_keyword("visibility", "visible"));
    }

    #[test]
    fn test_image_handle_is_shared() {
        let image = Rc::new(ImageSource::new("a.png", 10.0, 20.0));
        let mut style = Style::new();
        style.set("background-image", StyleValue::image(image.clone()));
        assert!(Rc::ptr_eq(style.image("background-image").unwrap(), &image));
        assert_eq!(style.url("background-image"), "");
    }

    #[test]
    fn test_base_is_weak_and_never_walked() {
        let mut base = Style::new();
        base.set("font-size", StyleValue::px(12.0));
        let base = Rc::new(base);

        let mut style = Style::new();
        style.set_base(&base);
        assert_eq!(style.length("font-size"), 0.0);
        assert!(style.base().is_some());

        drop(base);
        assert!(style.base().is_none());
    }

    #[test]
    fn test_resolve_with_fallback_prefers_local() {
        let mut fallback = Style::new();
        fallback.set("color", StyleValue::keyword("red"));
        fallback.set("width", StyleValue::px(5.0));

        let mut style = Style::new();
        style.set("color", StyleValue::keyword("blue"));

        assert_eq!(
            style.resolve_with_fallback("color", &fallback),
            Some(&StyleValue::keyword("blue"))
        );
        assert_eq!(
            style.resolve_with_fallback("width", &fallback),
            Some(&StyleValue::px(5.0))
        );
        assert_eq!(style.resolve_with_fallback("height", &fallback), None);
    }
}
