//! Background-size: parsing, storage in a style and the compute step.

use trellis_style::computed::{BackgroundSize, BackgroundSizeLayer, CssLength, SizeValue};
use trellis_style::{Dimension, Style, StyleValueType};

#[test]
fn test_display_matches_source_form() {
    let size = BackgroundSize::parse("50% auto, 2em 10px").unwrap();
    insta::assert_snapshot!(size.to_string(), @"50% auto, 2em 10px");

    let size = BackgroundSize::parse("contain, cover").unwrap();
    insta::assert_snapshot!(size.to_string(), @"contain, cover");
}

#[test]
fn test_compute_resolves_lengths_but_not_percentages() {
    let mut size = BackgroundSize::parse("50% auto, 2em 10px").unwrap();
    size.compute(None, 12.0, 6.0);
    insta::assert_snapshot!(size.to_string(), @"50% auto, 24px 10px");
}

#[test]
fn test_inherit_copies_parent_layers_verbatim() {
    let mut parent = BackgroundSize::parse("1in 20%, cover").unwrap();
    parent.compute(None, 16.0, 8.0);

    let mut child = BackgroundSize::parse("inherit").unwrap();
    child.compute(Some(&parent), 100.0, 50.0);

    assert_eq!(child, parent);
    assert_eq!(
        child.layers()[0],
        BackgroundSizeLayer::Values {
            x: SizeValue::Length(CssLength::px(96.0)),
            y: SizeValue::Percentage(20.0),
        }
    );
}

#[test]
fn test_inherit_without_parent_is_initial_value() {
    let mut size = BackgroundSize::Inherit;
    assert!(size.layers().is_empty());
    size.compute(None, 16.0, 8.0);
    assert_eq!(size, BackgroundSize::default());
    assert_eq!(size.to_string(), "auto auto");
}

#[test]
fn test_declaration_stores_axes() {
    let mut style = Style::new();
    style.set_declaration("background-size", "3pt 40%").unwrap();

    assert_eq!(style.value_type("background-size-x"), StyleValueType::Length);
    assert_eq!(style.percentage("background-size-y"), 40.0);
    assert_eq!(
        BackgroundSize::from_style(&style).layers(),
        &[BackgroundSizeLayer::Values {
            x: SizeValue::Length(CssLength::new(3.0, Dimension::Pt)),
            y: SizeValue::Percentage(40.0),
        }]
    );
}

#[test]
fn test_declaration_keyword_replaces_axes() {
    let mut style = Style::new();
    style.set_declaration("background-size", "10px 10px").unwrap();
    style.set_declaration("background-size", "cover").unwrap();

    assert!(!style.has("background-size-x"));
    assert!(!style.has("background-size-y"));
    assert_eq!(
        BackgroundSize::from_style(&style).layers(),
        &[BackgroundSizeLayer::Cover]
    );

    style.set_declaration("background-size", "inherit").unwrap();
    assert_eq!(BackgroundSize::from_style(&style), BackgroundSize::Inherit);
}

#[test]
fn test_initial_declaration_resets_to_auto() {
    let mut style = Style::new();
    style.set_declaration("background-size", "contain").unwrap();
    style.set_declaration("background-size", "initial").unwrap();

    assert!(!style.has("background-size"));
    assert!(style.is_keyword("background-size-x", "auto"));
    assert!(style.is_keyword("background-size-y", "auto"));
    assert_eq!(BackgroundSize::from_style(&style), BackgroundSize::default());
}

#[test]
fn test_missing_property_reads_as_auto() {
    assert_eq!(BackgroundSize::from_style(&Style::new()), BackgroundSize::default());
}

#[test]
fn test_invalid_declaration_is_rejected() {
    let mut style = Style::new();
    assert!(style.set_declaration("background-size", "cover 10px").is_err());
    assert!(style.is_empty());
}
