//! ScrollView integration tests.
//!
//! Sizing, wheel handling and the offset bookkeeping of a scroll view
//! holding plain measured content.

use trellis_style::ContentOverflow;
use trellis_view::{
    FixedSize, MeasureSurface, Modifiers, PointerButton, PointerEvent, Point, Rect, ScrollConfig,
    ScrollView, TextLines, View,
};

// =============================================================================
// Helpers
// =============================================================================

fn surface() -> MeasureSurface {
    MeasureSurface::default()
}

fn scroll_view_with(content: View, width: f32, height: f32) -> ScrollView {
    let mut view = ScrollView::new();
    view.add_content(content);
    view.set_margin_box(&surface(), Rect::new(0.0, 0.0, width, height));
    view.layout_children(&surface());
    view
}

/// 100px wide, 500px tall content in a 200x300 viewport.
fn tall_view() -> ScrollView {
    scroll_view_with(View::new().with_content(FixedSize::new(100.0, 500.0)), 200.0, 300.0)
}

fn wheel(view: &mut ScrollView, button: PointerButton, modifiers: Modifiers) -> bool {
    let mut event = PointerEvent::wheel(button, modifiers);
    view.on_pointer_press(&mut event);
    !event.is_propagating()
}

fn wheel_down(view: &mut ScrollView) -> bool {
    wheel(view, PointerButton::WheelDown, Modifiers::empty())
}

fn assert_offset_matches_bars(view: &ScrollView) {
    let bars = Point::new(
        view.scrollbar_x_view().position(),
        view.scrollbar_y_view().position(),
    );
    assert_eq!(view.content_offset(), bars);
    assert_eq!(view.content_view().content_offset(), bars);
}

// =============================================================================
// Sizing
// =============================================================================

#[test]
fn test_automatic_vertical_bar_for_tall_content() {
    let view = tall_view();
    let bar = view.scrollbar_y_view();

    assert!(!bar.hidden());
    assert_eq!(bar.max_position(), 200.0);
    assert_eq!(bar.page_step(), 300.0);
    assert!(view.scrollbar_x_view().hidden());
}

#[test]
fn test_bar_geometry_and_content_view() {
    let view = tall_view();

    assert_eq!(
        view.scrollbar_y_view().geometry().margin_box,
        Rect::new(184.0, 0.0, 16.0, 300.0)
    );
    assert_eq!(
        view.content_view().geometry().margin_box,
        Rect::new(0.0, 0.0, 184.0, 300.0)
    );
    // Children are stacked at the full content view width.
    let child = view.content_view().child(0).unwrap();
    assert_eq!(child.geometry().margin_box, Rect::new(0.0, 0.0, 184.0, 500.0));
}

#[test]
fn test_layout_summary_snapshot() {
    let view = tall_view();
    let summary = format!(
        "x: {:?} hidden={}\ny: {:?} hidden={}\ncontent: {:?}",
        view.scrollbar_x_view().geometry().margin_box,
        view.scrollbar_x_view().hidden(),
        view.scrollbar_y_view().geometry().margin_box,
        view.scrollbar_y_view().hidden(),
        view.content_view().geometry().content_box,
    );
    insta::assert_snapshot!(summary, @r"
    x: Rect { x: 0.0, y: 300.0, width: 184.0, height: 0.0 } hidden=true
    y: Rect { x: 184.0, y: 0.0, width: 16.0, height: 300.0 } hidden=false
    content: Rect { x: 0.0, y: 0.0, width: 184.0, height: 300.0 }
    ");
}

#[test]
fn test_both_bars_share_the_corner() {
    let mut view = ScrollView::new();
    view.set_overflow(ContentOverflow::Automatic, ContentOverflow::Automatic);
    view.add_content(View::new().with_content(FixedSize::new(400.0, 500.0)));
    view.set_margin_box(&surface(), Rect::new(0.0, 0.0, 200.0, 300.0));
    view.layout_children(&surface());

    let x = view.scrollbar_x_view();
    let y = view.scrollbar_y_view();
    assert_eq!(x.geometry().margin_box, Rect::new(0.0, 284.0, 184.0, 16.0));
    assert_eq!(y.geometry().margin_box, Rect::new(184.0, 0.0, 16.0, 284.0));
    assert_eq!(x.max_position(), 216.0);
    assert_eq!(x.page_step(), 184.0);
    assert_eq!(y.max_position(), 216.0);
    assert_eq!(y.page_step(), 284.0);
}

#[test]
fn test_horizontal_decision_uses_unshrunk_width() {
    // 25 glyphs of 8px fit the 200px viewport exactly, but not the 184px
    // left once the vertical bar is placed. Content is not measured again.
    let text = TextLines::new(vec!["x".repeat(25); 30]);
    let mut view = ScrollView::new();
    view.set_overflow_x(ContentOverflow::Automatic);
    view.add_content(View::new().with_content(text));
    view.set_margin_box(&surface(), Rect::new(0.0, 0.0, 200.0, 300.0));
    view.layout_children(&surface());

    assert!(!view.scrollbar_y_view().hidden());
    assert!(view.scrollbar_x_view().hidden());
    assert_eq!(view.content_view().geometry().content_box.width, 184.0);
}

#[test]
fn test_padding_shrinks_viewport() {
    let mut view = ScrollView::new();
    view.apply_style("padding: 10px").unwrap();
    view.add_content(View::new().with_content(FixedSize::new(100.0, 500.0)));
    view.set_margin_box(&surface(), Rect::new(0.0, 0.0, 200.0, 300.0));
    view.layout_children(&surface());

    assert_eq!(view.scrollbar_y_view().max_position(), 220.0);
    assert_eq!(view.scrollbar_y_view().page_step(), 280.0);
}

#[test]
fn test_font_relative_padding_shrinks_viewport() {
    let mut view = ScrollView::new();
    view.apply_style("padding: 1em").unwrap();
    view.add_content(View::new().with_content(FixedSize::new(100.0, 500.0)));
    view.set_margin_box(&surface(), Rect::new(0.0, 0.0, 200.0, 300.0));
    view.layout_children(&surface());

    assert_eq!(view.geometry().content_box, Rect::new(16.0, 16.0, 168.0, 268.0));
    assert_eq!(view.scrollbar_y_view().max_position(), 232.0);
    assert_eq!(view.scrollbar_y_view().page_step(), 268.0);
}

#[test]
fn test_styled_scrollbar_thickness() {
    let mut view = ScrollView::new();
    view.scrollbar_y_view_mut()
        .style_mut()
        .apply_declarations("width: 8px; margin-left: 2px");
    view.add_content(View::new().with_content(FixedSize::new(100.0, 500.0)));
    view.set_margin_box(&surface(), Rect::new(0.0, 0.0, 200.0, 300.0));
    view.layout_children(&surface());

    let bar = view.scrollbar_y_view().geometry();
    assert_eq!(bar.margin_box, Rect::new(190.0, 0.0, 10.0, 300.0));
    assert_eq!(bar.content_box, Rect::new(192.0, 0.0, 8.0, 300.0));
}

#[test]
fn test_max_position_is_rounded() {
    let view = scroll_view_with(View::new().with_content(FixedSize::new(10.0, 300.6)), 200.0, 100.0);
    assert_eq!(view.scrollbar_y_view().max_position(), 201.0);
}

#[test]
fn test_preferred_size_counts_only_scroll_policy() {
    let mut view = tall_view();
    assert_eq!(view.calculate_preferred_width(&surface()), 100.0);
    assert_eq!(view.calculate_preferred_height(&surface(), 100.0), 500.0);

    view.set_overflow(ContentOverflow::Scroll, ContentOverflow::Scroll);
    assert_eq!(view.calculate_preferred_width(&surface()), 116.0);
    assert_eq!(view.calculate_preferred_height(&surface(), 100.0), 516.0);
}

#[test]
fn test_baselines_delegate_to_content() {
    let text = TextLines::new(["one", "two", "three"]);
    let view = scroll_view_with(View::new().with_content(text), 200.0, 300.0);
    assert!((view.calculate_first_baseline_offset(&surface(), 200.0) - 12.8).abs() < 1e-4);
    assert!((view.calculate_last_baseline_offset(&surface(), 200.0) - 44.8).abs() < 1e-4);
}

// =============================================================================
// Wheel
// =============================================================================

#[test]
fn test_wheel_scrolls_three_lines() {
    let mut view = tall_view();
    view.scrollbar_y_view_mut().set_line_step(20.0);

    assert!(wheel_down(&mut view));
    assert_eq!(view.scrollbar_y_view().position(), 60.0);
    assert_offset_matches_bars(&view);
}

#[test]
fn test_wheel_at_end_propagates() {
    let mut view = tall_view();
    view.scrollbar_y_view_mut().set_line_step(20.0);

    let mut consumed = 0;
    while view.scrollbar_y_view().position() < 200.0 {
        assert!(wheel_down(&mut view));
        consumed += 1;
    }
    assert_eq!(consumed, 4);
    assert_eq!(view.scrollbar_y_view().position(), 200.0);

    assert!(!wheel_down(&mut view));
    assert_eq!(view.scrollbar_y_view().position(), 200.0);
}

#[test]
fn test_wheel_up_at_start_propagates() {
    let mut view = tall_view();
    assert!(!wheel(&mut view, PointerButton::WheelUp, Modifiers::empty()));

    wheel_down(&mut view);
    assert!(wheel(&mut view, PointerButton::WheelUp, Modifiers::empty()));
    assert_eq!(view.content_offset(), Point::ORIGIN);
}

#[test]
fn test_shift_wheel_on_hidden_horizontal_bar_propagates() {
    let mut view = tall_view();
    assert!(!wheel(&mut view, PointerButton::WheelDown, Modifiers::SHIFT));
    assert_eq!(view.scrollbar_y_view().position(), 0.0);
}

#[test]
fn test_nested_views_hand_off_at_the_end() {
    let mut inner = tall_view();
    let mut outer = tall_view();
    inner.scrollbar_y_view_mut().set_line_step(100.0);

    let dispatch = |inner: &mut ScrollView, outer: &mut ScrollView| {
        let mut event = PointerEvent::wheel_down();
        inner.on_pointer_press(&mut event);
        if event.is_propagating() {
            outer.on_pointer_press(&mut event);
        }
    };

    dispatch(&mut inner, &mut outer);
    assert_eq!(inner.scrollbar_y_view().position(), 200.0);
    assert_eq!(outer.scrollbar_y_view().position(), 0.0);

    dispatch(&mut inner, &mut outer);
    assert_eq!(outer.scrollbar_y_view().position(), 3.0);
}

#[test]
fn test_configured_wheel_steps() {
    let config = ScrollConfig {
        wheel_steps: 5.0,
        line_step: 4.0,
        ..ScrollConfig::default()
    };
    let mut view = ScrollView::with_config(config);
    view.add_content(View::new().with_content(FixedSize::new(100.0, 500.0)));
    view.set_margin_box(&surface(), Rect::new(0.0, 0.0, 200.0, 300.0));
    view.layout_children(&surface());

    wheel_down(&mut view);
    assert_eq!(view.content_offset(), Point::new(0.0, 20.0));
}

// =============================================================================
// Offset bookkeeping
// =============================================================================

#[test]
fn test_offset_identity_after_layout() {
    let mut view = tall_view();
    view.scrollbar_y_view_mut().set_position(120.0);
    view.layout_children(&surface());
    assert_offset_matches_bars(&view);
    assert_eq!(view.content_offset(), Point::new(0.0, 120.0));
}

#[test]
fn test_set_content_offset_is_clamped() {
    let mut view = tall_view();
    view.set_content_offset(Point::new(50.0, 900.0));
    assert_eq!(view.content_offset(), Point::new(0.0, 200.0));
    assert_offset_matches_bars(&view);
}

#[test]
fn test_layout_is_idempotent() {
    let mut view = tall_view();
    view.set_content_offset(Point::new(0.0, 75.0));
    view.layout_children(&surface());

    let first = (
        *view.scrollbar_x_view().geometry(),
        *view.scrollbar_y_view().geometry(),
        view.scrollbar_y_view().max_position(),
        view.content_offset(),
    );
    view.layout_children(&surface());
    let second = (
        *view.scrollbar_x_view().geometry(),
        *view.scrollbar_y_view().geometry(),
        view.scrollbar_y_view().max_position(),
        view.content_offset(),
    );
    assert_eq!(first, second);
}

#[test]
fn test_resize_keeps_position_when_in_range() {
    let mut view = tall_view();
    view.set_content_offset(Point::new(0.0, 150.0));

    view.set_margin_box(&surface(), Rect::new(0.0, 0.0, 200.0, 320.0));
    view.layout_children(&surface());
    assert_eq!(view.content_offset(), Point::new(0.0, 150.0));

    view.set_margin_box(&surface(), Rect::new(0.0, 0.0, 200.0, 450.0));
    view.layout_children(&surface());
    assert_eq!(view.scrollbar_y_view().max_position(), 50.0);
    assert_eq!(view.content_offset(), Point::new(0.0, 50.0));
}

#[test]
fn test_content_growing_past_viewport_shows_bar() {
    let mut view = scroll_view_with(
        View::new().with_id("body").with_content(FixedSize::new(100.0, 100.0)),
        200.0,
        300.0,
    );
    assert!(view.scrollbar_y_view().hidden());

    view.find_mut("body")
        .unwrap()
        .set_content(Box::new(FixedSize::new(100.0, 800.0)));
    assert!(view.needs_layout());
    view.layout_children(&surface());
    assert!(!view.scrollbar_y_view().hidden());
    assert_eq!(view.scrollbar_y_view().max_position(), 500.0);
}

#[test]
fn test_disable_keeps_position_and_visibility() {
    let mut view = tall_view();
    view.set_content_offset(Point::new(0.0, 40.0));
    view.set_disabled();

    assert!(view.disabled());
    assert!(!wheel_down(&mut view));
    assert!(!view.scrollbar_y_view().hidden());
    assert_eq!(view.content_offset(), Point::new(0.0, 40.0));

    view.set_enabled();
    assert!(wheel_down(&mut view));
    assert_eq!(view.content_offset(), Point::new(0.0, 43.0));
}
