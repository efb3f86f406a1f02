//! Margin, border, padding and content boxes.
//!
//! ```text
//! +--------------- margin box ---------------+
//! |  +------------ border box ------------+  |
//! |  |  +--------- padding box ---------+ |  |
//! |  |  |          content box          | |  |
//! |  |  +-------------------------------+ |  |
//! |  +------------------------------------+  |
//! +------------------------------------------+
//! ```
//!
//! Thicknesses are read from `margin-*`, `border-*-width` and `padding-*`
//! through [`computed_length`], so `em`/`ex` edges resolve against the
//! element's own font metrics and every box edge is in absolute pixels.
//! Each box is the previous one minus its own thickness on all four sides,
//! clamped so no box ever has a negative size.

use trellis_style::computed::computed_length;
use trellis_style::{FontMetrics, Style};

use crate::geometry::{Edges, Rect};

const SIDES: [&str; 4] = ["top", "right", "bottom", "left"];

fn read_edges(style: &Style, metrics: &FontMetrics, prefix: &str, suffix: &str) -> Edges {
    let [top, right, bottom, left] = SIDES.map(|side| {
        computed_length(style, &format!("{prefix}-{side}{suffix}"), metrics).max(0.0)
    });
    Edges::new(top, right, bottom, left)
}

/// The margin edge thickness a style specifies.
pub fn margin_edges(style: &Style, metrics: &FontMetrics) -> Edges {
    read_edges(style, metrics, "margin", "")
}

/// The border edge thickness a style specifies.
pub fn border_edges(style: &Style, metrics: &FontMetrics) -> Edges {
    read_edges(style, metrics, "border", "-width")
}

/// The padding edge thickness a style specifies.
pub fn padding_edges(style: &Style, metrics: &FontMetrics) -> Edges {
    read_edges(style, metrics, "padding", "")
}

/// The four nested boxes of a laid out element.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct BoxGeometry {
    pub margin_box: Rect,
    pub border_box: Rect,
    pub padding_box: Rect,
    pub content_box: Rect,
}

impl BoxGeometry {
    /// Derive all boxes from the outer margin box.
    pub fn from_margin_box(style: &Style, metrics: &FontMetrics, margin_box: Rect) -> Self {
        let border_box = margin_box.shrink(margin_edges(style, metrics));
        let padding_box = border_box.shrink(border_edges(style, metrics));
        let content_box = padding_box.shrink(padding_edges(style, metrics));
        Self {
            margin_box,
            border_box,
            padding_box,
            content_box,
        }
    }

    /// Derive all boxes from the inner content box.
    pub fn from_content_box(style: &Style, metrics: &FontMetrics, content_box: Rect) -> Self {
        let padding_box = content_box.grow(padding_edges(style, metrics));
        let border_box = padding_box.grow(border_edges(style, metrics));
        let margin_box = border_box.grow(margin_edges(style, metrics));
        Self {
            margin_box,
            border_box,
            padding_box,
            content_box,
        }
    }

    /// Combined margin, border and padding thickness of a style.
    pub fn extents(style: &Style, metrics: &FontMetrics) -> Edges {
        margin_edges(style, metrics) + border_edges(style, metrics) + padding_edges(style, metrics)
    }

    pub fn content_width(&self) -> f32 {
        self.content_box.width
    }

    pub fn content_height(&self) -> f32 {
        self.content_box.height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const METRICS: FontMetrics = FontMetrics {
        em_size: 16.0,
        ex_size: 8.0,
    };

    fn boxed_style() -> Style {
        let mut style = Style::new();
        style.apply_declarations("margin: 5px; border-width: 1px 2px; padding: 3px");
        style
    }

    #[test]
    fn test_from_margin_box_nests() {
        let geometry = BoxGeometry::from_margin_box(&boxed_style(), &METRICS, Rect::new(0.0, 0.0, 100.0, 60.0));
        assert_eq!(geometry.border_box, Rect::new(5.0, 5.0, 90.0, 50.0));
        assert_eq!(geometry.padding_box, Rect::new(7.0, 6.0, 86.0, 48.0));
        assert_eq!(geometry.content_box, Rect::new(10.0, 9.0, 80.0, 42.0));
        assert!(geometry.margin_box.contains_rect(&geometry.border_box));
        assert!(geometry.padding_box.contains_rect(&geometry.content_box));
    }

    #[test]
    fn test_from_content_box_inverts_from_margin_box() {
        let style = boxed_style();
        let outer = BoxGeometry::from_content_box(&style, &METRICS, Rect::new(10.0, 9.0, 80.0, 42.0));
        assert_eq!(outer.margin_box, Rect::new(0.0, 0.0, 100.0, 60.0));
        assert_eq!(BoxGeometry::from_margin_box(&style, &METRICS, outer.margin_box), outer);
    }

    #[test]
    fn test_oversized_edges_clamp_to_zero() {
        let geometry = BoxGeometry::from_margin_box(&boxed_style(), &METRICS, Rect::new(0.0, 0.0, 12.0, 8.0));
        assert_eq!(geometry.content_box.width, 0.0);
        assert_eq!(geometry.content_box.height, 0.0);
        assert!(geometry.margin_box.contains_rect(&geometry.border_box));
        assert!(geometry.border_box.contains_rect(&geometry.padding_box));
        assert!(geometry.padding_box.contains_rect(&geometry.content_box));
    }

    #[test]
    fn test_margin_wider_than_box_stays_inside() {
        let mut style = Style::new();
        style.apply_declarations("margin: 8px");
        let geometry = BoxGeometry::from_margin_box(&style, &METRICS, Rect::new(0.0, 0.0, 4.0, 4.0));
        assert_eq!(geometry.border_box, Rect::new(4.0, 4.0, 0.0, 0.0));
        assert!(geometry.margin_box.contains_rect(&geometry.content_box));
    }

    #[test]
    fn test_font_relative_edges_use_metrics() {
        let mut style = Style::new();
        style.apply_declarations("padding: 1em; border-width: 1ex");
        assert_eq!(padding_edges(&style, &METRICS), Edges::uniform(16.0));
        assert_eq!(border_edges(&style, &METRICS), Edges::uniform(8.0));

        let geometry = BoxGeometry::from_margin_box(&style, &FontMetrics::from_em(10.0), Rect::new(0.0, 0.0, 100.0, 60.0));
        assert_eq!(geometry.content_box, Rect::new(15.0, 15.0, 70.0, 30.0));
    }

    #[test]
    fn test_unset_style_has_no_edges() {
        let rect = Rect::new(1.0, 2.0, 3.0, 4.0);
        let geometry = BoxGeometry::from_margin_box(&Style::new(), &METRICS, rect);
        assert_eq!(geometry.content_box, rect);
        assert_eq!(BoxGeometry::extents(&Style::new(), &METRICS), Edges::default());
    }

    #[test]
    fn test_extents_sum_all_edges() {
        let extents = BoxGeometry::extents(&boxed_style(), &METRICS);
        assert_eq!(extents.horizontal(), 20.0);
        assert_eq!(extents.vertical(), 18.0);
    }
}
