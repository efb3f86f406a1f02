//! Measurement of leaf content.
//!
//! Layout only needs to ask content how big it wants to be. A [`Surface`]
//! supplies font metrics for a style and [`Content`] answers with sizes;
//! nothing is drawn while measuring.

use std::fmt;

use trellis_style::{FontMetrics, Style};

/// Font metrics provider used while measuring.
pub trait Surface {
    fn font_metrics(&self, style: &Style) -> FontMetrics;
}

/// Surface that derives metrics from the style's `font-size`.
///
/// Falls back to `default_metrics` when the style sets no absolute
/// font size. The x-height is taken as half the em size.
#[derive(Debug, Clone, Copy, Default)]
pub struct MeasureSurface {
    pub default_metrics: FontMetrics,
}

impl MeasureSurface {
    pub fn new(default_metrics: FontMetrics) -> Self {
        Self { default_metrics }
    }
}

impl Surface for MeasureSurface {
    fn font_metrics(&self, style: &Style) -> FontMetrics {
        match style.length("font-size") {
            size if size > 0.0 => FontMetrics::from_em(size),
            _ => self.default_metrics,
        }
    }
}

/// Leaf content of a view, measured in content-box pixels.
pub trait Content: fmt::Debug {
    fn preferred_width(&self, metrics: &FontMetrics) -> f32;

    fn preferred_height(&self, metrics: &FontMetrics, width: f32) -> f32;

    fn first_baseline_offset(&self, _metrics: &FontMetrics, _width: f32) -> f32 {
        0.0
    }

    fn last_baseline_offset(&self, metrics: &FontMetrics, width: f32) -> f32 {
        self.preferred_height(metrics, width)
    }
}

/// Content with a fixed size regardless of the available width.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedSize {
    pub width: f32,
    pub height: f32,
}

impl FixedSize {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

impl Content for FixedSize {
    fn preferred_width(&self, _metrics: &FontMetrics) -> f32 {
        self.width
    }

    fn preferred_height(&self, _metrics: &FontMetrics, _width: f32) -> f32 {
        self.height
    }
}

/// Lines of text that wrap to the available width.
///
/// Glyphs are measured as half an em wide and lines as one em tall.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TextLines {
    lines: Vec<String>,
}

impl TextLines {
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
        }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    fn line_width(line: &str, metrics: &FontMetrics) -> f32 {
        line.chars().count() as f32 * metrics.em_size * 0.5
    }
}

impl Content for TextLines {
    fn preferred_width(&self, metrics: &FontMetrics) -> f32 {
        self.lines
            .iter()
            .map(|line| Self::line_width(line, metrics))
            .fold(0.0, f32::max)
    }

    fn preferred_height(&self, metrics: &FontMetrics, width: f32) -> f32 {
        let rows: f32 = self
            .lines
            .iter()
            .map(|line| {
                let line_width = Self::line_width(line, metrics);
                if width > 0.0 && line_width > width {
                    (line_width / width).ceil()
                } else {
                    1.0
                }
            })
            .sum();
        rows * metrics.em_size
    }

    fn first_baseline_offset(&self, metrics: &FontMetrics, _width: f32) -> f32 {
        if self.lines.is_empty() {
            0.0
        } else {
            metrics.em_size * 0.8
        }
    }

    fn last_baseline_offset(&self, metrics: &FontMetrics, width: f32) -> f32 {
        let height = self.preferred_height(metrics, width);
        if height == 0.0 {
            0.0
        } else {
            height - metrics.em_size * 0.2
        }
    }
}
