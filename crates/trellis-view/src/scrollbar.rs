//! Scrollbar state.
//!
//! A [`ScrollBar`] tracks one axis of a scroll view: where the view is
//! scrolled to, how far it can go and how much a line or page moves it.
//! Painting the track and thumb is left to the renderer; this type only
//! owns the numbers and the bar's own box.

use log::trace;
use trellis_style::computed::computed_length;
use trellis_style::{Style, StyleValueType};

use crate::box_geometry::BoxGeometry;
use crate::config::ScrollConfig;
use crate::content::Surface;
use crate::geometry::Rect;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

/// Position and range of one scrollbar.
///
/// `position` always lies in `0..=max_position`; every setter re-clamps.
#[derive(Debug, Clone)]
pub struct ScrollBar {
    orientation: Orientation,
    style: Style,
    geometry: BoxGeometry,
    position: f32,
    max_position: f32,
    page_step: f32,
    line_step: f32,
    lock_to_line: bool,
    hidden: bool,
    disabled: bool,
    default_thickness: f32,
}

impl ScrollBar {
    pub fn new(orientation: Orientation) -> Self {
        Self::with_config(orientation, &ScrollConfig::default())
    }

    pub fn with_config(orientation: Orientation, config: &ScrollConfig) -> Self {
        Self {
            orientation,
            style: Style::new(),
            geometry: BoxGeometry::default(),
            position: 0.0,
            max_position: 0.0,
            page_step: 0.0,
            line_step: config.line_step,
            lock_to_line: false,
            hidden: false,
            disabled: false,
            default_thickness: config.scrollbar_thickness,
        }
    }

    pub fn horizontal() -> Self {
        Self::new(Orientation::Horizontal)
    }

    pub fn vertical() -> Self {
        Self::new(Orientation::Vertical)
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn set_orientation(&mut self, orientation: Orientation) {
        self.orientation = orientation;
    }

    pub fn is_horizontal(&self) -> bool {
        self.orientation == Orientation::Horizontal
    }

    pub fn is_vertical(&self) -> bool {
        self.orientation == Orientation::Vertical
    }

    pub fn style(&self) -> &Style {
        &self.style
    }

    pub fn style_mut(&mut self) -> &mut Style {
        &mut self.style
    }

    pub fn geometry(&self) -> &BoxGeometry {
        &self.geometry
    }

    pub fn set_geometry(&mut self, geometry: BoxGeometry) {
        self.geometry = geometry;
    }

    /// Place the bar so its margin box fills `rect`.
    pub fn set_margin_box(&mut self, surface: &dyn Surface, rect: Rect) {
        let metrics = surface.font_metrics(&self.style);
        self.geometry = BoxGeometry::from_margin_box(&self.style, &metrics, rect);
    }

    /// Cross-axis thickness of the bar's content box.
    ///
    /// Comes from the style's `width` (vertical) or `height` (horizontal)
    /// when that is a length, and the configured default otherwise.
    pub fn thickness(&self, surface: &dyn Surface) -> f32 {
        let property = match self.orientation {
            Orientation::Vertical => "width",
            Orientation::Horizontal => "height",
        };
        if self.style.is(property, StyleValueType::Length) {
            computed_length(&self.style, property, &surface.font_metrics(&self.style))
        } else {
            self.default_thickness
        }
    }

    /// Preferred width of the bar's margin box.
    pub fn preferred_width(&self, surface: &dyn Surface) -> f32 {
        let width = match self.orientation {
            Orientation::Vertical => self.thickness(surface),
            Orientation::Horizontal => 0.0,
        };
        let metrics = surface.font_metrics(&self.style);
        BoxGeometry::from_content_box(&self.style, &metrics, Rect::new(0.0, 0.0, width, 0.0))
            .margin_box
            .width
    }

    /// Preferred height of the bar's margin box.
    pub fn preferred_height(&self, surface: &dyn Surface) -> f32 {
        let height = match self.orientation {
            Orientation::Horizontal => self.thickness(surface),
            Orientation::Vertical => 0.0,
        };
        let metrics = surface.font_metrics(&self.style);
        BoxGeometry::from_content_box(&self.style, &metrics, Rect::new(0.0, 0.0, 0.0, height))
            .margin_box
            .height
    }

    pub fn position(&self) -> f32 {
        self.position
    }

    /// Move to `position`, clamped into `0..=max_position`.
    ///
    /// With line locking on, the position snaps to a whole number of line
    /// steps first. Returns whether the position changed.
    pub fn set_position(&mut self, position: f32) -> bool {
        if position.is_nan() {
            return false;
        }

        let snapped = if self.lock_to_line && self.line_step > 0.0 {
            (position / self.line_step).round() * self.line_step
        } else {
            position
        };
        let clamped = snapped.clamp(0.0, self.max_position);
        if clamped == self.position {
            return false;
        }

        trace!("scrollbar {:?}: {} -> {clamped}", self.orientation, self.position);
        self.position = clamped;
        true
    }

    pub fn max_position(&self) -> f32 {
        self.max_position
    }

    /// Set the upper bound of the range; the position is re-clamped.
    pub fn set_max_position(&mut self, max_position: f32) {
        self.max_position = max_position.max(0.0);
        if self.position > self.max_position {
            self.position = self.max_position;
        }
    }

    pub fn page_step(&self) -> f32 {
        self.page_step
    }

    pub fn set_page_step(&mut self, page_step: f32) {
        self.page_step = page_step.max(0.0);
    }

    pub fn line_step(&self) -> f32 {
        self.line_step
    }

    pub fn set_line_step(&mut self, line_step: f32) {
        self.line_step = line_step.max(0.0);
    }

    pub fn lock_to_line(&self) -> bool {
        self.lock_to_line
    }

    pub fn set_lock_to_line(&mut self, lock: bool) {
        self.lock_to_line = lock;
    }

    pub fn hidden(&self) -> bool {
        self.hidden
    }

    pub fn set_hidden(&mut self, hidden: bool) {
        self.hidden = hidden;
    }

    pub fn disabled(&self) -> bool {
        self.disabled
    }

    pub fn set_disabled(&mut self) {
        self.disabled = true;
    }

    pub fn set_enabled(&mut self) {
        self.disabled = false;
    }

    /// Move by `delta` pixels (clamped). Returns whether anything moved.
    pub fn scroll_by(&mut self, delta: f32) -> bool {
        self.set_position(self.position + delta)
    }

    /// Move by a number of line steps; negative goes back.
    pub fn scroll_lines(&mut self, lines: f32) -> bool {
        self.scroll_by(lines * self.line_step)
    }

    /// Move by a number of page steps; negative goes back.
    pub fn scroll_pages(&mut self, pages: f32) -> bool {
        self.scroll_by(pages * self.page_step)
    }

    /// Current position as 0.0-1.0 of the range.
    pub fn fraction(&self) -> f32 {
        if self.max_position == 0.0 {
            0.0
        } else {
            self.position / self.max_position
        }
    }
}
