//! Scrollable container with optional horizontal and vertical scrollbars.
//!
//! A [`ScrollView`] owns a clipped content container and two
//! [`ScrollBar`]s. Layout decides which bars are needed, sizes the visible
//! part of the content and keeps the content offset equal to the bar
//! positions.
//!
//! Whether one bar is needed depends on how much room the other leaves, so
//! the two axes are settled in a fixed order instead of iterating:
//!
//! 1. The vertical bar is decided from the content height measured at the
//!    full viewport width.
//! 2. The horizontal bar is decided from the content's preferred width.
//! 3. The content view is the viewport minus both bar thicknesses.
//!
//! Content is not measured again against the narrowed view, so text that
//! would reflow once the vertical bar takes its space can be a little off.

use log::{debug, trace};
use trellis_style::{ContentOverflow, Style};

use crate::box_geometry::BoxGeometry;
use crate::config::ScrollConfig;
use crate::content::Surface;
use crate::error::Result;
use crate::event::{PointerButton, PointerEvent, PointerEventKind};
use crate::geometry::{Point, Rect};
use crate::scrollbar::{Orientation, ScrollBar};
use crate::view::View;

/// Scroll container laying out a content view and two scrollbars.
#[derive(Debug)]
pub struct ScrollView {
    style: Style,
    geometry: BoxGeometry,
    content: View,
    scroll_x: ScrollBar,
    scroll_y: ScrollBar,
    overflow_x: ContentOverflow,
    overflow_y: ContentOverflow,
    disabled: bool,
    needs_layout: bool,
    config: ScrollConfig,
}

impl Default for ScrollView {
    fn default() -> Self {
        Self::new()
    }
}

impl ScrollView {
    pub fn new() -> Self {
        Self::with_config(ScrollConfig::default())
    }

    /// A scroll view that hides content horizontally and scrolls vertically
    /// when needed.
    pub fn with_config(config: ScrollConfig) -> Self {
        let mut scroll_x = ScrollBar::with_config(Orientation::Horizontal, &config);
        let mut scroll_y = ScrollBar::with_config(Orientation::Vertical, &config);
        for bar in [&mut scroll_x, &mut scroll_y] {
            bar.set_hidden(true);
            bar.set_lock_to_line(true);
        }

        let mut content = View::new();
        content.style_mut().apply_declarations("flex: 1 1 auto");

        Self {
            style: Style::new(),
            geometry: BoxGeometry::default(),
            content,
            scroll_x,
            scroll_y,
            overflow_x: ContentOverflow::Hidden,
            overflow_y: ContentOverflow::Automatic,
            disabled: false,
            needs_layout: true,
            config,
        }
    }

    pub fn config(&self) -> &ScrollConfig {
        &self.config
    }

    pub fn style(&self) -> &Style {
        &self.style
    }

    /// Replace the style. `overflow-x`/`overflow-y` keywords it carries
    /// become the overflow policies.
    pub fn set_style(&mut self, style: Style) {
        self.style = style;
        self.adopt_overflow(true, true);
        self.needs_layout = true;
    }

    /// Parse a declaration block on top of the current style.
    ///
    /// Only overflow declared in `block` changes the overflow policies, so
    /// a policy set through [`ScrollView::set_overflow_y`] survives later
    /// unrelated declarations. Nothing is applied if any declaration fails.
    pub fn apply_style(&mut self, block: &str) -> Result<()> {
        let mut style = self.style.clone();
        let (mut declares_x, mut declares_y) = (false, false);
        for declaration in block.split(';').filter(|d| !d.trim().is_empty()) {
            let (name, value) = trellis_style::parser::parse_declaration(declaration)?;
            style.set_declaration(&name, &value)?;
            declares_x |= matches!(name.as_str(), "overflow" | "overflow-x");
            declares_y |= matches!(name.as_str(), "overflow" | "overflow-y");
        }
        self.style = style;
        self.adopt_overflow(declares_x, declares_y);
        self.needs_layout = true;
        Ok(())
    }

    fn adopt_overflow(&mut self, x: bool, y: bool) {
        let overflow_x = x.then(|| ContentOverflow::from_style(&self.style, "overflow-x")).flatten();
        let overflow_y = y.then(|| ContentOverflow::from_style(&self.style, "overflow-y")).flatten();
        if let Some(overflow) = overflow_x {
            self.set_overflow_x(overflow);
        }
        if let Some(overflow) = overflow_y {
            self.set_overflow_y(overflow);
        }
    }

    pub fn geometry(&self) -> &BoxGeometry {
        &self.geometry
    }

    pub fn set_geometry(&mut self, geometry: BoxGeometry) {
        if self.geometry != geometry {
            self.geometry = geometry;
            self.needs_layout = true;
        }
    }

    /// Place the scroll view so its margin box fills `rect`.
    pub fn set_margin_box(&mut self, surface: &dyn Surface, rect: Rect) {
        let metrics = surface.font_metrics(&self.style);
        self.set_geometry(BoxGeometry::from_margin_box(&self.style, &metrics, rect));
    }

    /// The clipped container holding the scrolled views.
    pub fn content_view(&self) -> &View {
        &self.content
    }

    pub fn content_view_mut(&mut self) -> &mut View {
        self.needs_layout = true;
        &mut self.content
    }

    /// Append a view to the content container.
    pub fn add_content(&mut self, view: View) -> usize {
        self.needs_layout = true;
        self.content.add_child(view)
    }

    pub fn scrollbar_x_view(&self) -> &ScrollBar {
        &self.scroll_x
    }

    /// Moving a bar through this reference reaches the content view's
    /// offset at the next layout; [`ScrollView::content_offset`] sees it
    /// immediately.
    pub fn scrollbar_x_view_mut(&mut self) -> &mut ScrollBar {
        self.needs_layout = true;
        &mut self.scroll_x
    }

    pub fn scrollbar_y_view(&self) -> &ScrollBar {
        &self.scroll_y
    }

    pub fn scrollbar_y_view_mut(&mut self) -> &mut ScrollBar {
        self.needs_layout = true;
        &mut self.scroll_y
    }

    /// Find a view inside the content by id.
    pub fn find(&self, id: &str) -> Result<&View> {
        self.content.find(id)
    }

    pub fn find_mut(&mut self, id: &str) -> Result<&mut View> {
        self.needs_layout = true;
        self.content.find_mut(id)
    }

    pub fn overflow_x(&self) -> ContentOverflow {
        self.overflow_x
    }

    pub fn overflow_y(&self) -> ContentOverflow {
        self.overflow_y
    }

    pub fn set_overflow_x(&mut self, overflow: ContentOverflow) {
        if self.overflow_x != overflow {
            self.overflow_x = overflow;
            self.needs_layout = true;
        }
    }

    pub fn set_overflow_y(&mut self, overflow: ContentOverflow) {
        if self.overflow_y != overflow {
            self.overflow_y = overflow;
            self.needs_layout = true;
        }
    }

    pub fn set_overflow(&mut self, overflow_x: ContentOverflow, overflow_y: ContentOverflow) {
        self.set_overflow_x(overflow_x);
        self.set_overflow_y(overflow_y);
    }

    pub fn needs_layout(&self) -> bool {
        self.needs_layout
    }

    pub fn set_needs_layout(&mut self) {
        self.needs_layout = true;
    }

    /// Scroll offset of the content, read from the two bar positions.
    pub fn content_offset(&self) -> Point {
        Point::new(self.scroll_x.position(), self.scroll_y.position())
    }

    /// Scroll to `offset`.
    ///
    /// The offset goes through the scrollbars, so it is clamped to their
    /// ranges and snapped to whole lines; the stored offset is always the
    /// pair of bar positions.
    pub fn set_content_offset(&mut self, offset: Point) {
        self.scroll_x.set_position(offset.x);
        self.scroll_y.set_position(offset.y);
        self.sync_content_offset();
    }

    fn sync_content_offset(&mut self) {
        let offset = self.content_offset();
        self.content.set_content_offset(offset);
    }

    fn scroll_needed(policy: ContentOverflow, content_extent: f32, view_extent: f32) -> bool {
        match policy {
            ContentOverflow::Scroll => true,
            ContentOverflow::Automatic => content_extent > view_extent,
            ContentOverflow::Visible | ContentOverflow::Hidden => false,
        }
    }

    fn measures(policy: ContentOverflow) -> bool {
        matches!(policy, ContentOverflow::Scroll | ContentOverflow::Automatic)
    }

    /// Size the scrollbars and content view to the current content box,
    /// then lay out the content.
    ///
    /// Scroll positions carry over from the previous pass and are only
    /// clamped when the new range is shorter.
    pub fn layout_children(&mut self, surface: &dyn Surface) {
        let width = self.geometry.content_box.width;
        let height = self.geometry.content_box.height;

        let mut content_height = 0.0;
        let mut y_scroll_needed = false;
        let mut y_scroll_width = 0.0;
        if Self::measures(self.overflow_y) {
            content_height = self.content.preferred_height(surface, width);
            y_scroll_needed = Self::scroll_needed(self.overflow_y, content_height, height);
            if y_scroll_needed {
                y_scroll_width = self.scroll_y.preferred_width(surface);
            }
        }

        let mut content_width = 0.0;
        let mut x_scroll_needed = false;
        let mut x_scroll_height = 0.0;
        if Self::measures(self.overflow_x) {
            content_width = self.content.preferred_width(surface);
            x_scroll_needed = Self::scroll_needed(self.overflow_x, content_width, width);
            if x_scroll_needed {
                x_scroll_height = self.scroll_x.preferred_height(surface);
            }
        }

        let content_view_width = (width - y_scroll_width).max(0.0);
        let content_view_height = (height - x_scroll_height).max(0.0);

        Self::update_range(&mut self.scroll_x, x_scroll_needed, content_width, content_view_width);
        Self::update_range(&mut self.scroll_y, y_scroll_needed, content_height, content_view_height);

        debug!(
            "scroll view layout: viewport {width}x{height}, content {content_width}x{content_height}, \
             bars x={x_scroll_needed} y={y_scroll_needed}, view {content_view_width}x{content_view_height}"
        );

        self.scroll_x.set_margin_box(
            surface,
            Rect::new(0.0, content_view_height, content_view_width, x_scroll_height),
        );
        self.scroll_y.set_margin_box(
            surface,
            Rect::new(content_view_width, 0.0, y_scroll_width, content_view_height),
        );

        let container = BoxGeometry::from_margin_box(
            self.content.style(),
            &surface.font_metrics(self.content.style()),
            Rect::new(0.0, 0.0, content_view_width, content_view_height),
        );
        self.content.set_geometry(container);
        self.content.layout_children(surface);

        self.sync_content_offset();
        self.needs_layout = false;
    }

    /// Range of a bar for one pass. A bar that is not needed has an empty
    /// range, which also scrolls its axis back to the start.
    fn update_range(bar: &mut ScrollBar, needed: bool, content_extent: f32, view_extent: f32) {
        if needed {
            bar.set_max_position((content_extent - view_extent).max(0.0).round());
            bar.set_page_step(view_extent);
        } else {
            bar.set_max_position(0.0);
        }
        bar.set_hidden(!needed);
    }

    /// Preferred content-box width.
    ///
    /// Only an unconditional vertical scrollbar adds to it; an automatic
    /// one never inflates the intrinsic size.
    pub fn calculate_preferred_width(&self, surface: &dyn Surface) -> f32 {
        let mut width = self.content.preferred_width(surface);
        if self.overflow_y == ContentOverflow::Scroll {
            width += self.scroll_y.preferred_width(surface);
        }
        width
    }

    /// Preferred content-box height at `width`.
    pub fn calculate_preferred_height(&self, surface: &dyn Surface, width: f32) -> f32 {
        let mut height = self.content.preferred_height(surface, width);
        if self.overflow_x == ContentOverflow::Scroll {
            height += self.scroll_x.preferred_height(surface);
        }
        height
    }

    pub fn calculate_first_baseline_offset(&self, surface: &dyn Surface, width: f32) -> f32 {
        self.content.first_baseline_offset(surface, width)
    }

    pub fn calculate_last_baseline_offset(&self, surface: &dyn Surface, width: f32) -> f32 {
        self.content.last_baseline_offset(surface, width)
    }

    /// Handle a pointer press. Wheel notches scroll the view.
    ///
    /// Shift selects the horizontal bar. The event is consumed only when
    /// the position actually moved, so an ancestor can keep scrolling once
    /// this view reaches an end.
    pub fn on_pointer_press(&mut self, event: &mut PointerEvent) {
        if self.disabled || event.kind != PointerEventKind::Press {
            return;
        }

        let direction = match event.button {
            PointerButton::WheelDown => 1.0,
            PointerButton::WheelUp => -1.0,
            _ => return,
        };

        let wheel_steps = self.config.wheel_steps;
        let bar = if event.shift_down() {
            &mut self.scroll_x
        } else {
            &mut self.scroll_y
        };
        if bar.hidden() {
            return;
        }

        let old_position = bar.position();
        bar.set_position(old_position + direction * wheel_steps * bar.line_step());
        let moved = bar.position() != old_position;
        trace!(
            "wheel {:?}: {old_position} -> {}, consumed={moved}",
            bar.orientation(),
            bar.position()
        );

        if moved {
            self.sync_content_offset();
            event.stop_propagation();
        }
    }

    pub fn disabled(&self) -> bool {
        self.disabled
    }

    /// Make both scrollbars non-interactive; positions and visibility stay.
    pub fn set_disabled(&mut self) {
        if !self.disabled {
            self.disabled = true;
            self.scroll_x.set_disabled();
            self.scroll_y.set_disabled();
        }
    }

    pub fn set_enabled(&mut self) {
        if self.disabled {
            self.disabled = false;
            self.scroll_x.set_enabled();
            self.scroll_y.set_enabled();
        }
    }
}
