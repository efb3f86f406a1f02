//! The owning view tree.
//!
//! Every [`View`] owns its children outright. Code that needs to point back
//! at a parent or at the top-level view holds a [`ViewPath`] (child indices
//! from the root) instead of a pointer, so the tree has no ownership cycles
//! and can be walked in either direction through the root.
//!
//! Child geometry is expressed in the parent's content-box coordinates,
//! shifted by the parent's content offset when the parent scrolls.

use log::debug;
use trellis_style::computed::computed_length;
use trellis_style::{FontMetrics, Style, StyleValueType};

use crate::box_geometry::BoxGeometry;
use crate::content::{Content, Surface};
use crate::error::{Result, ViewError};
use crate::geometry::{Point, Rect};

/// A path from the root to a specific view in the tree.
///
/// Each element is the child index at that level of the tree.
/// For example, `[0, 2, 1]` means:
/// - Start at root
/// - Take child 0
/// - Take child 2 of that
/// - Take child 1 of that (the target)
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct ViewPath {
    indices: Vec<usize>,
}

impl ViewPath {
    /// Create an empty path (pointing to root).
    pub fn new() -> Self {
        Self { indices: Vec::new() }
    }

    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    pub fn depth(&self) -> usize {
        self.indices.len()
    }

    pub fn is_root(&self) -> bool {
        self.indices.is_empty()
    }

    pub fn push(&mut self, index: usize) {
        self.indices.push(index);
    }

    pub fn pop(&mut self) -> Option<usize> {
        self.indices.pop()
    }

    /// Path of the child at `index` below this one.
    pub fn child(&self, index: usize) -> ViewPath {
        let mut path = self.clone();
        path.push(index);
        path
    }

    /// Path of the parent, or `None` for the root.
    pub fn parent(&self) -> Option<ViewPath> {
        let (_, rest) = self.indices.split_last()?;
        Some(ViewPath {
            indices: rest.to_vec(),
        })
    }
}

impl From<Vec<usize>> for ViewPath {
    fn from(indices: Vec<usize>) -> Self {
        Self { indices }
    }
}

/// A node in the view tree.
#[derive(Debug)]
pub struct View {
    id: Option<String>,
    style: Style,
    geometry: BoxGeometry,
    children: Vec<View>,
    content: Option<Box<dyn Content>>,
    hidden: bool,
    content_offset: Point,
    needs_layout: bool,
}

impl Default for View {
    fn default() -> Self {
        Self::new()
    }
}

impl View {
    pub fn new() -> Self {
        Self {
            id: None,
            style: Style::new(),
            geometry: BoxGeometry::default(),
            children: Vec::new(),
            content: None,
            hidden: false,
            content_offset: Point::ORIGIN,
            needs_layout: true,
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn with_style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    pub fn with_content(mut self, content: impl Content + 'static) -> Self {
        self.content = Some(Box::new(content));
        self
    }

    pub fn with_child(mut self, child: View) -> Self {
        self.children.push(child);
        self
    }

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn set_id(&mut self, id: impl Into<String>) {
        self.id = Some(id.into());
    }

    pub fn style(&self) -> &Style {
        &self.style
    }

    /// Mutable access to the style. The view is marked for layout.
    pub fn style_mut(&mut self) -> &mut Style {
        self.needs_layout = true;
        &mut self.style
    }

    pub fn set_style(&mut self, style: Style) {
        self.style = style;
        self.needs_layout = true;
    }

    /// Apply a declaration block to this view's style.
    ///
    /// Unlike [`Style::apply_declarations`], the first invalid declaration
    /// stops the block and is returned.
    pub fn apply_style(&mut self, block: &str) -> Result<()> {
        self.needs_layout = true;
        for declaration in block.split(';').filter(|d| !d.trim().is_empty()) {
            let (name, value) = trellis_style::parser::parse_declaration(declaration)?;
            self.style.set_declaration(&name, &value)?;
        }
        Ok(())
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

    pub fn children(&self) -> &[View] {
        &self.children
    }

    pub fn child(&self, index: usize) -> Option<&View> {
        self.children.get(index)
    }

    pub fn child_mut(&mut self, index: usize) -> Option<&mut View> {
        self.children.get_mut(index)
    }

    /// Append a child and return its index.
    pub fn add_child(&mut self, child: View) -> usize {
        self.children.push(child);
        self.needs_layout = true;
        self.children.len() - 1
    }

    pub fn remove_child(&mut self, index: usize) -> Option<View> {
        if index >= self.children.len() {
            return None;
        }
        self.needs_layout = true;
        Some(self.children.remove(index))
    }

    pub fn content(&self) -> Option<&dyn Content> {
        self.content.as_deref()
    }

    pub fn set_content(&mut self, content: Box<dyn Content>) {
        self.content = Some(content);
        self.needs_layout = true;
    }

    pub fn hidden(&self) -> bool {
        self.hidden
    }

    pub fn set_hidden(&mut self, hidden: bool) {
        if self.hidden != hidden {
            self.hidden = hidden;
            self.needs_layout = true;
        }
    }

    /// Translation applied to the children when they are placed on screen.
    pub fn content_offset(&self) -> Point {
        self.content_offset
    }

    pub fn set_content_offset(&mut self, offset: Point) {
        self.content_offset = offset;
    }

    pub fn needs_layout(&self) -> bool {
        self.needs_layout
    }

    pub fn set_needs_layout(&mut self) {
        self.needs_layout = true;
    }

    // ---------------------------------------------------------------------
    // Lookup
    // ---------------------------------------------------------------------

    /// Find a view by id in this subtree (including this view).
    pub fn find(&self, id: &str) -> Result<&View> {
        let path = self.path_to(id).ok_or_else(|| ViewError::NotFound(id.to_string()))?;
        self.at_path(&path).ok_or_else(|| ViewError::NotFound(id.to_string()))
    }

    pub fn find_mut(&mut self, id: &str) -> Result<&mut View> {
        let path = self.path_to(id).ok_or_else(|| ViewError::NotFound(id.to_string()))?;
        self.at_path_mut(&path)
            .ok_or_else(|| ViewError::NotFound(id.to_string()))
    }

    /// Depth-first search for the path to the view with `id`.
    pub fn path_to(&self, id: &str) -> Option<ViewPath> {
        if self.id() == Some(id) {
            return Some(ViewPath::new());
        }
        self.children.iter().enumerate().find_map(|(index, child)| {
            child.path_to(id).map(|sub| {
                let mut path = ViewPath::from(vec![index]);
                path.indices.extend(sub.indices);
                path
            })
        })
    }

    pub fn at_path(&self, path: &ViewPath) -> Option<&View> {
        path.indices()
            .iter()
            .try_fold(self, |view, &index| view.children.get(index))
    }

    pub fn at_path_mut(&mut self, path: &ViewPath) -> Option<&mut View> {
        let mut view = self;
        for &index in path.indices() {
            view = view.children.get_mut(index)?;
        }
        Some(view)
    }

    /// Content box of the view at `path`, in this view's coordinates.
    ///
    /// Accounts for every ancestor's content box origin and content offset.
    pub fn content_box_at(&self, path: &ViewPath) -> Option<Rect> {
        let mut view = self;
        let mut origin = Point::ORIGIN;
        for &index in path.indices() {
            origin = origin + view.geometry.content_box.origin() - view.content_offset;
            view = view.children.get(index)?;
        }
        Some(view.geometry.content_box.translate(origin))
    }

    // ---------------------------------------------------------------------
    // Measurement
    // ---------------------------------------------------------------------

    fn visible_children(&self) -> impl Iterator<Item = &View> {
        self.children.iter().filter(|child| !child.hidden)
    }

    fn specified_length(&self, property: &str, metrics: &FontMetrics) -> Option<f32> {
        self.style
            .is(property, StyleValueType::Length)
            .then(|| computed_length(&self.style, property, metrics))
    }

    /// Preferred width of the margin box.
    ///
    /// A length `width` wins; otherwise the content's width, or the widest
    /// visible child.
    pub fn preferred_width(&self, surface: &dyn Surface) -> f32 {
        let metrics = surface.font_metrics(&self.style);
        let inner = match self.specified_length("width", &metrics) {
            Some(width) => width,
            None => match &self.content {
                Some(content) => content.preferred_width(&metrics),
                None => self
                    .visible_children()
                    .map(|child| child.preferred_width(surface))
                    .fold(0.0, f32::max),
            },
        };
        inner + BoxGeometry::extents(&self.style, &metrics).horizontal()
    }

    /// Preferred height of the margin box when laid out `width` wide.
    ///
    /// A length `height` wins; otherwise the content's height, or the
    /// visible children stacked vertically.
    pub fn preferred_height(&self, surface: &dyn Surface, width: f32) -> f32 {
        let metrics = surface.font_metrics(&self.style);
        let extents = BoxGeometry::extents(&self.style, &metrics);
        let inner_width = (width - extents.horizontal()).max(0.0);
        let inner = match self.specified_length("height", &metrics) {
            Some(height) => height,
            None => match &self.content {
                Some(content) => content.preferred_height(&metrics, inner_width),
                None => self
                    .visible_children()
                    .map(|child| child.preferred_height(surface, inner_width))
                    .sum(),
            },
        };
        inner + extents.vertical()
    }

    /// Distance from the top of the margin box to the first baseline.
    pub fn first_baseline_offset(&self, surface: &dyn Surface, width: f32) -> f32 {
        let metrics = surface.font_metrics(&self.style);
        let extents = BoxGeometry::extents(&self.style, &metrics);
        let inner_width = (width - extents.horizontal()).max(0.0);
        let inner = match &self.content {
            Some(content) => content.first_baseline_offset(&metrics, inner_width),
            None => self
                .visible_children()
                .next()
                .map(|child| child.first_baseline_offset(surface, inner_width))
                .unwrap_or(0.0),
        };
        extents.top + inner
    }

    /// Distance from the top of the margin box to the last baseline.
    pub fn last_baseline_offset(&self, surface: &dyn Surface, width: f32) -> f32 {
        let metrics = surface.font_metrics(&self.style);
        let extents = BoxGeometry::extents(&self.style, &metrics);
        let inner_width = (width - extents.horizontal()).max(0.0);
        let inner = match &self.content {
            Some(content) => content.last_baseline_offset(&metrics, inner_width),
            None => {
                let visible: Vec<&View> = self.visible_children().collect();
                match visible.split_last() {
                    Some((last, before)) => {
                        let above: f32 = before
                            .iter()
                            .map(|child| child.preferred_height(surface, inner_width))
                            .sum();
                        above + last.last_baseline_offset(surface, inner_width)
                    }
                    None => 0.0,
                }
            }
        };
        extents.top + inner
    }

    // ---------------------------------------------------------------------
    // Layout
    // ---------------------------------------------------------------------

    /// Stack the visible children top to bottom at the full content width.
    ///
    /// Each child gets its preferred height for that width and is then laid
    /// out recursively. Hidden children keep their old geometry.
    pub fn layout_children(&mut self, surface: &dyn Surface) {
        let width = self.geometry.content_box.width;
        let mut y = 0.0;
        for child in self.children.iter_mut().filter(|child| !child.hidden) {
            let height = child.preferred_height(surface, width);
            let metrics = surface.font_metrics(&child.style);
            let geometry = BoxGeometry::from_margin_box(&child.style, &metrics, Rect::new(0.0, y, width, height));
            child.set_geometry(geometry);
            child.layout_children(surface);
            y += height;
        }
        if let Some(id) = &self.id {
            debug!("layout {id}: {} children, {y}px tall", self.children.len());
        }
        self.needs_layout = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{FixedSize, MeasureSurface};

    fn tree() -> View {
        View::new()
            .with_id("root")
            .with_child(View::new().with_id("a").with_content(FixedSize::new(50.0, 10.0)))
            .with_child(
                View::new()
                    .with_id("b")
                    .with_child(View::new().with_id("b0").with_content(FixedSize::new(80.0, 20.0))),
            )
    }

    #[test]
    fn test_view_path_navigation() {
        let path = ViewPath::from(vec![0, 2, 1]);
        assert_eq!(path.depth(), 3);
        assert_eq!(path.parent(), Some(ViewPath::from(vec![0, 2])));
        assert_eq!(ViewPath::new().parent(), None);
        assert_eq!(ViewPath::new().child(4).indices(), &[4]);
    }

    #[test]
    fn test_find_by_id() {
        let root = tree();
        assert_eq!(root.find("b0").unwrap().id(), Some("b0"));
        assert_eq!(root.path_to("b0"), Some(ViewPath::from(vec![1, 0])));
        assert_eq!(root.path_to("root"), Some(ViewPath::new()));
    }

    #[test]
    fn test_find_missing_is_not_found() {
        let mut root = tree();
        assert_eq!(
            root.find("nope").unwrap_err(),
            ViewError::NotFound("nope".to_string())
        );
        assert!(root.find_mut("nope").is_err());
    }

    #[test]
    fn test_find_mut_edits_in_place() {
        let mut root = tree();
        root.find_mut("a").unwrap().set_hidden(true);
        assert!(root.child(0).unwrap().hidden());
    }

    #[test]
    fn test_preferred_size_stacks_children() {
        let root = tree();
        let surface = MeasureSurface::default();
        assert_eq!(root.preferred_width(&surface), 80.0);
        assert_eq!(root.preferred_height(&surface, 100.0), 30.0);
    }

    #[test]
    fn test_preferred_size_adds_extents_and_skips_hidden() {
        let mut root = tree();
        root.apply_style("padding: 5px; border-width: 1px").unwrap();
        root.find_mut("a").unwrap().set_hidden(true);
        let surface = MeasureSurface::default();
        assert_eq!(root.preferred_width(&surface), 92.0);
        assert_eq!(root.preferred_height(&surface, 100.0), 32.0);
    }

    #[test]
    fn test_specified_size_wins() {
        let mut view = View::new().with_content(FixedSize::new(50.0, 10.0));
        view.apply_style("width: 2em; height: 30px").unwrap();
        let surface = MeasureSurface::default();
        assert_eq!(view.preferred_width(&surface), 32.0);
        assert_eq!(view.preferred_height(&surface, 0.0), 30.0);
    }

    #[test]
    fn test_font_relative_padding_counts_toward_size() {
        let mut view = View::new().with_content(FixedSize::new(50.0, 10.0));
        view.apply_style("padding: 1em").unwrap();
        let surface = MeasureSurface::default();
        assert_eq!(view.preferred_width(&surface), 82.0);
        assert_eq!(view.preferred_height(&surface, 100.0), 42.0);

        let mut root = View::new().with_child(view);
        root.set_geometry(BoxGeometry::from_margin_box(root.style(), &FontMetrics::default(), Rect::new(0.0, 0.0, 100.0, 100.0)));
        root.layout_children(&surface);
        let child = root.child(0).unwrap().geometry();
        assert_eq!(child.margin_box, Rect::new(0.0, 0.0, 100.0, 42.0));
        assert_eq!(child.content_box, Rect::new(16.0, 16.0, 68.0, 10.0));
    }

    #[test]
    fn test_apply_style_reports_invalid_declaration() {
        let mut view = View::new();
        let err = view.apply_style("width: 1px; height: red").unwrap_err();
        assert!(matches!(err, ViewError::Style(_)));
        assert_eq!(view.style().length("width"), 1.0);
    }

    #[test]
    fn test_layout_children_stacks() {
        let mut root = tree();
        root.set_geometry(BoxGeometry::from_margin_box(root.style(), &FontMetrics::default(), Rect::new(0.0, 0.0, 100.0, 100.0)));
        root.layout_children(&MeasureSurface::default());

        assert!(!root.needs_layout());
        assert_eq!(root.child(0).unwrap().geometry().margin_box, Rect::new(0.0, 0.0, 100.0, 10.0));
        assert_eq!(root.child(1).unwrap().geometry().margin_box, Rect::new(0.0, 10.0, 100.0, 20.0));
        let b0 = root.find("b0").unwrap();
        assert_eq!(b0.geometry().margin_box, Rect::new(0.0, 0.0, 100.0, 20.0));
    }

    #[test]
    fn test_content_box_at_applies_offsets() {
        let mut root = tree();
        root.set_geometry(BoxGeometry::from_margin_box(root.style(), &FontMetrics::default(), Rect::new(0.0, 0.0, 100.0, 100.0)));
        root.layout_children(&MeasureSurface::default());
        root.set_content_offset(Point::new(0.0, 4.0));

        let path = root.path_to("b0").unwrap();
        assert_eq!(root.content_box_at(&path), Some(Rect::new(0.0, 6.0, 100.0, 20.0)));
        assert_eq!(root.content_box_at(&ViewPath::from(vec![7])), None);
    }

    #[test]
    fn test_baselines_follow_first_and_last_child() {
        let root = tree();
        let surface = MeasureSurface::default();
        assert_eq!(root.first_baseline_offset(&surface, 100.0), 0.0);
        assert_eq!(root.last_baseline_offset(&surface, 100.0), 30.0);
    }
}
