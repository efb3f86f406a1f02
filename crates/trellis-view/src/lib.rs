//! # trellis-view
//!
//! Box geometry, an owning view tree and the scroll container layout.
//!
//! - [`BoxGeometry`] nests margin, border, padding and content boxes read
//!   from a [`Style`](trellis_style::Style).
//! - [`View`] is a node of the owning tree; [`ViewPath`] addresses nodes
//!   without back pointers.
//! - [`ScrollView`] sizes a content region and its two [`ScrollBar`]s and
//!   turns wheel notches into scroll positions.
//!
//! ```rust
//! use trellis_view::{FixedSize, MeasureSurface, PointerEvent, Rect, ScrollView, View};
//!
//! let mut scroll = ScrollView::new();
//! scroll.add_content(View::new().with_content(FixedSize::new(100.0, 500.0)));
//! let surface = MeasureSurface::default();
//! scroll.set_margin_box(&surface, Rect::new(0.0, 0.0, 200.0, 300.0));
//! scroll.layout_children(&surface);
//!
//! assert!(!scroll.scrollbar_y_view().hidden());
//! assert_eq!(scroll.scrollbar_y_view().max_position(), 200.0);
//!
//! let mut wheel = PointerEvent::wheel_down();
//! scroll.on_pointer_press(&mut wheel);
//! assert!(!wheel.is_propagating());
//! ```

pub mod box_geometry;
pub mod config;
pub mod content;
pub mod error;
pub mod event;
pub mod geometry;
pub mod scroll_view;
pub mod scrollbar;
pub mod view;

pub use box_geometry::BoxGeometry;
pub use config::ScrollConfig;
pub use content::{Content, FixedSize, MeasureSurface, Surface, TextLines};
pub use error::{Result, ViewError};
pub use event::{Modifiers, PointerButton, PointerEvent, PointerEventKind};
pub use geometry::{Edges, Point, Rect, Size};
pub use scroll_view::ScrollView;
pub use scrollbar::{Orientation, ScrollBar};
pub use view::{View, ViewPath};

// Re-export the log crate so users can use trellis_view::log::info!, etc.
pub use log;
