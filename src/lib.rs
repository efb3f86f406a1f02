//! # trellis
//!
//! Typed style storage and scroll container layout for box-model UIs.
//!
//! This crate bundles the workspace members:
//!
//! - [`style`] (`trellis-style`): the per-element property store, the
//!   declaration parser and computed values.
//! - [`view`] (`trellis-view`): box geometry, the view tree and
//!   [`ScrollView`].
//!
//! ```rust
//! use trellis::prelude::*;
//!
//! # fn main() -> trellis::Result<()> {
//! let mut scroll = ScrollView::new();
//! scroll.apply_style("overflow: hidden auto; padding: 4px")?;
//! scroll.add_content(View::new().with_content(FixedSize::new(120.0, 900.0)));
//! let surface = MeasureSurface::default();
//! scroll.set_margin_box(&surface, Rect::new(0.0, 0.0, 240.0, 320.0));
//! scroll.layout_children(&surface);
//!
//! assert_eq!(scroll.scrollbar_y_view().max_position(), 588.0);
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod log_init;

pub use trellis_style as style;
pub use trellis_view as view;

pub use error::{Error, Result};
pub use log_init::init_logger;
pub use trellis_style::{ContentOverflow, Style, StyleError, StyleValue, StyleValueType};
pub use trellis_view::{ScrollBar, ScrollView, View, ViewError};

// Re-export the log crate so users can use trellis::log::info!, etc.
pub use log;

/// The types most applications need.
pub mod prelude {
    pub use trellis_style::computed::{BackgroundSize, FontMetrics, computed_length};
    pub use trellis_style::{Colorf, ContentOverflow, Dimension, Style, StyleValue, StyleValueType};
    pub use trellis_view::{
        BoxGeometry, Content, FixedSize, MeasureSurface, Modifiers, Point, PointerButton,
        PointerEvent, Rect, ScrollBar, ScrollConfig, ScrollView, Surface, TextLines, View,
        ViewPath,
    };
}
