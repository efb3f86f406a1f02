//! # trellis-style
//!
//! Per-element style storage and computed value resolution.
//!
//! - **Store**: [`Style`] maps property names to typed [`StyleValue`]s and
//!   answers every query with a typed default instead of an error.
//! - **Parsing**: [`Style::set_declaration`] turns declaration text into
//!   typed values through a static registry of property parsers.
//! - **Computed values**: [`computed`] converts lengths with font metrics
//!   and resolves `background-size` in two phases (cascade, then paint).
//!
//! ## Quick Start
//!
//! ```rust
//! use trellis_style::{Style, StyleValue, StyleValueType};
//!
//! let mut style = Style::new();
//! style.set_declaration("border-width", "2pt").unwrap();
//! style.set("content", StyleValue::string("hello"));
//!
//! assert_eq!(style.value_type("border-top-width"), StyleValueType::Length);
//! assert!((style.length("border-top-width") - 2.0 * 96.0 / 72.0).abs() < 1e-5);
//! assert_eq!(style.string("content"), "hello");
//! assert_eq!(style.keyword("content"), "");
//! ```
//!
//! ## Modules
//!
//! - [`types`]: value, unit, colour, image and overflow types
//! - [`parser`]: declaration parsing and the property registry
//! - [`computed`]: computed value resolution
//! - [`error`]: errors raised by declaration parsing

pub mod computed;
pub mod error;
pub mod parser;
pub mod store;
pub mod types;

pub use computed::{BackgroundSize, CssLength, FontMetrics};
pub use error::StyleError;
pub use store::Style;
pub use types::{Colorf, ContentOverflow, Dimension, ImageHandle, ImageSource, StyleValue, StyleValueType};
