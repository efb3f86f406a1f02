//! Computed value resolution.
//!
//! Values are resolved in two phases. At cascade time absolute and
//! font-relative units are turned into pixels ([`CssLength::compute`]).
//! Percentages and `auto` survive that phase untouched and are resolved
//! at paint time against the box actually being painted
//! ([`BackgroundSizeLayer::resolve`]).

pub mod background_size;
pub mod length;

pub use background_size::{BackgroundSize, BackgroundSizeLayer, SizeValue};
pub use length::{CssLength, FontMetrics, computed_length};
