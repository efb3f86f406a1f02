//! Handles to images referenced from styles.
//!
//! Decoding is done elsewhere; a style only keeps a shared handle so that
//! several elements can point at the same loaded image.

use std::rc::Rc;

/// An image a style property refers to.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageSource {
    /// Where the image came from (usually the `url(...)` text).
    pub source: String,
    /// Intrinsic width in pixels.
    pub width: f32,
    /// Intrinsic height in pixels.
    pub height: f32,
}

impl ImageSource {
    pub fn new(source: impl Into<String>, width: f32, height: f32) -> Self {
        Self {
            source: source.into(),
            width,
            height,
        }
    }

    /// Width divided by height, if the image has a usable size.
    pub fn aspect_ratio(&self) -> Option<f32> {
        (self.width > 0.0 && self.height > 0.0).then(|| self.width / self.height)
    }
}

/// Shared handle stored inside [`StyleValue::Image`](super::StyleValue::Image).
pub type ImageHandle = Rc<ImageSource>;
