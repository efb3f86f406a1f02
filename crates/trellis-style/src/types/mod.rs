pub mod color;
pub mod dimension;
pub mod image;
pub mod layout;
pub mod value;

pub use color::Colorf;
pub use dimension::{Dimension, PIXELS_PER_INCH};
pub use image::{ImageHandle, ImageSource};
pub use layout::ContentOverflow;
pub use value::{StyleValue, StyleValueType};
