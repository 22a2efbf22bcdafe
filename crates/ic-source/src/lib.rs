//! Source side of img2chars: decoded bitmaps and grayscale resizing.

pub mod image;
pub mod resize;

pub use crate::image::SourceImage;
pub use crate::resize::resize_gray;
