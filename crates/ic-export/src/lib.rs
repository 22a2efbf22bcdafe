//! Rasterizer for img2chars: character grid → rendered image on disk.

pub mod font;
pub mod rasterizer;
pub mod writer;

pub use font::FontSource;
pub use rasterizer::{LineMetrics, Rasterizer};
pub use writer::save_image;
