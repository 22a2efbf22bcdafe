//! Quantizer for img2chars: converts a source bitmap into a character grid.
//!
//! [`quantize`] runs grayscale → blur → threshold → resize → glyph lookup.

pub mod filters;
pub mod quantize;

pub use quantize::{QuantizeOptions, quantize};
