//! Value types, configuration and errors shared by the img2chars crates.
//!
//! This crate has no image dependency: it only describes what a
//! conversion needs (colors, size preset, glyph ramp) and what it
//! produces in between (the character grid).

pub mod charset;
pub mod color;
pub mod config;
pub mod error;
pub mod grid;
pub mod profile;

pub use charset::{Charset, GlyphLut};
pub use color::ColorScheme;
pub use config::ConvertConfig;
pub use error::ConvertError;
pub use grid::CharGrid;
pub use profile::SizeProfile;
