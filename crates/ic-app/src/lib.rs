//! img2chars façade: validates the inputs of one conversion, then runs
//! quantizer → rasterizer → file.

pub mod convertor;

pub use convertor::{Convertor, ConvertorBuilder};
