use ic_core::charset::GlyphLut;
use ic_core::grid::CharGrid;
use ic_core::profile::SizeProfile;
use ic_core::ConvertError;
use ic_source::image::SourceImage;
use ic_source::resize::resize_gray;
use image::GrayImage;

use crate::filters::{THRESHOLD, binarize, gaussian_blur_5x5, to_gray};

/// Options du quantizer (hors charset et profil).
#[derive(Clone, Copy, Debug)]
pub struct QuantizeOptions {
    /// Threshold at [`THRESHOLD`] after blurring. Defaults to `true`.
    pub binarize: bool,
}

impl Default for QuantizeOptions {
    fn default() -> Self {
        Self { binarize: true }
    }
}

/// Image → grille de caractères.
///
/// Pipeline, each step unconditional:
/// 1. BT.601 grayscale
/// 2. 5×5 Gaussian blur
/// 3. global threshold at 80 (skipped when `options.binarize` is false)
/// 4. resize to [`SizeProfile::grid_dimensions`]
/// 5. one glyph per resized pixel through `lut`
///
/// # Errors
/// Returns [`ConvertError::InvalidImage`] when the profile yields an empty
/// grid for this source (image far wider than tall).
///
/// # Example
/// ```
/// use ic_ascii::quantize::{quantize, QuantizeOptions};
/// use ic_core::{Charset, GlyphLut, SizeProfile};
/// use ic_source::SourceImage;
/// use image::{Rgb, RgbImage};
///
/// let src = SourceImage::from_rgb(RgbImage::from_pixel(200, 200, Rgb([255, 255, 255]))).unwrap();
/// let lut = GlyphLut::new(&Charset::new("#").unwrap());
/// let grid = quantize(&src, SizeProfile::Medium, &lut, QuantizeOptions::default()).unwrap();
/// assert_eq!((grid.width, grid.height), (150, 81));
/// assert!(grid.cells.iter().all(|&c| c == '#'));
/// ```
pub fn quantize(
    source: &SourceImage,
    profile: SizeProfile,
    lut: &GlyphLut,
    options: QuantizeOptions,
) -> Result<CharGrid, ConvertError> {
    let (src_w, src_h) = source.dimensions();
    let (cols, rows) = profile.grid_dimensions(src_w, src_h)?;
    log::debug!("Quantize {src_w}×{src_h} → grille {cols}×{rows} (profil {profile})");

    let gray = gaussian_blur_5x5(&to_gray(source.pixels()));
    let prepared = if options.binarize {
        binarize(&gray, THRESHOLD)
    } else {
        gray
    };
    let resized = resize_gray(&prepared, cols, rows)?;

    Ok(map_glyphs(&resized, lut))
}

/// One glyph per pixel, row-major.
#[must_use]
pub fn map_glyphs(img: &GrayImage, lut: &GlyphLut) -> CharGrid {
    let (width, height) = img.dimensions();
    let mut grid = CharGrid::new(width, height);
    for (x, y, p) in img.enumerate_pixels() {
        grid.set(x, y, lut.map(p[0]));
    }
    grid
}
