use ::image::GrayImage;
use fast_image_resize::images::Image;
use fast_image_resize::{FilterType, PixelType, ResizeAlg, ResizeOptions, Resizer};
use ic_core::ConvertError;

/// Resize a single-channel image to `width × height` with bilinear interpolation.
///
/// Each output pixel blends only the 2×2 nearest source pixels, whatever the
/// scale factor: a binary image stays binary except along its edges.
/// Same dimensions are returned as a plain copy.
///
/// # Errors
/// Returns [`ConvertError::InvalidImage`] for zero target dimensions or if
/// the resize itself fails.
///
/// # Example
/// ```
/// use ic_source::resize::resize_gray;
/// use image::{GrayImage, Luma};
/// let src = GrayImage::from_pixel(100, 100, Luma([255]));
/// let dst = resize_gray(&src, 50, 20).unwrap();
/// assert_eq!(dst.dimensions(), (50, 20));
/// ```
pub fn resize_gray(src: &GrayImage, width: u32, height: u32) -> Result<GrayImage, ConvertError> {
    if width == 0 || height == 0 || src.width() == 0 || src.height() == 0 {
        return Err(ConvertError::invalid_image(format!(
            "redimensionnement impossible {}×{} → {width}×{height}",
            src.width(),
            src.height()
        )));
    }
    if src.dimensions() == (width, height) {
        return Ok(src.clone());
    }

    let src_image = Image::from_vec_u8(
        src.width(),
        src.height(),
        src.as_raw().clone(),
        PixelType::U8,
    )
    .map_err(|e| ConvertError::invalid_image(format!("dimensions source invalides : {e}")))?;
    let mut dst_image = Image::new(width, height, PixelType::U8);

    let options = ResizeOptions::new().resize_alg(ResizeAlg::Interpolation(FilterType::Bilinear));
    Resizer::new()
        .resize(&src_image, &mut dst_image, Some(&options))
        .map_err(|e| ConvertError::invalid_image(format!("échec du redimensionnement : {e}")))?;

    GrayImage::from_raw(width, height, dst_image.into_vec())
        .ok_or_else(|| ConvertError::invalid_image("buffer redimensionné incohérent"))
}
