use std::path::Path;

use ::image::{DynamicImage, RgbImage};
use ic_core::ConvertError;

/// Bitmap source décodé (RGB 8 bits, alpha ignoré).
///
/// Always non-empty and not entirely zero-valued: both constructors reject
/// such bitmaps before any processing happens.
///
/// # Example
/// ```
/// use ic_source::image::SourceImage;
/// use image::{Rgb, RgbImage};
/// let src = SourceImage::from_rgb(RgbImage::from_pixel(4, 4, Rgb([200, 10, 10]))).unwrap();
/// assert_eq!(src.dimensions(), (4, 4));
/// ```
#[derive(Clone, Debug)]
pub struct SourceImage {
    pixels: RgbImage,
}

impl SourceImage {
    /// Wrap an in-memory bitmap.
    ///
    /// # Errors
    /// Returns [`ConvertError::InvalidImage`] if the bitmap is empty or all zero.
    pub fn from_rgb(pixels: RgbImage) -> Result<Self, ConvertError> {
        let (width, height) = pixels.dimensions();
        if width == 0 || height == 0 {
            return Err(ConvertError::invalid_image(format!(
                "image vide ({width}×{height})"
            )));
        }
        if pixels.as_raw().iter().all(|&v| v == 0) {
            return Err(ConvertError::invalid_image(
                "échec du chargement : bitmap entièrement nul",
            ));
        }
        Ok(Self { pixels })
    }

    /// Convert any decoded image to RGB (alpha dropped) and wrap it.
    ///
    /// # Errors
    /// Same as [`SourceImage::from_rgb`].
    pub fn from_dynamic(img: DynamicImage) -> Result<Self, ConvertError> {
        Self::from_rgb(img.to_rgb8())
    }

    /// Load and decode an image from disk.
    ///
    /// # Errors
    /// Returns [`ConvertError::InvalidImage`] if the path does not exist, the
    /// file cannot be decoded, or the decoded bitmap is empty / all zero.
    ///
    /// # Example
    /// ```no_run
    /// use ic_source::image::SourceImage;
    /// use std::path::Path;
    /// let src = SourceImage::open(Path::new("photo.jpg")).unwrap();
    /// ```
    pub fn open(path: &Path) -> Result<Self, ConvertError> {
        if !path.exists() {
            return Err(ConvertError::invalid_image(format!(
                "l'image n'existe pas : {}",
                path.display()
            )));
        }
        let img = ::image::open(path).map_err(|e| {
            ConvertError::invalid_image(format!("impossible de décoder {} : {e}", path.display()))
        })?;
        log::debug!(
            "Image chargée : {} ({}×{})",
            path.display(),
            img.width(),
            img.height()
        );
        Self::from_dynamic(img)
    }

    #[must_use]
    pub fn dimensions(&self) -> (u32, u32) {
        self.pixels.dimensions()
    }

    #[must_use]
    pub fn pixels(&self) -> &RgbImage {
        &self.pixels
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ::image::{Rgb, Rgba, RgbaImage};

    #[test]
    fn empty_bitmap_is_rejected() {
        let err = SourceImage::from_rgb(RgbImage::new(0, 0)).unwrap_err();
        assert!(matches!(err, ConvertError::InvalidImage(_)));
    }

    #[test]
    fn all_zero_bitmap_is_rejected() {
        let err = SourceImage::from_rgb(RgbImage::new(8, 8)).unwrap_err();
        assert!(matches!(err, ConvertError::InvalidImage(_)));
    }

    #[test]
    fn a_single_lit_pixel_is_enough() {
        let mut img = RgbImage::new(8, 8);
        img.put_pixel(7, 7, Rgb([0, 0, 1]));
        assert!(SourceImage::from_rgb(img).is_ok());
    }

    #[test]
    fn alpha_channel_is_dropped() {
        let rgba = RgbaImage::from_pixel(2, 2, Rgba([10, 20, 30, 0]));
        let src = SourceImage::from_dynamic(DynamicImage::ImageRgba8(rgba)).unwrap();
        assert_eq!(*src.pixels().get_pixel(0, 0), Rgb([10, 20, 30]));
    }

    #[test]
    fn missing_path_is_invalid_image() {
        let err = SourceImage::open(Path::new("/no/such/image.png")).unwrap_err();
        assert!(matches!(err, ConvertError::InvalidImage(_)));
    }

    #[test]
    fn undecodable_file_is_invalid_image() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("garbage.png");
        std::fs::write(&path, b"definitely not a png").unwrap();
        let err = SourceImage::open(&path).unwrap_err();
        assert!(matches!(err, ConvertError::InvalidImage(_)));
    }

    #[test]
    fn open_decodes_a_saved_png() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("src.png");
        RgbImage::from_pixel(5, 3, Rgb([255, 255, 255]))
            .save(&path)
            .unwrap();
        let src = SourceImage::open(&path).unwrap();
        assert_eq!(src.dimensions(), (5, 3));
    }
}
