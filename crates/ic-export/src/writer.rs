use std::path::Path;

use ic_core::ConvertError;
use image::{ImageError, ImageFormat, RgbImage};

/// Écrit le rendu sur disque, format déduit de l'extension (png, jpg/jpeg, bmp, gif).
///
/// Any existing file at `path` is overwritten.
///
/// # Errors
/// - [`ConvertError::Config`] if the extension is missing or not a supported format.
/// - [`ConvertError::Io`] if the file cannot be written.
///
/// # Example
/// ```no_run
/// use ic_export::writer::save_image;
/// use image::RgbImage;
/// use std::path::Path;
/// save_image(&RgbImage::new(8, 8), Path::new("out.png")).unwrap();
/// ```
pub fn save_image(img: &RgbImage, path: &Path) -> Result<(), ConvertError> {
    let format = output_format(path)?;
    img.save_with_format(path, format).map_err(|e| ConvertError::Io {
        path: path.to_path_buf(),
        source: match e {
            ImageError::IoError(io) => io,
            other => std::io::Error::other(other.to_string()),
        },
    })?;
    log::debug!("Image écrite : {} ({format:?})", path.display());
    Ok(())
}

/// Output format for `path`, restricted to the encoders this crate enables.
///
/// # Errors
/// Returns [`ConvertError::Config`] for unknown or unsupported extensions.
pub fn output_format(path: &Path) -> Result<ImageFormat, ConvertError> {
    match ImageFormat::from_path(path) {
        Ok(f @ (ImageFormat::Png | ImageFormat::Jpeg | ImageFormat::Bmp | ImageFormat::Gif)) => Ok(f),
        _ => Err(ConvertError::config(format!(
            "format de sortie non supporté : {} (png, jpg, bmp, gif)",
            path.display()
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgb;

    #[test]
    fn formats_come_from_the_extension() {
        assert_eq!(output_format(Path::new("a.png")).unwrap(), ImageFormat::Png);
        assert_eq!(output_format(Path::new("a.JPG")).unwrap(), ImageFormat::Jpeg);
        assert_eq!(output_format(Path::new("a.jpeg")).unwrap(), ImageFormat::Jpeg);
        assert_eq!(output_format(Path::new("a.bmp")).unwrap(), ImageFormat::Bmp);
        assert_eq!(output_format(Path::new("a.gif")).unwrap(), ImageFormat::Gif);
        assert!(matches!(
            output_format(Path::new("a.xyz")),
            Err(ConvertError::Config(_))
        ));
        assert!(output_format(Path::new("a.webp")).is_err());
        assert!(output_format(Path::new("noext")).is_err());
    }

    #[test]
    fn save_then_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.png");
        let img = RgbImage::from_pixel(12, 12, Rgb([1, 2, 3]));
        save_image(&img, &path).unwrap();
        let back = image::open(&path).unwrap().to_rgb8();
        assert_eq!(back, img);
    }

    #[test]
    fn gif_output_is_written() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.gif");
        let img = RgbImage::from_fn(16, 16, |x, _| {
            if x < 8 { Rgb([0, 0, 0]) } else { Rgb([255, 255, 255]) }
        });
        save_image(&img, &path).unwrap();
        let back = image::open(&path).unwrap().to_rgb8();
        assert_eq!(back.dimensions(), (16, 16));
        assert_eq!(*back.get_pixel(15, 0), Rgb([255, 255, 255]));
    }

    #[test]
    fn existing_file_is_overwritten() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.png");
        std::fs::write(&path, b"old").unwrap();
        save_image(&RgbImage::new(4, 4), &path).unwrap();
        assert_eq!(image::open(&path).unwrap().to_rgb8().dimensions(), (4, 4));
    }

    #[test]
    fn missing_directory_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("out.png");
        let err = save_image(&RgbImage::new(4, 4), &path).unwrap_err();
        assert!(matches!(err, ConvertError::Io { .. }));
    }
}
