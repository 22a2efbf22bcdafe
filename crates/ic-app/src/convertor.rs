use std::path::PathBuf;

use ic_ascii::quantize::{QuantizeOptions, quantize};
use ic_core::charset::{Charset, GlyphLut};
use ic_core::color::ColorScheme;
use ic_core::config::ConvertConfig;
use ic_core::grid::CharGrid;
use ic_core::profile::SizeProfile;
use ic_core::ConvertError;
use ic_export::font::FontSource;
use ic_export::rasterizer::Rasterizer;
use ic_export::writer::{output_format, save_image};
use ic_source::image::SourceImage;
use image::{DynamicImage, RgbImage};

/// Collects the inputs of one conversion. Nothing is read from disk until
/// [`build`](Self::build).
#[derive(Default)]
pub struct ConvertorBuilder {
    image: Option<DynamicImage>,
    image_path: Option<PathBuf>,
    output_path: Option<PathBuf>,
    config: ConvertConfig,
    font: Option<FontSource>,
}

impl ConvertorBuilder {
    /// In-memory source. Takes precedence over [`image_path`](Self::image_path).
    #[must_use]
    pub fn image(mut self, image: impl Into<DynamicImage>) -> Self {
        self.image = Some(image.into());
        self
    }

    #[must_use]
    pub fn image_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.image_path = Some(path.into());
        self
    }

    /// Required. Overwritten if it already exists.
    #[must_use]
    pub fn output_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.output_path = Some(path.into());
        self
    }

    /// Replace the whole configuration.
    #[must_use]
    pub fn config(mut self, config: ConvertConfig) -> Self {
        self.config = config;
        self
    }

    #[must_use]
    pub fn colors(mut self, colors: ColorScheme) -> Self {
        self.config.colors = colors;
        self
    }

    #[must_use]
    pub fn size(mut self, size: SizeProfile) -> Self {
        self.config.size = size;
        self
    }

    #[must_use]
    pub fn charset(mut self, charset: &Charset) -> Self {
        self.config.charset = charset.to_string();
        self
    }

    /// Font override; defaults to `config.font_path`.
    #[must_use]
    pub fn font(mut self, font: FontSource) -> Self {
        self.font = Some(font);
        self
    }

    /// Validate everything and load the source image and the font.
    ///
    /// Checks run cheapest first: caller input (no filesystem access), then
    /// the source image, then the font.
    ///
    /// # Errors
    /// - [`ConvertError::Config`]: no output path, unsupported output
    ///   extension, empty charset, bad font size, or no image at all.
    /// - [`ConvertError::InvalidImage`]: path missing, undecodable, or
    ///   empty / all-zero bitmap.
    /// - [`ConvertError::Resource`]: font missing or invalid.
    pub fn build(self) -> Result<Convertor, ConvertError> {
        let output_path = match self.output_path {
            Some(p) if !p.as_os_str().is_empty() => p,
            _ => return Err(ConvertError::config("output_path ne peut pas être vide")),
        };
        output_format(&output_path)?;
        self.config.validate()?;
        let charset = self.config.charset()?;

        let source = match (self.image, self.image_path) {
            (Some(image), path) => {
                if let Some(path) = path {
                    log::warn!(
                        "Image en mémoire fournie, chemin ignoré : {}",
                        path.display()
                    );
                }
                SourceImage::from_dynamic(image)?
            }
            (None, Some(path)) => SourceImage::open(&path)?,
            (None, None) => {
                return Err(ConvertError::config(
                    "aucune image : fournir image ou image_path",
                ));
            }
        };

        let font = self
            .font
            .unwrap_or_else(|| FontSource::Path(self.config.font_path.clone()));
        let rasterizer = Rasterizer::from_source(&font, self.config.font_size)?;

        Ok(Convertor {
            source,
            output_path,
            config: self.config,
            charset,
            rasterizer,
        })
    }
}

/// Convertisseur image → art ASCII → image.
///
/// A built `Convertor` has passed validation; [`convert`](Self::convert)
/// consumes it. Each instance owns its font and shares nothing with others.
///
/// # Example
/// ```no_run
/// use ic_app::convertor::Convertor;
/// let out = Convertor::builder()
///     .image_path("photo.jpg")
///     .output_path("photo_ascii.png")
///     .build()?
///     .convert()?;
/// println!("{}", out.display());
/// # Ok::<(), ic_core::ConvertError>(())
/// ```
pub struct Convertor {
    source: SourceImage,
    output_path: PathBuf,
    config: ConvertConfig,
    charset: Charset,
    rasterizer: Rasterizer,
}

impl Convertor {
    #[must_use]
    pub fn builder() -> ConvertorBuilder {
        ConvertorBuilder::default()
    }

    #[must_use]
    pub fn config(&self) -> &ConvertConfig {
        &self.config
    }

    /// Run only the quantizer.
    ///
    /// # Errors
    /// Returns [`ConvertError::InvalidImage`] if the source is too wide for
    /// the size profile.
    pub fn character_grid(&self) -> Result<CharGrid, ConvertError> {
        let lut = GlyphLut::new(&self.charset);
        let options = QuantizeOptions {
            binarize: self.config.binarize,
        };
        quantize(&self.source, self.config.size, &lut, options)
    }

    /// Quantize then rasterize, without writing anything.
    ///
    /// # Errors
    /// Same as [`character_grid`](Self::character_grid).
    pub fn render(&self) -> Result<RgbImage, ConvertError> {
        let grid = self.character_grid()?;
        Ok(self
            .rasterizer
            .render(&grid, self.config.colors, self.config.size.draw_length()))
    }

    /// Convert and write the result, returning the output path.
    ///
    /// # Errors
    /// Quantizer errors, or [`ConvertError::Io`] if the output cannot be written.
    pub fn convert(self) -> Result<PathBuf, ConvertError> {
        let image = self.render()?;
        save_image(&image, &self.output_path)?;
        log::info!(
            "Conversion terminée : {} ({}px, profil {})",
            self.output_path.display(),
            self.config.size.draw_length(),
            self.config.size
        );
        Ok(self.output_path)
    }
}
