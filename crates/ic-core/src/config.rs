use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::charset::{Charset, DEFAULT_CHARSET};
use crate::color::ColorScheme;
use crate::error::ConvertError;
use crate::profile::SizeProfile;

/// Police embarquée attendue à côté du binaire.
pub const DEFAULT_FONT_PATH: &str = "JetBrainsMono-Regular.ttf";

/// Taille de police (em, en pixels).
pub const DEFAULT_FONT_SIZE: f32 = 13.0;

/// Configuration complète d'une conversion.
///
/// Value object: built per conversion, never shared mutably between calls.
/// Sérialisable en TOML.
///
/// # Example
/// ```
/// use ic_core::config::ConvertConfig;
/// let config = ConvertConfig::default();
/// assert!(config.binarize);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct ConvertConfig {
    /// Grid/canvas preset.
    pub size: SizeProfile,
    /// Background and text colors.
    pub colors: ColorScheme,
    /// Ramp, darkest first, blank last.
    pub charset: String,
    /// Threshold the blurred grayscale at 80 before resizing.
    ///
    /// With binarization the glyph mapping only ever sees a near-binary
    /// image, so the middle of the ramp is practically unreachable.
    /// `false` feeds the full 0–255 blurred range to the mapping instead.
    pub binarize: bool,
    /// TrueType font used by the rasterizer.
    pub font_path: PathBuf,
    /// Em size in pixels.
    pub font_size: f32,
}

impl Default for ConvertConfig {
    fn default() -> Self {
        Self {
            size: SizeProfile::Medium,
            colors: ColorScheme::default(),
            charset: DEFAULT_CHARSET.to_string(),
            binarize: true,
            font_path: PathBuf::from(DEFAULT_FONT_PATH),
            font_size: DEFAULT_FONT_SIZE,
        }
    }
}

impl ConvertConfig {
    /// Validated glyph ramp.
    ///
    /// # Errors
    /// Returns [`ConvertError::Config`] if the charset is empty.
    pub fn charset(&self) -> Result<Charset, ConvertError> {
        Charset::new(&self.charset)
    }

    /// Checks the parameters a conversion cannot proceed without.
    ///
    /// # Errors
    /// Returns [`ConvertError::Config`] for an empty charset or a
    /// non-finite / non-positive font size.
    pub fn validate(&self) -> Result<(), ConvertError> {
        self.charset()?;
        if !self.font_size.is_finite() || self.font_size <= 0.0 {
            return Err(ConvertError::config(format!(
                "font_size doit être > 0, reçu {}",
                self.font_size
            )));
        }
        Ok(())
    }
}

/// Structure TOML intermédiaire pour désérialisation avec valeurs optionnelles.
#[derive(Deserialize)]
struct ConfigFile {
    render: Option<RenderSection>,
    colors: Option<ColorSection>,
}

#[derive(Deserialize)]
struct RenderSection {
    size: Option<SizeProfile>,
    charset: Option<String>,
    binarize: Option<bool>,
    font_path: Option<PathBuf>,
    font_size: Option<f32>,
}

#[derive(Deserialize)]
struct ColorSection {
    background: Option<(u8, u8, u8)>,
    text: Option<(u8, u8, u8)>,
}

/// Parse un TOML et fusionne avec les valeurs par défaut.
///
/// # Errors
/// Returns an error if the TOML is malformed or the merged config is invalid.
///
/// # Example
/// ```
/// use ic_core::config::parse_config;
/// use ic_core::profile::SizeProfile;
/// let config = parse_config("[render]\nsize = \"Large\"").unwrap();
/// assert_eq!(config.size, SizeProfile::Large);
/// ```
pub fn parse_config(content: &str) -> Result<ConvertConfig> {
    let file: ConfigFile = toml::from_str(content).context("Erreur de parsing TOML")?;

    let mut config = ConvertConfig::default();

    if let Some(r) = file.render {
        if let Some(v) = r.size {
            config.size = v;
        }
        if let Some(v) = r.charset {
            config.charset = v;
        }
        if let Some(v) = r.binarize {
            config.binarize = v;
        }
        if let Some(v) = r.font_path {
            config.font_path = v;
        }
        if let Some(v) = r.font_size {
            config.font_size = v;
        }
    }

    if let Some(c) = file.colors {
        if let Some(v) = c.background {
            config.colors.background = v;
        }
        if let Some(v) = c.text {
            config.colors.text = v;
        }
    }

    config.validate()?;
    Ok(config)
}

/// Charge un fichier TOML et fusionne avec les valeurs par défaut.
///
/// # Errors
/// Returns an error if the file cannot be read or parsed.
///
/// # Example
/// ```no_run
/// use ic_core::config::load_config;
/// use std::path::Path;
/// let config = load_config(Path::new("img2chars.toml")).unwrap();
/// ```
pub fn load_config(path: &Path) -> Result<ConvertConfig> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Impossible de lire {}", path.display()))?;
    let config = parse_config(&content)
        .with_context(|| format!("Configuration invalide dans {}", path.display()))?;
    log::debug!("Config chargée depuis {}", path.display());
    Ok(config)
}
