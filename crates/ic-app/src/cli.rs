use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use ic_core::color::parse_hex;
use ic_core::config::{ConvertConfig, load_config};
use ic_core::profile::SizeProfile;

/// img2chars — convertit une image en art ASCII rendu dans une image.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Image source (PNG, JPEG, BMP, GIF).
    pub input: PathBuf,

    /// Image de sortie (.png, .jpg, .bmp, .gif). Écrasée si elle existe.
    #[arg(short, long)]
    pub output: PathBuf,

    /// Profil de taille : medium (150 colonnes, 1200px) ou large (250 colonnes, 2000px).
    #[arg(long)]
    pub size: Option<SizeProfile>,

    /// Rampe de caractères, du plus dense au blanc.
    #[arg(long)]
    pub charset: Option<String>,

    /// Couleur de fond (#rrggbb).
    #[arg(long)]
    pub background: Option<String>,

    /// Couleur du texte (#rrggbb).
    #[arg(long)]
    pub text: Option<String>,

    /// Police TrueType monospace.
    #[arg(long)]
    pub font: Option<PathBuf>,

    /// Taille de police (em, pixels).
    #[arg(long)]
    pub font_size: Option<f32>,

    /// Garder toute la rampe de gris au lieu de binariser à 80.
    #[arg(long, default_value_t = false)]
    pub no_binarize: bool,

    /// Fichier de configuration TOML.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Niveau de log : error, warn, info, debug, trace.
    #[arg(long, default_value = "warn")]
    pub log_level: String,
}

impl Cli {
    /// Config file (if any) overridden by command-line flags.
    ///
    /// # Errors
    /// Returns an error if the config file cannot be loaded, a color is
    /// malformed, or the merged config is invalid.
    pub fn resolve_config(&self) -> Result<ConvertConfig> {
        let mut config = match &self.config {
            Some(path) => load_config(path)?,
            None => ConvertConfig::default(),
        };

        if let Some(size) = self.size {
            config.size = size;
        }
        if let Some(ref charset) = self.charset {
            config.charset.clone_from(charset);
        }
        if let Some(ref hex) = self.background {
            config.colors.background = parse_hex(hex).context("--background")?;
        }
        if let Some(ref hex) = self.text {
            config.colors.text = parse_hex(hex).context("--text")?;
        }
        if let Some(ref font) = self.font {
            config.font_path.clone_from(font);
        }
        if let Some(font_size) = self.font_size {
            config.font_size = font_size;
        }
        if self.no_binarize {
            config.binarize = false;
        }

        config.validate()?;
        Ok(config)
    }
}
