use std::path::PathBuf;

use ab_glyph::FontVec;
use ic_core::ConvertError;

/// Where the rasterizer gets its TrueType font from.
///
/// Injected by the caller so the rasterizer never resolves paths against
/// the working directory on its own.
#[derive(Clone, Debug)]
pub enum FontSource {
    /// Fichier TTF/OTF sur disque, lu à l'initialisation.
    Path(PathBuf),
    /// Police déjà en mémoire.
    Bytes(Vec<u8>),
}

impl FontSource {
    /// Read (if needed) and parse the font.
    ///
    /// # Errors
    /// Returns [`ConvertError::Resource`] if the file is missing, unreadable
    /// or not a valid font.
    ///
    /// # Example
    /// ```
    /// use ic_export::font::FontSource;
    /// assert!(FontSource::Bytes(b"not a font".to_vec()).load().is_err());
    /// ```
    pub fn load(&self) -> Result<FontVec, ConvertError> {
        let data = match self {
            Self::Path(path) => std::fs::read(path).map_err(|e| ConvertError::Resource {
                path: path.display().to_string(),
                reason: e.to_string(),
            })?,
            Self::Bytes(bytes) => bytes.clone(),
        };
        let font = FontVec::try_from_vec(data).map_err(|e| ConvertError::Resource {
            path: self.describe(),
            reason: e.to_string(),
        })?;
        log::debug!("Police chargée : {}", self.describe());
        Ok(font)
    }

    fn describe(&self) -> String {
        match self {
            Self::Path(path) => path.display().to_string(),
            Self::Bytes(bytes) => format!("<{} octets en mémoire>", bytes.len()),
        }
    }
}

impl From<PathBuf> for FontSource {
    fn from(path: PathBuf) -> Self {
        Self::Path(path)
    }
}
