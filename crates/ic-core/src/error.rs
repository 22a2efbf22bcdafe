use std::path::PathBuf;

use thiserror::Error;

/// Errors raised by a conversion. Every variant is fatal to the call.
#[derive(Error, Debug)]
pub enum ConvertError {
    /// Missing or inconsistent caller input (paths, charset, font size, output format).
    #[error("Configuration invalide : {0}")]
    Config(String),

    /// Source image missing, undecodable, empty or entirely zero-valued.
    #[error("Image invalide : {0}")]
    InvalidImage(String),

    /// Font resource missing or unreadable.
    #[error("Ressource introuvable ou illisible : {path} ({reason})")]
    Resource {
        /// Where the resource was expected.
        path: String,
        /// Underlying failure.
        reason: String,
    },

    /// Output could not be written.
    #[error("Écriture impossible vers {path} : {source}")]
    Io {
        /// Output path.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}

impl ConvertError {
    /// Shorthand for [`ConvertError::Config`].
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Shorthand for [`ConvertError::InvalidImage`].
    pub fn invalid_image(msg: impl Into<String>) -> Self {
        Self::InvalidImage(msg.into())
    }
}
