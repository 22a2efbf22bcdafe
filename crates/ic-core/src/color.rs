use serde::{Deserialize, Serialize};

use crate::error::ConvertError;

/// RGB triple, each channel in [0, 255].
pub type Rgb = (u8, u8, u8);

/// Couleurs du rendu : fond + texte. Défaut : fond noir, texte blanc.
///
/// # Example
/// ```
/// use ic_core::color::ColorScheme;
/// let c = ColorScheme::default();
/// assert_eq!(c.background, (0, 0, 0));
/// assert_eq!(c.text, (255, 255, 255));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct ColorScheme {
    /// Canvas fill.
    pub background: Rgb,
    /// Glyph ink.
    pub text: Rgb,
}

impl ColorScheme {
    #[must_use]
    pub const fn new(background: Rgb, text: Rgb) -> Self {
        Self { background, text }
    }
}

impl Default for ColorScheme {
    fn default() -> Self {
        Self::new((0, 0, 0), (255, 255, 255))
    }
}

/// Parse `#rrggbb` or `rrggbb` into an RGB triple.
///
/// # Errors
/// Returns [`ConvertError::Config`] on anything but six hex digits.
///
/// # Example
/// ```
/// use ic_core::color::parse_hex;
/// assert_eq!(parse_hex("#ff8000").unwrap(), (255, 128, 0));
/// assert!(parse_hex("#fff").is_err());
/// ```
pub fn parse_hex(s: &str) -> Result<Rgb, ConvertError> {
    let hex = s.trim().trim_start_matches('#');
    if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(ConvertError::config(format!(
            "couleur invalide '{s}' (attendu #rrggbb)"
        )));
    }
    let channel = |i: usize| {
        u8::from_str_radix(&hex[i..i + 2], 16)
            .map_err(|e| ConvertError::config(format!("couleur invalide '{s}' : {e}")))
    };
    Ok((channel(0)?, channel(2)?, channel(4)?))
}
