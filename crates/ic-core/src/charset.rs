use std::fmt;

use crate::error::ConvertError;

/// 16 caractères — du plus dense au blanc, le dernier glyphe est un espace littéral.
pub const DEFAULT_CHARSET: &str = "MNHQ$OC?7>!:-;. ";

/// Ordered glyph ramp, darkest-appearance first, blank last.
///
/// The order defines the intensity buckets used by [`GlyphLut`].
///
/// # Example
/// ```
/// use ic_core::charset::Charset;
/// let cs = Charset::new("#@ ").unwrap();
/// assert_eq!(cs.len(), 3);
/// assert!(Charset::new("").is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Charset {
    glyphs: Vec<char>,
}

impl Charset {
    /// Build a charset from a string, one glyph per `char`.
    ///
    /// # Errors
    /// Returns [`ConvertError::Config`] if `glyphs` is empty.
    pub fn new(glyphs: &str) -> Result<Self, ConvertError> {
        Self::from_chars(glyphs.chars().collect())
    }

    /// Build a charset from an explicit glyph list.
    ///
    /// # Errors
    /// Returns [`ConvertError::Config`] if `glyphs` is empty.
    pub fn from_chars(glyphs: Vec<char>) -> Result<Self, ConvertError> {
        if glyphs.is_empty() {
            return Err(ConvertError::config("le charset ne peut pas être vide"));
        }
        Ok(Self { glyphs })
    }

    /// Number of glyphs (always >= 1).
    #[must_use]
    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    /// Always false; kept for the `len`/`is_empty` pair.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }

    #[must_use]
    pub fn glyphs(&self) -> &[char] {
        &self.glyphs
    }

    /// Brightest glyph of the ramp.
    #[must_use]
    pub fn last(&self) -> char {
        self.glyphs[self.glyphs.len() - 1]
    }
}

impl Default for Charset {
    fn default() -> Self {
        Self {
            glyphs: DEFAULT_CHARSET.chars().collect(),
        }
    }
}

impl fmt::Display for Charset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for ch in &self.glyphs {
            write!(f, "{ch}")?;
        }
        Ok(())
    }
}

/// Lookup table mapping intensity [0..255] → glyph.
///
/// Intensity 0 is always a space. Any other intensity `v` selects
/// `charset[floor(v / unit)]` with `unit = 257 / charset.len()`, i.e. the
/// bucket math treats the inclusive upper bound 255 as 256.
/// Pre-computed once per conversion for O(1) per-pixel cost.
///
/// # Example
/// ```
/// use ic_core::charset::{Charset, GlyphLut};
/// let lut = GlyphLut::new(&Charset::new("#@").unwrap());
/// assert_eq!(lut.map(0), ' ');
/// assert_eq!(lut.map(1), '#');
/// assert_eq!(lut.map(255), '@');
/// ```
pub struct GlyphLut {
    lut: [char; 256],
}

impl GlyphLut {
    /// Upper bound used by the bucket math (255 treated as 256, plus one).
    const SPAN: usize = 257;

    #[must_use]
    pub fn new(charset: &Charset) -> Self {
        let glyphs = charset.glyphs();
        let len = glyphs.len();
        let mut lut = [' '; 256];
        for (i, slot) in lut.iter_mut().enumerate().skip(1) {
            // floor(i / (SPAN / len)) == floor(i * len / SPAN), always < len since i < SPAN
            *slot = glyphs[i * len / Self::SPAN];
        }
        Self { lut }
    }

    /// Map an intensity [0..255] to a glyph.
    #[inline]
    #[must_use]
    pub fn map(&self, intensity: u8) -> char {
        self.lut[intensity as usize]
    }
}
