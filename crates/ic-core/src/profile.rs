use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ConvertError;

/// Preset de taille : largeur de grille, correction d'aspect, côté du canvas.
///
/// | Profil | colonnes | ratio | canvas |
/// |--------|----------|-------|--------|
/// | Medium | 150      | 1.85  | 1200px |
/// | Large  | 250      | 1.9   | 2000px |
///
/// # Example
/// ```
/// use ic_core::profile::SizeProfile;
/// let p = SizeProfile::default();
/// assert_eq!(p.resize_width(), 150);
/// assert_eq!(p.draw_length(), 1200);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
pub enum SizeProfile {
    #[default]
    Medium,
    Large,
}

impl SizeProfile {
    /// Target character columns.
    #[must_use]
    pub const fn resize_width(self) -> u32 {
        match self {
            Self::Medium => 150,
            Self::Large => 250,
        }
    }

    /// Divisor compensating for character cells being taller than wide.
    #[must_use]
    pub const fn resize_height_ratio(self) -> f64 {
        match self {
            Self::Medium => 1.85,
            Self::Large => 1.9,
        }
    }

    /// Side of the square output canvas, in pixels.
    #[must_use]
    pub const fn draw_length(self) -> u32 {
        match self {
            Self::Medium => 1200,
            Self::Large => 2000,
        }
    }

    /// Character grid size for a `src_width × src_height` source.
    ///
    /// Columns are always [`resize_width`](Self::resize_width). Rows are
    /// `trunc(trunc(H * cols / W) / ratio)`: both steps truncate, so this is
    /// not the same as rounding the exact quotient (63×100 on Medium gives
    /// 50 rows, not 51).
    ///
    /// # Errors
    /// Returns [`ConvertError::InvalidImage`] for a zero-sized source or when
    /// the source is so wide that no row survives.
    ///
    /// # Example
    /// ```
    /// use ic_core::profile::SizeProfile;
    /// assert_eq!(SizeProfile::Medium.grid_dimensions(100, 100).unwrap(), (150, 81));
    /// ```
    pub fn grid_dimensions(self, src_width: u32, src_height: u32) -> Result<(u32, u32), ConvertError> {
        if src_width == 0 || src_height == 0 {
            return Err(ConvertError::invalid_image(format!(
                "dimensions nulles : {src_width}×{src_height}"
            )));
        }
        let cols = self.resize_width();
        let scaled = u64::from(src_height) * u64::from(cols) / u64::from(src_width);
        let rows = (scaled as f64 / self.resize_height_ratio()) as u32;
        if rows == 0 {
            return Err(ConvertError::invalid_image(format!(
                "image trop large pour le profil {self} : {src_width}×{src_height} donne 0 ligne"
            )));
        }
        Ok((cols, rows))
    }
}

impl fmt::Display for SizeProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Medium => f.write_str("medium"),
            Self::Large => f.write_str("large"),
        }
    }
}

impl FromStr for SizeProfile {
    type Err = ConvertError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "medium" | "1200" => Ok(Self::Medium),
            "large" | "2000" => Ok(Self::Large),
            other => Err(ConvertError::config(format!(
                "profil de taille inconnu '{other}' (medium | large)"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn presets_match_their_constants() {
        assert_eq!(SizeProfile::Medium.resize_width(), 150);
        assert!((SizeProfile::Medium.resize_height_ratio() - 1.85).abs() < f64::EPSILON);
        assert_eq!(SizeProfile::Medium.draw_length(), 1200);
        assert_eq!(SizeProfile::Large.resize_width(), 250);
        assert!((SizeProfile::Large.resize_height_ratio() - 1.9).abs() < f64::EPSILON);
        assert_eq!(SizeProfile::Large.draw_length(), 2000);
    }

    #[test]
    fn rows_truncate_twice_instead_of_rounding() {
        // 63*150/100 = 94.5 → 94 ; 94/1.85 = 50.8 → 50
        let (cols, rows) = SizeProfile::Medium.grid_dimensions(100, 63).unwrap();
        assert_eq!(cols, 150);
        assert_eq!(rows, 50);

        // Rounding the exact quotient would have given one more row.
        let rounded = (63.0_f64 * 150.0 / 100.0 / 1.85).round() as u32;
        assert_eq!(rounded, 51);
        assert_ne!(rows, rounded);
    }

    #[test]
    fn rows_agree_with_rounding_when_fraction_is_small() {
        // 150/1.85 = 81.08
        assert_eq!(SizeProfile::Medium.grid_dimensions(100, 100).unwrap(), (150, 81));
        let rounded = (100.0_f64 * 150.0 / 100.0 / 1.85).round() as u32;
        assert_eq!(rounded, 81);
        // 200*150/300 = 100 ; 100/1.85 = 54.05
        assert_eq!(SizeProfile::Medium.grid_dimensions(300, 200).unwrap(), (150, 54));
    }

    #[test]
    fn large_profile_truncates_too() {
        // 250/1.9 = 131.58 → 131 (rounding would give 132)
        assert_eq!(SizeProfile::Large.grid_dimensions(1000, 1000).unwrap(), (250, 131));
    }

    #[test]
    fn degenerate_sources_are_rejected() {
        assert!(matches!(
            SizeProfile::Medium.grid_dimensions(0, 10),
            Err(ConvertError::InvalidImage(_))
        ));
        // 1*150/1000 = 0 rows
        assert!(matches!(
            SizeProfile::Medium.grid_dimensions(1000, 1),
            Err(ConvertError::InvalidImage(_))
        ));
    }

    #[test]
    fn parses_names_case_insensitively() {
        assert_eq!("Medium".parse::<SizeProfile>().unwrap(), SizeProfile::Medium);
        assert_eq!("LARGE".parse::<SizeProfile>().unwrap(), SizeProfile::Large);
        assert!("huge".parse::<SizeProfile>().is_err());
    }
}
