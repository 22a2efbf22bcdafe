use std::fmt;

/// Grille de caractères intermédiaire : une cellule par pixel réduit.
///
/// Row-major, rectangular. Produced by the quantizer, consumed by the
/// rasterizer, dropped afterwards.
///
/// # Example
/// ```
/// use ic_core::grid::CharGrid;
/// let mut grid = CharGrid::new(3, 2);
/// grid.set(1, 0, '#');
/// assert_eq!(grid.get(1, 0), '#');
/// assert_eq!(grid.to_string(), " # \n   \n");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CharGrid {
    /// Flat array of glyphs, row-major.
    pub cells: Vec<char>,
    /// Width in characters.
    pub width: u32,
    /// Height in characters.
    pub height: u32,
}

impl CharGrid {
    /// Crée une grille remplie d'espaces.
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            cells: vec![' '; width as usize * height as usize],
            width,
            height,
        }
    }

    #[inline]
    pub fn set(&mut self, x: u32, y: u32, ch: char) {
        self.cells[y as usize * self.width as usize + x as usize] = ch;
    }

    #[inline]
    #[must_use]
    pub fn get(&self, x: u32, y: u32) -> char {
        self.cells[y as usize * self.width as usize + x as usize]
    }

    /// Rows as slices, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[char]> {
        // chunks(0) panics; an empty grid simply has no rows
        self.cells.chunks(self.width.max(1) as usize)
    }

    /// Rows as owned lines, without terminators.
    pub fn lines(&self) -> impl Iterator<Item = String> + '_ {
        self.rows().map(|row| row.iter().collect())
    }
}

/// Text form: every row terminated by `'\n'`.
impl fmt::Display for CharGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            for ch in row {
                write!(f, "{ch}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
