use ab_glyph::{Font, FontVec, Glyph, GlyphId, Point, PxScale, ScaleFont, point};
use ic_core::color::{ColorScheme, Rgb as RgbTriple};
use ic_core::grid::CharGrid;
use ic_core::ConvertError;
use image::{Rgb, RgbImage};

use crate::font::FontSource;

/// Coin haut-gauche du texte sur le canvas, en pixels.
pub const TEXT_ORIGIN: (i32, i32) = (10, 10);

/// Rendered extent of one line of text.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LineMetrics {
    /// Horizontal advance of the whole line.
    pub width: u32,
    /// Vertical space the line occupies; the cursor moves down by this much.
    pub height: u32,
}

/// Dessine une CharGrid en texte monospace sur un canvas carré.
///
/// Each line is measured then drawn; the vertical cursor advances by the
/// measured height of that line, not by a fixed line height. Anything past
/// the canvas edge is clipped.
pub struct Rasterizer {
    font: FontVec,
    scale: PxScale,
}

impl Rasterizer {
    /// `em_px` is the em size in pixels (13.0 by default).
    #[must_use]
    pub fn new(font: FontVec, em_px: f32) -> Self {
        // PxScale is ascent-to-descent height; convert from em size.
        let upem = font.units_per_em().unwrap_or_else(|| font.height_unscaled());
        let scale = PxScale::from(em_px * font.height_unscaled() / upem);
        log::debug!(
            "Rasterizer : em {em_px}px → PxScale {:.2}, ascent {:.2}",
            scale.y,
            font.as_scaled(scale).ascent()
        );
        Self { font, scale }
    }

    /// Load the font from `source` and build a rasterizer.
    ///
    /// # Errors
    /// Returns [`ConvertError::Resource`] if the font cannot be loaded.
    pub fn from_source(source: &FontSource, em_px: f32) -> Result<Self, ConvertError> {
        Ok(Self::new(source.load()?, em_px))
    }

    /// Position the glyphs of `line` with the top-left of the line at `origin`.
    /// Returns the glyphs and the caret x after the last one.
    fn layout_line(&self, line: &str, origin: Point) -> (Vec<Glyph>, f32) {
        let scaled = self.font.as_scaled(self.scale);
        let mut caret = point(origin.x, origin.y + scaled.ascent());
        let mut prev: Option<GlyphId> = None;
        let mut glyphs = Vec::with_capacity(line.len());
        for ch in line.chars() {
            let id = scaled.glyph_id(ch);
            if let Some(p) = prev {
                caret.x += scaled.kern(p, id);
            }
            glyphs.push(id.with_scale_and_position(self.scale, caret));
            caret.x += scaled.h_advance(id);
            prev = Some(id);
        }
        (glyphs, caret.x)
    }

    /// Measure `line` as it would be drawn.
    ///
    /// Height is the bottom of the inked glyphs below the line top, and at
    /// least the font ascent, so descenders (`,` `;`) push the next line
    /// down while a blank line still takes room. An empty string measures 0×0.
    #[must_use]
    pub fn measure_line(&self, line: &str) -> LineMetrics {
        if line.is_empty() {
            return LineMetrics::default();
        }
        let (glyphs, end_x) = self.layout_line(line, point(0.0, 0.0));
        let ascent = self.font.as_scaled(self.scale).ascent();
        let ink_bottom = glyphs
            .into_iter()
            .filter_map(|g| self.font.outline_glyph(g))
            .map(|o| o.px_bounds().max.y)
            .fold(ascent, f32::max);
        LineMetrics {
            width: end_x.ceil().max(0.0) as u32,
            height: ink_bottom.ceil().max(0.0) as u32,
        }
    }

    /// Draw `line` with its top-left corner at `origin`, blending `color`
    /// over the canvas by glyph coverage.
    pub fn draw_line(&self, canvas: &mut RgbImage, origin: (i32, i32), line: &str, color: RgbTriple) {
        let (cw, ch) = (canvas.width() as i32, canvas.height() as i32);
        let (glyphs, _) = self.layout_line(line, point(origin.0 as f32, origin.1 as f32));
        for glyph in glyphs {
            let Some(outline) = self.font.outline_glyph(glyph) else {
                continue;
            };
            let bounds = outline.px_bounds();
            outline.draw(|x, y, coverage| {
                let px = bounds.min.x as i32 + x as i32;
                let py = bounds.min.y as i32 + y as i32;
                if px < 0 || py < 0 || px >= cw || py >= ch {
                    return;
                }
                let a = coverage.clamp(0.0, 1.0);
                let dst = canvas.get_pixel_mut(px as u32, py as u32);
                let blend = |fg: u8, bg: u8| (f32::from(fg) * a + f32::from(bg) * (1.0 - a)).round() as u8;
                *dst = Rgb([
                    blend(color.0, dst[0]),
                    blend(color.1, dst[1]),
                    blend(color.2, dst[2]),
                ]);
            });
        }
    }

    /// Render `grid` onto a `draw_length × draw_length` canvas filled with
    /// `colors.background`, text in `colors.text`, starting at [`TEXT_ORIGIN`].
    #[must_use]
    pub fn render(&self, grid: &CharGrid, colors: ColorScheme, draw_length: u32) -> RgbImage {
        let (r, g, b) = colors.background;
        let mut canvas = RgbImage::from_pixel(draw_length, draw_length, Rgb([r, g, b]));

        let (x, mut y) = TEXT_ORIGIN;
        let mut drawn = 0u32;
        for line in grid.lines() {
            if y >= draw_length as i32 {
                break;
            }
            let metrics = self.measure_line(&line);
            self.draw_line(&mut canvas, (x, y), &line, colors.text);
            y += metrics.height as i32;
            drawn += 1;
        }
        if drawn < grid.height {
            log::debug!(
                "Canvas {draw_length}px plein : {} ligne(s) sur {} tronquée(s)",
                grid.height - drawn,
                grid.height
            );
        }
        canvas
    }
}
