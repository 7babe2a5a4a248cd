//! Fixed-cell raster faces.

use super::Surface;
use super::font_data::{GLYPH_COUNT, LARGE_ROWS, SMALL_ROWS};

/// One face over a row table in [`super::font_data`].
///
/// Glyphs are drawn anchored on the text baseline: cell row
/// `ascent - 1` lands on the given `y`. Pixel column `c` of a row
/// sits at bit `15 - c`.
#[derive(Debug, Clone, Copy)]
pub struct Font {
    pub width: i32,
    pub height: i32,
    /// Cell rows from the top through the baseline, inclusive.
    pub ascent: i32,
    /// Height of an uppercase glyph, for centering marks against it.
    pub cap: i32,
    rows: &'static [u16],
}

/// 6x10 face for the context and tip lines.
pub const FONT_SMALL: Font = Font {
    width: 6,
    height: 10,
    ascent: 8,
    cap: 7,
    rows: &SMALL_ROWS,
};

/// 10x20 face for the main content line.
pub const FONT_LARGE: Font = Font {
    width: 10,
    height: 20,
    ascent: 15,
    cap: 14,
    rows: &LARGE_ROWS,
};

impl Font {
    fn glyph_rows(&self, ch: char) -> Option<&'static [u16]> {
        let index = (ch as usize).checked_sub(0x20)?;
        if index >= GLYPH_COUNT {
            return None;
        }
        let height = self.height as usize;
        Some(&self.rows[index * height..(index + 1) * height])
    }

    /// Draws one glyph with its baseline at `y`. Characters outside
    /// the table advance without ink.
    pub fn draw_char(&self, surface: &mut Surface, x: i32, y: i32, ch: char, level: f64) {
        let Some(rows) = self.glyph_rows(ch) else {
            return;
        };
        let top = y - (self.ascent - 1);
        for (r, &row) in rows.iter().enumerate() {
            for c in 0..self.width {
                if (row >> (15 - c)) & 1 == 1 {
                    surface.set_pixel(x + c, top + r as i32, level);
                }
            }
        }
    }

    /// Draws a run and returns the cursor after it.
    pub fn draw_text(&self, surface: &mut Surface, x: i32, y: i32, text: &str, level: f64) -> i32 {
        let mut cursor = x;
        for ch in text.chars() {
            self.draw_char(surface, cursor, y, ch, level);
            cursor += self.width;
        }
        cursor
    }

    pub fn text_width(&self, text: &str) -> i32 {
        self.width * text.chars().count() as i32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exclamation_lands_on_baseline() {
        let mut surface = Surface::new(1);
        surface.clear();
        FONT_SMALL.draw_char(&mut surface, 0, 12, '!', 1.0);

        // Stem in column 2: bar, one row gap, dot on the baseline.
        for y in 6..=10 {
            assert!(surface.pixel_on(2, y), "bar row {y}");
        }
        assert!(!surface.pixel_on(2, 11), "gap row");
        assert!(surface.pixel_on(2, 12), "baseline dot");
        assert!(!surface.pixel_on(2, 13));
    }

    #[test]
    fn test_large_face_doubles_the_small_strokes() {
        let mut small = Surface::new(1);
        small.clear();
        FONT_SMALL.draw_char(&mut small, 0, 12, 'H', 1.0);

        let mut large = Surface::new(1);
        large.clear();
        FONT_LARGE.draw_char(&mut large, 0, 24, 'H', 1.0);

        // Every small pixel maps to a lit 2x2 block in the large face.
        for y in 0..16 {
            for x in 0..6 {
                if small.pixel_on(x, y) {
                    let (lx, ly) = (x * 2, (y - 12) * 2 + 24 - 1);
                    assert!(large.pixel_on(lx, ly), "({x},{y}) -> ({lx},{ly})");
                    assert!(large.pixel_on(lx + 1, ly + 1));
                }
            }
        }
    }

    #[test]
    fn test_unknown_char_draws_nothing() {
        let mut surface = Surface::new(1);
        surface.clear();
        FONT_SMALL.draw_char(&mut surface, 0, 12, 'é', 1.0);
        for y in 0..16 {
            for x in 0..8 {
                assert!(!surface.pixel_on(x, y));
            }
        }
    }

    #[test]
    fn test_text_width_is_per_char_advance() {
        assert_eq!(FONT_SMALL.text_width("VOTE"), 24);
        assert_eq!(FONT_LARGE.text_width("VOTE"), 40);
        assert_eq!(FONT_SMALL.text_width(""), 0);
    }
}
