//! Inline glyph markup.
//!
//! Text pushed by the authority may carry `:name:` tokens. Known
//! names resolve either to an 8x8 mark drawn inline with the text or
//! to a plain character substitution; anything else stays literal,
//! so clock strings like "12:30" survive untouched.

use super::Surface;
use super::font::Font;

/// 8x8 inline mark, one byte per row, MSB leftmost.
pub type Mark = &'static [u8; 8];

pub const MARK_WIDTH: i32 = 8;

#[rustfmt::skip]
const MARKS: &[(&str, Mark)] = &[
    ("wolf",  &[0x81, 0xC3, 0xE7, 0xFF, 0xFF, 0x7E, 0x3C, 0x18]),
    ("lock",  &[0x3C, 0x42, 0x42, 0xFF, 0xFF, 0xE7, 0xE7, 0xFF]),
    ("skull", &[0x3C, 0x7E, 0xDB, 0xFF, 0x7E, 0x3C, 0x2A, 0x00]),
    ("check", &[0x01, 0x03, 0x06, 0x8C, 0xD8, 0x70, 0x20, 0x00]),
    ("cross", &[0x81, 0x42, 0x24, 0x18, 0x18, 0x24, 0x42, 0x81]),
    ("heart", &[0x66, 0xFF, 0xFF, 0xFF, 0x7E, 0x3C, 0x18, 0x00]),
    ("moon",  &[0x3C, 0x78, 0xF0, 0xE0, 0xE0, 0xF0, 0x78, 0x3C]),
    ("eye",   &[0x00, 0x3C, 0x42, 0x99, 0x99, 0x42, 0x3C, 0x00]),
];

/// Token names that substitute a single character instead.
const SUBSTITUTIONS: &[(&str, char)] = &[("pistol", '*')];

fn mark(name: &str) -> Option<Mark> {
    MARKS
        .iter()
        .find(|(n, _)| *n == name)
        .map(|&(_, bitmap)| bitmap)
}

fn substitution(name: &str) -> Option<char> {
    SUBSTITUTIONS
        .iter()
        .find(|(n, _)| *n == name)
        .map(|&(_, ch)| ch)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    Text(String),
    Bitmap(Mark),
}

/// Single left-to-right scan into text runs and marks. Substitutions
/// re-enter the surrounding run, so they never split a segment.
pub fn tokenize(input: &str) -> Vec<Segment> {
    let mut segments = Vec::new();
    let mut run = String::new();
    let mut rest = input;
    while let Some(start) = rest.find(':') {
        let (before, after_colon) = rest.split_at(start);
        run.push_str(before);
        let after = &after_colon[1..];
        if let Some(end) = after.find(':') {
            let name = &after[..end];
            if let Some(bitmap) = mark(name) {
                if !run.is_empty() {
                    segments.push(Segment::Text(std::mem::take(&mut run)));
                }
                segments.push(Segment::Bitmap(bitmap));
                rest = &after[end + 1..];
                continue;
            }
            if let Some(ch) = substitution(name) {
                run.push(ch);
                rest = &after[end + 1..];
                continue;
            }
        }
        // No token here, the colon itself is content.
        run.push(':');
        rest = after;
    }
    run.push_str(rest);
    if !run.is_empty() {
        segments.push(Segment::Text(run));
    }
    segments
}

pub fn line_width(font: &Font, segments: &[Segment]) -> i32 {
    segments
        .iter()
        .map(|segment| match segment {
            Segment::Text(text) => font.text_width(text),
            Segment::Bitmap(_) => MARK_WIDTH,
        })
        .sum()
}

/// Draws segments left to right with the run baseline at `y`. Marks
/// are centered vertically on the face's cap height.
pub fn draw_line(
    surface: &mut Surface,
    font: &Font,
    x: i32,
    y: i32,
    segments: &[Segment],
    level: f64,
) {
    let mut cursor = x;
    for segment in segments {
        match segment {
            Segment::Text(text) => {
                cursor = font.draw_text(surface, cursor, y, text, level);
            }
            Segment::Bitmap(bitmap) => {
                let top = y - font.cap + 1 + (font.cap - MARK_WIDTH) / 2;
                draw_mark(surface, cursor, top, bitmap, level);
                cursor += MARK_WIDTH;
            }
        }
    }
}

fn draw_mark(surface: &mut Surface, x: i32, y: i32, bitmap: Mark, level: f64) {
    for (r, &row) in bitmap.iter().enumerate() {
        for c in 0..8 {
            if (row >> (7 - c)) & 1 == 1 {
                surface.set_pixel(x + c, y + r as i32, level);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::font::{FONT_LARGE, FONT_SMALL};
    use super::*;

    #[test]
    fn test_substitution_joins_the_text_run() {
        let segments = tokenize("A:pistol:B");
        assert_eq!(segments, vec![Segment::Text("A*B".to_string())]);
    }

    #[test]
    fn test_unknown_token_stays_literal() {
        assert_eq!(
            tokenize(":foo:"),
            vec![Segment::Text(":foo:".to_string())]
        );
        assert_eq!(
            tokenize("12:30"),
            vec![Segment::Text("12:30".to_string())]
        );
        assert_eq!(tokenize("::"), vec![Segment::Text("::".to_string())]);
    }

    #[test]
    fn test_mark_splits_segments_in_order() {
        let segments = tokenize("X:wolf:Y");
        assert_eq!(segments.len(), 3);
        assert_eq!(segments[0], Segment::Text("X".to_string()));
        assert!(matches!(segments[1], Segment::Bitmap(_)));
        assert_eq!(segments[2], Segment::Text("Y".to_string()));
    }

    #[test]
    fn test_adjacent_marks_without_text() {
        let segments = tokenize(":wolf::moon:");
        assert_eq!(segments.len(), 2);
        assert!(matches!(segments[0], Segment::Bitmap(_)));
        assert!(matches!(segments[1], Segment::Bitmap(_)));
    }

    #[test]
    fn test_width_counts_runs_and_marks() {
        let segments = tokenize("X:wolf:Y");
        assert_eq!(line_width(&FONT_SMALL, &segments), 6 + 8 + 6);
        assert_eq!(line_width(&FONT_LARGE, &segments), 10 + 8 + 10);
        assert_eq!(line_width(&FONT_SMALL, &tokenize("")), 0);
    }

    #[test]
    fn test_mark_centers_on_small_cap() {
        let mut surface = Surface::new(1);
        surface.clear();
        // Wolf ears sit in the bitmap's first row.
        draw_line(&mut surface, &FONT_SMALL, 10, 12, &tokenize(":wolf:"), 1.0);
        assert!(surface.pixel_on(10, 6));
        assert!(surface.pixel_on(17, 6));
        assert!(!surface.pixel_on(10, 5));
    }

    #[test]
    fn test_mark_centers_on_large_cap() {
        let mut surface = Surface::new(1);
        surface.clear();
        draw_line(&mut surface, &FONT_LARGE, 10, 42, &tokenize(":wolf:"), 1.0);
        // cap 14 leaves three blank rows above the 8-row mark.
        assert!(surface.pixel_on(10, 32));
        assert!(!surface.pixel_on(10, 31));
    }
}
