//! Raster data for the two fixed-width faces.
//!
//! 95 glyphs each (`' '..='~'`), one `u16` per pixel row with
//! pixels packed from bit 15 down. The small face is a 5x8
//! column font padded into its 6x10 cell, the large face is the
//! same strokes doubled into 10x20.

pub const GLYPH_COUNT: usize = 95;

#[rustfmt::skip]
pub static SMALL_ROWS: [u16; 950] = [
    // ' '
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    // '!'
    0x0000, 0x2000, 0x2000, 0x2000, 0x2000, 0x2000, 0x0000, 0x2000, 0x0000, 0x0000,
    // '"'
    0x0000, 0x5000, 0x5000, 0x5000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    // '#'
    0x0000, 0x5000, 0x5000, 0xF800, 0x5000, 0xF800, 0x5000, 0x5000, 0x0000, 0x0000,
    // '$'
    0x0000, 0x2000, 0x7800, 0xA000, 0x7000, 0x2800, 0xF000, 0x2000, 0x0000, 0x0000,
    // '%'
    0x0000, 0xC000, 0xC800, 0x1000, 0x2000, 0x4000, 0x9800, 0x1800, 0x0000, 0x0000,
    // '&'
    0x0000, 0x4000, 0xA000, 0xA000, 0x4000, 0xA800, 0x9000, 0x6800, 0x0000, 0x0000,
    // "'"
    0x0000, 0x3000, 0x3000, 0x2000, 0x4000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    // '('
    0x0000, 0x1000, 0x2000, 0x4000, 0x4000, 0x4000, 0x2000, 0x1000, 0x0000, 0x0000,
    // ')'
    0x0000, 0x4000, 0x2000, 0x1000, 0x1000, 0x1000, 0x2000, 0x4000, 0x0000, 0x0000,
    // '*'
    0x0000, 0x2000, 0xA800, 0x7000, 0xF800, 0x7000, 0xA800, 0x2000, 0x0000, 0x0000,
    // '+'
    0x0000, 0x0000, 0x2000, 0x2000, 0xF800, 0x2000, 0x2000, 0x0000, 0x0000, 0x0000,
    // ','
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x3000, 0x3000, 0x2000, 0x4000, 0x0000,
    // '-'
    0x0000, 0x0000, 0x0000, 0x0000, 0xF800, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    // '.'
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x3000, 0x3000, 0x0000, 0x0000,
    // '/'
    0x0000, 0x0000, 0x0800, 0x1000, 0x2000, 0x4000, 0x8000, 0x0000, 0x0000, 0x0000,
    // '0'
    0x0000, 0x7000, 0x8800, 0x9800, 0xA800, 0xC800, 0x8800, 0x7000, 0x0000, 0x0000,
    // '1'
    0x0000, 0x2000, 0x6000, 0x2000, 0x2000, 0x2000, 0x2000, 0x7000, 0x0000, 0x0000,
    // '2'
    0x0000, 0x7000, 0x8800, 0x0800, 0x7000, 0x8000, 0x8000, 0xF800, 0x0000, 0x0000,
    // '3'
    0x0000, 0xF800, 0x0800, 0x1000, 0x3000, 0x0800, 0x8800, 0x7000, 0x0000, 0x0000,
    // '4'
    0x0000, 0x1000, 0x3000, 0x5000, 0x9000, 0xF800, 0x1000, 0x1000, 0x0000, 0x0000,
    // '5'
    0x0000, 0xF800, 0x8000, 0xF000, 0x0800, 0x0800, 0x8800, 0x7000, 0x0000, 0x0000,
    // '6'
    0x0000, 0x3800, 0x4000, 0x8000, 0xF000, 0x8800, 0x8800, 0x7000, 0x0000, 0x0000,
    // '7'
    0x0000, 0xF800, 0x0800, 0x0800, 0x1000, 0x2000, 0x4000, 0x8000, 0x0000, 0x0000,
    // '8'
    0x0000, 0x7000, 0x8800, 0x8800, 0x7000, 0x8800, 0x8800, 0x7000, 0x0000, 0x0000,
    // '9'
    0x0000, 0x7000, 0x8800, 0x8800, 0x7800, 0x0800, 0x1000, 0xE000, 0x0000, 0x0000,
    // ':'
    0x0000, 0x0000, 0x0000, 0x2000, 0x0000, 0x2000, 0x0000, 0x0000, 0x0000, 0x0000,
    // ';'
    0x0000, 0x0000, 0x0000, 0x2000, 0x0000, 0x2000, 0x2000, 0x4000, 0x0000, 0x0000,
    // '<'
    0x0000, 0x0800, 0x1000, 0x2000, 0x4000, 0x2000, 0x1000, 0x0800, 0x0000, 0x0000,
    // '='
    0x0000, 0x0000, 0x0000, 0xF800, 0x0000, 0xF800, 0x0000, 0x0000, 0x0000, 0x0000,
    // '>'
    0x0000, 0x4000, 0x2000, 0x1000, 0x0800, 0x1000, 0x2000, 0x4000, 0x0000, 0x0000,
    // '?'
    0x0000, 0x7000, 0x8800, 0x0800, 0x3000, 0x2000, 0x0000, 0x2000, 0x0000, 0x0000,
    // '@'
    0x0000, 0x7000, 0x8800, 0xA800, 0xB800, 0xB000, 0x8000, 0x7800, 0x0000, 0x0000,
    // 'A'
    0x0000, 0x2000, 0x5000, 0x8800, 0x8800, 0xF800, 0x8800, 0x8800, 0x0000, 0x0000,
    // 'B'
    0x0000, 0xF000, 0x8800, 0x8800, 0xF000, 0x8800, 0x8800, 0xF000, 0x0000, 0x0000,
    // 'C'
    0x0000, 0x7000, 0x8800, 0x8000, 0x8000, 0x8000, 0x8800, 0x7000, 0x0000, 0x0000,
    // 'D'
    0x0000, 0xF000, 0x8800, 0x8800, 0x8800, 0x8800, 0x8800, 0xF000, 0x0000, 0x0000,
    // 'E'
    0x0000, 0xF800, 0x8000, 0x8000, 0xF000, 0x8000, 0x8000, 0xF800, 0x0000, 0x0000,
    // 'F'
    0x0000, 0xF800, 0x8000, 0x8000, 0xF000, 0x8000, 0x8000, 0x8000, 0x0000, 0x0000,
    // 'G'
    0x0000, 0x7800, 0x8800, 0x8000, 0x8000, 0x9800, 0x8800, 0x7800, 0x0000, 0x0000,
    // 'H'
    0x0000, 0x8800, 0x8800, 0x8800, 0xF800, 0x8800, 0x8800, 0x8800, 0x0000, 0x0000,
    // 'I'
    0x0000, 0x7000, 0x2000, 0x2000, 0x2000, 0x2000, 0x2000, 0x7000, 0x0000, 0x0000,
    // 'J'
    0x0000, 0x3800, 0x1000, 0x1000, 0x1000, 0x1000, 0x9000, 0x6000, 0x0000, 0x0000,
    // 'K'
    0x0000, 0x8800, 0x9000, 0xA000, 0xC000, 0xA000, 0x9000, 0x8800, 0x0000, 0x0000,
    // 'L'
    0x0000, 0x8000, 0x8000, 0x8000, 0x8000, 0x8000, 0x8000, 0xF800, 0x0000, 0x0000,
    // 'M'
    0x0000, 0x8800, 0xD800, 0xA800, 0xA800, 0xA800, 0x8800, 0x8800, 0x0000, 0x0000,
    // 'N'
    0x0000, 0x8800, 0x8800, 0xC800, 0xA800, 0x9800, 0x8800, 0x8800, 0x0000, 0x0000,
    // 'O'
    0x0000, 0x7000, 0x8800, 0x8800, 0x8800, 0x8800, 0x8800, 0x7000, 0x0000, 0x0000,
    // 'P'
    0x0000, 0xF000, 0x8800, 0x8800, 0xF000, 0x8000, 0x8000, 0x8000, 0x0000, 0x0000,
    // 'Q'
    0x0000, 0x7000, 0x8800, 0x8800, 0x8800, 0xA800, 0x9000, 0x6800, 0x0000, 0x0000,
    // 'R'
    0x0000, 0xF000, 0x8800, 0x8800, 0xF000, 0xA000, 0x9000, 0x8800, 0x0000, 0x0000,
    // 'S'
    0x0000, 0x7000, 0x8800, 0x8000, 0x7000, 0x0800, 0x8800, 0x7000, 0x0000, 0x0000,
    // 'T'
    0x0000, 0xF800, 0xA800, 0x2000, 0x2000, 0x2000, 0x2000, 0x2000, 0x0000, 0x0000,
    // 'U'
    0x0000, 0x8800, 0x8800, 0x8800, 0x8800, 0x8800, 0x8800, 0x7000, 0x0000, 0x0000,
    // 'V'
    0x0000, 0x8800, 0x8800, 0x8800, 0x8800, 0x8800, 0x5000, 0x2000, 0x0000, 0x0000,
    // 'W'
    0x0000, 0x8800, 0x8800, 0x8800, 0xA800, 0xA800, 0xA800, 0x5000, 0x0000, 0x0000,
    // 'X'
    0x0000, 0x8800, 0x8800, 0x5000, 0x2000, 0x5000, 0x8800, 0x8800, 0x0000, 0x0000,
    // 'Y'
    0x0000, 0x8800, 0x8800, 0x5000, 0x2000, 0x2000, 0x2000, 0x2000, 0x0000, 0x0000,
    // 'Z'
    0x0000, 0xF800, 0x0800, 0x1000, 0x7000, 0x4000, 0x8000, 0xF800, 0x0000, 0x0000,
    // '['
    0x0000, 0x7000, 0x4000, 0x4000, 0x4000, 0x4000, 0x4000, 0x7000, 0x0000, 0x0000,
    // '\\'
    0x0000, 0x0000, 0x8000, 0x4000, 0x2000, 0x1000, 0x0800, 0x0000, 0x0000, 0x0000,
    // ']'
    0x0000, 0x7000, 0x1000, 0x1000, 0x1000, 0x1000, 0x1000, 0x7000, 0x0000, 0x0000,
    // '^'
    0x0000, 0x2000, 0x5000, 0x8800, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    // '_'
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0xF800, 0x0000, 0x0000,
    // '`'
    0x0000, 0x6000, 0x6000, 0x2000, 0x1000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    // 'a'
    0x0000, 0x0000, 0x0000, 0x7000, 0x0800, 0x7800, 0x8800, 0x7800, 0x0000, 0x0000,
    // 'b'
    0x0000, 0x8000, 0x8000, 0xB000, 0xC800, 0x8800, 0x8800, 0xF000, 0x0000, 0x0000,
    // 'c'
    0x0000, 0x0000, 0x0000, 0x7000, 0x8000, 0x8000, 0x8800, 0x7000, 0x0000, 0x0000,
    // 'd'
    0x0000, 0x0800, 0x0800, 0x6800, 0x9800, 0x8800, 0x8800, 0x7800, 0x0000, 0x0000,
    // 'e'
    0x0000, 0x0000, 0x0000, 0x7000, 0x8800, 0xF800, 0x8000, 0x7000, 0x0000, 0x0000,
    // 'f'
    0x0000, 0x3000, 0x4800, 0x4000, 0xE000, 0x4000, 0x4000, 0x4000, 0x0000, 0x0000,
    // 'g'
    0x0000, 0x0000, 0x7800, 0x8800, 0x8800, 0x7800, 0x0800, 0x7000, 0x0000, 0x0000,
    // 'h'
    0x0000, 0x8000, 0x8000, 0xB000, 0xC800, 0x8800, 0x8800, 0x8800, 0x0000, 0x0000,
    // 'i'
    0x0000, 0x2000, 0x0000, 0x6000, 0x2000, 0x2000, 0x2000, 0x7000, 0x0000, 0x0000,
    // 'j'
    0x0000, 0x1000, 0x0000, 0x3000, 0x1000, 0x1000, 0x9000, 0x6000, 0x0000, 0x0000,
    // 'k'
    0x0000, 0x8000, 0x8000, 0x9000, 0xA000, 0xC000, 0xA000, 0x9000, 0x0000, 0x0000,
    // 'l'
    0x0000, 0x6000, 0x2000, 0x2000, 0x2000, 0x2000, 0x2000, 0x7000, 0x0000, 0x0000,
    // 'm'
    0x0000, 0x0000, 0x0000, 0xD000, 0xA800, 0xA800, 0x8800, 0x8800, 0x0000, 0x0000,
    // 'n'
    0x0000, 0x0000, 0x0000, 0xB000, 0xC800, 0x8800, 0x8800, 0x8800, 0x0000, 0x0000,
    // 'o'
    0x0000, 0x0000, 0x0000, 0x7000, 0x8800, 0x8800, 0x8800, 0x7000, 0x0000, 0x0000,
    // 'p'
    0x0000, 0x0000, 0x0000, 0xF000, 0x8800, 0xF000, 0x8000, 0x8000, 0x0000, 0x0000,
    // 'q'
    0x0000, 0x0000, 0x0000, 0x6800, 0x9800, 0x7800, 0x0800, 0x0800, 0x0000, 0x0000,
    // 'r'
    0x0000, 0x0000, 0x0000, 0xB000, 0xC800, 0x8000, 0x8000, 0x8000, 0x0000, 0x0000,
    // 's'
    0x0000, 0x0000, 0x0000, 0x7000, 0x8000, 0x7000, 0x0800, 0xF000, 0x0000, 0x0000,
    // 't'
    0x0000, 0x4000, 0x4000, 0xE000, 0x4000, 0x4000, 0x4800, 0x3000, 0x0000, 0x0000,
    // 'u'
    0x0000, 0x0000, 0x0000, 0x8800, 0x8800, 0x8800, 0x9800, 0x6800, 0x0000, 0x0000,
    // 'v'
    0x0000, 0x0000, 0x0000, 0x8800, 0x8800, 0x8800, 0x5000, 0x2000, 0x0000, 0x0000,
    // 'w'
    0x0000, 0x0000, 0x0000, 0x8800, 0x8800, 0xA800, 0xA800, 0x5000, 0x0000, 0x0000,
    // 'x'
    0x0000, 0x0000, 0x0000, 0x8800, 0x5000, 0x2000, 0x5000, 0x8800, 0x0000, 0x0000,
    // 'y'
    0x0000, 0x0000, 0x0000, 0x8800, 0x8800, 0x7800, 0x0800, 0x7000, 0x0000, 0x0000,
    // 'z'
    0x0000, 0x0000, 0x0000, 0xF800, 0x1000, 0x2000, 0x4000, 0xF800, 0x0000, 0x0000,
    // '{'
    0x0000, 0x1000, 0x2000, 0x2000, 0x4000, 0x2000, 0x2000, 0x1000, 0x0000, 0x0000,
    // '|'
    0x0000, 0x2000, 0x2000, 0x2000, 0x2000, 0x2000, 0x2000, 0x2000, 0x0000, 0x0000,
    // '}'
    0x0000, 0x4000, 0x2000, 0x2000, 0x1000, 0x2000, 0x2000, 0x4000, 0x0000, 0x0000,
    // '~'
    0x0000, 0x0000, 0x2000, 0x1000, 0xF800, 0x1000, 0x2000, 0x0000, 0x0000, 0x0000,
];

#[rustfmt::skip]
pub static LARGE_ROWS: [u16; 1900] = [
    // ' '
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    // '!'
    0x0000, 0x0C00, 0x0C00, 0x0C00, 0x0C00, 0x0C00, 0x0C00, 0x0C00, 0x0C00, 0x0C00,
    0x0C00, 0x0000, 0x0000, 0x0C00, 0x0C00, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    // '"'
    0x0000, 0x3300, 0x3300, 0x3300, 0x3300, 0x3300, 0x3300, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    // '#'
    0x0000, 0x3300, 0x3300, 0x3300, 0x3300, 0xFFC0, 0xFFC0, 0x3300, 0x3300, 0xFFC0,
    0xFFC0, 0x3300, 0x3300, 0x3300, 0x3300, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    // '$'
    0x0000, 0x0C00, 0x0C00, 0x3FC0, 0x3FC0, 0xCC00, 0xCC00, 0x3F00, 0x3F00, 0x0CC0,
    0x0CC0, 0xFF00, 0xFF00, 0x0C00, 0x0C00, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    // '%'
    0x0000, 0xF000, 0xF000, 0xF0C0, 0xF0C0, 0x0300, 0x0300, 0x0C00, 0x0C00, 0x3000,
    0x3000, 0xC3C0, 0xC3C0, 0x03C0, 0x03C0, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    // '&'
    0x0000, 0x3000, 0x3000, 0xCC00, 0xCC00, 0xCC00, 0xCC00, 0x3000, 0x3000, 0xCCC0,
    0xCCC0, 0xC300, 0xC300, 0x3CC0, 0x3CC0, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    // "'"
    0x0000, 0x0F00, 0x0F00, 0x0F00, 0x0F00, 0x0C00, 0x0C00, 0x3000, 0x3000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    // '('
    0x0000, 0x0300, 0x0300, 0x0C00, 0x0C00, 0x3000, 0x3000, 0x3000, 0x3000, 0x3000,
    0x3000, 0x0C00, 0x0C00, 0x0300, 0x0300, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    // ')'
    0x0000, 0x3000, 0x3000, 0x0C00, 0x0C00, 0x0300, 0x0300, 0x0300, 0x0300, 0x0300,
    0x0300, 0x0C00, 0x0C00, 0x3000, 0x3000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    // '*'
    0x0000, 0x0C00, 0x0C00, 0xCCC0, 0xCCC0, 0x3F00, 0x3F00, 0xFFC0, 0xFFC0, 0x3F00,
    0x3F00, 0xCCC0, 0xCCC0, 0x0C00, 0x0C00, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    // '+'
    0x0000, 0x0000, 0x0000, 0x0C00, 0x0C00, 0x0C00, 0x0C00, 0xFFC0, 0xFFC0, 0x0C00,
    0x0C00, 0x0C00, 0x0C00, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    // ','
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0F00,
    0x0F00, 0x0F00, 0x0F00, 0x0C00, 0x0C00, 0x3000, 0x3000, 0x0000, 0x0000, 0x0000,
    // '-'
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0xFFC0, 0xFFC0, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    // '.'
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0F00, 0x0F00, 0x0F00, 0x0F00, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    // '/'
    0x0000, 0x0000, 0x0000, 0x00C0, 0x00C0, 0x0300, 0x0300, 0x0C00, 0x0C00, 0x3000,
    0x3000, 0xC000, 0xC000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    // '0'
    0x0000, 0x3F00, 0x3F00, 0xC0C0, 0xC0C0, 0xC3C0, 0xC3C0, 0xCCC0, 0xCCC0, 0xF0C0,
    0xF0C0, 0xC0C0, 0xC0C0, 0x3F00, 0x3F00, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    // '1'
    0x0000, 0x0C00, 0x0C00, 0x3C00, 0x3C00, 0x0C00, 0x0C00, 0x0C00, 0x0C00, 0x0C00,
    0x0C00, 0x0C00, 0x0C00, 0x3F00, 0x3F00, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    // '2'
    0x0000, 0x3F00, 0x3F00, 0xC0C0, 0xC0C0, 0x00C0, 0x00C0, 0x3F00, 0x3F00, 0xC000,
    0xC000, 0xC000, 0xC000, 0xFFC0, 0xFFC0, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    // '3'
    0x0000, 0xFFC0, 0xFFC0, 0x00C0, 0x00C0, 0x0300, 0x0300, 0x0F00, 0x0F00, 0x00C0,
    0x00C0, 0xC0C0, 0xC0C0, 0x3F00, 0x3F00, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    // '4'
    0x0000, 0x0300, 0x0300, 0x0F00, 0x0F00, 0x3300, 0x3300, 0xC300, 0xC300, 0xFFC0,
    0xFFC0, 0x0300, 0x0300, 0x0300, 0x0300, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    // '5'
    0x0000, 0xFFC0, 0xFFC0, 0xC000, 0xC000, 0xFF00, 0xFF00, 0x00C0, 0x00C0, 0x00C0,
    0x00C0, 0xC0C0, 0xC0C0, 0x3F00, 0x3F00, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    // '6'
    0x0000, 0x0FC0, 0x0FC0, 0x3000, 0x3000, 0xC000, 0xC000, 0xFF00, 0xFF00, 0xC0C0,
    0xC0C0, 0xC0C0, 0xC0C0, 0x3F00, 0x3F00, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    // '7'
    0x0000, 0xFFC0, 0xFFC0, 0x00C0, 0x00C0, 0x00C0, 0x00C0, 0x0300, 0x0300, 0x0C00,
    0x0C00, 0x3000, 0x3000, 0xC000, 0xC000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    // '8'
    0x0000, 0x3F00, 0x3F00, 0xC0C0, 0xC0C0, 0xC0C0, 0xC0C0, 0x3F00, 0x3F00, 0xC0C0,
    0xC0C0, 0xC0C0, 0xC0C0, 0x3F00, 0x3F00, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    // '9'
    0x0000, 0x3F00, 0x3F00, 0xC0C0, 0xC0C0, 0xC0C0, 0xC0C0, 0x3FC0, 0x3FC0, 0x00C0,
    0x00C0, 0x0300, 0x0300, 0xFC00, 0xFC00, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    // ':'
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0C00, 0x0C00, 0x0000, 0x0000, 0x0C00,
    0x0C00, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    // ';'
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0C00, 0x0C00, 0x0000, 0x0000, 0x0C00,
    0x0C00, 0x0C00, 0x0C00, 0x3000, 0x3000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    // '<'
    0x0000, 0x00C0, 0x00C0, 0x0300, 0x0300, 0x0C00, 0x0C00, 0x3000, 0x3000, 0x0C00,
    0x0C00, 0x0300, 0x0300, 0x00C0, 0x00C0, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    // '='
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0xFFC0, 0xFFC0, 0x0000, 0x0000, 0xFFC0,
    0xFFC0, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    // '>'
    0x0000, 0x3000, 0x3000, 0x0C00, 0x0C00, 0x0300, 0x0300, 0x00C0, 0x00C0, 0x0300,
    0x0300, 0x0C00, 0x0C00, 0x3000, 0x3000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    // '?'
    0x0000, 0x3F00, 0x3F00, 0xC0C0, 0xC0C0, 0x00C0, 0x00C0, 0x0F00, 0x0F00, 0x0C00,
    0x0C00, 0x0000, 0x0000, 0x0C00, 0x0C00, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    // '@'
    0x0000, 0x3F00, 0x3F00, 0xC0C0, 0xC0C0, 0xCCC0, 0xCCC0, 0xCFC0, 0xCFC0, 0xCF00,
    0xCF00, 0xC000, 0xC000, 0x3FC0, 0x3FC0, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    // 'A'
    0x0000, 0x0C00, 0x0C00, 0x3300, 0x3300, 0xC0C0, 0xC0C0, 0xC0C0, 0xC0C0, 0xFFC0,
    0xFFC0, 0xC0C0, 0xC0C0, 0xC0C0, 0xC0C0, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    // 'B'
    0x0000, 0xFF00, 0xFF00, 0xC0C0, 0xC0C0, 0xC0C0, 0xC0C0, 0xFF00, 0xFF00, 0xC0C0,
    0xC0C0, 0xC0C0, 0xC0C0, 0xFF00, 0xFF00, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    // 'C'
    0x0000, 0x3F00, 0x3F00, 0xC0C0, 0xC0C0, 0xC000, 0xC000, 0xC000, 0xC000, 0xC000,
    0xC000, 0xC0C0, 0xC0C0, 0x3F00, 0x3F00, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    // 'D'
    0x0000, 0xFF00, 0xFF00, 0xC0C0, 0xC0C0, 0xC0C0, 0xC0C0, 0xC0C0, 0xC0C0, 0xC0C0,
    0xC0C0, 0xC0C0, 0xC0C0, 0xFF00, 0xFF00, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    // 'E'
    0x0000, 0xFFC0, 0xFFC0, 0xC000, 0xC000, 0xC000, 0xC000, 0xFF00, 0xFF00, 0xC000,
    0xC000, 0xC000, 0xC000, 0xFFC0, 0xFFC0, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    // 'F'
    0x0000, 0xFFC0, 0xFFC0, 0xC000, 0xC000, 0xC000, 0xC000, 0xFF00, 0xFF00, 0xC000,
    0xC000, 0xC000, 0xC000, 0xC000, 0xC000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    // 'G'
    0x0000, 0x3FC0, 0x3FC0, 0xC0C0, 0xC0C0, 0xC000, 0xC000, 0xC000, 0xC000, 0xC3C0,
    0xC3C0, 0xC0C0, 0xC0C0, 0x3FC0, 0x3FC0, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    // 'H'
    0x0000, 0xC0C0, 0xC0C0, 0xC0C0, 0xC0C0, 0xC0C0, 0xC0C0, 0xFFC0, 0xFFC0, 0xC0C0,
    0xC0C0, 0xC0C0, 0xC0C0, 0xC0C0, 0xC0C0, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    // 'I'
    0x0000, 0x3F00, 0x3F00, 0x0C00, 0x0C00, 0x0C00, 0x0C00, 0x0C00, 0x0C00, 0x0C00,
    0x0C00, 0x0C00, 0x0C00, 0x3F00, 0x3F00, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    // 'J'
    0x0000, 0x0FC0, 0x0FC0, 0x0300, 0x0300, 0x0300, 0x0300, 0x0300, 0x0300, 0x0300,
    0x0300, 0xC300, 0xC300, 0x3C00, 0x3C00, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    // 'K'
    0x0000, 0xC0C0, 0xC0C0, 0xC300, 0xC300, 0xCC00, 0xCC00, 0xF000, 0xF000, 0xCC00,
    0xCC00, 0xC300, 0xC300, 0xC0C0, 0xC0C0, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    // 'L'
    0x0000, 0xC000, 0xC000, 0xC000, 0xC000, 0xC000, 0xC000, 0xC000, 0xC000, 0xC000,
    0xC000, 0xC000, 0xC000, 0xFFC0, 0xFFC0, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    // 'M'
    0x0000, 0xC0C0, 0xC0C0, 0xF3C0, 0xF3C0, 0xCCC0, 0xCCC0, 0xCCC0, 0xCCC0, 0xCCC0,
    0xCCC0, 0xC0C0, 0xC0C0, 0xC0C0, 0xC0C0, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    // 'N'
    0x0000, 0xC0C0, 0xC0C0, 0xC0C0, 0xC0C0, 0xF0C0, 0xF0C0, 0xCCC0, 0xCCC0, 0xC3C0,
    0xC3C0, 0xC0C0, 0xC0C0, 0xC0C0, 0xC0C0, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    // 'O'
    0x0000, 0x3F00, 0x3F00, 0xC0C0, 0xC0C0, 0xC0C0, 0xC0C0, 0xC0C0, 0xC0C0, 0xC0C0,
    0xC0C0, 0xC0C0, 0xC0C0, 0x3F00, 0x3F00, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    // 'P'
    0x0000, 0xFF00, 0xFF00, 0xC0C0, 0xC0C0, 0xC0C0, 0xC0C0, 0xFF00, 0xFF00, 0xC000,
    0xC000, 0xC000, 0xC000, 0xC000, 0xC000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    // 'Q'
    0x0000, 0x3F00, 0x3F00, 0xC0C0, 0xC0C0, 0xC0C0, 0xC0C0, 0xC0C0, 0xC0C0, 0xCCC0,
    0xCCC0, 0xC300, 0xC300, 0x3CC0, 0x3CC0, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    // 'R'
    0x0000, 0xFF00, 0xFF00, 0xC0C0, 0xC0C0, 0xC0C0, 0xC0C0, 0xFF00, 0xFF00, 0xCC00,
    0xCC00, 0xC300, 0xC300, 0xC0C0, 0xC0C0, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    // 'S'
    0x0000, 0x3F00, 0x3F00, 0xC0C0, 0xC0C0, 0xC000, 0xC000, 0x3F00, 0x3F00, 0x00C0,
    0x00C0, 0xC0C0, 0xC0C0, 0x3F00, 0x3F00, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    // 'T'
    0x0000, 0xFFC0, 0xFFC0, 0xCCC0, 0xCCC0, 0x0C00, 0x0C00, 0x0C00, 0x0C00, 0x0C00,
    0x0C00, 0x0C00, 0x0C00, 0x0C00, 0x0C00, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    // 'U'
    0x0000, 0xC0C0, 0xC0C0, 0xC0C0, 0xC0C0, 0xC0C0, 0xC0C0, 0xC0C0, 0xC0C0, 0xC0C0,
    0xC0C0, 0xC0C0, 0xC0C0, 0x3F00, 0x3F00, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    // 'V'
    0x0000, 0xC0C0, 0xC0C0, 0xC0C0, 0xC0C0, 0xC0C0, 0xC0C0, 0xC0C0, 0xC0C0, 0xC0C0,
    0xC0C0, 0x3300, 0x3300, 0x0C00, 0x0C00, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    // 'W'
    0x0000, 0xC0C0, 0xC0C0, 0xC0C0, 0xC0C0, 0xC0C0, 0xC0C0, 0xCCC0, 0xCCC0, 0xCCC0,
    0xCCC0, 0xCCC0, 0xCCC0, 0x3300, 0x3300, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    // 'X'
    0x0000, 0xC0C0, 0xC0C0, 0xC0C0, 0xC0C0, 0x3300, 0x3300, 0x0C00, 0x0C00, 0x3300,
    0x3300, 0xC0C0, 0xC0C0, 0xC0C0, 0xC0C0, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    // 'Y'
    0x0000, 0xC0C0, 0xC0C0, 0xC0C0, 0xC0C0, 0x3300, 0x3300, 0x0C00, 0x0C00, 0x0C00,
    0x0C00, 0x0C00, 0x0C00, 0x0C00, 0x0C00, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    // 'Z'
    0x0000, 0xFFC0, 0xFFC0, 0x00C0, 0x00C0, 0x0300, 0x0300, 0x3F00, 0x3F00, 0x3000,
    0x3000, 0xC000, 0xC000, 0xFFC0, 0xFFC0, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    // '['
    0x0000, 0x3F00, 0x3F00, 0x3000, 0x3000, 0x3000, 0x3000, 0x3000, 0x3000, 0x3000,
    0x3000, 0x3000, 0x3000, 0x3F00, 0x3F00, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    // '\\'
    0x0000, 0x0000, 0x0000, 0xC000, 0xC000, 0x3000, 0x3000, 0x0C00, 0x0C00, 0x0300,
    0x0300, 0x00C0, 0x00C0, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    // ']'
    0x0000, 0x3F00, 0x3F00, 0x0300, 0x0300, 0x0300, 0x0300, 0x0300, 0x0300, 0x0300,
    0x0300, 0x0300, 0x0300, 0x3F00, 0x3F00, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    // '^'
    0x0000, 0x0C00, 0x0C00, 0x3300, 0x3300, 0xC0C0, 0xC0C0, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    // '_'
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0xFFC0, 0xFFC0, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    // '`'
    0x0000, 0x3C00, 0x3C00, 0x3C00, 0x3C00, 0x0C00, 0x0C00, 0x0300, 0x0300, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    // 'a'
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x3F00, 0x3F00, 0x00C0, 0x00C0, 0x3FC0,
    0x3FC0, 0xC0C0, 0xC0C0, 0x3FC0, 0x3FC0, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    // 'b'
    0x0000, 0xC000, 0xC000, 0xC000, 0xC000, 0xCF00, 0xCF00, 0xF0C0, 0xF0C0, 0xC0C0,
    0xC0C0, 0xC0C0, 0xC0C0, 0xFF00, 0xFF00, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    // 'c'
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x3F00, 0x3F00, 0xC000, 0xC000, 0xC000,
    0xC000, 0xC0C0, 0xC0C0, 0x3F00, 0x3F00, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    // 'd'
    0x0000, 0x00C0, 0x00C0, 0x00C0, 0x00C0, 0x3CC0, 0x3CC0, 0xC3C0, 0xC3C0, 0xC0C0,
    0xC0C0, 0xC0C0, 0xC0C0, 0x3FC0, 0x3FC0, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    // 'e'
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x3F00, 0x3F00, 0xC0C0, 0xC0C0, 0xFFC0,
    0xFFC0, 0xC000, 0xC000, 0x3F00, 0x3F00, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    // 'f'
    0x0000, 0x0F00, 0x0F00, 0x30C0, 0x30C0, 0x3000, 0x3000, 0xFC00, 0xFC00, 0x3000,
    0x3000, 0x3000, 0x3000, 0x3000, 0x3000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    // 'g'
    0x0000, 0x0000, 0x0000, 0x3FC0, 0x3FC0, 0xC0C0, 0xC0C0, 0xC0C0, 0xC0C0, 0x3FC0,
    0x3FC0, 0x00C0, 0x00C0, 0x3F00, 0x3F00, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    // 'h'
    0x0000, 0xC000, 0xC000, 0xC000, 0xC000, 0xCF00, 0xCF00, 0xF0C0, 0xF0C0, 0xC0C0,
    0xC0C0, 0xC0C0, 0xC0C0, 0xC0C0, 0xC0C0, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    // 'i'
    0x0000, 0x0C00, 0x0C00, 0x0000, 0x0000, 0x3C00, 0x3C00, 0x0C00, 0x0C00, 0x0C00,
    0x0C00, 0x0C00, 0x0C00, 0x3F00, 0x3F00, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    // 'j'
    0x0000, 0x0300, 0x0300, 0x0000, 0x0000, 0x0F00, 0x0F00, 0x0300, 0x0300, 0x0300,
    0x0300, 0xC300, 0xC300, 0x3C00, 0x3C00, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    // 'k'
    0x0000, 0xC000, 0xC000, 0xC000, 0xC000, 0xC300, 0xC300, 0xCC00, 0xCC00, 0xF000,
    0xF000, 0xCC00, 0xCC00, 0xC300, 0xC300, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    // 'l'
    0x0000, 0x3C00, 0x3C00, 0x0C00, 0x0C00, 0x0C00, 0x0C00, 0x0C00, 0x0C00, 0x0C00,
    0x0C00, 0x0C00, 0x0C00, 0x3F00, 0x3F00, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    // 'm'
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0xF300, 0xF300, 0xCCC0, 0xCCC0, 0xCCC0,
    0xCCC0, 0xC0C0, 0xC0C0, 0xC0C0, 0xC0C0, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    // 'n'
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0xCF00, 0xCF00, 0xF0C0, 0xF0C0, 0xC0C0,
    0xC0C0, 0xC0C0, 0xC0C0, 0xC0C0, 0xC0C0, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    // 'o'
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x3F00, 0x3F00, 0xC0C0, 0xC0C0, 0xC0C0,
    0xC0C0, 0xC0C0, 0xC0C0, 0x3F00, 0x3F00, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    // 'p'
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0xFF00, 0xFF00, 0xC0C0, 0xC0C0, 0xFF00,
    0xFF00, 0xC000, 0xC000, 0xC000, 0xC000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    // 'q'
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x3CC0, 0x3CC0, 0xC3C0, 0xC3C0, 0x3FC0,
    0x3FC0, 0x00C0, 0x00C0, 0x00C0, 0x00C0, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    // 'r'
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0xCF00, 0xCF00, 0xF0C0, 0xF0C0, 0xC000,
    0xC000, 0xC000, 0xC000, 0xC000, 0xC000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    // 's'
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x3F00, 0x3F00, 0xC000, 0xC000, 0x3F00,
    0x3F00, 0x00C0, 0x00C0, 0xFF00, 0xFF00, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    // 't'
    0x0000, 0x3000, 0x3000, 0x3000, 0x3000, 0xFC00, 0xFC00, 0x3000, 0x3000, 0x3000,
    0x3000, 0x30C0, 0x30C0, 0x0F00, 0x0F00, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    // 'u'
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0xC0C0, 0xC0C0, 0xC0C0, 0xC0C0, 0xC0C0,
    0xC0C0, 0xC3C0, 0xC3C0, 0x3CC0, 0x3CC0, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    // 'v'
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0xC0C0, 0xC0C0, 0xC0C0, 0xC0C0, 0xC0C0,
    0xC0C0, 0x3300, 0x3300, 0x0C00, 0x0C00, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    // 'w'
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0xC0C0, 0xC0C0, 0xC0C0, 0xC0C0, 0xCCC0,
    0xCCC0, 0xCCC0, 0xCCC0, 0x3300, 0x3300, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    // 'x'
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0xC0C0, 0xC0C0, 0x3300, 0x3300, 0x0C00,
    0x0C00, 0x3300, 0x3300, 0xC0C0, 0xC0C0, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    // 'y'
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0xC0C0, 0xC0C0, 0xC0C0, 0xC0C0, 0x3FC0,
    0x3FC0, 0x00C0, 0x00C0, 0x3F00, 0x3F00, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    // 'z'
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0xFFC0, 0xFFC0, 0x0300, 0x0300, 0x0C00,
    0x0C00, 0x3000, 0x3000, 0xFFC0, 0xFFC0, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    // '{'
    0x0000, 0x0300, 0x0300, 0x0C00, 0x0C00, 0x0C00, 0x0C00, 0x3000, 0x3000, 0x0C00,
    0x0C00, 0x0C00, 0x0C00, 0x0300, 0x0300, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    // '|'
    0x0000, 0x0C00, 0x0C00, 0x0C00, 0x0C00, 0x0C00, 0x0C00, 0x0C00, 0x0C00, 0x0C00,
    0x0C00, 0x0C00, 0x0C00, 0x0C00, 0x0C00, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    // '}'
    0x0000, 0x3000, 0x3000, 0x0C00, 0x0C00, 0x0C00, 0x0C00, 0x0300, 0x0300, 0x0C00,
    0x0C00, 0x0C00, 0x0C00, 0x3000, 0x3000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    // '~'
    0x0000, 0x0000, 0x0000, 0x0C00, 0x0C00, 0x0300, 0x0300, 0xFFC0, 0xFFC0, 0x0300,
    0x0300, 0x0C00, 0x0C00, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
];
