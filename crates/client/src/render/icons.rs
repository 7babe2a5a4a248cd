//! Item column bitmaps.
//!
//! 18x18 XBM format: three bytes per row, least significant bit
//! leftmost, top two bits of the third byte unused.

use super::Surface;

pub const ICON_SIZE: i32 = 18;

/// Bitmap for an icon id, `None` for unknown ids and the explicit
/// `"empty"` placeholder.
pub fn lookup(id: &str) -> Option<&'static [u8; 54]> {
    match id {
        "wolf" => Some(&WOLF),
        "villager" => Some(&VILLAGER),
        "seer" => Some(&SEER),
        "pistol" => Some(&PISTOL),
        "medkit" => Some(&MEDKIT),
        "shield" => Some(&SHIELD),
        _ => None,
    }
}

pub fn draw_xbm(surface: &mut Surface, x: i32, y: i32, bitmap: &[u8; 54], level: f64) {
    for row in 0..ICON_SIZE {
        for col in 0..ICON_SIZE {
            // Bytes never straddle rows.
            let byte = bitmap[(row * 3 + col / 8) as usize];
            if (byte >> (col % 8)) & 1 == 1 {
                surface.set_pixel(x + col, y + row, level);
            }
        }
    }
}

static WOLF: [u8; 54] = [
    0x02, 0x00, 0x01, 0x06, 0x80, 0x01, 0x0E, 0xC0, 0x01,
    0x1E, 0xE0, 0x01, 0x3E, 0xF0, 0x01, 0xFE, 0xFF, 0x01,
    0xFF, 0xFF, 0x03, 0xCF, 0xCF, 0x03, 0xCF, 0xCF, 0x03,
    0xFF, 0xFF, 0x03, 0xFE, 0xFF, 0x01, 0xFE, 0xFF, 0x01,
    0xFC, 0xFF, 0x00, 0xF8, 0x7F, 0x00, 0xF0, 0x3F, 0x00,
    0xE0, 0x1C, 0x00, 0xC0, 0x0C, 0x00, 0x80, 0x07, 0x00,
];

static VILLAGER: [u8; 54] = [
    0xC0, 0x0F, 0x00, 0xE0, 0x1F, 0x00, 0xF0, 0x3F, 0x00,
    0xF0, 0x3F, 0x00, 0xF0, 0x3F, 0x00, 0xF0, 0x3F, 0x00,
    0xE0, 0x1F, 0x00, 0xC0, 0x0F, 0x00, 0x00, 0x03, 0x00,
    0xF0, 0x3F, 0x00, 0xFC, 0xFF, 0x00, 0xFE, 0xFF, 0x01,
    0xFE, 0xFF, 0x01, 0xFE, 0xFF, 0x01, 0xFE, 0xFF, 0x01,
    0xFE, 0xFF, 0x01, 0xFE, 0xFF, 0x01, 0xFE, 0xFF, 0x01,
];

static SEER: [u8; 54] = [
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0xC0, 0x0F, 0x00, 0x30, 0x30, 0x00, 0x0C, 0xC0, 0x00,
    0x82, 0x07, 0x01, 0xC1, 0x0F, 0x02, 0xE1, 0x1F, 0x02,
    0xE1, 0x1F, 0x02, 0xC1, 0x0F, 0x02, 0x82, 0x07, 0x01,
    0x0C, 0xC0, 0x00, 0x30, 0x30, 0x00, 0xC0, 0x0F, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
];

static PISTOL: [u8; 54] = [
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0xFF, 0xFF, 0x03, 0xFF, 0xFF, 0x03,
    0xFF, 0xFF, 0x03, 0x00, 0xF3, 0x03, 0x00, 0xF2, 0x01,
    0x00, 0xF8, 0x00, 0x00, 0xF8, 0x00, 0x00, 0x7C, 0x00,
    0x00, 0x7C, 0x00, 0x00, 0x3E, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
];

static MEDKIT: [u8; 54] = [
    0x00, 0x00, 0x00, 0xC0, 0x0F, 0x00, 0x60, 0x18, 0x00,
    0xFF, 0xFF, 0x03, 0x01, 0x00, 0x02, 0x81, 0x07, 0x02,
    0x81, 0x07, 0x02, 0xF1, 0x3F, 0x02, 0xF1, 0x3F, 0x02,
    0xF1, 0x3F, 0x02, 0xF1, 0x3F, 0x02, 0x81, 0x07, 0x02,
    0x81, 0x07, 0x02, 0x01, 0x00, 0x02, 0xFF, 0xFF, 0x03,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
];

static SHIELD: [u8; 54] = [
    0xFF, 0xFF, 0x03, 0x01, 0x03, 0x02, 0x01, 0x03, 0x02,
    0x01, 0x03, 0x02, 0x01, 0x03, 0x02, 0x01, 0x03, 0x02,
    0x01, 0x03, 0x02, 0x01, 0x03, 0x02, 0x01, 0x03, 0x02,
    0x02, 0x03, 0x01, 0x02, 0x03, 0x01, 0x04, 0x83, 0x00,
    0x04, 0x83, 0x00, 0x18, 0x60, 0x00, 0x60, 0x18, 0x00,
    0x80, 0x07, 0x00, 0x00, 0x03, 0x00, 0x00, 0x00, 0x00,
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_rejects_empty_and_unknown() {
        assert!(lookup("wolf").is_some());
        assert!(lookup("empty").is_none());
        assert!(lookup("dragon").is_none());
    }

    #[test]
    fn test_xbm_bits_land_where_packed() {
        let mut surface = Surface::new(1);
        surface.clear();
        let shield = lookup("shield").unwrap();
        draw_xbm(&mut surface, 100, 10, shield, 1.0);

        // Top row is fully lit, the next keeps only the frame and the
        // center stripe.
        for col in 0..18 {
            assert!(surface.pixel_on(100 + col, 10), "top col {col}");
        }
        assert!(surface.pixel_on(100, 11));
        assert!(!surface.pixel_on(101, 11));
        assert!(surface.pixel_on(108, 11));
        assert!(surface.pixel_on(109, 11));
        assert!(surface.pixel_on(117, 11));
        // Nothing bleeds outside the 18x18 box.
        assert!(!surface.pixel_on(99, 10));
        assert!(!surface.pixel_on(118, 10));
        assert!(!surface.pixel_on(100, 9));
    }

    #[test]
    fn test_xbm_blit_is_exact_at_scale_two() {
        let mut surface = Surface::new(2);
        surface.clear();
        let wolf = lookup("wolf").unwrap();
        draw_xbm(&mut surface, 0, 0, wolf, 1.0);

        // Ear tip from the first art row.
        assert!(surface.pixel_on(1, 0));
        assert!(!surface.pixel_on(0, 0));
        let (w, h) = surface.pixel_dimensions();
        assert_eq!((w, h), (512, 128));
    }
}
