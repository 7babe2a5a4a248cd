//! Monochrome surface and the terminal screen renderer.
//!
//! Emulates the handheld terminal's 256x64 amber OLED: same layout
//! constants, same two faces, same draw rules. One `render` call
//! clears and fully redraws from the current descriptor, so no
//! incremental damage tracking can desync from the state.

pub mod font;
pub mod glyph;
pub mod icons;

mod font_data;

use protocol::display::{DisplayDescriptor, DisplayStyle, IconState};

use font::{FONT_LARGE, FONT_SMALL};

pub const WIDTH: i32 = 256;
pub const HEIGHT: i32 = 64;

/// Period of the `waiting` style pulse.
pub const WAITING_PERIOD_MS: u64 = 2000;

// Layout of the physical panel.
const LINE1_Y: i32 = 12;
const LINE2_Y: i32 = 42;
const LINE3_Y: i32 = 60;
const MARGIN_X: i32 = 4;
const TEXT_AREA_W: i32 = 234;
const ICON_COL_X: i32 = 236;
const ICON_Y: [i32; 3] = [1, 23, 45];
const SLOT_Y: [i32; 3] = [0, 22, 44];
const SLOT_H: i32 = 20;
const BAR_X: i32 = 254;
const BAR_W: i32 = 2;

/// Draw level for item icons that are present but not usable.
const ICON_DIM: f64 = 0.3;

/// The panel's single color at full level.
const AMBER: (u8, u8, u8) = (255, 176, 0);

/// RGBA8 pixel buffer drawing every logical pixel as a
/// `scale x scale` block.
pub struct Surface {
    scale: u32,
    pixels: Vec<u8>,
}

impl Surface {
    pub fn new(scale: u32) -> Self {
        let scale = scale.max(1);
        let len = (WIDTH as usize * scale as usize) * (HEIGHT as usize * scale as usize) * 4;
        let mut surface = Self {
            scale,
            pixels: vec![0; len],
        };
        surface.clear();
        surface
    }

    pub fn scale(&self) -> u32 {
        self.scale
    }

    /// Buffer dimensions in physical pixels.
    pub fn pixel_dimensions(&self) -> (u32, u32) {
        (WIDTH as u32 * self.scale, HEIGHT as u32 * self.scale)
    }

    /// Raw RGBA bytes, row major.
    pub fn data(&self) -> &[u8] {
        &self.pixels
    }

    pub fn clear(&mut self) {
        for pixel in self.pixels.chunks_exact_mut(4) {
            pixel.copy_from_slice(&[0, 0, 0, 255]);
        }
    }

    /// Writes one logical pixel at the given level of amber. Points
    /// outside the panel are clipped.
    pub fn set_pixel(&mut self, x: i32, y: i32, level: f64) {
        if x < 0 || y < 0 || x >= WIDTH || y >= HEIGHT {
            return;
        }
        let level = level.clamp(0.0, 1.0);
        let rgba = [
            (AMBER.0 as f64 * level) as u8,
            (AMBER.1 as f64 * level) as u8,
            (AMBER.2 as f64 * level) as u8,
            255,
        ];
        let scale = self.scale as usize;
        let row_px = WIDTH as usize * scale;
        for dy in 0..scale {
            let base = ((y as usize * scale + dy) * row_px + x as usize * scale) * 4;
            for dx in 0..scale {
                self.pixels[base + dx * 4..base + dx * 4 + 4].copy_from_slice(&rgba);
            }
        }
    }

    pub fn fill_rect(&mut self, x: i32, y: i32, w: i32, h: i32, level: f64) {
        for yy in y..y + h {
            for xx in x..x + w {
                self.set_pixel(xx, yy, level);
            }
        }
    }

    pub fn frame_rect(&mut self, x: i32, y: i32, w: i32, h: i32, level: f64) {
        if w <= 0 || h <= 0 {
            return;
        }
        for xx in x..x + w {
            self.set_pixel(xx, y, level);
            self.set_pixel(xx, y + h - 1, level);
        }
        for yy in y..y + h {
            self.set_pixel(x, yy, level);
            self.set_pixel(x + w - 1, yy, level);
        }
    }

    /// Level of a logical pixel as 0..1, read back from its top left
    /// sample's red channel.
    pub fn level_at(&self, x: i32, y: i32) -> f64 {
        if x < 0 || y < 0 || x >= WIDTH || y >= HEIGHT {
            return 0.0;
        }
        let scale = self.scale as usize;
        let row_px = WIDTH as usize * scale;
        let base = (y as usize * scale * row_px + x as usize * scale) * 4;
        self.pixels[base] as f64 / 255.0
    }

    pub fn pixel_on(&self, x: i32, y: i32) -> bool {
        self.level_at(x, y) > 0.0
    }
}

/// True when the descriptor needs wall-clock frames. Only the
/// `waiting` pulse does; everything else renders once per change.
pub fn needs_animation(descriptor: &DisplayDescriptor) -> bool {
    descriptor.line2.style == DisplayStyle::Waiting
}

/// Brightness curve of the hardware pulse, level in [0.2, 1.0].
pub fn waiting_pulse(elapsed_ms: u64) -> f64 {
    let phase = (elapsed_ms % WAITING_PERIOD_MS) as f64 / WAITING_PERIOD_MS as f64;
    0.2 + 0.8 * (0.5 + 0.5 * (std::f64::consts::TAU * phase).sin())
}

pub struct Renderer {
    surface: Surface,
}

impl Renderer {
    pub fn new(scale: u32) -> Self {
        Self {
            surface: Surface::new(scale),
        }
    }

    pub fn surface(&self) -> &Surface {
        &self.surface
    }

    /// Clears and fully redraws. `None` shows the connecting screen.
    /// `elapsed_ms` only matters while the style pulses.
    pub fn render(&mut self, descriptor: Option<&DisplayDescriptor>, elapsed_ms: u64) {
        self.surface.clear();
        let connecting = DisplayDescriptor::connecting();
        let descriptor = descriptor.unwrap_or(&connecting);
        draw_line1(&mut self.surface, descriptor);
        draw_line2(&mut self.surface, descriptor, elapsed_ms);
        draw_line3(&mut self.surface, descriptor);
        draw_icons(&mut self.surface, descriptor);
    }
}

fn draw_line1(surface: &mut Surface, d: &DisplayDescriptor) {
    let left = glyph::tokenize(&d.line1.left);
    glyph::draw_line(surface, &FONT_SMALL, MARGIN_X, LINE1_Y, &left, 1.0);

    let right = glyph::tokenize(&d.line1.right);
    let width = glyph::line_width(&FONT_SMALL, &right);
    if width > 0 {
        let x = TEXT_AREA_W - MARGIN_X - width;
        glyph::draw_line(surface, &FONT_SMALL, x, LINE1_Y, &right, 1.0);
    }
}

fn draw_line2(surface: &mut Surface, d: &DisplayDescriptor, elapsed_ms: u64) {
    let segments = glyph::tokenize(&d.line2.text);
    let width = glyph::line_width(&FONT_LARGE, &segments);
    let x = (TEXT_AREA_W - width) / 2;
    let level = match d.line2.style {
        DisplayStyle::Normal | DisplayStyle::Locked => 1.0,
        DisplayStyle::Abstained => 0.5,
        DisplayStyle::Waiting => waiting_pulse(elapsed_ms),
    };
    glyph::draw_line(surface, &FONT_LARGE, x, LINE2_Y, &segments, level);
    if d.line2.style == DisplayStyle::Locked {
        surface.frame_rect(x - 4, LINE2_Y - 18, width + 8, 22, 1.0);
    }
}

fn draw_line3(surface: &mut Surface, d: &DisplayDescriptor) {
    if d.line3.is_split() {
        let left = glyph::tokenize(&d.line3.left);
        glyph::draw_line(surface, &FONT_SMALL, MARGIN_X, LINE3_Y, &left, 1.0);

        let center = glyph::tokenize(&d.line3.center);
        let width = glyph::line_width(&FONT_SMALL, &center);
        if width > 0 {
            let x = (TEXT_AREA_W - width) / 2;
            glyph::draw_line(surface, &FONT_SMALL, x, LINE3_Y, &center, 1.0);
        }

        let right = glyph::tokenize(&d.line3.right);
        let width = glyph::line_width(&FONT_SMALL, &right);
        if width > 0 {
            let x = TEXT_AREA_W - MARGIN_X - width;
            glyph::draw_line(surface, &FONT_SMALL, x, LINE3_Y, &right, 1.0);
        }
    } else {
        let segments = glyph::tokenize(&d.line3.text);
        let width = glyph::line_width(&FONT_SMALL, &segments);
        let x = (TEXT_AREA_W - width) / 2;
        glyph::draw_line(surface, &FONT_SMALL, x, LINE3_Y, &segments, 1.0);
    }
}

fn draw_icons(surface: &mut Surface, d: &DisplayDescriptor) {
    for (slot, icon) in d.icons.iter().enumerate() {
        let Some(bitmap) = icons::lookup(&icon.id) else {
            continue;
        };
        let level = match icon.state {
            IconState::Active => 1.0,
            IconState::Inactive | IconState::Empty => ICON_DIM,
        };
        icons::draw_xbm(surface, ICON_COL_X, ICON_Y[slot], bitmap, level);
    }

    // The hardware only shows the cursor once there is something to
    // scroll between.
    if d.visible_icons() >= 2 {
        let slot = (d.idle_scroll_index as usize).min(SLOT_Y.len() - 1);
        surface.fill_rect(BAR_X, SLOT_Y[slot], BAR_W, SLOT_H, 1.0);
    }
}
