//! Display collaborator boundaries
//!
//! The core never touches SPI, registers, or panel init sequences. Two
//! panel families are abstracted:
//!
//! - [`MonoDisplay`]: page-addressed 1-bit panels. The framebuffer streams
//!   its pages through `write_page`; full-screen inversion is a hardware
//!   command, not a buffer rewrite.
//! - [`ColorDisplay`]: 16-bit-per-pixel panels written through address
//!   windows with no local buffer. [`ColorCanvas`] adapts one into a
//!   [`DrawTarget`], bounds-checking every write since there is no
//!   off-screen memory to absorb a bad address.

use glam::IVec2;

use crate::gfx::DrawTarget;

/// Page-addressed monochrome panel
pub trait MonoDisplay {
    /// Write one 8-row page of `width` bytes
    fn write_page(&mut self, page: u8, row: &[u8]);

    /// Hardware-level full-screen invert
    fn set_invert(&mut self, on: bool);
}

/// An RGB565 pixel value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb565(pub u16);

impl Rgb565 {
    /// Pack 8-bit channels into 5-6-5
    pub fn new(r: u8, g: u8, b: u8) -> Self {
        Self(((r as u16 & 0xf8) << 8) | ((g as u16 & 0xfc) << 3) | (b as u16 >> 3))
    }

    /// Equal-channel gray
    pub fn gray(v: u8) -> Self {
        Self::new(v, v, v)
    }

    /// Wire representation, high byte first
    pub fn to_be_bytes(self) -> [u8; 2] {
        self.0.to_be_bytes()
    }
}

/// Streamed color panel addressed through windows
pub trait ColorDisplay {
    /// Restrict subsequent pixel writes to a `w` x `h` window at `(x, y)`
    fn set_address_window(&mut self, x: u16, y: u16, w: u16, h: u16);

    /// Stream pixels into the current window, row-major
    fn stream_pixels(&mut self, pixels: &[Rgb565]);
}

/// Adapter that lets the rasterizer draw straight onto a [`ColorDisplay`]
pub struct ColorCanvas<'a, D: ColorDisplay> {
    display: &'a mut D,
    width: i32,
    height: i32,
}

impl<'a, D: ColorDisplay> ColorCanvas<'a, D> {
    pub fn new(display: &'a mut D, width: i32, height: i32) -> Self {
        Self { display, width, height }
    }

    /// Horizontal span through a single address window, clamped to bounds
    pub fn hline(&mut self, start: IVec2, width: i32, color: Rgb565) {
        let (mut x, y) = (start.x, start.y);
        let mut w = width;
        if y < 0 || y >= self.height {
            return;
        }
        if x < 0 {
            w += x;
            x = 0;
        }
        if x + w > self.width {
            w = self.width - x;
        }
        if w <= 0 {
            return;
        }
        self.display.set_address_window(x as u16, y as u16, w as u16, 1);
        let span = vec![color; w as usize];
        self.display.stream_pixels(&span);
    }

    /// Flood the whole panel with one color
    pub fn fill(&mut self, color: Rgb565) {
        self.display
            .set_address_window(0, 0, self.width as u16, self.height as u16);
        let row = vec![color; self.width as usize];
        for _ in 0..self.height {
            self.display.stream_pixels(&row);
        }
    }

    /// Filled circle using horizontal spans (one window per span beats one
    /// window per pixel on a streamed panel)
    pub fn filled_circle(&mut self, center: IVec2, radius: i32, color: Rgb565) {
        if radius <= 0 {
            self.set_pixel(center, color);
            return;
        }
        let (cx, cy) = (center.x, center.y);
        let mut decision = 1 - radius;
        let mut ddx = 1;
        let mut ddy = -2 * radius;
        let mut x = 0;
        let mut y = radius;

        self.hline(IVec2::new(cx - radius, cy), 2 * radius + 1, color);
        while x < y {
            if decision >= 0 {
                y -= 1;
                ddy += 2;
                decision += ddy;
            }
            x += 1;
            ddx += 2;
            decision += ddx;

            self.hline(IVec2::new(cx - x, cy + y), 2 * x + 1, color);
            self.hline(IVec2::new(cx - x, cy - y), 2 * x + 1, color);
            self.hline(IVec2::new(cx - y, cy + x), 2 * y + 1, color);
            self.hline(IVec2::new(cx - y, cy - x), 2 * y + 1, color);
        }
    }
}

impl<D: ColorDisplay> DrawTarget for ColorCanvas<'_, D> {
    type Color = Rgb565;

    fn size(&self) -> IVec2 {
        IVec2::new(self.width, self.height)
    }

    fn set_pixel(&mut self, p: IVec2, color: Rgb565) {
        if p.x < 0 || p.x >= self.width || p.y < 0 || p.y >= self.height {
            return;
        }
        self.display.set_address_window(p.x as u16, p.y as u16, 1, 1);
        self.display.stream_pixels(&[color]);
    }
}
