//! Page-addressed monochrome framebuffer
//!
//! Display memory for 1-bit panels is organized as 8-pixel-tall byte rows
//! ("pages"): `ceil(height/8)` pages of `width` bytes, bit `n` of a byte
//! being the pixel at row `page*8 + n`. The buffer is sized once at
//! construction and never reallocated.

use glam::IVec2;
use serde::{Deserialize, Serialize};

use super::DrawTarget;
use crate::display::MonoDisplay;

/// What a pixel write does to the stored bit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PixelMode {
    /// Turn the pixel on
    Set,
    /// Turn the pixel off
    Clear,
    /// Toggle the pixel
    Invert,
}

/// Owned 1-bit pixel store
#[derive(Debug, Clone)]
pub struct FrameBuffer {
    width: i32,
    height: i32,
    data: Vec<u8>,
}

impl FrameBuffer {
    pub fn new(width: i32, height: i32) -> Self {
        let width = width.max(0);
        let height = height.max(0);
        let pages = (height as usize).div_ceil(8);
        Self {
            width,
            height,
            data: vec![0; width as usize * pages],
        }
    }

    #[inline]
    pub fn width(&self) -> i32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> i32 {
        self.height
    }

    /// Number of 8-row pages
    #[inline]
    pub fn pages(&self) -> usize {
        (self.height as usize).div_ceil(8)
    }

    #[inline]
    fn index(&self, p: IVec2) -> usize {
        p.x as usize + (p.y as usize / 8) * self.width as usize
    }

    #[inline]
    fn in_bounds(&self, p: IVec2) -> bool {
        p.x >= 0 && p.x < self.width && p.y >= 0 && p.y < self.height
    }

    /// Read a pixel. Out of bounds reads as "off".
    pub fn pixel(&self, p: IVec2) -> bool {
        self.in_bounds(p) && self.data[self.index(p)] & (1 << (p.y & 7)) != 0
    }

    /// Set all pixels to off
    pub fn clear(&mut self) {
        self.data.fill(0);
    }

    /// Count of lit pixels (diagnostics and tests)
    pub fn lit_pixels(&self) -> usize {
        self.data.iter().map(|b| b.count_ones() as usize).sum()
    }

    /// One page worth of bytes, `width` long
    pub fn page(&self, page: usize) -> &[u8] {
        let w = self.width as usize;
        &self.data[page * w..(page + 1) * w]
    }

    /// Stream the buffer to a display, one page at a time
    pub fn flush<D: MonoDisplay>(&self, display: &mut D) {
        for page in 0..self.pages() {
            display.write_page(page as u8, self.page(page));
        }
    }
}

impl DrawTarget for FrameBuffer {
    type Color = PixelMode;

    fn size(&self) -> IVec2 {
        IVec2::new(self.width, self.height)
    }

    fn set_pixel(&mut self, p: IVec2, color: PixelMode) {
        if !self.in_bounds(p) {
            return;
        }
        let bit = 1u8 << (p.y & 7);
        let idx = self.index(p);
        match color {
            PixelMode::Set => self.data[idx] |= bit,
            PixelMode::Clear => self.data[idx] &= !bit,
            PixelMode::Invert => self.data[idx] ^= bit,
        }
    }
}
