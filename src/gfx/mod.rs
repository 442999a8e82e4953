//! Integer-only 2D rasterization
//!
//! `raster` draws into anything implementing [`DrawTarget`]: the owned
//! monochrome [`FrameBuffer`] or the bufferless streamed color path in
//! `crate::display`. All algorithms use integer arithmetic exclusively.

pub mod framebuffer;
pub mod raster;

pub use framebuffer::{FrameBuffer, PixelMode};

use glam::IVec2;

/// A pixel sink the rasterizer can draw into.
///
/// `Color` is whatever a single pixel write carries: a [`PixelMode`] for the
/// monochrome buffer, an RGB565 value for the streamed color path.
/// Implementations must treat out-of-bounds writes as silent no-ops so
/// shapes partly off-screen render without error.
pub trait DrawTarget {
    type Color: Copy;

    /// Target dimensions in pixels (width, height)
    fn size(&self) -> IVec2;

    /// Write one pixel. Out-of-bounds coordinates are ignored.
    fn set_pixel(&mut self, p: IVec2, color: Self::Color);
}
