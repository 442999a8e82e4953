//! Tagged shape geometry shared by rendering and collision
//!
//! A [`Shape`] carries only its geometry and paint; it has no position of
//! its own. The owning physics body passes its position in at draw time,
//! so the rendered geometry is always a pure function of physics state and
//! cannot drift out of sync with it.

use glam::IVec2;
use serde::{Deserialize, Serialize};

use crate::gfx::{raster, DrawTarget, PixelMode};

/// Which point of a rectangle's bounding box its origin names
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Anchor {
    TopLeft,
    BottomLeft,
    Center,
}

/// Resolve an anchored rectangle to absolute corners.
///
/// The single authority on anchor semantics: rendering and collision both
/// call this, so the two subsystems can never disagree about where a
/// rectangle actually is.
pub fn resolve_bounds(origin: IVec2, width: i32, height: i32, anchor: Anchor) -> (IVec2, IVec2) {
    match anchor {
        Anchor::TopLeft => (origin, origin + IVec2::new(width, height)),
        Anchor::BottomLeft => (
            IVec2::new(origin.x, origin.y - height),
            IVec2::new(origin.x + width, origin.y),
        ),
        Anchor::Center => (
            origin - IVec2::new(width / 2, height / 2),
            origin + IVec2::new(width / 2, height / 2),
        ),
    }
}

/// Closed set of shape geometries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ShapeKind {
    Circle { radius: i32 },
    Rect { width: i32, height: i32, anchor: Anchor },
}

/// A drawable, collidable geometric entity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Shape {
    pub kind: ShapeKind,
    pub filled: bool,
    pub paint: PixelMode,
}

impl Shape {
    pub fn circle(radius: i32, filled: bool, paint: PixelMode) -> Self {
        Self {
            kind: ShapeKind::Circle { radius },
            filled,
            paint,
        }
    }

    pub fn rect(width: i32, height: i32, anchor: Anchor, filled: bool, paint: PixelMode) -> Self {
        Self {
            kind: ShapeKind::Rect { width, height, anchor },
            filled,
            paint,
        }
    }

    /// Draw at `origin`, dispatching on the geometry variant.
    ///
    /// No drawing happens anywhere else: mutators below only store state,
    /// and nothing appears on screen until the owner asks for a draw.
    pub fn draw<T: DrawTarget<Color = PixelMode>>(&self, target: &mut T, origin: IVec2) {
        match self.kind {
            ShapeKind::Circle { radius } => {
                if self.filled {
                    raster::filled_circle(target, origin, radius, self.paint);
                } else {
                    raster::circle(target, origin, radius, self.paint);
                }
            }
            ShapeKind::Rect { width, height, anchor } => {
                let (tl, br) = resolve_bounds(origin, width, height, anchor);
                if self.filled {
                    raster::filled_rect(target, tl, br, self.paint);
                } else {
                    raster::rect(target, tl, br, self.paint);
                }
            }
        }
    }

    pub fn set_radius(&mut self, radius: i32) {
        if let ShapeKind::Circle { radius: r } = &mut self.kind {
            *r = radius;
        }
    }

    pub fn set_dimensions(&mut self, width: i32, height: i32) {
        if let ShapeKind::Rect { width: w, height: h, .. } = &mut self.kind {
            *w = width;
            *h = height;
        }
    }

    pub fn set_anchor(&mut self, anchor: Anchor) {
        if let ShapeKind::Rect { anchor: a, .. } = &mut self.kind {
            *a = anchor;
        }
    }

    pub fn set_filled(&mut self, filled: bool) {
        self.filled = filled;
    }

    pub fn set_paint(&mut self, paint: PixelMode) {
        self.paint = paint;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gfx::FrameBuffer;
    use proptest::prelude::*;

    #[test]
    fn test_resolve_bounds_top_left() {
        let (tl, br) = resolve_bounds(IVec2::new(10, 20), 6, 4, Anchor::TopLeft);
        assert_eq!(tl, IVec2::new(10, 20));
        assert_eq!(br, IVec2::new(16, 24));
    }

    #[test]
    fn test_resolve_bounds_bottom_left() {
        let (tl, br) = resolve_bounds(IVec2::new(10, 20), 6, 4, Anchor::BottomLeft);
        assert_eq!(tl, IVec2::new(10, 16));
        assert_eq!(br, IVec2::new(16, 20));
    }

    #[test]
    fn test_resolve_bounds_center() {
        let (tl, br) = resolve_bounds(IVec2::new(10, 20), 6, 4, Anchor::Center);
        assert_eq!(tl, IVec2::new(7, 18));
        assert_eq!(br, IVec2::new(13, 22));
    }

    #[test]
    fn test_mutators_store_only() {
        let mut s = Shape::rect(4, 8, Anchor::TopLeft, true, PixelMode::Set);
        s.set_dimensions(10, 2);
        s.set_anchor(Anchor::Center);
        s.set_filled(false);
        s.set_paint(PixelMode::Invert);
        assert_eq!(
            s.kind,
            ShapeKind::Rect { width: 10, height: 2, anchor: Anchor::Center }
        );
        assert!(!s.filled);
        assert_eq!(s.paint, PixelMode::Invert);

        // Kind-mismatched mutators are no-ops
        s.set_radius(99);
        assert!(matches!(s.kind, ShapeKind::Rect { .. }));
    }

    #[test]
    fn test_draw_dispatches_by_kind() {
        let mut fb = FrameBuffer::new(64, 64);
        Shape::rect(5, 3, Anchor::TopLeft, true, PixelMode::Set).draw(&mut fb, IVec2::new(1, 1));
        assert_eq!(fb.lit_pixels(), 6 * 4);
        fb.clear();
        Shape::circle(0, true, PixelMode::Set).draw(&mut fb, IVec2::new(30, 30));
        assert_eq!(fb.lit_pixels(), 1);
    }

    #[test]
    fn test_offscreen_draw_is_silent() {
        let mut fb = FrameBuffer::new(64, 64);
        let ball = Shape::circle(3, true, PixelMode::Set);
        ball.draw(&mut fb, IVec2::new(-50, -50));
        assert_eq!(fb.lit_pixels(), 0);
        // Partly off-screen still draws the visible part
        ball.draw(&mut fb, IVec2::new(0, 32));
        assert!(fb.lit_pixels() > 0);
    }

    proptest! {
        #[test]
        fn prop_center_anchor_is_symmetric(
            ox in -50i32..200, oy in -50i32..200, w in 0i32..60, h in 0i32..60,
        ) {
            let origin = IVec2::new(ox, oy);
            let (tl, br) = resolve_bounds(origin, w, h, Anchor::Center);
            prop_assert_eq!(tl, origin - IVec2::new(w / 2, h / 2));
            prop_assert_eq!(br, origin + IVec2::new(w / 2, h / 2));
        }

        #[test]
        fn prop_bounds_are_ordered(
            ox in -50i32..200, oy in -50i32..200, w in 0i32..60, h in 0i32..60,
            anchor in prop_oneof![
                Just(Anchor::TopLeft), Just(Anchor::BottomLeft), Just(Anchor::Center),
            ],
        ) {
            let (tl, br) = resolve_bounds(IVec2::new(ox, oy), w, h, anchor);
            prop_assert!(tl.x <= br.x);
            prop_assert!(tl.y <= br.y);
        }
    }
}
