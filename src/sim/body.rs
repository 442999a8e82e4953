//! Bodies tie a drawable shape to a position, a velocity, and a
//! collision response. Everything the game moves or bounces off is one
//! of these.

use glam::IVec2;

use crate::gfx::DrawTarget;
use crate::gfx::framebuffer::PixelMode;
use crate::shape::Shape;

/// What a body does when something touches it.
///
/// Scoring and game-over decisions live in the state machine, not here.
/// A body only knows whether contact should deflect it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Response {
    /// Contact is reported but the body keeps its velocity.
    Ignore,
    /// Contact reflects the body's velocity away from the other body.
    Bounce,
}

/// A positioned shape with integer-pixel motion.
#[derive(Debug, Clone)]
pub struct Body {
    pub pos: IVec2,
    /// Position before the most recent move, kept for diagnostics and
    /// motion-history consumers. Collision response reads only current
    /// positions.
    pub prev_pos: IVec2,
    pub vel: IVec2,
    /// Reserved for velocity integration. `update` does not apply it
    /// yet; paddle smoothing uses [`approach`] instead.
    pub accel: IVec2,
    pub shape: Shape,
    pub collision_enabled: bool,
    pub response: Response,
}

impl Body {
    pub fn new(pos: IVec2, vel: IVec2, shape: Shape, response: Response) -> Self {
        Self {
            pos,
            prev_pos: pos,
            vel,
            accel: IVec2::ZERO,
            shape,
            collision_enabled: true,
            response,
        }
    }

    /// A body that never moves and never reacts to contact, but can
    /// still be hit. Walls and paddles start from this.
    pub fn fixed(pos: IVec2, shape: Shape) -> Self {
        Self::new(pos, IVec2::ZERO, shape, Response::Ignore)
    }

    /// Advance one tick: integrate velocity into position.
    pub fn update(&mut self) {
        let v = self.vel;
        self.move_by(v);
    }

    /// Displace the body, remembering where it came from.
    pub fn move_by(&mut self, delta: IVec2) {
        self.prev_pos = self.pos;
        self.pos += delta;
    }

    /// Teleport without recording a previous position. Used when
    /// resetting the playfield, where "where it came from" is
    /// meaningless.
    pub fn place(&mut self, pos: IVec2) {
        self.pos = pos;
        self.prev_pos = pos;
    }

    pub fn draw<T: DrawTarget<Color = PixelMode>>(&self, target: &mut T) {
        self.shape.draw(target, self.pos);
    }
}

/// Rate-limited pursuit of a target value. Moves `current` toward
/// `target` by at most `step` per call and never overshoots.
pub fn approach(current: i32, target: i32, step: i32) -> i32 {
    if current < target {
        (current + step).min(target)
    } else if current > target {
        (current - step).max(target)
    } else {
        current
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gfx::framebuffer::FrameBuffer;
    use crate::shape::Anchor;

    fn disc(pos: IVec2) -> Body {
        Body::new(
            pos,
            IVec2::new(1, -2),
            Shape::circle(3, true, PixelMode::Set),
            Response::Bounce,
        )
    }

    #[test]
    fn update_integrates_velocity_and_records_prev() {
        let mut b = disc(IVec2::new(10, 20));
        b.update();
        assert_eq!(b.pos, IVec2::new(11, 18));
        assert_eq!(b.prev_pos, IVec2::new(10, 20));
        b.update();
        assert_eq!(b.pos, IVec2::new(12, 16));
        assert_eq!(b.prev_pos, IVec2::new(11, 18));
    }

    #[test]
    fn place_resets_history() {
        let mut b = disc(IVec2::new(10, 20));
        b.update();
        b.place(IVec2::new(64, 32));
        assert_eq!(b.pos, IVec2::new(64, 32));
        assert_eq!(b.prev_pos, IVec2::new(64, 32));
    }

    #[test]
    fn fixed_bodies_sit_still() {
        let mut b = Body::fixed(
            IVec2::new(0, 0),
            Shape::rect(128, 2, Anchor::TopLeft, true, PixelMode::Set),
        );
        b.update();
        assert_eq!(b.pos, IVec2::ZERO);
        assert_eq!(b.response, Response::Ignore);
        assert!(b.collision_enabled);
    }

    #[test]
    fn draw_paints_at_body_position() {
        let mut fb = FrameBuffer::new(32, 32);
        let b = disc(IVec2::new(16, 16));
        b.draw(&mut fb);
        assert!(fb.pixel(IVec2::new(16, 16)));
        assert!(fb.lit_pixels() > 0);
    }

    #[test]
    fn approach_steps_toward_target() {
        assert_eq!(approach(0, 8, 3), 3);
        assert_eq!(approach(3, 8, 3), 6);
        assert_eq!(approach(6, 8, 3), 8);
        assert_eq!(approach(8, 8, 3), 8);
    }

    #[test]
    fn approach_handles_negative_targets() {
        assert_eq!(approach(0, -8, 3), -3);
        assert_eq!(approach(-6, -8, 3), -8);
        assert_eq!(approach(-8, 0, 3), -5);
    }

    #[test]
    fn approach_never_overshoots() {
        let mut v = 0;
        for _ in 0..100 {
            v = approach(v, 7, 2);
            assert!(v <= 7);
        }
        assert_eq!(v, 7);
    }
}
