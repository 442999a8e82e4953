//! Paddle Panic - a four-paddle bouncing-ball arcade game
//!
//! Core modules:
//! - `gfx`: Integer-only rasterizer and page-addressed framebuffer
//! - `shape`: Tagged shape geometry shared by rendering and collision
//! - `sim`: Deterministic simulation (physics, collisions, game state)
//! - `display` / `input`: Collaborator trait boundaries (panel, controls)
//! - `settings`: Data-driven game tuning

pub mod display;
pub mod gfx;
pub mod input;
pub mod settings;
pub mod shape;
pub mod sim;

pub use settings::Tuning;

use glam::IVec2;

/// Game configuration constants
pub mod consts {
    /// Play field dimensions (pixels)
    pub const SCREEN_WIDTH: i32 = 128;
    pub const SCREEN_HEIGHT: i32 = 64;

    /// Arena layout
    pub const WALL_THICKNESS: i32 = 2;
    pub const PADDLE_LENGTH: i32 = 20;
    pub const PADDLE_WIDTH: i32 = 2;
    pub const PADDLE_MARGIN: i32 = 3;
    pub const BALL_RADIUS: i32 = 3;

    /// Raw axis range around center treated as zero (out of 4095)
    pub const AXIS_DEADZONE: i32 = 10;

    /// Paddle speed limits (pixels per tick)
    pub const MAX_PADDLE_SPEED: i32 = 8;
    /// Target-velocity multiplier while the boost button is held
    pub const BOOST_MULTIPLIER: i32 = 2;
    /// Per-tick velocity step of the paddle rate limiter
    pub const PADDLE_ACCEL_STEP: i32 = 1;

    /// Velocity curve breakpoints (normalized axis, 0..2048)
    pub const DEFLECTION_LOW: i32 = 512;
    pub const DEFLECTION_MID: i32 = 1536;
    /// Speeds at the curve breakpoints (pixels per tick)
    pub const SPEED_LOW: i32 = 2;
    pub const SPEED_MID: i32 = 4;
    pub const SPEED_HIGH: i32 = 8;

    /// Ticks a paddle cannot score again after a contact
    pub const PADDLE_COOLDOWN_TICKS: u8 = 8;
    /// Pause-resume countdown length (3 seconds at ~12 ticks/s)
    pub const COUNTDOWN_TICKS: u8 = 36;
    /// Hardware-invert flash window after a lost ball
    pub const GAME_OVER_FLASH_TICKS: u8 = 6;
}

/// Squared distance between two points, widened to 64 bits.
///
/// Collision math squares screen-scale coordinates; on a 240-wide field the
/// products already overflow 16-bit accumulators, so every squared term goes
/// through i64.
#[inline]
pub fn dist_squared(a: IVec2, b: IVec2) -> i64 {
    let dx = (a.x - b.x) as i64;
    let dy = (a.y - b.y) as i64;
    dx * dx + dy * dy
}
