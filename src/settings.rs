//! Gameplay tuning knobs.
//!
//! Every number the simulation cares about lives here with a default
//! matching the crate-level constants, so a build can override the feel
//! of the game from a JSON blob without recompiling.

use serde::{Deserialize, Serialize};

use crate::consts;

/// Tunable gameplay parameters.
///
/// Unknown fields in a config are rejected by serde; missing fields
/// fall back to the defaults below.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Tuning {
    /// Playfield width in pixels.
    pub screen_width: i32,
    /// Playfield height in pixels.
    pub screen_height: i32,
    /// Thickness of the boundary walls.
    pub wall_thickness: i32,
    /// Long dimension of each paddle.
    pub paddle_length: i32,
    /// Short dimension of each paddle.
    pub paddle_width: i32,
    /// Gap between a wall and the paddle running along it.
    pub paddle_margin: i32,
    pub ball_radius: i32,
    /// Raw axis counts around center treated as no input.
    pub axis_deadzone: i32,
    /// Paddle speed cap in pixels per tick, before boost.
    pub max_paddle_speed: i32,
    /// Speed multiplier while the boost button is held.
    pub boost_multiplier: i32,
    /// Per-tick step for paddle velocity smoothing.
    pub accel_step: i32,
    /// Axis deflection breakpoints for the speed curve.
    pub deflection_low: i32,
    pub deflection_mid: i32,
    /// Paddle speeds for the three deflection bands.
    pub speed_low: i32,
    pub speed_mid: i32,
    pub speed_high: i32,
    /// Ticks a paddle stays unscoreable after a hit.
    pub cooldown_ticks: u8,
    /// Ticks the resume countdown runs for.
    pub countdown_ticks: u8,
    /// Ticks the display stays inverted after game over.
    pub flash_ticks: u8,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            screen_width: consts::SCREEN_WIDTH,
            screen_height: consts::SCREEN_HEIGHT,
            wall_thickness: consts::WALL_THICKNESS,
            paddle_length: consts::PADDLE_LENGTH,
            paddle_width: consts::PADDLE_WIDTH,
            paddle_margin: consts::PADDLE_MARGIN,
            ball_radius: consts::BALL_RADIUS,
            axis_deadzone: consts::AXIS_DEADZONE,
            max_paddle_speed: consts::MAX_PADDLE_SPEED,
            boost_multiplier: consts::BOOST_MULTIPLIER,
            accel_step: consts::PADDLE_ACCEL_STEP,
            deflection_low: consts::DEFLECTION_LOW,
            deflection_mid: consts::DEFLECTION_MID,
            speed_low: consts::SPEED_LOW,
            speed_mid: consts::SPEED_MID,
            speed_high: consts::SPEED_HIGH,
            cooldown_ticks: consts::PADDLE_COOLDOWN_TICKS,
            countdown_ticks: consts::COUNTDOWN_TICKS,
            flash_ticks: consts::GAME_OVER_FLASH_TICKS,
        }
    }
}

impl Tuning {
    /// Parse a tuning override from JSON. Absent fields keep their
    /// defaults.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
