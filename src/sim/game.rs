//! Game state machine and per-tick orchestration.
//!
//! One `Game` owns the playfield: four boundary walls, four paddles
//! sliding along them, and the ball. `tick` consumes one input
//! snapshot, `draw` paints the current state into a framebuffer.

use glam::IVec2;
use serde::{Deserialize, Serialize};

use crate::gfx::framebuffer::{FrameBuffer, PixelMode};
use crate::gfx::raster::{self, CORNER_NE, CORNER_NW, CORNER_SE, CORNER_SW};
use crate::input::{TickInput, AXIS_CENTER};
use crate::settings::Tuning;
use crate::shape::{Anchor, Shape};
use crate::sim::body::{approach, Body, Response};
use crate::sim::collision;

/// Ball launch directions, picked by the low axis bits at launch so the
/// stick position seeds the opening angle.
const LAUNCH_DIRECTIONS: [(i32, i32); 8] = [
    (2, 1),
    (1, 2),
    (-1, 2),
    (-2, 1),
    (-2, -1),
    (-1, -2),
    (1, -2),
    (2, -1),
];

/// 16x8 "PP" title glyph, MSB-first rows.
const TITLE_GLYPH: [u8; 16] = [
    0x78, 0x78, 0x44, 0x44, 0x44, 0x44, 0x78, 0x78, 0x40, 0x40, 0x40, 0x40,
    0x40, 0x40, 0x00, 0x00,
];
const TITLE_GLYPH_W: i32 = 16;
const TITLE_GLYPH_H: i32 = 8;

/// Top-level machine states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    Title,
    BallAtRest,
    BallMoving,
    Paused,
    Countdown,
    GameOver,
}

/// Paddle travel limits along each wall.
#[derive(Debug, Clone, Copy)]
struct PaddleBounds {
    h_min_x: i32,
    h_max_x: i32,
    v_min_y: i32,
    v_max_y: i32,
}

/// The whole simulation.
#[derive(Debug, Clone)]
pub struct Game {
    pub phase: Phase,
    /// Top, bottom, left, right.
    pub walls: [Body; 4],
    /// Top, bottom, left, right. Paddles 0 and 1 slide horizontally,
    /// 2 and 3 vertically.
    pub paddles: [Body; 4],
    pub ball: Body,
    pub score: u16,
    /// Score at the moment the ball was lost.
    pub final_score: u16,
    /// Per-paddle ticks remaining before it can score again.
    cooldowns: [u8; 4],
    /// Smoothed paddle speeds. `x` drives the horizontal pair, `y` the
    /// vertical pair.
    paddle_vel: IVec2,
    /// Ball velocity stashed while paused.
    saved_ball_vel: IVec2,
    countdown: u8,
    flash_ticks: u8,
    prev_button: bool,
    tuning: Tuning,
    bounds: PaddleBounds,
}

impl Game {
    pub fn new(tuning: Tuning) -> Self {
        let w = tuning.screen_width;
        let h = tuning.screen_height;
        let wall = tuning.wall_thickness;
        let plen = tuning.paddle_length;
        let pw = tuning.paddle_width;
        let margin = tuning.paddle_margin;

        let wall_shape_h = Shape::rect(w, wall, Anchor::TopLeft, true, PixelMode::Set);
        let wall_shape_v = Shape::rect(wall, h, Anchor::TopLeft, true, PixelMode::Set);
        let walls = [
            Body::fixed(IVec2::new(0, 0), wall_shape_h),
            Body::fixed(IVec2::new(0, h - wall), wall_shape_h),
            Body::fixed(IVec2::new(0, 0), wall_shape_v),
            Body::fixed(IVec2::new(w - wall, 0), wall_shape_v),
        ];

        let h_shape = Shape::rect(plen, pw, Anchor::TopLeft, true, PixelMode::Set);
        let v_shape = Shape::rect(pw, plen, Anchor::TopLeft, true, PixelMode::Set);
        let mid_x = (w - plen) / 2;
        let mid_y = (h - plen) / 2;
        let paddles = [
            Body::fixed(IVec2::new(mid_x, wall + margin), h_shape),
            Body::fixed(IVec2::new(mid_x, h - wall - margin - pw), h_shape),
            Body::fixed(IVec2::new(wall + margin, mid_y), v_shape),
            Body::fixed(IVec2::new(w - wall - margin - pw, mid_y), v_shape),
        ];

        let ball = Body::new(
            IVec2::new(w / 2, h / 2),
            IVec2::ZERO,
            Shape::circle(tuning.ball_radius, true, PixelMode::Set),
            Response::Bounce,
        );

        let bounds = PaddleBounds {
            h_min_x: wall,
            h_max_x: w - wall - plen,
            v_min_y: wall,
            v_max_y: h - wall - plen,
        };

        Self {
            phase: Phase::Title,
            walls,
            paddles,
            ball,
            score: 0,
            final_score: 0,
            cooldowns: [0; 4],
            paddle_vel: IVec2::ZERO,
            saved_ball_vel: IVec2::ZERO,
            countdown: 0,
            flash_ticks: 0,
            prev_button: false,
            tuning,
            bounds,
        }
    }

    /// Whether the panel should be hardware-inverted this tick.
    pub fn flash(&self) -> bool {
        self.flash_ticks > 0
    }

    /// Advance one fixed-timestep tick.
    pub fn tick(&mut self, input: &TickInput) {
        let pressed = input.button && !self.prev_button;
        self.prev_button = input.button;

        for c in &mut self.cooldowns {
            *c = c.saturating_sub(1);
        }
        self.flash_ticks = self.flash_ticks.saturating_sub(1);

        match self.phase {
            Phase::Title => {
                if pressed {
                    self.reset_playfield();
                    self.set_phase(Phase::BallAtRest);
                }
            }
            Phase::BallAtRest => {
                self.drive_paddles(input);
                if pressed {
                    let (dx, dy) = LAUNCH_DIRECTIONS[(input.axis_x & 0x7) as usize];
                    self.ball.vel = IVec2::new(dx, dy);
                    log::info!("launch {}", self.ball.vel);
                    self.set_phase(Phase::BallMoving);
                }
            }
            Phase::BallMoving => {
                if pressed {
                    self.saved_ball_vel = self.ball.vel;
                    self.ball.vel = IVec2::ZERO;
                    self.set_phase(Phase::Paused);
                    return;
                }
                self.drive_paddles(input);
                self.ball.update();
                self.run_collisions();
            }
            Phase::Paused => {
                if pressed {
                    self.countdown = self.tuning.countdown_ticks;
                    self.set_phase(Phase::Countdown);
                }
            }
            Phase::Countdown => {
                self.countdown = self.countdown.saturating_sub(1);
                if self.countdown == 0 {
                    self.ball.vel = self.saved_ball_vel;
                    self.set_phase(Phase::BallMoving);
                }
            }
            Phase::GameOver => {
                if pressed {
                    self.set_phase(Phase::Title);
                }
            }
        }
    }

    fn set_phase(&mut self, next: Phase) {
        log::info!("{:?} -> {:?}", self.phase, next);
        self.phase = next;
    }

    /// Recenter everything for a fresh game.
    fn reset_playfield(&mut self) {
        self.score = 0;
        self.cooldowns = [0; 4];
        self.paddle_vel = IVec2::ZERO;
        let center = IVec2::new(
            self.tuning.screen_width / 2,
            self.tuning.screen_height / 2,
        );
        self.ball.place(center);
        self.ball.vel = IVec2::ZERO;

        let mid_x = (self.tuning.screen_width - self.tuning.paddle_length) / 2;
        let mid_y = (self.tuning.screen_height - self.tuning.paddle_length) / 2;
        self.paddles[0].place(IVec2::new(mid_x, self.paddles[0].pos.y));
        self.paddles[1].place(IVec2::new(mid_x, self.paddles[1].pos.y));
        self.paddles[2].place(IVec2::new(self.paddles[2].pos.x, mid_y));
        self.paddles[3].place(IVec2::new(self.paddles[3].pos.x, mid_y));
    }

    /// Map the stick to paddle motion and slide the paddles, clamped to
    /// their travel range.
    fn drive_paddles(&mut self, input: &TickInput) {
        // Stick right moves the horizontal paddles right, stick up
        // moves the vertical pair up, so both axes read inverted from
        // the raw ADC sense.
        let norm_x = normalize_axis(input.axis_x, self.tuning.axis_deadzone);
        let norm_y = -normalize_axis(input.axis_y, self.tuning.axis_deadzone);

        let mult = if input.boost { self.tuning.boost_multiplier } else { 1 };
        let target_x = axis_to_speed(norm_x, &self.tuning) * mult;
        let target_y = axis_to_speed(norm_y, &self.tuning) * mult;

        self.paddle_vel.x = approach(self.paddle_vel.x, target_x, self.tuning.accel_step);
        self.paddle_vel.y = approach(self.paddle_vel.y, target_y, self.tuning.accel_step);

        for i in 0..2 {
            self.paddles[i].vel = IVec2::new(self.paddle_vel.x, 0);
            self.paddles[i].update();
            let x = self.paddles[i].pos.x.clamp(self.bounds.h_min_x, self.bounds.h_max_x);
            self.paddles[i].pos.x = x;
        }
        for i in 2..4 {
            self.paddles[i].vel = IVec2::new(0, self.paddle_vel.y);
            self.paddles[i].update();
            let y = self.paddles[i].pos.y.clamp(self.bounds.v_min_y, self.bounds.v_max_y);
            self.paddles[i].pos.y = y;
        }
    }

    /// Paddle contacts score and deflect; a wall contact ends the game.
    fn run_collisions(&mut self) {
        for i in 0..4 {
            if self.cooldowns[i] > 0 {
                continue;
            }
            if collision::resolve(&mut self.ball, &mut self.paddles[i]) {
                self.score += 1;
                self.cooldowns[i] = self.tuning.cooldown_ticks;
                log::debug!("paddle {i} hit, score {}", self.score);
            }
        }
        for wall in &mut self.walls {
            if collision::resolve(&mut self.ball, wall) {
                self.final_score = self.score;
                self.ball.vel = IVec2::ZERO;
                self.flash_ticks = self.tuning.flash_ticks;
                log::info!("ball lost, final score {}", self.final_score);
                self.set_phase(Phase::GameOver);
                return;
            }
        }
    }

    /// Render the current state. The caller clears and flushes.
    pub fn draw(&self, fb: &mut FrameBuffer) {
        match self.phase {
            Phase::Title => self.draw_title(fb),
            Phase::BallAtRest | Phase::BallMoving => self.draw_playfield(fb),
            Phase::Paused => {
                self.draw_playfield(fb);
                self.draw_pause_overlay(fb);
            }
            Phase::Countdown => {
                self.draw_playfield(fb);
                self.draw_countdown_pips(fb);
            }
            Phase::GameOver => self.draw_game_over(fb),
        }
    }

    fn draw_playfield(&self, fb: &mut FrameBuffer) {
        for wall in &self.walls {
            wall.draw(fb);
        }
        for paddle in &self.paddles {
            paddle.draw(fb);
        }
        self.ball.draw(fb);
    }

    fn draw_title(&self, fb: &mut FrameBuffer) {
        let w = self.tuning.screen_width;
        let h = self.tuning.screen_height;
        raster::rect(fb, IVec2::new(0, 0), IVec2::new(w - 1, h - 1), PixelMode::Set);
        raster::rect(fb, IVec2::new(2, 2), IVec2::new(w - 3, h - 3), PixelMode::Set);

        let glyph_pos = IVec2::new((w - TITLE_GLYPH_W) / 2, h / 2 - TITLE_GLYPH_H - 2);
        raster::bitmap(
            fb,
            glyph_pos,
            &TITLE_GLYPH,
            TITLE_GLYPH_W,
            TITLE_GLYPH_H,
            PixelMode::Set,
        );

        // Play prompt under the glyph.
        let cx = w / 2;
        let cy = h / 2 + 6;
        raster::filled_triangle(
            fb,
            IVec2::new(cx - 3, cy - 4),
            IVec2::new(cx - 3, cy + 4),
            IVec2::new(cx + 5, cy),
            PixelMode::Set,
        );
    }

    fn draw_pause_overlay(&self, fb: &mut FrameBuffer) {
        let cx = self.tuning.screen_width / 2;
        let cy = self.tuning.screen_height / 2;
        let tl = IVec2::new(cx - 12, cy - 9);
        let br = IVec2::new(cx + 12, cy + 9);
        raster::filled_rect(fb, tl, br, PixelMode::Clear);
        raster::rect(fb, tl, br, PixelMode::Set);
        // Two pause bars.
        raster::filled_rect(
            fb,
            IVec2::new(cx - 5, cy - 5),
            IVec2::new(cx - 2, cy + 5),
            PixelMode::Set,
        );
        raster::filled_rect(
            fb,
            IVec2::new(cx + 2, cy - 5),
            IVec2::new(cx + 5, cy + 5),
            PixelMode::Set,
        );
    }

    /// 3, 2, 1 pips as the countdown drains.
    fn draw_countdown_pips(&self, fb: &mut FrameBuffer) {
        let total = self.tuning.countdown_ticks.max(1) as i32;
        let remaining = self.countdown as i32;
        let pips = ((remaining * 3 + total - 1) / total).clamp(1, 3);

        let cx = self.tuning.screen_width / 2;
        let cy = self.tuning.screen_height / 2;
        for i in 0..pips {
            let offset = (i - (pips - 1) / 2) * 12 - if pips == 2 { 6 } else { 0 };
            raster::filled_circle(fb, IVec2::new(cx + offset, cy), 3, PixelMode::Invert);
        }
    }

    fn draw_game_over(&self, fb: &mut FrameBuffer) {
        let w = self.tuning.screen_width;
        let h = self.tuning.screen_height;
        let r = 6;

        // Rounded frame.
        raster::hline(fb, IVec2::new(r, 1), w - 2 * r, PixelMode::Set);
        raster::hline(fb, IVec2::new(r, h - 2), w - 2 * r, PixelMode::Set);
        raster::vline(fb, IVec2::new(1, r), h - 2 * r, PixelMode::Set);
        raster::vline(fb, IVec2::new(w - 2, r), h - 2 * r, PixelMode::Set);
        raster::quarter_circle(fb, IVec2::new(r, r), r - 1, CORNER_NW, PixelMode::Set);
        raster::quarter_circle(fb, IVec2::new(w - 1 - r, r), r - 1, CORNER_NE, PixelMode::Set);
        raster::quarter_circle(fb, IVec2::new(w - 1 - r, h - 1 - r), r - 1, CORNER_SE, PixelMode::Set);
        raster::quarter_circle(fb, IVec2::new(r, h - 1 - r), r - 1, CORNER_SW, PixelMode::Set);

        // Final score as a bar, one column per point, capped at the
        // frame interior.
        let bar = (self.final_score as i32).min(w - 16);
        if bar > 0 {
            raster::filled_rect(
                fb,
                IVec2::new(8, h / 2 - 3),
                IVec2::new(8 + bar - 1, h / 2 + 3),
                PixelMode::Set,
            );
        } else {
            raster::rect(
                fb,
                IVec2::new(8, h / 2 - 3),
                IVec2::new(10, h / 2 + 3),
                PixelMode::Set,
            );
        }
    }
}

/// Center the raw 12-bit axis reading and zero the deadzone band.
fn normalize_axis(raw: u16, deadzone: i32) -> i32 {
    let delta = raw as i32 - AXIS_CENTER as i32;
    if delta.abs() < deadzone {
        0
    } else {
        delta
    }
}

/// Piecewise-linear speed curve. Each band interpolates between its
/// breakpoint speeds, so a small deflection creeps proportionally and
/// full deflection reaches the cap.
fn axis_to_speed(norm: i32, tuning: &Tuning) -> i32 {
    if norm == 0 {
        return 0;
    }
    let a = norm.abs();
    let speed = if a < tuning.deflection_low {
        a * tuning.speed_low / tuning.deflection_low.max(1)
    } else if a < tuning.deflection_mid {
        tuning.speed_low
            + (a - tuning.deflection_low) * (tuning.speed_mid - tuning.speed_low)
                / (tuning.deflection_mid - tuning.deflection_low).max(1)
    } else {
        tuning.speed_mid
            + (a - tuning.deflection_mid) * (tuning.speed_high - tuning.speed_mid)
                / (AXIS_CENTER as i32 - tuning.deflection_mid).max(1)
    };
    let speed = speed.min(tuning.max_paddle_speed);
    if norm < 0 { -speed } else { speed }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::AXIS_MAX;

    fn press() -> TickInput {
        TickInput {
            button: true,
            ..TickInput::idle()
        }
    }

    fn game() -> Game {
        Game::new(Tuning::default())
    }

    #[test]
    fn starts_on_title() {
        let g = game();
        assert_eq!(g.phase, Phase::Title);
        assert_eq!(g.score, 0);
    }

    #[test]
    fn press_leaves_title_with_ball_at_rest() {
        let mut g = game();
        g.tick(&press());
        assert_eq!(g.phase, Phase::BallAtRest);
        assert_eq!(g.ball.vel, IVec2::ZERO);
        assert_eq!(g.ball.pos, IVec2::new(64, 32));
    }

    #[test]
    fn held_button_is_one_edge() {
        let mut g = game();
        g.tick(&press());
        g.tick(&press());
        // Still at rest, the held button must not also launch.
        assert_eq!(g.phase, Phase::BallAtRest);
    }

    #[test]
    fn launch_direction_comes_from_axis_bits() {
        let mut g = game();
        g.tick(&press());
        g.tick(&TickInput::idle());
        let mut input = press();
        input.axis_x = 5;
        g.tick(&input);
        assert_eq!(g.phase, Phase::BallMoving);
        assert_eq!(g.ball.vel, IVec2::new(-1, -2));
    }

    fn launched(axis_x: u16) -> Game {
        let mut g = game();
        g.tick(&press());
        g.tick(&TickInput::idle());
        let mut input = press();
        input.axis_x = axis_x;
        g.tick(&input);
        g.tick(&TickInput::idle());
        g
    }

    #[test]
    fn every_launch_direction_is_diagonal() {
        for (dx, dy) in LAUNCH_DIRECTIONS {
            assert!(dx != 0 && dy != 0);
            assert_eq!(dx.abs() + dy.abs(), 3);
        }
    }

    #[test]
    fn pause_freezes_and_countdown_restores_velocity() {
        let mut g = launched(0);
        let vel = g.ball.vel;
        assert_ne!(vel, IVec2::ZERO);

        g.tick(&press());
        assert_eq!(g.phase, Phase::Paused);
        assert_eq!(g.ball.vel, IVec2::ZERO);
        let frozen = g.ball.pos;

        // Ball must not drift while paused.
        for _ in 0..10 {
            g.tick(&TickInput::idle());
        }
        assert_eq!(g.ball.pos, frozen);

        g.tick(&TickInput::idle());
        g.tick(&press());
        assert_eq!(g.phase, Phase::Countdown);

        for _ in 0..Tuning::default().countdown_ticks {
            g.tick(&TickInput::idle());
        }
        assert_eq!(g.phase, Phase::BallMoving);
        assert_eq!(g.ball.vel, vel);
    }

    #[test]
    fn wall_strike_ends_the_game_with_final_score() {
        let mut g = launched(0);
        g.score = 7;
        // Aim straight at the top wall, past the paddle.
        g.ball.place(IVec2::new(100, 10));
        g.ball.vel = IVec2::new(0, -2);
        for _ in 0..20 {
            g.tick(&TickInput::idle());
            if g.phase == Phase::GameOver {
                break;
            }
        }
        assert_eq!(g.phase, Phase::GameOver);
        assert_eq!(g.final_score, 7);
        assert_eq!(g.ball.vel, IVec2::ZERO);
        assert!(g.flash());

        g.tick(&TickInput::idle());
        g.tick(&press());
        assert_eq!(g.phase, Phase::Title);
    }

    #[test]
    fn paddle_contact_scores_once_per_approach() {
        let mut g = launched(0);
        // Drop the ball just above the bottom paddle, moving down.
        let paddle_y = g.paddles[1].pos.y;
        g.ball.place(IVec2::new(g.paddles[1].pos.x + 5, paddle_y - 6));
        g.ball.vel = IVec2::new(0, 2);

        let before = g.score;
        for _ in 0..12 {
            g.tick(&TickInput::idle());
        }
        assert_eq!(g.score, before + 1);
        // Deflected away from the paddle.
        assert_eq!(g.ball.vel, IVec2::new(0, -2));
    }

    #[test]
    fn full_deflection_drives_paddles_at_cruise_after_rampup() {
        let mut g = game();
        g.tick(&press());
        let mut input = TickInput::idle();
        input.axis_x = AXIS_MAX;
        let start = g.paddles[0].pos.x;
        for _ in 0..40 {
            g.tick(&input);
        }
        let t = Tuning::default();
        assert_eq!(g.paddles[0].pos.x, t.screen_width - t.wall_thickness - t.paddle_length);
        assert!(g.paddles[0].pos.x > start);
        // Both horizontal paddles track together.
        assert_eq!(g.paddles[0].pos.x, g.paddles[1].pos.x);
    }

    #[test]
    fn paddles_never_leave_their_rails() {
        let mut g = game();
        g.tick(&press());
        let t = Tuning::default();
        let mut input = TickInput::idle();
        input.axis_x = 0;
        input.axis_y = 0;
        input.boost = true;
        for _ in 0..200 {
            g.tick(&input);
            for i in 0..2 {
                assert!(g.paddles[i].pos.x >= t.wall_thickness);
                assert!(g.paddles[i].pos.x <= t.screen_width - t.wall_thickness - t.paddle_length);
            }
            for i in 2..4 {
                assert!(g.paddles[i].pos.y >= t.wall_thickness);
                assert!(g.paddles[i].pos.y <= t.screen_height - t.wall_thickness - t.paddle_length);
            }
        }
    }

    #[test]
    fn paddles_do_not_move_outside_live_phases() {
        let mut g = game();
        let mut input = TickInput::idle();
        input.axis_x = AXIS_MAX;
        let start = g.paddles[0].pos.x;
        for _ in 0..10 {
            g.tick(&input);
        }
        assert_eq!(g.phase, Phase::Title);
        assert_eq!(g.paddles[0].pos.x, start);
    }

    #[test]
    fn speed_curve_interpolates_between_breakpoints() {
        let t = Tuning::default();
        assert_eq!(axis_to_speed(0, &t), 0);
        // Low band scales 0..512 onto 0..2.
        assert_eq!(axis_to_speed(100, &t), 0);
        assert_eq!(axis_to_speed(256, &t), 1);
        assert_eq!(axis_to_speed(512, &t), t.speed_low);
        assert_eq!(axis_to_speed(-512, &t), -t.speed_low);
        // Middle band scales 512..1536 onto 2..4.
        assert_eq!(axis_to_speed(1024, &t), 3);
        assert_eq!(axis_to_speed(1536, &t), t.speed_mid);
        // Top band scales 1536..2048 onto 4..8.
        assert_eq!(axis_to_speed(2000, &t), 7);
        assert_eq!(axis_to_speed(-2048, &t), -t.speed_high);
    }

    #[test]
    fn speed_curve_is_monotonic_and_capped() {
        let t = Tuning::default();
        let mut prev = 0;
        for a in 0..=2048 {
            let s = axis_to_speed(a, &t);
            assert!(s >= prev, "curve dipped at {a}");
            assert!(s <= t.max_paddle_speed);
            prev = s;
        }
    }

    #[test]
    fn deadzone_swallows_jitter() {
        assert_eq!(normalize_axis(2048, 10), 0);
        assert_eq!(normalize_axis(2053, 10), 0);
        assert_eq!(normalize_axis(2043, 10), 0);
        assert_eq!(normalize_axis(2060, 10), 12);
        assert_eq!(normalize_axis(2030, 10), -18);
    }

    #[test]
    fn title_screen_draws_something() {
        let g = game();
        let t = Tuning::default();
        let mut fb = FrameBuffer::new(t.screen_width, t.screen_height);
        g.draw(&mut fb);
        assert!(fb.lit_pixels() > 0);
    }

    #[test]
    fn playfield_draw_includes_ball_and_walls() {
        let mut g = game();
        g.tick(&press());
        let t = Tuning::default();
        let mut fb = FrameBuffer::new(t.screen_width, t.screen_height);
        g.draw(&mut fb);
        assert!(fb.pixel(IVec2::new(64, 32)));
        assert!(fb.pixel(IVec2::new(0, 0)));
        assert!(fb.pixel(IVec2::new(t.screen_width - 1, t.screen_height - 1)));
    }

    #[test]
    fn pause_overlay_punches_a_window() {
        let mut g = launched(0);
        g.tick(&press());
        assert_eq!(g.phase, Phase::Paused);
        let t = Tuning::default();
        let mut fb = FrameBuffer::new(t.screen_width, t.screen_height);
        g.draw(&mut fb);
        // The ball sits at the center, under the cleared overlay box.
        assert!(!fb.pixel(IVec2::new(64, 24)));
    }
}
