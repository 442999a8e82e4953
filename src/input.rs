//! Input sampling.
//!
//! The simulation consumes one [`TickInput`] snapshot per tick and
//! never talks to hardware itself. Anything that can report a button,
//! a boost switch, and two 12-bit axes can drive the game.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

/// Raw axis midpoint for a 12-bit ADC.
pub const AXIS_CENTER: u16 = 2048;
/// Largest raw axis reading.
pub const AXIS_MAX: u16 = 4095;

/// Source of raw controls, polled once per tick.
pub trait InputSource {
    fn poll_button(&mut self) -> bool;
    fn poll_boost(&mut self) -> bool;
    /// Raw horizontal axis, 0..=4095 with 2048 at rest.
    fn poll_axis_x(&mut self) -> u16;
    /// Raw vertical axis, 0..=4095 with 2048 at rest.
    fn poll_axis_y(&mut self) -> u16;
}

/// One tick's worth of control state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickInput {
    pub button: bool,
    pub boost: bool,
    pub axis_x: u16,
    pub axis_y: u16,
}

impl TickInput {
    pub fn sample<S: InputSource>(src: &mut S) -> Self {
        Self {
            button: src.poll_button(),
            boost: src.poll_boost(),
            axis_x: src.poll_axis_x(),
            axis_y: src.poll_axis_y(),
        }
    }

    /// Everything at rest. Handy in tests and as a starting state.
    pub fn idle() -> Self {
        Self {
            button: false,
            boost: false,
            axis_x: AXIS_CENTER,
            axis_y: AXIS_CENTER,
        }
    }
}

impl Default for TickInput {
    fn default() -> Self {
        Self::idle()
    }
}

/// Scripted player for the headless demo. Presses the button on a
/// fixed schedule and wanders the axes with a seeded random walk, so a
/// given seed always produces the same run.
pub struct DemoPilot {
    rng: Pcg32,
    tick: u64,
    axis_x: i32,
    axis_y: i32,
}

impl DemoPilot {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Pcg32::seed_from_u64(seed),
            tick: 0,
            axis_x: AXIS_CENTER as i32,
            axis_y: AXIS_CENTER as i32,
        }
    }

    /// Advance the script one tick and report the controls for it.
    pub fn next_input(&mut self) -> TickInput {
        let t = self.tick;
        self.tick += 1;

        // Start from the title, launch, then pause and resume once
        // mid-rally.
        let button = matches!(t, 30 | 90 | 420 | 480);
        let boost = self.rng.random_bool(0.05);

        self.axis_x = (self.axis_x + self.rng.random_range(-180..=180))
            .clamp(0, AXIS_MAX as i32);
        self.axis_y = (self.axis_y + self.rng.random_range(-180..=180))
            .clamp(0, AXIS_MAX as i32);

        TickInput {
            button,
            boost,
            axis_x: self.axis_x as u16,
            axis_y: self.axis_y as u16,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn idle_input_is_centered() {
        let i = TickInput::idle();
        assert!(!i.button);
        assert!(!i.boost);
        assert_eq!(i.axis_x, AXIS_CENTER);
        assert_eq!(i.axis_y, AXIS_CENTER);
    }

    #[test]
    fn sample_reads_every_channel() {
        struct Fixed;
        impl InputSource for Fixed {
            fn poll_button(&mut self) -> bool {
                true
            }
            fn poll_boost(&mut self) -> bool {
                true
            }
            fn poll_axis_x(&mut self) -> u16 {
                100
            }
            fn poll_axis_y(&mut self) -> u16 {
                4000
            }
        }
        let i = TickInput::sample(&mut Fixed);
        assert_eq!(
            i,
            TickInput {
                button: true,
                boost: true,
                axis_x: 100,
                axis_y: 4000,
            }
        );
    }

    #[test]
    fn demo_pilot_is_deterministic() {
        let mut a = DemoPilot::new(7);
        let mut b = DemoPilot::new(7);
        for _ in 0..200 {
            assert_eq!(a.next_input(), b.next_input());
        }
    }

    #[test]
    fn demo_pilot_axes_stay_in_range() {
        let mut p = DemoPilot::new(99);
        for _ in 0..1000 {
            let i = p.next_input();
            assert!(i.axis_x <= AXIS_MAX);
            assert!(i.axis_y <= AXIS_MAX);
        }
    }

    #[test]
    fn demo_pilot_presses_on_schedule() {
        let mut p = DemoPilot::new(1);
        let presses: Vec<u64> = (0..600u64)
            .filter(|_| p.next_input().button)
            .collect();
        assert_eq!(presses.len(), 4);
    }
}
