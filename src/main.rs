//! Paddle Panic entry point.
//!
//! Runs a headless, seeded demo game at a fixed timestep and renders
//! the last frame to the terminal. The simulation itself is identical
//! to what a panel-driven build would run; only the display and input
//! ends differ.

use std::env;
use std::fs;
use std::process::ExitCode;

use paddle_panic::display::MonoDisplay;
use paddle_panic::gfx::framebuffer::FrameBuffer;
use paddle_panic::input::{DemoPilot, TickInput};
use paddle_panic::sim::Game;
use paddle_panic::Tuning;

const DEFAULT_SEED: u64 = 0xC0FFEE;
const DEFAULT_TICKS: u64 = 600;

/// Terminal-backed panel. Collects flushed pages and prints them as
/// two-pixels-per-character block art.
struct TermDisplay {
    width: usize,
    pages: Vec<Vec<u8>>,
    inverted: bool,
}

impl TermDisplay {
    fn new(width: i32) -> Self {
        Self {
            width: width as usize,
            pages: Vec::new(),
            inverted: false,
        }
    }

    fn pixel(&self, x: usize, y: usize) -> bool {
        let on = self
            .pages
            .get(y / 8)
            .and_then(|p| p.get(x))
            .map(|byte| byte & (1 << (y & 7)) != 0)
            .unwrap_or(false);
        on != self.inverted
    }

    fn render(&self) -> String {
        let height = self.pages.len() * 8;
        let mut out = String::new();
        for y in (0..height).step_by(2) {
            for x in 0..self.width {
                let top = self.pixel(x, y);
                let bottom = self.pixel(x, y + 1);
                out.push(match (top, bottom) {
                    (true, true) => '\u{2588}',
                    (true, false) => '\u{2580}',
                    (false, true) => '\u{2584}',
                    (false, false) => ' ',
                });
            }
            out.push('\n');
        }
        out
    }
}

impl MonoDisplay for TermDisplay {
    fn write_page(&mut self, page: u8, row: &[u8]) {
        let page = page as usize;
        if self.pages.len() <= page {
            self.pages.resize(page + 1, Vec::new());
        }
        self.pages[page] = row.to_vec();
    }

    fn set_invert(&mut self, on: bool) {
        self.inverted = on;
    }
}

fn load_tuning() -> Result<Tuning, String> {
    match env::var("PADDLE_PANIC_TUNING") {
        Ok(path) => {
            let json = fs::read_to_string(&path)
                .map_err(|e| format!("cannot read tuning file {path}: {e}"))?;
            let tuning =
                Tuning::from_json(&json).map_err(|e| format!("bad tuning file {path}: {e}"))?;
            log::info!("tuning loaded from {path}");
            Ok(tuning)
        }
        Err(_) => Ok(Tuning::default()),
    }
}

fn main() -> ExitCode {
    env_logger::init();

    let mut args = env::args().skip(1);
    let seed = match args.next().map(|a| a.parse::<u64>()) {
        Some(Ok(s)) => s,
        Some(Err(_)) => {
            eprintln!("usage: paddle-panic [seed] [ticks]");
            return ExitCode::FAILURE;
        }
        None => DEFAULT_SEED,
    };
    let ticks = match args.next().map(|a| a.parse::<u64>()) {
        Some(Ok(t)) => t,
        Some(Err(_)) => {
            eprintln!("usage: paddle-panic [seed] [ticks]");
            return ExitCode::FAILURE;
        }
        None => DEFAULT_TICKS,
    };

    let tuning = match load_tuning() {
        Ok(t) => t,
        Err(e) => {
            eprintln!("{e}");
            return ExitCode::FAILURE;
        }
    };

    log::info!("demo run, seed {seed}, {ticks} ticks");

    let mut fb = FrameBuffer::new(tuning.screen_width, tuning.screen_height);
    let mut game = Game::new(tuning);
    let mut pilot = DemoPilot::new(seed);

    for _ in 0..ticks {
        let input: TickInput = pilot.next_input();
        game.tick(&input);
    }

    fb.clear();
    game.draw(&mut fb);

    let mut display = TermDisplay::new(fb.width());
    display.set_invert(game.flash());
    fb.flush(&mut display);
    println!("{}", display.render());

    log::info!(
        "demo finished in {:?}, score {}, final score {}",
        game.phase,
        game.score,
        game.final_score
    );
    ExitCode::SUCCESS
}
