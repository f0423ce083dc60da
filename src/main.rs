//! Tilt Maze headless entry point
//!
//! Runs a session in the terminal with the autopilot doing the tilting.
//! Usage: `tilt-maze [settings.json] [easy|normal|hard]`

use tilt_maze::{Difficulty, Settings};
use tilt_maze::platform::{RunFlag, Runner};
use tilt_maze::render::{AsciiPrinter, FrameSink, RenderSnapshot};
use tilt_maze::sim::{Autopilot, MazeState};

/// Prints frames and ends the run once the goal is reached
struct DemoSink {
    printer: AsciiPrinter,
    flag: RunFlag,
}

impl FrameSink for DemoSink {
    fn present(&mut self, snapshot: &RenderSnapshot<'_>) {
        self.printer.present(snapshot);
        if snapshot.reached_goal {
            self.flag.stop();
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Tilt Maze (headless) starting...");

    let mut settings = Settings::default();
    let mut difficulty = None;
    for arg in std::env::args().skip(1) {
        match Difficulty::from_str(&arg) {
            Some(preset) => difficulty = Some(preset),
            None => settings = Settings::load(&arg),
        }
    }
    if difficulty.is_some() {
        settings.difficulty = difficulty;
    }
    let settings = settings.validated();

    let seed = settings.seed.unwrap_or_else(rand::random);
    let mut state = MazeState::with_physics(settings.rows, settings.cols, seed, settings.physics());
    state.resize(settings.viewport_width, settings.viewport_height);

    let mut autopilot = Autopilot::new(&state);
    let mut runner = Runner::new(state, settings.tick_rate_hz).with_max_ticks(settings.max_ticks);
    let mut sink = DemoSink {
        printer: AsciiPrinter::new(settings.print_every),
        flag: runner.flag(),
    };

    runner.start();
    let ticks = runner.run(&mut autopilot, &mut sink);

    let state = runner.state();
    if state.ball.reached_goal() {
        println!("Solved seed {} in {} ticks", seed, ticks);
    } else {
        println!("Gave up on seed {} after {} ticks", seed, ticks);
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // Web hosts drive `Runner::step_at` from their own animation callback
}
