//! Tilt Maze - roll a ball through a random maze by tilting the device
//!
//! Core modules:
//! - `sim`: Maze generation and the per-tick ball physics (no platform dependencies)
//! - `render`: Read-only frame snapshot plus renderer-neutral shapes and an ASCII view
//! - `platform`: Host seam (tilt input, frame clock, tick loop)
//! - `settings`: Tunable constants and grid size

pub mod platform;
pub mod render;
pub mod settings;
pub mod sim;

pub use settings::{Difficulty, Settings};

/// Game configuration constants
pub mod consts {
    /// Default grid size (rows x cols)
    pub const DEFAULT_ROWS: usize = 10;
    pub const DEFAULT_COLS: usize = 8;

    /// Converts normalized tilt into velocity gained per second (cells/tick per s)
    pub const ACCEL_FACTOR: f32 = 12.0;
    /// Per-tick velocity decay, applied regardless of dt
    pub const FRICTION: f32 = 0.9;

    /// Ball radius as a fraction of the cell size
    pub const BALL_RADIUS_RATIO: f32 = 0.25;
    /// Goal arrival distance as a fraction of the ball radius
    pub const GOAL_RADIUS_RATIO: f32 = 0.8;
    /// Start marker radius as a fraction of the ball radius
    pub const START_MARKER_RATIO: f32 = 0.6;

    /// Share of the viewport the maze may occupy on each axis
    pub const VIEWPORT_FILL: f32 = 0.9;

    /// Tick loop cadence
    pub const TICK_RATE_HZ: f32 = 60.0;
    /// Accepted tick rate range for settings
    pub const MIN_TICK_RATE_HZ: f32 = 1.0;
    pub const MAX_TICK_RATE_HZ: f32 = 1000.0;
    /// Largest elapsed time a single tick may consume (seconds)
    pub const MAX_FRAME_DT: f32 = 0.1;
}
