//! Simulation module
//!
//! Maze generation and ball physics. Pure game logic:
//! - Random source injected (seeded in tests)
//! - Elapsed time passed in, never read from a clock
//! - No rendering or platform dependencies

pub mod collision;
pub mod grid;
pub mod layout;
pub mod maze;
pub mod solver;
pub mod state;
pub mod tick;

pub use collision::{Axis, AxisResolution, clamp_with_walls};
pub use grid::{Cell, Direction, WallGrid};
pub use layout::Layout;
pub use maze::{generate, generate_seeded};
pub use solver::{Autopilot, solve};
pub use state::{Ball, BallPhase, MazeState, Physics};
pub use tick::{TickInput, TickOutcome, sanitize_dt, tick};
