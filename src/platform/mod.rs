//! Platform seam
//!
//! What the host plugs into:
//! - Tilt samples arriving from a sensor thread
//! - Wall-clock time between ticks
//! - The tick loop with start/stop

pub mod clock;
pub mod runner;
pub mod tilt;

pub use clock::FrameClock;
pub use runner::{RunFlag, Runner, TiltSource};
pub use tilt::TiltHandle;
