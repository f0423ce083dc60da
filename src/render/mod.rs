//! Rendering module
//!
//! The core never draws. It hands the host a `RenderSnapshot` each tick; the
//! helpers here turn that into triangles or text.

pub mod ascii;
pub mod shapes;
pub mod snapshot;
pub mod vertex;

pub use ascii::{AsciiPrinter, render_ascii};
pub use shapes::{WALL_STROKE, build_frame};
pub use snapshot::{Marker, RenderSnapshot};
pub use vertex::Vertex;

/// Receives one snapshot per tick
pub trait FrameSink {
    fn present(&mut self, snapshot: &RenderSnapshot<'_>);
}
