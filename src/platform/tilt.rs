//! Latest-wins tilt input shared between the sensor callback and the tick loop
//!
//! Each axis is its own atomic (f32 bits). Writers replace values, the tick
//! reads whatever is there. A read may pair x from one sample with y from the
//! next; that is harmless jitter.

use std::sync::Arc;
use std::sync::atomic::{AtomicU32, Ordering};

use glam::Vec2;

#[derive(Debug, Default)]
struct TiltCell {
    x: AtomicU32,
    y: AtomicU32,
}

/// Cloneable handle to the shared tilt value (starts at zero)
#[derive(Debug, Clone, Default)]
pub struct TiltHandle {
    cell: Arc<TiltCell>,
}

impl TiltHandle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a sign-adjusted tilt sample
    pub fn set(&self, x: f32, y: f32) {
        self.cell.x.store(x.to_bits(), Ordering::Relaxed);
        self.cell.y.store(y.to_bits(), Ordering::Relaxed);
    }

    /// Store a raw accelerometer reading (device x, device y).
    ///
    /// Device x is negated so tilting right rolls the ball right in screen space.
    pub fn set_from_accelerometer(&self, ax: f32, ay: f32) {
        self.set(-ax, ay);
    }

    /// Latest sample
    pub fn get(&self) -> Vec2 {
        Vec2::new(
            f32::from_bits(self.cell.x.load(Ordering::Relaxed)),
            f32::from_bits(self.cell.y.load(Ordering::Relaxed)),
        )
    }
}
