//! Per-tick ball physics
//!
//! One call advances the ball by one tick: tilt acceleration, damping,
//! axis-by-axis wall resolution (X first, then Y), goal check.

use glam::Vec2;

use super::collision::{Axis, clamp_with_walls};
use super::state::{BallPhase, MazeState};
use crate::consts::MAX_FRAME_DT;

/// Input for a single tick
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    /// Latest tilt sample, already sign-adjusted by the host
    pub tilt: Vec2,
}

impl TickInput {
    pub fn tilt(x: f32, y: f32) -> Self {
        Self {
            tilt: Vec2::new(x, y),
        }
    }
}

/// What happened during a tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickOutcome {
    /// Stopped by a wall on the X axis
    pub hit_x: bool,
    /// Stopped by a wall on the Y axis
    pub hit_y: bool,
    /// The goal flag flipped on this tick
    pub reached_goal: bool,
}

/// Clamp elapsed time into `[0, MAX_FRAME_DT]`; unknown (NaN/inf) counts as no time
pub fn sanitize_dt(dt: f32) -> f32 {
    if dt.is_finite() {
        dt.clamp(0.0, MAX_FRAME_DT)
    } else {
        0.0
    }
}

/// Advance the ball by one tick of `dt` seconds.
///
/// Does nothing until the layout has a cell size.
pub fn tick(state: &mut MazeState, input: &TickInput, dt: f32) -> TickOutcome {
    let mut outcome = TickOutcome::default();
    if !state.layout.is_established() {
        return outcome;
    }

    let dt = sanitize_dt(dt);
    let tilt = if input.tilt.is_finite() {
        input.tilt
    } else {
        Vec2::ZERO
    };

    if state.ball.phase == BallPhase::Idle {
        state.ball.phase = BallPhase::Moving;
    }
    state.time_ticks += 1;

    // Only fires when start == goal: any other ball resting on the goal was
    // already flagged by the previous tick's end-of-move check
    let was_at_goal = state.is_at_goal();

    // Damping is per tick, not per second
    let physics = state.physics;
    state.ball.vel += tilt * physics.accel_factor * dt;
    state.ball.vel *= physics.friction;

    let cell_size = state.layout.cell_size;
    let radius = state.ball.radius;
    let current = state.ball.pos;
    let next = current + state.ball.vel * cell_size;

    let x = clamp_with_walls(
        &state.walls,
        &state.layout,
        radius,
        Axis::X,
        current.x,
        next.x,
        current.y,
    );
    if x.hit {
        state.ball.vel.x = 0.0;
    }

    let y = clamp_with_walls(
        &state.walls,
        &state.layout,
        radius,
        Axis::Y,
        current.y,
        next.y,
        x.pos,
    );
    if y.hit {
        state.ball.vel.y = 0.0;
    }

    state.ball.pos = Vec2::new(x.pos, y.pos);
    outcome.hit_x = x.hit;
    outcome.hit_y = y.hit;

    if !state.ball.reached_goal() && (was_at_goal || state.is_at_goal()) {
        state.ball.phase = BallPhase::AtGoal;
        outcome.reached_goal = true;
        log::info!("Goal reached after {} ticks", state.time_ticks);
    }

    log::trace!(
        "tick {}: pos=({:.2}, {:.2}) vel=({:.3}, {:.3})",
        state.time_ticks,
        state.ball.pos.x,
        state.ball.pos.y,
        state.ball.vel.x,
        state.ball.vel.y
    );

    outcome
}
