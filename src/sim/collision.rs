//! Ball vs. wall collision, one axis at a time
//!
//! Each axis is resolved on its own: clamp to the playfield, find the cell the
//! clamped position falls in (using the other axis' coordinate), then stop the
//! ball at the wall on the side it is moving toward.
//!
//! The lookup uses the destination cell, so a ball travelling more than half a
//! cell per tick can land past a wall without touching it. Corners can be cut the
//! same way when both axes move. Both are accepted approximations.

use glam::Vec2;

use super::grid::{Direction, WallGrid};
use super::layout::Layout;

/// Axis being resolved
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
}

/// Resolved coordinate on one axis
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisResolution {
    /// Final coordinate on this axis
    pub pos: f32,
    /// The ball was stopped by a wall (caller zeroes this axis' velocity)
    pub hit: bool,
}

/// Resolve movement from `current` to `next` along `axis`.
///
/// `other` is the ball's coordinate on the other axis, used only to pick the
/// row (when resolving X) or column (when resolving Y).
pub fn clamp_with_walls(
    walls: &WallGrid,
    layout: &Layout,
    radius: f32,
    axis: Axis,
    current: f32,
    next: f32,
    other: f32,
) -> AxisResolution {
    let (min, max) = layout.ball_bounds(radius);
    let (lo, hi) = match axis {
        Axis::X => (min.x, max.x),
        Axis::Y => (min.y, max.y),
    };
    let mut pos = next.max(lo).min(hi);

    let point = match axis {
        Axis::X => Vec2::new(pos, other),
        Axis::Y => Vec2::new(other, pos),
    };
    let cell = walls.clamp(layout.cell_at(point));

    let (far_side, near_side, far_line, near_line) = match axis {
        Axis::X => (
            Direction::Right,
            Direction::Left,
            layout.line_x(cell.col + 1),
            layout.line_x(cell.col),
        ),
        Axis::Y => (
            Direction::Down,
            Direction::Up,
            layout.line_y(cell.row + 1),
            layout.line_y(cell.row),
        ),
    };

    let mut hit = false;
    if next > current {
        if walls.has_wall(cell, far_side) && pos + radius > far_line {
            pos = far_line - radius;
            hit = true;
        }
    } else if next < current && walls.has_wall(cell, near_side) && pos - radius < near_line {
        pos = near_line + radius;
        hit = true;
    }

    AxisResolution { pos, hit }
}
