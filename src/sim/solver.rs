//! Path finding and the demo autopilot
//!
//! The autopilot plays the game without a human, steering the ball from cell
//! centre to cell centre along the solved path.

use std::collections::VecDeque;

use glam::Vec2;

use super::grid::{Cell, WallGrid};
use super::state::MazeState;

/// Shortest passage path from `from` to `to`, both ends included.
///
/// In a perfect maze this is the only path.
pub fn solve(walls: &WallGrid, from: Cell, to: Cell) -> Option<Vec<Cell>> {
    if !walls.contains(from) || !walls.contains(to) {
        return None;
    }

    let mut came_from: Vec<Vec<Option<Cell>>> = vec![vec![None; walls.cols()]; walls.rows()];
    let mut queue = VecDeque::from([from]);
    came_from[from.row][from.col] = Some(from);

    while let Some(cell) = queue.pop_front() {
        if cell == to {
            break;
        }
        for next in walls.open_neighbors(cell) {
            if came_from[next.row][next.col].is_none() {
                came_from[next.row][next.col] = Some(cell);
                queue.push_back(next);
            }
        }
    }

    came_from[to.row][to.col]?;

    let mut path = vec![to];
    let mut cell = to;
    while cell != from {
        cell = came_from[cell.row][cell.col]?;
        path.push(cell);
    }
    path.reverse();
    Some(path)
}

/// Tilt source that follows the solved path
#[derive(Debug, Clone)]
pub struct Autopilot {
    path: Vec<Cell>,
    /// Index of the waypoint being steered toward
    next: usize,
    /// Tilt per cell of distance to the waypoint
    pub gain: f32,
    /// Largest tilt magnitude the autopilot will request
    pub max_tilt: f32,
}

impl Autopilot {
    /// Waypoint counts as passed within this fraction of a cell from its centre
    const ARRIVE_RATIO: f32 = 0.3;

    pub fn new(state: &MazeState) -> Self {
        let path = solve(&state.walls, state.start(), state.goal()).unwrap_or_default();
        log::debug!("Autopilot path: {} cells", path.len());
        Self {
            path,
            next: 0,
            gain: 1.0,
            max_tilt: 0.1,
        }
    }

    pub fn path(&self) -> &[Cell] {
        &self.path
    }

    /// Waypoint currently being steered toward
    pub fn target(&self) -> Option<Cell> {
        self.path.get(self.next).copied()
    }

    /// Tilt to apply this tick
    pub fn steer(&mut self, state: &MazeState) -> Vec2 {
        if !state.layout.is_established() || state.ball.reached_goal() {
            return Vec2::ZERO;
        }

        let here = state.layout.cell_at(state.ball.pos);
        // On track while inside the waypoint or the one just passed
        let on_track = self.path.get(self.next) == Some(&here)
            || self.next.checked_sub(1).and_then(|i| self.path.get(i)) == Some(&here);
        if !on_track {
            match self.path.iter().position(|c| *c == here) {
                // Skip ahead if the ball got further along than expected
                Some(i) if i > self.next => self.next = i,
                // Off the path or behind it (a corner cut can land there):
                // the waypoint may now be behind a wall, so re-plan
                _ => self.replan(state, here),
            }
        }

        let Some(mut target) = self.target() else {
            return Vec2::ZERO;
        };

        let cell_size = state.layout.cell_size;
        let center = state.layout.cell_center(target);
        if state.ball.pos.distance(center) < cell_size * Self::ARRIVE_RATIO
            && self.next + 1 < self.path.len()
        {
            self.next += 1;
            target = self.path[self.next];
        }

        let error = (state.layout.cell_center(target) - state.ball.pos) / cell_size;
        (error * self.gain).clamp_length_max(self.max_tilt)
    }

    fn replan(&mut self, state: &MazeState, from: Cell) {
        self.path = solve(&state.walls, from, state.goal()).unwrap_or_default();
        self.next = 0;
        log::debug!("Autopilot re-planned from ({}, {})", from.row, from.col);
    }
}
