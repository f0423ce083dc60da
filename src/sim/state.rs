//! Maze session state
//!
//! Everything the stepper mutates and the renderer reads lives in `MazeState`.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::grid::{Cell, WallGrid};
use super::layout::Layout;
use super::maze;
use crate::consts::*;

/// Where the ball is in its lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum BallPhase {
    /// Placed at start, not ticked yet
    #[default]
    Idle,
    /// Rolling
    Moving,
    /// Reached the goal. Absorbing until the ball is reset.
    AtGoal,
}

/// The rolling ball
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    pub pos: Vec2,
    /// Velocity in cells per tick
    pub vel: Vec2,
    pub radius: f32,
    pub phase: BallPhase,
}

impl Default for Ball {
    fn default() -> Self {
        Self {
            pos: Vec2::ZERO,
            vel: Vec2::ZERO,
            radius: 0.0,
            phase: BallPhase::Idle,
        }
    }
}

impl Ball {
    #[inline]
    pub fn reached_goal(&self) -> bool {
        self.phase == BallPhase::AtGoal
    }
}

/// Physics tuning
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Physics {
    pub accel_factor: f32,
    pub friction: f32,
    pub ball_radius_ratio: f32,
    pub goal_radius_ratio: f32,
    pub viewport_fill: f32,
}

impl Default for Physics {
    fn default() -> Self {
        Self {
            accel_factor: ACCEL_FACTOR,
            friction: FRICTION,
            ball_radius_ratio: BALL_RADIUS_RATIO,
            goal_radius_ratio: GOAL_RADIUS_RATIO,
            viewport_fill: VIEWPORT_FILL,
        }
    }
}

/// Complete session state: fixed maze, current layout, ball
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MazeState {
    /// Seed the maze was carved from
    pub seed: u64,
    /// Read-only after generation
    pub walls: WallGrid,
    pub layout: Layout,
    pub ball: Ball,
    pub physics: Physics,
    /// Ticks run since the last reset
    pub time_ticks: u64,
}

impl MazeState {
    /// Carve a new maze from `seed` with default physics
    pub fn new(rows: usize, cols: usize, seed: u64) -> Self {
        Self::with_physics(rows, cols, seed, Physics::default())
    }

    pub fn with_physics(rows: usize, cols: usize, seed: u64, physics: Physics) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let walls = maze::generate(rows, cols, Cell::ORIGIN, &mut rng);
        Self::from_walls(walls, seed, physics)
    }

    /// Wrap an existing wall grid. The layout starts unestablished.
    pub fn from_walls(walls: WallGrid, seed: u64, physics: Physics) -> Self {
        let layout = Layout::unset(walls.rows(), walls.cols());
        log::info!(
            "Maze {}x{} ready (seed {}, {} passages)",
            walls.rows(),
            walls.cols(),
            seed,
            walls.cleared_segments()
        );
        Self {
            seed,
            walls,
            layout,
            ball: Ball::default(),
            physics,
            time_ticks: 0,
        }
    }

    #[inline]
    pub fn start(&self) -> Cell {
        self.walls.start()
    }

    #[inline]
    pub fn goal(&self) -> Cell {
        self.walls.goal()
    }

    pub fn start_center(&self) -> Vec2 {
        self.layout.cell_center(self.start())
    }

    pub fn goal_center(&self) -> Vec2 {
        self.layout.cell_center(self.goal())
    }

    /// Arrival distance around the goal centre
    pub fn goal_threshold(&self) -> f32 {
        self.ball.radius * self.physics.goal_radius_ratio
    }

    /// Whether the ball centre is strictly within the arrival distance
    pub fn is_at_goal(&self) -> bool {
        self.ball.pos.distance(self.goal_center()) < self.goal_threshold()
    }

    /// New viewport size: recompute the layout and reset the ball
    pub fn resize(&mut self, width: f32, height: f32) {
        self.layout = Layout::from_viewport(
            width,
            height,
            self.walls.rows(),
            self.walls.cols(),
            self.physics.viewport_fill,
        );
        log::debug!(
            "Viewport {}x{} -> cell size {}, origin ({}, {})",
            width,
            height,
            self.layout.cell_size,
            self.layout.origin.x,
            self.layout.origin.y
        );
        self.reset_ball();
    }

    /// Ball back to the start centre, at rest, goal flag cleared
    pub fn reset_ball(&mut self) {
        self.ball = Ball {
            pos: self.start_center(),
            vel: Vec2::ZERO,
            radius: self.layout.cell_size * self.physics.ball_radius_ratio,
            phase: BallPhase::Idle,
        };
        self.time_ticks = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_unestablished() {
        let state = MazeState::new(10, 8, 1);
        assert!(!state.layout.is_established());
        assert_eq!(state.ball.phase, BallPhase::Idle);
        assert!(state.walls.is_perfect());
        assert_eq!(state.goal(), Cell::new(9, 7));
    }

    #[test]
    fn test_resize_places_ball_at_start() {
        let mut state = MazeState::new(10, 8, 1);
        state.resize(800.0, 1000.0);
        assert!(state.layout.is_established());
        assert_eq!(state.ball.pos, state.start_center());
        assert_eq!(state.ball.vel, Vec2::ZERO);
        assert!((state.ball.radius - state.layout.cell_size * 0.25).abs() < 1e-5);
    }

    #[test]
    fn test_resize_clears_previous_run() {
        let mut state = MazeState::new(4, 4, 3);
        state.resize(400.0, 400.0);
        state.ball.pos = state.goal_center();
        state.ball.vel = Vec2::new(3.0, -2.0);
        state.ball.phase = BallPhase::AtGoal;
        state.time_ticks = 50;

        state.resize(300.0, 500.0);
        assert_eq!(state.ball.pos, state.start_center());
        assert_eq!(state.ball.vel, Vec2::ZERO);
        assert!(!state.ball.reached_goal());
        assert_eq!(state.time_ticks, 0);
    }

    #[test]
    fn test_same_seed_same_maze() {
        let a = MazeState::new(6, 6, 777);
        let b = MazeState::new(6, 6, 777);
        assert_eq!(a.walls, b.walls);
    }
}
