//! Read-only view of a session for one frame

use glam::Vec2;

use crate::consts::START_MARKER_RATIO;
use crate::sim::{Layout, MazeState, WallGrid};

/// A filled circle marker
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Marker {
    pub center: Vec2,
    pub radius: f32,
}

/// Everything a renderer needs to paint a frame
#[derive(Debug, Clone, Copy)]
pub struct RenderSnapshot<'a> {
    pub walls: &'a WallGrid,
    pub layout: Layout,
    pub ball_pos: Vec2,
    pub ball_radius: f32,
    pub start: Marker,
    pub goal: Marker,
    pub reached_goal: bool,
}

impl<'a> RenderSnapshot<'a> {
    pub fn capture(state: &'a MazeState) -> Self {
        let radius = state.ball.radius;
        Self {
            walls: &state.walls,
            layout: state.layout,
            ball_pos: state.ball.pos,
            ball_radius: radius,
            start: Marker {
                center: state.start_center(),
                radius: radius * START_MARKER_RATIO,
            },
            goal: Marker {
                center: state.goal_center(),
                radius: state.goal_threshold(),
            },
            reached_goal: state.ball.reached_goal(),
        }
    }

    /// Wall segments as scene-space line endpoints
    pub fn wall_segments(&self) -> Vec<(Vec2, Vec2)> {
        let walls = self.walls;
        let layout = &self.layout;
        let cell = layout.cell_size;
        let mut segments = Vec::new();

        for row in 0..=walls.rows() {
            for col in 0..walls.cols() {
                if walls.horizontal(row, col) {
                    let a = Vec2::new(layout.line_x(col), layout.line_y(row));
                    segments.push((a, a + Vec2::new(cell, 0.0)));
                }
            }
        }
        for row in 0..walls.rows() {
            for col in 0..=walls.cols() {
                if walls.vertical(row, col) {
                    let a = Vec2::new(layout.line_x(col), layout.line_y(row));
                    segments.push((a, a + Vec2::new(0.0, cell)));
                }
            }
        }
        segments
    }
}
