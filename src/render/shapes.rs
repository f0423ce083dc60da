//! Shape generation for 2D primitives
//!
//! Turns a snapshot into a flat triangle list the host can upload and draw.

use glam::Vec2;
use std::f32::consts::PI;

use super::snapshot::RenderSnapshot;
use super::vertex::{Vertex, colors};

/// Default wall stroke width in scene units
pub const WALL_STROKE: f32 = 8.0;

/// Triangle count used for ball and markers
const CIRCLE_SEGMENTS: u32 = 24;

/// Generate vertices for a thick line segment (two triangles)
pub fn line(a: Vec2, b: Vec2, width: f32, color: [f32; 4]) -> Vec<Vertex> {
    let dir = (b - a).normalize_or_zero();
    if dir == Vec2::ZERO {
        return Vec::new();
    }
    let half = width / 2.0;
    // Extend along the segment too so joints at cell corners close up
    let a = a - dir * half;
    let b = b + dir * half;
    let perp = Vec2::new(-dir.y, dir.x) * half;

    let (a1, a2, b1, b2) = (a + perp, a - perp, b + perp, b - perp);
    vec![
        Vertex::new(a1.x, a1.y, color),
        Vertex::new(a2.x, a2.y, color),
        Vertex::new(b1.x, b1.y, color),
        Vertex::new(b1.x, b1.y, color),
        Vertex::new(a2.x, a2.y, color),
        Vertex::new(b2.x, b2.y, color),
    ]
}

/// Generate vertices for a filled circle
pub fn circle(center: Vec2, radius: f32, color: [f32; 4], segments: u32) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity((segments * 3) as usize);

    for i in 0..segments {
        let theta1 = (i as f32 / segments as f32) * 2.0 * PI;
        let theta2 = ((i + 1) as f32 / segments as f32) * 2.0 * PI;

        // Triangle from center to edge
        vertices.push(Vertex::new(center.x, center.y, color));
        vertices.push(Vertex::new(
            center.x + radius * theta1.cos(),
            center.y + radius * theta1.sin(),
            color,
        ));
        vertices.push(Vertex::new(
            center.x + radius * theta2.cos(),
            center.y + radius * theta2.sin(),
            color,
        ));
    }

    vertices
}

/// Full frame, back to front: walls, start marker, goal marker, ball.
///
/// Empty until the layout is established.
pub fn build_frame(snapshot: &RenderSnapshot<'_>, wall_stroke: f32) -> Vec<Vertex> {
    if !snapshot.layout.is_established() {
        return Vec::new();
    }

    let mut vertices = Vec::new();
    for (a, b) in snapshot.wall_segments() {
        vertices.extend(line(a, b, wall_stroke, colors::WALL));
    }
    vertices.extend(circle(
        snapshot.start.center,
        snapshot.start.radius,
        colors::START,
        CIRCLE_SEGMENTS,
    ));
    vertices.extend(circle(
        snapshot.goal.center,
        snapshot.goal.radius,
        colors::GOAL,
        CIRCLE_SEGMENTS,
    ));
    vertices.extend(circle(
        snapshot.ball_pos,
        snapshot.ball_radius,
        colors::BALL,
        CIRCLE_SEGMENTS,
    ));
    vertices
}
