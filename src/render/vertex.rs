//! Vertex type for 2D rendering

use bytemuck::{Pod, Zeroable};

/// Simple 2D vertex with position and color, ready for a GPU vertex buffer
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub color: [f32; 4],
}

impl Vertex {
    pub const fn new(x: f32, y: f32, color: [f32; 4]) -> Self {
        Self {
            position: [x, y],
            color,
        }
    }
}

/// View a vertex list as raw bytes for upload
pub fn as_bytes(vertices: &[Vertex]) -> &[u8] {
    bytemuck::cast_slice(vertices)
}

/// Colors for game elements
pub mod colors {
    pub const WALL: [f32; 4] = [0.27, 0.27, 0.27, 1.0]; // Dark gray
    pub const BALL: [f32; 4] = [1.0, 0.0, 0.0, 1.0];
    pub const GOAL: [f32; 4] = [0.0, 1.0, 0.0, 1.0];
    pub const START: [f32; 4] = [0.0, 0.0, 1.0, 1.0];
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vertex_layout() {
        assert_eq!(std::mem::size_of::<Vertex>(), 24);
        let verts = [Vertex::new(1.0, 2.0, colors::BALL); 3];
        assert_eq!(as_bytes(&verts).len(), 72);
    }
}
