//! Flat-colored triangle geometry.
//!
//! Tooltip bodies and arrows are emitted as plain triangle lists so any
//! backend that can draw colored triangles can present them.

use bytemuck::{Pod, Zeroable};

/// Vertex for filled shapes (position + color, no texture)
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Pod, Zeroable)]
pub struct ShapeVertex {
    pub position: [f32; 2],
    pub color: [f32; 4],
}

/// A 2D point
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize)]
pub struct ShapePoint {
    pub x: f32,
    pub y: f32,
}

impl ShapePoint {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Build a single filled triangle
pub fn create_triangle_vertices(points: [ShapePoint; 3], color: [f32; 4]) -> Vec<ShapeVertex> {
    points
        .iter()
        .map(|p| ShapeVertex { position: [p.x, p.y], color })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vertex_is_tightly_packed() {
        assert_eq!(std::mem::size_of::<ShapeVertex>(), 6 * 4);
        let v = ShapeVertex { position: [1.0, 2.0], color: [0.0, 0.0, 0.0, 1.0] };
        let bytes: &[u8] = bytemuck::bytes_of(&v);
        assert_eq!(bytes.len(), 24);
    }

    #[test]
    fn test_triangle_keeps_point_order() {
        let tri = create_triangle_vertices(
            [ShapePoint::new(0.0, 0.0), ShapePoint::new(4.0, 0.0), ShapePoint::new(2.0, 3.0)],
            [1.0; 4],
        );
        assert_eq!(tri.len(), 3);
        assert_eq!(tri[2].position, [2.0, 3.0]);
    }
}
