//! Shape generation for 2D primitives

use glam::Vec2;
use std::f32::consts::PI;

use super::vertex::Vertex;

/// Two triangles covering the rectangle with its top-left corner at `pos`
pub fn rect(pos: Vec2, size: Vec2, color: [f32; 4]) -> [Vertex; 6] {
    let max = pos + size;
    [
        Vertex::new(pos.x, pos.y, color),
        Vertex::new(max.x, pos.y, color),
        Vertex::new(pos.x, max.y, color),
        Vertex::new(pos.x, max.y, color),
        Vertex::new(max.x, pos.y, color),
        Vertex::new(max.x, max.y, color),
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

/// Segment count that keeps the edge smooth at any radius
pub fn circle_segments(radius: f32) -> u32 {
    ((radius * 0.75) as u32).clamp(16, 96)
}
