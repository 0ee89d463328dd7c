//! Shape generation for 2D primitives

use glam::Vec2;

use super::vertex::Vertex;
use crate::sim::ParticleField;

/// Two triangles covering an axis-aligned square centered on `center`
pub fn quad(center: Vec2, size: f32, color: [f32; 4]) -> [Vertex; 6] {
    let half = size * 0.5;
    let tl = Vertex::new(center.x - half, center.y - half, color);
    let tr = Vertex::new(center.x + half, center.y - half, color);
    let br = Vertex::new(center.x + half, center.y + half, color);
    let bl = Vertex::new(center.x - half, center.y + half, color);

    [tl, tr, br, tl, br, bl]
}

/// Screen-aligned quads for every live particle, shifted by `offset` (screen shake)
pub fn particle_quads(field: &ParticleField, offset: Vec2) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity(field.active_count() * 6);

    for p in field.iter_active() {
        vertices.extend_from_slice(&quad(p.position + offset, p.size, p.color.to_f32_array()));
    }

    vertices
}

/// Translate polygon points by `offset`
pub fn translated<const N: usize>(points: [Vec2; N], offset: Vec2) -> [Vec2; N] {
    points.map(|p| p + offset)
}
