//! Vertex types for 2D rendering

use bytemuck::{Pod, Zeroable};

use crate::color::Rgba;

/// Simple 2D vertex with position and color, laid out for direct GPU upload
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

    pub fn with_rgba(x: f32, y: f32, color: Rgba) -> Self {
        Self::new(x, y, color.to_f32_array())
    }
}

/// Colors for game elements
pub mod colors {
    use crate::color::Rgba;

    pub const VEHICLE_OUTLINE: Rgba = Rgba::WHITE;
    pub const VEHICLE_OUTLINE_THICKNESS: f32 = 2.0;
    pub const PAUSE_OVERLAY: Rgba = Rgba::new(10, 5, 20, 180);
    pub const GAME_OVER_OVERLAY: Rgba = Rgba::new(20, 5, 30, 200);
}
