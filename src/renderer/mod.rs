//! Rendering module
//!
//! The game never talks to a graphics API directly. Everything visible is
//! expressed as requests against a `DrawTarget`, which the window backend
//! implements. Positions and colors arrive fully resolved.

pub mod recorder;
pub mod shapes;
pub mod vertex;

use glam::Vec2;

use crate::color::Rgba;

pub use recorder::{CommandRecorder, DrawCommand};
pub use vertex::Vertex;

/// How quads are composited
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlendMode {
    /// Glow: colors add onto the frame
    Additive,
}

/// Horizontal anchoring of a text position
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAlign {
    Left,
    Center,
    Right,
}

/// Positioned text request
#[derive(Debug, Clone, PartialEq)]
pub struct Text {
    pub content: String,
    pub position: Vec2,
    /// Character size in pixels
    pub size: u32,
    pub fill: Rgba,
    /// Outline color and thickness
    pub outline: Option<(Rgba, f32)>,
    pub align: TextAlign,
}

impl Text {
    pub fn new(content: impl Into<String>, position: Vec2, size: u32, fill: Rgba) -> Self {
        Self {
            content: content.into(),
            position,
            size,
            fill,
            outline: None,
            align: TextAlign::Left,
        }
    }

    pub fn outlined(mut self, color: Rgba, thickness: f32) -> Self {
        self.outline = Some((color, thickness));
        self
    }

    pub fn aligned(mut self, align: TextAlign) -> Self {
        self.align = align;
        self
    }
}

/// Filled, optionally outlined rectangle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub position: Vec2,
    pub size: Vec2,
    pub fill: Rgba,
    pub outline: Option<(Rgba, f32)>,
}

impl Rect {
    pub fn new(position: Vec2, size: Vec2, fill: Rgba) -> Self {
        Self {
            position,
            size,
            fill,
            outline: None,
        }
    }

    pub fn outlined(mut self, color: Rgba, thickness: f32) -> Self {
        self.outline = Some((color, thickness));
        self
    }
}

/// Render backend collaborator
pub trait DrawTarget {
    /// Start a frame by filling the whole surface
    fn clear(&mut self, color: Rgba);

    /// Convex polygon with outline
    fn draw_polygon(&mut self, points: &[Vec2], fill: Rgba, outline: Rgba, outline_thickness: f32);

    fn draw_rect(&mut self, rect: &Rect);

    /// Triangle list (6 vertices per quad)
    fn draw_quads(&mut self, vertices: &[Vertex], blend: BlendMode);

    fn draw_text(&mut self, text: &Text);

    /// False when no font could be loaded; text requests are then skipped
    fn has_font(&self) -> bool;

    /// Finish the frame
    fn present(&mut self) {}
}
