//! Headless draw target that records every request
//!
//! Backs the native headless session and lets tests inspect what a frame drew.

use glam::Vec2;

use super::{BlendMode, DrawTarget, Rect, Text, Vertex};
use crate::color::Rgba;

#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Clear(Rgba),
    Polygon {
        points: Vec<Vec2>,
        fill: Rgba,
        outline: Rgba,
        outline_thickness: f32,
    },
    Rect(Rect),
    Quads {
        vertex_count: usize,
        blend: BlendMode,
    },
    Text(Text),
    Present,
}

#[derive(Debug, Clone)]
pub struct CommandRecorder {
    commands: Vec<DrawCommand>,
    font_loaded: bool,
    frames: u64,
}

impl Default for CommandRecorder {
    fn default() -> Self {
        Self::new(true)
    }
}

impl CommandRecorder {
    pub fn new(font_loaded: bool) -> Self {
        Self {
            commands: Vec::new(),
            font_loaded,
            frames: 0,
        }
    }

    /// Commands since the last `clear` call (the current frame)
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Frames presented so far
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Strings drawn this frame, in order
    pub fn texts(&self) -> Vec<&str> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Text(t) => Some(t.content.as_str()),
                _ => None,
            })
            .collect()
    }

    pub fn contains_text(&self, needle: &str) -> bool {
        self.texts().iter().any(|t| t.contains(needle))
    }
}

impl DrawTarget for CommandRecorder {
    fn clear(&mut self, color: Rgba) {
        self.commands.clear();
        self.commands.push(DrawCommand::Clear(color));
    }

    fn draw_polygon(&mut self, points: &[Vec2], fill: Rgba, outline: Rgba, outline_thickness: f32) {
        self.commands.push(DrawCommand::Polygon {
            points: points.to_vec(),
            fill,
            outline,
            outline_thickness,
        });
    }

    fn draw_rect(&mut self, rect: &Rect) {
        self.commands.push(DrawCommand::Rect(*rect));
    }

    fn draw_quads(&mut self, vertices: &[Vertex], blend: BlendMode) {
        self.commands.push(DrawCommand::Quads {
            vertex_count: vertices.len(),
            blend,
        });
    }

    fn draw_text(&mut self, text: &Text) {
        self.commands.push(DrawCommand::Text(text.clone()));
    }

    fn has_font(&self) -> bool {
        self.font_loaded
    }

    fn present(&mut self) {
        self.commands.push(DrawCommand::Present);
        self.frames += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clear_starts_new_frame() {
        let mut rec = CommandRecorder::default();
        rec.draw_text(&Text::new("old", Vec2::ZERO, 10, Rgba::WHITE));
        rec.clear(Rgba::BACKGROUND);
        rec.draw_text(&Text::new("new", Vec2::ZERO, 10, Rgba::WHITE));
        rec.present();
        assert_eq!(rec.texts(), vec!["new"]);
        assert_eq!(rec.commands()[0], DrawCommand::Clear(Rgba::BACKGROUND));
        assert_eq!(rec.frames(), 1);
    }
}
