//! Drawing primitives the host backend provides

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::sim::RotatedRect;

/// Linear RGBA
pub type Color = [f32; 4];

/// Colors for game elements
pub mod colors {
    use super::Color;

    pub const BACKGROUND: Color = [0.94, 0.94, 0.94, 1.0];
    pub const PLATFORM: Color = [0.0, 0.0, 0.0, 1.0];
    pub const STICK: Color = [150.0 / 255.0, 75.0 / 255.0, 0.0, 1.0]; // Brown
    pub const CHARACTER: Color = [1.0, 0.0, 0.0, 1.0];
}

/// Minimal 2D surface: screen space, y-down, origin top left
pub trait Canvas {
    /// Clear the whole surface
    fn fill(&mut self, color: Color);

    /// Axis-aligned rectangle from its top left corner
    fn rect(&mut self, pos: Vec2, size: Vec2, color: Color);

    /// Rectangle rotated about a pivot on its bottom edge
    fn rotated_rect(&mut self, rect: &RotatedRect, color: Color);
}

/// One recorded draw call
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DrawCommand {
    Fill(Color),
    Rect { pos: Vec2, size: Vec2, color: Color },
    RotatedRect { rect: RotatedRect, color: Color },
}

/// Canvas that keeps the draw calls (headless hosts, tests)
#[derive(Debug, Clone, Default)]
pub struct RecordingCanvas {
    commands: Vec<DrawCommand>,
}

impl RecordingCanvas {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }
}

impl Canvas for RecordingCanvas {
    fn fill(&mut self, color: Color) {
        self.commands.push(DrawCommand::Fill(color));
    }

    fn rect(&mut self, pos: Vec2, size: Vec2, color: Color) {
        self.commands.push(DrawCommand::Rect { pos, size, color });
    }

    fn rotated_rect(&mut self, rect: &RotatedRect, color: Color) {
        self.commands.push(DrawCommand::RotatedRect { rect: *rect, color });
    }
}
