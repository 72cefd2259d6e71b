//! Drawing surface abstraction
//!
//! Scene and panel code draws through [`Canvas`], so it runs the same on the
//! GPU frame builder and on test recorders. Coordinates are canvas pixels,
//! origin top-left, y down.

use glam::Vec2;

use crate::layout::TextBounds;
use crate::sim::Color;

pub trait Canvas {
    /// Filled rectangle with its top-left corner at `pos`
    fn draw_rectangle(&mut self, pos: Vec2, size: Vec2, color: Color);

    /// Filled circle whose bounding box starts at `pos`
    fn draw_circle(&mut self, pos: Vec2, radius: f32, color: Color);

    /// Text with its draw origin at `pos`
    fn draw_text(&mut self, pos: Vec2, text: &str, color: Color);

    /// Local bounds of `text` if drawn at the origin
    fn measure_text(&self, text: &str) -> TextBounds;
}

/// A recorded draw call
#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    Rectangle { pos: Vec2, size: Vec2, color: Color },
    Circle { pos: Vec2, radius: f32, color: Color },
    Text { pos: Vec2, text: String, color: Color },
}

/// Canvas that records calls instead of drawing.
///
/// Text is measured with a fixed advance per character.
#[derive(Debug, Clone, Default)]
pub struct RecordingCanvas {
    pub ops: Vec<DrawOp>,
    pub glyph_width: f32,
    pub glyph_height: f32,
}

impl RecordingCanvas {
    pub fn new(glyph_width: f32, glyph_height: f32) -> Self {
        Self {
            ops: Vec::new(),
            glyph_width,
            glyph_height,
        }
    }

    pub fn texts(&self) -> Vec<&str> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                DrawOp::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }
}

impl Canvas for RecordingCanvas {
    fn draw_rectangle(&mut self, pos: Vec2, size: Vec2, color: Color) {
        self.ops.push(DrawOp::Rectangle { pos, size, color });
    }

    fn draw_circle(&mut self, pos: Vec2, radius: f32, color: Color) {
        self.ops.push(DrawOp::Circle { pos, radius, color });
    }

    fn draw_text(&mut self, pos: Vec2, text: &str, color: Color) {
        self.ops.push(DrawOp::Text {
            pos,
            text: text.to_string(),
            color,
        });
    }

    fn measure_text(&self, text: &str) -> TextBounds {
        TextBounds {
            left: 0.0,
            top: 0.0,
            width: text.chars().count() as f32 * self.glyph_width,
            height: self.glyph_height,
        }
    }
}
