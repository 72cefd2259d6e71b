//! Per-frame vertex builder

use glam::Vec2;

use super::canvas::Canvas;
use super::shapes;
use super::text::LabelFont;
use super::vertex::Vertex;
use crate::layout::TextBounds;
use crate::sim::Color;

/// Collects the triangles for one frame, in draw order
pub struct Frame<'a> {
    pub vertices: Vec<Vertex>,
    font: &'a mut LabelFont,
}

impl<'a> Frame<'a> {
    pub fn new(font: &'a mut LabelFont) -> Self {
        Self {
            vertices: Vec::new(),
            font,
        }
    }
}

impl Canvas for Frame<'_> {
    fn draw_rectangle(&mut self, pos: Vec2, size: Vec2, color: Color) {
        self.vertices
            .extend_from_slice(&shapes::rect(pos, size, color.to_linear(1.0)));
    }

    fn draw_circle(&mut self, pos: Vec2, radius: f32, color: Color) {
        let center = pos + Vec2::splat(radius);
        self.vertices.extend(shapes::circle(
            center,
            radius,
            color.to_linear(1.0),
            shapes::circle_segments(radius),
        ));
    }

    fn draw_text(&mut self, pos: Vec2, text: &str, color: Color) {
        let glyphs = self.font.vertices(pos, text, color);
        self.vertices.extend(glyphs);
    }

    fn measure_text(&self, text: &str) -> TextBounds {
        self.font.measure(text)
    }
}
