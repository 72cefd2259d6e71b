//! Label placement

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::sim::Aabb;

/// Local bounds of a piece of text relative to its draw origin.
///
/// `left` and `top` are the bearing offsets of the first inked pixel.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct TextBounds {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

/// Draw origin that centers a label's ink on a shape's box
pub fn center_label(shape: Aabb, text: TextBounds) -> Vec2 {
    let center = shape.center();
    Vec2::new(
        center.x - text.width / 2.0 - text.left,
        center.y - text.height / 2.0 - text.top,
    )
}
