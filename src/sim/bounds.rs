//! Axis-aligned bounding boxes
//!
//! Every shape collides through its box: `[x, x + w] x [y, y + h]`, with
//! y growing downward like the window.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// An axis-aligned box given by its top-left corner and size
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    pub min: Vec2,
    pub size: Vec2,
}

impl Aabb {
    pub fn new(min: Vec2, size: Vec2) -> Self {
        Self { min, size }
    }

    #[inline]
    pub fn max(&self) -> Vec2 {
        self.min + self.size
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        self.min + self.size * 0.5
    }

    /// Overlap on both axes with a nonzero area.
    ///
    /// Boxes that only share an edge do not intersect.
    pub fn intersects(&self, other: &Aabb) -> bool {
        let overlap = self.max().min(other.max()) - self.min.max(other.min);
        overlap.x > 0.0 && overlap.y > 0.0
    }
}
