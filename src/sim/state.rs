//! Simulation state and core types
//!
//! Shapes and their collision bookkeeping live in two parallel vectors that
//! share indices for the whole run.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::bounds::Aabb;
use crate::consts::{DEFAULT_WINDOW_HEIGHT, DEFAULT_WINDOW_WIDTH};

/// An opaque RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const RED: Color = Color::rgb(255, 0, 0);
    pub const DARK_GRAY: Color = Color::rgb(50, 50, 50);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Linear RGBA for GPU vertices (sRGB surface)
    pub fn to_linear(self, alpha: f32) -> [f32; 4] {
        fn channel(c: u8) -> f32 {
            (c as f32 / 255.0).powf(2.2)
        }
        [channel(self.r), channel(self.g), channel(self.b), alpha]
    }
}

/// Shape-specific geometry
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Geometry {
    Rectangle { width: f32, height: f32 },
    Circle { radius: f32 },
}

impl Geometry {
    /// Size of the bounding box
    #[inline]
    pub fn extent(&self) -> Vec2 {
        match *self {
            Geometry::Rectangle { width, height } => Vec2::new(width, height),
            Geometry::Circle { radius } => Vec2::splat(2.0 * radius),
        }
    }

    /// Whether `other` describes the same kind of shape
    pub fn same_kind(&self, other: &Geometry) -> bool {
        std::mem::discriminant(self) == std::mem::discriminant(other)
    }

    pub fn kind_name(&self) -> &'static str {
        match self {
            Geometry::Rectangle { .. } => "rectangle",
            Geometry::Circle { .. } => "circle",
        }
    }
}

/// A moving shape
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shape {
    pub name: String,
    pub geometry: Geometry,
    /// Base color from the config (or the editor)
    pub color: Color,
    /// Color currently drawn; the highlight while colliding
    pub fill: Color,
    /// Top-left corner of the bounding box
    pub pos: Vec2,
    /// Pixels per tick
    pub vel: Vec2,
}

impl Shape {
    pub fn new(name: impl Into<String>, geometry: Geometry, color: Color, pos: Vec2, vel: Vec2) -> Self {
        Self {
            name: name.into(),
            geometry,
            color,
            fill: color,
            pos,
            vel,
        }
    }

    pub fn rectangle(name: impl Into<String>, pos: Vec2, vel: Vec2, color: Color, size: Vec2) -> Self {
        let geometry = Geometry::Rectangle {
            width: size.x,
            height: size.y,
        };
        Self::new(name, geometry, color, pos, vel)
    }

    pub fn circle(name: impl Into<String>, pos: Vec2, vel: Vec2, color: Color, radius: f32) -> Self {
        Self::new(name, Geometry::Circle { radius }, color, pos, vel)
    }

    /// Collidable extent. Circles use their box, not their disc.
    #[inline]
    pub fn bounds(&self) -> Aabb {
        Aabb::new(self.pos, self.geometry.extent())
    }
}

/// Per-shape collision bookkeeping
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CollisionState {
    /// Box overlaps at least one other shape
    pub in_collision: bool,
    /// Velocity captured on entering the current collision episode
    pub saved_velocity: Vec2,
}

impl CollisionState {
    pub fn new(velocity: Vec2) -> Self {
        Self {
            in_collision: false,
            saved_velocity: velocity,
        }
    }
}

/// Things that happened during a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SimEvent {
    /// A rising edge between two shapes (indices, `a < b`)
    CollisionStarted { a: usize, b: usize },
    /// A shape stopped overlapping everything
    CollisionEnded { shape: usize },
}

/// Complete simulation state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimState {
    /// Canvas width in pixels
    pub width: u32,
    /// Canvas height in pixels
    pub height: u32,
    pub shapes: Vec<Shape>,
    /// Same length and order as `shapes`
    pub collisions: Vec<CollisionState>,
    /// Ticks simulated so far
    pub time_ticks: u64,
}

impl Default for SimState {
    fn default() -> Self {
        Self::new(DEFAULT_WINDOW_WIDTH, DEFAULT_WINDOW_HEIGHT, Vec::new())
    }
}

impl SimState {
    pub fn new(width: u32, height: u32, shapes: Vec<Shape>) -> Self {
        let collisions = shapes.iter().map(|s| CollisionState::new(s.vel)).collect();
        Self {
            width,
            height,
            shapes,
            collisions,
            time_ticks: 0,
        }
    }

    /// Canvas size as a vector
    #[inline]
    pub fn canvas(&self) -> Vec2 {
        Vec2::new(self.width as f32, self.height as f32)
    }
}
