//! Frame-stepped simulation module
//!
//! All shape behavior lives here and has no window or GPU dependencies:
//! - One tick per frame, velocities in pixels per tick
//! - Stable iteration order (by shape index)
//! - Shape state is written only by [`tick`]

pub mod bounds;
pub mod collision;
pub mod motion;
pub mod state;
pub mod tick;

pub use bounds::Aabb;
pub use collision::{overlapping_pairs, resolve_collisions};
pub use motion::integrate;
pub use state::{CollisionState, Color, Geometry, Shape, SimEvent, SimState};
pub use tick::{EditChange, ShapeEdit, TickInput, apply_edit, tick};
