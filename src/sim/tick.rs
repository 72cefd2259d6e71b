//! Per-frame simulation tick
//!
//! One tick is: apply pending edits, move every shape, resolve collisions.
//! Edits are queued by the UI and applied here, so the simulation is the only
//! writer of shape state.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::resolve_collisions;
use super::motion::integrate;
use super::state::{Color, Geometry, SimEvent, SimState};

/// A change requested for one field group of a shape
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum EditChange {
    Velocity(Vec2),
    /// Must keep the shape's kind
    Geometry(Geometry),
    Color(Color),
}

/// A pending edit of the shape at `index`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ShapeEdit {
    pub index: usize,
    pub change: EditChange,
}

/// Inputs for a single tick
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Edits to apply before motion, in order
    pub edits: Vec<ShapeEdit>,
}

/// Advance the simulation by one tick
pub fn tick(state: &mut SimState, input: &TickInput) -> Vec<SimEvent> {
    for edit in &input.edits {
        apply_edit(state, edit);
    }

    let canvas = state.canvas();
    for shape in &mut state.shapes {
        integrate(shape, canvas);
    }

    let events = resolve_collisions(&mut state.shapes, &mut state.collisions);
    state.time_ticks += 1;

    for event in &events {
        match *event {
            SimEvent::CollisionStarted { a, b } => log::debug!(
                "tick {}: {} hit {}",
                state.time_ticks,
                state.shapes[a].name,
                state.shapes[b].name
            ),
            SimEvent::CollisionEnded { shape } => log::debug!(
                "tick {}: {} is clear",
                state.time_ticks,
                state.shapes[shape].name
            ),
        }
    }

    events
}

/// Apply one edit. Returns `false` if it was rejected.
pub fn apply_edit(state: &mut SimState, edit: &ShapeEdit) -> bool {
    let Some(shape) = state.shapes.get_mut(edit.index) else {
        log::warn!("edit for unknown shape index {}", edit.index);
        return false;
    };
    let in_collision = state.collisions[edit.index].in_collision;

    match edit.change {
        EditChange::Velocity(vel) => shape.vel = vel,
        EditChange::Geometry(geometry) => {
            if !geometry.same_kind(&shape.geometry) {
                log::warn!(
                    "cannot turn {} '{}' into a {}",
                    shape.geometry.kind_name(),
                    shape.name,
                    geometry.kind_name()
                );
                return false;
            }
            shape.geometry = geometry;
        }
        EditChange::Color(color) => {
            shape.color = color;
            if !in_collision {
                shape.fill = color;
            }
        }
    }
    true
}
