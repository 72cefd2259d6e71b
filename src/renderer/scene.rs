//! Shape and label drawing

use crate::layout::center_label;
use crate::settings::Settings;
use crate::sim::{Geometry, SimState};

use super::canvas::Canvas;

/// Draw every shape, then every label on top
pub fn draw_scene(state: &SimState, settings: &Settings, canvas: &mut impl Canvas) {
    for shape in &state.shapes {
        match shape.geometry {
            Geometry::Rectangle { width, height } => {
                canvas.draw_rectangle(shape.pos, glam::Vec2::new(width, height), shape.fill)
            }
            Geometry::Circle { radius } => canvas.draw_circle(shape.pos, radius, shape.fill),
        }
    }

    if !settings.show_labels {
        return;
    }

    for shape in &state.shapes {
        let bounds = canvas.measure_text(&shape.name);
        let origin = center_label(shape.bounds(), bounds);
        canvas.draw_text(origin, &shape.name, settings.label_color);
    }
}
