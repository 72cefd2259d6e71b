//! Live shape editor panel

use glam::Vec2;

use super::{Panel, UiKey, step_channel, step_value};
use crate::consts::{CHANNEL_STEP, EXTENT_RANGE, RADIUS_RANGE, SPEED_RANGE};
use crate::renderer::Canvas;
use crate::sim::{Color, EditChange, Geometry, Shape, ShapeEdit, SimState};

/// An editable property of the selected shape
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorField {
    XSpeed,
    YSpeed,
    Width,
    Height,
    Radius,
    Red,
    Green,
    Blue,
}

const RECTANGLE_FIELDS: &[EditorField] = &[
    EditorField::XSpeed,
    EditorField::YSpeed,
    EditorField::Width,
    EditorField::Height,
    EditorField::Red,
    EditorField::Green,
    EditorField::Blue,
];

const CIRCLE_FIELDS: &[EditorField] = &[
    EditorField::XSpeed,
    EditorField::YSpeed,
    EditorField::Radius,
    EditorField::Red,
    EditorField::Green,
    EditorField::Blue,
];

impl EditorField {
    /// Fields shown for a shape of this geometry, top to bottom
    pub fn for_geometry(geometry: &Geometry) -> &'static [EditorField] {
        match geometry {
            Geometry::Rectangle { .. } => RECTANGLE_FIELDS,
            Geometry::Circle { .. } => CIRCLE_FIELDS,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            EditorField::XSpeed => "X Speed",
            EditorField::YSpeed => "Y Speed",
            EditorField::Width => "Width",
            EditorField::Height => "Height",
            EditorField::Radius => "Radius",
            EditorField::Red => "R",
            EditorField::Green => "G",
            EditorField::Blue => "B",
        }
    }

    /// Slider range as (min, max, step)
    pub fn range(&self) -> (f32, f32, f32) {
        match self {
            EditorField::XSpeed | EditorField::YSpeed => SPEED_RANGE,
            EditorField::Width | EditorField::Height => EXTENT_RANGE,
            EditorField::Radius => RADIUS_RANGE,
            EditorField::Red | EditorField::Green | EditorField::Blue => {
                (0.0, 255.0, CHANNEL_STEP as f32)
            }
        }
    }

    /// Current value of this field on `shape`
    pub fn value(&self, shape: &Shape) -> f32 {
        match (self, shape.geometry) {
            (EditorField::XSpeed, _) => shape.vel.x,
            (EditorField::YSpeed, _) => shape.vel.y,
            (EditorField::Width, Geometry::Rectangle { width, .. }) => width,
            (EditorField::Height, Geometry::Rectangle { height, .. }) => height,
            (EditorField::Radius, Geometry::Circle { radius }) => radius,
            (EditorField::Red, _) => shape.color.r as f32,
            (EditorField::Green, _) => shape.color.g as f32,
            (EditorField::Blue, _) => shape.color.b as f32,
            _ => 0.0,
        }
    }

    /// Change that moves this field one step in `direction`, if any
    fn stepped(&self, shape: &Shape, direction: f32) -> Option<EditChange> {
        let change = match (self, shape.geometry) {
            (EditorField::XSpeed, _) => EditChange::Velocity(Vec2::new(
                step_value(shape.vel.x, self.range(), direction)?,
                shape.vel.y,
            )),
            (EditorField::YSpeed, _) => EditChange::Velocity(Vec2::new(
                shape.vel.x,
                step_value(shape.vel.y, self.range(), direction)?,
            )),
            (EditorField::Width, Geometry::Rectangle { width, height }) => {
                EditChange::Geometry(Geometry::Rectangle {
                    width: step_value(width, self.range(), direction)?,
                    height,
                })
            }
            (EditorField::Height, Geometry::Rectangle { width, height }) => {
                EditChange::Geometry(Geometry::Rectangle {
                    width,
                    height: step_value(height, self.range(), direction)?,
                })
            }
            (EditorField::Radius, Geometry::Circle { radius }) => EditChange::Geometry(Geometry::Circle {
                radius: step_value(radius, self.range(), direction)?,
            }),
            (EditorField::Red, _) => EditChange::Color(Color {
                r: step_channel(shape.color.r, CHANNEL_STEP, direction),
                ..shape.color
            }),
            (EditorField::Green, _) => EditChange::Color(Color {
                g: step_channel(shape.color.g, CHANNEL_STEP, direction),
                ..shape.color
            }),
            (EditorField::Blue, _) => EditChange::Color(Color {
                b: step_channel(shape.color.b, CHANNEL_STEP, direction),
                ..shape.color
            }),
            _ => return None,
        };

        let unchanged = match change {
            EditChange::Velocity(vel) => vel == shape.vel,
            EditChange::Geometry(geometry) => geometry == shape.geometry,
            EditChange::Color(color) => color == shape.color,
        };
        (!unchanged).then_some(change)
    }

    fn display(&self, shape: &Shape) -> String {
        match self {
            EditorField::XSpeed | EditorField::YSpeed => format!("{:.1}", self.value(shape)),
            _ => format!("{:.0}", self.value(shape)),
        }
    }
}

/// Selection state of the "Shape Editor" panel
#[derive(Debug, Clone, Default)]
pub struct ShapeEditor {
    /// Index of the selected shape
    pub selected: usize,
    /// Row of the focused field
    pub field: usize,
}

impl ShapeEditor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Focused field of the selected shape
    pub fn focused_field(&self, shapes: &[Shape]) -> Option<EditorField> {
        let shape = shapes.get(self.selected)?;
        let fields = EditorField::for_geometry(&shape.geometry);
        fields.get(self.field.min(fields.len() - 1)).copied()
    }

    /// React to a key. Returns the edit to queue for the next tick.
    pub fn handle(&mut self, key: UiKey, shapes: &[Shape]) -> Option<ShapeEdit> {
        if shapes.is_empty() {
            return None;
        }
        self.selected = self.selected.min(shapes.len() - 1);

        match key {
            UiKey::Next => {
                self.selected = (self.selected + 1) % shapes.len();
                self.clamp_field(shapes);
                None
            }
            UiKey::Prev => {
                self.selected = (self.selected + shapes.len() - 1) % shapes.len();
                self.clamp_field(shapes);
                None
            }
            UiKey::Up => {
                self.field = self.field.saturating_sub(1);
                None
            }
            UiKey::Down => {
                self.field += 1;
                self.clamp_field(shapes);
                None
            }
            UiKey::Left | UiKey::Right => {
                let direction = if key == UiKey::Left { -1.0 } else { 1.0 };
                let shape = &shapes[self.selected];
                let field = self.focused_field(shapes)?;
                let change = field.stepped(shape, direction)?;
                Some(ShapeEdit {
                    index: self.selected,
                    change,
                })
            }
            UiKey::Activate => None,
        }
    }

    fn clamp_field(&mut self, shapes: &[Shape]) {
        let count = EditorField::for_geometry(&shapes[self.selected].geometry).len();
        self.field = self.field.min(count - 1);
    }

    /// Draw the panel for the current state
    pub fn draw(&self, state: &SimState, canvas: &mut impl Canvas) {
        let origin = Vec2::new(10.0, 10.0);
        let Some(shape) = state.shapes.get(self.selected) else {
            let mut panel = Panel::begin(canvas, origin, 280.0, 1, "Shape Editor");
            panel.text(canvas, "No shapes loaded");
            return;
        };

        let fields = EditorField::for_geometry(&shape.geometry);
        let focused = self.focused_field(&state.shapes);
        let mut panel = Panel::begin(canvas, origin, 280.0, fields.len() + 1, "Shape Editor");
        panel.combo(canvas, "Shape", &shape.name, false);
        for field in fields {
            let (min, max, _) = field.range();
            panel.slider(
                canvas,
                field.label(),
                field.value(shape),
                (min, max),
                &field.display(shape),
                focused == Some(*field),
            );
        }
    }
}
