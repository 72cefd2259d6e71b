//! Keyboard-driven panels drawn through the [`Canvas`]
//!
//! Panels are immediate mode: they hold only selection state and are redrawn
//! from scratch every frame. Shape changes leave the editor as [`ShapeEdit`]
//! intents for the next tick.
//!
//! [`ShapeEdit`]: crate::sim::ShapeEdit

pub mod editor;
pub mod widgets;

pub use editor::{EditorField, ShapeEditor};
pub use widgets::{Focus, WidgetsDemo};

use glam::Vec2;

use crate::renderer::Canvas;

/// Navigation input understood by the panels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiKey {
    /// Tab
    Next,
    /// Shift+Tab
    Prev,
    Up,
    Down,
    Left,
    Right,
    /// Enter or Space
    Activate,
}

/// Panel colors
pub mod colors {
    use crate::sim::Color;

    pub const PANEL: Color = Color::rgb(36, 36, 44);
    pub const TITLE_BAR: Color = Color::rgb(41, 74, 122);
    pub const FOCUS: Color = Color::rgb(66, 150, 250);
    pub const TRACK: Color = Color::rgb(60, 60, 70);
    pub const GRAB: Color = Color::rgb(110, 160, 230);
    pub const TEXT: Color = Color::WHITE;
}

const PADDING: f32 = 8.0;
const ROW_HEIGHT: f32 = 30.0;

/// Row cursor for a panel being drawn top to bottom
pub struct Panel {
    origin: Vec2,
    width: f32,
    cursor: f32,
}

impl Panel {
    /// Draw the frame and title for a panel with `rows` rows
    pub fn begin(canvas: &mut impl Canvas, origin: Vec2, width: f32, rows: usize, title: &str) -> Self {
        let height = ROW_HEIGHT * (rows + 1) as f32 + PADDING;
        canvas.draw_rectangle(origin, Vec2::new(width, height), colors::PANEL);
        canvas.draw_rectangle(origin, Vec2::new(width, ROW_HEIGHT), colors::TITLE_BAR);
        canvas.draw_text(origin + Vec2::new(PADDING, 4.0), title, colors::TEXT);
        Self {
            origin,
            width,
            cursor: ROW_HEIGHT + PADDING / 2.0,
        }
    }

    /// Top-left of the next row
    fn row(&mut self) -> Vec2 {
        let pos = self.origin + Vec2::new(PADDING, self.cursor);
        self.cursor += ROW_HEIGHT;
        pos
    }

    fn inner_width(&self) -> f32 {
        self.width - 2.0 * PADDING
    }

    fn focus_marker(&self, canvas: &mut impl Canvas, pos: Vec2, focused: bool) {
        if focused {
            canvas.draw_rectangle(
                pos - Vec2::new(PADDING / 2.0, 0.0),
                Vec2::new(3.0, ROW_HEIGHT - 4.0),
                colors::FOCUS,
            );
        }
    }

    pub fn text(&mut self, canvas: &mut impl Canvas, text: &str) {
        let pos = self.row();
        canvas.draw_text(pos, text, colors::TEXT);
    }

    pub fn button(&mut self, canvas: &mut impl Canvas, label: &str, focused: bool) {
        let pos = self.row();
        self.focus_marker(canvas, pos, focused);
        let bounds = canvas.measure_text(label);
        let fill = if focused { colors::FOCUS } else { colors::TRACK };
        canvas.draw_rectangle(pos, Vec2::new(bounds.width + 2.0 * PADDING, ROW_HEIGHT - 4.0), fill);
        canvas.draw_text(pos + Vec2::new(PADDING, 0.0), label, colors::TEXT);
    }

    /// Horizontal slider with the value printed on the track
    pub fn slider(
        &mut self,
        canvas: &mut impl Canvas,
        label: &str,
        value: f32,
        (min, max): (f32, f32),
        display: &str,
        focused: bool,
    ) {
        let pos = self.row();
        self.focus_marker(canvas, pos, focused);
        let track_width = self.inner_width() * 0.6;
        let track = Vec2::new(track_width, ROW_HEIGHT - 4.0);
        canvas.draw_rectangle(pos, track, colors::TRACK);

        let t = slider_fraction(value, min, max);
        let grab_width = 8.0;
        let grab_x = pos.x + t * (track_width - grab_width);
        let grab = if focused { colors::FOCUS } else { colors::GRAB };
        canvas.draw_rectangle(Vec2::new(grab_x, pos.y), Vec2::new(grab_width, track.y), grab);

        canvas.draw_text(pos + Vec2::new(PADDING, 0.0), display, colors::TEXT);
        canvas.draw_text(pos + Vec2::new(track_width + PADDING, 0.0), label, colors::TEXT);
    }

    /// Closed combo box showing the current item
    pub fn combo(&mut self, canvas: &mut impl Canvas, label: &str, current: &str, focused: bool) {
        let pos = self.row();
        self.focus_marker(canvas, pos, focused);
        let box_width = self.inner_width() * 0.6;
        canvas.draw_rectangle(pos, Vec2::new(box_width, ROW_HEIGHT - 4.0), colors::TRACK);
        canvas.draw_text(pos + Vec2::new(PADDING, 0.0), &format!("< {current} >"), colors::TEXT);
        canvas.draw_text(pos + Vec2::new(box_width + PADDING, 0.0), label, colors::TEXT);
    }
}

/// Position of `value` along a slider, 0 at `min` and 1 at `max`
pub fn slider_fraction(value: f32, min: f32, max: f32) -> f32 {
    if max <= min {
        return 0.0;
    }
    ((value - min) / (max - min)).clamp(0.0, 1.0)
}

/// Move `value` one step in `direction` (-1 or 1), clamped to the range.
///
/// `None` when the value is already at or past the limit it would move
/// toward, so an out-of-range value is never pulled against the key.
pub fn step_value(value: f32, (min, max, step): (f32, f32, f32), direction: f32) -> Option<f32> {
    if (direction > 0.0 && value >= max) || (direction < 0.0 && value <= min) {
        return None;
    }
    Some((value + direction * step).clamp(min, max))
}

/// Move a color channel one step, saturating at 0 and 255
pub fn step_channel(value: u8, step: u8, direction: f32) -> u8 {
    if direction < 0.0 {
        value.saturating_sub(step)
    } else {
        value.saturating_add(step)
    }
}
