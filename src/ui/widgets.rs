//! Demo "Control Panel" with one of each widget

use glam::Vec2;

use super::{Panel, UiKey, step_value};
use crate::renderer::Canvas;

pub const OPTIONS: [&str; 3] = ["Option 1", "Option 2", "Option 3"];
const SLIDER_RANGE: (f32, f32, f32) = (0.0, 1.0, 0.05);
const GREETING: &str = "Hello, world!";

/// Focusable rows, top to bottom
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Button,
    Slider,
    Combo,
}

impl Focus {
    fn next(self) -> Self {
        match self {
            Focus::Button => Focus::Slider,
            Focus::Slider => Focus::Combo,
            Focus::Combo => Focus::Button,
        }
    }

    fn prev(self) -> Self {
        match self {
            Focus::Button => Focus::Combo,
            Focus::Slider => Focus::Button,
            Focus::Combo => Focus::Slider,
        }
    }
}

#[derive(Debug, Clone)]
pub struct WidgetsDemo {
    pub show_text: bool,
    pub slider_value: f32,
    pub combo_index: usize,
    pub focus: Focus,
}

impl Default for WidgetsDemo {
    fn default() -> Self {
        Self {
            show_text: false,
            slider_value: 0.5,
            combo_index: 0,
            focus: Focus::default(),
        }
    }
}

impl WidgetsDemo {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn handle(&mut self, key: UiKey) {
        match (key, self.focus) {
            (UiKey::Next | UiKey::Down, _) => self.focus = self.focus.next(),
            (UiKey::Prev | UiKey::Up, _) => self.focus = self.focus.prev(),
            (UiKey::Activate, Focus::Button) => {
                self.show_text = !self.show_text;
                log::debug!("text visible: {}", self.show_text);
            }
            (UiKey::Left | UiKey::Right, Focus::Slider) => {
                let direction = if key == UiKey::Left { -1.0 } else { 1.0 };
                if let Some(value) = step_value(self.slider_value, SLIDER_RANGE, direction) {
                    self.slider_value = value;
                }
            }
            (UiKey::Left, Focus::Combo) => {
                self.combo_index = (self.combo_index + OPTIONS.len() - 1) % OPTIONS.len()
            }
            (UiKey::Right | UiKey::Activate, Focus::Combo) => {
                self.combo_index = (self.combo_index + 1) % OPTIONS.len()
            }
            _ => {}
        }
    }

    pub fn draw(&self, canvas: &mut impl Canvas) {
        let rows = if self.show_text { 4 } else { 3 };
        let mut panel = Panel::begin(canvas, Vec2::new(10.0, 10.0), 320.0, rows, "Control Panel");
        panel.button(canvas, "Toggle Text", self.focus == Focus::Button);
        panel.slider(
            canvas,
            "Adjust Value",
            self.slider_value,
            (SLIDER_RANGE.0, SLIDER_RANGE.1),
            &format!("{:.3}", self.slider_value),
            self.focus == Focus::Slider,
        );
        panel.combo(
            canvas,
            "Options",
            OPTIONS[self.combo_index % OPTIONS.len()],
            self.focus == Focus::Combo,
        );
        if self.show_text {
            panel.text(canvas, GREETING);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::RecordingCanvas;

    #[test]
    fn test_initial_state() {
        let demo = WidgetsDemo::new();
        assert!(!demo.show_text);
        assert_eq!(demo.slider_value, 0.5);
        assert_eq!(demo.combo_index, 0);
    }

    #[test]
    fn test_button_toggles_text() {
        let mut demo = WidgetsDemo::new();
        demo.handle(UiKey::Activate);
        assert!(demo.show_text);

        let mut canvas = RecordingCanvas::new(8.0, 16.0);
        demo.draw(&mut canvas);
        assert!(canvas.texts().contains(&GREETING));

        demo.handle(UiKey::Activate);
        let mut canvas = RecordingCanvas::new(8.0, 16.0);
        demo.draw(&mut canvas);
        assert!(!canvas.texts().contains(&GREETING));
    }

    #[test]
    fn test_slider_stays_in_range() {
        let mut demo = WidgetsDemo::new();
        demo.handle(UiKey::Down);
        assert_eq!(demo.focus, Focus::Slider);
        for _ in 0..30 {
            demo.handle(UiKey::Right);
        }
        assert_eq!(demo.slider_value, 1.0);
        for _ in 0..30 {
            demo.handle(UiKey::Left);
        }
        assert_eq!(demo.slider_value, 0.0);
    }

    #[test]
    fn test_combo_wraps() {
        let mut demo = WidgetsDemo::new();
        demo.handle(UiKey::Prev);
        assert_eq!(demo.focus, Focus::Combo);
        demo.handle(UiKey::Left);
        assert_eq!(demo.combo_index, 2);
        demo.handle(UiKey::Right);
        assert_eq!(demo.combo_index, 0);

        let mut canvas = RecordingCanvas::new(8.0, 16.0);
        demo.draw(&mut canvas);
        assert!(canvas.texts().contains(&"< Option 1 >"));
    }
}
