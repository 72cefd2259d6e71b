//! Presentation settings
//!
//! Optional JSON file next to the scene config. Missing fields take their
//! defaults, so `{}` is a valid settings file.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::{FRAME_RATE, LABEL_SIZE};
use crate::error::SettingsError;
use crate::sim::Color;

/// Which program variant to run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Shapes and labels only
    #[default]
    Simulation,
    /// Shapes plus the live shape editor panel
    Editor,
    /// The demo widget panel, no shapes
    Widgets,
}

impl Mode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Simulation => "simulation",
            Mode::Editor => "editor",
            Mode::Widgets => "widgets",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "simulation" | "sim" => Some(Mode::Simulation),
            "editor" | "edit" => Some(Mode::Editor),
            "widgets" | "demo" => Some(Mode::Widgets),
            _ => None,
        }
    }

    /// Whether this variant loads and simulates shapes
    pub fn has_shapes(&self) -> bool {
        !matches!(self, Mode::Widgets)
    }

    pub fn default_title(&self) -> &'static str {
        match self {
            Mode::Simulation | Mode::Editor => "Collision Detection",
            Mode::Widgets => "Widgets Demo",
        }
    }

    pub fn default_background(&self) -> Color {
        match self {
            Mode::Simulation | Mode::Editor => Color::BLACK,
            Mode::Widgets => Color::DARK_GRAY,
        }
    }
}

/// Window and drawing preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Frames (and ticks) per second
    pub frame_rate: u32,
    /// Label character size in pixels
    pub label_size: f32,
    pub label_color: Color,
    /// Draw shape names centered on the shapes
    pub show_labels: bool,
    /// Clear color; the variant's default when unset
    pub background: Option<Color>,
    /// Window title; the variant's default when unset
    pub title: Option<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            frame_rate: FRAME_RATE,
            label_size: LABEL_SIZE,
            label_color: Color::WHITE,
            show_labels: true,
            background: None,
            title: None,
        }
    }
}

impl Settings {
    /// Load settings from a JSON file
    pub fn load(path: &Path) -> Result<Self, SettingsError> {
        let json = std::fs::read_to_string(path).map_err(|source| SettingsError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        let settings = Self::from_json(&json).map_err(|source| SettingsError::Json {
            path: path.to_path_buf(),
            source,
        })?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Frame rate, never below 1
    pub fn effective_frame_rate(&self) -> u32 {
        self.frame_rate.max(1)
    }

    pub fn background_for(&self, mode: Mode) -> Color {
        self.background.unwrap_or_else(|| mode.default_background())
    }

    pub fn title_for(&self, mode: Mode) -> String {
        self.title
            .clone()
            .unwrap_or_else(|| mode.default_title().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_json_gives_defaults() {
        let settings = Settings::from_json("{}").unwrap();
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.frame_rate, 60);
        assert_eq!(settings.label_size, 24.0);
    }

    #[test]
    fn test_partial_json_overrides() {
        let settings =
            Settings::from_json(r#"{ "frame_rate": 30, "background": { "r": 1, "g": 2, "b": 3 } }"#)
                .unwrap();
        assert_eq!(settings.frame_rate, 30);
        assert_eq!(settings.background_for(Mode::Widgets), Color::rgb(1, 2, 3));
        assert!(settings.show_labels);
    }

    #[test]
    fn test_variant_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.background_for(Mode::Simulation), Color::BLACK);
        assert_eq!(settings.background_for(Mode::Widgets), Color::DARK_GRAY);
        assert_eq!(settings.title_for(Mode::Editor), "Collision Detection");
    }

    #[test]
    fn test_zero_frame_rate_is_clamped() {
        let settings = Settings {
            frame_rate: 0,
            ..Default::default()
        };
        assert_eq!(settings.effective_frame_rate(), 1);
    }

    #[test]
    fn test_mode_names_round_trip() {
        for mode in [Mode::Simulation, Mode::Editor, Mode::Widgets] {
            assert_eq!(Mode::from_str(mode.as_str()), Some(mode));
        }
        assert_eq!(Mode::from_str("DEMO"), Some(Mode::Widgets));
        assert_eq!(Mode::from_str("nope"), None);
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let err = Settings::load(Path::new("no/such/settings.json")).unwrap_err();
        assert!(matches!(err, SettingsError::Open { .. }));
    }
}
