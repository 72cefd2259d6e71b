//! Scene config reader
//!
//! Line oriented, whitespace separated, one directive per line:
//!
//! ```text
//! window <width> <height>
//! rectangle <name> <x> <y> <xSpeed> <ySpeed> <r> <g> <b> <width> <height>
//! circle <name> <x> <y> <xSpeed> <ySpeed> <r> <g> <b> <radius>
//! ```
//!
//! Unknown directives are ignored. Malformed lines are logged and skipped.

use std::path::Path;
use std::str::{FromStr, SplitWhitespace};

use glam::Vec2;

use crate::consts::{DEFAULT_WINDOW_HEIGHT, DEFAULT_WINDOW_WIDTH};
use crate::error::ConfigError;
use crate::sim::{Color, Shape, SimState};

/// Everything read from a config file
#[derive(Debug, Clone, PartialEq)]
pub struct SceneConfig {
    pub width: u32,
    pub height: u32,
    pub shapes: Vec<Shape>,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WINDOW_WIDTH,
            height: DEFAULT_WINDOW_HEIGHT,
            shapes: Vec::new(),
        }
    }
}

/// A single parsed line
#[derive(Debug, Clone, PartialEq)]
pub enum Directive {
    Window { width: u32, height: u32 },
    Shape(Shape),
}

impl SceneConfig {
    /// Read and parse a config file. Only failing to open it is an error.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let source = std::fs::read_to_string(path).map_err(|source| ConfigError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        let scene = Self::parse(&source);
        log::info!(
            "Loaded {} with {} shapes ({}x{})",
            path.display(),
            scene.shapes.len(),
            scene.width,
            scene.height
        );
        Ok(scene)
    }

    /// Parse config text, skipping lines that fail
    pub fn parse(source: &str) -> Self {
        let (scene, skipped) = Self::parse_with_errors(source);
        for err in &skipped {
            log::warn!("Skipping config line: {err}");
        }
        scene
    }

    /// Parse config text, returning the skipped lines' errors alongside
    pub fn parse_with_errors(source: &str) -> (Self, Vec<ConfigError>) {
        let mut scene = Self::default();
        let mut skipped = Vec::new();

        for (index, line) in source.lines().enumerate() {
            match parse_line(index + 1, line) {
                Ok(Some(Directive::Window { width, height })) => {
                    scene.width = width;
                    scene.height = height;
                }
                Ok(Some(Directive::Shape(shape))) => scene.shapes.push(shape),
                Ok(None) => {}
                Err(err) => skipped.push(err),
            }
        }

        (scene, skipped)
    }

    /// Initial simulation state for this scene
    pub fn into_state(self) -> SimState {
        SimState::new(self.width, self.height, self.shapes)
    }
}

/// Parse one line. `Ok(None)` for blank lines and unknown directives.
pub fn parse_line(line: usize, text: &str) -> Result<Option<Directive>, ConfigError> {
    let mut tokens = text.split_whitespace();
    let Some(directive) = tokens.next() else {
        return Ok(None);
    };

    let directive = match directive {
        "window" => {
            let mut fields = Fields::new(line, "window", tokens);
            let width = fields.dimension("width")?;
            let height = fields.dimension("height")?;
            Directive::Window { width, height }
        }
        "rectangle" => {
            let mut fields = Fields::new(line, "rectangle", tokens);
            let (name, pos, vel, color) = fields.common()?;
            let width = fields.size("width")?;
            let height = fields.size("height")?;
            Directive::Shape(Shape::rectangle(name, pos, vel, color, Vec2::new(width, height)))
        }
        "circle" => {
            let mut fields = Fields::new(line, "circle", tokens);
            let (name, pos, vel, color) = fields.common()?;
            let radius = fields.size("radius")?;
            Directive::Shape(Shape::circle(name, pos, vel, color, radius))
        }
        _ => return Ok(None),
    };

    Ok(Some(directive))
}

/// Token cursor for one directive
struct Fields<'a> {
    line: usize,
    directive: &'static str,
    tokens: SplitWhitespace<'a>,
}

impl<'a> Fields<'a> {
    fn new(line: usize, directive: &'static str, tokens: SplitWhitespace<'a>) -> Self {
        Self {
            line,
            directive,
            tokens,
        }
    }

    fn token(&mut self, field: &'static str) -> Result<&'a str, ConfigError> {
        self.tokens.next().ok_or(ConfigError::MissingField {
            line: self.line,
            directive: self.directive,
            field,
        })
    }

    fn number<T: FromStr>(&mut self, field: &'static str, expected: &'static str) -> Result<T, ConfigError> {
        let raw = self.token(field)?;
        raw.parse().map_err(|_| ConfigError::InvalidNumber {
            line: self.line,
            field,
            expected,
            value: raw.to_string(),
        })
    }

    fn float(&mut self, field: &'static str) -> Result<f32, ConfigError> {
        let value: f32 = self.number(field, "number")?;
        if value.is_finite() {
            Ok(value)
        } else {
            Err(ConfigError::InvalidNumber {
                line: self.line,
                field,
                expected: "finite number",
                value: value.to_string(),
            })
        }
    }

    fn size(&mut self, field: &'static str) -> Result<f32, ConfigError> {
        let value = self.float(field)?;
        if value > 0.0 {
            Ok(value)
        } else {
            Err(ConfigError::InvalidSize {
                line: self.line,
                field,
                value,
            })
        }
    }

    fn dimension(&mut self, field: &'static str) -> Result<u32, ConfigError> {
        match self.number(field, "integer")? {
            0 => Err(ConfigError::InvalidSize {
                line: self.line,
                field,
                value: 0.0,
            }),
            value => Ok(value),
        }
    }

    /// Fields shared by every shape: name, position, speed, color
    fn common(&mut self) -> Result<(String, Vec2, Vec2, Color), ConfigError> {
        let name = self.token("name")?.to_string();
        let pos = Vec2::new(self.float("x")?, self.float("y")?);
        let vel = Vec2::new(self.float("xSpeed")?, self.float("ySpeed")?);
        let color = Color::rgb(
            self.number("r", "color channel (0-255)")?,
            self.number("g", "color channel (0-255)")?,
            self.number("b", "color channel (0-255)")?,
        );
        Ok((name, pos, vel, color))
    }
}
