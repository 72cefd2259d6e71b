//! Bouncing Shapes - colored rectangles and circles bouncing around a window
//!
//! Core modules:
//! - `sim`: Frame-stepped simulation (motion, collision bookkeeping, live edits)
//! - `config`: Line-oriented scene config reader
//! - `layout`: Label placement on shapes
//! - `renderer`: Canvas abstraction, wgpu pipeline and font rendering
//! - `ui`: Shape editor and demo widget panels
//! - `app`: winit window and frame loop

pub mod app;
pub mod config;
pub mod error;
pub mod layout;
pub mod renderer;
pub mod settings;
pub mod sim;
pub mod ui;

pub use config::SceneConfig;
pub use error::{ConfigError, FontError, RenderError, SettingsError};
pub use settings::Settings;

/// Simulation and presentation constants
pub mod consts {
    use crate::sim::Color;

    /// Frames (and simulation ticks) per second
    pub const FRAME_RATE: u32 = 60;

    /// Canvas size used when the config has no `window` directive
    pub const DEFAULT_WINDOW_WIDTH: u32 = 800;
    pub const DEFAULT_WINDOW_HEIGHT: u32 = 600;

    /// Velocity multiplier applied on entering a collision: reverses direction
    /// and speeds the shape up by 30%
    pub const IMPULSE_FACTOR: f32 = -1.3;

    /// Fill color of a shape while it is in a collision
    pub const HIGHLIGHT_COLOR: Color = Color::RED;

    /// Label character size in pixels
    pub const LABEL_SIZE: f32 = 24.0;

    /// Editor slider ranges (min, max, step)
    pub const SPEED_RANGE: (f32, f32, f32) = (-10.0, 10.0, 0.5);
    pub const EXTENT_RANGE: (f32, f32, f32) = (10.0, 200.0, 5.0);
    pub const RADIUS_RANGE: (f32, f32, f32) = (5.0, 100.0, 5.0);
    pub const CHANNEL_STEP: u8 = 5;
}
