//! Rendering
//!
//! Scene and panels draw through the [`Canvas`] trait. On screen, a [`Frame`]
//! turns those calls into colored triangles that [`RenderState`] uploads and
//! draws with a single wgpu pipeline.

pub mod canvas;
pub mod frame;
pub mod pipeline;
pub mod scene;
pub mod shapes;
pub mod text;
pub mod vertex;

pub use canvas::{Canvas, DrawOp, RecordingCanvas};
pub use frame::Frame;
pub use pipeline::RenderState;
pub use scene::draw_scene;
pub use text::LabelFont;
