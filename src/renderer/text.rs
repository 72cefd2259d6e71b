//! Label font loading and text rendering
//!
//! Glyphs are rasterized with `fontdue` and drawn as one translucent quad
//! per inked pixel through the same triangle pipeline as the shapes. Labels
//! are short, so no atlas texture is needed.

use std::collections::HashMap;
use std::path::Path;

use fontdue::{Font, FontSettings, Metrics};
use glam::Vec2;

use super::shapes;
use super::vertex::Vertex;
use crate::error::FontError;
use crate::layout::TextBounds;
use crate::sim::Color;

/// Coverage below this is not drawn
const MIN_COVERAGE: u8 = 8;

/// A glyph positioned relative to the text origin
#[derive(Debug, Clone, Copy)]
struct PlacedGlyph {
    ch: char,
    /// Top-left of the glyph bitmap
    offset: Vec2,
    width: usize,
    height: usize,
}

/// A font at a fixed pixel size
pub struct LabelFont {
    font: Font,
    px: f32,
    /// Distance from the text origin (line top) down to the baseline
    ascent: f32,
    /// Rasterized coverage per character
    cache: HashMap<char, (Metrics, Vec<u8>)>,
}

impl LabelFont {
    /// Load a TrueType/OpenType font file
    pub fn load(path: &Path, px: f32) -> Result<Self, FontError> {
        let bytes = std::fs::read(path).map_err(|source| FontError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        let font = Self::from_bytes(bytes, px).map_err(|message| FontError::Parse {
            path: path.to_path_buf(),
            message,
        })?;
        log::info!("Loaded font {} at {}px", path.display(), px);
        Ok(font)
    }

    pub fn from_bytes(bytes: Vec<u8>, px: f32) -> Result<Self, String> {
        let font = Font::from_bytes(bytes, FontSettings::default()).map_err(str::to_string)?;
        let ascent = font
            .horizontal_line_metrics(px)
            .map(|line| line.ascent)
            .unwrap_or(px);
        Ok(Self {
            font,
            px,
            ascent,
            cache: HashMap::new(),
        })
    }

    /// Lay out a single line of text from the origin
    fn layout(&self, text: &str) -> Vec<PlacedGlyph> {
        let mut pen_x = 0.0;
        let mut placed = Vec::with_capacity(text.len());
        for ch in text.chars() {
            let metrics = self.font.metrics(ch, self.px);
            placed.push(PlacedGlyph {
                ch,
                offset: Vec2::new(
                    pen_x + metrics.xmin as f32,
                    self.ascent - (metrics.ymin as f32 + metrics.height as f32),
                ),
                width: metrics.width,
                height: metrics.height,
            });
            pen_x += metrics.advance_width;
        }
        placed
    }

    /// Ink bounds of `text` relative to its origin
    pub fn measure(&self, text: &str) -> TextBounds {
        let mut min = Vec2::splat(f32::INFINITY);
        let mut max = Vec2::splat(f32::NEG_INFINITY);
        for glyph in self.layout(text) {
            if glyph.width == 0 || glyph.height == 0 {
                continue;
            }
            min = min.min(glyph.offset);
            max = max.max(glyph.offset + Vec2::new(glyph.width as f32, glyph.height as f32));
        }

        if min.x > max.x {
            return TextBounds::default();
        }
        TextBounds {
            left: min.x,
            top: min.y,
            width: max.x - min.x,
            height: max.y - min.y,
        }
    }

    /// Vertices for `text` drawn at `origin`
    pub fn vertices(&mut self, origin: Vec2, text: &str, color: Color) -> Vec<Vertex> {
        let mut vertices = Vec::new();
        for glyph in self.layout(text) {
            let (metrics, coverage) = self
                .cache
                .entry(glyph.ch)
                .or_insert_with(|| self.font.rasterize(glyph.ch, self.px));
            let top_left = origin + glyph.offset;

            for row in 0..metrics.height {
                for col in 0..metrics.width {
                    let alpha = coverage[row * metrics.width + col];
                    if alpha < MIN_COVERAGE {
                        continue;
                    }
                    let pixel = top_left + Vec2::new(col as f32, row as f32);
                    let rgba = color.to_linear(alpha as f32 / 255.0);
                    vertices.extend_from_slice(&shapes::rect(pixel, Vec2::ONE, rgba));
                }
            }
        }
        vertices
    }
}
