//! Vertex types for 2D rendering

use bytemuck::{Pod, Zeroable};

/// 2D vertex in canvas pixels with a linear RGBA color
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub color: [f32; 4],
}

impl Vertex {
    pub const fn new(x: f32, y: f32, color: [f32; 4]) -> Self {
        Self {
            position: [x, y],
            color,
        }
    }

    /// Same vertex mapped from canvas pixels (origin top-left, y down) to
    /// normalized device coordinates
    pub fn to_ndc(self, width: f32, height: f32) -> Self {
        let [x, y] = self.position;
        Self::new(x / width * 2.0 - 1.0, 1.0 - y / height * 2.0, self.color)
    }

    pub fn desc() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &[
                wgpu::VertexAttribute {
                    offset: 0,
                    shader_location: 0,
                    format: wgpu::VertexFormat::Float32x2,
                },
                wgpu::VertexAttribute {
                    offset: std::mem::size_of::<[f32; 2]>() as wgpu::BufferAddress,
                    shader_location: 1,
                    format: wgpu::VertexFormat::Float32x4,
                },
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ndc_corners() {
        let color = [1.0; 4];
        let top_left = Vertex::new(0.0, 0.0, color).to_ndc(800.0, 600.0);
        assert_eq!(top_left.position, [-1.0, 1.0]);

        let bottom_right = Vertex::new(800.0, 600.0, color).to_ndc(800.0, 600.0);
        assert_eq!(bottom_right.position, [1.0, -1.0]);

        let center = Vertex::new(400.0, 300.0, color).to_ndc(800.0, 600.0);
        assert_eq!(center.position, [0.0, 0.0]);
    }

    #[test]
    fn test_vertex_layout_is_tightly_packed() {
        assert_eq!(std::mem::size_of::<Vertex>(), 24);
        assert_eq!(Vertex::desc().array_stride, 24);
    }
}
