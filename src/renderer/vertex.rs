//! Vertex types for 2D rendering

use bytemuck::{Pod, Zeroable};

/// Simple 2D vertex with position and color
#[repr(C)]
#[derive(Copy, Clone, Debug, Pod, Zeroable)]
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

/// Colors for game elements
pub mod colors {
    pub const SKY: [f32; 4] = [0.44, 0.75, 0.87, 1.0];
    pub const PIPE: [f32; 4] = [0.39, 0.67, 0.16, 1.0];
    pub const PIPE_RIM: [f32; 4] = [0.29, 0.48, 0.10, 1.0];
    pub const BIRD: [f32; 4] = [0.96, 0.78, 0.26, 1.0];
    pub const BIRD_WING: [f32; 4] = [0.84, 0.65, 0.14, 1.0];
    pub const BIRD_EYE: [f32; 4] = [0.08, 0.08, 0.08, 1.0];
    /// Game-over tint (0xee4824)
    pub const BIRD_HIT: [f32; 4] = [0.933, 0.282, 0.141, 1.0];
    /// Translucent dim while paused or counting down
    pub const PAUSE_OVERLAY: [f32; 4] = [0.0, 0.0, 0.0, 0.45];
}
