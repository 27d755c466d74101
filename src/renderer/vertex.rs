//! Vertex types for 2D rendering

use bytemuck::{Pod, Zeroable};

/// Simple 2D vertex with position and color
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
    pub const PLAYER: [f32; 4] = [0.30, 0.69, 0.31, 1.0]; // #4CAF50
    pub const PLAYER_CORE: [f32; 4] = [0.53, 0.53, 1.0, 1.0]; // #88f
    pub const ENEMY: [f32; 4] = [0.96, 0.26, 0.21, 1.0]; // #f44336
    pub const ENEMY_CORE: [f32; 4] = [0.6, 0.0, 0.0, 1.0]; // #900
    pub const BULLET: [f32; 4] = [1.0, 1.0, 0.0, 1.0];
    pub const STAR: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
    pub const BACKGROUND: [f32; 4] = [0.0, 0.0, 0.2, 1.0]; // #000033

    /// Explosions fade from yellow to red as they lose opacity
    pub fn explosion(alpha: f32) -> [f32; 4] {
        let a = alpha.clamp(0.0, 1.0);
        [1.0, a, 0.0, a]
    }
}
