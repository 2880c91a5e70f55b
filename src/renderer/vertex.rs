//! Vertex types for the triangle hand-off

use bytemuck::{Pod, Zeroable};
use glam::Vec3;

/// Homogeneous position with an RGBA color
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 4],
    pub color: [f32; 4],
}

impl Vertex {
    pub const fn new(x: f32, y: f32, z: f32, color: [f32; 4]) -> Self {
        Self {
            position: [x, y, z, 1.0],
            color,
        }
    }

    pub fn at(p: Vec3, color: [f32; 4]) -> Self {
        Self::new(p.x, p.y, p.z, color)
    }

    pub fn point(&self) -> Vec3 {
        Vec3::new(self.position[0], self.position[1], self.position[2])
    }

    pub fn desc() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &[
                wgpu::VertexAttribute {
                    offset: 0,
                    shader_location: 0,
                    format: wgpu::VertexFormat::Float32x4,
                },
                wgpu::VertexAttribute {
                    offset: std::mem::size_of::<[f32; 4]>() as wgpu::BufferAddress,
                    shader_location: 1,
                    format: wgpu::VertexFormat::Float32x4,
                },
            ],
        }
    }
}

/// Colors for world elements
pub mod colors {
    pub const SKY: [f32; 4] = [0.7, 0.85, 1.0, 1.0];
    pub const GRASS: [f32; 4] = [0.2, 0.8, 0.2, 1.0];
    pub const RUNWAY: [f32; 4] = [0.5, 0.5, 0.5, 1.0];
    pub const RUNWAY_DASH: [f32; 4] = [1.0, 1.0, 0.0, 1.0];
    pub const RUNWAY_EDGE: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
    pub const CLOUD: [f32; 4] = [0.0, 0.0, 0.0, 0.6];
    pub const RING_RED: [f32; 4] = [1.0, 0.0, 0.0, 1.0];
    pub const RING_GREEN: [f32; 4] = [0.0, 1.0, 0.0, 1.0];
    pub const RING_BLUE: [f32; 4] = [0.0, 0.0, 1.0, 1.0];
    pub const AIRPLANE: [f32; 4] = [1.0, 0.0, 0.0, 1.0];
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_matches_struct() {
        let layout = Vertex::desc();
        assert_eq!(layout.array_stride, 32);
        assert_eq!(layout.attributes.len(), 2);
        assert_eq!(layout.attributes[1].offset, 16);
    }

    #[test]
    fn test_casts_to_flat_floats() {
        let verts = [Vertex::new(1.0, 2.0, 3.0, colors::SKY)];
        let floats: &[f32] = bytemuck::cast_slice(&verts);
        assert_eq!(&floats[..4], &[1.0, 2.0, 3.0, 1.0]);
        assert_eq!(&floats[4..], &colors::SKY);
    }
}
