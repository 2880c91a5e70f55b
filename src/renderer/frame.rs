//! Per-frame hand-off to the external renderer

use glam::Mat4;

use super::vertex::Vertex;

/// Everything a renderer needs to draw one frame
#[derive(Debug, Clone, Default)]
pub struct FrameData {
    /// Independent triangles; length is a multiple of 3
    pub vertices: Vec<Vertex>,
    pub view: Mat4,
    pub projection: Mat4,
    /// HUD text, e.g. `Time: 3.21s`
    pub timer_text: String,
}

impl FrameData {
    pub fn triangle_count(&self) -> usize {
        self.vertices.len() / 3
    }

    /// Flat `[x, y, z, w, ...]` positions
    pub fn positions(&self) -> Vec<f32> {
        self.vertices.iter().flat_map(|v| v.position).collect()
    }

    /// Flat `[r, g, b, a, ...]` colors, parallel to `positions`
    pub fn colors(&self) -> Vec<f32> {
        self.vertices.iter().flat_map(|v| v.color).collect()
    }

    /// Interleaved vertex bytes for a GPU upload (see `Vertex::desc`)
    pub fn vertex_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }
}

/// Consumer of finished frames
pub trait Renderer {
    fn submit(&mut self, frame: &FrameData);
}
