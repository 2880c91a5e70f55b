//! Renderer hand-off
//!
//! Builds triangle geometry and camera matrices; drawing is left to whatever
//! implements `Renderer` (a WebGL host page, a wgpu pipeline, a test spy).
//! `Vertex::desc` is the wgpu buffer layout matching `FrameData::vertex_bytes`
//! for hosts that upload the interleaved vertices to a GPU pipeline.

pub mod frame;
pub mod scene;
pub mod shapes;
pub mod vertex;

pub use frame::{FrameData, Renderer};
pub use vertex::Vertex;
