//! JavaScript-facing world handle
//!
//! The page owns the WebGL context and the `requestAnimationFrame` loop. Each
//! frame it forwards key events, calls `frame`, then uploads `positions` and
//! `colors` and the two matrices.

use js_sys::Float32Array;
use wasm_bindgen::prelude::*;

use super::{clock, init_logging};
use crate::config::WorldConfig;
use crate::game::FrameOrchestrator;
use crate::sim::InputState;

#[wasm_bindgen]
pub struct WebWorld {
    world: FrameOrchestrator,
    input: InputState,
}

#[wasm_bindgen]
impl WebWorld {
    /// Build a world from an optional JSON config; invalid configs fall back
    /// to the glider defaults
    #[wasm_bindgen(constructor)]
    pub fn new(config_json: Option<String>) -> WebWorld {
        init_logging();
        let config = match config_json.as_deref().map(WorldConfig::from_json) {
            Some(Ok(config)) => config,
            Some(Err(e)) => {
                log::warn!("{}; using defaults", e);
                WorldConfig::default()
            }
            None => WorldConfig::default(),
        };
        WebWorld {
            world: FrameOrchestrator::new(config),
            input: InputState::new(),
        }
    }

    /// Forward a `keydown` (true) or `keyup` (false) event's `key`
    pub fn set_key(&mut self, key: &str, pressed: bool) {
        self.input.set(key, pressed);
    }

    /// Release all keys (window blur)
    pub fn clear_keys(&mut self) {
        self.input.clear();
    }

    /// Run one frame; `now_ms` is the rAF timestamp. Returns true if the
    /// world was reset this frame.
    pub fn frame(&mut self, now_ms: f64) -> bool {
        self.world.advance(&self.input, now_ms / 1000.0).reset
    }

    /// Run one frame against `performance.now()`
    pub fn frame_now(&mut self) -> bool {
        self.world.advance(&self.input, clock::now_secs()).reset
    }

    pub fn set_aspect(&mut self, aspect: f32) {
        self.world.set_aspect(aspect);
    }

    pub fn vertex_count(&self) -> u32 {
        self.world.frame().vertices.len() as u32
    }

    pub fn positions(&self) -> Float32Array {
        Float32Array::from(self.world.frame().positions().as_slice())
    }

    pub fn colors(&self) -> Float32Array {
        Float32Array::from(self.world.frame().colors().as_slice())
    }

    /// Column-major, ready for `uniformMatrix4fv`
    pub fn view_matrix(&self) -> Float32Array {
        Float32Array::from(self.world.frame().view.to_cols_array().as_slice())
    }

    pub fn projection_matrix(&self) -> Float32Array {
        Float32Array::from(self.world.frame().projection.to_cols_array().as_slice())
    }

    pub fn timer_text(&self) -> String {
        self.world.frame().timer_text.clone()
    }

    pub fn checkpoints_left(&self) -> u32 {
        self.world.state().targets.len() as u32
    }
}
