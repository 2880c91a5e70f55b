//! Frame orchestration
//!
//! One `advance` call per host frame:
//! 1. copy the static backdrop and add a sphere per live checkpoint
//! 2. snapshot input and run the simulation tick
//! 3. add the camera marker, rebuild view/projection and the timer readout
//! 4. hand the frame to a renderer (`run_frame`)
//!
//! Geometry in step 1 reflects the checkpoints alive at the start of the
//! frame; a checkpoint cleared this tick disappears from the next frame.

use crate::config::WorldConfig;
use crate::renderer::{FrameData, Renderer, Vertex, scene};
use crate::sim::{InputState, TickReport, WorldState, tick};

/// Owns the world and everything needed to turn it into frames
pub struct FrameOrchestrator {
    config: WorldConfig,
    state: WorldState,
    static_scene: Vec<Vertex>,
    frame: FrameData,
}

impl FrameOrchestrator {
    pub fn new(config: WorldConfig) -> Self {
        let state = WorldState::new(&config);
        let static_scene = scene::build_static(&config.bounds);
        log::info!(
            "World ready: {:?}/{:?}, {} checkpoints, {} static triangles",
            config.steering,
            config.propulsion,
            state.targets.len(),
            static_scene.len() / 3
        );

        let mut orchestrator = Self {
            config,
            state,
            static_scene,
            frame: FrameData::default(),
        };
        orchestrator.refresh_frame(0.0);
        orchestrator
    }

    pub fn config(&self) -> &WorldConfig {
        &self.config
    }

    pub fn state(&self) -> &WorldState {
        &self.state
    }

    /// Direct access for hosts and tests that need to place the camera
    pub fn state_mut(&mut self) -> &mut WorldState {
        &mut self.state
    }

    /// The most recently built frame
    pub fn frame(&self) -> &FrameData {
        &self.frame
    }

    /// Canvas resized
    pub fn set_aspect(&mut self, aspect: f32) {
        if aspect.is_finite() && aspect > 0.0 {
            self.config.projection.aspect = aspect;
            self.frame.projection = self.config.projection.matrix();
        } else {
            log::warn!("Ignoring invalid aspect ratio {}", aspect);
        }
    }

    /// Run one frame at host time `now` (seconds)
    pub fn advance(&mut self, input: &InputState, now: f64) -> TickReport {
        self.frame.vertices.clear();
        self.frame.vertices.extend_from_slice(&self.static_scene);
        scene::push_targets(&mut self.frame.vertices, self.state.targets.live_targets());

        let input = input.snapshot();
        let report = tick(&mut self.state, &input, now, &self.config);

        self.refresh_frame(now);
        report
    }

    /// `advance`, then submit the frame
    pub fn run_frame(
        &mut self,
        input: &InputState,
        now: f64,
        renderer: &mut impl Renderer,
    ) -> TickReport {
        let report = self.advance(input, now);
        renderer.submit(&self.frame);
        report
    }

    /// Camera-attached geometry, matrices and readout from the final pose
    fn refresh_frame(&mut self, now: f64) {
        if self.frame.vertices.is_empty() {
            self.frame.vertices.extend_from_slice(&self.static_scene);
            scene::push_targets(&mut self.frame.vertices, self.state.targets.live_targets());
        }
        scene::push_marker(&mut self.frame.vertices, &self.state.camera);
        self.frame.view = self.state.camera.view_matrix();
        self.frame.projection = self.config.projection.matrix();
        self.frame.timer_text = self.state.timer.readout(now);
    }
}
