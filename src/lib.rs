//! Ring Runner - a checkpoint flight toy
//!
//! Core modules:
//! - `sim`: Deterministic per-tick simulation (camera, checkpoints, timer, bounds)
//! - `game`: Frame orchestration, from input snapshot to renderer hand-off
//! - `config`: Data-driven world configuration and presets
//! - `renderer`: Geometry and matrix hand-off to an external renderer
//! - `platform`: Browser/native host bindings

pub mod config;
pub mod game;
pub mod platform;
pub mod renderer;
pub mod sim;

pub use config::{ConfigError, WorldConfig, WorldPreset};
pub use game::FrameOrchestrator;
pub use sim::{InputState, RunTimer, TickReport, WorldState};

use glam::Vec3;

/// Gameplay constants of the glider world.
///
/// Motion constants are per tick, not per second: the host drives one tick
/// per display refresh.
pub mod consts {
    /// Velocity gained per tick of thrust, along forward
    pub const ACCELERATION: f32 = 0.01;
    /// Velocity retained per tick
    pub const FRICTION: f32 = 0.98;
    /// Pitch rotation about the banked up vector (degrees per tick)
    pub const ROTATION_SPEED_DEG: f32 = 2.0;
    /// Roll change (degrees per tick)
    pub const ROLL_SPEED_DEG: f32 = 2.0;
    /// Yaw/pitch look rate for the yaw-pitch camera (degrees per tick)
    pub const TURN_RATE_DEG: f32 = 2.0;
    /// Displacement per tick for direct (free camera) movement
    pub const MOVE_SPEED: f32 = 0.5;
    /// Pitch clamp for the yaw-pitch camera
    pub const PITCH_LIMIT_DEG: f32 = 89.0;

    /// Distance below which the camera clears a checkpoint
    pub const COLLISION_RADIUS: f32 = 3.0;
    /// Checkpoint sphere radius
    pub const TARGET_RADIUS: f32 = 2.0;

    /// Sky box extents (also the world bounds)
    pub const SKYBOX_SIZE: f32 = 410.0;
    pub const SKYBOX_Y_MIN: f32 = -5.0;
    pub const SKYBOX_Y_MAX: f32 = 100.0;

    /// Projection defaults
    pub const FOVY_DEG: f32 = 45.0;
    pub const NEAR: f32 = 0.3;
    pub const FAR: f32 = 500.0;

    /// Start pose
    pub const START_POSITION: [f32; 3] = [0.0, 5.0, 75.0];
    pub const START_FORWARD: [f32; 3] = [0.0, 0.0, -1.0];
    pub const START_YAW_DEG: f32 = 180.0;

    /// Canonical checkpoint centers
    pub const CHECKPOINTS: [[f32; 3]; 5] = [
        [15.0, 6.0, 50.0],
        [-9.0, 24.0, 25.0],
        [7.0, 9.0, 0.0],
        [-13.0, 20.0, -32.0],
        [11.0, 4.0, -60.0],
    ];

    /// Tolerance used for unit-length checks
    pub const UNIT_EPSILON: f32 = 1e-4;
}

/// Degrees to radians
#[inline]
pub fn deg_to_rad(deg: f32) -> f32 {
    deg * std::f32::consts::PI / 180.0
}

/// True when every component is finite
#[inline]
pub fn is_finite_vec3(v: Vec3) -> bool {
    v.x.is_finite() && v.y.is_finite() && v.z.is_finite()
}
