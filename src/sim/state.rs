//! World state: everything one tick mutates

use super::camera::Camera;
use super::targets::TargetRegistry;
use super::timer::RunTimer;
use crate::config::WorldConfig;

/// Camera, live checkpoints and run timer, owned by the frame loop
#[derive(Debug, Clone, PartialEq)]
pub struct WorldState {
    pub camera: Camera,
    pub targets: TargetRegistry,
    pub timer: RunTimer,
    /// Ticks since the orchestrator started (survives resets)
    pub time_ticks: u64,
    /// Number of bounds-triggered resets so far
    pub resets: u32,
}

impl WorldState {
    pub fn new(config: &WorldConfig) -> Self {
        let mut targets = TargetRegistry::new();
        targets.initialize(config.canonical_targets());
        Self {
            camera: Camera::from_pose(&config.camera, config.steering),
            targets,
            timer: RunTimer::Idle,
            time_ticks: 0,
            resets: 0,
        }
    }

    /// Restore camera, checkpoints and timer together
    pub fn reset(&mut self, config: &WorldConfig) {
        self.camera = Camera::from_pose(&config.camera, config.steering);
        self.targets.initialize(config.canonical_targets());
        self.timer.reset();
        self.resets += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;

    #[test]
    fn test_new_world() {
        let config = WorldConfig::default();
        let state = WorldState::new(&config);
        assert_eq!(state.targets.len(), 5);
        assert_eq!(state.timer, RunTimer::Idle);
        assert_eq!(state.camera.position, Vec3::new(0.0, 5.0, 75.0));
        assert_eq!(state.camera.velocity, Vec3::ZERO);
    }

    #[test]
    fn test_reset_restores_everything() {
        let config = WorldConfig::default();
        let mut state = WorldState::new(&config);
        state.camera.position = Vec3::new(1.0, 2.0, 3.0);
        state.camera.velocity = Vec3::ONE;
        state.camera.roll_deg = 40.0;
        state.targets.remove_where(|t| t.id < 4);
        state.timer = RunTimer::Running { start: 1.0 };

        state.reset(&config);
        assert_eq!(state, WorldState { resets: 1, ..WorldState::new(&config) });
    }
}
