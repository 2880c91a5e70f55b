//! Per-tick simulation step
//!
//! Order within a tick: camera integration, checkpoint collisions, timer
//! transitions, then the bounds check. A bounds reset overrides everything
//! the earlier steps did to the state.

use super::bounds::check_bounds;
use super::collision::check_collisions;
use super::input::InputState;
use super::state::WorldState;
use super::targets::Target;
use super::timer::TimerEvent;
use crate::config::WorldConfig;

/// What happened during one tick
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TickReport {
    /// Checkpoints cleared this tick
    pub cleared: Vec<Target>,
    /// Timer transition observed before any reset
    pub timer_event: Option<TimerEvent>,
    /// The camera left the bounds and the world was reset
    pub reset: bool,
}

/// Advance the world by one tick. `now` is host time in seconds.
pub fn tick(state: &mut WorldState, input: &InputState, now: f64, config: &WorldConfig) -> TickReport {
    state.time_ticks += 1;

    state
        .camera
        .integrate(input, config.steering, config.propulsion, &config.flight);

    let cleared = check_collisions(
        state.camera.position,
        &mut state.targets,
        config.collision_radius,
    );

    let timer_event = state
        .timer
        .observe(now, state.camera.is_moving(), state.targets.len());

    let reset = check_bounds(state.camera.position, &config.bounds);
    if reset {
        log::info!(
            "Left the world at ({:.1}, {:.1}, {:.1}); resetting",
            state.camera.position.x,
            state.camera.position.y,
            state.camera.position.z
        );
        state.reset(config);
    }

    log::debug!(
        "tick {}: pos={:?} speed={:.3} targets={}",
        state.time_ticks,
        state.camera.position,
        state.camera.velocity.length(),
        state.targets.len()
    );

    TickReport {
        cleared,
        timer_event,
        reset,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TargetLayout;
    use crate::sim::input::keys;
    use crate::sim::timer::RunTimer;
    use glam::Vec3;

    const TICK_SECS: f64 = 1.0 / 60.0;

    fn thrust() -> InputState {
        InputState::with_pressed([keys::THRUST])
    }

    #[test]
    fn test_idle_tick_changes_nothing() {
        let config = WorldConfig::default();
        let mut state = WorldState::new(&config);
        let report = tick(&mut state, &InputState::new(), 0.0, &config);
        assert_eq!(report, TickReport::default());
        assert_eq!(state.camera.position, config.camera.position);
        assert_eq!(state.timer, RunTimer::Idle);
        assert_eq!(state.time_ticks, 1);
    }

    #[test]
    fn test_first_checkpoint_cleared() {
        let mut config = WorldConfig::default();
        // Line up with checkpoint 1 at (15, 6, 50)
        config.camera.position = Vec3::new(15.0, 6.0, 60.0);
        let mut state = WorldState::new(&config);

        let mut started_on = None;
        let mut cleared = Vec::new();
        for n in 1..=300u32 {
            let now = n as f64 * TICK_SECS;
            let report = tick(&mut state, &thrust(), now, &config);
            if let Some(TimerEvent::Started { at }) = report.timer_event {
                started_on = Some((n, at));
            }
            cleared.extend(report.cleared);
            if state.targets.len() < 5 {
                break;
            }
        }

        assert_eq!(started_on, Some((1, TICK_SECS)));
        assert_eq!(state.targets.len(), 4);
        assert_eq!(cleared.len(), 1);
        assert_eq!(cleared[0].id, 1);
        assert!(!state.targets.contains(1));
        assert!(state.timer.is_running());
    }

    #[test]
    fn test_finish_on_last_checkpoint() {
        let mut config = WorldConfig::default();
        config.targets = TargetLayout::Fixed {
            centers: [60.0, 40.0, 20.0, 0.0, -20.0]
                .iter()
                .map(|z| Vec3::new(0.0, 5.0, *z))
                .collect(),
        };
        let mut state = WorldState::new(&config);

        let mut finished_on = None;
        let mut n = 0u32;
        while finished_on.is_none() && n < 2000 {
            n += 1;
            let remaining_before = state.targets.len();
            let report = tick(&mut state, &thrust(), n as f64 * TICK_SECS, &config);
            if let Some(TimerEvent::Finished { duration }) = report.timer_event {
                assert!(remaining_before > 0);
                assert!(state.targets.is_empty());
                finished_on = Some(duration);
            }
        }

        let duration = finished_on.expect("run never finished");
        let expected = (n - 1) as f64 * TICK_SECS;
        assert!((duration - expected).abs() < 1e-9);

        // Frozen while still flying
        for extra in 1..=10u32 {
            let now = (n + extra) as f64 * TICK_SECS;
            tick(&mut state, &thrust(), now, &config);
            assert_eq!(state.timer.elapsed(now), duration);
        }
    }

    #[test]
    fn test_leaving_bounds_resets_world() {
        let mut config = WorldConfig::default();
        config.camera.position = Vec3::new(0.0, 5.0, -200.0);
        config.targets = TargetLayout::Fixed {
            centers: vec![Vec3::new(0.0, 5.0, -202.0), Vec3::new(50.0, 50.0, 50.0)],
        };
        let mut state = WorldState::new(&config);

        let mut saw_clear = false;
        let mut reset_report = None;
        for n in 1..=2000u32 {
            let report = tick(&mut state, &thrust(), n as f64 * TICK_SECS, &config);
            saw_clear |= !report.cleared.is_empty();
            if report.reset {
                reset_report = Some(report);
                break;
            }
            assert_eq!(state.resets, 0);
        }

        assert!(saw_clear);
        assert!(reset_report.is_some());
        // Same tick: everything restored together
        assert_eq!(state.camera.position, config.camera.position);
        assert_eq!(state.camera.velocity, Vec3::ZERO);
        assert_eq!(state.targets.len(), 2);
        assert_eq!(state.timer, RunTimer::Idle);
        assert_eq!(state.resets, 1);
    }

    #[test]
    fn test_reset_overrides_timer_start() {
        let mut config = WorldConfig::default();
        // On the far face: the first thrust tick starts the timer and exits
        config.camera.position = Vec3::new(0.0, 5.0, -205.0);
        let mut state = WorldState::new(&config);

        let report = tick(&mut state, &thrust(), 1.0, &config);
        assert!(matches!(report.timer_event, Some(TimerEvent::Started { .. })));
        assert!(report.reset);
        assert_eq!(state.timer, RunTimer::Idle);
        assert_eq!(state.camera.position, config.camera.position);
    }

    #[test]
    fn test_displaced_camera_snaps_back_next_tick() {
        let config = WorldConfig::default();
        let mut state = WorldState::new(&config);
        state.targets.remove_where(|t| t.id == 3);
        state.camera.position = Vec3::new(0.0, 150.0, 0.0);

        let report = tick(&mut state, &InputState::new(), 0.5, &config);
        assert!(report.reset);
        assert_eq!(state.camera.position, config.camera.position);
        assert_eq!(state.targets.live_targets(), config.canonical_targets().as_slice());
    }

    #[test]
    fn test_removed_targets_stay_removed() {
        let mut config = WorldConfig::default();
        config.camera.position = Vec3::new(15.0, 6.0, 60.0);
        let mut state = WorldState::new(&config);
        let mut removed: Vec<u32> = Vec::new();

        for n in 1..=400u32 {
            let report = tick(&mut state, &thrust(), n as f64 * TICK_SECS, &config);
            if report.reset {
                break;
            }
            removed.extend(report.cleared.iter().map(|t| t.id));
            for id in &removed {
                assert!(!state.targets.contains(*id));
            }
        }
        assert!(!removed.is_empty());
    }
}
