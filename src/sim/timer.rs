//! Run timer: Idle -> Running -> Finished
//!
//! Timestamps are host seconds (e.g. `performance.now() / 1000`).

use serde::{Deserialize, Serialize};

/// State of the timed run
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub enum RunTimer {
    /// No run in progress and nothing recorded
    #[default]
    Idle,
    /// Clock running since `start`
    Running { start: f64 },
    /// All checkpoints cleared; duration frozen
    Finished { duration: f64 },
}

/// A transition that happened this tick
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TimerEvent {
    Started { at: f64 },
    Finished { duration: f64 },
}

impl RunTimer {
    /// Advance the state machine from this tick's observations
    pub fn observe(&mut self, now: f64, moving: bool, targets_remaining: usize) -> Option<TimerEvent> {
        match *self {
            RunTimer::Idle if moving && targets_remaining > 0 => {
                *self = RunTimer::Running { start: now };
                log::info!("Run started");
                Some(TimerEvent::Started { at: now })
            }
            RunTimer::Running { start } if targets_remaining == 0 => {
                let duration = (now - start).max(0.0);
                *self = RunTimer::Finished { duration };
                log::info!("Run finished in {:.2}s", duration);
                Some(TimerEvent::Finished { duration })
            }
            _ => None,
        }
    }

    /// Back to Idle (world reset)
    pub fn reset(&mut self) {
        *self = RunTimer::Idle;
    }

    /// Seconds to display at `now`
    pub fn elapsed(&self, now: f64) -> f64 {
        match *self {
            RunTimer::Idle => 0.0,
            RunTimer::Running { start } => (now - start).max(0.0),
            RunTimer::Finished { duration } => duration,
        }
    }

    pub fn is_running(&self) -> bool {
        matches!(self, RunTimer::Running { .. })
    }

    pub fn is_finished(&self) -> bool {
        matches!(self, RunTimer::Finished { .. })
    }

    /// HUD text, e.g. `Time: 12.34s`
    pub fn readout(&self, now: f64) -> String {
        format_readout(self.elapsed(now))
    }
}

pub fn format_readout(seconds: f64) -> String {
    format!("Time: {:.2}s", seconds)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_idle_shows_zero() {
        let timer = RunTimer::default();
        assert_eq!(timer.readout(123.0), "Time: 0.00s");
    }

    #[test]
    fn test_does_not_start_while_still() {
        let mut timer = RunTimer::Idle;
        assert_eq!(timer.observe(1.0, false, 5), None);
        assert_eq!(timer, RunTimer::Idle);
    }

    #[test]
    fn test_does_not_start_without_targets() {
        let mut timer = RunTimer::Idle;
        assert_eq!(timer.observe(1.0, true, 0), None);
        assert_eq!(timer, RunTimer::Idle);
    }

    #[test]
    fn test_full_run() {
        let mut timer = RunTimer::Idle;
        assert_eq!(timer.observe(2.0, true, 5), Some(TimerEvent::Started { at: 2.0 }));
        assert_eq!(timer.observe(3.0, true, 3), None);
        assert!((timer.elapsed(3.5) - 1.5).abs() < 1e-9);

        assert_eq!(
            timer.observe(12.25, true, 0),
            Some(TimerEvent::Finished { duration: 10.25 })
        );
        assert!(timer.is_finished());
        assert_eq!(timer.readout(99.0), "Time: 10.25s");
        // Frozen: later observations change nothing
        assert_eq!(timer.observe(50.0, true, 0), None);
        assert_eq!(timer.elapsed(1000.0), 10.25);
    }

    #[test]
    fn test_reset_clears_finished() {
        let mut timer = RunTimer::Finished { duration: 4.0 };
        timer.reset();
        assert_eq!(timer, RunTimer::Idle);
        assert_eq!(timer.elapsed(10.0), 0.0);
    }

    #[test]
    fn test_readout_rounds_to_two_places() {
        assert_eq!(format_readout(1.006), "Time: 1.01s");
        assert_eq!(format_readout(0.0), "Time: 0.00s");
    }

    proptest! {
        #[test]
        fn prop_elapsed_monotonic_while_running(
            start in 0.0f64..1e5,
            steps in prop::collection::vec(0.0f64..1.0, 1..50),
        ) {
            let mut timer = RunTimer::Idle;
            timer.observe(start, true, 3);
            let mut now = start;
            let mut last = timer.elapsed(now);
            for step in steps {
                now += step;
                timer.observe(now, true, 3);
                let elapsed = timer.elapsed(now);
                prop_assert!(elapsed >= last);
                last = elapsed;
            }
        }
    }
}
