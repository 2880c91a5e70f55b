//! Host time sources

/// Seconds from the browser's high-resolution clock
#[cfg(target_arch = "wasm32")]
pub fn now_secs() -> f64 {
    web_sys::window()
        .and_then(|w| w.performance())
        .map(|p| p.now() / 1000.0)
        .unwrap_or(0.0)
}

/// Seconds since the first call in this process
#[cfg(not(target_arch = "wasm32"))]
pub fn now_secs() -> f64 {
    use std::sync::OnceLock;
    use std::time::Instant;

    static EPOCH: OnceLock<Instant> = OnceLock::new();
    EPOCH.get_or_init(Instant::now).elapsed().as_secs_f64()
}

/// Fixed-rate clock for headless runs and replays
#[derive(Debug, Clone)]
pub struct SyntheticClock {
    tick_secs: f64,
    ticks: u64,
}

impl SyntheticClock {
    pub fn new(rate_hz: f64) -> Self {
        Self {
            tick_secs: 1.0 / rate_hz.max(1.0),
            ticks: 0,
        }
    }

    /// Step one tick and return the new time
    pub fn advance(&mut self) -> f64 {
        self.ticks += 1;
        self.now()
    }

    pub fn now(&self) -> f64 {
        self.ticks as f64 * self.tick_secs
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }
}
