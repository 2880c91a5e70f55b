//! Platform abstraction layer
//!
//! Handles browser/native differences for:
//! - Time (host clock, synthetic fixed-rate clock)
//! - Logging setup
//! - The JavaScript-facing world handle (web only)

pub mod clock;
#[cfg(target_arch = "wasm32")]
pub mod web;

pub use clock::{SyntheticClock, now_secs};

/// Install the logger for this platform
#[cfg(target_arch = "wasm32")]
pub fn init_logging() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Info).is_err() {
        web_sys::console::warn_1(&"Logger already initialised".into());
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn init_logging() {
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .try_init();
}
