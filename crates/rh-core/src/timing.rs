//! Lightweight wall-clock timing.
//!
//! Timers are inert unless timing is enabled, either programmatically or
//! through the `RH_TIMING` environment variable. Results are reported as
//! `tracing` events on the `rh_timing` target.

use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Instant;

/// Environment variable that turns timing on for the whole process.
pub const TIMING_ENV: &str = "RH_TIMING";

static ENABLED: AtomicBool = AtomicBool::new(false);

/// Enable performance timing globally.
pub fn enable_timing() {
    ENABLED.store(true, Ordering::Relaxed);
}

/// Check if timing is enabled.
pub fn is_enabled() -> bool {
    ENABLED.load(Ordering::Relaxed) || std::env::var(TIMING_ENV).is_ok()
}

/// A simple timer that measures elapsed time.
pub struct Timer {
    label: &'static str,
    start: Instant,
    enabled: bool,
}

impl Timer {
    /// Create and start a new timer with the given label.
    pub fn start(label: &'static str) -> Self {
        Self {
            label,
            start: Instant::now(),
            enabled: is_enabled(),
        }
    }

    /// Stop the timer and return elapsed time in seconds.
    /// If timing is disabled, returns None.
    pub fn stop(self) -> Option<f64> {
        if self.enabled {
            Some(self.start.elapsed().as_secs_f64())
        } else {
            None
        }
    }

    /// Stop the timer and emit the result if enabled.
    pub fn stop_and_report(self) -> Option<f64> {
        let label = self.label;
        let elapsed = self.stop()?;
        tracing::info!(target: "rh_timing", label, elapsed_s = elapsed, "timing");
        Some(elapsed)
    }
}
