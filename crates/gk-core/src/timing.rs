//! Lightweight elapsed-time measurement.
//!
//! Reports print how long an algorithm ran. Timers can additionally be
//! silenced globally so tests and scripted runs produce stable output.

use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Instant;

static DISABLED: AtomicBool = AtomicBool::new(false);

/// Disable performance timing globally.
pub fn disable_timing() {
    DISABLED.store(true, Ordering::Relaxed);
}

/// Check if timing is enabled.
pub fn is_enabled() -> bool {
    !DISABLED.load(Ordering::Relaxed) && std::env::var("GK_NO_TIMING").is_err()
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

    /// Label given at construction.
    pub fn label(&self) -> &'static str {
        self.label
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
}
