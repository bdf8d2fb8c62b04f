//! Wall-clock abstraction.
//!
//! The loop measures elapsed time and sleeps through this trait so flush
//! timing is testable without real waiting.

use std::time::{Duration, Instant};

/// Monotonic time source plus the voluntary suspend between cycles.
pub trait Clock {
    /// Time elapsed since the clock was created.
    fn monotonic(&mut self) -> Duration;

    /// Suspend the calling thread for `duration`.
    fn sleep(&mut self, duration: Duration);
}

/// Real clock backed by [`Instant`] and [`std::thread::sleep`].
#[derive(Debug)]
pub struct SystemClock {
    start: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            start: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn monotonic(&mut self) -> Duration {
        self.start.elapsed()
    }

    fn sleep(&mut self, duration: Duration) {
        std::thread::sleep(duration);
    }
}
