//! Leading + trailing edge throttle driven by caller-supplied time.
//!
//! The first call in a window fires immediately; calls inside the window
//! collapse into one trailing run at the end of the window.

use std::time::{Duration, Instant};

#[derive(Debug, Clone)]
pub struct Throttle {
    interval: Duration,
    last_fired: Option<Instant>,
    pending: bool,
}

impl Throttle {
    pub const fn new(interval: Duration) -> Self {
        Self {
            interval,
            last_fired: None,
            pending: false,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Returns true when the call should run now; otherwise it is deferred
    /// to the trailing edge.
    pub fn hit(&mut self, now: Instant) -> bool {
        match self.last_fired {
            Some(last) if now.duration_since(last) < self.interval => {
                self.pending = true;
                false
            }
            _ => {
                self.last_fired = Some(now);
                self.pending = false;
                true
            }
        }
    }

    pub fn trailing_deadline(&self) -> Option<Instant> {
        if !self.pending {
            return None;
        }
        self.last_fired.map(|last| last + self.interval)
    }

    /// Consumes a due trailing call.
    pub fn take_due(&mut self, now: Instant) -> bool {
        match self.trailing_deadline() {
            Some(deadline) if now >= deadline => {
                self.pending = false;
                self.last_fired = Some(now);
                true
            }
            _ => false,
        }
    }

    pub fn reset(&mut self) {
        self.last_fired = None;
        self.pending = false;
    }
}
