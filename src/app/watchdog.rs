//! Recurring check that resets the resize cursor once the pointer has left
//! the table. Started when the table mounts, cancelled on teardown.

use std::time::{Duration, Instant};

pub const WATCHDOG_INTERVAL: Duration = Duration::from_millis(500);

#[derive(Debug, Clone, Default)]
pub struct CursorWatchdog {
    next_check: Option<Instant>,
}

impl CursorWatchdog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn start(&mut self, now: Instant) {
        self.next_check = Some(now + WATCHDOG_INTERVAL);
    }

    pub fn cancel(&mut self) {
        self.next_check = None;
    }

    pub fn is_active(&self) -> bool {
        self.next_check.is_some()
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.next_check
    }

    /// True when a check is due; the next one is scheduled from `now`.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.next_check {
            Some(at) if now >= at => {
                self.next_check = Some(now + WATCHDOG_INTERVAL);
                true
            }
            _ => false,
        }
    }
}
