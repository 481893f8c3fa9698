//! Pure functions for calculating timer deadlines.
//!
//! The UI layer sleeps until the returned deadline and then dispatches
//! `Action::Tick`.

use std::time::Instant;

use crate::state::TableState;

/// Earliest pending timer: the scroll throttle's trailing edge or the next
/// cursor watchdog check. `None` means wait for input indefinitely.
pub fn next_deadline(state: &TableState) -> Option<Instant> {
    min_instant(state.fixed.pending_deadline(), state.watchdog.deadline())
}

fn min_instant(a: Option<Instant>, b: Option<Instant>) -> Option<Instant> {
    match (a, b) {
        (Some(a), Some(b)) => Some(a.min(b)),
        (a, None) => a,
        (None, b) => b,
    }
}
