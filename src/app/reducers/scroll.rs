//! Scroll sub-reducer: horizontal offset and throttled overlay updates.

use std::time::Instant;

use crate::action::Action;
use crate::effect::Effect;
use crate::state::TableState;

fn scroll_to(state: &mut TableState, target: f64, now: Instant) -> Vec<Effect> {
    if !state.set_scroll_left(target) {
        return vec![];
    }
    let metrics = state.scroll_metrics();
    let pinned = state.pinned_widths();
    state.fixed.on_scroll(now, metrics, pinned)
}

pub fn reduce_scroll(
    state: &mut TableState,
    action: &Action,
    now: Instant,
) -> Option<Vec<Effect>> {
    match action {
        Action::ScrollBy(delta) => {
            let target = state.scroll_left + delta;
            Some(scroll_to(state, target, now))
        }
        Action::ScrollHome => Some(scroll_to(state, 0.0, now)),
        Action::ScrollEnd => {
            let target = state.max_scroll_left();
            Some(scroll_to(state, target, now))
        }
        _ => None,
    }
}
