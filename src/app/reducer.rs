//! Pure reducer: state transitions only, no I/O.
//!
//! # Purity Rules
//!
//! The reducer MUST NOT:
//! - Call `Instant::now()` (time is passed as `now` parameter)
//! - Perform I/O operations
//! - Touch the host directly (host changes are returned as `Effect`s)
//!
//! This keeps the reducer testable without mocking time or I/O.

use std::time::Instant;

use crate::action::Action;
use crate::area::PointerRegion;
use crate::effect::{CursorStyle, Effect};
use crate::reducers::{reduce_layout, reduce_pointer, reduce_scroll, settle_layout};
use crate::state::TableState;

pub fn reduce(state: &mut TableState, action: Action, now: Instant) -> Vec<Effect> {
    // Tick only redraws when it changed something on the host
    let should_mark_dirty = !matches!(action, Action::None | Action::Render | Action::Tick);

    let effects = reduce_inner(state, action, now);

    if should_mark_dirty || (!effects.is_empty() && !effects.iter().all(Effect::is_render)) {
        state.mark_dirty();
    }

    effects
}

fn reduce_inner(state: &mut TableState, action: Action, now: Instant) -> Vec<Effect> {
    if let Some(effects) = reduce_layout(state, &action, now) {
        return effects;
    }
    if let Some(effects) = reduce_pointer(state, &action, now) {
        return effects;
    }
    if let Some(effects) = reduce_scroll(state, &action, now) {
        return effects;
    }

    match action {
        Action::None => vec![],
        Action::Quit => {
            state.should_quit = true;
            vec![]
        }
        Action::Resize(w, h) => {
            state.terminal_size = (w, h);
            vec![]
        }
        Action::Render => {
            state.clear_dirty();
            vec![Effect::Render]
        }
        Action::Mount => {
            state.mounted = true;
            state.watchdog.start(now);
            settle_layout(state)
        }
        Action::Unmount => {
            state.mounted = false;
            state.watchdog.cancel();
            vec![]
        }
        Action::Tick => {
            let mut effects = Vec::new();
            if state.watchdog.poll(now) && state.pointer.region == PointerRegion::Outside {
                // A drag keeps going with the default cursor.
                if state.resize.is_dragging() {
                    effects.push(Effect::SetCursor(CursorStyle::Default));
                } else {
                    effects.extend(state.resize.disarm());
                }
            }
            let metrics = state.scroll_metrics();
            let pinned = state.pinned_widths();
            effects.extend(state.fixed.flush_due(now, metrics, pinned));
            effects
        }
        // Handled by sub-reducers
        Action::ColumnsChanged(_)
        | Action::TableMeasured(_)
        | Action::ResetWidths
        | Action::PointerMove { .. }
        | Action::PointerDown { .. }
        | Action::DragMove { .. }
        | Action::PointerUp { .. }
        | Action::ScrollBy(_)
        | Action::ScrollHome
        | Action::ScrollEnd => vec![],
    }
}
