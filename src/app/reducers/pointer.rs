//! Pointer sub-reducer: header hover, resize drag, release.

use std::time::Instant;

use crate::action::Action;
use crate::area::PointerRegion;
use crate::effect::Effect;
use crate::reducers::helpers::settle_layout;
use crate::resize::ResizeOutcome;
use crate::state::{PointerState, TableState};

pub fn reduce_pointer(
    state: &mut TableState,
    action: &Action,
    _now: Instant,
) -> Option<Vec<Effect>> {
    match action {
        Action::PointerMove { x, region } => {
            state.pointer = PointerState {
                x: *x,
                region: *region,
            };
            if state.resize.is_dragging() {
                return Some(state.resize.drag_move(*x));
            }
            if *region != PointerRegion::Header {
                return Some(vec![]);
            }
            let geometry = state.geometry();
            Some(state.resize.hover(geometry.hit(*x), *x))
        }
        Action::PointerDown { x, region } => {
            state.pointer = PointerState {
                x: *x,
                region: *region,
            };
            if *region != PointerRegion::Header {
                return Some(vec![]);
            }
            let geometry = state.geometry();
            let table_left = state.table_left();
            Some(state.resize.pointer_down(geometry.hit(*x), *x, table_left))
        }
        Action::DragMove { x } => {
            state.pointer.x = *x;
            Some(state.resize.drag_move(*x))
        }
        Action::PointerUp { x } => {
            state.pointer.x = *x;
            if !state.resize.is_dragging() {
                return Some(vec![]);
            }
            // The release position is the final drag position.
            state.resize.drag_move(*x);

            let table_width = state.viewport_width();
            let release = state.resize.pointer_up(&mut state.sizes, table_width);
            let mut effects = release.effects;
            if matches!(release.outcome, Some(ResizeOutcome::Applied { .. })) {
                effects.extend(settle_layout(state));
            }
            state.last_resize = release.outcome;
            Some(effects)
        }
        _ => None,
    }
}
