//! Layout sub-reducer: column set, table measurement, width reset.

use std::time::Instant;

use edtable_domain::ColumnSizeMap;

use crate::action::Action;
use crate::allocator::allocate;
use crate::effect::Effect;
use crate::reducers::helpers::settle_layout;
use crate::state::TableState;

fn reallocate(state: &mut TableState, prior: &ColumnSizeMap) {
    if state.area.is_none() {
        return;
    }
    state.sizes = allocate(&state.columns, state.viewport_width(), prior);
}

pub fn reduce_layout(
    state: &mut TableState,
    action: &Action,
    _now: Instant,
) -> Option<Vec<Effect>> {
    match action {
        Action::ColumnsChanged(columns) => {
            state.columns = columns.clone();
            let prior = state.sizes.clone();
            reallocate(state, &prior);
            Some(settle_layout(state))
        }
        Action::TableMeasured(area) => {
            let width_changed = state
                .area
                .is_none_or(|previous| previous.width_px() != area.width_px());
            state.area = Some(*area);
            if width_changed {
                log::debug!("table measured at {}px", area.width_px());
                let prior = state.sizes.clone();
                reallocate(state, &prior);
            }
            Some(settle_layout(state))
        }
        Action::ResetWidths => {
            reallocate(state, &ColumnSizeMap::new());
            state.last_resize = None;
            Some(settle_layout(state))
        }
        _ => None,
    }
}
