//! Executes side effects returned by the reducer.
//!
//! Host effects are applied in order. `Render` draws through the renderer and
//! reports a changed table rectangle back as `Action::TableMeasured`, which
//! the caller feeds into the reducer.

use color_eyre::eyre::Result;

use crate::action::Action;
use crate::effect::Effect;
use crate::ports::{HostSurface, Renderer};
use crate::state::TableState;

pub fn run_effects(
    effects: Vec<Effect>,
    host: &mut dyn HostSurface,
    renderer: &mut dyn Renderer,
    state: &TableState,
) -> Result<Vec<Action>> {
    let mut follow_ups = Vec::new();
    for effect in effects {
        run_single(effect, host, renderer, state, &mut follow_ups)?;
    }
    Ok(follow_ups)
}

fn run_single(
    effect: Effect,
    host: &mut dyn HostSurface,
    renderer: &mut dyn Renderer,
    state: &TableState,
    follow_ups: &mut Vec<Action>,
) -> Result<()> {
    log::trace!("applying {effect:?}");

    match effect {
        Effect::Sequence(seq_effects) => {
            for seq_effect in seq_effects {
                run_single(seq_effect, host, renderer, state, follow_ups)?;
            }
        }
        Effect::Render => {
            let output = renderer.draw(state, &host.view())?;
            let measured = Action::TableMeasured(output.table_area);
            if state.area != Some(output.table_area) && !follow_ups.contains(&measured) {
                follow_ups.push(measured);
            }
        }
        Effect::SetCursor(cursor) => host.set_cursor(cursor),
        Effect::SetUserSelect(enabled) => host.set_user_select(enabled),
        Effect::SetNativeSelection(enabled) => host.set_native_selection(enabled),
        Effect::ShowResizeProxy { left } => host.show_resize_proxy(left),
        Effect::HideResizeProxy => host.hide_resize_proxy(),
        Effect::InstallDragListeners => host.set_drag_listeners(true),
        Effect::RemoveDragListeners => host.set_drag_listeners(false),
        Effect::SetFixedOverlay { side, overlay } => host.set_fixed_overlay(side, overlay),
    }
    Ok(())
}
