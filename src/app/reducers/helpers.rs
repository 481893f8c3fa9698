use crate::effect::Effect;
use crate::state::TableState;

/// Re-clamps the scroll offset and recomputes overlays after widths or the
/// viewport changed. Nothing reaches the host before the table is mounted.
pub fn settle_layout(state: &mut TableState) -> Vec<Effect> {
    state.clamp_scroll();
    if !state.mounted {
        return vec![];
    }
    let metrics = state.scroll_metrics();
    let pinned = state.pinned_widths();
    state.fixed.recompute(metrics, pinned)
}
