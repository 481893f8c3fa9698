//! Side effects returned by the reducer, applied to the host by `run_effects`.

use edtable_domain::FixedSide;

use crate::fixed_columns::OverlayState;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CursorStyle {
    #[default]
    Default,
    ColResize,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    Render,

    SetCursor(CursorStyle),
    /// Text selection on the page body.
    SetUserSelect(bool),
    /// Native selectstart / dragstart handling while a drag is active.
    SetNativeSelection(bool),

    /// Shows the drag guide (if hidden) at `left`, relative to the table.
    ShowResizeProxy {
        left: f64,
    },
    HideResizeProxy,

    /// Route pointer move / release to the drag gesture until removed.
    InstallDragListeners,
    RemoveDragListeners,

    SetFixedOverlay {
        side: FixedSide,
        overlay: OverlayState,
    },

    /// Applied in order
    Sequence(Vec<Effect>),
}

impl Effect {
    pub fn is_render(&self) -> bool {
        matches!(self, Effect::Render)
    }
}
