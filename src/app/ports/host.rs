use crate::effect::CursorStyle;
use crate::fixed_columns::{FixedOverlays, OverlayState};
use edtable_domain::FixedSide;

/// What the host currently shows, as last set through [`HostSurface`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HostView {
    pub cursor: CursorStyle,
    pub user_select: bool,
    pub native_selection: bool,
    /// Left edge of the drag guide relative to the table, when shown.
    pub resize_proxy: Option<f64>,
    pub drag_listeners: bool,
    pub overlays: FixedOverlays,
}

impl Default for HostView {
    fn default() -> Self {
        Self {
            cursor: CursorStyle::Default,
            user_select: true,
            native_selection: true,
            resize_proxy: None,
            drag_listeners: false,
            overlays: FixedOverlays::default(),
        }
    }
}

/// Effect sink for everything outside the table's own render.
#[cfg_attr(test, mockall::automock)]
pub trait HostSurface {
    fn set_cursor(&mut self, cursor: CursorStyle);

    fn set_user_select(&mut self, enabled: bool);

    fn set_native_selection(&mut self, enabled: bool);

    fn show_resize_proxy(&mut self, left: f64);

    fn hide_resize_proxy(&mut self);

    fn set_drag_listeners(&mut self, installed: bool);

    fn set_fixed_overlay(&mut self, side: FixedSide, overlay: OverlayState);

    fn view(&self) -> HostView;
}
