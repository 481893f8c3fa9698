//! Terminal implementation of the host surface.
//!
//! A terminal has no DOM to mutate, so most host state is kept in a
//! [`HostView`] that the renderer reads on the next frame. The pointer
//! shape is the exception: terminals that understand OSC 22 switch the
//! mouse cursor immediately.

use std::io::Write;

use edtable_app::effect::CursorStyle;
use edtable_app::fixed_columns::OverlayState;
use edtable_app::ports::{HostSurface, HostView};
use edtable_domain::FixedSide;

const OSC_POINTER_COL_RESIZE: &str = "\x1b]22;col-resize\x1b\\";
const OSC_POINTER_DEFAULT: &str = "\x1b]22;default\x1b\\";

pub struct TerminalHost<W: Write> {
    view: HostView,
    writer: W,
    pointer_shapes: bool,
}

impl<W: Write> TerminalHost<W> {
    pub fn new(writer: W) -> Self {
        Self {
            view: HostView::default(),
            writer,
            pointer_shapes: false,
        }
    }

    /// Emit OSC 22 pointer-shape sequences when the cursor style changes.
    pub fn with_pointer_shapes(mut self, enabled: bool) -> Self {
        self.pointer_shapes = enabled;
        self
    }

    pub fn writer(&self) -> &W {
        &self.writer
    }

    fn write_pointer_shape(&mut self, cursor: CursorStyle) {
        let sequence = match cursor {
            CursorStyle::ColResize => OSC_POINTER_COL_RESIZE,
            CursorStyle::Default => OSC_POINTER_DEFAULT,
        };
        let written = self
            .writer
            .write_all(sequence.as_bytes())
            .and_then(|()| self.writer.flush());
        if let Err(err) = written {
            log::warn!("failed to set pointer shape: {err}");
        }
    }
}

impl<W: Write> HostSurface for TerminalHost<W> {
    fn set_cursor(&mut self, cursor: CursorStyle) {
        if self.pointer_shapes && self.view.cursor != cursor {
            self.write_pointer_shape(cursor);
        }
        self.view.cursor = cursor;
    }

    fn set_user_select(&mut self, enabled: bool) {
        self.view.user_select = enabled;
    }

    fn set_native_selection(&mut self, enabled: bool) {
        self.view.native_selection = enabled;
    }

    fn show_resize_proxy(&mut self, left: f64) {
        self.view.resize_proxy = Some(left);
    }

    fn hide_resize_proxy(&mut self) {
        self.view.resize_proxy = None;
    }

    fn set_drag_listeners(&mut self, installed: bool) {
        if self.view.drag_listeners != installed {
            log::debug!("drag listeners {}", if installed { "installed" } else { "removed" });
        }
        self.view.drag_listeners = installed;
    }

    fn set_fixed_overlay(&mut self, side: FixedSide, overlay: OverlayState) {
        match side {
            FixedSide::Left => self.view.overlays.left = overlay,
            FixedSide::Right => self.view.overlays.right = overlay,
        }
    }

    fn view(&self) -> HostView {
        self.view
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn host() -> TerminalHost<Vec<u8>> {
        TerminalHost::new(Vec::new())
    }

    #[test]
    fn starts_with_default_view() {
        assert_eq!(host().view(), HostView::default());
    }

    #[test]
    fn proxy_is_shown_and_hidden() {
        let mut host = host();

        host.show_resize_proxy(221.0);
        assert_eq!(host.view().resize_proxy, Some(221.0));

        host.hide_resize_proxy();
        assert_eq!(host.view().resize_proxy, None);
    }

    #[test]
    fn overlays_are_tracked_per_side() {
        let mut host = host();

        host.set_fixed_overlay(FixedSide::Right, OverlayState::shown(80.0));

        let view = host.view();
        assert_eq!(view.overlays.right, OverlayState::shown(80.0));
        assert_eq!(view.overlays.left, OverlayState::HIDDEN);
    }

    #[test]
    fn drag_toggles_selection_and_listeners() {
        let mut host = host();

        host.set_user_select(false);
        host.set_native_selection(false);
        host.set_drag_listeners(true);

        let view = host.view();
        assert!(!view.user_select);
        assert!(!view.native_selection);
        assert!(view.drag_listeners);
    }

    mod pointer_shapes {
        use super::*;

        #[test]
        fn disabled_by_default() {
            let mut host = host();

            host.set_cursor(CursorStyle::ColResize);

            assert!(host.writer().is_empty());
            assert_eq!(host.view().cursor, CursorStyle::ColResize);
        }

        #[test]
        fn written_only_on_change() {
            let mut host = host().with_pointer_shapes(true);

            host.set_cursor(CursorStyle::ColResize);
            host.set_cursor(CursorStyle::ColResize);
            host.set_cursor(CursorStyle::Default);

            let written = String::from_utf8(host.writer().clone()).unwrap();
            assert_eq!(
                written,
                "\x1b]22;col-resize\x1b\\\x1b]22;default\x1b\\"
            );
        }
    }
}
