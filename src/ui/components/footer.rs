use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use edtable_app::effect::CursorStyle;
use edtable_app::ports::HostView;
use edtable_app::state::TableState;

use super::atoms::key_chip;
use super::molecules::hint_line;

const TABLE_HINTS: &[(&str, &str)] = &[
    ("h/l", "Scroll"),
    ("0/$", "Home/End"),
    ("r", "Reset widths"),
    ("q", "Quit"),
];

const RESIZE_HINTS: &[(&str, &str)] = &[("drag", "Resize column"), ("release", "Apply")];

pub struct Footer;

impl Footer {
    pub fn render(frame: &mut Frame, area: Rect, state: &TableState, host: &HostView) {
        frame.render_widget(Paragraph::new(Self::build_line(state, host)), area);
    }

    /// Resize hints replace the table hints while the pointer sits on a
    /// column edge or a drag is in progress.
    fn build_line(state: &TableState, host: &HostView) -> Line<'static> {
        if host.cursor != CursorStyle::ColResize {
            return hint_line(TABLE_HINTS);
        }

        let chip = if state.resize.is_dragging() {
            key_chip("DRAG")
        } else {
            key_chip("RESIZE")
        };
        let mut spans = vec![chip, Span::raw(" ")];
        spans.extend(hint_line(RESIZE_HINTS).spans);
        Line::from(spans)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use edtable_app::test_support::{instance_spec, mounted_state};
    use std::time::Instant;

    #[test]
    fn idle_footer_lists_table_keys() {
        let state = mounted_state(instance_spec(), 80, Instant::now());

        let line = Footer::build_line(&state, &HostView::default());

        assert_eq!(
            line.to_string(),
            "h/l Scroll  0/$ Home/End  r Reset widths  q Quit"
        );
    }

    #[test]
    fn resize_cursor_switches_to_resize_hints() {
        let state = mounted_state(instance_spec(), 80, Instant::now());
        let host = HostView {
            cursor: CursorStyle::ColResize,
            ..HostView::default()
        };

        let line = Footer::build_line(&state, &host);

        assert_eq!(
            line.to_string(),
            " RESIZE  drag Resize column  release Apply"
        );
    }
}
