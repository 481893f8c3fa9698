use ratatui::Frame;
use ratatui::layout::{Constraint, Layout};

use edtable_app::ports::{HostView, RenderOutput};
use edtable_app::state::TableState;

use super::footer::Footer;
use super::header::Header;
use super::scroll_indicator::render_horizontal_scroll_indicator;
use super::table::TablePane;

pub struct MainLayout;

impl MainLayout {
    pub fn render(frame: &mut Frame, state: &TableState, host: &HostView) -> RenderOutput {
        let area = frame.area();

        let [header_area, table_area, scroll_area, footer_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Min(3),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .areas(area);

        Header::render(frame, header_area, state);
        let table_area = TablePane::render(frame, table_area, state, host);
        render_horizontal_scroll_indicator(frame, scroll_area, state);
        Footer::render(frame, footer_area, state, host);

        RenderOutput { table_area }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use edtable_app::area::TableArea;
    use edtable_app::test_support::instance_spec;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    #[test]
    fn table_sits_between_header_and_scroll_bar() {
        let state = TableState::new(instance_spec());
        let mut terminal = Terminal::new(TestBackend::new(82, 12)).unwrap();
        let mut output = RenderOutput::default();

        terminal
            .draw(|frame| output = MainLayout::render(frame, &state, &HostView::default()))
            .unwrap();

        assert_eq!(
            output.table_area,
            TableArea {
                x: 1,
                y: 2,
                width: 80,
                height: 7,
                cell_px: 8.0
            }
        );
    }
}
