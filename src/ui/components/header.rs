use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use edtable_app::resize::ResizeOutcome;
use edtable_app::state::TableState;

use crate::theme::Theme;

pub struct Header;

impl Header {
    pub fn render(frame: &mut Frame, area: Rect, state: &TableState) {
        frame.render_widget(Paragraph::new(Self::build_line(state)), area);
    }

    fn build_line(state: &TableState) -> Line<'static> {
        let muted = Style::default().fg(Theme::TEXT_MUTED);
        let mut spans = vec![
            Span::styled(state.title.clone(), Style::default().fg(Theme::TEXT_ACCENT)),
            Span::styled(" | ", muted),
            Span::raw(format!("{} columns", state.columns.len())),
            Span::styled(" | ", muted),
            Span::raw(format!("{}px", state.content_width())),
        ];

        if state.max_scroll_left() > 0.0 {
            spans.push(Span::styled(" | ", muted));
            spans.push(Span::raw(format!(
                "scroll {}/{}",
                state.scroll_left,
                state.max_scroll_left()
            )));
        }

        if let Some(outcome) = &state.last_resize {
            spans.push(Span::styled(" | ", muted));
            spans.push(Span::styled(
                Self::outcome_text(outcome),
                Style::default().fg(Theme::TEXT_SECONDARY),
            ));
        }

        Line::from(spans)
    }

    fn outcome_text(outcome: &ResizeOutcome) -> String {
        match outcome {
            ResizeOutcome::Applied { key, width } => format!("{key} → {width}px"),
            ResizeOutcome::Rejected { key } => format!("{key}: last column keeps its width"),
        }
    }
}
