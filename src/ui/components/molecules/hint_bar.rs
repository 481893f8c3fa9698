use ratatui::style::Style;
use ratatui::text::{Line, Span};

use crate::components::atoms::key_text;
use crate::theme::Theme;

/// Creates a hint line for footer display.
/// Format: "key1 desc1  key2 desc2  ..."
pub fn hint_line(hints: &[(&str, &str)]) -> Line<'static> {
    let mut spans = Vec::new();

    for (i, (key, desc)) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw("  "));
        }
        spans.push(key_text(key));
        spans.push(Span::styled(
            format!(" {}", desc),
            Style::default().fg(Theme::TEXT_SECONDARY),
        ));
    }

    Line::from(spans)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn joins_hints_with_double_space() {
        let line = hint_line(&[("q", "quit"), ("r", "reset")]);

        assert_eq!(line.to_string(), "q quit  r reset");
    }

    #[test]
    fn empty_hints_make_empty_line() {
        assert_eq!(hint_line(&[]).width(), 0);
    }
}
