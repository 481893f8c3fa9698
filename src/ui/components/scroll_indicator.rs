use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use edtable_app::state::TableState;

use crate::theme::Theme;

/// Render the horizontal scroll position of the table in pixels.
/// Nothing is drawn while the columns fit the viewport.
pub fn render_horizontal_scroll_indicator(frame: &mut Frame, area: Rect, state: &TableState) {
    let max_scroll = state.max_scroll_left();
    if max_scroll <= 0.0 {
        return;
    }

    let scroll_left = state.scroll_left;
    let can_scroll_left = scroll_left > 0.0;
    let can_scroll_right = scroll_left < max_scroll;

    // Reserve 1 char for left margin, generate string to fit remaining width
    let left_margin: u16 = 1;
    let available_width = area.width.saturating_sub(left_margin) as usize;
    if available_width < 15 {
        return;
    }

    let position_text = format!(
        "px {}-{}/{}",
        scroll_left,
        scroll_left + state.viewport_width(),
        state.content_width()
    );

    // Format: "< px X-Y/Z ───█─── >"
    let fixed_parts_len = 1 + 1 + position_text.len() + 1 + 1 + 1;
    let track_width = available_width.saturating_sub(fixed_parts_len).max(5);

    let scrollbar = build_scrollbar_track(scroll_left, max_scroll, track_width);

    let arrow_active = Style::default().fg(Theme::TEXT_ACCENT);
    let arrow_inactive = Style::default().fg(Theme::TEXT_MUTED);
    let text_style = Style::default().fg(Theme::TEXT_ACCENT);

    let line = Line::from(vec![
        Span::styled("<", if can_scroll_left { arrow_active } else { arrow_inactive }),
        Span::styled(format!(" {} ", position_text), text_style),
        Span::styled(scrollbar, text_style),
        Span::styled(" >", if can_scroll_right { arrow_active } else { arrow_inactive }),
    ]);

    let indicator_area = Rect {
        x: area.x + left_margin,
        y: area.y,
        width: (line.width() as u16).min(available_width as u16),
        height: 1,
    };

    frame.render_widget(Paragraph::new(line), indicator_area);
}

fn build_scrollbar_track(position: f64, max_position: f64, width: usize) -> String {
    if max_position <= 0.0 || width < 3 {
        return "─".repeat(width);
    }

    let thumb_size = if width >= 10 { 2 } else { 1 };
    let ratio = (position / max_position).clamp(0.0, 1.0);
    let thumb_pos = (ratio * (width - thumb_size) as f64).round() as usize;

    (0..width)
        .map(|i| {
            if i >= thumb_pos && i < thumb_pos + thumb_size {
                '█'
            } else {
                '─'
            }
        })
        .collect()
}
