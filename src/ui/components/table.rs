//! Draws the header row and body cells from the engine's pixel geometry.
//!
//! Every cell edge is snapped to the nearest terminal column. Unpinned cells
//! are drawn first so sticky cells paint over whatever scrolled beneath them.

use ratatui::Frame;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, Borders};

use edtable_app::area::TableArea;
use edtable_app::ports::HostView;
use edtable_app::resize::ResizePhase;
use edtable_app::state::TableState;
use edtable_domain::{ColumnKey, FixedSide, HeaderCell, HeaderGeometry, Viewport};

use super::text_utils::truncate_to_width;
use crate::theme::Theme;

const SEPARATOR: &str = "│";
const PROXY_GUIDE: &str = "┆";

pub struct TablePane;

/// Terminal columns `[start, end)` a header cell occupies after clipping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct CellSpan {
    start: u16,
    end: u16,
    /// Whether the cell's right edge survived clipping.
    right_edge: bool,
}

impl TablePane {
    /// Renders the bordered table and returns where its inner area landed.
    pub fn render(frame: &mut Frame, area: Rect, state: &TableState, host: &HostView) -> TableArea {
        let block = Block::default()
            .title(format!(" {} ", state.title))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Theme::TABLE_BORDER));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let table_area = TableArea {
            x: inner.x,
            y: inner.y,
            width: inner.width,
            height: inner.height,
            cell_px: state.cell_px,
        };
        if inner.width == 0 || inner.height == 0 {
            return table_area;
        }

        let buf = frame.buffer_mut();
        buf.set_style(
            Rect::new(inner.x, inner.y, inner.width, 1),
            Style::default().bg(Theme::TABLE_HEADER_BG),
        );

        let viewport = Viewport {
            table_left: table_area.left_px(),
            width: table_area.width_px(),
            scroll_left: state.scroll_left,
        };
        let geometry = HeaderGeometry::layout(&state.columns, &state.sizes, viewport);
        let highlighted = highlighted_key(state);

        let (pinned, unpinned): (Vec<_>, Vec<_>) =
            geometry.cells.iter().partition(|cell| cell.pinned.is_some());
        for cell in unpinned.into_iter().chain(pinned) {
            let Some(span) = cell_span(&table_area, cell) else {
                continue;
            };
            let pinned_visible = cell
                .pinned
                .is_some_and(|side| overlay_visible(host, side));
            let armed = highlighted.is_some_and(|key| *key == cell.key);
            draw_cell(buf, &table_area, state, cell, span, pinned_visible, armed);
        }

        if let Some(left) = host.resize_proxy {
            draw_resize_proxy(buf, &table_area, left);
        }

        table_area
    }
}

fn highlighted_key(state: &TableState) -> Option<&ColumnKey> {
    match state.resize.phase() {
        ResizePhase::Armed { key } | ResizePhase::Dragging { key, .. } => Some(key),
        ResizePhase::Idle => None,
    }
}

fn overlay_visible(host: &HostView, side: FixedSide) -> bool {
    match side {
        FixedSide::Left => host.overlays.left.visible,
        FixedSide::Right => host.overlays.right.visible,
    }
}

fn cell_span(area: &TableArea, cell: &HeaderCell) -> Option<CellSpan> {
    let area_start = i32::from(area.x);
    let area_end = area_start + i32::from(area.width);
    let start = area.px_to_col(cell.left);
    let end = area.px_to_col(cell.right);

    let clipped_start = start.max(area_start);
    let clipped_end = end.min(area_end);
    if clipped_start >= clipped_end {
        return None;
    }
    Some(CellSpan {
        start: clipped_start as u16,
        end: clipped_end as u16,
        right_edge: end <= area_end,
    })
}

fn draw_cell(
    buf: &mut Buffer,
    area: &TableArea,
    state: &TableState,
    cell: &HeaderCell,
    span: CellSpan,
    pinned_visible: bool,
    armed: bool,
) {
    let header_style = Style::default().bg(Theme::TABLE_HEADER_BG);
    let body_style = if pinned_visible {
        Style::default().bg(Theme::PINNED_BG)
    } else {
        Style::default()
    };
    let edge_style = if armed {
        Style::default().fg(Theme::ARMED_EDGE)
    } else if pinned_visible {
        Style::default().fg(Theme::PINNED_EDGE)
    } else {
        Style::default().fg(Theme::COLUMN_SEPARATOR)
    };

    let width = span.end - span.start;
    let text_end = if span.right_edge { span.end - 1 } else { span.end };
    let text_width = usize::from(text_end.saturating_sub(span.start + 1));
    let column_index = state.columns.iter().position(|decl| decl.key == cell.key);
    let label = column_index.map_or_else(|| cell.key.as_str(), |i| state.columns[i].title());

    for row in 0..area.height {
        let y = area.y + row;
        let base = if row == 0 { header_style } else { body_style };
        buf.set_style(Rect::new(span.start, y, width, 1), base);
        for x in span.start..span.end {
            if let Some(c) = buf.cell_mut((x, y)) {
                c.set_symbol(" ");
            }
        }

        let text = if row == 0 {
            Some(label)
        } else {
            column_index.and_then(|i| {
                state
                    .rows
                    .get(usize::from(row) - 1)
                    .and_then(|r| r.get(i))
                    .map(String::as_str)
            })
        };
        if let Some(text) = text
            && text_width > 0
        {
            let style = if row == 0 {
                base.add_modifier(Modifier::BOLD)
            } else {
                base
            };
            buf.set_stringn(
                span.start + 1,
                y,
                truncate_to_width(text, text_width),
                text_width,
                style,
            );
        }

        if span.right_edge
            && let Some(c) = buf.cell_mut((span.end - 1, y))
        {
            c.set_symbol(SEPARATOR).set_style(base.patch(edge_style));
        }
        if pinned_visible
            && cell.pinned == Some(FixedSide::Right)
            && let Some(c) = buf.cell_mut((span.start, y))
        {
            c.set_symbol(SEPARATOR).set_style(base.patch(edge_style));
        }
    }
}

fn draw_resize_proxy(buf: &mut Buffer, area: &TableArea, left: f64) {
    let col = i32::from(area.x) + area.px_to_col(left);
    if col < i32::from(area.x) || col >= i32::from(area.x) + i32::from(area.width) {
        return;
    }
    let style = Style::default().fg(Theme::RESIZE_PROXY);
    for row in 0..area.height {
        if let Some(c) = buf.cell_mut((col as u16, area.y + row)) {
            c.set_symbol(PROXY_GUIDE).set_style(style);
        }
    }
}
