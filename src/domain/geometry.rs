//! On-screen header cell rectangles, in page coordinates.
//!
//! Pinned columns behave like CSS sticky cells: a left-pinned cell never
//! scrolls past the table's left edge (plus the widths of the left-pinned
//! cells before it), a right-pinned cell never past the right edge.

use super::column::{ColumnDecl, ColumnKey, FixedSide};
use super::size::ColumnSizeMap;

/// What follows a header cell in the header row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SiblingKind {
    Column,
    /// The drag-proxy element that trails the last column.
    ResizeHandle,
}

#[derive(Debug, Clone, PartialEq)]
pub struct HeaderCell {
    pub key: ColumnKey,
    pub left: f64,
    pub right: f64,
    pub resizeable: bool,
    pub pinned: Option<FixedSide>,
    pub next_sibling: SiblingKind,
}

impl HeaderCell {
    pub fn width(&self) -> f64 {
        self.right - self.left
    }

    pub fn contains(&self, x: f64) -> bool {
        x >= self.left && x < self.right
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Viewport {
    pub table_left: f64,
    pub width: f64,
    pub scroll_left: f64,
}

impl Viewport {
    pub fn right(&self) -> f64 {
        self.table_left + self.width
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct HeaderGeometry {
    pub viewport: Viewport,
    pub cells: Vec<HeaderCell>,
}

impl HeaderGeometry {
    pub fn layout(columns: &[ColumnDecl], sizes: &ColumnSizeMap, viewport: Viewport) -> Self {
        let mut cells = Vec::with_capacity(columns.len());
        let mut natural_left = viewport.table_left - viewport.scroll_left;
        let mut left_sticky_offset = 0.0;

        for (idx, decl) in columns.iter().enumerate() {
            let width = sizes.render_width(&decl.key);
            let mut left = natural_left;

            if decl.fixed == Some(FixedSide::Left) {
                left = left.max(viewport.table_left + left_sticky_offset);
                left_sticky_offset += width;
            }

            let next_sibling = if idx + 1 == columns.len() {
                SiblingKind::ResizeHandle
            } else {
                SiblingKind::Column
            };

            cells.push(HeaderCell {
                key: decl.key.clone(),
                left,
                right: left + width,
                resizeable: decl.resizeable,
                pinned: decl.fixed,
                next_sibling,
            });
            natural_left += width;
        }

        // Right-pinned cells stick from the right edge inward.
        let mut right_sticky_offset = 0.0;
        for cell in cells.iter_mut().rev() {
            if cell.pinned != Some(FixedSide::Right) {
                continue;
            }
            let width = cell.width();
            let max_right = viewport.right() - right_sticky_offset;
            if cell.right > max_right {
                cell.right = max_right;
                cell.left = max_right - width;
            }
            right_sticky_offset += width;
        }

        Self { viewport, cells }
    }

    /// Pinned cells are drawn on top of scrolling ones, so they win.
    pub fn hit(&self, x: f64) -> Option<&HeaderCell> {
        if x < self.viewport.table_left || x >= self.viewport.right() {
            return None;
        }
        self.cells
            .iter()
            .find(|c| c.pinned.is_some() && c.contains(x))
            .or_else(|| {
                self.cells
                    .iter()
                    .find(|c| c.pinned.is_none() && c.contains(x))
            })
    }

    pub fn cell(&self, key: &ColumnKey) -> Option<&HeaderCell> {
        self.cells.iter().find(|c| &c.key == key)
    }
}
