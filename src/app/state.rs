use edtable_domain::{ColumnDecl, ColumnSizeMap, HeaderGeometry, TableSpec, Viewport};

use crate::area::{PointerRegion, TableArea};
use crate::fixed_columns::{FixedColumnTracker, PinnedWidths, ScrollMetrics};
use crate::resize::{ResizeController, ResizeOutcome};
use crate::watchdog::CursorWatchdog;

/// Last pointer position reported by the host, in engine pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerState {
    pub x: f64,
    pub region: PointerRegion,
}

impl Default for PointerState {
    fn default() -> Self {
        Self {
            x: 0.0,
            region: PointerRegion::Outside,
        }
    }
}

#[derive(Debug, Clone)]
pub struct TableState {
    pub title: String,
    pub cell_px: f64,
    pub columns: Vec<ColumnDecl>,
    pub rows: Vec<Vec<String>>,
    pub sizes: ColumnSizeMap,

    /// `None` until the host has drawn the table once.
    pub area: Option<TableArea>,
    pub scroll_left: f64,
    pub terminal_size: (u16, u16),

    pub resize: ResizeController,
    pub fixed: FixedColumnTracker,
    pub watchdog: CursorWatchdog,
    pub pointer: PointerState,
    pub last_resize: Option<ResizeOutcome>,

    pub mounted: bool,
    pub should_quit: bool,
    pub render_dirty: bool,
}

impl TableState {
    pub fn new(spec: TableSpec) -> Self {
        Self {
            title: spec.title,
            cell_px: spec.cell_px,
            columns: spec.columns,
            rows: spec.rows,
            sizes: ColumnSizeMap::new(),
            area: None,
            scroll_left: 0.0,
            terminal_size: (0, 0),
            resize: ResizeController::new(),
            fixed: FixedColumnTracker::new(),
            watchdog: CursorWatchdog::new(),
            pointer: PointerState::default(),
            last_resize: None,
            mounted: false,
            should_quit: false,
            render_dirty: true,
        }
    }

    pub fn mark_dirty(&mut self) {
        self.render_dirty = true;
    }

    pub fn clear_dirty(&mut self) {
        self.render_dirty = false;
    }

    pub fn table_left(&self) -> f64 {
        self.area.map_or(0.0, |a| a.left_px())
    }

    /// Measured width of the visible table, in pixels.
    pub fn viewport_width(&self) -> f64 {
        self.area.map_or(0.0, |a| a.width_px())
    }

    /// Scrollable width: the sum of every column's render width.
    pub fn content_width(&self) -> f64 {
        self.sizes.total()
    }

    pub fn max_scroll_left(&self) -> f64 {
        (self.content_width() - self.viewport_width()).max(0.0)
    }

    pub fn viewport(&self) -> Viewport {
        Viewport {
            table_left: self.table_left(),
            width: self.viewport_width(),
            scroll_left: self.scroll_left,
        }
    }

    pub fn geometry(&self) -> HeaderGeometry {
        HeaderGeometry::layout(&self.columns, &self.sizes, self.viewport())
    }

    pub fn scroll_metrics(&self) -> ScrollMetrics {
        ScrollMetrics {
            scroll_left: self.scroll_left,
            viewport_width: self.viewport_width(),
            table_width: self.content_width(),
        }
    }

    pub fn pinned_widths(&self) -> PinnedWidths {
        PinnedWidths::measure(&self.columns, &self.sizes)
    }

    /// Returns whether `scroll_left` moved.
    pub fn set_scroll_left(&mut self, scroll_left: f64) -> bool {
        let clamped = scroll_left.clamp(0.0, self.max_scroll_left());
        let moved = clamped != self.scroll_left;
        self.scroll_left = clamped;
        moved
    }

    pub fn clamp_scroll(&mut self) -> bool {
        self.set_scroll_left(self.scroll_left)
    }
}
