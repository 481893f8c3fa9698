//! Where the host placed the table, and how its cells map to engine pixels.

/// Rectangle of the table body in terminal cells, header row first.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TableArea {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
    pub cell_px: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerRegion {
    Header,
    Body,
    Outside,
}

impl TableArea {
    pub fn left_px(&self) -> f64 {
        f64::from(self.x) * self.cell_px
    }

    pub fn width_px(&self) -> f64 {
        f64::from(self.width) * self.cell_px
    }

    /// Pixel position of the left edge of terminal column `col`.
    pub fn col_to_px(&self, col: u16) -> f64 {
        f64::from(col) * self.cell_px
    }

    /// Pointer position for a mouse event in terminal column `col`: the
    /// middle of the cell.
    pub fn pointer_px(&self, col: u16) -> f64 {
        (f64::from(col) + 0.5) * self.cell_px
    }

    /// Nearest terminal column edge to pixel `px` (may lie outside the area).
    pub fn px_to_col(&self, px: f64) -> i32 {
        if self.cell_px <= 0.0 {
            return 0;
        }
        (px / self.cell_px).round() as i32
    }

    pub fn region_of(&self, col: u16, row: u16) -> PointerRegion {
        let inside_x = col >= self.x && col < self.x.saturating_add(self.width);
        let inside_y = row >= self.y && row < self.y.saturating_add(self.height);
        match (inside_x, inside_y) {
            (true, true) if row == self.y => PointerRegion::Header,
            (true, true) => PointerRegion::Body,
            _ => PointerRegion::Outside,
        }
    }
}
