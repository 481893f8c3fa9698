use super::column::ColumnDecl;

pub const DEFAULT_CELL_PX: f64 = 8.0;

/// A table as loaded from a source: declarations plus row text in column order.
#[derive(Debug, Clone, PartialEq)]
pub struct TableSpec {
    pub title: String,
    pub cell_px: f64,
    pub columns: Vec<ColumnDecl>,
    pub rows: Vec<Vec<String>>,
}

impl TableSpec {
    pub fn new(title: impl Into<String>, columns: Vec<ColumnDecl>) -> Self {
        Self {
            title: title.into(),
            cell_px: DEFAULT_CELL_PX,
            columns,
            rows: Vec::new(),
        }
    }

    pub fn with_rows(mut self, rows: Vec<Vec<String>>) -> Self {
        self.rows = rows;
        self
    }

    pub fn with_cell_px(mut self, cell_px: f64) -> Self {
        self.cell_px = cell_px;
        self
    }
}
