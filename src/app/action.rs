use edtable_domain::ColumnDecl;

use crate::area::{PointerRegion, TableArea};

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    None,
    Quit,
    Tick,
    Render,
    Resize(u16, u16),

    // Lifecycle
    Mount,
    Unmount,

    // Layout inputs
    ColumnsChanged(Vec<ColumnDecl>),
    TableMeasured(TableArea),
    ResetWidths,

    // Pointer, in engine pixels
    PointerMove { x: f64, region: PointerRegion },
    PointerDown { x: f64, region: PointerRegion },
    DragMove { x: f64 },
    PointerUp { x: f64 },

    // Horizontal scroll
    ScrollBy(f64),
    ScrollHome,
    ScrollEnd,
}
