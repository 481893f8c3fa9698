pub mod column;
pub mod geometry;
pub mod size;
pub mod table;

pub use column::{ColumnDecl, ColumnDeclError, ColumnKey, ColumnKeyError, FixedSide, SizingMode};
pub use geometry::{HeaderCell, HeaderGeometry, SiblingKind, Viewport};
pub use size::{ColumnSize, ColumnSizeMap};
pub use table::{DEFAULT_CELL_PX, TableSpec};
