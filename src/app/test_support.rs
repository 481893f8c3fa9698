//! Fixtures shared by unit tests and downstream crates' tests.

use std::time::Instant;

use edtable_domain::{ColumnDecl, ColumnKey, FixedSide, TableSpec};

use crate::action::Action;
use crate::area::TableArea;
use crate::reducer::reduce;
use crate::state::TableState;

pub const CELL_PX: f64 = 8.0;

pub fn key(name: &str) -> ColumnKey {
    ColumnKey::new(name).unwrap()
}

/// Instance list: pinned name on the left, pinned operations on the right.
///
/// At 640px (80 cells) it allocates `name 221, host 119, status 100,
/// region 120, ops 80`.
pub fn instance_spec() -> TableSpec {
    let columns = vec![
        ColumnDecl::new(key("name"))
            .with_label("Instance")
            .with_min_width(100.0)
            .resizeable()
            .pinned(FixedSide::Left),
        ColumnDecl::new(key("host")).with_label("Host").resizeable(),
        ColumnDecl::new(key("status"))
            .with_label("Status")
            .with_max_width(100.0),
        ColumnDecl::new(key("region"))
            .with_label("Region")
            .with_width(120.0)
            .resizeable(),
        ColumnDecl::new(key("ops"))
            .with_label("Operations")
            .with_width(80.0)
            .pinned(FixedSide::Right),
    ];
    let rows = vec![
        vec!["tendb-01", "10.0.0.11:3306", "running", "ap-sh", "edit"],
        vec!["tendb-02", "10.0.0.12:3306", "unavailable", "ap-gz", "edit"],
    ]
    .into_iter()
    .map(|r| r.into_iter().map(String::from).collect())
    .collect();
    TableSpec::new("instances", columns).with_rows(rows)
}

pub fn table_area(width_cells: u16) -> TableArea {
    TableArea {
        x: 0,
        y: 1,
        width: width_cells,
        height: 10,
        cell_px: CELL_PX,
    }
}

/// Measured and mounted, with any setup effects discarded.
pub fn mounted_state(spec: TableSpec, width_cells: u16, now: Instant) -> TableState {
    let mut state = TableState::new(spec);
    reduce(&mut state, Action::TableMeasured(table_area(width_cells)), now);
    reduce(&mut state, Action::Mount, now);
    state.clear_dirty();
    state
}
