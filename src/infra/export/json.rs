//! Column layout as JSON, for `--print-layout` and other tooling.

use serde::Serialize;

use edtable_domain::{ColumnDecl, ColumnKey, ColumnSize, ColumnSizeMap};

#[derive(Debug, Serialize)]
pub struct LayoutEntry<'a> {
    pub key: &'a ColumnKey,
    #[serde(flatten)]
    pub size: ColumnSize,
}

/// One entry per allocated column, in declaration order.
pub fn layout_entries<'a>(
    columns: &'a [ColumnDecl],
    sizes: &'a ColumnSizeMap,
) -> Vec<LayoutEntry<'a>> {
    sizes
        .ordered(columns)
        .map(|(decl, size)| LayoutEntry {
            key: &decl.key,
            size: *size,
        })
        .collect()
}

pub fn layout_json(columns: &[ColumnDecl], sizes: &ColumnSizeMap) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&layout_entries(columns, sizes))
}
