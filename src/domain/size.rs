use std::collections::BTreeMap;

use serde::Serialize;

use super::column::{ColumnDecl, ColumnKey, SizingMode};

/// Allocated width of one column plus the bound it was declared with.
///
/// Only the bound matching the column's [`SizingMode`] is recorded; the
/// resize controller clamps against it.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ColumnSize {
    pub render_width: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_width: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_width: Option<f64>,
}

impl ColumnSize {
    pub fn declared(mode: SizingMode, render_width: f64) -> Self {
        let mut size = Self {
            render_width,
            ..Self::default()
        };
        match mode {
            SizingMode::Fixed(width) => size.width = Some(width),
            SizingMode::MinBound(min) => size.min_width = Some(min),
            SizingMode::MaxBound(max) => size.max_width = Some(max),
            SizingMode::Auto => {}
        }
        size
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ColumnSizeMap {
    entries: BTreeMap<ColumnKey, ColumnSize>,
}

impl ColumnSizeMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, key: &ColumnKey) -> Option<&ColumnSize> {
        self.entries.get(key)
    }

    pub fn get_mut(&mut self, key: &ColumnKey) -> Option<&mut ColumnSize> {
        self.entries.get_mut(key)
    }

    pub fn contains(&self, key: &ColumnKey) -> bool {
        self.entries.contains_key(key)
    }

    pub fn insert(&mut self, key: ColumnKey, size: ColumnSize) {
        self.entries.insert(key, size);
    }

    /// Zero for unknown keys.
    pub fn render_width(&self, key: &ColumnKey) -> f64 {
        self.entries.get(key).map_or(0.0, |s| s.render_width)
    }

    pub fn total(&self) -> f64 {
        self.entries.values().map(|s| s.render_width).sum()
    }

    pub fn total_except(&self, key: &ColumnKey) -> f64 {
        self.entries
            .iter()
            .filter(|(k, _)| *k != key)
            .map(|(_, s)| s.render_width)
            .sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&ColumnKey, &ColumnSize)> {
        self.entries.iter()
    }

    /// Entries in declaration order, skipping columns without an entry.
    pub fn ordered<'a>(
        &'a self,
        columns: &'a [ColumnDecl],
    ) -> impl Iterator<Item = (&'a ColumnDecl, &'a ColumnSize)> + 'a {
        columns
            .iter()
            .filter_map(|decl| self.entries.get(&decl.key).map(|size| (decl, size)))
    }
}
