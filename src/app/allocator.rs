//! Column width allocation.
//!
//! Widths already present in the prior map are carried over untouched, so a
//! drag-resize survives unrelated changes to the column set. Only columns new
//! to the map receive a share of the remaining space.

use edtable_domain::{ColumnDecl, ColumnKey, ColumnSize, ColumnSizeMap, SizingMode};

struct Bucketed<'a> {
    key: &'a ColumnKey,
    bound: f64,
    is_new: bool,
}

#[derive(Default)]
struct Buckets<'a> {
    fixed: Vec<Bucketed<'a>>,
    min: Vec<Bucketed<'a>>,
    max: Vec<Bucketed<'a>>,
    auto: Vec<Bucketed<'a>>,
}

impl<'a> Buckets<'a> {
    fn partition(columns: &'a [ColumnDecl], prior: &ColumnSizeMap) -> Self {
        let mut buckets = Self::default();
        for decl in columns {
            let is_new = !prior.contains(&decl.key);
            let entry = |bound| Bucketed {
                key: &decl.key,
                bound,
                is_new,
            };
            match decl.sizing_mode() {
                SizingMode::Fixed(width) => buckets.fixed.push(entry(width)),
                SizingMode::MinBound(min) => buckets.min.push(entry(min)),
                SizingMode::MaxBound(max) => buckets.max.push(entry(max)),
                SizingMode::Auto => buckets.auto.push(entry(0.0)),
            }
        }
        buckets
    }

    fn sharing_count(&self) -> usize {
        self.min.len() + self.max.len() + self.auto.len()
    }
}

pub fn allocate(
    columns: &[ColumnDecl],
    available_width: f64,
    prior: &ColumnSizeMap,
) -> ColumnSizeMap {
    let buckets = Buckets::partition(columns, prior);
    let mut sizes = ColumnSizeMap::new();
    let mut total = 0.0;

    // Carried entries keep their width; the recorded bound follows the current declaration.
    for decl in columns {
        if let Some(existing) = prior.get(&decl.key) {
            let size = ColumnSize::declared(decl.sizing_mode(), existing.render_width);
            total += size.render_width;
            sizes.insert(decl.key.clone(), size);
        }
    }

    for col in buckets.fixed.iter().filter(|c| c.is_new) {
        sizes.insert(
            col.key.clone(),
            ColumnSize::declared(SizingMode::Fixed(col.bound), col.bound),
        );
        total += col.bound;
    }
    for col in buckets.min.iter().filter(|c| c.is_new) {
        sizes.insert(
            col.key.clone(),
            ColumnSize::declared(SizingMode::MinBound(col.bound), col.bound),
        );
        total += col.bound;
    }

    let remaining = available_width - total;
    let mut mean_width = if remaining > 0.0 {
        (remaining / buckets.sharing_count().max(1) as f64).floor()
    } else {
        0.0
    };

    let mut extra_width = 0.0;
    for col in buckets.max.iter().filter(|c| c.is_new) {
        let mut render_width = mean_width;
        if col.bound <= mean_width {
            render_width = col.bound;
            extra_width += mean_width - col.bound;
        }
        sizes.insert(
            col.key.clone(),
            ColumnSize::declared(SizingMode::MaxBound(col.bound), render_width),
        );
    }

    let absorbers = (buckets.auto.len() + buckets.min.len()).max(1);
    mean_width += (extra_width / absorbers as f64).floor();

    for col in buckets.min.iter().filter(|c| c.is_new) {
        if let Some(size) = sizes.get_mut(col.key) {
            size.render_width += mean_width;
        }
    }
    for col in buckets.auto.iter().filter(|c| c.is_new) {
        sizes.insert(
            col.key.clone(),
            ColumnSize::declared(SizingMode::Auto, mean_width),
        );
    }

    let rendered = sizes.total();
    if rendered < available_width {
        let shortfall = available_width - rendered;
        let target = buckets
            .min
            .first()
            .or_else(|| buckets.auto.first())
            .or_else(|| buckets.max.first());
        if let Some(target) = target
            && let Some(size) = sizes.get_mut(target.key)
        {
            size.render_width += shortfall;
        }
    }

    log::debug!(
        "allocated {} columns into {}px (rendered {}px)",
        sizes.len(),
        available_width,
        sizes.total()
    );

    sizes
}
