pub mod csv_source;
pub mod toml_source;

pub use csv_source::CsvTableSource;
pub use toml_source::TomlTableSource;

use std::collections::HashSet;
use std::path::Path;

use edtable_app::ports::{TableSource, TableSourceError};
use edtable_domain::ColumnDecl;

/// Rules every loader enforces before a table reaches the engine.
pub fn check_columns(columns: &[ColumnDecl]) -> Result<(), TableSourceError> {
    if columns.is_empty() {
        return Err(TableSourceError::NoColumns);
    }
    let mut seen = HashSet::with_capacity(columns.len());
    for decl in columns {
        decl.validate()?;
        if !seen.insert(&decl.key) {
            return Err(TableSourceError::DuplicateKey(decl.key.clone()));
        }
    }
    Ok(())
}

/// Picks a loader from the file extension; anything but `.csv` is read as TOML.
pub fn source_for_path(path: &Path) -> Box<dyn TableSource> {
    let is_csv = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"));
    if is_csv {
        Box::new(CsvTableSource::new(path.to_path_buf()))
    } else {
        Box::new(TomlTableSource::from_path(path.to_path_buf()))
    }
}

fn file_stem(path: &Path) -> String {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| "table".to_string())
}
