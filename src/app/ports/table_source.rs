use std::path::PathBuf;

use edtable_domain::{ColumnDeclError, ColumnKey, TableSpec};

#[derive(Debug, thiserror::Error)]
pub enum TableSourceError {
    #[error("cannot read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid table file: {0}")]
    Parse(String),
    #[error("table file version mismatch: found {found}, expected {expected}")]
    VersionMismatch { found: u32, expected: u32 },
    #[error(transparent)]
    InvalidColumn(#[from] ColumnDeclError),
    #[error("duplicate column key: {0}")]
    DuplicateKey(ColumnKey),
    #[error("table declares no columns")]
    NoColumns,
    #[error("invalid CSV: {0}")]
    Csv(String),
}

pub trait TableSource {
    fn load(&self) -> Result<TableSpec, TableSourceError>;

    /// Human-readable origin, used in logs and the title bar.
    fn describe(&self) -> String;
}
