use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use edtable_app::ports::TableSourceError;
use edtable_domain::{ColumnDecl, DEFAULT_CELL_PX, TableSpec};

use crate::adapters::check_columns;

pub const CURRENT_VERSION: u32 = 1;

#[derive(Debug, Serialize, Deserialize)]
pub struct TableFile {
    pub version: u32,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub display: DisplayConfig,
    #[serde(default)]
    pub columns: Vec<ColumnDecl>,
    #[serde(default)]
    pub rows: Vec<HashMap<String, toml::Value>>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct DisplayConfig {
    #[serde(default = "default_cell_px")]
    pub cell_px: f64,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            cell_px: DEFAULT_CELL_PX,
        }
    }
}

fn default_cell_px() -> f64 {
    DEFAULT_CELL_PX
}

impl TableFile {
    pub fn parse(content: &str) -> Result<Self, TableSourceError> {
        let file: TableFile =
            toml::from_str(content).map_err(|e| TableSourceError::Parse(e.to_string()))?;

        if file.version != CURRENT_VERSION {
            return Err(TableSourceError::VersionMismatch {
                found: file.version,
                expected: CURRENT_VERSION,
            });
        }
        Ok(file)
    }

    /// `fallback_title` is used when the file has no `title`.
    pub fn into_spec(self, fallback_title: &str) -> Result<TableSpec, TableSourceError> {
        check_columns(&self.columns)?;
        if !self.display.cell_px.is_finite() || self.display.cell_px <= 0.0 {
            return Err(TableSourceError::Parse(format!(
                "display.cell_px must be positive (got {})",
                self.display.cell_px
            )));
        }

        let rows = self
            .rows
            .iter()
            .map(|row| {
                self.columns
                    .iter()
                    .map(|decl| row.get(decl.key.as_str()).map(cell_text).unwrap_or_default())
                    .collect()
            })
            .collect();

        let title = self.title.unwrap_or_else(|| fallback_title.to_string());
        Ok(TableSpec::new(title, self.columns)
            .with_cell_px(self.display.cell_px)
            .with_rows(rows))
    }
}

fn cell_text(value: &toml::Value) -> String {
    match value {
        toml::Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
