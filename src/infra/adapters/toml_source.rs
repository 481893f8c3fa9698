use std::fs;
use std::path::PathBuf;

use edtable_app::ports::{TableSource, TableSourceError};
use edtable_domain::TableSpec;

use super::file_stem;
use crate::config::table_file::TableFile;

enum Origin {
    File(PathBuf),
    Inline { name: String, content: String },
}

pub struct TomlTableSource {
    origin: Origin,
}

impl TomlTableSource {
    pub fn from_path(path: PathBuf) -> Self {
        Self {
            origin: Origin::File(path),
        }
    }

    /// A table file compiled into the binary or built in memory.
    pub fn inline(name: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            origin: Origin::Inline {
                name: name.into(),
                content: content.into(),
            },
        }
    }
}

impl TableSource for TomlTableSource {
    fn load(&self) -> Result<TableSpec, TableSourceError> {
        match &self.origin {
            Origin::File(path) => {
                let content = fs::read_to_string(path).map_err(|source| TableSourceError::Io {
                    path: path.clone(),
                    source,
                })?;
                TableFile::parse(&content)?.into_spec(&file_stem(path))
            }
            Origin::Inline { name, content } => TableFile::parse(content)?.into_spec(name),
        }
    }

    fn describe(&self) -> String {
        match &self.origin {
            Origin::File(path) => format!("toml:{}", path.display()),
            Origin::Inline { name, .. } => format!("builtin:{name}"),
        }
    }
}
