use std::fs::File;
use std::path::PathBuf;

use edtable_app::ports::{TableSource, TableSourceError};
use edtable_domain::{ColumnDecl, ColumnKey, TableSpec};

use super::{check_columns, file_stem};

/// Header row becomes auto-sized, resizeable columns.
pub struct CsvTableSource {
    path: PathBuf,
}

impl CsvTableSource {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    fn read(&self) -> Result<(Vec<ColumnDecl>, Vec<Vec<String>>), TableSourceError> {
        let file = File::open(&self.path).map_err(|source| TableSourceError::Io {
            path: self.path.clone(),
            source,
        })?;
        let mut reader = csv::Reader::from_reader(file);
        let headers = reader
            .headers()
            .map_err(|e| TableSourceError::Csv(e.to_string()))?
            .clone();
        let rows = reader
            .records()
            .map(|record| record.map(|r| r.iter().map(str::to_string).collect()))
            .collect::<Result<Vec<Vec<String>>, _>>()
            .map_err(|e| TableSourceError::Csv(e.to_string()))?;

        let columns = headers
            .iter()
            .map(|header| {
                ColumnKey::new(header)
                    .map(|key| ColumnDecl::new(key).resizeable())
                    .map_err(|e| TableSourceError::Csv(format!("header {header:?}: {e}")))
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok((columns, rows))
    }
}

impl TableSource for CsvTableSource {
    fn load(&self) -> Result<TableSpec, TableSourceError> {
        let (columns, rows) = self.read()?;
        check_columns(&columns)?;

        Ok(TableSpec::new(file_stem(&self.path), columns).with_rows(rows))
    }

    fn describe(&self) -> String {
        format!("csv:{}", self.path.display())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn write_csv(dir: &TempDir, name: &str, content: &str) -> PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn headers_become_resizeable_auto_columns() {
        let temp_dir = TempDir::new().unwrap();
        let path = write_csv(&temp_dir, "hosts.csv", "host,port\nalpha,3306\nbeta,3307\n");

        let spec = CsvTableSource::new(path).load().unwrap();

        assert_eq!(spec.title, "hosts");
        assert_eq!(spec.columns.len(), 2);
        assert!(spec.columns.iter().all(|c| c.resizeable && c.width.is_none()));
        assert_eq!(spec.rows[1], vec!["beta".to_string(), "3307".to_string()]);
    }

    #[test]
    fn duplicate_header_is_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let path = write_csv(&temp_dir, "dup.csv", "a,a\n1,2\n");

        let result = CsvTableSource::new(path).load();

        assert!(matches!(result, Err(TableSourceError::DuplicateKey(_))));
    }

    #[test]
    fn ragged_rows_are_csv_errors() {
        let temp_dir = TempDir::new().unwrap();
        let path = write_csv(&temp_dir, "ragged.csv", "a,b\n1\n");

        let result = CsvTableSource::new(path).load();

        assert!(matches!(result, Err(TableSourceError::Csv(_))));
    }

    #[test]
    fn blank_header_is_csv_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = write_csv(&temp_dir, "blank.csv", "a, \n1,2\n");

        let result = CsvTableSource::new(path).load();

        assert!(matches!(result, Err(TableSourceError::Csv(_))));
    }

    #[test]
    fn missing_file_is_io_error() {
        let temp_dir = TempDir::new().unwrap();

        let result = CsvTableSource::new(temp_dir.path().join("absent.csv")).load();

        assert!(matches!(result, Err(TableSourceError::Io { .. })));
    }

    #[test]
    fn empty_file_has_no_columns() {
        let temp_dir = TempDir::new().unwrap();
        let path = write_csv(&temp_dir, "empty.csv", "");

        let result = CsvTableSource::new(path).load();

        assert!(matches!(result, Err(TableSourceError::NoColumns)));
    }
}
