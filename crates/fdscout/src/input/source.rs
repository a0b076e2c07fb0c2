//! Loaded table and source metadata.

use std::path::PathBuf;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{FdError, Result};
use crate::schema::Schema;

/// Metadata about the source data file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceMetadata {
    /// File name without path.
    pub file: String,
    /// Full path to the file.
    pub path: PathBuf,
    /// SHA-256 hash of the file contents.
    pub hash: String,
    /// File size in bytes.
    pub size_bytes: u64,
    /// Detected format (csv, tsv, etc.).
    pub format: String,
    /// Number of data rows (excluding header).
    pub row_count: usize,
    /// Number of attributes.
    pub column_count: usize,
    /// When the file was loaded.
    pub loaded_at: DateTime<Utc>,
}

impl SourceMetadata {
    /// Describe a file that has just been loaded into `table`.
    pub fn new(path: PathBuf, hash: String, size_bytes: u64, table: &DataTable) -> Self {
        let file = path
            .file_name()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();

        Self {
            file,
            path,
            hash,
            size_bytes,
            format: format_name(table.delimiter).to_string(),
            row_count: table.row_count(),
            column_count: table.column_count(),
            loaded_at: Utc::now(),
        }
    }
}

/// Short format label for a delimiter byte.
pub fn format_name(delimiter: u8) -> &'static str {
    match delimiter {
        b'\t' => "tsv",
        b',' => "csv",
        b';' => "csv-semicolon",
        b'|' => "psv",
        _ => "delimited",
    }
}

/// A fully loaded dataset: header schema plus raw rows.
///
/// Field values are kept exactly as read. Callers comparing values should go
/// through [`DataTable::value`], which trims surrounding whitespace.
#[derive(Debug, Clone)]
pub struct DataTable {
    /// Header attributes.
    pub schema: Schema,
    /// Row data as raw strings (row-major order).
    pub rows: Vec<Vec<String>>,
    /// The delimiter used.
    pub delimiter: u8,
}

impl DataTable {
    /// Create a new data table.
    pub fn new(schema: Schema, rows: Vec<Vec<String>>, delimiter: u8) -> Self {
        Self {
            schema,
            rows,
            delimiter,
        }
    }

    /// Build a comma-delimited table from in-memory header names and rows.
    pub fn from_rows<'a, H, R>(headers: &[H], rows: &[R]) -> Self
    where
        H: AsRef<str>,
        R: AsRef<[&'a str]>,
    {
        let schema = Schema::new(headers.iter().map(|h| h.as_ref().trim().to_string()));
        let rows = rows
            .iter()
            .map(|r| r.as_ref().iter().map(|v| v.to_string()).collect())
            .collect();
        Self::new(schema, rows, b',')
    }

    /// Get the number of attributes.
    pub fn column_count(&self) -> usize {
        self.schema.len()
    }

    /// Get the number of data rows (excluding header).
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Trimmed value of a cell, empty if the cell is absent.
    pub fn value(&self, row: usize, col: usize) -> &str {
        self.get(row, col).map(str::trim).unwrap_or("")
    }

    /// Raw, untrimmed cell value.
    pub fn get(&self, row: usize, col: usize) -> Option<&str> {
        self.rows.get(row).and_then(|r| r.get(col).map(|s| s.as_str()))
    }

    /// Check that every row has exactly one field per attribute.
    ///
    /// Reports the first offending row (1-based) and the first missing or
    /// extra field (1-based).
    pub fn check_shape(&self) -> Result<()> {
        let expected = self.column_count();
        for (index, row) in self.rows.iter().enumerate() {
            if row.len() != expected {
                return Err(FdError::Parse {
                    row: index + 1,
                    column: row.len().min(expected) + 1,
                    message: format!("expected {} fields, found {}", expected, row.len()),
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_is_trimmed() {
        let table = DataTable::from_rows(&["A", "B"], &[["x ", "1\r\n"], [" y", "2"]]);
        assert_eq!(table.get(0, 1), Some("1\r\n"));
        assert_eq!(table.value(0, 1), "1");
        assert_eq!(table.value(1, 0), "y");
        assert_eq!(table.value(5, 0), "");
    }

    #[test]
    fn test_check_shape() {
        let table = DataTable::from_rows(&["A", "B"], &[["1", "a"], ["2", " b"]]);
        assert!(table.check_shape().is_ok());
        assert_eq!(table.row_count(), 2);
        assert_eq!(table.column_count(), 2);
    }

    #[test]
    fn test_check_shape_short_row() {
        let rows = vec![
            vec!["1".to_string(), "x".to_string()],
            vec!["1".to_string()],
        ];
        let table = DataTable::new(Schema::new(["A", "B"]), rows, b',');
        let err = table.check_shape().unwrap_err();
        assert!(matches!(err, FdError::Parse { row: 2, column: 2, .. }));
    }

    #[test]
    fn test_check_shape_long_row() {
        let rows = vec![vec!["1".to_string(), "x".to_string(), "extra".to_string()]];
        let table = DataTable::new(Schema::new(["A", "B"]), rows, b',');
        let err = table.check_shape().unwrap_err();
        assert!(matches!(err, FdError::Parse { row: 1, column: 3, .. }));
    }

    #[test]
    fn test_format_name() {
        assert_eq!(format_name(b'\t'), "tsv");
        assert_eq!(format_name(b','), "csv");
        assert_eq!(format_name(b'#'), "delimited");
    }
}
