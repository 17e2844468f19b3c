//! Data source abstraction and metadata.

use std::path::PathBuf;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

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
    /// Detected encoding.
    pub encoding: String,
    /// Number of data rows (excluding header).
    pub row_count: usize,
    /// Number of columns.
    pub column_count: usize,
    /// When the file was read.
    pub read_at: DateTime<Utc>,
}

impl SourceMetadata {
    /// Create metadata for a file that has been parsed.
    pub fn new(
        path: PathBuf,
        hash: String,
        size_bytes: u64,
        format: String,
        row_count: usize,
        column_count: usize,
    ) -> Self {
        let file = path
            .file_name()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();

        Self {
            file,
            path,
            hash,
            size_bytes,
            format,
            encoding: "utf-8".to_string(),
            row_count,
            column_count,
            read_at: Utc::now(),
        }
    }
}

/// Parsed tabular data, mutated in place by the cleaning stages.
#[derive(Debug, Clone)]
pub struct DataTable {
    /// Column headers.
    pub headers: Vec<String>,
    /// Row data as strings (row-major order).
    pub rows: Vec<Vec<String>>,
    /// The delimiter used.
    pub delimiter: u8,
}

impl DataTable {
    /// Create a new data table.
    pub fn new(headers: Vec<String>, rows: Vec<Vec<String>>, delimiter: u8) -> Self {
        Self {
            headers,
            rows,
            delimiter,
        }
    }

    /// Get the number of columns.
    pub fn column_count(&self) -> usize {
        self.headers.len()
    }

    /// Get the number of rows (excluding header).
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Find the index of a column by name.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    /// Get all values for a column by index.
    pub fn column_values(&self, index: usize) -> impl Iterator<Item = &str> {
        self.rows
            .iter()
            .map(move |row| row.get(index).map(|s| s.as_str()).unwrap_or(""))
    }

    /// Get a specific cell value.
    pub fn get(&self, row: usize, col: usize) -> Option<&str> {
        self.rows
            .get(row)
            .and_then(|r| r.get(col).map(|s| s.as_str()))
    }

    /// Set a specific cell value. Out-of-range indices are ignored.
    pub fn set(&mut self, row: usize, col: usize, value: String) {
        if let Some(cell) = self.rows.get_mut(row).and_then(|r| r.get_mut(col)) {
            *cell = value;
        }
    }

    /// Append a new column filled with a default value.
    pub fn add_column(&mut self, name: String, default: String) {
        self.headers.push(name);
        for row in &mut self.rows {
            row.push(default.clone());
        }
    }

    /// Rename a column. Returns false if the column does not exist.
    pub fn rename_column(&mut self, from: &str, to: &str) -> bool {
        match self.column_index(from) {
            Some(idx) => {
                self.headers[idx] = to.to_string();
                true
            }
            None => false,
        }
    }

    /// Count missing cells across the whole table.
    pub fn missing_cell_count(&self) -> usize {
        self.rows
            .iter()
            .flat_map(|row| row.iter())
            .filter(|cell| Self::is_missing(cell))
            .count()
    }

    /// Count missing cells in a single column.
    pub fn missing_in_column(&self, index: usize) -> usize {
        self.column_values(index)
            .filter(|v| Self::is_missing(v))
            .count()
    }

    /// Check if a value represents a missing/null value.
    pub fn is_missing(value: &str) -> bool {
        let trimmed = value.trim();
        trimmed.is_empty()
            || trimmed.eq_ignore_ascii_case("na")
            || trimmed.eq_ignore_ascii_case("n/a")
            || trimmed.eq_ignore_ascii_case("null")
            || trimmed.eq_ignore_ascii_case("none")
            || trimmed.eq_ignore_ascii_case("nil")
            || trimmed.eq_ignore_ascii_case("nan")
            || trimmed == "."
            || trimmed == "-"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> DataTable {
        DataTable::new(
            vec!["a".into(), "b".into()],
            vec![
                vec!["1".into(), "x".into()],
                vec!["2".into(), "".into()],
            ],
            b',',
        )
    }

    #[test]
    fn test_column_index() {
        let table = sample();
        assert_eq!(table.column_index("b"), Some(1));
        assert_eq!(table.column_index("z"), None);
    }

    #[test]
    fn test_set_and_get() {
        let mut table = sample();
        table.set(1, 1, "y".into());
        assert_eq!(table.get(1, 1), Some("y"));
        // Out of range is a no-op
        table.set(9, 9, "z".into());
    }

    #[test]
    fn test_add_column() {
        let mut table = sample();
        table.add_column("c".into(), "0".into());
        assert_eq!(table.column_count(), 3);
        assert_eq!(table.get(0, 2), Some("0"));
    }

    #[test]
    fn test_missing_counts() {
        let table = sample();
        assert_eq!(table.missing_cell_count(), 1);
        assert_eq!(table.missing_in_column(1), 1);
    }

    #[test]
    fn test_is_missing() {
        assert!(DataTable::is_missing(""));
        assert!(DataTable::is_missing("  "));
        assert!(DataTable::is_missing("NA"));
        assert!(DataTable::is_missing("n/a"));
        assert!(DataTable::is_missing("NULL"));
        assert!(DataTable::is_missing("NaN"));
        assert!(DataTable::is_missing("."));
        assert!(!DataTable::is_missing("0"));
        assert!(!DataTable::is_missing("value"));
    }
}
