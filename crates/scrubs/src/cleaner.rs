//! Main Cleaner struct and public API.

use std::path::Path;

use indexmap::IndexMap;

use crate::clean::{dates, dedup, derive, finalize, headers, impute, numeric, text};
use crate::error::Result;
use crate::input::{DataTable, Parser, ParserConfig, SourceMetadata};
use crate::report::{CleanReport, InspectReport};

/// Configuration for a cleaning run.
#[derive(Debug, Clone, Default)]
pub struct CleanerConfig {
    /// Parser configuration.
    pub parser: ParserConfig,
}

/// Result of cleaning a data file.
#[derive(Debug, Clone)]
pub struct CleanOutcome {
    /// The cleaned 27-column table.
    pub table: DataTable,
    /// The transformation report.
    pub report: CleanReport,
    /// Metadata about the source file.
    pub source: SourceMetadata,
}

/// The hospital patient record cleaning engine.
///
/// Runs the fixed stage sequence: header normalization, missing-value
/// imputation, date standardization, numeric normalization, duplicate
/// removal, derived columns, text standardization, and the final
/// rename/reorder.
pub struct Cleaner {
    parser: Parser,
}

impl Cleaner {
    /// Create a cleaner with default configuration.
    pub fn new() -> Self {
        Self::with_config(CleanerConfig::default())
    }

    /// Create a cleaner with custom configuration.
    pub fn with_config(config: CleanerConfig) -> Self {
        Self {
            parser: Parser::with_config(config.parser),
        }
    }

    /// Assess a raw file without modifying it.
    pub fn inspect(&self, path: impl AsRef<Path>) -> Result<InspectReport> {
        let (table, _source) = self.parser.parse_file(path)?;

        let mut column_missing = IndexMap::new();
        let mut column_missing_pct = IndexMap::new();
        for (idx, name) in table.headers.iter().enumerate() {
            let missing = table.missing_in_column(idx);
            if missing > 0 {
                let pct = missing as f64 / table.row_count() as f64 * 100.0;
                column_missing.insert(name.clone(), missing);
                column_missing_pct.insert(name.clone(), (pct * 100.0).round() / 100.0);
            }
        }

        Ok(InspectReport {
            rows: table.row_count(),
            columns: table.headers.clone(),
            missing_total: table.missing_cell_count(),
            duplicate_rows: dedup::count_duplicates(&table),
            column_missing,
            column_missing_pct,
        })
    }

    /// Parse a file and run the full cleaning pipeline on it.
    pub fn clean_file(&self, path: impl AsRef<Path>) -> Result<CleanOutcome> {
        let (mut table, source) = self.parser.parse_file(path)?;
        let report = self.clean_table(&mut table)?;

        Ok(CleanOutcome {
            table,
            report,
            source,
        })
    }

    /// Run the cleaning pipeline on an in-memory table.
    pub fn clean_table(&self, table: &mut DataTable) -> Result<CleanReport> {
        let mut report = CleanReport::default();
        report.initial_rows = table.row_count();
        report.initial_columns = table.column_count();

        headers::normalize(table, &mut report);

        // Snapshot per-column missing counts before any filling
        let names = table.headers.clone();
        for (idx, name) in names.iter().enumerate() {
            let missing = table.missing_in_column(idx);
            if missing > 0 {
                report.column_missing.insert(name.clone(), missing);
            }
        }

        impute::fill_missing(table, &mut report);
        dates::standardize(table, &mut report);
        numeric::normalize(table, &mut report);
        dedup::drop_duplicates(table, &mut report);
        derive::add_columns(table, &mut report);
        text::standardize(table, &mut report);
        finalize::rename_and_reorder(table, &mut report)?;

        report.final_rows = table.row_count();
        report.final_columns = table.column_count();
        Ok(report)
    }
}

impl Default for Cleaner {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn create_test_file(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    const HEADER: &str = "Patient ID,Patient Name,Age,Gender,Blood Group,Admission Date,Discharge Date,Days Stayed,Department,Doctor Name,Diagnosis,Admission Type,Discharge Status,Follow Up Required,Treatment Cost,Insurance Type,Insurance Coverage,Medication Prescribed,Lab Tests Count";

    fn sample_csv() -> String {
        format!(
            "{HEADER}\n\
             P001,ana gomez,34,F,A+,03/04/2024,03/10/2024,6,cardiology,dr. smith,hypertension,Emergency,Discharged,y,$1200.50,private,80%,2,3\n\
             P002,,,m,,2024-03-15,2024-03-18,3,,,,,,n,$300,,50,1,0\n"
        )
    }

    #[test]
    fn test_clean_file_end_to_end() {
        let file = create_test_file(&sample_csv());
        let cleaner = Cleaner::new();
        let outcome = cleaner.clean_file(file.path()).unwrap();

        assert_eq!(outcome.table.column_count(), 27);
        assert_eq!(outcome.report.final_columns, 27);
        assert_eq!(outcome.table.missing_cell_count(), 0);
    }

    #[test]
    fn test_inspect_reports_missing() {
        let file = create_test_file(&sample_csv());
        let cleaner = Cleaner::new();
        let report = cleaner.inspect(file.path()).unwrap();

        assert_eq!(report.rows, 2);
        assert!(report.missing_total > 0);
        assert_eq!(report.duplicate_rows, 0);
    }
}
