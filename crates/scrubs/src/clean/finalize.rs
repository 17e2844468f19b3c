//! Final column rename and fixed reordering.

use crate::error::{Result, ScrubError};
use crate::input::DataTable;
use crate::report::CleanReport;
use crate::schema::FINAL_COLUMNS;

/// Rename Insurance_Coverage and project the table onto the fixed 27-column
/// output order. A missing expected column is fatal: the dataset's shape is
/// assumed fixed, and no partial output is written.
pub fn rename_and_reorder(table: &mut DataTable, report: &mut CleanReport) -> Result<()> {
    table.rename_column("Insurance_Coverage", "Insurance_Coverage_Percent");

    let mut indices = Vec::with_capacity(FINAL_COLUMNS.len());
    for name in FINAL_COLUMNS {
        let idx = table
            .column_index(name)
            .ok_or_else(|| ScrubError::MissingColumn(name.to_string()))?;
        indices.push(idx);
    }

    let rows = std::mem::take(&mut table.rows);
    table.rows = rows
        .into_iter()
        .map(|row| indices.iter().map(|&i| row[i].clone()).collect())
        .collect();
    table.headers = FINAL_COLUMNS.iter().map(|s| s.to_string()).collect();

    report.add_stage(
        "finalize",
        "Renamed Insurance_Coverage and reordered to the final 27 columns".to_string(),
        0,
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_column_is_fatal() {
        let mut table = DataTable::new(
            vec!["Patient_ID".into()],
            vec![vec!["P001".into()]],
            b',',
        );
        let mut report = CleanReport::default();
        let err = rename_and_reorder(&mut table, &mut report).unwrap_err();

        assert!(matches!(err, ScrubError::MissingColumn(_)));
    }

    #[test]
    fn test_reorder_projects_all_final_columns() {
        // Build a table holding every final column (pre-rename), shuffled.
        let mut headers: Vec<String> = FINAL_COLUMNS
            .iter()
            .map(|s| s.to_string())
            .collect();
        let pos = headers
            .iter()
            .position(|h| h == "Insurance_Coverage_Percent")
            .unwrap();
        headers[pos] = "Insurance_Coverage".to_string();
        headers.reverse();

        let row: Vec<String> = (0..headers.len()).map(|i| i.to_string()).collect();
        let mut table = DataTable::new(headers, vec![row], b',');

        let mut report = CleanReport::default();
        rename_and_reorder(&mut table, &mut report).unwrap();

        assert_eq!(table.headers.len(), 27);
        assert_eq!(table.headers[0], "Patient_ID");
        assert_eq!(table.headers[22], "Insurance_Coverage_Percent");
        // Patient_ID was last before the reversal-projection
        assert_eq!(table.get(0, 0), Some("26"));
    }
}
