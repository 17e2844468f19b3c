//! Column-name normalization.

use crate::input::DataTable;
use crate::report::CleanReport;
use crate::schema::normalize_header;

/// Normalize every header to its canonical underscore form.
///
/// Column order is unchanged and the operation is idempotent.
pub fn normalize(table: &mut DataTable, report: &mut CleanReport) {
    let mut renamed = 0;
    for header in &mut table.headers {
        let normalized = normalize_header(header);
        if *header != normalized {
            *header = normalized;
            renamed += 1;
        }
    }

    report.add_stage(
        "headers",
        format!("Normalized {renamed} column name(s)"),
        0,
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table_with_headers(headers: &[&str]) -> DataTable {
        DataTable::new(
            headers.iter().map(|s| s.to_string()).collect(),
            vec![vec![String::new(); headers.len()]],
            b',',
        )
    }

    #[test]
    fn test_normalize_headers() {
        let mut table = table_with_headers(&[" Patient ID", "Patient Name ", "Age"]);
        let mut report = CleanReport::default();
        normalize(&mut table, &mut report);

        assert_eq!(table.headers, vec!["Patient_ID", "Patient_Name", "Age"]);
    }

    #[test]
    fn test_normalize_is_idempotent() {
        let mut table = table_with_headers(&["Patient ID", "Age"]);
        let mut report = CleanReport::default();
        normalize(&mut table, &mut report);
        let once = table.headers.clone();
        normalize(&mut table, &mut report);

        assert_eq!(table.headers, once);
    }
}
