//! Exact-duplicate row removal.

use std::collections::HashSet;

use crate::input::DataTable;
use crate::report::CleanReport;

/// Remove rows that are exact duplicates across every column, keeping the
/// first occurrence in original order.
pub fn drop_duplicates(table: &mut DataTable, report: &mut CleanReport) {
    let before = table.row_count();

    let mut seen: HashSet<Vec<String>> = HashSet::with_capacity(before);
    table.rows.retain(|row| seen.insert(row.clone()));

    let removed = before - table.row_count();
    report.duplicates_removed = removed;
    report.add_stage("dedup", format!("Removed {removed} exact duplicate row(s)"), 0);
}

/// Count exact-duplicate rows without modifying the table.
pub fn count_duplicates(table: &DataTable) -> usize {
    let mut seen: HashSet<&Vec<String>> = HashSet::with_capacity(table.row_count());
    table.rows.iter().filter(|row| !seen.insert(row)).count()
}
