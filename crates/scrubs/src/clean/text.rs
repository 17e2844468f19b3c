//! Text-field casing standardization.

use crate::input::DataTable;
use crate::report::CleanReport;
use crate::schema::TEXT_COLUMNS;

/// Title-case a string: the first letter of each word upper, the rest lower.
/// Any non-alphabetic character is a word boundary, so "self-pay" becomes
/// "Self-Pay" and "o'brien" becomes "O'Brien".
pub fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut at_boundary = true;

    for ch in s.chars() {
        if ch.is_alphabetic() {
            if at_boundary {
                out.extend(ch.to_uppercase());
            } else {
                out.extend(ch.to_lowercase());
            }
            at_boundary = false;
        } else {
            out.push(ch);
            at_boundary = true;
        }
    }

    out
}

/// Trim and title-case the free-text columns.
///
/// Runs after duplicate removal, so duplicates are judged on
/// pre-standardization text.
pub fn standardize(table: &mut DataTable, report: &mut CleanReport) {
    let mut changed = 0;

    for name in TEXT_COLUMNS {
        let Some(idx) = table.column_index(name) else {
            continue;
        };

        for row in 0..table.row_count() {
            let value = table.get(row, idx).unwrap_or_default().to_string();
            let standardized = title_case(value.trim());
            if standardized != value {
                table.set(row, idx, standardized);
                changed += 1;
            }
        }
    }

    report.add_stage(
        "text",
        format!("Standardized casing in {} text columns", TEXT_COLUMNS.len()),
        changed,
    );
}
