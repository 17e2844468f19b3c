//! Per-column missing-value imputation.
//!
//! Policies are column-specific: fixed literals for the free-text columns,
//! the pre-imputation median for Age, the pre-imputation mode for Gender and
//! Blood_Group, canonicalized Yes/No for Follow_Up_Required, and zero for the
//! two count columns. Statistics are always computed over the values present
//! before any filling.

use super::text::title_case;
use crate::input::DataTable;
use crate::report::CleanReport;
use crate::stats;

/// Fallback when a Gender column has no usable values at all.
const DEFAULT_GENDER: &str = "Male";
/// Fallback when a Blood_Group column has no usable values at all.
const DEFAULT_BLOOD_GROUP: &str = "O+";

/// Text columns imputed with a fixed literal. The bool marks columns whose
/// present values are also trimmed.
const TEXT_FILLS: [(&str, &str, bool); 7] = [
    ("Patient_Name", "Unknown Patient", true),
    ("Department", "General Medicine", true),
    ("Doctor_Name", "Unknown Doctor", false),
    ("Diagnosis", "General Checkup", false),
    ("Insurance_Type", "Self-Pay", false),
    ("Admission_Type", "Routine Checkup", false),
    ("Discharge_Status", "Discharged", false),
];

/// Fill every missing value in the table's non-date columns.
pub fn fill_missing(table: &mut DataTable, report: &mut CleanReport) {
    let missing_before = table.missing_cell_count();

    for (column, fill, trim) in TEXT_FILLS {
        fill_text(table, column, fill, trim);
    }
    impute_age(table);
    impute_gender(table);
    impute_blood_group(table);
    impute_follow_up(table);
    impute_count(table, "Medication_Prescribed");
    impute_count(table, "Lab_Tests_Count");

    let missing_after = table.missing_cell_count();
    report.missing_before = missing_before;
    report.missing_after = missing_after;
    report.add_stage(
        "impute",
        format!(
            "Filled {} missing cells ({} remain for the date stage)",
            missing_before.saturating_sub(missing_after),
            missing_after
        ),
        missing_before.saturating_sub(missing_after),
    );
}

/// Fill a text column with a fixed literal, optionally trimming present values.
fn fill_text(table: &mut DataTable, column: &str, fill: &str, trim: bool) {
    let Some(idx) = table.column_index(column) else {
        return;
    };

    for row in 0..table.row_count() {
        let value = table.get(row, idx).unwrap_or_default().to_string();
        if DataTable::is_missing(&value) {
            table.set(row, idx, fill.to_string());
        } else if trim {
            let trimmed = value.trim();
            if trimmed != value {
                table.set(row, idx, trimmed.to_string());
            }
        }
    }
}

/// Age: coerce to numeric, fill missing with the pre-imputation median,
/// take the absolute value, truncate to integer.
fn impute_age(table: &mut DataTable) {
    let Some(idx) = table.column_index("Age") else {
        return;
    };

    let present: Vec<f64> = table
        .column_values(idx)
        .filter(|v| !DataTable::is_missing(v))
        .filter_map(|v| v.trim().parse::<f64>().ok())
        .collect();
    let median = stats::median(&present).unwrap_or(0.0);

    for row in 0..table.row_count() {
        let value = table.get(row, idx).unwrap_or_default().to_string();
        let age = if DataTable::is_missing(&value) {
            median
        } else {
            value.trim().parse::<f64>().unwrap_or(median)
        };
        table.set(row, idx, format!("{}", age.abs().trunc() as i64));
    }
}

/// Map a raw gender value to its canonical form.
fn canonical_gender(value: &str) -> String {
    let titled = title_case(value.trim());
    match titled.as_str() {
        "M" => "Male".to_string(),
        "F" => "Female".to_string(),
        _ => titled,
    }
}

/// Gender: trim, title-case, canonicalize M/F, fill missing with the mode.
fn impute_gender(table: &mut DataTable) {
    let Some(idx) = table.column_index("Gender") else {
        return;
    };

    for row in 0..table.row_count() {
        let value = table.get(row, idx).unwrap_or_default().to_string();
        if DataTable::is_missing(&value) {
            continue;
        }
        let canonical = canonical_gender(&value);
        if canonical != value {
            table.set(row, idx, canonical);
        }
    }

    let fill = stats::mode(
        table
            .column_values(idx)
            .filter(|v| !DataTable::is_missing(v)),
    )
    .unwrap_or_else(|| DEFAULT_GENDER.to_string());

    fill_text(table, "Gender", &fill, false);
}

/// Blood_Group: trim, fill missing with the mode.
fn impute_blood_group(table: &mut DataTable) {
    let Some(idx) = table.column_index("Blood_Group") else {
        return;
    };

    for row in 0..table.row_count() {
        let value = table.get(row, idx).unwrap_or_default().to_string();
        if !DataTable::is_missing(&value) && value.trim() != value {
            table.set(row, idx, value.trim().to_string());
        }
    }

    let fill = stats::mode(
        table
            .column_values(idx)
            .filter(|v| !DataTable::is_missing(v)),
    )
    .unwrap_or_else(|| DEFAULT_BLOOD_GROUP.to_string());

    fill_text(table, "Blood_Group", &fill, false);
}

/// Follow_Up_Required: uppercase + trim, canonicalize to Yes/No, fill "No".
fn impute_follow_up(table: &mut DataTable) {
    let Some(idx) = table.column_index("Follow_Up_Required") else {
        return;
    };

    for row in 0..table.row_count() {
        let value = table.get(row, idx).unwrap_or_default().to_string();
        let canonical = if DataTable::is_missing(&value) {
            "No".to_string()
        } else {
            let upper = value.trim().to_uppercase();
            match upper.as_str() {
                "Y" | "YES" | "TRUE" | "1" => "Yes".to_string(),
                "N" | "NO" | "FALSE" | "0" => "No".to_string(),
                _ => upper,
            }
        };
        if canonical != value {
            table.set(row, idx, canonical);
        }
    }
}

/// Count columns: missing or unparseable values become 0, everything else is
/// truncated to a non-negative integer.
fn impute_count(table: &mut DataTable, column: &str) {
    let Some(idx) = table.column_index(column) else {
        return;
    };

    for row in 0..table.row_count() {
        let value = table.get(row, idx).unwrap_or_default().to_string();
        let count = value.trim().parse::<f64>().unwrap_or(0.0);
        table.set(row, idx, format!("{}", count.abs().trunc() as i64));
    }
}
