//! Derived-column computation.
//!
//! Adds the financial split, the admission date parts, and the binned
//! categories. Derived columns are computed only from already-cleaned source
//! columns and have no independent lifecycle.

use chrono::{Datelike, NaiveDate};

use crate::input::DataTable;
use crate::report::CleanReport;

/// Round to two decimal places.
fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Bin an age into its labeled group. Ages outside (0, 100] are unlabeled.
pub fn age_group(age: i64) -> Option<&'static str> {
    match age {
        1..=18 => Some("0-18"),
        19..=35 => Some("19-35"),
        36..=50 => Some("36-50"),
        51..=65 => Some("51-65"),
        66..=100 => Some("65+"),
        _ => None,
    }
}

/// Bin a stay length into its labeled category. Values outside (0, 100] are
/// unlabeled.
pub fn stay_category(days: i64) -> Option<&'static str> {
    match days {
        1..=3 => Some("Short (1-3)"),
        4..=7 => Some("Medium (4-7)"),
        8..=14 => Some("Long (8-14)"),
        15..=100 => Some("Extended (15+)"),
        _ => None,
    }
}

/// Append a fully-populated column.
fn push_column(table: &mut DataTable, name: &str, values: Vec<String>) {
    table.add_column(name.to_string(), String::new());
    let idx = table.column_count() - 1;
    for (row, value) in values.into_iter().enumerate() {
        table.set(row, idx, value);
    }
}

/// Read a column as f64, defaulting unparseable cells to 0.
fn column_as_f64(table: &DataTable, name: &str) -> Option<Vec<f64>> {
    let idx = table.column_index(name)?;
    Some(
        table
            .column_values(idx)
            .map(|v| v.trim().parse::<f64>().unwrap_or(0.0))
            .collect(),
    )
}

/// Compute and append all derived columns.
pub fn add_columns(table: &mut DataTable, report: &mut CleanReport) {
    let before = table.column_count();

    add_financial_split(table);
    add_admission_parts(table);
    add_bins(table);

    let added = table.column_count() - before;
    report.derived_columns = added;
    report.add_stage("derive", format!("Added {added} calculated column(s)"), 0);
}

/// Out_Of_Pocket_Cost and Insurance_Paid from cost and coverage.
fn add_financial_split(table: &mut DataTable) {
    let (Some(costs), Some(coverages)) = (
        column_as_f64(table, "Treatment_Cost"),
        column_as_f64(table, "Insurance_Coverage"),
    ) else {
        return;
    };

    let paid: Vec<String> = costs
        .iter()
        .zip(&coverages)
        .map(|(cost, cov)| format!("{:.2}", round2(cost * cov / 100.0)))
        .collect();
    let out_of_pocket: Vec<String> = costs
        .iter()
        .zip(&coverages)
        .map(|(cost, cov)| format!("{:.2}", round2(cost * (100.0 - cov) / 100.0)))
        .collect();

    push_column(table, "Out_Of_Pocket_Cost", out_of_pocket);
    push_column(table, "Insurance_Paid", paid);
}

/// Year, month, month name, and quarter from the (now ISO) admission date.
fn add_admission_parts(table: &mut DataTable) {
    let Some(idx) = table.column_index("Admission_Date") else {
        return;
    };

    let dates: Vec<Option<NaiveDate>> = table
        .column_values(idx)
        .map(|v| NaiveDate::parse_from_str(v.trim(), "%Y-%m-%d").ok())
        .collect();

    let years = dates
        .iter()
        .map(|d| d.map(|d| d.year().to_string()).unwrap_or_default())
        .collect();
    let months = dates
        .iter()
        .map(|d| d.map(|d| d.month().to_string()).unwrap_or_default())
        .collect();
    let month_names = dates
        .iter()
        .map(|d| d.map(|d| d.format("%B").to_string()).unwrap_or_default())
        .collect();
    let quarters = dates
        .iter()
        .map(|d| {
            d.map(|d| ((d.month() - 1) / 3 + 1).to_string())
                .unwrap_or_default()
        })
        .collect();

    push_column(table, "Admission_Year", years);
    push_column(table, "Admission_Month", months);
    push_column(table, "Admission_Month_Name", month_names);
    push_column(table, "Admission_Quarter", quarters);
}

/// Age_Group and Stay_Category bins.
fn add_bins(table: &mut DataTable) {
    if let Some(idx) = table.column_index("Age") {
        let groups: Vec<String> = table
            .column_values(idx)
            .map(|v| {
                v.trim()
                    .parse::<i64>()
                    .ok()
                    .and_then(age_group)
                    .unwrap_or_default()
                    .to_string()
            })
            .collect();
        push_column(table, "Age_Group", groups);
    }

    if let Some(idx) = table.column_index("Days_Stayed") {
        let categories: Vec<String> = table
            .column_values(idx)
            .map(|v| {
                v.trim()
                    .parse::<i64>()
                    .ok()
                    .and_then(stay_category)
                    .unwrap_or_default()
                    .to_string()
            })
            .collect();
        push_column(table, "Stay_Category", categories);
    }
}
