//! Mixed-format date parsing and standardization.

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::input::DataTable;
use crate::report::CleanReport;
use crate::stats;

/// The two date columns in the dataset.
const DATE_COLUMNS: [&str; 2] = ["Admission_Date", "Discharge_Date"];

/// Formats tried in order; the first success wins. An ambiguous string like
/// "03/04/2024" is therefore read month-first.
const PRIMARY_FORMATS: [&str; 3] = ["%m/%d/%Y", "%Y-%m-%d", "%d/%m/%Y"];

/// Numeric formats for the best-effort fallback pass.
const FALLBACK_NUMERIC_FORMATS: [&str; 4] = ["%Y/%m/%d", "%d-%m-%Y", "%m-%d-%Y", "%Y.%m.%d"];

/// Month-name formats for the best-effort fallback pass.
const FALLBACK_NAMED_FORMATS: [&str; 4] = ["%B %d, %Y", "%b %d, %Y", "%d %B %Y", "%d %b %Y"];

/// Shape of a purely numeric date, used to pick the fallback format family.
static NUMERIC_DATE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{1,4}[-/.]\d{1,2}[-/.]\d{1,4}$").unwrap());

/// Parse a cell against the primary format list.
pub fn parse_primary(value: &str) -> Option<NaiveDate> {
    let trimmed = value.trim();
    PRIMARY_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(trimmed, fmt).ok())
}

/// Best-effort generic parse over a wider format list.
pub fn parse_fallback(value: &str) -> Option<NaiveDate> {
    let trimmed = value.trim();
    let formats: &[&str] = if NUMERIC_DATE.is_match(trimmed) {
        &FALLBACK_NUMERIC_FORMATS
    } else {
        &FALLBACK_NAMED_FORMATS
    };

    formats
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(trimmed, fmt).ok())
}

/// Parse a cell, trying the primary formats then the fallback. Never errors;
/// an unparseable cell is simply `None`.
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    if DataTable::is_missing(value) {
        return None;
    }
    parse_primary(value).or_else(|| parse_fallback(value))
}

/// Parse both date columns, fill nulls with the column's median date, and
/// rewrite every cell as ISO `YYYY-MM-DD`.
///
/// A column with no parseable dates at all is left blank; the final
/// projection still carries it through.
pub fn standardize(table: &mut DataTable, report: &mut CleanReport) {
    let mut fallback_parsed = 0;
    let mut filled = 0;
    let mut changed = 0;

    for column in DATE_COLUMNS {
        let Some(idx) = table.column_index(column) else {
            continue;
        };

        let parsed: Vec<Option<NaiveDate>> = table
            .column_values(idx)
            .map(|value| {
                if DataTable::is_missing(value) {
                    return None;
                }
                match parse_primary(value) {
                    Some(date) => Some(date),
                    None => {
                        let date = parse_fallback(value);
                        if date.is_some() {
                            fallback_parsed += 1;
                        }
                        date
                    }
                }
            })
            .collect();

        let known: Vec<NaiveDate> = parsed.iter().flatten().copied().collect();
        let median = stats::median_date(&known);

        for (row, slot) in parsed.iter().enumerate() {
            let date = (*slot).or(median);
            if slot.is_none() && date.is_some() {
                filled += 1;
            }

            let new_value = date
                .map(|d| d.format("%Y-%m-%d").to_string())
                .unwrap_or_default();
            if table.get(row, idx) != Some(new_value.as_str()) {
                table.set(row, idx, new_value);
                changed += 1;
            }
        }
    }

    report.dates_fallback_parsed = fallback_parsed;
    report.dates_filled = filled;
    report.add_stage(
        "dates",
        format!("Standardized dates to ISO; {filled} filled with the column median"),
        changed,
    );
}
