//! Numeric-field normalization: currency, percentages, day counts.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::input::DataTable;
use crate::report::CleanReport;
use crate::stats;

/// Characters stripped from currency strings before parsing.
static CURRENCY_JUNK: Lazy<Regex> = Lazy::new(|| Regex::new(r"[$\s]").unwrap());

/// Round to two decimal places.
fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Parse a currency cell: strip `$` and whitespace, replace `,` with `.`.
///
/// The comma substitution mirrors the source data's decimal-comma entries;
/// it also means a thousands-separated value like "1,200.50" will not parse
/// and falls back to the column median. That is the documented behavior of
/// the upstream dataset pipeline.
pub fn parse_currency(value: &str) -> Option<f64> {
    if DataTable::is_missing(value) {
        return None;
    }
    let scrubbed = CURRENCY_JUNK.replace_all(value, "").replace(',', ".");
    scrubbed.parse::<f64>().ok()
}

/// Parse a percentage cell: strip `%` and whitespace.
pub fn parse_percent(value: &str) -> Option<f64> {
    if DataTable::is_missing(value) {
        return None;
    }
    value.trim().trim_end_matches('%').trim().parse::<f64>().ok()
}

/// Normalize Treatment_Cost, Insurance_Coverage, and Days_Stayed.
pub fn normalize(table: &mut DataTable, report: &mut CleanReport) {
    let mut changed = 0;

    changed += clean_treatment_cost(table);
    changed += clean_insurance_coverage(table);
    changed += clean_days_stayed(table);

    report.add_stage(
        "numeric",
        "Normalized currency, percentage, and day-count columns".to_string(),
        changed,
    );
}

/// Treatment_Cost: parse, fill missing with the column median, round to 2dp.
fn clean_treatment_cost(table: &mut DataTable) -> usize {
    let Some(idx) = table.column_index("Treatment_Cost") else {
        return 0;
    };

    let parsed: Vec<Option<f64>> = table.column_values(idx).map(parse_currency).collect();
    let present: Vec<f64> = parsed.iter().flatten().copied().collect();
    let median = stats::median(&present);

    let mut changed = 0;
    for (row, slot) in parsed.iter().enumerate() {
        let new_value = (*slot)
            .or(median)
            .map(|cost| format!("{:.2}", round2(cost)))
            .unwrap_or_default();
        if table.get(row, idx) != Some(new_value.as_str()) {
            table.set(row, idx, new_value);
            changed += 1;
        }
    }
    changed
}

/// Insurance_Coverage: parse, missing or unparseable becomes 0, round to 2dp.
/// Out-of-range values pass through unclamped.
fn clean_insurance_coverage(table: &mut DataTable) -> usize {
    let Some(idx) = table.column_index("Insurance_Coverage") else {
        return 0;
    };

    let mut changed = 0;
    for row in 0..table.row_count() {
        let value = table.get(row, idx).unwrap_or_default().to_string();
        let coverage = parse_percent(&value).unwrap_or(0.0);
        let new_value = format!("{:.2}", round2(coverage));
        if new_value != value {
            table.set(row, idx, new_value);
            changed += 1;
        }
    }
    changed
}

/// Days_Stayed: coerce to numeric, take absolute value, missing becomes 1,
/// truncate to integer.
fn clean_days_stayed(table: &mut DataTable) -> usize {
    let Some(idx) = table.column_index("Days_Stayed") else {
        return 0;
    };

    let mut changed = 0;
    for row in 0..table.row_count() {
        let value = table.get(row, idx).unwrap_or_default().to_string();
        let days = if DataTable::is_missing(&value) {
            1.0
        } else {
            value.trim().parse::<f64>().map(f64::abs).unwrap_or(1.0)
        };
        let new_value = format!("{}", days.trunc() as i64);
        if new_value != value {
            table.set(row, idx, new_value);
            changed += 1;
        }
    }
    changed
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_currency() {
        assert_eq!(parse_currency("$1200.50"), Some(1200.50));
        assert_eq!(parse_currency(" $ 300 "), Some(300.0));
        assert_eq!(parse_currency("450,75"), Some(450.75));
        assert_eq!(parse_currency(""), None);
        assert_eq!(parse_currency("free"), None);
    }

    #[test]
    fn test_parse_currency_thousands_separator_falls_out() {
        // "1,200.50" becomes "1.200.50" which does not parse
        assert_eq!(parse_currency("$1,200.50"), None);
    }

    #[test]
    fn test_parse_percent() {
        assert_eq!(parse_percent("80%"), Some(80.0));
        assert_eq!(parse_percent(" 65 % "), Some(65.0));
        assert_eq!(parse_percent("42.5"), Some(42.5));
        assert_eq!(parse_percent(""), None);
    }

    fn table(headers: &[&str], rows: &[&[&str]]) -> DataTable {
        DataTable::new(
            headers.iter().map(|s| s.to_string()).collect(),
            rows.iter()
                .map(|r| r.iter().map(|s| s.to_string()).collect())
                .collect(),
            b',',
        )
    }

    #[test]
    fn test_treatment_cost_median_fill() {
        let mut t = table(
            &["Treatment_Cost"],
            &[&["$100.00"], &["$300.00"], &["bogus"]],
        );
        let mut report = CleanReport::default();
        normalize(&mut t, &mut report);

        assert_eq!(t.get(0, 0), Some("100.00"));
        assert_eq!(t.get(2, 0), Some("200.00"));
    }

    #[test]
    fn test_insurance_coverage_defaults_to_zero() {
        let mut t = table(&["Insurance_Coverage"], &[&["80%"], &[""], &["oops"]]);
        let mut report = CleanReport::default();
        normalize(&mut t, &mut report);

        assert_eq!(t.get(0, 0), Some("80.00"));
        assert_eq!(t.get(1, 0), Some("0.00"));
        assert_eq!(t.get(2, 0), Some("0.00"));
    }

    #[test]
    fn test_insurance_coverage_not_clamped() {
        let mut t = table(&["Insurance_Coverage"], &[&["150"]]);
        let mut report = CleanReport::default();
        normalize(&mut t, &mut report);

        assert_eq!(t.get(0, 0), Some("150.00"));
    }

    #[test]
    fn test_days_stayed() {
        let mut t = table(&["Days_Stayed"], &[&["-4"], &[""], &["7.0"]]);
        let mut report = CleanReport::default();
        normalize(&mut t, &mut report);

        assert_eq!(t.get(0, 0), Some("4"));
        assert_eq!(t.get(1, 0), Some("1"));
        assert_eq!(t.get(2, 0), Some("7"));
    }
}
