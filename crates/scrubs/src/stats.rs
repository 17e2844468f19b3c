//! Column statistics used by the imputation stages.

use chrono::{Datelike, NaiveDate};
use indexmap::IndexMap;

/// Median of a numeric sample. Averages the two middle values for
/// even-length input. Returns `None` for an empty sample.
pub fn median(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }

    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 1 {
        Some(sorted[mid])
    } else {
        Some((sorted[mid - 1] + sorted[mid]) / 2.0)
    }
}

/// Median date under ordinal ordering. For even-length input the two middle
/// ordinals are averaged (flooring), so the result is always a real date.
pub fn median_date(dates: &[NaiveDate]) -> Option<NaiveDate> {
    if dates.is_empty() {
        return None;
    }

    let mut ordinals: Vec<i32> = dates.iter().map(|d| d.num_days_from_ce()).collect();
    ordinals.sort_unstable();

    let mid = ordinals.len() / 2;
    let ordinal = if ordinals.len() % 2 == 1 {
        ordinals[mid]
    } else {
        (ordinals[mid - 1] + ordinals[mid]) / 2
    };

    NaiveDate::from_num_days_from_ce_opt(ordinal)
}

/// Most frequent value in an iterator of non-missing values.
///
/// Ties break toward the first-encountered value; the `IndexMap` keeps
/// insertion order so a plain strictly-greater scan gives that for free.
pub fn mode<'a>(values: impl Iterator<Item = &'a str>) -> Option<String> {
    let mut counts: IndexMap<&str, usize> = IndexMap::new();
    for value in values {
        *counts.entry(value).or_insert(0) += 1;
    }

    let mut best: Option<(&str, usize)> = None;
    for (value, count) in &counts {
        match best {
            Some((_, best_count)) if *count <= best_count => {}
            _ => best = Some((*value, *count)),
        }
    }

    best.map(|(value, _)| value.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_median_odd() {
        assert_eq!(median(&[3.0, 1.0, 2.0]), Some(2.0));
    }

    #[test]
    fn test_median_even_averages() {
        assert_eq!(median(&[1.0, 2.0, 3.0, 4.0]), Some(2.5));
    }

    #[test]
    fn test_median_empty() {
        assert_eq!(median(&[]), None);
    }

    #[test]
    fn test_median_date() {
        let dates = vec![
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            NaiveDate::from_ymd_opt(2024, 1, 11).unwrap(),
            NaiveDate::from_ymd_opt(2024, 1, 3).unwrap(),
        ];
        assert_eq!(
            median_date(&dates),
            Some(NaiveDate::from_ymd_opt(2024, 1, 3).unwrap())
        );
    }

    #[test]
    fn test_median_date_even() {
        let dates = vec![
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            NaiveDate::from_ymd_opt(2024, 1, 5).unwrap(),
        ];
        assert_eq!(
            median_date(&dates),
            Some(NaiveDate::from_ymd_opt(2024, 1, 3).unwrap())
        );
    }

    #[test]
    fn test_mode_basic() {
        let values = ["A+", "O-", "A+"];
        assert_eq!(mode(values.iter().copied()), Some("A+".to_string()));
    }

    #[test]
    fn test_mode_tie_breaks_first_encountered() {
        let values = ["Female", "Male", "Male", "Female"];
        assert_eq!(mode(values.iter().copied()), Some("Female".to_string()));
    }

    #[test]
    fn test_mode_empty() {
        assert_eq!(mode(std::iter::empty()), None);
    }
}
