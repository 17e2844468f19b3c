//! Property-based tests for the cleaning pipeline.
//!
//! These verify that the per-cell parsers never panic on arbitrary input and
//! that the pipeline's core invariants hold for randomly messy tables.

use proptest::prelude::*;

use scrubs::clean::dates::parse_date;
use scrubs::clean::derive::{age_group, stay_category};
use scrubs::clean::text::title_case;
use scrubs::clean::numeric::{parse_currency, parse_percent};
use scrubs::schema::{FINAL_COLUMNS, RAW_COLUMNS};
use scrubs::{Cleaner, DataTable};

/// Arbitrary printable-ASCII cell content.
fn cell_string() -> impl Strategy<Value = String> {
    "[ -~]{0,16}"
}

proptest! {
    #[test]
    fn parse_date_never_panics(s in "\\PC*") {
        let _ = parse_date(&s);
    }

    #[test]
    fn parse_date_is_deterministic(s in cell_string()) {
        prop_assert_eq!(parse_date(&s), parse_date(&s));
    }

    #[test]
    fn currency_and_percent_never_panic(s in "\\PC*") {
        let _ = parse_currency(&s);
        let _ = parse_percent(&s);
    }

    #[test]
    fn title_case_is_idempotent(s in cell_string()) {
        let once = title_case(&s);
        prop_assert_eq!(title_case(&once), once);
    }

    #[test]
    fn bins_cover_the_full_range(age in 1i64..=100, days in 1i64..=100) {
        prop_assert!(age_group(age).is_some());
        prop_assert!(stay_category(days).is_some());
    }

    #[test]
    fn bins_reject_out_of_range(v in prop_oneof![Just(-5i64), Just(0), 101i64..200]) {
        prop_assert!(age_group(v).is_none());
        prop_assert!(stay_category(v).is_none());
    }
}

/// Build a raw-schema table from random cells.
fn random_table(cells: Vec<Vec<String>>) -> DataTable {
    DataTable::new(
        RAW_COLUMNS.iter().map(|s| s.to_string()).collect(),
        cells,
        b',',
    )
}

proptest! {
    // Fewer cases: each runs the whole pipeline.
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn pipeline_invariants_on_messy_tables(
        rows in prop::collection::vec(
            prop::collection::vec(cell_string(), RAW_COLUMNS.len()),
            1..8,
        )
    ) {
        let mut table = random_table(rows.clone());
        let cleaner = Cleaner::new();
        let report = cleaner.clean_table(&mut table).expect("pipeline failed");

        // Fixed output shape
        prop_assert_eq!(&table.headers, &FINAL_COLUMNS.to_vec());
        prop_assert!(table.row_count() >= 1);
        prop_assert!(table.row_count() <= rows.len());
        prop_assert_eq!(report.final_rows, table.row_count());

        // Integer columns always coerce to non-negative integers
        for column in ["Age", "Days_Stayed", "Medication_Prescribed", "Lab_Tests_Count"] {
            let idx = table.column_index(column).unwrap();
            for value in table.column_values(idx) {
                let parsed: i64 = value.parse().expect("not an integer");
                prop_assert!(parsed >= 0);
            }
        }

        // Imputed text columns are never missing
        for column in [
            "Patient_Name", "Gender", "Blood_Group", "Department", "Doctor_Name",
            "Diagnosis", "Insurance_Type", "Admission_Type", "Discharge_Status",
            "Follow_Up_Required",
        ] {
            let idx = table.column_index(column).unwrap();
            for value in table.column_values(idx) {
                prop_assert!(!DataTable::is_missing(value));
            }
        }

        // Coverage always numeric, 2dp
        let idx = table.column_index("Insurance_Coverage_Percent").unwrap();
        for value in table.column_values(idx) {
            prop_assert!(value.parse::<f64>().is_ok());
        }
    }

    #[test]
    fn pipeline_is_deterministic(
        rows in prop::collection::vec(
            prop::collection::vec(cell_string(), RAW_COLUMNS.len()),
            1..6,
        )
    ) {
        let cleaner = Cleaner::new();

        let mut a = random_table(rows.clone());
        let mut b = random_table(rows);
        cleaner.clean_table(&mut a).unwrap();
        cleaner.clean_table(&mut b).unwrap();

        prop_assert_eq!(a.headers, b.headers);
        prop_assert_eq!(a.rows, b.rows);
    }
}
