//! The fixed hospital patient record schema.
//!
//! The dataset shape is known in advance: 19 raw columns in, 27 columns out.
//! Nothing is inferred; the final column list is authoritative.

/// The raw columns expected in the source file, in source order.
pub const RAW_COLUMNS: [&str; 19] = [
    "Patient_ID",
    "Patient_Name",
    "Age",
    "Gender",
    "Blood_Group",
    "Admission_Date",
    "Discharge_Date",
    "Days_Stayed",
    "Department",
    "Doctor_Name",
    "Diagnosis",
    "Admission_Type",
    "Discharge_Status",
    "Follow_Up_Required",
    "Treatment_Cost",
    "Insurance_Type",
    "Insurance_Coverage",
    "Medication_Prescribed",
    "Lab_Tests_Count",
];

/// The cleaned output columns, in final order.
pub const FINAL_COLUMNS: [&str; 27] = [
    "Patient_ID",
    "Patient_Name",
    "Age",
    "Age_Group",
    "Gender",
    "Blood_Group",
    "Admission_Date",
    "Admission_Year",
    "Admission_Month",
    "Admission_Month_Name",
    "Admission_Quarter",
    "Discharge_Date",
    "Days_Stayed",
    "Stay_Category",
    "Department",
    "Doctor_Name",
    "Diagnosis",
    "Admission_Type",
    "Discharge_Status",
    "Follow_Up_Required",
    "Treatment_Cost",
    "Insurance_Type",
    "Insurance_Coverage_Percent",
    "Insurance_Paid",
    "Out_Of_Pocket_Cost",
    "Medication_Prescribed",
    "Lab_Tests_Count",
];

/// Text columns that receive trim + title-case standardization.
pub const TEXT_COLUMNS: [&str; 7] = [
    "Patient_Name",
    "Department",
    "Doctor_Name",
    "Diagnosis",
    "Insurance_Type",
    "Admission_Type",
    "Discharge_Status",
];

/// Normalize a raw header name to its canonical underscore form.
///
/// Trims the name, then collapses internal whitespace runs to a single
/// underscore, so `" Patient Name "` becomes `"Patient_Name"`. The canonical
/// names in [`RAW_COLUMNS`] are what the pipeline stages look up.
pub fn normalize_header(raw: &str) -> String {
    raw.trim()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("_")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_header() {
        assert_eq!(normalize_header(" Patient Name "), "Patient_Name");
        assert_eq!(normalize_header("Patient_ID"), "Patient_ID");
        assert_eq!(normalize_header("Lab  Tests   Count"), "Lab_Tests_Count");
        assert_eq!(normalize_header("Age"), "Age");
    }

    #[test]
    fn test_normalize_header_idempotent() {
        for name in RAW_COLUMNS {
            assert_eq!(normalize_header(name), name);
        }
    }

    #[test]
    fn test_final_columns_shape() {
        assert_eq!(FINAL_COLUMNS.len(), 27);
        assert!(FINAL_COLUMNS.contains(&"Insurance_Coverage_Percent"));
        assert!(!FINAL_COLUMNS.contains(&"Insurance_Coverage"));
    }
}
