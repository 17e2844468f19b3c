//! scrubs: cleaning pipeline for hospital patient record tables.
//!
//! Takes one messy tabular dataset of patient records and produces a
//! cleaned, enriched, reordered table plus a quality report. The pipeline is
//! a strict sequence of column-wise stages over one in-memory table:
//! header normalization, per-column imputation, mixed-format date parsing,
//! numeric normalization, duplicate removal, derived columns, text casing,
//! and a final projection onto the fixed 27-column output schema.
//!
//! # Example
//!
//! ```no_run
//! use scrubs::Cleaner;
//!
//! let cleaner = Cleaner::new();
//! let outcome = cleaner.clean_file("hospital_patient_data.csv").unwrap();
//!
//! println!("Rows: {}", outcome.table.row_count());
//! println!("Duplicates removed: {}", outcome.report.duplicates_removed);
//! ```

pub mod clean;
pub mod error;
pub mod input;
pub mod output;
pub mod report;
pub mod schema;
pub mod stats;

mod cleaner;

pub use cleaner::{CleanOutcome, Cleaner, CleanerConfig};
pub use error::{Result, ScrubError};
pub use input::{DataTable, Parser, ParserConfig, SourceMetadata};
pub use report::{CleanReport, InspectReport, StageChange};
