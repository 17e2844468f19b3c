//! The fixed column schema for the hospital patient dataset.

mod columns;

pub use columns::{FINAL_COLUMNS, RAW_COLUMNS, TEXT_COLUMNS, normalize_header};
