//! Cleaning report structures.
//!
//! The report is diagnostic output, not authoritative for correctness: the
//! cleaned table itself is the deliverable. Everything here is serde-derived
//! so the CLI can dump it as JSON next to the console rendering.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A change made by one pipeline stage.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StageChange {
    /// Stage name (e.g. "impute", "dates").
    pub stage: String,
    /// Human-readable description of what the stage did.
    pub description: String,
    /// Number of cells modified by the stage.
    pub cells_changed: usize,
}

/// Full report of one cleaning run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CleanReport {
    /// Rows in the raw table.
    pub initial_rows: usize,
    /// Columns in the raw table.
    pub initial_columns: usize,
    /// Missing cells per column before any cleaning.
    pub column_missing: IndexMap<String, usize>,
    /// Total missing cells before imputation.
    pub missing_before: usize,
    /// Total missing cells after imputation (date columns are handled in a
    /// later stage, so this may still be non-zero here).
    pub missing_after: usize,
    /// Date cells recovered by the best-effort fallback parser.
    pub dates_fallback_parsed: usize,
    /// Date cells filled with the column median.
    pub dates_filled: usize,
    /// Exact-duplicate rows dropped.
    pub duplicates_removed: usize,
    /// Derived columns appended.
    pub derived_columns: usize,
    /// Per-stage change log, in execution order.
    pub stages: Vec<StageChange>,
    /// Rows in the cleaned table.
    pub final_rows: usize,
    /// Columns in the cleaned table.
    pub final_columns: usize,
}

impl CleanReport {
    /// Record a stage change.
    pub fn add_stage(&mut self, stage: &str, description: String, cells_changed: usize) {
        self.stages.push(StageChange {
            stage: stage.to_string(),
            description,
            cells_changed,
        });
    }

    /// Total cells modified across all stages.
    pub fn total_cells_changed(&self) -> usize {
        self.stages.iter().map(|s| s.cells_changed).sum()
    }
}

/// Pre-clean quality assessment of a raw file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InspectReport {
    /// Rows in the table.
    pub rows: usize,
    /// Column names as read (before normalization).
    pub columns: Vec<String>,
    /// Missing cells per column (columns with zero missing omitted).
    pub column_missing: IndexMap<String, usize>,
    /// Missing cells as a percentage per column, 2dp.
    pub column_missing_pct: IndexMap<String, f64>,
    /// Total missing cells.
    pub missing_total: usize,
    /// Exact-duplicate row count.
    pub duplicate_rows: usize,
}
