//! Cleaned-table writers: delimited text and spreadsheet.

use std::path::Path;

use rust_xlsxwriter::Workbook;

use crate::error::{Result, ScrubError};
use crate::input::DataTable;

/// Write the table as comma-delimited text.
pub fn write_csv(table: &DataTable, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    let mut writer = csv::WriterBuilder::new().from_path(path)?;

    writer.write_record(&table.headers)?;
    for row in &table.rows {
        writer.write_record(row)?;
    }
    writer.flush().map_err(|e| ScrubError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;

    Ok(())
}

/// Write the table as an xlsx workbook with a single sheet.
///
/// Cells are written as strings; the cleaned table already carries its
/// canonical textual formatting (ISO dates, 2dp amounts).
pub fn write_xlsx(table: &DataTable, path: impl AsRef<Path>) -> Result<()> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();

    for (col, header) in table.headers.iter().enumerate() {
        worksheet.write_string(0, col as u16, header)?;
    }
    for (row_idx, row) in table.rows.iter().enumerate() {
        for (col, cell) in row.iter().enumerate() {
            worksheet.write_string(row_idx as u32 + 1, col as u16, cell)?;
        }
    }

    workbook.save(path.as_ref())?;
    Ok(())
}
