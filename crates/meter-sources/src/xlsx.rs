// File: crates/meter-sources/src/xlsx.rs
// Summary: Raw tables from XLSX workbooks, with sheet listing for multi-sheet files.

use std::path::Path;

use calamine::{open_workbook, Data, Reader, Xlsx};
use meter_core::RawTable;

use crate::error::SourceError;

/// Sheet names in workbook order, for the caller's sheet selector when a
/// file has more than one.
pub fn sheet_names(path: impl AsRef<Path>) -> Result<Vec<String>, SourceError> {
    let workbook: Xlsx<_> = open_workbook(path.as_ref())?;
    Ok(workbook.sheet_names().to_owned())
}

/// Read one sheet into untyped rows. Cells are stringified; datetime cells
/// are rendered in an ISO form the core's day-first parser accepts.
pub fn read_sheet(path: impl AsRef<Path>, sheet: &str) -> Result<RawTable, SourceError> {
    let mut workbook: Xlsx<_> = open_workbook(path.as_ref())?;
    let range = workbook
        .worksheet_range(sheet)
        .map_err(|_| SourceError::SheetNotFound(sheet.to_string()))?;

    let rows: Vec<Vec<String>> = range
        .rows()
        .map(|row| row.iter().map(cell_to_string).collect())
        .collect();
    tracing::debug!(sheet, rows = rows.len(), "loaded xlsx sheet");
    Ok(RawTable::new(rows))
}

fn cell_to_string(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(s) => s.clone(),
        Data::Float(f) => f.to_string(),
        Data::Int(i) => i.to_string(),
        Data::Bool(b) => b.to_string(),
        Data::DateTime(dt) => dt
            .as_datetime()
            .map(|ndt| ndt.format("%Y-%m-%d %H:%M:%S").to_string())
            .unwrap_or_else(|| dt.as_f64().to_string()),
        Data::DateTimeIso(s) | Data::DurationIso(s) => s.clone(),
        Data::Error(e) => format!("{:?}", e),
    }
}
