// File: crates/meter-sources/src/csv.rs
// Summary: Raw tables from CSV input; header detection happens downstream.

use std::io::Read;
use std::path::Path;

use meter_core::RawTable;

use crate::error::SourceError;

/// Read every CSV record as an untyped row. Header-off and flexible: the
/// real header sits at an unknown offset below any preamble, and the core's
/// header locator finds it by content.
pub fn read_csv<R: Read>(reader: R) -> Result<RawTable, SourceError> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);

    let mut rows = Vec::new();
    for record in rdr.records() {
        let record = record?;
        rows.push(record.iter().map(str::to_string).collect());
    }
    tracing::debug!(rows = rows.len(), "loaded csv source");
    Ok(RawTable::new(rows))
}

pub fn read_csv_path(path: impl AsRef<Path>) -> Result<RawTable, SourceError> {
    let file = std::fs::File::open(path.as_ref())?;
    read_csv(file)
}
