// File: crates/meter-sources/src/lib.rs
// Summary: Library entry point; source adapters feeding the core pipeline.

pub mod csv;
pub mod error;
pub mod remote;
pub mod xlsx;

pub use csv::{read_csv, read_csv_path};
pub use error::SourceError;
pub use remote::{fetch_meter_json, rows_from_json};
pub use xlsx::{read_sheet, sheet_names};
