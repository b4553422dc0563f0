// File: crates/meter-sources/src/error.rs
// Summary: Failures while turning an external source into a raw table.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("csv parse error: {0}")]
    Csv(#[from] csv::Error),
    #[error("workbook error: {0}")]
    Workbook(#[from] calamine::XlsxError),
    #[error("sheet '{0}' not found in workbook")]
    SheetNotFound(String),
    #[error("http request failed: {0}")]
    Http(#[from] ureq::Error),
    #[error("json parse error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("expected a JSON array of row objects")]
    UnexpectedPayload,
}
