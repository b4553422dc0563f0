// File: crates/meter-core/src/error.rs
// Summary: Stage error taxonomy; every failure is a value, none are fatal to the session.

use chrono::{NaiveDate, NaiveTime};
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum PipelineError {
    #[error("no header row containing a recognized datetime label")]
    HeaderNotFound,
    #[error("no datetime column among the detected headers")]
    MissingDatetimeColumn,
    #[error("column '{0}' not present in the table")]
    UnknownColumn(String),
    #[error("no data for {0}")]
    EmptyDate(NaiveDate),
    #[error("no data between {start} and {end}")]
    EmptyWindow { start: NaiveTime, end: NaiveTime },
    #[error("start time {start} must be before end time {end}")]
    InvalidWindow { start: NaiveTime, end: NaiveTime },
    #[error("column '{0}' has no numeric values in the selected window")]
    NoNumericData(String),
}

impl PipelineError {
    /// Empty selections are warnings (nothing to draw, user picks again);
    /// everything else is a hard error for the run.
    pub fn is_warning(&self) -> bool {
        matches!(
            self,
            PipelineError::EmptyDate(_) | PipelineError::EmptyWindow { .. }
        )
    }
}
