// File: crates/meter-core/src/window.rs
// Summary: Time-of-day window validation and date/window row filtering.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime, Timelike};

use crate::error::PipelineError;
use crate::table::TypedTable;

/// One day plus an inclusive [start, end] time-of-day pair. `NaiveTime` is
/// the comparable time-of-day type; ordering matches zero-padded "HH:MM"
/// string comparison, without the format-drift risk.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TimeWindow {
    pub date: NaiveDate,
    pub start: NaiveTime,
    pub end: NaiveTime,
}

impl TimeWindow {
    /// `start` must be strictly before `end`; equal or inverted selections
    /// are a user error and produce no chart.
    pub fn new(
        date: NaiveDate,
        start: NaiveTime,
        end: NaiveTime,
    ) -> Result<Self, PipelineError> {
        if start >= end {
            return Err(PipelineError::InvalidWindow { start, end });
        }
        Ok(Self { date, start, end })
    }

    /// Membership test on minute precision, matching the upstream "HH:MM"
    /// comparison (seconds are dropped).
    pub fn contains(&self, ts: NaiveDateTime) -> bool {
        let t = truncate_to_minute(ts.time());
        ts.date() == self.date && t >= self.start && t <= self.end
    }
}

fn truncate_to_minute(t: NaiveTime) -> NaiveTime {
    NaiveTime::from_hms_opt(t.hour(), t.minute(), 0).unwrap_or(t)
}

/// Distinct times-of-day (minute precision) present on `date`, ascending.
/// These populate the start/end selectors; an empty result means the date
/// has no data.
pub fn times_for_date(table: &TypedTable, date: NaiveDate) -> Vec<NaiveTime> {
    let mut times: Vec<NaiveTime> = table
        .timestamps()
        .iter()
        .filter(|ts| ts.date() == date)
        .map(|ts| truncate_to_minute(ts.time()))
        .collect();
    times.sort();
    times.dedup();
    times
}

/// Rows of one column inside a window, sorted ascending by timestamp.
/// Cells are still raw text here; the normalizer runs downstream.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FilteredSeries {
    pub rows: Vec<(NaiveDateTime, Option<String>)>,
}

impl FilteredSeries {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Re-apply a window to this series. With the window that produced it,
    /// the result is identical (the filter is idempotent).
    pub fn restrict(&self, window: &TimeWindow) -> FilteredSeries {
        FilteredSeries {
            rows: self
                .rows
                .iter()
                .filter(|(ts, _)| window.contains(*ts))
                .cloned()
                .collect(),
        }
    }
}

/// Select `column` rows matching the window's date and time span. No rows
/// on the date at all and no rows inside the span are distinct conditions;
/// both are warnings, not hard errors.
pub fn filter_window(
    table: &TypedTable,
    column: &str,
    window: &TimeWindow,
) -> Result<FilteredSeries, PipelineError> {
    let cells = table
        .column(column)
        .ok_or_else(|| PipelineError::UnknownColumn(column.to_string()))?;

    if !table.timestamps().iter().any(|ts| ts.date() == window.date) {
        return Err(PipelineError::EmptyDate(window.date));
    }

    let mut rows: Vec<(NaiveDateTime, Option<String>)> = table
        .timestamps()
        .iter()
        .zip(cells.iter())
        .filter(|(ts, _)| window.contains(**ts))
        .map(|(ts, cell)| (*ts, cell.clone()))
        .collect();

    if rows.is_empty() {
        return Err(PipelineError::EmptyWindow {
            start: window.start,
            end: window.end,
        });
    }

    rows.sort_by_key(|(ts, _)| *ts);
    Ok(FilteredSeries { rows })
}
