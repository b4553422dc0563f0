// File: crates/meter-core/src/stats.rs
// Summary: Mean/peak/min statistics with unit-suffixed 2-decimal formatting.

use serde::Serialize;

use crate::error::PipelineError;

/// The three scalars shown beside every chart, over the same filtered,
/// normalized values the chart draws.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SummaryStats {
    pub mean: f64,
    pub peak: f64,
    pub min: f64,
    pub unit: String,
}

impl SummaryStats {
    pub fn mean_label(&self) -> String {
        format_value(self.mean, &self.unit)
    }

    pub fn peak_label(&self) -> String {
        format_value(self.peak, &self.unit)
    }

    pub fn min_label(&self) -> String {
        format_value(self.min, &self.unit)
    }
}

/// "50.00 kW" style; columns without a unit get just the number.
pub fn format_value(value: f64, unit: &str) -> String {
    if unit.is_empty() {
        format!("{:.2}", value)
    } else {
        format!("{:.2} {}", value, unit)
    }
}

/// Summarize normalized values for `column`. Empty input means the column
/// yielded nothing convertible inside the window; that is fatal for the
/// render step.
pub fn summarize(
    values: &[f64],
    column: &str,
    unit: &str,
) -> Result<SummaryStats, PipelineError> {
    if values.is_empty() {
        return Err(PipelineError::NoNumericData(column.to_string()));
    }
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    let mut sum = 0.0;
    for &v in values {
        min = min.min(v);
        max = max.max(v);
        sum += v;
    }
    Ok(SummaryStats {
        mean: sum / values.len() as f64,
        peak: max,
        min,
        unit: unit.to_string(),
    })
}
