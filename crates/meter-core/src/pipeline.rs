// File: crates/meter-core/src/pipeline.rs
// Summary: Immutable render request threaded through the pure pipeline stages.

use crate::axis::axis_range;
use crate::chart::{assemble_chart, ChartSpec, Theme};
use crate::config::PipelineConfig;
use crate::error::PipelineError;
use crate::header::{locate_header, RawTable};
use crate::numeric::extract_number;
use crate::stats::{summarize, SummaryStats};
use crate::table::TypedTable;
use crate::window::{filter_window, TimeWindow};

/// One render action: which column, over which date/time window. Built once
/// per user trigger and never mutated; replaces the upstream pattern of
/// widget state driving pipeline branches.
#[derive(Clone, Debug)]
pub struct RenderRequest {
    pub column: String,
    pub window: TimeWindow,
}

/// The chart description plus the three statistics, ready for the renderer.
#[derive(Clone, Debug)]
pub struct RenderOutput {
    pub chart: ChartSpec,
    pub stats: SummaryStats,
    pub rows: usize,
}

/// Locate the header inside `raw` and load the typed table. The first two
/// failure branches of the taxonomy live here: no header row, no datetime
/// column.
pub fn load_table(raw: &RawTable, config: &PipelineConfig) -> Result<TypedTable, PipelineError> {
    let header_row =
        locate_header(raw, &config.header_labels).ok_or(PipelineError::HeaderNotFound)?;
    TypedTable::from_raw(raw, header_row, config)
}

/// Run filter -> normalize -> stats -> axis -> chart for one request.
/// Every stage returns a value; the caller decides how to surface warnings
/// versus errors (`PipelineError::is_warning`).
pub fn run_pipeline(
    table: &TypedTable,
    request: &RenderRequest,
    config: &PipelineConfig,
) -> Result<RenderOutput, PipelineError> {
    let filtered = filter_window(table, &request.column, &request.window)?;

    // Rows whose cell has no extractable number are plotted as gaps; only
    // convertible rows feed the chart and the statistics.
    let points: Vec<(chrono::NaiveDateTime, f64)> = filtered
        .rows
        .iter()
        .filter_map(|(ts, cell)| {
            cell.as_deref()
                .and_then(extract_number)
                .map(|v| (*ts, v))
        })
        .collect();

    let values: Vec<f64> = points.iter().map(|&(_, v)| v).collect();
    let unit = config.unit_for(&request.column);
    let stats = summarize(&values, &request.column, unit)?;
    let range = axis_range(&values, &request.column, config.padding)?;
    let chart = assemble_chart(&request.column, unit, &points, &range, &Theme::default());

    Ok(RenderOutput {
        chart,
        stats,
        rows: filtered.len(),
    })
}
