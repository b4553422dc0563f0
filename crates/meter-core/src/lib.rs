// File: crates/meter-core/src/lib.rs
// Summary: Core library entry point; exports the meter-reading transform pipeline.

pub mod axis;
pub mod chart;
pub mod config;
pub mod error;
pub mod header;
pub mod numeric;
pub mod pipeline;
pub mod stats;
pub mod table;
pub mod window;

pub use axis::AxisRange;
pub use chart::{ChartSpec, Theme};
pub use config::{PaddingPolicy, PipelineConfig};
pub use error::PipelineError;
pub use header::{locate_header, RawTable};
pub use pipeline::{load_table, run_pipeline, RenderOutput, RenderRequest};
pub use stats::SummaryStats;
pub use table::TypedTable;
pub use window::{filter_window, times_for_date, FilteredSeries, TimeWindow};
