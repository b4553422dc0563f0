// File: crates/meter-core/src/axis.rs
// Summary: Y-axis display bounds and tick spacing from a filtered numeric series.

use serde::Serialize;

use crate::config::PaddingPolicy;
use crate::error::PipelineError;

/// Display bounds and gridline spacing for the value axis. Recomputed on
/// every render; never persisted.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct AxisRange {
    pub min_display: f64,
    pub max_display: f64,
    pub tick_step: f64,
}

/// Derive bounds and tick spacing from normalized values under the given
/// padding policy. An empty slice is the degenerate case guarded here:
/// without at least one convertible value the tick math has no range to
/// work with, so the render step must abort.
pub fn axis_range(
    values: &[f64],
    column: &str,
    policy: PaddingPolicy,
) -> Result<AxisRange, PipelineError> {
    let (min, max) = match min_max(values) {
        Some(bounds) => bounds,
        None => return Err(PipelineError::NoNumericData(column.to_string())),
    };
    let range = max - min;

    let axis = match policy {
        PaddingPolicy::Symmetric => {
            if range <= 100.0 {
                AxisRange {
                    min_display: min - 1.0,
                    max_display: max + 1.0,
                    tick_step: 10.0,
                }
            } else {
                AxisRange {
                    min_display: min - 10.0,
                    max_display: max + 10.0,
                    tick_step: (range / 20.0).round().max(1.0),
                }
            }
        }
        PaddingPolicy::TopOnly => AxisRange {
            min_display: min,
            max_display: max + range * 0.05,
            tick_step: (range / 20.0).round().max(1.0),
        },
    };
    Ok(axis)
}

fn min_max(values: &[f64]) -> Option<(f64, f64)> {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for &v in values {
        min = min.min(v);
        max = max.max(v);
    }
    if min.is_finite() && max.is_finite() {
        Some((min, max))
    } else {
        None
    }
}
