// File: crates/meter-core/src/chart.rs
// Summary: Renderer-agnostic chart description: series, peak/min overlays, axis layout.

use chrono::NaiveDateTime;
use serde::Serialize;

use crate::axis::AxisRange;

const X_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M";
const HOUR_MS: u64 = 3_600_000;

/// Colors handed to the external renderer. The defaults are the upstream
/// deployment palette, badge colors included.
#[derive(Clone, Copy, Debug)]
pub struct Theme {
    pub name: &'static str,
    pub line: &'static str,
    pub peak_marker: &'static str,
    pub min_marker: &'static str,
    pub badge_mean: &'static str,
    pub badge_peak: &'static str,
    pub badge_min: &'static str,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            name: "upstream",
            line: "#1f77b4",
            peak_marker: "red",
            min_marker: "yellow",
            badge_mean: "#477c85",
            badge_peak: "#855047",
            badge_min: "#858147",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum SeriesMode {
    #[serde(rename = "lines+markers")]
    LinesMarkers,
    #[serde(rename = "markers")]
    Markers,
}

#[derive(Clone, Debug, Serialize)]
pub struct MarkerStyle {
    pub color: String,
    pub size: u32,
    pub symbol: String,
}

#[derive(Clone, Debug, Serialize)]
pub struct Point {
    pub x: String,
    pub y: f64,
}

#[derive(Clone, Debug, Serialize)]
pub struct SeriesSpec {
    pub name: String,
    pub mode: SeriesMode,
    pub marker: MarkerStyle,
    pub points: Vec<Point>,
}

/// Hourly gridlines with "HH:MM" labels, angled to stay readable.
#[derive(Clone, Debug, Serialize)]
pub struct XAxisSpec {
    pub title: String,
    pub tick_interval_ms: u64,
    pub tick_format: String,
    pub tick_angle: f64,
}

#[derive(Clone, Debug, Serialize)]
pub struct YAxisSpec {
    pub title: String,
    pub min: f64,
    pub max: f64,
    pub tick_step: f64,
    pub tick_format: String,
}

/// Everything the external renderer needs for one chart. Serializable so a
/// web frontend or plotting backend can consume it as-is.
#[derive(Clone, Debug, Serialize)]
pub struct ChartSpec {
    pub title: String,
    pub x_axis: XAxisSpec,
    pub y_axis: YAxisSpec,
    pub series: Vec<SeriesSpec>,
}

/// Build the chart description for one filtered, normalized column: the full
/// line+marker series, a "Peak" overlay with every row tied for the maximum,
/// and a "Min" overlay with every row tied for the minimum. Ties are kept on
/// purpose; no arbitrary tie-break.
pub fn assemble_chart(
    column: &str,
    unit: &str,
    points: &[(NaiveDateTime, f64)],
    range: &AxisRange,
    theme: &Theme,
) -> ChartSpec {
    let to_point = |&(ts, y): &(NaiveDateTime, f64)| Point {
        x: ts.format(X_TIMESTAMP_FORMAT).to_string(),
        y,
    };

    let peak = points.iter().map(|&(_, y)| y).fold(f64::NEG_INFINITY, f64::max);
    let min = points.iter().map(|&(_, y)| y).fold(f64::INFINITY, f64::min);

    let main = SeriesSpec {
        name: column.to_string(),
        mode: SeriesMode::LinesMarkers,
        marker: MarkerStyle {
            color: theme.line.to_string(),
            size: 6,
            symbol: "circle".to_string(),
        },
        points: points.iter().map(to_point).collect(),
    };

    let overlay = |name: &str, color: &str, target: f64| SeriesSpec {
        name: name.to_string(),
        mode: SeriesMode::Markers,
        marker: MarkerStyle {
            color: color.to_string(),
            size: 10,
            symbol: "circle-open-dot".to_string(),
        },
        points: points
            .iter()
            .filter(|&&(_, y)| y == target)
            .map(to_point)
            .collect(),
    };

    let y_title = if unit.is_empty() {
        column.to_string()
    } else {
        format!("{} ({})", column, unit)
    };

    ChartSpec {
        title: column.to_string(),
        x_axis: XAxisSpec {
            title: "Time".to_string(),
            tick_interval_ms: HOUR_MS,
            tick_format: "%H:%M".to_string(),
            tick_angle: -45.0,
        },
        y_axis: YAxisSpec {
            title: y_title,
            min: range.min_display,
            max: range.max_display,
            tick_step: range.tick_step,
            tick_format: ".2f".to_string(),
        },
        series: vec![
            main,
            overlay("Peak", theme.peak_marker, peak),
            overlay("Min", theme.min_marker, min),
        ],
    }
}
