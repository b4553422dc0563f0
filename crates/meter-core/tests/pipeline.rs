// File: crates/meter-core/tests/pipeline.rs
// Purpose: End-to-end scenario from raw rows to chart description and statistics.

use chrono::{NaiveDate, NaiveTime};
use meter_core::chart::SeriesMode;
use meter_core::{
    load_table, run_pipeline, PipelineConfig, PipelineError, RawTable, RenderRequest,
    TimeWindow,
};

fn raw(data: &[&[&str]]) -> RawTable {
    RawTable::new(
        data.iter()
            .map(|r| r.iter().map(|c| c.to_string()).collect())
            .collect(),
    )
}

fn window(start: (u32, u32), end: (u32, u32)) -> TimeWindow {
    TimeWindow::new(
        NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
        NaiveTime::from_hms_opt(start.0, start.1, 0).unwrap(),
        NaiveTime::from_hms_opt(end.0, end.1, 0).unwrap(),
    )
    .unwrap()
}

#[test]
fn three_row_scenario_produces_expected_stats_and_overlays() {
    let raw = raw(&[
        &["DateTime", "Power"],
        &["2024-01-01 08:00", "10"],
        &["2024-01-01 09:00", "50"],
        &["2024-01-01 10:00", "30"],
    ]);
    let config = PipelineConfig::default();
    let table = load_table(&raw, &config).unwrap();
    let request = RenderRequest {
        column: "Power".into(),
        window: window((8, 0), (10, 0)),
    };

    let output = run_pipeline(&table, &request, &config).unwrap();
    assert_eq!(output.rows, 3);
    assert_eq!(output.stats.mean_label(), "30.00 kW");
    assert_eq!(output.stats.peak_label(), "50.00 kW");
    assert_eq!(output.stats.min_label(), "10.00 kW");

    let chart = &output.chart;
    assert_eq!(chart.series.len(), 3);

    let main = &chart.series[0];
    assert_eq!(main.mode, SeriesMode::LinesMarkers);
    assert_eq!(main.points.len(), 3);

    let peak = &chart.series[1];
    assert_eq!(peak.name, "Peak");
    assert_eq!(peak.mode, SeriesMode::Markers);
    assert_eq!(peak.points.len(), 1);
    assert_eq!(peak.points[0].x, "2024-01-01 09:00");
    assert_eq!(peak.points[0].y, 50.0);

    let min = &chart.series[2];
    assert_eq!(min.name, "Min");
    assert_eq!(min.points.len(), 1);
    assert_eq!(min.points[0].x, "2024-01-01 08:00");
    assert_eq!(min.points[0].y, 10.0);

    // Axis layout: range 40 -> symmetric +-1 padding, tick 10; hourly x grid.
    assert_eq!(chart.y_axis.min, 9.0);
    assert_eq!(chart.y_axis.max, 51.0);
    assert_eq!(chart.y_axis.tick_step, 10.0);
    assert_eq!(chart.y_axis.tick_format, ".2f");
    assert_eq!(chart.x_axis.tick_interval_ms, 3_600_000);
    assert_eq!(chart.x_axis.tick_format, "%H:%M");
    assert_eq!(chart.y_axis.title, "Power (kW)");
}

#[test]
fn tied_extremes_all_appear_in_their_overlay() {
    let raw = raw(&[
        &["DateTime", "Power"],
        &["2024-01-01 08:00", "10"],
        &["2024-01-01 09:00", "50"],
        &["2024-01-01 10:00", "50"],
        &["2024-01-01 11:00", "10"],
    ]);
    let config = PipelineConfig::default();
    let table = load_table(&raw, &config).unwrap();
    let request = RenderRequest {
        column: "Power".into(),
        window: window((8, 0), (11, 0)),
    };

    let output = run_pipeline(&table, &request, &config).unwrap();
    assert_eq!(output.chart.series[1].points.len(), 2);
    assert_eq!(output.chart.series[2].points.len(), 2);
}

#[test]
fn units_fall_back_to_bare_numbers_for_unknown_columns() {
    let raw = raw(&[
        &["DateTime", "Humidity"],
        &["2024-01-01 08:00", "40"],
        &["2024-01-01 09:00", "60"],
    ]);
    let config = PipelineConfig::default();
    let table = load_table(&raw, &config).unwrap();
    let request = RenderRequest {
        column: "Humidity".into(),
        window: window((8, 0), (9, 0)),
    };

    let output = run_pipeline(&table, &request, &config).unwrap();
    assert_eq!(output.stats.mean_label(), "50.00");
    assert_eq!(output.chart.y_axis.title, "Humidity");
}

#[test]
fn cells_with_units_are_normalized_before_charting() {
    let raw = raw(&[
        &["DateTime", "Voltage"],
        &["2024-01-01 08:00", "230.5 V"],
        &["2024-01-01 09:00", "231.0 V"],
    ]);
    let config = PipelineConfig::default();
    let table = load_table(&raw, &config).unwrap();
    let request = RenderRequest {
        column: "Voltage".into(),
        window: window((8, 0), (9, 0)),
    };

    let output = run_pipeline(&table, &request, &config).unwrap();
    assert_eq!(output.chart.series[0].points[0].y, 230.5);
    assert_eq!(output.stats.peak_label(), "231.00 V");
}

#[test]
fn non_numeric_column_content_aborts_before_axis_math() {
    let raw = raw(&[
        &["DateTime", "Status"],
        &["2024-01-01 08:00", "OK"],
        &["2024-01-01 09:00", "FAIL"],
    ]);
    let config = PipelineConfig::default();
    let table = load_table(&raw, &config).unwrap();
    let request = RenderRequest {
        column: "Status".into(),
        window: window((8, 0), (9, 0)),
    };

    let err = run_pipeline(&table, &request, &config).unwrap_err();
    assert_eq!(err, PipelineError::NoNumericData("Status".into()));
}

#[test]
fn chart_spec_serializes_for_the_external_renderer() {
    let raw = raw(&[
        &["DateTime", "Power"],
        &["2024-01-01 08:00", "10"],
        &["2024-01-01 09:00", "50"],
    ]);
    let config = PipelineConfig::default();
    let table = load_table(&raw, &config).unwrap();
    let request = RenderRequest {
        column: "Power".into(),
        window: window((8, 0), (9, 0)),
    };

    let output = run_pipeline(&table, &request, &config).unwrap();
    let json = serde_json::to_value(&output.chart).unwrap();
    assert_eq!(json["series"][0]["mode"], "lines+markers");
    assert_eq!(json["series"][1]["marker"]["symbol"], "circle-open-dot");
    assert_eq!(json["x_axis"]["tick_format"], "%H:%M");
}
