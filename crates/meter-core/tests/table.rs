// File: crates/meter-core/tests/table.rs
// Purpose: Validate table loading from a located header and chart-able column selection.

use chrono::NaiveDate;
use meter_core::{load_table, PipelineConfig, RawTable};

fn rows(data: &[&[&str]]) -> RawTable {
    RawTable::new(
        data.iter()
            .map(|r| r.iter().map(|c| c.to_string()).collect())
            .collect(),
    )
}

#[test]
fn preamble_and_header_are_discarded_from_body() {
    let raw = rows(&[
        &["PEA meter export"],
        &["substation 7"],
        &["No.", "DateTime", "Power"],
        &["1", "2024-01-01 08:00", "10"],
        &["2", "2024-01-01 09:00", "50"],
    ]);
    let table = load_table(&raw, &PipelineConfig::default()).unwrap();
    assert_eq!(table.len(), 2);
}

#[test]
fn unparseable_datetime_rows_are_dropped() {
    let raw = rows(&[
        &["DateTime", "Power"],
        &["2024-01-01 08:00", "10"],
        &["not a date", "99"],
        &["", "98"],
        &["2024-01-01 09:00", "50"],
    ]);
    let table = load_table(&raw, &PipelineConfig::default()).unwrap();
    assert_eq!(table.len(), 2);
    assert_eq!(table.column("Power").unwrap().len(), 2);
}

#[test]
fn day_first_formats_win_on_ambiguous_input() {
    let raw = rows(&[
        &["DateTime", "Power"],
        &["01/02/2024 08:00", "10"],
    ]);
    let table = load_table(&raw, &PipelineConfig::default()).unwrap();
    assert_eq!(
        table.timestamps()[0].date(),
        NaiveDate::from_ymd_opt(2024, 2, 1).unwrap()
    );
}

#[test]
fn missing_datetime_column_is_an_error() {
    let raw = rows(&[&["DateTime in disguise", "Power"], &["x", "1"]]);
    let err = load_table(&raw, &PipelineConfig::default()).unwrap_err();
    assert_eq!(err, meter_core::PipelineError::HeaderNotFound);
}

#[test]
fn header_without_datetime_label_fails_the_load() {
    let raw = rows(&[&["No.", "Power"], &["1", "10"]]);
    let err = meter_core::TypedTable::from_raw(&raw, 0, &PipelineConfig::default()).unwrap_err();
    assert_eq!(err, meter_core::PipelineError::MissingDatetimeColumn);
}

#[test]
fn chartable_columns_exclude_non_metrics() {
    let raw = rows(&[
        &["No.", "DateTime", "Meter ID", "Status", "Power", "Voltage", "", "Unnamed: 7", "Ghost"],
        &["1", "2024-01-01 08:00", "M-1001", "OK", "10", "230.1", "x", "x", ""],
        &["2", "2024-01-01 09:00", "M-1001", "OK", "50", "231.0", "x", "x", ""],
    ]);
    let config = PipelineConfig::default();
    let table = load_table(&raw, &config).unwrap();
    // "No." is a row counter, "Meter ID"/"Status" are configured exclusions,
    // blank and "Unnamed" headers are auto-generated, "Ghost" has no values.
    assert_eq!(table.chartable_columns(&config), vec!["Power", "Voltage"]);
}

#[test]
fn date_ish_column_names_are_never_chartable() {
    let raw = rows(&[
        &["DateTime", "Local Date", "Power"],
        &["2024-01-01 08:00", "2024-01-01", "10"],
    ]);
    let config = PipelineConfig::default();
    let table = load_table(&raw, &config).unwrap();
    assert_eq!(table.chartable_columns(&config), vec!["Power"]);
}
