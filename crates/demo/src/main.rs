// File: crates/demo/src/main.rs
// Summary: Demo loads a meter source (CSV/XLSX/remote JSON), filters a time window,
// and writes the chart description plus summary statistics.

use anyhow::{Context, Result};
use chrono::{NaiveDate, NaiveTime};
use meter_core::{
    load_table, run_pipeline, times_for_date, PipelineConfig, RenderRequest, TimeWindow,
};
use meter_sources as sources;
use std::path::{Path, PathBuf};

fn main() -> Result<()> {
    let _ = tracing_subscriber::fmt::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::builder()
                .with_default_directive("info".parse().expect("invalid filter"))
                .from_env_lossy(),
        )
        .try_init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.len() < 2 {
        eprintln!(
            "usage: meterdash-demo <file.csv|file.xlsx|meter-id> <date YYYY-MM-DD> \
             [start HH:MM] [end HH:MM] [column] [sheet]"
        );
        anyhow::bail!("missing arguments");
    }

    let source = &args[0];
    let date = NaiveDate::parse_from_str(&args[1], "%Y-%m-%d")
        .with_context(|| format!("invalid date '{}'", args[1]))?;
    let sheet = args.get(5).map(String::as_str);

    let raw = load_source(source, sheet)?;
    let config = PipelineConfig::default();
    let table = load_table(&raw, &config).context("could not load table from source")?;
    println!("Loaded {} rows", table.len());

    let columns = table.chartable_columns(&config);
    if columns.is_empty() {
        println!("No chart-able value columns detected.");
        return Ok(());
    }
    println!("Chart-able columns: {}", columns.join(", "));

    let times = times_for_date(&table, date);
    if times.is_empty() {
        println!("No data on {}", date);
        return Ok(());
    }
    println!(
        "Times on {}: {} .. {} ({} samples)",
        date,
        times[0].format("%H:%M"),
        times[times.len() - 1].format("%H:%M"),
        times.len()
    );

    // Start/end default to the day's full extent, the way the upstream UI
    // preselects first/last available times.
    let start = match args.get(2) {
        Some(s) => parse_time(s)?,
        None => times[0],
    };
    let end = match args.get(3) {
        Some(s) => parse_time(s)?,
        None => times[times.len() - 1],
    };
    let column = args
        .get(4)
        .cloned()
        .unwrap_or_else(|| columns[0].to_string());

    let window = match TimeWindow::new(date, start, end) {
        Ok(w) => w,
        Err(err) => {
            eprintln!("{}", err);
            return Ok(());
        }
    };
    let request = RenderRequest { column, window };

    match run_pipeline(&table, &request, &config) {
        Ok(output) => {
            println!("Found {} rows in window", output.rows);
            println!("Mean: {}", output.stats.mean_label());
            println!("Peak: {}", output.stats.peak_label());
            println!("Min:  {}", output.stats.min_label());

            let out = out_name(&request.column);
            let json = serde_json::to_string_pretty(&output.chart)?;
            if let Some(parent) = out.parent() {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(&out, json)
                .with_context(|| format!("writing {}", out.display()))?;
            println!("Wrote {}", out.display());
        }
        Err(err) if err.is_warning() => {
            println!("{}", err);
        }
        Err(err) => return Err(err.into()),
    }

    Ok(())
}

fn parse_time(s: &str) -> Result<NaiveTime> {
    NaiveTime::parse_from_str(s, "%H:%M").with_context(|| format!("invalid time '{}'", s))
}

/// Pick a source adapter by shape: existing .csv/.xlsx paths load from disk,
/// anything else is treated as a meter id fetched from $METERDASH_BASE_URL.
fn load_source(source: &str, sheet: Option<&str>) -> Result<meter_core::RawTable> {
    let path = Path::new(source);
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_lowercase());
    match ext.as_deref() {
        Some("csv") => sources::read_csv_path(path)
            .with_context(|| format!("failed to load CSV '{}'", path.display())),
        Some("xlsx") => {
            let sheet = match sheet {
                Some(s) => s.to_string(),
                None => {
                    let names = sources::sheet_names(path)?;
                    let first = names
                        .first()
                        .cloned()
                        .context("workbook has no sheets")?;
                    if names.len() > 1 {
                        println!("Sheets: {} (using '{}')", names.join(", "), first);
                    }
                    first
                }
            };
            sources::read_sheet(path, &sheet)
                .with_context(|| format!("failed to load sheet '{}'", sheet))
        }
        _ => {
            let base = std::env::var("METERDASH_BASE_URL")
                .context("set METERDASH_BASE_URL to fetch by meter id")?;
            sources::fetch_meter_json(&base, source)
                .with_context(|| format!("failed to fetch meter '{}'", source))
        }
    }
}

/// Output file name like target/out/chart_<column>.json
fn out_name(column: &str) -> PathBuf {
    let mut out = PathBuf::from("target/out");
    let slug = column
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c.to_ascii_lowercase() } else { '_' })
        .collect::<String>();
    out.push(format!("chart_{}.json", slug));
    out
}
