// File: crates/meter-core/src/table.rs
// Summary: Typed table built from a located header row; datetime parsing and column selection.

use chrono::{NaiveDate, NaiveDateTime};

use crate::config::PipelineConfig;
use crate::error::PipelineError;
use crate::header::{matches_label, RawTable};

/// Day-first formats tried in order, most specific first. The field exports
/// mix `31/12/2024 08:15`-style stamps with ISO ones, so both families are
/// accepted; day-first wins on ambiguous input.
const DATETIME_FORMATS: &[&str] = &[
    "%d/%m/%Y %H:%M:%S",
    "%d/%m/%Y %H:%M",
    "%d-%m-%Y %H:%M:%S",
    "%d-%m-%Y %H:%M",
    "%d/%m/%y %H:%M:%S",
    "%d/%m/%y %H:%M",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M:%S",
];

const DATE_FORMATS: &[&str] = &["%d/%m/%Y", "%d-%m-%Y", "%d/%m/%y", "%Y-%m-%d"];

/// Parse a timestamp accepting day-first ambiguous formats. Date-only input
/// maps to midnight.
pub fn parse_dayfirst(s: &str) -> Option<NaiveDateTime> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }
    for fmt in DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(dt);
        }
    }
    for fmt in DATE_FORMATS {
        if let Ok(d) = NaiveDate::parse_from_str(s, fmt) {
            return d.and_hms_opt(0, 0, 0);
        }
    }
    None
}

/// Column-oriented table with a parsed, timezone-naive datetime axis. All
/// value columns have the same length as `timestamps`. Rows whose datetime
/// cell failed to parse are dropped at load time; row order follows the
/// source and is not sorted until the window filter runs.
#[derive(Clone, Debug)]
pub struct TypedTable {
    timestamps: Vec<NaiveDateTime>,
    columns: Vec<(String, Vec<Option<String>>)>,
}

impl TypedTable {
    /// Re-interpret `raw` using `header_row` as the column-name row. Rows
    /// above the header and the header itself are discarded from the body.
    /// Unparseable datetimes drop their row (partial data is acceptable);
    /// a missing datetime column is not.
    pub fn from_raw(
        raw: &RawTable,
        header_row: usize,
        config: &PipelineConfig,
    ) -> Result<Self, PipelineError> {
        let names = raw
            .rows
            .get(header_row)
            .ok_or(PipelineError::HeaderNotFound)?;

        let dt_idx = names
            .iter()
            .position(|n| matches_label(n, &config.header_labels))
            .ok_or(PipelineError::MissingDatetimeColumn)?;

        // First occurrence wins on duplicate names so the name -> values
        // mapping stays unique.
        let mut kept: Vec<(usize, String)> = Vec::new();
        for (i, name) in names.iter().enumerate() {
            let name = name.trim();
            if i == dt_idx || kept.iter().any(|(_, n)| n == name) {
                continue;
            }
            kept.push((i, name.to_string()));
        }

        let mut timestamps = Vec::new();
        let mut columns: Vec<(String, Vec<Option<String>>)> = kept
            .iter()
            .map(|(_, name)| (name.clone(), Vec::new()))
            .collect();

        for row in raw.rows.iter().skip(header_row + 1) {
            let Some(ts) = row.get(dt_idx).and_then(|cell| parse_dayfirst(cell)) else {
                continue;
            };
            timestamps.push(ts);
            for ((src_idx, _), (_, values)) in kept.iter().zip(columns.iter_mut()) {
                let cell = row
                    .get(*src_idx)
                    .map(|c| c.trim())
                    .filter(|c| !c.is_empty())
                    .map(str::to_string);
                values.push(cell);
            }
        }

        Ok(Self {
            timestamps,
            columns,
        })
    }

    pub fn len(&self) -> usize {
        self.timestamps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.timestamps.is_empty()
    }

    pub fn timestamps(&self) -> &[NaiveDateTime] {
        &self.timestamps
    }

    pub fn column(&self, name: &str) -> Option<&[Option<String>]> {
        self.columns
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_slice())
    }

    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|(n, _)| n.as_str())
    }

    /// Columns a user may chart. Excludes date-ish names, blank or
    /// auto-generated names, the "no." row counter, columns with no values
    /// at all, and the configured non-metric set. An empty result is
    /// reportable (nothing to offer) but not an error.
    pub fn chartable_columns(&self, config: &PipelineConfig) -> Vec<&str> {
        self.columns
            .iter()
            .filter(|(name, values)| {
                let folded = name.trim().to_lowercase();
                if folded.is_empty() || folded.starts_with("unnamed") {
                    return false;
                }
                if folded.contains("date") || folded == "no." {
                    return false;
                }
                if matches_label(name, &config.excluded_columns)
                    || matches_label(name, &config.header_labels)
                {
                    return false;
                }
                values.iter().any(|v| v.is_some())
            })
            .map(|(name, _)| name.as_str())
            .collect()
    }
}
