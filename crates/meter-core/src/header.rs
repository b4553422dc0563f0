// File: crates/meter-core/src/header.rs
// Summary: Untyped row table and content-based header row detection.

/// Raw tabular input as produced by a source adapter: ordered rows of
/// untyped cells, no header assumed. Consumed once by the header locator
/// and table loader, then dropped.
#[derive(Clone, Debug, Default)]
pub struct RawTable {
    pub rows: Vec<Vec<String>>,
}

impl RawTable {
    pub fn new(rows: Vec<Vec<String>>) -> Self {
        Self { rows }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// True when `cell`, trimmed and case-folded, equals any of `labels`.
pub fn matches_label(cell: &str, labels: &[String]) -> bool {
    let folded = cell.trim().to_lowercase();
    labels.iter().any(|l| folded == l.trim().to_lowercase())
}

/// Scan rows top-to-bottom for the first one containing a recognized
/// datetime label. Spreadsheets from the field carry titles and metadata
/// above the real table at varying offsets, so the header must be found by
/// content, not position. `None` means no chart is possible for this input.
pub fn locate_header(raw: &RawTable, labels: &[String]) -> Option<usize> {
    raw.rows
        .iter()
        .position(|row| row.iter().any(|cell| matches_label(cell, labels)))
}
