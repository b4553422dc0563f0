// File: crates/meter-core/src/numeric.rs
// Summary: Extract the leading decimal number from free-form cell text.

/// Pull the first contiguous unsigned decimal run out of `cell`:
/// one or more digits, optionally followed by `.` and more digits.
///
/// `"123.45 V"` -> `Some(123.45)`, `"N/A"` -> `None`. When a cell holds
/// several numbers only the first is used. A leading minus sign is never
/// captured, so `"-5.0"` reads as `5.0`; kept for parity with the upstream
/// extraction rule (meter exports carry unsigned readings). Possible latent
/// bug if signed readings ever appear.
pub fn extract_number(cell: &str) -> Option<f64> {
    let bytes = cell.as_bytes();
    let start = bytes.iter().position(|b| b.is_ascii_digit())?;
    let mut end = start;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    if end < bytes.len() && bytes[end] == b'.' {
        let mut frac = end + 1;
        while frac < bytes.len() && bytes[frac].is_ascii_digit() {
            frac += 1;
        }
        if frac > end + 1 {
            end = frac;
        }
    }
    cell[start..end].parse::<f64>().ok()
}

/// Apply [`extract_number`] across a column of optional cells. Missing cells
/// and cells with no digit run both map to `None`; never fails, even on a
/// column that is entirely numeric or entirely empty.
pub fn normalize_column(cells: &[Option<String>]) -> Vec<Option<f64>> {
    cells
        .iter()
        .map(|c| c.as_deref().and_then(extract_number))
        .collect()
}
