// File: crates/meter-sources/src/remote.rs
// Summary: Blocking fetch of per-meter JSON and conversion to a raw table.

use meter_core::RawTable;
use serde_json::Value;

use crate::error::SourceError;

/// GET `<base>/<meter_id>.json` and convert the payload. Blocking, no retry;
/// any transport or parse failure halts the run and is reported upstream.
pub fn fetch_meter_json(base: &str, meter_id: &str) -> Result<RawTable, SourceError> {
    let url = format!("{}/{}.json", base.trim_end_matches('/'), meter_id);
    tracing::info!(%url, "fetching meter data");
    let body = ureq::get(&url).call()?.into_string()?;
    rows_from_json(&body)
}

/// Convert a JSON array of row objects into untyped rows. Object key order
/// is not meaningful on the wire, so the header row is emitted with the
/// datetime key first and the remaining keys sorted, which keeps the table
/// deterministic.
pub fn rows_from_json(body: &str) -> Result<RawTable, SourceError> {
    let parsed: Value = serde_json::from_str(body)?;
    let Value::Array(objects) = parsed else {
        return Err(SourceError::UnexpectedPayload);
    };

    let mut keys: Vec<String> = Vec::new();
    for obj in &objects {
        let Value::Object(map) = obj else {
            return Err(SourceError::UnexpectedPayload);
        };
        for key in map.keys() {
            if !keys.contains(key) {
                keys.push(key.clone());
            }
        }
    }
    keys.sort();
    if let Some(pos) = keys.iter().position(|k| k.trim().eq_ignore_ascii_case("datetime")) {
        let dt = keys.remove(pos);
        keys.insert(0, dt);
    }

    let mut rows = Vec::with_capacity(objects.len() + 1);
    rows.push(keys.clone());
    for obj in &objects {
        if let Value::Object(map) = obj {
            rows.push(
                keys.iter()
                    .map(|k| map.get(k).map(value_to_string).unwrap_or_default())
                    .collect(),
            );
        }
    }
    tracing::debug!(rows = rows.len() - 1, columns = keys.len(), "converted json rows");
    Ok(RawTable::new(rows))
}

fn value_to_string(v: &Value) -> String {
    match v {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        other => other.to_string(),
    }
}
