use crate::export::model::ResponseRecord;
use std::path::Path;

/// Write the records as pretty-printed JSON.
pub fn write_json(path: &Path, records: &[ResponseRecord]) -> std::io::Result<()> {
    let json = serde_json::to_string_pretty(records).map_err(std::io::Error::other)?;
    std::fs::write(path, json)
}
