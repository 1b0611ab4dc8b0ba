use crate::models::response::{Response, TIMESTAMP_FORMAT};
use serde::Serialize;

/// Flattened record handed to the structured exporters.
#[derive(Debug, Clone, Serialize)]
pub struct ResponseRecord {
    pub timestamp: String,
    pub group: String,
    pub rating: String,
}

impl From<&Response> for ResponseRecord {
    fn from(r: &Response) -> Self {
        Self {
            timestamp: r.timestamp.format(TIMESTAMP_FORMAT).to_string(),
            group: r.group.map(|g| g.canonical().to_string()).unwrap_or_default(),
            rating: r.rating.canonical().to_string(),
        }
    }
}

/// Parse raw lines into exportable records; malformed lines are skipped.
pub fn records_from_lines(lines: &[String]) -> Vec<ResponseRecord> {
    lines
        .iter()
        .filter_map(|l| Response::parse_line(l))
        .map(|r| ResponseRecord::from(&r))
        .collect()
}
