use chrono::NaiveDateTime;

use super::{group::Group, rating::Rating};

/// Timestamp format used in every persisted line.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// One rating submission, reconstructed from (or formatted into) a single
/// CSV line: `yyyy-MM-dd HH:mm:ss,[group,]rating`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    pub timestamp: NaiveDateTime,
    pub group: Option<Group>,
    pub rating: Rating,
}

impl Response {
    pub fn new(timestamp: NaiveDateTime, group: Option<Group>, rating: Rating) -> Self {
        Self {
            timestamp,
            group,
            rating,
        }
    }

    /// Render as one log line (without trailing newline).
    pub fn to_line(&self) -> String {
        let ts = self.timestamp.format(TIMESTAMP_FORMAT);
        match self.group {
            Some(g) => format!("{},{},{}", ts, g.canonical(), self.rating.canonical()),
            None => format!("{},{}", ts, self.rating.canonical()),
        }
    }

    /// Tolerant line parser. Accepts the two-field legacy form
    /// (`timestamp,rating`) and the three-field form with a group.
    /// Returns None for anything malformed; an unrecognized group keeps
    /// the entry but drops the group.
    pub fn parse_line(line: &str) -> Option<Self> {
        let line = line.trim();
        if line.is_empty() {
            return None;
        }

        let parts: Vec<&str> = line.split(',').collect();
        let timestamp = NaiveDateTime::parse_from_str(parts[0].trim(), TIMESTAMP_FORMAT).ok()?;

        match parts.len() {
            2 => {
                let rating = Rating::from_canonical(parts[1].trim())?;
                Some(Response::new(timestamp, None, rating))
            }
            3 => {
                let group = Group::from_canonical(parts[1].trim());
                let rating = Rating::from_canonical(parts[2].trim())?;
                Some(Response::new(timestamp, group, rating))
            }
            _ => None,
        }
    }
}
