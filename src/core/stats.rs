//! Aggregation over the raw log lines.
//!
//! Both computations are pure and tolerant: a line that does not parse
//! is skipped, never an error. An empty log yields the full zero-filled
//! structure; rendering decides how to present "no data".

use crate::models::{group::Group, rating::Rating};
use crate::utils::date;
use chrono::NaiveDate;

/// One slot of the trailing-week series.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DailyCount {
    pub date: NaiveDate,
    pub label: String,
    pub count: usize,
}

/// Responses per day for the 7 calendar days ending at `today`
/// (inclusive), oldest first. Always exactly 7 slots; days without
/// responses count 0.
///
/// Only the date portion (before the first space) of the first comma
/// field is consulted, so a line with a bad rating still counts here.
pub fn daily_series(lines: &[String], today: NaiveDate) -> Vec<DailyCount> {
    let window = date::trailing_days(today, 7);
    let mut counts = vec![0usize; window.len()];

    for line in lines {
        let Some(first) = line.split(',').next() else {
            continue;
        };
        let Some(date_part) = first.trim().split(' ').next() else {
            continue;
        };
        let Some(d) = date::parse_date(date_part) else {
            continue;
        };
        if let Some(i) = window.iter().position(|w| *w == d) {
            counts[i] += 1;
        }
    }

    window
        .into_iter()
        .zip(counts)
        .map(|(d, count)| DailyCount {
            date: d,
            label: date::short_label(d),
            count,
        })
        .collect()
}

/// Rating field of a raw line: second field in the legacy two-field
/// form, third when a group is present.
fn rating_field(line: &str) -> Option<&str> {
    let parts: Vec<&str> = line.split(',').collect();
    match parts.len() {
        2 => Some(parts[1].trim()),
        3 => Some(parts[2].trim()),
        _ => None,
    }
}

fn group_field(line: &str) -> Option<&str> {
    let parts: Vec<&str> = line.split(',').collect();
    if parts.len() == 3 {
        Some(parts[1].trim())
    } else {
        None
    }
}

/// Counts per canonical rating level, in canonical order, pre-seeded
/// with zero for every level. Unrecognized ratings are ignored, not
/// bucketed.
pub fn breakdown(lines: &[String]) -> Vec<(Rating, usize)> {
    let mut counts: Vec<(Rating, usize)> = Rating::ALL.iter().map(|r| (*r, 0)).collect();

    for line in lines {
        let Some(raw) = rating_field(line) else {
            continue;
        };
        let Some(rating) = Rating::from_canonical(raw) else {
            continue;
        };
        if let Some(slot) = counts.iter_mut().find(|(r, _)| *r == rating) {
            slot.1 += 1;
        }
    }

    counts
}

/// Breakdown computed independently per respondent group. Both groups
/// are always present, zero-seeded; lines without a recognized group
/// are not counted here.
pub fn breakdown_by_group(lines: &[String]) -> Vec<(Group, Vec<(Rating, usize)>)> {
    let mut out: Vec<(Group, Vec<(Rating, usize)>)> = Group::ALL
        .iter()
        .map(|g| (*g, Rating::ALL.iter().map(|r| (*r, 0)).collect()))
        .collect();

    for line in lines {
        let Some(group) = group_field(line).and_then(Group::from_canonical) else {
            continue;
        };
        let Some(rating) = rating_field(line).and_then(Rating::from_canonical) else {
            continue;
        };

        if let Some((_, counts)) = out.iter_mut().find(|(g, _)| *g == group)
            && let Some(slot) = counts.iter_mut().find(|(r, _)| *r == rating)
        {
            slot.1 += 1;
        }
    }

    out
}

pub fn series_total(series: &[DailyCount]) -> usize {
    series.iter().map(|d| d.count).sum()
}

pub fn breakdown_total(counts: &[(Rating, usize)]) -> usize {
    counts.iter().map(|(_, c)| c).sum()
}
