use chrono::{Duration, NaiveDate};

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
}

/// The `n` calendar days ending at `end` (inclusive), oldest first.
pub fn trailing_days(end: NaiveDate, n: usize) -> Vec<NaiveDate> {
    (0..n)
        .rev()
        .map(|i| end - Duration::days(i as i64))
        .collect()
}

/// Short axis label like `1/7` (month/day, no zero padding).
pub fn short_label(d: NaiveDate) -> String {
    d.format("%-m/%-d").to_string()
}
