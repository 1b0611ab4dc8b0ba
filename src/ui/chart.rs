//! Terminal renderings of the two summary charts.
//!
//! The aggregation layer always hands over the full (possibly all-zero)
//! structure; deciding to show a "no data" placeholder happens here.

use crate::core::stats::{DailyCount, breakdown_total, series_total};
use crate::models::{locale::Locale, rating::Rating};
use crate::utils::text::{display_width, pad_to};
use ansi_term::Colour;

const BAR_WIDTH: usize = 40;
const NO_DATA: &str = "No data available";

fn rating_colour(rating: Rating) -> Colour {
    match rating {
        Rating::VerySatisfied => Colour::Green,
        Rating::Satisfied => Colour::Fixed(113), // light green
        Rating::Neutral => Colour::Fixed(245),   // gray
        Rating::Unsatisfied => Colour::Yellow,
        Rating::VeryUnsatisfied => Colour::Red,
    }
}

/// Horizontal bar chart of the trailing-week series.
pub fn render_daily_series(series: &[DailyCount]) -> String {
    let mut out = String::from("Responses, last 7 days\n\n");

    let total = series_total(series);
    if total == 0 {
        out.push_str(NO_DATA);
        out.push('\n');
        return out;
    }

    let max = series.iter().map(|d| d.count).max().unwrap_or(0).max(1);
    let label_w = series
        .iter()
        .map(|d| display_width(&d.label))
        .max()
        .unwrap_or(0);

    for day in series {
        let bar = "█".repeat(day.count * BAR_WIDTH / max);
        out.push_str(&format!(
            "{} │ {} {}\n",
            pad_to(&day.label, label_w),
            Colour::Purple.paint(bar),
            day.count
        ));
    }

    out.push_str(&format!("\nTotal responses (7 days): {total}\n"));
    out
}

/// Legend-style satisfaction breakdown with counts and percentages.
pub fn render_breakdown(counts: &[(Rating, usize)], locale: Locale) -> String {
    let total = breakdown_total(counts);
    let mut out = String::new();

    if total == 0 {
        out.push_str(NO_DATA);
        out.push('\n');
        return out;
    }

    out.push_str(&format!("Total respondents: {total}\n"));

    let label_w = counts
        .iter()
        .map(|(r, _)| display_width(r.label(locale)))
        .max()
        .unwrap_or(0);

    for (rating, count) in counts {
        let pct = *count as f64 * 100.0 / total as f64;
        out.push_str(&format!(
            "{} {} : {} ({:.1}%)\n",
            rating_colour(*rating).paint("■"),
            pad_to(rating.label(locale), label_w),
            count,
            pct
        ));
    }

    out
}
