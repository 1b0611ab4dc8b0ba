//! Width helpers for terminal output containing CJK text and ANSI colors.

use unicode_width::UnicodeWidthStr;

fn strip_ansi(s: &str) -> String {
    let re = regex::Regex::new(r"\x1B\[[0-9;]*[mK]").unwrap();
    re.replace_all(s, "").into_owned()
}

/// Rendered width of a string as the terminal will show it:
/// ANSI escapes ignored, CJK characters counted double-width.
pub fn display_width(s: &str) -> usize {
    strip_ansi(s).width()
}

/// Left-align `s` inside a column of `width` terminal cells.
pub fn pad_to(s: &str, width: usize) -> String {
    let w = display_width(s);
    if w >= width {
        s.to_string()
    } else {
        format!("{}{}", s, " ".repeat(width - w))
    }
}
