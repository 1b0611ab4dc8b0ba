use crate::models::locale::Locale;
use serde::Serialize;

/// Satisfaction level, ordered most- to least-satisfied.
///
/// The canonical on-disk label is the Japanese string; English input is
/// normalized to it at data-entry time so the log never carries mixed
/// spellings of the same level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Rating {
    VerySatisfied,
    Satisfied,
    Neutral,
    Unsatisfied,
    VeryUnsatisfied,
}

impl Rating {
    /// Canonical display/aggregation order.
    pub const ALL: [Rating; 5] = [
        Rating::VerySatisfied,
        Rating::Satisfied,
        Rating::Neutral,
        Rating::Unsatisfied,
        Rating::VeryUnsatisfied,
    ];

    /// Canonical label as persisted in the log file.
    pub fn canonical(&self) -> &'static str {
        match self {
            Rating::VerySatisfied => "大変満足",
            Rating::Satisfied => "満足",
            Rating::Neutral => "普通",
            Rating::Unsatisfied => "不満",
            Rating::VeryUnsatisfied => "大変不満",
        }
    }

    /// Exact match against canonical labels (used when reading the log).
    pub fn from_canonical(s: &str) -> Option<Self> {
        match s {
            "大変満足" => Some(Rating::VerySatisfied),
            "満足" => Some(Rating::Satisfied),
            "普通" => Some(Rating::Neutral),
            "不満" => Some(Rating::Unsatisfied),
            "大変不満" => Some(Rating::VeryUnsatisfied),
            _ => None,
        }
    }

    /// Map any supported input spelling (English or Japanese,
    /// case-insensitive, surrounding whitespace ignored) onto one level.
    /// Idempotent: canonical labels map to themselves.
    pub fn normalize(input: &str) -> Option<Self> {
        match input.trim().to_lowercase().as_str() {
            "very satisfied" | "大変満足" => Some(Rating::VerySatisfied),
            "satisfied" | "満足" => Some(Rating::Satisfied),
            "neutral" | "普通" => Some(Rating::Neutral),
            "unsatisfied" | "不満" => Some(Rating::Unsatisfied),
            "very unsatisfied" | "大変不満" => Some(Rating::VeryUnsatisfied),
            _ => None,
        }
    }

    /// Localized label for display only; never written to the log.
    pub fn label(&self, locale: Locale) -> &'static str {
        match locale {
            Locale::Ja => self.canonical(),
            Locale::En => match self {
                Rating::VerySatisfied => "Very satisfied",
                Rating::Satisfied => "Satisfied",
                Rating::Neutral => "Neutral",
                Rating::Unsatisfied => "Unsatisfied",
                Rating::VeryUnsatisfied => "Very unsatisfied",
            },
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            Rating::VerySatisfied => "😊",
            Rating::Satisfied => "🙂",
            Rating::Neutral => "😐",
            Rating::Unsatisfied => "😕",
            Rating::VeryUnsatisfied => "😠",
        }
    }
}
