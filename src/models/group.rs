use crate::models::locale::Locale;
use serde::Serialize;

/// Respondent category shown on the kiosk's first screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Group {
    Japanese,
    Foreigner,
}

impl Group {
    pub const ALL: [Group; 2] = [Group::Japanese, Group::Foreigner];

    /// Literal written to the log file.
    pub fn canonical(&self) -> &'static str {
        match self {
            Group::Japanese => "日本人",
            Group::Foreigner => "Foreigner",
        }
    }

    /// Exact match against canonical literals (used when reading the log).
    pub fn from_canonical(s: &str) -> Option<Self> {
        match s {
            "日本人" => Some(Group::Japanese),
            "Foreigner" => Some(Group::Foreigner),
            _ => None,
        }
    }

    /// Tolerant CLI input: accepts canonical literals plus common aliases.
    pub fn from_input(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "japanese" | "local" | "ja" | "日本人" => Some(Group::Japanese),
            "foreigner" | "visitor" | "en" => Some(Group::Foreigner),
            _ => None,
        }
    }

    /// Locale the kiosk switches to once this group is selected.
    pub fn locale(&self) -> Locale {
        match self {
            Group::Japanese => Locale::Ja,
            Group::Foreigner => Locale::En,
        }
    }

    pub fn label(&self, locale: Locale) -> &'static str {
        match locale {
            Locale::Ja => match self {
                Group::Japanese => "日本人",
                Group::Foreigner => "外国人",
            },
            Locale::En => match self {
                Group::Japanese => "Japanese",
                Group::Foreigner => "Foreigner",
            },
        }
    }
}
