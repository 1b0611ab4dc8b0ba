use serde::{Deserialize, Serialize};

/// Display locale for prompts and labels.
///
/// Always passed in explicitly (from config or from the selected
/// respondent group); aggregation never depends on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Locale {
    Ja,
    En,
}

impl Locale {
    pub fn from_code(code: &str) -> Option<Self> {
        match code.to_lowercase().as_str() {
            "ja" => Some(Locale::Ja),
            "en" => Some(Locale::En),
            _ => None,
        }
    }
}
