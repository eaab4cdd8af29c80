use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Card languages ManaBox exports and Cardsphere accepts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Language {
    English,
    Japanese,
    Russian,
    Korean,
    Italian,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown language code '{0}'")]
pub struct ParseLanguageError(pub String);

impl Language {
    /// Returns the full name of the language (e.g., "English", "Japanese")
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::English => "English",
            Language::Japanese => "Japanese",
            Language::Russian => "Russian",
            Language::Korean => "Korean",
            Language::Italian => "Italian",
        }
    }

    /// Parse a language code (e.g., "en", "ja") into a Language
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_lowercase().as_str() {
            "en" => Some(Language::English),
            "ja" => Some(Language::Japanese),
            "ru" => Some(Language::Russian),
            "ko" => Some(Language::Korean),
            "it" => Some(Language::Italian),
            _ => None,
        }
    }
}

impl FromStr for Language {
    type Err = ParseLanguageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_code(s).ok_or_else(|| ParseLanguageError(s.to_string()))
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
