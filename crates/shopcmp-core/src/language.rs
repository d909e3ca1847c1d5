use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Language the comparison prompt is written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Vi,
}

impl Language {
    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Vi => "vi",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "en" | "english" => Ok(Language::En),
            "vi" | "vietnamese" => Ok(Language::Vi),
            other => Err(format!("unsupported language \"{other}\" (expected en or vi)")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_codes_case_insensitively() {
        assert_eq!("EN".parse::<Language>().unwrap(), Language::En);
        assert_eq!(" vi ".parse::<Language>().unwrap(), Language::Vi);
    }

    #[test]
    fn rejects_unknown_code() {
        assert!("de".parse::<Language>().is_err());
    }

    #[test]
    fn display_matches_code() {
        assert_eq!(Language::Vi.to_string(), "vi");
    }
}
