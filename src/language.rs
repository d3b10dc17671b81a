use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};

use crate::errors::LanguageError;

#[allow(non_camel_case_types)]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Language {
    DE,
    EN,
    ES,
    FR,
    IT,
    JA,
    KO,
    PT_PT,
    PT_BR,
}

impl Language {
    pub fn all() -> &'static [Language] {
        &[
            Language::DE,
            Language::EN,
            Language::ES,
            Language::FR,
            Language::IT,
            Language::JA,
            Language::KO,
            Language::PT_PT,
            Language::PT_BR,
        ]
    }

    pub fn to_code(self) -> &'static str {
        match self {
            Language::DE => "de",
            Language::EN => "en",
            Language::ES => "es",
            Language::FR => "fr",
            Language::IT => "it",
            Language::JA => "ja",
            Language::KO => "ko",
            Language::PT_PT => "pt_pt",
            Language::PT_BR => "pt_br",
        }
    }
}

impl FromStr for Language {
    type Err = LanguageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code = s.to_lowercase().replace('-', "_");
        Language::all()
            .iter()
            .find(|language| language.to_code() == code)
            .cloned()
            .ok_or_else(|| LanguageError::Unknown(s.to_string()))
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.to_code())
    }
}

impl Serialize for Language {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.to_code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_language_from_str() {
        assert_eq!(Language::EN, Language::from_str("en").unwrap());
        assert_eq!(Language::PT_BR, Language::from_str("pt-BR").unwrap());
        assert_eq!(Language::FR, Language::from_str("FR").unwrap());
        assert!(Language::from_str("xx").is_err());
    }

    #[test]
    fn test_language_display_round_trips_code() {
        for language in Language::all() {
            assert_eq!(
                *language,
                Language::from_str(&language.to_string()).unwrap()
            );
        }
    }
}
