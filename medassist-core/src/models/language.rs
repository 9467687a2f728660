use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::TranslationError;

/// Languages the UI can be rendered in. English is the reasoning language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    En,
    Hi,
    Ta,
    Te,
    Bn,
}

impl Language {
    pub const ALL: [Language; 5] = [
        Language::En,
        Language::Hi,
        Language::Ta,
        Language::Te,
        Language::Bn,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Hi => "hi",
            Self::Ta => "ta",
            Self::Te => "te",
            Self::Bn => "bn",
        }
    }

    /// Parse a language code. Case and surrounding whitespace are ignored.
    pub fn from_code(code: &str) -> Option<Self> {
        let code = code.trim().to_ascii_lowercase();
        Self::ALL.into_iter().find(|lang| lang.code() == code)
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = TranslationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_code(s).ok_or_else(|| TranslationError::UnsupportedDirection {
            from: "en".to_string(),
            to: s.to_string(),
        })
    }
}

/// A `(source, target)` language pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TranslationDirection {
    pub source: Language,
    pub target: Language,
}

/// Every direction a translation model exists for: English to and from each Indic language.
pub const SUPPORTED_DIRECTIONS: [TranslationDirection; 8] = [
    TranslationDirection::new(Language::En, Language::Hi),
    TranslationDirection::new(Language::Hi, Language::En),
    TranslationDirection::new(Language::En, Language::Ta),
    TranslationDirection::new(Language::Ta, Language::En),
    TranslationDirection::new(Language::En, Language::Te),
    TranslationDirection::new(Language::Te, Language::En),
    TranslationDirection::new(Language::En, Language::Bn),
    TranslationDirection::new(Language::Bn, Language::En),
];

impl TranslationDirection {
    pub const fn new(source: Language, target: Language) -> Self {
        Self { source, target }
    }

    pub fn is_supported(&self) -> bool {
        SUPPORTED_DIRECTIONS.contains(self)
    }

    /// Directory name of the OPUS-MT export for this direction, e.g. `opus-mt-en-hi`.
    pub fn model_name(&self) -> String {
        format!("opus-mt-{}-{}", self.source, self.target)
    }
}

impl fmt::Display for TranslationDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}->{}", self.source, self.target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_roundtrip() {
        for lang in Language::ALL {
            assert_eq!(Language::from_code(lang.code()), Some(lang));
        }
    }

    #[test]
    fn from_code_ignores_case_and_whitespace() {
        assert_eq!(Language::from_code(" HI "), Some(Language::Hi));
        assert_eq!(Language::from_code("fr"), None);
        assert_eq!(Language::from_code(""), None);
    }

    #[test]
    fn same_language_direction_is_not_supported() {
        assert!(!TranslationDirection::new(Language::En, Language::En).is_supported());
        assert!(!TranslationDirection::new(Language::Hi, Language::Ta).is_supported());
        assert!(TranslationDirection::new(Language::En, Language::Bn).is_supported());
    }

    #[test]
    fn model_name_follows_opus_convention() {
        let dir = TranslationDirection::new(Language::En, Language::Te);
        assert_eq!(dir.model_name(), "opus-mt-en-te");
        assert_eq!(dir.to_string(), "en->te");
    }
}
