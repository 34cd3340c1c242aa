//! Language code type: a validated two-letter code backed by the lexicon.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

use crate::language::lexicon::{is_two_letter_code, LanguageLexicon};

/// Why a string could not become a `LanguageCode`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodeError {
    #[error("'{0}' is not a two-letter language code")]
    Malformed(String),

    #[error("unknown language code: '{0}'")]
    Unknown(String),
}

/// A canonical ISO 639-1 language code.
///
/// Always two lowercase ASCII letters drawn from the lexicon. Values are
/// only produced by the normalizer or by the checked `from_code`
/// constructor, so holding one means the code is known.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LanguageCode {
    code: &'static str,
}

impl LanguageCode {
    pub const ENGLISH: LanguageCode = LanguageCode { code: "en" };

    pub const SWEDISH: LanguageCode = LanguageCode { code: "sv" };

    /// Create a code from an exact two-letter string (any case).
    ///
    /// Unlike the normalizer this does no cleanup: `"sv-SE"` or `"swe"`
    /// are rejected as malformed.
    ///
    /// # Example
    /// ```
    /// use htmllang::language::LanguageCode;
    ///
    /// assert_eq!(LanguageCode::from_code("SV").unwrap().as_str(), "sv");
    /// assert!(LanguageCode::from_code("swe").is_err());
    /// ```
    pub fn from_code(code: &str) -> Result<LanguageCode, CodeError> {
        Self::from_code_in(LanguageLexicon::get(), code)
    }

    /// Same as `from_code`, against an explicit lexicon.
    pub fn from_code_in(lexicon: &LanguageLexicon, code: &str) -> Result<LanguageCode, CodeError> {
        let lower = code.to_ascii_lowercase();
        if !is_two_letter_code(&lower) {
            return Err(CodeError::Malformed(code.to_string()));
        }

        lexicon
            .by_code(&lower)
            .map(|entry| LanguageCode { code: entry.code })
            .ok_or_else(|| CodeError::Unknown(code.to_string()))
    }

    /// Wrap a code that already came out of the lexicon.
    pub(crate) fn from_lexicon(code: &'static str) -> Option<LanguageCode> {
        is_two_letter_code(code).then_some(LanguageCode { code })
    }

    /// The two-letter code, e.g. `"sv"`.
    pub fn as_str(&self) -> &'static str {
        self.code
    }

    /// English name from the global lexicon, e.g. `"Swedish"`.
    pub fn name(&self) -> Option<&'static str> {
        LanguageLexicon::get().by_code(self.code).map(|entry| entry.name)
    }
}

impl fmt::Display for LanguageCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code)
    }
}

impl AsRef<str> for LanguageCode {
    fn as_ref(&self) -> &str {
        self.code
    }
}

impl FromStr for LanguageCode {
    type Err = CodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        LanguageCode::from_code(s)
    }
}

impl Serialize for LanguageCode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.code)
    }
}

impl<'de> Deserialize<'de> for LanguageCode {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        LanguageCode::from_code(&raw).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== Constant Tests ====================

    #[test]
    fn test_constants_are_in_lexicon() {
        assert_eq!(LanguageCode::ENGLISH.name(), Some("English"));
        assert_eq!(LanguageCode::SWEDISH.name(), Some("Swedish"));
    }

    // ==================== from_code Tests ====================

    #[test]
    fn test_from_code_lowercases() {
        let code = LanguageCode::from_code("FI").expect("Should succeed");
        assert_eq!(code.as_str(), "fi");
    }

    #[test]
    fn test_from_code_unknown() {
        let err = LanguageCode::from_code("dk").unwrap_err();
        assert_eq!(err, CodeError::Unknown("dk".to_string()));
        assert!(err.to_string().contains("unknown"));
    }

    #[test]
    fn test_from_code_malformed() {
        for input in ["", "s", "swe", "sv-SE", "s1", "éé"] {
            assert!(
                matches!(LanguageCode::from_code(input), Err(CodeError::Malformed(_))),
                "{:?} should be malformed",
                input
            );
        }
    }

    #[test]
    fn test_from_str() {
        let code: LanguageCode = "Sw".parse().expect("Should parse");
        assert_eq!(code.as_str(), "sw");
    }

    // ==================== Trait Tests ====================

    #[test]
    fn test_display() {
        assert_eq!(LanguageCode::SWEDISH.to_string(), "sv");
    }

    #[test]
    fn test_equality_with_parsed() {
        assert_eq!(LanguageCode::from_code("en").unwrap(), LanguageCode::ENGLISH);
        assert_ne!(LanguageCode::ENGLISH, LanguageCode::SWEDISH);
    }

    #[test]
    fn test_from_lexicon_rejects_malformed() {
        assert!(LanguageCode::from_lexicon("EN").is_none());
        assert_eq!(LanguageCode::from_lexicon("en"), Some(LanguageCode::ENGLISH));
    }

    // ==================== Serialization Tests ====================

    #[test]
    fn test_serializes_as_plain_string() {
        let json = serde_json::to_string(&LanguageCode::SWEDISH).expect("Should serialize");
        assert_eq!(json, "\"sv\"");
    }

    #[test]
    fn test_deserialize_validates() {
        let code: LanguageCode = serde_json::from_str("\"EN\"").expect("Should deserialize");
        assert_eq!(code, LanguageCode::ENGLISH);

        let result: Result<LanguageCode, _> = serde_json::from_str("\"xx\"");
        assert!(result.is_err());
    }
}
