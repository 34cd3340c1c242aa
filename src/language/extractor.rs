//! Candidate extractor: pick which HTML-sourced value to normalize.
//!
//! An HTML parser upstream hands over up to three raw values: the `lang`
//! attribute, the `http-equiv="content-language"` meta content and the
//! `dc.language` meta content. The extractor chooses among them by a fixed
//! priority and hands the winner to the normalizer untouched.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::language::code::LanguageCode;
use crate::language::normalizer::Normalizer;

/// Where in the document a raw language tag came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TagSource {
    /// `<html lang="...">`
    LangAttribute,
    /// `<meta http-equiv="content-language" content="...">`
    HttpEquiv,
    /// `<meta name="dc.language" content="...">`
    DublinCore,
}

impl TagSource {
    /// Default priority: attribute, then http-equiv, then Dublin Core.
    pub const DEFAULT_ORDER: [TagSource; 3] = [
        TagSource::LangAttribute,
        TagSource::HttpEquiv,
        TagSource::DublinCore,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TagSource::LangAttribute => "lang",
            TagSource::HttpEquiv => "http-equiv",
            TagSource::DublinCore => "dc",
        }
    }
}

impl fmt::Display for TagSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unknown tag source name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown language tag source '{0}' (expected lang, http-equiv or dc)")]
pub struct SourceParseError(pub String);

impl FromStr for TagSource {
    type Err = SourceParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "lang" | "lang-attribute" | "attribute" => Ok(TagSource::LangAttribute),
            "http-equiv" | "content-language" => Ok(TagSource::HttpEquiv),
            "dc" | "dc.language" | "dublin-core" => Ok(TagSource::DublinCore),
            _ => Err(SourceParseError(s.to_string())),
        }
    }
}

/// A raw, unnormalized language tag tagged with its origin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawLanguageTag {
    pub source: TagSource,
    pub value: String,
}

/// The three raw values an HTML parser can supply, any of them missing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LanguageCandidates {
    pub lang_attr: Option<String>,
    pub http_equiv: Option<String>,
    pub dc_language: Option<String>,
}

impl LanguageCandidates {
    pub fn new(
        lang_attr: Option<&str>,
        http_equiv: Option<&str>,
        dc_language: Option<&str>,
    ) -> Self {
        Self {
            lang_attr: lang_attr.map(str::to_string),
            http_equiv: http_equiv.map(str::to_string),
            dc_language: dc_language.map(str::to_string),
        }
    }

    /// The raw value for `source`, if present and non-blank.
    pub fn get(&self, source: TagSource) -> Option<&str> {
        let value = match source {
            TagSource::LangAttribute => self.lang_attr.as_deref(),
            TagSource::HttpEquiv => self.http_equiv.as_deref(),
            TagSource::DublinCore => self.dc_language.as_deref(),
        };
        value.filter(|v| !v.trim().is_empty())
    }
}

/// How the extractor chooses among candidates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractionPolicy {
    /// Sources in priority order; sources not listed are never consulted
    pub order: Vec<TagSource>,

    /// Keep going to the next source when a candidate does not normalize
    pub fallback: bool,
}

impl Default for ExtractionPolicy {
    fn default() -> Self {
        Self {
            order: TagSource::DEFAULT_ORDER.to_vec(),
            fallback: false,
        }
    }
}

/// A normalized document language together with where it was found.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentLanguage {
    pub code: LanguageCode,
    pub source: TagSource,
}

/// Selects a candidate according to an `ExtractionPolicy`.
#[derive(Debug, Clone, Default)]
pub struct Extractor {
    policy: ExtractionPolicy,
}

impl Extractor {
    pub fn with_policy(policy: ExtractionPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> &ExtractionPolicy {
        &self.policy
    }

    /// First non-blank candidate in policy order. No content validation.
    pub fn extract(&self, candidates: &LanguageCandidates) -> Option<RawLanguageTag> {
        self.non_blank(candidates).next()
    }

    /// Select and normalize in one go, using the global lexicon.
    pub fn identify(&self, candidates: &LanguageCandidates) -> Option<DocumentLanguage> {
        self.identify_with(&Normalizer::default(), candidates)
    }

    /// Select and normalize with an explicit normalizer.
    ///
    /// Without fallback only the first non-blank candidate is normalized,
    /// even if it yields nothing. With fallback each non-blank candidate is
    /// tried in order until one normalizes.
    pub fn identify_with(
        &self,
        normalizer: &Normalizer<'_>,
        candidates: &LanguageCandidates,
    ) -> Option<DocumentLanguage> {
        let limit = if self.policy.fallback { usize::MAX } else { 1 };

        for tag in self.non_blank(candidates).take(limit) {
            match normalizer.parse_language(&tag.value) {
                Some(code) => {
                    debug!(source = %tag.source, code = code.as_str(), "Identified document language");
                    return Some(DocumentLanguage {
                        code,
                        source: tag.source,
                    });
                }
                None => debug!(source = %tag.source, value = %tag.value, "Candidate did not normalize"),
            }
        }

        None
    }

    fn non_blank<'c>(
        &'c self,
        candidates: &'c LanguageCandidates,
    ) -> impl Iterator<Item = RawLanguageTag> + 'c {
        self.policy.order.iter().filter_map(move |&source| {
            candidates.get(source).map(|value| RawLanguageTag {
                source,
                value: value.to_string(),
            })
        })
    }
}

/// Pick the first non-blank of the three raw values, attribute first.
///
/// # Example
/// ```
/// use htmllang::language::{extract, TagSource};
///
/// let tag = extract(Some("  "), Some("en"), Some("sv")).unwrap();
/// assert_eq!(tag.source, TagSource::HttpEquiv);
/// assert_eq!(tag.value, "en");
/// ```
pub fn extract(
    lang_attr: Option<&str>,
    http_equiv_content_language: Option<&str>,
    dc_language: Option<&str>,
) -> Option<RawLanguageTag> {
    let candidates = LanguageCandidates::new(lang_attr, http_equiv_content_language, dc_language);
    Extractor::default().extract(&candidates)
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== TagSource Tests ====================

    #[test]
    fn test_tag_source_from_str() {
        assert_eq!("lang".parse::<TagSource>(), Ok(TagSource::LangAttribute));
        assert_eq!(" HTTP-EQUIV ".parse::<TagSource>(), Ok(TagSource::HttpEquiv));
        assert_eq!("dc.language".parse::<TagSource>(), Ok(TagSource::DublinCore));
    }

    #[test]
    fn test_tag_source_from_str_unknown() {
        let err = "header".parse::<TagSource>().unwrap_err();
        assert_eq!(err, SourceParseError("header".to_string()));
        assert!(err.to_string().contains("header"));
    }

    #[test]
    fn test_tag_source_display_round_trips() {
        for source in TagSource::DEFAULT_ORDER {
            assert_eq!(source.to_string().parse::<TagSource>(), Ok(source));
        }
    }

    // ==================== extract Tests ====================

    #[test]
    fn test_extract_prefers_lang_attribute() {
        let tag = extract(Some("fi"), Some("en"), Some("sv")).expect("Should extract");
        assert_eq!(tag.source, TagSource::LangAttribute);
        assert_eq!(tag.value, "fi");
    }

    #[test]
    fn test_extract_http_equiv_before_dc() {
        let tag = extract(None, Some("en"), Some("sv")).expect("Should extract");
        assert_eq!(tag.source, TagSource::HttpEquiv);
    }

    #[test]
    fn test_extract_dc_last() {
        let tag = extract(Some(""), Some(" \t"), Some("en")).expect("Should extract");
        assert_eq!(tag.source, TagSource::DublinCore);
        assert_eq!(tag.value, "en");
    }

    #[test]
    fn test_extract_none() {
        assert_eq!(extract(None, None, None), None);
        assert_eq!(extract(Some(""), Some(" "), None), None);
    }

    #[test]
    fn test_extract_passes_value_unchanged() {
        let tag = extract(Some(" garbage value "), None, None).expect("Should extract");
        assert_eq!(tag.value, " garbage value ");
    }

    // ==================== identify Tests ====================

    #[test]
    fn test_identify_strict_stops_at_first_candidate() {
        let candidates = LanguageCandidates::new(Some("klingon"), Some("en"), None);
        assert_eq!(Extractor::default().identify(&candidates), None);
    }

    #[test]
    fn test_identify_fallback_tries_next_source() {
        let candidates = LanguageCandidates::new(Some("klingon"), None, Some("Swedish"));
        let extractor = Extractor::with_policy(ExtractionPolicy {
            fallback: true,
            ..ExtractionPolicy::default()
        });

        let found = extractor.identify(&candidates).expect("Should identify");
        assert_eq!(found.code, LanguageCode::SWEDISH);
        assert_eq!(found.source, TagSource::DublinCore);
    }

    #[test]
    fn test_identify_custom_order() {
        let candidates = LanguageCandidates::new(Some("fi"), Some("en"), Some("sv"));
        let extractor = Extractor::with_policy(ExtractionPolicy {
            order: vec![TagSource::DublinCore, TagSource::HttpEquiv],
            fallback: false,
        });

        let found = extractor.identify(&candidates).expect("Should identify");
        assert_eq!(found.code.as_str(), "sv");
        assert_eq!(found.source, TagSource::DublinCore);
    }

    #[test]
    fn test_identify_unlisted_source_ignored() {
        let candidates = LanguageCandidates::new(Some("fi"), None, None);
        let extractor = Extractor::with_policy(ExtractionPolicy {
            order: vec![TagSource::HttpEquiv],
            fallback: true,
        });
        assert_eq!(extractor.identify(&candidates), None);
    }

    // ==================== Serialization Tests ====================

    #[test]
    fn test_document_language_json() {
        let found = DocumentLanguage {
            code: LanguageCode::ENGLISH,
            source: TagSource::HttpEquiv,
        };
        let json = serde_json::to_string(&found).expect("Should serialize");
        assert_eq!(json, r#"{"code":"en","source":"http-equiv"}"#);
    }
}
