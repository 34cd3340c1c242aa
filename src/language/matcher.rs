//! Matcher strategies: the ordered ways a cleaned token can name a language.
//!
//! Each strategy is a pure function from a token to an optional code. The
//! normalizer walks `Matcher::ORDER` and stops at the first hit, so the
//! precedence rules live in one place.

use crate::language::code::LanguageCode;
use crate::language::lexicon::LanguageLexicon;

/// One way of recognizing a language in a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Matcher {
    /// `sv-FI`, `SV_SE`: a code followed by region or variant subtags
    RegionPair,

    /// `sv`, `SV`: exactly two letters
    BareCode,

    /// `swe`, `SVE`, `ENG`: a three-letter designator
    Alpha3,

    /// `Swedish`, `svenska`: a name or alias, any case
    FullName,
}

impl Matcher {
    /// The order in which strategies are tried on each token.
    pub const ORDER: [Matcher; 4] = [
        Matcher::RegionPair,
        Matcher::BareCode,
        Matcher::Alpha3,
        Matcher::FullName,
    ];

    /// Short name used in logs.
    pub fn name(&self) -> &'static str {
        match self {
            Matcher::RegionPair => "region-pair",
            Matcher::BareCode => "bare-code",
            Matcher::Alpha3 => "alpha-3",
            Matcher::FullName => "full-name",
        }
    }

    /// Try this strategy on a cleaned token.
    pub fn apply(&self, lexicon: &LanguageLexicon, token: &str) -> Option<LanguageCode> {
        match self {
            Matcher::RegionPair => match_region_pair(lexicon, token),
            Matcher::BareCode => match_bare_code(lexicon, token),
            Matcher::Alpha3 => match_alpha3(lexicon, token),
            Matcher::FullName => match_full_name(lexicon, token),
        }
    }
}

fn is_ascii_alpha(s: &str, len: usize) -> bool {
    s.len() == len && s.bytes().all(|b| b.is_ascii_alphabetic())
}

fn match_region_pair(lexicon: &LanguageLexicon, token: &str) -> Option<LanguageCode> {
    let mut parts = token.split(['-', '_']);
    let primary = parts.next()?;

    // Needs at least one alphanumeric subtag; doubled separators are tolerated
    let mut subtags = parts.filter(|part| !part.is_empty()).peekable();
    subtags.peek()?;
    if !subtags.all(|part| part.chars().all(char::is_alphanumeric)) {
        return None;
    }

    match_bare_code(lexicon, primary).or_else(|| match_alpha3(lexicon, primary))
}

fn match_bare_code(lexicon: &LanguageLexicon, token: &str) -> Option<LanguageCode> {
    if !is_ascii_alpha(token, 2) {
        return None;
    }
    lexicon
        .by_code(token)
        .and_then(|entry| LanguageCode::from_lexicon(entry.code))
}

fn match_alpha3(lexicon: &LanguageLexicon, token: &str) -> Option<LanguageCode> {
    if !is_ascii_alpha(token, 3) {
        return None;
    }
    lexicon
        .by_alpha3(token)
        .and_then(|entry| LanguageCode::from_lexicon(entry.code))
}

fn match_full_name(lexicon: &LanguageLexicon, token: &str) -> Option<LanguageCode> {
    lexicon
        .by_name(token)
        .and_then(|entry| LanguageCode::from_lexicon(entry.code))
}
