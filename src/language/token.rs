//! Tokenizing raw language tags and stripping the noise around them.
//!
//! Raw tags come straight out of HTML attributes and meta tags and carry
//! all sorts of decoration: scheme annotations, MIME types, charset
//! parameters, stray punctuation. This module turns such a string into a
//! sequence of bare words that the matchers can look at.

use regex::Regex;
use std::sync::OnceLock;

/// Longest prefix of a raw tag that is ever looked at, in bytes.
pub const MAX_TAG_LEN: usize = 1024;

/// Keywords that only ever decorate a tag and never name a language.
const DECORATION_KEYWORDS: &[&str] = &[
    "charset",
    "content-language",
    "content-type",
    "http-equiv",
    "scheme",
];

// Regex for a leading scheme annotation (cached for performance)
static SCHEME_REGEX: OnceLock<Regex> = OnceLock::new();

fn scheme_regex() -> &'static Regex {
    SCHEME_REGEX.get_or_init(|| Regex::new(r"(?i)^\(\s*scheme\s*=[^)]*\)").unwrap())
}

fn is_separator(c: char) -> bool {
    c == ',' || c == ';' || c.is_whitespace()
}

/// Cut `raw` to at most `MAX_TAG_LEN` bytes without splitting a character
/// or a token.
///
/// A token straddling the limit is dropped whole; half a word must never be
/// matched as if it were a code.
pub fn truncate(raw: &str) -> &str {
    if raw.len() <= MAX_TAG_LEN {
        return raw;
    }
    let mut end = MAX_TAG_LEN;
    while !raw.is_char_boundary(end) {
        end -= 1;
    }

    let cut_clean = raw[end..].starts_with(is_separator);
    if cut_clean {
        return &raw[..end];
    }
    match raw[..end].rfind(is_separator) {
        Some(idx) => &raw[..idx],
        None => "",
    }
}

/// Remove a leading `(SCHEME=...)` annotation, returning the payload.
///
/// The scheme name itself is discarded; `"(SCHEME=RFC1766) sv-FI"` becomes
/// `"sv-FI"`.
pub fn strip_scheme(raw: &str) -> &str {
    let trimmed = raw.trim();
    match scheme_regex().find(trimmed) {
        Some(m) => trimmed[m.end()..].trim_start(),
        None => trimmed,
    }
}

/// Split a raw tag into candidate tokens, left to right.
///
/// Commas, semicolons and whitespace separate candidates. Hyphens and
/// underscores do not: `sv-FI` stays one token.
pub fn tokenize(raw: &str) -> impl Iterator<Item = &str> {
    strip_scheme(truncate(raw))
        .split(is_separator)
        .filter(|token| !token.is_empty())
}

/// Strip decoration from one token, returning the language-bearing part.
///
/// Returns `None` when nothing worth matching is left: MIME types,
/// decoration keywords, bare punctuation.
pub fn clean_token(token: &str) -> Option<&str> {
    if token.contains('/') {
        return None;
    }

    // key=value: only the value can carry a language
    let value = match token.rfind('=') {
        Some(idx) => &token[idx + 1..],
        None => token,
    };

    let trimmed = trim_punctuation(value);
    if trimmed.is_empty() || is_decoration_keyword(trimmed) {
        return None;
    }

    // swe.SPR. -> swe, sv_SE@euro -> sv_SE
    let head = match trimmed.find(['.', '@']) {
        Some(idx) => trim_punctuation(&trimmed[..idx]),
        None => trimmed,
    };

    (!head.is_empty()).then_some(head)
}

// Combining marks at the end of native names must survive, so only
// punctuation, whitespace and quotes are trimmed.
fn trim_punctuation(s: &str) -> &str {
    s.trim_matches(|c: char| {
        c.is_ascii_punctuation()
            || c.is_whitespace()
            || matches!(c, '«' | '»' | '“' | '”' | '‘' | '’')
    })
}

fn is_decoration_keyword(token: &str) -> bool {
    DECORATION_KEYWORDS
        .iter()
        .any(|keyword| token.eq_ignore_ascii_case(keyword))
}
