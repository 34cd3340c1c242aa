//! Language tag normalizer: reduce a free-form tag to one two-letter code.
//!
//! The input is whatever a page author put in a `lang` attribute or a
//! language meta tag. That ranges from a clean `sv` to
//! `(SCHEME=RFC1766) sv-FI` or `text/html; charset=sv-SE`. The normalizer
//! strips decoration, splits the string into candidate tokens and runs the
//! ordered matchers over each token. The first token that matches anything
//! wins.
//!
//! Failure to find a language is an ordinary outcome and is reported as
//! `None`. No input makes the normalizer panic.

use tracing::{debug, trace};

use crate::language::code::LanguageCode;
use crate::language::lexicon::LanguageLexicon;
use crate::language::matcher::Matcher;
use crate::language::token::{clean_token, tokenize};

/// Normalizer bound to a lexicon.
#[derive(Clone, Copy)]
pub struct Normalizer<'a> {
    lexicon: &'a LanguageLexicon,
}

impl<'a> Normalizer<'a> {
    /// Create a normalizer over an explicit lexicon.
    pub fn new(lexicon: &'a LanguageLexicon) -> Self {
        Self { lexicon }
    }

    /// The lexicon this normalizer looks codes up in.
    pub fn lexicon(&self) -> &'a LanguageLexicon {
        self.lexicon
    }

    /// Reduce a raw language tag to a canonical code.
    ///
    /// Tokens are scanned left to right; the first one recognized by any
    /// matcher decides the result, regardless of what follows.
    ///
    /// # Example
    /// ```
    /// use htmllang::language::Normalizer;
    ///
    /// let normalizer = Normalizer::default();
    /// assert_eq!(normalizer.parse_language("EN_US, SV").map(|c| c.as_str()), Some("en"));
    /// assert_eq!(normalizer.parse_language("bed & breakfast"), None);
    /// ```
    pub fn parse_language(&self, raw: &str) -> Option<LanguageCode> {
        for (position, token) in tokenize(raw).enumerate() {
            let Some(cleaned) = clean_token(token) else {
                trace!(position, token, "Skipping decoration token");
                continue;
            };

            if let Some((matcher, code)) = self.match_token(cleaned) {
                debug!(
                    raw,
                    token,
                    position,
                    matcher = matcher.name(),
                    code = code.as_str(),
                    "Recognized language tag"
                );
                return Some(code);
            }

            trace!(position, token = cleaned, "No matcher recognized token");
        }

        debug!(raw, "No language found in tag");
        None
    }

    /// Run the matchers over one cleaned token in their fixed order.
    pub fn match_token(&self, token: &str) -> Option<(Matcher, LanguageCode)> {
        Matcher::ORDER.iter().find_map(|matcher| {
            matcher
                .apply(self.lexicon, token)
                .map(|code| (*matcher, code))
        })
    }
}

impl Default for Normalizer<'static> {
    fn default() -> Self {
        Self::new(LanguageLexicon::get())
    }
}

impl std::fmt::Debug for Normalizer<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Normalizer")
            .field("lexicon_version", &self.lexicon.version())
            .field("languages", &self.lexicon.len())
            .finish()
    }
}

/// Normalize a raw tag against the global lexicon.
pub fn parse_language(raw: &str) -> Option<LanguageCode> {
    Normalizer::default().parse_language(raw)
}
