//! Document language identification from HTML markup signals.
//!
//! Pages announce their language in a handful of loosely specified places:
//! the `lang` attribute, the `content-language` http-equiv meta tag and the
//! Dublin Core `dc.language` meta tag. Values found there are free-form and
//! frequently messy. This module picks one and normalizes it to a canonical
//! ISO 639-1 code.
//!
//! # Architecture
//!
//! - `lexicon`: Static table of codes, alpha-3 designators and names
//! - `code`: Validated `LanguageCode` type
//! - `token`: Tokenizing and decoration stripping
//! - `matcher`: Ordered recognition strategies
//! - `normalizer`: Raw tag to `Option<LanguageCode>`
//! - `extractor`: Choosing among the HTML-sourced candidates
//!
//! # Example
//!
//! ```rust
//! use htmllang::language::{extract, parse_language};
//!
//! let tag = extract(None, Some("(SCHEME=RFC1766) sv-FI"), None).unwrap();
//! let code = parse_language(&tag.value).unwrap();
//! assert_eq!(code.as_str(), "sv");
//! ```

mod code;
mod extractor;
mod lexicon;
mod matcher;
mod normalizer;
mod token;

pub use code::{CodeError, LanguageCode};
pub use extractor::{
    extract, DocumentLanguage, ExtractionPolicy, Extractor, LanguageCandidates, RawLanguageTag,
    SourceParseError, TagSource,
};
pub use lexicon::{LanguageLexicon, LexiconEntry, LEXICON_VERSION};
pub use matcher::Matcher;
pub use normalizer::{parse_language, Normalizer};
pub use token::MAX_TAG_LEN;
