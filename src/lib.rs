//! Identify a web document's language from its HTML markup signals.
//!
//! See [`language`] for the extractor and normalizer, and [`config`] for
//! environment-driven settings used by the `htmllang` binary.

pub mod config;
pub mod language;
