use anyhow::{bail, Context, Result};

use crate::language::{ExtractionPolicy, TagSource};

/// How results are printed by the command-line tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

impl OutputFormat {
    fn parse(value: &str) -> Result<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "text" | "" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => bail!("Unknown output format '{}' (expected text or json)", other),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    // Extraction
    pub policy: ExtractionPolicy,

    // Output
    pub output: OutputFormat,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let order = match std::env::var("HTMLLANG_SOURCE_ORDER") {
            Ok(value) => parse_source_order(&value).context("Invalid HTMLLANG_SOURCE_ORDER")?,
            Err(_) => TagSource::DEFAULT_ORDER.to_vec(),
        };

        let fallback = match std::env::var("HTMLLANG_FALLBACK") {
            Ok(value) => parse_bool(&value).context("Invalid HTMLLANG_FALLBACK")?,
            Err(_) => false,
        };

        let output = match std::env::var("HTMLLANG_OUTPUT") {
            Ok(value) => OutputFormat::parse(&value).context("Invalid HTMLLANG_OUTPUT")?,
            Err(_) => OutputFormat::Text,
        };

        Ok(Self {
            policy: ExtractionPolicy { order, fallback },
            output,
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            policy: ExtractionPolicy::default(),
            output: OutputFormat::Text,
        }
    }
}

/// Parse a comma-separated source list such as `lang,dc,http-equiv`.
pub fn parse_source_order(value: &str) -> Result<Vec<TagSource>> {
    let mut order = Vec::new();
    for part in value.split(',').filter(|p| !p.trim().is_empty()) {
        let source: TagSource = part.parse()?;
        if !order.contains(&source) {
            order.push(source);
        }
    }

    if order.is_empty() {
        bail!("Source order must name at least one source");
    }
    Ok(order)
}

fn parse_bool(value: &str) -> Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        other => bail!("Expected a boolean, got '{}'", other),
    }
}
