//! htmllang - normalize HTML language tags to ISO 639-1 codes
//!
//! Usage:
//!   htmllang [--json] <TAG>...                         # Normalize each tag
//!   htmllang [--json] --lang V --http-equiv V --dc V   # Pick a candidate, then normalize
//!   htmllang [--json] < tags.txt                       # One tag per line from stdin
//!
//! Optional environment variables:
//! - HTMLLANG_SOURCE_ORDER (defaults to lang,http-equiv,dc)
//! - HTMLLANG_FALLBACK (defaults to false)
//! - HTMLLANG_OUTPUT (text or json, defaults to text)
//! - RUST_LOG (log filter, logs go to stderr)

use anyhow::{bail, Context, Result};
use serde::Serialize;
use std::io::{self, BufRead, Write};
use tracing::info;

use htmllang::config::{Config, OutputFormat};
use htmllang::language::{parse_language, Extractor, LanguageCandidates, LanguageCode};

const USAGE: &str = "usage: htmllang [--json] <TAG>... | [--json] [--lang V] [--http-equiv V] [--dc V]";

/// What the invocation asks for
#[derive(Debug, PartialEq, Eq)]
enum Mode {
    Tags(Vec<String>),
    Extract(LanguageCandidates),
    Stdin,
    Help,
}

#[derive(Debug, PartialEq, Eq)]
struct Args {
    mode: Mode,
    json: bool,
}

/// One normalized tag, as printed in JSON mode
#[derive(Debug, Serialize)]
struct TagReport<'a> {
    input: &'a str,
    code: Option<LanguageCode>,
}

fn parse_args(args: impl IntoIterator<Item = String>) -> Result<Args> {
    let mut json = false;
    let mut tags = Vec::new();
    let mut candidates = LanguageCandidates::default();
    let mut extracting = false;
    let mut only_tags = false;

    let mut iter = args.into_iter();
    while let Some(arg) = iter.next() {
        if only_tags {
            tags.push(arg);
            continue;
        }

        match arg.as_str() {
            "--" => only_tags = true,
            "--json" => json = true,
            "-h" | "--help" => {
                return Ok(Args {
                    mode: Mode::Help,
                    json,
                })
            }
            "--lang" | "--http-equiv" | "--dc" => {
                let value = iter
                    .next()
                    .with_context(|| format!("{} requires a value", arg))?;
                let slot = match arg.as_str() {
                    "--lang" => &mut candidates.lang_attr,
                    "--http-equiv" => &mut candidates.http_equiv,
                    _ => &mut candidates.dc_language,
                };
                *slot = Some(value);
                extracting = true;
            }
            flag if flag.starts_with("--") => bail!("Unknown flag '{}'\n{}", flag, USAGE),
            _ => tags.push(arg),
        }
    }

    let mode = match (extracting, tags.is_empty()) {
        (true, true) => Mode::Extract(candidates),
        (true, false) => bail!("Cannot mix positional tags with --lang/--http-equiv/--dc\n{}", USAGE),
        (false, false) => Mode::Tags(tags),
        (false, true) => Mode::Stdin,
    };

    Ok(Args { mode, json })
}

fn render_tag(tag: &str, format: OutputFormat) -> Result<String> {
    let code = parse_language(tag);
    Ok(match format {
        OutputFormat::Text => format!("{}\t{}", tag, code.map_or("-", |c| c.as_str())),
        OutputFormat::Json => serde_json::to_string(&TagReport { input: tag, code })?,
    })
}

fn main() -> Result<()> {
    // Load .env file if present
    let _ = dotenvy::dotenv();

    // Initialize logging (stderr, so stdout carries only results)
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("htmllang=info".parse()?),
        )
        .init();

    let mut config = Config::from_env()?;
    let args = parse_args(std::env::args().skip(1))?;
    if args.json {
        config.output = OutputFormat::Json;
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match args.mode {
        Mode::Help => writeln!(out, "{}", USAGE)?,
        Mode::Tags(tags) => {
            for tag in &tags {
                writeln!(out, "{}", render_tag(tag, config.output)?)?;
            }
        }
        Mode::Stdin => {
            let mut count = 0usize;
            for line in io::stdin().lock().lines() {
                let line = line.context("Failed to read tag from stdin")?;
                if line.trim().is_empty() {
                    continue;
                }
                writeln!(out, "{}", render_tag(&line, config.output)?)?;
                count += 1;
            }
            info!("Normalized {} tags from stdin", count);
        }
        Mode::Extract(candidates) => {
            let extractor = Extractor::with_policy(config.policy.clone());
            let found = extractor.identify(&candidates);
            let line = match config.output {
                OutputFormat::Text => match found {
                    Some(found) => format!("{}\t{}", found.code, found.source),
                    None => "-".to_string(),
                },
                OutputFormat::Json => serde_json::to_string(&found)?,
            };
            writeln!(out, "{}", line)?;
        }
    }

    Ok(())
}
