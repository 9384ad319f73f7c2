//! Dispatch logic: extract params from ArgMatches and convert to command args.

use std::path::PathBuf;

use clap::ArgMatches;

use super::ColorChoice;
use crate::commands::highlight::HighlightArgs;
use crate::commands::info::InfoArgs;
use crate::commands::tokens::TokensArgs;

pub struct TokensParams {
    pub source_path: Option<PathBuf>,
    pub source_text: Option<String>,
    pub raw: bool,
    pub spans: bool,
    pub json: bool,
    pub color: ColorChoice,
}

impl TokensParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            source_path: m.get_one::<PathBuf>("source_path").cloned(),
            source_text: m.get_one::<String>("source_text").cloned(),
            raw: m.get_flag("raw"),
            spans: m.get_flag("spans"),
            json: m.get_flag("json"),
            color: parse_color(m),
        }
    }
}

impl From<TokensParams> for TokensArgs {
    fn from(p: TokensParams) -> Self {
        Self {
            source_path: p.source_path,
            source_text: p.source_text,
            raw: p.raw,
            spans: p.spans,
            json: p.json,
            // JSON output never carries escapes.
            color: !p.json && p.color.should_colorize(),
        }
    }
}

pub struct HighlightParams {
    pub source_path: Option<PathBuf>,
    pub source_text: Option<String>,
    pub color: ColorChoice,
}

impl HighlightParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            source_path: m.get_one::<PathBuf>("source_path").cloned(),
            source_text: m.get_one::<String>("source_text").cloned(),
            color: parse_color(m),
        }
    }
}

impl From<HighlightParams> for HighlightArgs {
    fn from(p: HighlightParams) -> Self {
        Self {
            source_path: p.source_path,
            source_text: p.source_text,
            color: p.color.should_colorize(),
        }
    }
}

pub struct InfoParams {
    pub json: bool,
}

impl InfoParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            json: m.get_flag("json"),
        }
    }
}

impl From<InfoParams> for InfoArgs {
    fn from(p: InfoParams) -> Self {
        Self { json: p.json }
    }
}

fn parse_color(m: &ArgMatches) -> ColorChoice {
    match m.get_one::<String>("color").map(|s| s.as_str()) {
        Some("always") => ColorChoice::Always,
        Some("never") => ColorChoice::Never,
        _ => ColorChoice::Auto,
    }
}
