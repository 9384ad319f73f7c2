use std::fmt::Write as _;
use std::path::PathBuf;

use gqlex_lib::{Colors, Token, TokenKind, token_text, tokenize};
use serde::Serialize;

use super::source_loader::load_or_exit;

pub struct TokensArgs {
    pub source_path: Option<PathBuf>,
    pub source_text: Option<String>,
    pub raw: bool,
    pub spans: bool,
    pub json: bool,
    pub color: bool,
}

/// One token in `--json` output.
#[derive(Debug, Serialize)]
pub struct TokenRecord<'a> {
    pub kind: TokenKind,
    pub class: &'static str,
    pub start: usize,
    pub end: usize,
    pub text: &'a str,
}

pub fn run(args: TokensArgs) {
    let source = load_or_exit(args.source_path.as_deref(), args.source_text.as_deref());
    let tokens = tokenize(&source);

    let unknown = tokens.iter().filter(|t| t.kind.is_error()).count();
    if unknown > 0 {
        tracing::info!(unknown, "input contains unrecognized characters");
    }

    if args.json {
        match serde_json::to_string_pretty(&records(&source, &tokens, args.raw)) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("error: {}", e);
                std::process::exit(1);
            }
        }
        return;
    }

    let colors = Colors::new(args.color);
    print!("{}", format_tokens(&source, &tokens, args.raw, args.spans, colors));
}

pub fn records<'a>(source: &'a str, tokens: &[Token], raw: bool) -> Vec<TokenRecord<'a>> {
    tokens
        .iter()
        .filter(|t| raw || !t.kind.is_trivia())
        .map(|t| TokenRecord {
            kind: t.kind,
            class: t.kind.class(),
            start: t.start(),
            end: t.end(),
            text: token_text(source, t),
        })
        .collect()
}

/// One `Kind "text"` line per token, kinds styled by `colors`.
pub fn format_tokens(
    source: &str,
    tokens: &[Token],
    raw: bool,
    spans: bool,
    colors: Colors,
) -> String {
    let mut out = String::new();
    for token in tokens.iter().filter(|t| raw || !t.kind.is_trivia()) {
        let style = colors.for_kind(token.kind);
        let reset = if style.is_empty() { "" } else { colors.reset };
        let _ = write!(
            out,
            "{style}{:?}{reset} {:?}",
            token.kind,
            token_text(source, token)
        );
        if spans {
            let _ = write!(out, " @{}..{}", token.start(), token.end());
        }
        out.push('\n');
    }
    out
}
