use std::path::PathBuf;

use gqlex_lib::{Colors, render, tokenize};

use super::source_loader::load_or_exit;

pub struct HighlightArgs {
    pub source_path: Option<PathBuf>,
    pub source_text: Option<String>,
    pub color: bool,
}

pub fn run(args: HighlightArgs) {
    let source = load_or_exit(args.source_path.as_deref(), args.source_text.as_deref());
    let tokens = tokenize(&source);
    tracing::debug!(tokens = tokens.len(), bytes = source.len(), "tokenized");
    print!("{}", render(&source, &tokens, Colors::new(args.color)));
}
