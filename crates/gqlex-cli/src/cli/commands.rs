//! Command builders for the CLI.

use clap::Command;

use super::args::*;

/// Build the complete CLI with all subcommands.
pub fn build_cli() -> Command {
    Command::new("gqlex")
        .about("Context-sensitive GraphQL tokenizer")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(tokens_command())
        .subcommand(highlight_command())
        .subcommand(info_command())
}

/// Print the token stream of a document.
pub fn tokens_command() -> Command {
    Command::new("tokens")
        .about("Print the token stream of a GraphQL document")
        .override_usage(
            "\
  gqlex tokens <FILE>
  gqlex tokens -s <TEXT>",
        )
        .after_help(
            r#"EXAMPLES:
  gqlex tokens schema.graphql            # significant tokens
  gqlex tokens schema.graphql --raw      # include whitespace and comments
  gqlex tokens -s '{ hello }' --spans    # inline text with byte offsets
  cat query.gql | gqlex tokens - --json  # JSON records from stdin"#,
        )
        .arg(source_path_arg())
        .arg(source_text_arg())
        .arg(raw_arg())
        .arg(spans_arg())
        .arg(json_arg())
        .arg(color_arg())
}

/// Print a document with ANSI highlighting.
pub fn highlight_command() -> Command {
    Command::new("highlight")
        .about("Print a GraphQL document with syntax highlighting")
        .override_usage(
            "\
  gqlex highlight <FILE>
  gqlex highlight -s <TEXT>",
        )
        .after_help(
            r#"EXAMPLES:
  gqlex highlight schema.graphql
  gqlex highlight - --color always < query.gql | less -R"#,
        )
        .arg(source_path_arg())
        .arg(source_text_arg())
        .arg(color_arg())
}

/// Print the registration descriptor.
pub fn info_command() -> Command {
    Command::new("info")
        .about("Show the lexer name, aliases, file patterns and mimetypes")
        .arg(json_arg())
}
