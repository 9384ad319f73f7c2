//! Tests for CLI dispatch logic: flag parsing, params extraction and help text.

use std::path::PathBuf;

use super::*;
use crate::cli::commands::{highlight_command, info_command, tokens_command};
use crate::commands::tokens::TokensArgs;

#[test]
fn tokens_defaults() {
    let m = tokens_command()
        .try_get_matches_from(["tokens", "schema.graphql"])
        .expect("valid args");
    let params = TokensParams::from_matches(&m);

    assert_eq!(params.source_path, Some(PathBuf::from("schema.graphql")));
    assert_eq!(params.source_text, None);
    assert!(!params.raw);
    assert!(!params.spans);
    assert!(!params.json);
    assert_eq!(params.color, ColorChoice::Auto);
}

#[test]
fn tokens_all_flags() {
    let m = tokens_command()
        .try_get_matches_from([
            "tokens",
            "-s",
            "{ hello }",
            "--raw",
            "--spans",
            "--color",
            "never",
        ])
        .expect("valid args");
    let params = TokensParams::from_matches(&m);

    assert_eq!(params.source_path, None);
    assert_eq!(params.source_text.as_deref(), Some("{ hello }"));
    assert!(params.raw);
    assert!(params.spans);
    assert_eq!(params.color, ColorChoice::Never);
}

#[test]
fn tokens_json_disables_color() {
    let m = tokens_command()
        .try_get_matches_from(["tokens", "-", "--json", "--color", "always"])
        .expect("valid args");
    let args: TokensArgs = TokensParams::from_matches(&m).into();

    assert_eq!(args.source_path, Some(PathBuf::from("-")));
    assert!(args.json);
    assert!(!args.color);
}

#[test]
fn path_and_inline_text_conflict() {
    let result = tokens_command().try_get_matches_from(["tokens", "a.graphql", "-s", "{ a }"]);
    assert!(result.is_err(), "positional and -s should conflict");

    let result =
        highlight_command().try_get_matches_from(["highlight", "a.graphql", "--source", "{ a }"]);
    assert!(result.is_err(), "positional and --source should conflict");
}

#[test]
fn invalid_color_rejected() {
    let result =
        highlight_command().try_get_matches_from(["highlight", "-s", "x", "--color", "sometimes"]);
    assert!(result.is_err());
}

#[test]
fn highlight_params() {
    let m = highlight_command()
        .try_get_matches_from(["highlight", "q.gql", "--color", "always"])
        .expect("valid args");
    let params = HighlightParams::from_matches(&m);

    assert_eq!(params.source_path, Some(PathBuf::from("q.gql")));
    assert_eq!(params.color, ColorChoice::Always);
}

#[test]
fn highlight_rejects_token_flags() {
    let result = highlight_command().try_get_matches_from(["highlight", "q.gql", "--raw"]);
    assert!(result.is_err(), "highlight does not take --raw");
}

#[test]
fn info_json_flag() {
    let m = info_command()
        .try_get_matches_from(["info", "--json"])
        .expect("valid args");
    assert!(InfoParams::from_matches(&m).json);

    let m = info_command()
        .try_get_matches_from(["info"])
        .expect("valid args");
    assert!(!InfoParams::from_matches(&m).json);
}

#[test]
fn build_cli_requires_subcommand() {
    let result = build_cli().try_get_matches_from(["gqlex"]);
    assert!(result.is_err());

    let m = build_cli()
        .try_get_matches_from(["gqlex", "tokens", "-s", "{ a }"])
        .expect("valid args");
    assert_eq!(m.subcommand_name(), Some("tokens"));
}

#[test]
fn tokens_help_lists_flags() {
    let help = tokens_command().render_help().to_string();
    for flag in ["--raw", "--spans", "--json", "--color", "--source"] {
        assert!(help.contains(flag), "tokens help should show {flag}");
    }
}

#[test]
fn color_choice_explicit_modes() {
    assert!(ColorChoice::Always.should_colorize());
    assert!(!ColorChoice::Never.should_colorize());
}
