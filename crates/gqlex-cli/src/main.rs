mod cli;
mod commands;

use cli::{HighlightParams, InfoParams, TokensParams, build_cli};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .with_writer(std::io::stderr)
        .init();

    let matches = build_cli().get_matches();

    match matches.subcommand() {
        Some(("tokens", m)) => {
            let params = TokensParams::from_matches(m);
            commands::tokens::run(params.into());
        }
        Some(("highlight", m)) => {
            let params = HighlightParams::from_matches(m);
            commands::highlight::run(params.into());
        }
        Some(("info", m)) => {
            let params = InfoParams::from_matches(m);
            commands::info::run(params.into());
        }
        _ => unreachable!("clap should have caught this"),
    }
}
