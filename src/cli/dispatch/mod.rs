use crate::cli::actions::Action;
use anyhow::{Context, Result};
use std::path::PathBuf;

pub fn handler(matches: &clap::ArgMatches) -> Result<Action> {
    let port = matches.get_one::<u16>("port").copied().unwrap_or(12000);
    let web_root = matches
        .get_one::<String>("web-root")
        .map(PathBuf::from)
        .context("missing required argument: --web-root")?;

    Ok(Action::Server { port, web_root })
}
