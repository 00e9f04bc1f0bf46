//! Collect command.

use anyhow::{Context, Result};
use clap::Args;
use wrapup_config::Config;
use wrapup_git::merge_repo_commits;

use super::SourceArgs;

/// Arguments for the collect command.
#[derive(Debug, Args)]
pub struct CollectArgs {
    #[command(flatten)]
    pub source: SourceArgs,
}

/// Prints the collected commits, newest first, as JSON.
///
/// The output can be fed back with `wrapup report --input`.
pub fn run(args: CollectArgs, config: &Config) -> Result<()> {
    let commits = merge_repo_commits(args.source.collect(config)?);
    let json = serde_json::to_string_pretty(&commits).context("failed to serialize commits")?;
    println!("{json}");
    Ok(())
}
