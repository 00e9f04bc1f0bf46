//! CLI definition.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use wrapup_config::{Config, load_or_default};

use crate::commands;

/// Turn Git history into a condensed weekly activity report.
#[derive(Debug, Parser)]
#[command(name = "wrapup")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Configuration file (default: wrapup.toml in this or a parent directory)
    #[arg(short, long, global = true, env = "WRAPUP_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Generate the activity report
    Report(commands::report::ReportArgs),

    /// Print collected commits as JSON
    Collect(commands::collect::CollectArgs),

    /// Write a default wrapup.toml
    Init(commands::init::InitArgs),
}

impl Cli {
    /// Runs the CLI command.
    pub fn run(self) -> Result<()> {
        match self.command {
            Commands::Report(args) => commands::report::run(args, &load(self.config)?),
            Commands::Collect(args) => commands::collect::run(args, &load(self.config)?),
            Commands::Init(args) => commands::init::run(args),
        }
    }
}

fn load(path: Option<PathBuf>) -> Result<Config> {
    load_or_default(path.as_deref()).context("failed to load configuration")
}
