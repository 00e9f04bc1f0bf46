//! Report command.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;
use tracing::info;
use wrapup_commit::CommitRecord;
use wrapup_config::Config;
use wrapup_core::ReportGenerator;

use super::SourceArgs;

/// Arguments for the report command.
#[derive(Debug, Args)]
pub struct ReportArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Free-text item for the closing section (repeatable)
    #[arg(short, long = "supplement", value_name = "TEXT")]
    pub supplements: Vec<String>,

    /// Read commits from a JSON file written by `wrapup collect` instead of Git
    #[arg(short, long, value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Write the report to a file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Leave out the title line
    #[arg(long)]
    pub no_title: bool,
}

/// Runs the report command.
pub fn run(args: ReportArgs, config: &Config) -> Result<()> {
    let (since, until) = args.source.date_range()?;
    let by_project = match &args.input {
        Some(path) => read_commits(path)?,
        None => args.source.collect(config)?,
    };

    let range = format!("{since} ~ {until}");
    let title = (!args.no_title).then_some(range.as_str());
    let report = ReportGenerator::new(config).generate_full(&by_project, &args.supplements, title);

    if report.is_empty() {
        info!("nothing to report");
    }

    match &args.output {
        Some(path) => {
            fs::write(path, format!("{report}\n"))
                .with_context(|| format!("failed to write {}", path.display()))?;
            info!(path = %path.display(), "report written");
        }
        None if report.is_empty() => {}
        None => println!("{report}"),
    }

    Ok(())
}

fn read_commits(path: &Path) -> Result<BTreeMap<String, Vec<CommitRecord>>> {
    let content =
        fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;
    let commits: Vec<CommitRecord> = serde_json::from_str(&content)
        .with_context(|| format!("invalid commit JSON in {}", path.display()))?;

    let mut by_project: BTreeMap<String, Vec<CommitRecord>> = BTreeMap::new();
    for commit in commits {
        by_project.entry(commit.project.clone()).or_default().push(commit);
    }
    Ok(by_project)
}
