use std::path::{Path, PathBuf};

use clap::Args;

use shiplog_changelog::ChangelogWriter;
use shiplog_core::Changeset;
use shiplog_project::discover_project;

use crate::error::{CliError, Result};

#[derive(Args)]
pub(crate) struct WriteArgs {
    /// Path to a changeset JSON file mapping package names to their new
    /// version and changelog text
    #[arg(long = "changeset", short = 'c')]
    pub(crate) changeset: PathBuf,

    /// Override the configured changelog filename
    #[arg(long = "changelog-filename")]
    pub(crate) changelog_filename: Option<String>,

    /// Validate changelog targets without writing anything
    #[arg(long = "dry-run")]
    pub(crate) dry_run: bool,
}

pub(crate) fn run(start_path: &Path, args: &WriteArgs) -> Result<()> {
    let project = discover_project(start_path)?;

    let raw = std::fs::read_to_string(&args.changeset).map_err(|source| CliError::ChangesetRead {
        path: args.changeset.clone(),
        source,
    })?;
    let changeset: Changeset =
        serde_json::from_str(&raw).map_err(|source| CliError::ChangesetParse {
            path: args.changeset.clone(),
            source,
        })?;

    let mut config = project.config.clone();
    if args.dry_run {
        config.dry_run = true;
    }
    if let Some(filename) = &args.changelog_filename {
        config.changelog_filename = Some(filename.clone());
    }
    let dry_run = config.dry_run;

    let writer = ChangelogWriter::new(config, &project.root);
    let outcomes = writer.write_changeset(&changeset, &project.workspaces)?;

    if outcomes.is_empty() {
        println!("changelog writing is disabled (no changelog filename configured)");
        return Ok(());
    }

    for outcome in &outcomes {
        let action = if outcome.written {
            if outcome.created { "created" } else { "updated" }
        } else if dry_run {
            "validated"
        } else {
            "skipped"
        };
        println!("{action} {}", outcome.path.display());
    }

    Ok(())
}
