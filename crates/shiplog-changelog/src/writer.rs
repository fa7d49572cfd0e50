use std::io;
use std::path::{Path, PathBuf};

use shiplog_core::{Changeset, WorkspaceHandle};

use crate::Result;
use crate::config::ChangelogConfig;
use crate::error::ChangelogError;
use crate::format::{INSERTION_MARKER, format_changeset_block, new_changelog};
use crate::template::resolve_targets;

/// What happened to one changelog file. `written: false` means the target was
/// only validated (dry run) or skipped (no matching entries).
#[derive(Debug, Clone)]
pub struct WriteOutcome {
    pub path: PathBuf,
    pub created: bool,
    pub written: bool,
}

/// Inserts the rendered entries of `subset` immediately below the insertion
/// marker of the changelog at `path`, preserving everything that was already
/// below the marker.
///
/// A missing file is treated as a fresh changelog consisting of the marker
/// alone and is created on write. Marker matching is a plain substring
/// search; the first occurrence wins. With `dry_run` the full validation
/// runs but the filesystem is left untouched.
///
/// # Errors
///
/// Returns `ChangelogError::Read` if an existing file cannot be read,
/// `ChangelogError::MissingMarker` if a readable file lacks the marker, and
/// `ChangelogError::CreateDir`/`ChangelogError::Write` if the write itself
/// fails. Validation failures occur before any filesystem mutation.
pub fn insert_into_changelog(
    path: &Path,
    subset: &Changeset,
    dry_run: bool,
) -> Result<WriteOutcome> {
    let (content, created) = match std::fs::read_to_string(path) {
        Ok(content) => (content, false),
        Err(source) if source.kind() == io::ErrorKind::NotFound => (new_changelog(), true),
        Err(source) => {
            return Err(ChangelogError::Read {
                path: path.to_path_buf(),
                source,
            });
        }
    };

    let marker_end = content
        .find(INSERTION_MARKER)
        .map(|pos| pos + INSERTION_MARKER.len())
        .ok_or_else(|| ChangelogError::MissingMarker {
            path: path.to_path_buf(),
        })?;

    let block = format_changeset_block(subset);

    let mut new_content = String::with_capacity(content.len() + block.len() + 2);
    new_content.push_str(&content[..marker_end]);
    new_content.push('\n');
    if !block.is_empty() {
        new_content.push('\n');
        new_content.push_str(&block);
    }
    let rest = &content[marker_end..];
    new_content.push_str(rest.strip_prefix('\n').unwrap_or(rest));

    if dry_run {
        return Ok(WriteOutcome {
            path: path.to_path_buf(),
            created,
            written: false,
        });
    }

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).map_err(|source| ChangelogError::CreateDir {
                path: parent.to_path_buf(),
                source,
            })?;
        }
    }

    std::fs::write(path, &new_content).map_err(|source| ChangelogError::Write {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(WriteOutcome {
        path: path.to_path_buf(),
        created,
        written: true,
    })
}

/// Applies a changeset to the changelog files selected by its configuration.
pub struct ChangelogWriter {
    config: ChangelogConfig,
    root: PathBuf,
}

impl ChangelogWriter {
    #[must_use]
    pub fn new(config: ChangelogConfig, root: impl Into<PathBuf>) -> Self {
        Self {
            config,
            root: root.into(),
        }
    }

    /// Resolves targets and inserts each target's subset in turn. Targets
    /// are processed sequentially; the first failing target aborts the
    /// remaining ones. Targets with no matching entries are skipped without
    /// touching the filesystem but still appear in the returned outcomes.
    ///
    /// # Errors
    ///
    /// Propagates the first `ChangelogError` encountered, before any write
    /// to that target is attempted.
    pub fn write_changeset(
        &self,
        changeset: &Changeset,
        workspaces: &[WorkspaceHandle],
    ) -> Result<Vec<WriteOutcome>> {
        let filename = self
            .config
            .changelog_filename
            .as_deref()
            .filter(|f| !f.is_empty());
        let Some(filename) = filename else {
            tracing::debug!("no changelog filename configured; nothing to write");
            return Ok(Vec::new());
        };

        let targets = resolve_targets(Some(filename), changeset, workspaces, &self.root);
        let mut outcomes = Vec::with_capacity(targets.len());

        for target in targets {
            if target.subset.is_empty() {
                tracing::debug!(
                    path = %target.path.display(),
                    "no changeset entries for target; skipping"
                );
                outcomes.push(WriteOutcome {
                    path: target.path,
                    created: false,
                    written: false,
                });
                continue;
            }

            let outcome = insert_into_changelog(&target.path, &target.subset, self.config.dry_run)?;
            tracing::info!(
                path = %outcome.path.display(),
                created = outcome.created,
                written = outcome.written,
                entries = target.subset.len(),
                "changelog target processed"
            );
            outcomes.push(outcome);
        }

        Ok(outcomes)
    }
}
