use std::path::{Path, PathBuf};

use shiplog_core::{Changeset, WorkspaceHandle};

/// Placeholder replaced with a workspace member's root directory when the
/// configured filename asks for one changelog per package.
pub const PACKAGE_DIR_TOKEN: &str = "<packageDir>";

/// A configured changelog filename, classified by whether it contains the
/// per-package token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilenameTemplate {
    /// A single repository-wide changelog file.
    Global(String),
    /// One changelog per workspace member; the raw template still contains
    /// the `<packageDir>` token.
    PerWorkspace(String),
}

impl FilenameTemplate {
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        if raw.contains(PACKAGE_DIR_TOKEN) {
            Self::PerWorkspace(raw.to_string())
        } else {
            Self::Global(raw.to_string())
        }
    }
}

/// A resolved changelog file together with the changeset entries destined
/// for it. Derived per invocation, never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangelogTarget {
    pub path: PathBuf,
    pub subset: Changeset,
}

/// Partitions a changeset across changelog files.
///
/// With no (or an empty) filename the feature is disabled and no targets are
/// produced. A template containing [`PACKAGE_DIR_TOKEN`] yields one target
/// per workspace, each receiving only the entries whose package name matches
/// that workspace; entries without a matching workspace are dropped. Any
/// other filename yields a single target holding the full changeset,
/// resolved against `root` when relative.
///
/// Pure function; performs no filesystem access.
#[must_use]
pub fn resolve_targets(
    filename: Option<&str>,
    changeset: &Changeset,
    workspaces: &[WorkspaceHandle],
    root: &Path,
) -> Vec<ChangelogTarget> {
    let Some(raw) = filename.filter(|f| !f.is_empty()) else {
        return Vec::new();
    };

    match FilenameTemplate::parse(raw) {
        FilenameTemplate::Global(filename) => {
            let path = PathBuf::from(filename);
            let path = if path.is_absolute() {
                path
            } else {
                root.join(path)
            };

            vec![ChangelogTarget {
                path,
                subset: changeset.clone(),
            }]
        }
        FilenameTemplate::PerWorkspace(template) => workspaces
            .iter()
            .map(|workspace| {
                let substituted =
                    template.replace(PACKAGE_DIR_TOKEN, &workspace.root.to_string_lossy());
                let subset = changeset
                    .iter()
                    .filter(|(name, _)| **name == workspace.name)
                    .map(|(name, release)| (name.clone(), release.clone()))
                    .collect();

                ChangelogTarget {
                    path: PathBuf::from(substituted),
                    subset,
                }
            })
            .collect(),
    }
}
