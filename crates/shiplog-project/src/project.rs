use std::path::{Path, PathBuf};

use globset::{GlobBuilder, GlobMatcher};

use shiplog_changelog::ChangelogConfig;
use shiplog_core::WorkspaceHandle;

use crate::error::ProjectError;
use crate::manifest::{CargoManifest, read_manifest};

/// A discovered cargo project: its root directory, the workspace members
/// relevant to changelog writing, and the changelog configuration found in
/// `[workspace.metadata.shiplog]`.
#[derive(Debug, Clone)]
pub struct ShiplogProject {
    pub root: PathBuf,
    pub workspaces: Vec<WorkspaceHandle>,
    pub config: ChangelogConfig,
}

/// Walks up from `start_dir` to the nearest `Cargo.toml` carrying a
/// `[workspace]` table (falling back to a plain package manifest) and
/// collects one [`WorkspaceHandle`] per member package.
///
/// # Errors
///
/// Returns `ProjectError` if no project root can be found or if manifest
/// reading or parsing fails along the way.
pub fn discover_project(start_dir: &Path) -> Result<ShiplogProject, ProjectError> {
    let start_dir = start_dir
        .canonicalize()
        .map_err(|source| ProjectError::ManifestRead {
            path: start_dir.to_path_buf(),
            source,
        })?;

    let (root, manifest) = find_project_root(&start_dir)?;

    let config = manifest
        .workspace
        .as_ref()
        .and_then(|ws| ws.metadata.as_ref())
        .and_then(|meta| meta.shiplog.clone())
        .unwrap_or_default();

    let workspaces = collect_workspaces(&root, &manifest)?;

    Ok(ShiplogProject {
        root,
        workspaces,
        config,
    })
}

fn find_project_root(start_dir: &Path) -> Result<(PathBuf, CargoManifest), ProjectError> {
    let mut current = start_dir.to_path_buf();
    let mut fallback_single_package: Option<(PathBuf, CargoManifest)> = None;

    loop {
        let manifest_path = current.join("Cargo.toml");

        if manifest_path.exists() {
            let manifest = read_manifest(&manifest_path)?;

            if manifest.workspace.is_some() {
                return Ok((current, manifest));
            }

            if manifest.package.is_some() && fallback_single_package.is_none() {
                fallback_single_package = Some((current.clone(), manifest));
            }
        }

        match current.parent() {
            Some(parent) => current = parent.to_path_buf(),
            None => {
                return fallback_single_package.ok_or_else(|| ProjectError::NotFound {
                    start_dir: start_dir.to_path_buf(),
                });
            }
        }
    }
}

fn collect_workspaces(
    root: &Path,
    manifest: &CargoManifest,
) -> Result<Vec<WorkspaceHandle>, ProjectError> {
    let mut workspaces = Vec::new();

    // A root package (single-package project or workspace-with-root) is a
    // member in its own right.
    if let Some(pkg) = &manifest.package {
        workspaces.push(WorkspaceHandle::new(pkg.name.clone(), root));
    }

    if let Some(workspace) = &manifest.workspace {
        let members = workspace.members.as_deref().unwrap_or(&[]);
        let excludes = workspace.exclude.as_deref().unwrap_or(&[]);

        for pattern in members {
            for member_dir in expand_member_pattern(root, pattern, excludes)? {
                let member_manifest_path = member_dir.join("Cargo.toml");
                if !member_manifest_path.exists() {
                    continue;
                }

                let member_manifest = read_manifest(&member_manifest_path)?;
                if let Some(pkg) = member_manifest.package {
                    workspaces.push(WorkspaceHandle::new(pkg.name, member_dir));
                }
            }
        }
    }

    Ok(workspaces)
}

fn compile_matcher(pattern: &str) -> Result<GlobMatcher, ProjectError> {
    GlobBuilder::new(pattern)
        .literal_separator(true)
        .build()
        .map(|glob| glob.compile_matcher())
        .map_err(|source| ProjectError::GlobPattern {
            pattern: pattern.to_string(),
            source,
        })
}

fn expand_member_pattern(
    root: &Path,
    pattern: &str,
    excludes: &[String],
) -> Result<Vec<PathBuf>, ProjectError> {
    let glob = compile_matcher(pattern)?;
    let exclude_matchers: Vec<_> = excludes
        .iter()
        .filter_map(|ex| compile_matcher(ex).ok())
        .collect();

    let mut matches = Vec::new();
    let mut pending = vec![root.to_path_buf()];

    while let Some(dir) = pending.pop() {
        for entry in std::fs::read_dir(&dir)? {
            let path = entry?.path();
            if !path.is_dir() {
                continue;
            }

            // Fallback to the full path if strip_prefix fails (shouldn't
            // happen in practice)
            let relative = path.strip_prefix(root).unwrap_or(&path);

            if exclude_matchers.iter().any(|ex| ex.is_match(relative)) {
                continue;
            }

            if glob.is_match(relative) {
                matches.push(path.clone());
            }

            pending.push(path);
        }
    }

    Ok(matches)
}
