use std::path::PathBuf;

use indexmap::IndexMap;
use semver::Version;
use serde::{Deserialize, Serialize};

/// The resolved release for a single package: its new version and the
/// changelog text generated for it. The text is inserted into changelog
/// files verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackageRelease {
    pub version: Version,
    pub changelog: String,
}

impl PackageRelease {
    #[must_use]
    pub fn new(version: Version, changelog: impl Into<String>) -> Self {
        Self {
            version,
            changelog: changelog.into(),
        }
    }
}

/// One release cycle's worth of per-package releases, keyed by package name.
///
/// Insertion order is preserved and determines the order entries are
/// concatenated when several packages share a changelog file.
pub type Changeset = IndexMap<String, PackageRelease>;

/// Identifies a workspace member by name and on-disk root directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkspaceHandle {
    pub name: String,
    pub root: PathBuf,
}

impl WorkspaceHandle {
    #[must_use]
    pub fn new(name: impl Into<String>, root: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            root: root.into(),
        }
    }
}
