use std::path::Path;

use serde::Deserialize;

use shiplog_changelog::ChangelogConfig;

use crate::error::ProjectError;

#[derive(Debug, Deserialize)]
pub(crate) struct CargoManifest {
    pub(crate) package: Option<Package>,
    pub(crate) workspace: Option<WorkspaceSection>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct Package {
    pub(crate) name: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct WorkspaceSection {
    pub(crate) members: Option<Vec<String>>,
    pub(crate) exclude: Option<Vec<String>>,
    pub(crate) metadata: Option<WorkspaceMetadata>,
}

#[derive(Debug, Deserialize, Default)]
pub(crate) struct WorkspaceMetadata {
    pub(crate) shiplog: Option<ChangelogConfig>,
}

pub(crate) fn read_manifest(path: &Path) -> Result<CargoManifest, ProjectError> {
    let raw = std::fs::read_to_string(path).map_err(|source| ProjectError::ManifestRead {
        path: path.to_path_buf(),
        source,
    })?;

    toml::from_str(&raw).map_err(|source| ProjectError::ManifestParse {
        path: path.to_path_buf(),
        source,
    })
}
