use serde::Deserialize;

/// Changelog writing configuration, typically loaded from
/// `[workspace.metadata.shiplog]` in the root `Cargo.toml` and merged with
/// command-line flags by the caller.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct ChangelogConfig {
    /// Filename to write changelog entries into. A value containing the
    /// `<packageDir>` token yields one file per workspace member; any other
    /// value names a single repository-wide file. `None` disables changelog
    /// writing entirely.
    #[serde(default)]
    pub changelog_filename: Option<String>,

    /// Validate targets without touching the filesystem.
    #[serde(default)]
    pub dry_run: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_disabled() {
        let config = ChangelogConfig::default();
        assert!(config.changelog_filename.is_none());
        assert!(!config.dry_run);
    }

    #[test]
    fn deserialize_config() {
        let toml = r#"
            changelog-filename = "<packageDir>/CHANGELOG.md"
            dry-run = true
        "#;

        let config: ChangelogConfig = toml::from_str(toml).expect("should deserialize");
        assert_eq!(
            config.changelog_filename.as_deref(),
            Some("<packageDir>/CHANGELOG.md")
        );
        assert!(config.dry_run);
    }

    #[test]
    fn deserialize_partial_config() {
        let toml = r#"
            changelog-filename = "CHANGELOG.md"
        "#;

        let config: ChangelogConfig = toml::from_str(toml).expect("should deserialize");
        assert_eq!(config.changelog_filename.as_deref(), Some("CHANGELOG.md"));
        assert!(!config.dry_run);
    }

    #[test]
    fn deserialize_invalid_dry_run_value_fails() {
        let toml = r#"
            dry-run = "yes please"
        "#;

        let result: Result<ChangelogConfig, _> = toml::from_str(toml);
        assert!(result.is_err());
    }
}
