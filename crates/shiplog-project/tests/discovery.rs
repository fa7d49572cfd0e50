use std::fs;
use std::path::Path;

use shiplog_project::{ProjectError, discover_project};

fn write_workspace_manifest(root: &Path, extra: &str) {
    fs::write(
        root.join("Cargo.toml"),
        format!(
            r#"[workspace]
members = ["crates/*"]
resolver = "2"
{extra}"#
        ),
    )
    .expect("write workspace Cargo.toml");
}

fn add_member(root: &Path, dir: &str, name: &str) {
    let member_dir = root.join(dir);
    fs::create_dir_all(&member_dir).expect("create member dir");
    fs::write(
        member_dir.join("Cargo.toml"),
        format!(
            r#"[package]
name = "{name}"
version = "0.1.0"
"#
        ),
    )
    .expect("write member Cargo.toml");
}

#[test]
fn discovers_workspace_members() {
    let temp_dir = tempfile::tempdir().expect("create temp dir");
    write_workspace_manifest(temp_dir.path(), "");
    add_member(temp_dir.path(), "crates/pkg-a", "pkg-a");
    add_member(temp_dir.path(), "crates/pkg-b", "pkg-b");

    let project = discover_project(temp_dir.path()).expect("should discover project");

    assert_eq!(project.workspaces.len(), 2);
    let names: Vec<_> = project.workspaces.iter().map(|w| w.name.as_str()).collect();
    assert!(names.contains(&"pkg-a"));
    assert!(names.contains(&"pkg-b"));
}

#[test]
fn discovers_project_from_nested_member_directory() {
    let temp_dir = tempfile::tempdir().expect("create temp dir");
    write_workspace_manifest(temp_dir.path(), "");
    add_member(temp_dir.path(), "crates/pkg-a", "pkg-a");

    let project =
        discover_project(&temp_dir.path().join("crates/pkg-a")).expect("should discover project");

    assert_eq!(
        project.root,
        temp_dir.path().canonicalize().expect("path exists")
    );
}

#[test]
fn discovers_single_package_project() {
    let temp_dir = tempfile::tempdir().expect("create temp dir");
    fs::write(
        temp_dir.path().join("Cargo.toml"),
        r#"[package]
name = "single"
version = "1.0.0"
"#,
    )
    .expect("write Cargo.toml");

    let project = discover_project(temp_dir.path()).expect("should discover project");

    assert_eq!(project.workspaces.len(), 1);
    assert_eq!(project.workspaces[0].name, "single");
    assert_eq!(
        project.workspaces[0].root,
        temp_dir.path().canonicalize().expect("path exists")
    );
}

#[test]
fn reads_changelog_config_from_workspace_metadata() {
    let temp_dir = tempfile::tempdir().expect("create temp dir");
    write_workspace_manifest(
        temp_dir.path(),
        r#"
[workspace.metadata.shiplog]
changelog-filename = "<packageDir>/CHANGELOG.md"
"#,
    );
    add_member(temp_dir.path(), "crates/pkg-a", "pkg-a");

    let project = discover_project(temp_dir.path()).expect("should discover project");

    assert_eq!(
        project.config.changelog_filename.as_deref(),
        Some("<packageDir>/CHANGELOG.md")
    );
    assert!(!project.config.dry_run);
}

#[test]
fn missing_metadata_yields_default_config() {
    let temp_dir = tempfile::tempdir().expect("create temp dir");
    write_workspace_manifest(temp_dir.path(), "");

    let project = discover_project(temp_dir.path()).expect("should discover project");

    assert!(project.config.changelog_filename.is_none());
}

#[test]
fn workspace_exclude_patterns_are_honored() {
    let temp_dir = tempfile::tempdir().expect("create temp dir");
    fs::write(
        temp_dir.path().join("Cargo.toml"),
        r#"[workspace]
members = ["crates/*"]
exclude = ["crates/skipped"]
"#,
    )
    .expect("write workspace Cargo.toml");
    add_member(temp_dir.path(), "crates/kept", "kept");
    add_member(temp_dir.path(), "crates/skipped", "skipped");

    let project = discover_project(temp_dir.path()).expect("should discover project");

    let names: Vec<_> = project.workspaces.iter().map(|w| w.name.as_str()).collect();
    assert!(names.contains(&"kept"));
    assert!(!names.contains(&"skipped"));
}

#[test]
fn not_found_error_for_nonexistent_path() {
    let result = discover_project(Path::new("/nonexistent/path"));
    assert!(result.is_err());
}

#[test]
fn malformed_manifest_returns_parse_error() {
    let temp_dir = tempfile::tempdir().expect("create temp dir");
    fs::write(
        temp_dir.path().join("Cargo.toml"),
        "this is not valid toml {{{",
    )
    .expect("write Cargo.toml");

    let result = discover_project(temp_dir.path());
    assert!(matches!(result, Err(ProjectError::ManifestParse { .. })));
}

#[test]
fn invalid_member_glob_returns_glob_pattern_error() {
    let temp_dir = tempfile::tempdir().expect("create temp dir");
    fs::write(
        temp_dir.path().join("Cargo.toml"),
        r#"[workspace]
members = ["[invalid"]
"#,
    )
    .expect("write Cargo.toml");

    let result = discover_project(temp_dir.path());
    assert!(
        matches!(result, Err(ProjectError::GlobPattern { pattern, .. }) if pattern == "[invalid")
    );
}

#[test]
fn member_directory_without_manifest_is_ignored() {
    let temp_dir = tempfile::tempdir().expect("create temp dir");
    write_workspace_manifest(temp_dir.path(), "");
    add_member(temp_dir.path(), "crates/pkg-a", "pkg-a");
    fs::create_dir_all(temp_dir.path().join("crates/empty")).expect("create empty dir");

    let project = discover_project(temp_dir.path()).expect("should discover project");

    assert_eq!(project.workspaces.len(), 1);
    assert_eq!(project.workspaces[0].name, "pkg-a");
}
