use std::fmt::Write;

use shiplog_core::Changeset;

/// Sentinel line below which new entries are inserted. Matched as a plain
/// substring; an existing changelog must contain it verbatim.
pub const INSERTION_MARKER: &str = "<!-- SHIPLOG:BELOW -->";

/// Minimal document used when a target changelog does not exist yet.
#[must_use]
pub fn new_changelog() -> String {
    format!("# Changelog\n\n{INSERTION_MARKER}\n")
}

/// Renders the entries of a changeset subset into one block of markdown, in
/// the changeset's insertion order. Each entry's changelog text appears
/// verbatim and contiguous under a `## name@version` heading.
#[must_use]
pub fn format_changeset_block(subset: &Changeset) -> String {
    let mut output = String::new();

    for (name, release) in subset {
        if !output.is_empty() {
            output.push('\n');
        }
        let _ = writeln!(output, "## {name}@{}", release.version);
        output.push('\n');
        output.push_str(&release.changelog);
        if !release.changelog.ends_with('\n') {
            output.push('\n');
        }
    }

    output
}
