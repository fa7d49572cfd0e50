mod config;
mod error;
mod format;
mod template;
mod writer;

pub use config::ChangelogConfig;
pub use error::ChangelogError;
pub use format::{INSERTION_MARKER, format_changeset_block, new_changelog};
pub use template::{ChangelogTarget, FilenameTemplate, PACKAGE_DIR_TOKEN, resolve_targets};
pub use writer::{ChangelogWriter, WriteOutcome, insert_into_changelog};

pub type Result<T> = std::result::Result<T, ChangelogError>;
