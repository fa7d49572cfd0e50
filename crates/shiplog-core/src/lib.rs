mod types;

pub use types::{Changeset, PackageRelease, WorkspaceHandle};
