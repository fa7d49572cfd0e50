mod write;

use std::path::Path;

use clap::Subcommand;

use crate::error::Result;

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Write changeset entries into the configured changelog files
    Write(write::WriteArgs),
}

impl Commands {
    pub(crate) fn execute(self, start_path: &Path) -> Result<()> {
        match self {
            Self::Write(args) => write::run(start_path, &args),
        }
    }
}
