mod error;
mod manifest;
mod project;

pub use error::ProjectError;
pub use project::{ShiplogProject, discover_project};

pub type Result<T> = std::result::Result<T, ProjectError>;
