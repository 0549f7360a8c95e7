//! Loading LaTeX workspaces from the file system.

pub mod file_loader;
pub mod workspace_loader;

pub use file_loader::ProjectError;
pub use workspace_loader::WorkspaceLoader;
