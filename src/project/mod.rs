//! Project model: host collaborator contracts and the in-memory host.

pub mod host;
mod memory;

pub use host::{
    CommentToken, Declaration, DeclKind, DirEntry, FILE_EXTENSIONS, ProjectHost,
    is_source_file_name,
};
pub use memory::{MemoryProject, ProjectError};
