//! Host collaborator contracts.
//!
//! The engine never owns project state. Everything it needs — comments,
//! top-level declarations, directory navigation, the project-wide filename
//! index — is supplied by a host through [`ProjectHost`]. The trait keeps the
//! resolvers decoupled from any concrete editor or file-system model; tests
//! and simple embeddings use the in-memory implementation in
//! [`crate::project::MemoryProject`].

use std::fmt;
use std::sync::Arc;

use smol_str::SmolStr;

use crate::base::{DirId, FileId, TextRange};

/// File extensions the engine recognizes as source files, in resolution
/// priority order. The leading empty entry is the "name as written" probe.
pub const FILE_EXTENSIONS: &[&str] = &["", ".ts", ".tsx", ".d.ts", ".js", ".jsx"];

/// Whether a file name carries one of the recognized source extensions.
pub fn is_source_file_name(name: &str) -> bool {
    FILE_EXTENSIONS
        .iter()
        .any(|ext| !ext.is_empty() && name.ends_with(ext))
}

/// A comment token: raw text plus its span in the containing file.
#[derive(Clone, Debug)]
pub struct CommentToken {
    /// The comment's raw text, including its delimiters.
    pub text: Arc<str>,
    /// The comment's span in the file.
    pub range: TextRange,
}

/// The kind of a located type declaration.
///
/// A closed set: the engine treats both kinds uniformly while resolving
/// (same name-match rule) and distinguishes them only for display.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum DeclKind {
    /// An interface-like declaration: `interface User { ... }`
    Interface,
    /// A type-alias-like declaration: `type Id = string;`
    TypeAlias,
}

impl DeclKind {
    /// The declaration keyword, as it reads in source.
    pub fn keyword(self) -> &'static str {
        match self {
            DeclKind::Interface => "interface",
            DeclKind::TypeAlias => "type",
        }
    }
}

impl fmt::Display for DeclKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

/// A located definition of a type, owned by exactly one file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Declaration {
    /// The declared name.
    pub name: SmolStr,
    /// Interface or type alias.
    pub kind: DeclKind,
    /// The file owning this declaration.
    pub file: FileId,
    /// Span of the whole declaration in its file.
    pub range: TextRange,
    /// The declaration's source text (for hover payloads).
    pub text: Arc<str>,
}

impl Declaration {
    /// A one-line signature, e.g. `interface User` or `type Id`.
    pub fn signature(&self) -> String {
        format!("{} {}", self.kind.keyword(), self.name)
    }
}

/// A directory child, by kind.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum DirEntry {
    /// A regular file.
    File(FileId),
    /// A subdirectory.
    Dir(DirId),
}

impl DirEntry {
    /// The file handle, if this entry is a regular file.
    pub fn as_file(self) -> Option<FileId> {
        match self {
            DirEntry::File(file) => Some(file),
            DirEntry::Dir(_) => None,
        }
    }

    /// The directory handle, if this entry is a subdirectory.
    pub fn as_dir(self) -> Option<DirId> {
        match self {
            DirEntry::Dir(dir) => Some(dir),
            DirEntry::File(_) => None,
        }
    }
}

/// The capabilities a host must supply for resolution to run.
///
/// All queries are synchronous reads of a point-in-time snapshot; the host is
/// responsible for keeping the snapshot consistent for the duration of one
/// resolution call. The engine holds no handle past the call.
pub trait ProjectHost {
    /// Every comment-like token in a file, in document order.
    fn comments(&self, file: FileId) -> Vec<CommentToken>;

    /// Every top-level interface and type-alias declaration in a file,
    /// in document order.
    fn declarations(&self, file: FileId) -> Vec<Declaration>;

    /// The directory containing a file.
    fn containing_dir(&self, file: FileId) -> Option<DirId>;

    /// The parent of a directory, or `None` at the project root.
    fn parent_dir(&self, dir: DirId) -> Option<DirId>;

    /// Look up a direct child of a directory by exact name.
    fn child(&self, dir: DirId, name: &str) -> Option<DirEntry>;

    /// Project-wide filename index: all source files whose name (with
    /// extension) matches exactly. Order must be stable across calls on an
    /// unchanged snapshot; it is the tie-break for bare-path resolution.
    fn files_named(&self, file_name: &str) -> Vec<FileId>;
}
