//! In-memory project model.
//!
//! [`MemoryProject`] implements [`ProjectHost`] over a virtual directory tree
//! built from slash-separated paths. It is the host used by this crate's
//! tests and by embedders that have no native VFS to bridge.
//!
//! The fixture scanners below are NOT a TypeScript parser. The comment
//! scanner is string-aware; the declaration scanner recognizes top-level
//! `interface` / `type` headers and measures their extent by brace or
//! statement matching. That is the whole host-contract surface the engine
//! queries, and it is all fixture files need.

use std::sync::{Arc, LazyLock};

use indexmap::IndexMap;
use parking_lot::RwLock;
use regex::Regex;
use smol_str::SmolStr;
use thiserror::Error;

use crate::base::{DirId, FileId, TextRange, TextSize};
use crate::project::host::{
    CommentToken, Declaration, DeclKind, DirEntry, ProjectHost, is_source_file_name,
};

/// Top-level declaration header: optional `export`, keyword, name.
static DECL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^[ \t]*((?:export[ \t]+)?(interface|type)[ \t]+([A-Za-z_$][A-Za-z0-9_$]*))")
        .expect("declaration pattern is a valid regex")
});

/// Errors raised while building the virtual tree. Resolution itself never
/// errors — these cover only malformed fixture construction.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ProjectError {
    /// The path had no file-name component.
    #[error("invalid path: '{0}'")]
    InvalidPath(String),
    /// A non-final path segment names an existing file.
    #[error("path segment is a file, not a directory: '{0}'")]
    NotADirectory(String),
    /// The full path is already taken by a file or directory.
    #[error("path already exists: '{0}'")]
    DuplicatePath(String),
}

#[derive(Debug, Default)]
struct DirData {
    parent: Option<DirId>,
    children: IndexMap<SmolStr, DirEntry>,
}

#[derive(Debug)]
struct FileData {
    dir: DirId,
    name: SmolStr,
    text: Arc<str>,
    comments: Vec<CommentToken>,
    declarations: Vec<Declaration>,
}

/// An in-memory [`ProjectHost`].
///
/// Thread-safe via internal locking; queries take read locks, tree building
/// takes the write lock.
#[derive(Debug)]
pub struct MemoryProject {
    inner: RwLock<MemoryProjectInner>,
}

#[derive(Debug)]
struct MemoryProjectInner {
    /// DirId -> directory data; dirs[0] is the project root.
    dirs: Vec<DirData>,
    /// FileId -> file data.
    files: Vec<FileData>,
    /// File name (with extension) -> files, in registration order.
    by_name: IndexMap<SmolStr, Vec<FileId>>,
}

impl Default for MemoryProject {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryProject {
    /// Create an empty project containing only the root directory.
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(MemoryProjectInner {
                dirs: vec![DirData::default()],
                files: Vec::new(),
                by_name: IndexMap::new(),
            }),
        }
    }

    /// The root directory handle.
    pub fn root(&self) -> DirId {
        DirId::new(0)
    }

    /// Add a file at a slash-separated path, creating directories on demand.
    ///
    /// The file's comments and top-level declarations are scanned eagerly so
    /// later host queries read a fixed snapshot.
    pub fn add_file(&self, path: &str, text: &str) -> Result<FileId, ProjectError> {
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
        let Some((&file_name, dir_segments)) = segments.split_last() else {
            return Err(ProjectError::InvalidPath(path.to_string()));
        };

        let mut inner = self.inner.write();

        let mut dir = DirId::new(0);
        for &segment in dir_segments {
            dir = match inner.dirs[dir.index() as usize].children.get(segment) {
                Some(DirEntry::Dir(sub)) => *sub,
                Some(DirEntry::File(_)) => {
                    return Err(ProjectError::NotADirectory(segment.to_string()));
                }
                None => {
                    let sub = DirId::new(inner.dirs.len() as u32);
                    inner.dirs.push(DirData {
                        parent: Some(dir),
                        children: IndexMap::new(),
                    });
                    inner.dirs[dir.index() as usize]
                        .children
                        .insert(SmolStr::new(segment), DirEntry::Dir(sub));
                    sub
                }
            };
        }

        if inner.dirs[dir.index() as usize]
            .children
            .contains_key(file_name)
        {
            return Err(ProjectError::DuplicatePath(path.to_string()));
        }

        let file = FileId::new(inner.files.len() as u32);
        let text: Arc<str> = Arc::from(text);
        let comments = scan_comments(&text);
        let declarations = scan_declarations(file, &text, &comments);

        inner.dirs[dir.index() as usize]
            .children
            .insert(SmolStr::new(file_name), DirEntry::File(file));
        inner.files.push(FileData {
            dir,
            name: SmolStr::new(file_name),
            text,
            comments,
            declarations,
        });
        inner
            .by_name
            .entry(SmolStr::new(file_name))
            .or_default()
            .push(file);

        Ok(file)
    }

    /// Look up a file by its slash-separated path.
    pub fn file_at(&self, path: &str) -> Option<FileId> {
        let inner = self.inner.read();
        let mut dir = DirId::new(0);
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
        let (&file_name, dir_segments) = segments.split_last()?;

        for &segment in dir_segments {
            dir = inner.dirs[dir.index() as usize]
                .children
                .get(segment)?
                .as_dir()?;
        }
        inner.dirs[dir.index() as usize]
            .children
            .get(file_name)?
            .as_file()
    }

    /// Look up a directory by its slash-separated path (`""` is the root).
    pub fn dir_at(&self, path: &str) -> Option<DirId> {
        let inner = self.inner.read();
        let mut dir = DirId::new(0);
        for segment in path.split('/').filter(|s| !s.is_empty()) {
            dir = inner.dirs[dir.index() as usize]
                .children
                .get(segment)?
                .as_dir()?;
        }
        Some(dir)
    }

    /// A file's content.
    pub fn text(&self, file: FileId) -> Option<Arc<str>> {
        self.inner
            .read()
            .files
            .get(file.index() as usize)
            .map(|f| f.text.clone())
    }

    /// Reconstruct a file's slash-separated path from the root.
    pub fn path(&self, file: FileId) -> Option<String> {
        let inner = self.inner.read();
        let data = inner.files.get(file.index() as usize)?;

        let mut segments = vec![data.name.to_string()];
        let mut dir = data.dir;
        while let Some(parent) = inner.dirs[dir.index() as usize].parent {
            let name = inner.dirs[parent.index() as usize]
                .children
                .iter()
                .find_map(|(name, entry)| (*entry == DirEntry::Dir(dir)).then(|| name.to_string()));
            if let Some(name) = name {
                segments.push(name);
            }
            dir = parent;
        }
        segments.reverse();
        Some(segments.join("/"))
    }

    /// The number of files in the project.
    pub fn file_count(&self) -> usize {
        self.inner.read().files.len()
    }
}

impl ProjectHost for MemoryProject {
    fn comments(&self, file: FileId) -> Vec<CommentToken> {
        self.inner
            .read()
            .files
            .get(file.index() as usize)
            .map(|f| f.comments.clone())
            .unwrap_or_default()
    }

    fn declarations(&self, file: FileId) -> Vec<Declaration> {
        self.inner
            .read()
            .files
            .get(file.index() as usize)
            .map(|f| f.declarations.clone())
            .unwrap_or_default()
    }

    fn containing_dir(&self, file: FileId) -> Option<DirId> {
        self.inner
            .read()
            .files
            .get(file.index() as usize)
            .map(|f| f.dir)
    }

    fn parent_dir(&self, dir: DirId) -> Option<DirId> {
        self.inner
            .read()
            .dirs
            .get(dir.index() as usize)
            .and_then(|d| d.parent)
    }

    fn child(&self, dir: DirId, name: &str) -> Option<DirEntry> {
        self.inner
            .read()
            .dirs
            .get(dir.index() as usize)
            .and_then(|d| d.children.get(name).copied())
    }

    fn files_named(&self, file_name: &str) -> Vec<FileId> {
        if !is_source_file_name(file_name) {
            return Vec::new();
        }
        self.inner
            .read()
            .by_name
            .get(file_name)
            .cloned()
            .unwrap_or_default()
    }
}

/// Scan `//` and `/* */` comments, skipping string literals.
fn scan_comments(text: &str) -> Vec<CommentToken> {
    let bytes = text.as_bytes();
    let mut comments = Vec::new();
    let mut i = 0;

    while i < bytes.len() {
        match bytes[i] {
            b'/' if bytes.get(i + 1) == Some(&b'/') => {
                let end = text[i..].find('\n').map_or(text.len(), |n| i + n);
                comments.push(comment_at(text, i, end));
                i = end;
            }
            b'/' if bytes.get(i + 1) == Some(&b'*') => {
                let end = text[i + 2..].find("*/").map_or(text.len(), |n| i + 2 + n + 2);
                comments.push(comment_at(text, i, end));
                i = end;
            }
            quote @ (b'\'' | b'"' | b'`') => {
                i += 1;
                while i < bytes.len() {
                    if bytes[i] == b'\\' {
                        i += 2;
                    } else if bytes[i] == quote {
                        i += 1;
                        break;
                    } else {
                        i += 1;
                    }
                }
            }
            _ => i += 1,
        }
    }

    comments
}

fn comment_at(text: &str, start: usize, end: usize) -> CommentToken {
    CommentToken {
        text: Arc::from(&text[start..end]),
        range: TextRange::new(TextSize::from(start as u32), TextSize::from(end as u32)),
    }
}

/// Scan top-level `interface` / `type` declarations, in document order.
/// Matches whose header sits inside a comment are skipped.
fn scan_declarations(file: FileId, text: &str, comments: &[CommentToken]) -> Vec<Declaration> {
    let mut declarations = Vec::new();

    for caps in DECL_PATTERN.captures_iter(text) {
        let (Some(head), Some(keyword), Some(name)) = (caps.get(1), caps.get(2), caps.get(3))
        else {
            continue;
        };

        let start = head.start();
        let inside_comment = comments.iter().any(|c| {
            usize::from(c.range.start()) <= start && start < usize::from(c.range.end())
        });
        if inside_comment {
            continue;
        }

        let kind = match keyword.as_str() {
            "interface" => DeclKind::Interface,
            _ => DeclKind::TypeAlias,
        };
        let end = match kind {
            DeclKind::Interface => brace_extent(text, head.end()),
            DeclKind::TypeAlias => statement_extent(text, head.end()),
        };

        declarations.push(Declaration {
            name: SmolStr::new(name.as_str()),
            kind,
            file,
            range: TextRange::new(TextSize::from(start as u32), TextSize::from(end as u32)),
            text: Arc::from(&text[start..end]),
        });
    }

    declarations
}

/// Extent of a braced body: from `after` to the brace matching the first `{`.
/// Falls back to end of line when no body follows.
fn brace_extent(text: &str, after: usize) -> usize {
    let Some(open) = text[after..].find('{').map(|n| after + n) else {
        return line_end(text, after);
    };

    let mut depth = 0usize;
    for (offset, c) in text[open..].char_indices() {
        match c {
            '{' => depth += 1,
            '}' => {
                depth -= 1;
                if depth == 0 {
                    return open + offset + 1;
                }
            }
            _ => {}
        }
    }
    text.len()
}

/// Extent of a `type X = ...` statement: through the terminating `;`,
/// or end of line when unterminated.
fn statement_extent(text: &str, after: usize) -> usize {
    match text[after..].find(';') {
        Some(n) => after + n + 1,
        None => line_end(text, after),
    }
}

fn line_end(text: &str, from: usize) -> usize {
    text[from..].find('\n').map_or(text.len(), |n| from + n)
}
