//! Module path resolution.
//!
//! A module path written in an `@import` clause is classified at resolution
//! time: *relative* paths (leading `./` or `../`) walk the directory tree
//! segment by segment and finish with extension probing; *bare* paths fall
//! back to a best-effort project-wide filename lookup. Classification is a
//! predicate over the string, not a stored type.
//!
//! Every failure is an ordinary `None` — a missing segment, a `..` past the
//! root, a name with no probe match. The caller decides what "not found"
//! means for its purpose.

use crate::base::{DirId, FileId};
use crate::project::host::{DirEntry, FILE_EXTENSIONS, ProjectHost};
use crate::resolve::observer::ResolveObserver;

/// Whether a module path is relative (leading `./` or `../`).
pub fn is_relative(path: &str) -> bool {
    path.starts_with("./") || path.starts_with("../")
}

/// Resolve a module path against the directory of the file that wrote it.
///
/// Pure over (starting directory, path string, host snapshot); no state is
/// retained between calls.
pub fn resolve_module(
    host: &dyn ProjectHost,
    from_dir: DirId,
    path: &str,
    observer: &dyn ResolveObserver,
) -> Option<FileId> {
    observer.resolving_module(path);

    let resolved = if is_relative(path) {
        resolve_relative(host, from_dir, path)
    } else {
        resolve_bare(host, path)
    };

    match resolved {
        Some(file) => observer.module_resolved(path, file),
        None => observer.module_not_found(path),
    }
    resolved
}

/// Walk a relative path segment by segment.
///
/// `.` is a no-op, `..` moves to the parent (failing at the root), any other
/// non-final segment must name an existing subdirectory. The final segment
/// goes through extension probing in the directory reached.
fn resolve_relative(host: &dyn ProjectHost, from_dir: DirId, path: &str) -> Option<FileId> {
    let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
    let (&base_name, dir_segments) = segments.split_last()?;

    let mut dir = from_dir;
    for &segment in dir_segments {
        dir = match segment {
            "." => dir,
            ".." => host.parent_dir(dir)?,
            _ => host.child(dir, segment)?.as_dir()?,
        };
    }

    match base_name {
        // A path like `./..` can leave `..` as the final segment; it names
        // a directory, never a file.
        "." | ".." => None,
        _ => probe_extensions(host, dir, base_name),
    }
}

/// Try a base name against the fixed extension priority list.
///
/// The name is tried verbatim first. Then its stem (the name minus the last
/// dot-suffix, or the whole name when dot-free) is combined with each
/// extension in priority order. For the empty-suffix slot of a name that
/// already contained a dot, the untouched name fills in — the bare stem is
/// never tried as a plain name ahead of the explicit-extension candidates.
fn probe_extensions(host: &dyn ProjectHost, dir: DirId, base_name: &str) -> Option<FileId> {
    if let Some(file) = regular_file(host, dir, base_name) {
        return Some(file);
    }

    let stem = match base_name.rfind('.') {
        Some(dot) => &base_name[..dot],
        None => base_name,
    };
    let has_extension = base_name.contains('.');

    for &ext in FILE_EXTENSIONS {
        let candidate = if has_extension && ext.is_empty() {
            base_name.to_string()
        } else {
            format!("{stem}{ext}")
        };
        if let Some(file) = regular_file(host, dir, &candidate) {
            return Some(file);
        }
    }

    None
}

fn regular_file(host: &dyn ProjectHost, dir: DirId, name: &str) -> Option<FileId> {
    host.child(dir, name).and_then(DirEntry::as_file)
}

/// Best-effort lookup for a bare (non-relative) path.
///
/// Only the final `/` segment matters; directory components are ignored.
/// Each non-empty extension is tried against the project-wide filename
/// index, and the first match in the index's stable order wins. This is not
/// package-manager-aware resolution, deliberately.
fn resolve_bare(host: &dyn ProjectHost, path: &str) -> Option<FileId> {
    let file_name = path.rsplit('/').next().unwrap_or(path);
    if file_name.is_empty() {
        return None;
    }

    for &ext in FILE_EXTENSIONS {
        if ext.is_empty() {
            continue;
        }
        let candidate = format!("{file_name}{ext}");
        if let Some(&file) = host.files_named(&candidate).first() {
            return Some(file);
        }
    }

    None
}
