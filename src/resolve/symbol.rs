//! Type symbol resolution across re-export chains.
//!
//! Given a file and a type name, find the declaration the name refers to:
//! first among the file's own top-level declarations, then — if absent —
//! through the file's `@import` clauses, recursing into each referenced
//! module. A clause's *alias* is what is visible in the importing file's
//! scope; recursion continues with the clause's original *imported name*,
//! since an alias is a local rename only.
//!
//! Each (file, name) pair is visited at most once per call, so cyclic and
//! self-referential import chains terminate within a bound proportional to
//! the number of distinct files touched.

use rustc_hash::FxHashSet;
use smol_str::SmolStr;

use crate::base::FileId;
use crate::project::host::{Declaration, ProjectHost};
use crate::resolve::module_path::resolve_module;
use crate::resolve::observer::ResolveObserver;
use crate::syntax::parse_import_clauses;

/// Resolve a type name starting at a file.
///
/// Returns the first matching declaration — direct declarations in document
/// order, then transitive candidates in clause-discovery order — or `None`
/// when the chain is exhausted. Pure over the host snapshot; resolving the
/// same (file, name) twice against an unchanged snapshot yields the same
/// result.
pub fn resolve_symbol(
    host: &dyn ProjectHost,
    file: FileId,
    name: &str,
    observer: &dyn ResolveObserver,
) -> Option<Declaration> {
    let mut visited = FxHashSet::default();
    resolve_in_file(host, file, name, observer, &mut visited)
}

fn resolve_in_file(
    host: &dyn ProjectHost,
    file: FileId,
    name: &str,
    observer: &dyn ResolveObserver,
    visited: &mut FxHashSet<(FileId, SmolStr)>,
) -> Option<Declaration> {
    if !visited.insert((file, SmolStr::new(name))) {
        observer.cycle_detected(file, name);
        return None;
    }
    observer.searching_file(file, name);

    // Direct search: first declaration with exactly this name wins.
    if let Some(declaration) = host
        .declarations(file)
        .into_iter()
        .find(|decl| decl.name == name)
    {
        observer.symbol_resolved(name, file);
        return Some(declaration);
    }

    // Transitive search through the file's own import clauses. Module paths
    // resolve against this file's directory, not the request's origin.
    let Some(from_dir) = host.containing_dir(file) else {
        return None;
    };

    for comment in host.comments(file) {
        for clause in parse_import_clauses(&comment.text) {
            if clause.alias != name {
                continue;
            }
            let Some(target) = resolve_module(host, from_dir, &clause.module_path, observer)
            else {
                continue;
            };
            if let Some(declaration) =
                resolve_in_file(host, target, &clause.imported_name, observer, visited)
            {
                return Some(declaration);
            }
        }
    }

    None
}
