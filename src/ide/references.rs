//! Reference emission — resolvable spans for `@import` comments.
//!
//! This is the layer the host invokes per file: walk every comment, parse
//! the clauses, and emit two kinds of spans — one for each clause group's
//! module path and one for each imported type name. The spans are
//! file-absolute; resolution happens later, per reference, in
//! [`crate::ide::goto`] and [`crate::ide::hover`].

use smol_str::SmolStr;

use crate::base::{FileId, TextRange};
use crate::project::host::ProjectHost;
use crate::syntax::parse_import_clauses;

/// What a reference points at.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ReferenceKind {
    /// The module path text of a clause group.
    ModulePath,
    /// One imported type name.
    TypeName,
}

/// A resolvable span in a file's `@import` comments.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ImportReference {
    pub kind: ReferenceKind,
    /// File-absolute span of the referenced text.
    pub range: TextRange,
    /// The clause's module path, as written.
    pub module_path: SmolStr,
    /// The original imported name (not the alias); `None` for module-path
    /// references.
    pub imported_name: Option<SmolStr>,
}

/// Emit all import references in a file, in document order.
///
/// Each clause group yields one `ModulePath` reference followed by a
/// `TypeName` reference per imported name.
pub fn import_references(host: &dyn ProjectHost, file: FileId) -> Vec<ImportReference> {
    let mut references = Vec::new();

    for comment in host.comments(file) {
        let base = comment.range.start();
        let mut last_path_range = None;

        for clause in parse_import_clauses(&comment.text) {
            // Clauses from one group share the group's path span; emit the
            // module-path reference once per group.
            if last_path_range != Some(clause.path_range) {
                last_path_range = Some(clause.path_range);
                references.push(ImportReference {
                    kind: ReferenceKind::ModulePath,
                    range: clause.path_range + base,
                    module_path: clause.module_path.clone(),
                    imported_name: None,
                });
            }

            references.push(ImportReference {
                kind: ReferenceKind::TypeName,
                range: clause.name_range + base,
                module_path: clause.module_path,
                imported_name: Some(clause.imported_name),
            });
        }
    }

    references
}
