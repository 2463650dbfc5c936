//! Goto definition for import references.

use crate::base::{FileId, TextRange, TextSize};
use crate::ide::references::{ImportReference, ReferenceKind};
use crate::project::host::ProjectHost;
use crate::resolve::{ResolveObserver, resolve_module, resolve_symbol};

/// Where a reference leads.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct NavigationTarget {
    /// The file containing the definition.
    pub file: FileId,
    /// The definition's span; empty at offset zero for whole-file targets.
    pub range: TextRange,
}

/// Resolve a reference from `file` to its definition.
///
/// A module-path reference targets the resolved file itself; a type-name
/// reference targets the declaration found by symbol resolution in that
/// file. `None` when nothing resolves — the host shows no navigation.
pub fn goto_definition(
    host: &dyn ProjectHost,
    file: FileId,
    reference: &ImportReference,
    observer: &dyn ResolveObserver,
) -> Option<NavigationTarget> {
    let from_dir = host.containing_dir(file)?;
    let target_file = resolve_module(host, from_dir, &reference.module_path, observer)?;

    match reference.kind {
        ReferenceKind::ModulePath => Some(NavigationTarget {
            file: target_file,
            range: TextRange::empty(TextSize::from(0)),
        }),
        ReferenceKind::TypeName => {
            let name = reference.imported_name.as_deref()?;
            let declaration = resolve_symbol(host, target_file, name, observer)?;
            Some(NavigationTarget {
                file: declaration.file,
                range: declaration.range,
            })
        }
    }
}
