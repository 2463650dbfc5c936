//! Hover payloads for imported type names.
//!
//! The payload is plain text — a one-line signature plus the declaration's
//! source — and the host owns whatever markup it wraps around it.

use std::sync::Arc;

use crate::base::FileId;
use crate::ide::references::{ImportReference, ReferenceKind};
use crate::project::host::ProjectHost;
use crate::resolve::{ResolveObserver, resolve_module, resolve_symbol};

/// Hover content for a resolved type-name reference.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HoverResult {
    /// One-line signature, e.g. `interface User` or `type Id`.
    pub signature: String,
    /// The declaration's source text.
    pub text: Arc<str>,
}

/// Build the hover payload for a reference in `file`.
///
/// Module-path references have no hover content; type-name references hover
/// as their resolved declaration. `None` when resolution fails.
pub fn hover(
    host: &dyn ProjectHost,
    file: FileId,
    reference: &ImportReference,
    observer: &dyn ResolveObserver,
) -> Option<HoverResult> {
    if reference.kind != ReferenceKind::TypeName {
        return None;
    }
    let name = reference.imported_name.as_deref()?;

    let from_dir = host.containing_dir(file)?;
    let target_file = resolve_module(host, from_dir, &reference.module_path, observer)?;
    let declaration = resolve_symbol(host, target_file, name, observer)?;

    Some(HoverResult {
        signature: declaration.signature(),
        text: declaration.text,
    })
}
