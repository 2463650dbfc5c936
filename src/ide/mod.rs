//! IDE features — the surface the host calls per request.
//!
//! Each function is pure: data in, data out, no editor types. Reference
//! emission walks a file's comments once; goto and hover resolve a single
//! reference on demand.

mod completion;
mod goto;
mod hover;
mod references;

pub use completion::{CompletionItem, completions};
pub use goto::{NavigationTarget, goto_definition};
pub use hover::{HoverResult, hover};
pub use references::{ImportReference, ReferenceKind, import_references};
