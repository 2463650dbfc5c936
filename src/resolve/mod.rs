//! The resolution engine: module paths and type symbols.
//!
//! Everything here is a pure, synchronous function over a [`ProjectHost`]
//! snapshot plus an explicit [`ResolveObserver`]. No mutable state survives
//! a call, so concurrent resolutions need no locking on the engine's side.
//!
//! [`ProjectHost`]: crate::project::ProjectHost

mod module_path;
mod observer;
mod symbol;

pub use module_path::{is_relative, resolve_module};
pub use observer::{NullObserver, ResolveObserver, TracingObserver};
pub use symbol::resolve_symbol;
