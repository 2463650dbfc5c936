//! Resolution observers.
//!
//! The engine reports each resolution step to an observer passed into the
//! call, instead of logging through ambient global state. Resolution stays a
//! pure function of its inputs plus this explicit collaborator; hosts that
//! want logs plug in [`TracingObserver`], everyone else gets [`NullObserver`].

use crate::base::FileId;

/// Per-step hooks for one resolution call. All hooks default to no-ops, so
/// implementors override only what they care about.
pub trait ResolveObserver {
    /// A module path is about to be resolved.
    fn resolving_module(&self, _path: &str) {}

    /// A module path resolved to a file.
    fn module_resolved(&self, _path: &str, _file: FileId) {}

    /// A module path did not resolve.
    fn module_not_found(&self, _path: &str) {}

    /// A file is being searched for a type name.
    fn searching_file(&self, _file: FileId, _name: &str) {}

    /// A type name resolved to a declaration in a file.
    fn symbol_resolved(&self, _name: &str, _file: FileId) {}

    /// A (file, name) pair came up a second time in one call; the search
    /// short-circuits there.
    fn cycle_detected(&self, _file: FileId, _name: &str) {}
}

/// Ignores every step.
#[derive(Copy, Clone, Debug, Default)]
pub struct NullObserver;

impl ResolveObserver for NullObserver {}

/// Forwards every step to `tracing` at debug/trace level.
#[derive(Copy, Clone, Debug, Default)]
pub struct TracingObserver;

impl ResolveObserver for TracingObserver {
    fn resolving_module(&self, path: &str) {
        tracing::debug!(%path, "resolving module");
    }

    fn module_resolved(&self, path: &str, file: FileId) {
        tracing::debug!(%path, %file, "module resolved");
    }

    fn module_not_found(&self, path: &str) {
        tracing::debug!(%path, "module not found");
    }

    fn searching_file(&self, file: FileId, name: &str) {
        tracing::trace!(%file, %name, "searching file");
    }

    fn symbol_resolved(&self, name: &str, file: FileId) {
        tracing::debug!(%name, %file, "symbol resolved");
    }

    fn cycle_detected(&self, file: FileId, name: &str) {
        tracing::debug!(%file, %name, "import cycle, stopping");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_null_observer_is_callable() {
        let observer = NullObserver;
        observer.resolving_module("./types");
        observer.module_resolved("./types", FileId::new(0));
        observer.cycle_detected(FileId::new(0), "User");
    }
}
