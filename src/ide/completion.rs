//! Completion — deliberately empty.
//!
//! Autocompletion inside `@import` clauses belongs to the host's completion
//! subsystem, which this crate does not implement. The contract is an empty
//! suggestion list, always, so hosts can wire the provider unconditionally.

use crate::base::{FileId, TextSize};
use crate::project::host::ProjectHost;

/// A completion suggestion. No constructor here produces one; the type
/// exists so the provider signature is stable if suggestions ever arrive.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CompletionItem {
    /// The suggested text.
    pub label: String,
}

/// Completion suggestions at an offset. Always empty.
pub fn completions(
    _host: &dyn ProjectHost,
    _file: FileId,
    _offset: TextSize,
) -> Vec<CompletionItem> {
    Vec::new()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::project::MemoryProject;

    #[test]
    fn test_always_empty() {
        let project = MemoryProject::new();
        let file = project
            .add_file("app.ts", "// @import {  } from './types'\n")
            .unwrap();

        assert!(completions(&project, file, TextSize::from(12)).is_empty());
    }
}
