//! # tsimport-base
//!
//! Core library for TypeScript `@import` comment parsing, module resolution,
//! and IDE navigation.
//!
//! The crate resolves lightweight import declarations written in comments:
//!
//! ```text
//! // @import { User, Feature as Flag } from './types'
//! ```
//!
//! For each clause it locates the file the module path designates and the
//! declaration of each named type inside it, following further `@import`
//! comments transitively when a type is only re-exported.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! ide      → per-request surface (references, goto, hover, completion)
//!   ↓
//! resolve  → module-path + symbol resolution over a host snapshot
//!   ↓
//! syntax   → @import clause parsing out of comment text
//!   ↓
//! project  → host collaborator contracts + in-memory host
//!   ↓
//! base     → primitives (FileId, DirId, TextRange)
//! ```
//!
//! ## Usage
//!
//! ```
//! use tsimport::ide::{goto_definition, import_references};
//! use tsimport::project::MemoryProject;
//! use tsimport::resolve::NullObserver;
//!
//! let project = MemoryProject::new();
//! project
//!     .add_file("types.ts", "export interface User { name: string }")
//!     .unwrap();
//! let app = project
//!     .add_file("app.ts", "// @import { User } from './types'\n")
//!     .unwrap();
//!
//! let refs = import_references(&project, app);
//! let target = goto_definition(&project, app, &refs[1], &NullObserver);
//! assert!(target.is_some());
//! ```

/// Foundation types: FileId, DirId, spans
pub mod base;

/// IDE features: reference emission, goto-definition, hover, completion
pub mod ide;

/// Host collaborator contracts and the in-memory project model
pub mod project;

/// The resolution engine: module paths and type symbols
pub mod resolve;

/// Comment micro-syntax: `@import` clause extraction
pub mod syntax;

// Re-export commonly needed items
pub use base::{DirId, FileId, LineCol, LineIndex, TextRange, TextSize};
pub use project::{Declaration, DeclKind, MemoryProject, ProjectHost};
pub use resolve::{NullObserver, ResolveObserver, resolve_module, resolve_symbol};
pub use syntax::{ImportClause, parse_import_clauses};
