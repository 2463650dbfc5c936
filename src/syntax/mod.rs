//! Comment micro-syntax: `@import` clause extraction.

mod import_clause;

pub use import_clause::{ImportClause, parse_import_clauses};
