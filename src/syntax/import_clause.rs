//! Parsing of `@import` clauses out of raw comment text.
//!
//! The comment micro-syntax is a TypeScript convention, not part of any
//! grammar this crate parses:
//!
//! ```text
//! @import { User, Feature as Flag } from './types'
//! ```
//!
//! One comment may contain any number of clause groups; each group yields one
//! [`ImportClause`] per imported name. Spans are byte ranges inside the
//! comment text the clauses were parsed from — callers offset them by the
//! comment's own span to get file-absolute ranges.

use std::sync::LazyLock;

use regex::Regex;
use smol_str::SmolStr;

use crate::base::{TextRange, TextSize};

/// Pattern: `@import { Name1, Name2 as Alias } from 'module-path'`.
/// Quotes may be single or double.
static IMPORT_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"@import\s+\{([^}]+)\}\s+from\s+['"]([^'"]+)['"]"#)
        .expect("import pattern is a valid regex")
});

/// One parsed `@import` clause: a single imported name bound to a module path.
///
/// A group importing several names produces several clauses that share
/// `module_path` and `path_range` but carry their own name and name span.
/// Clauses are plain data; nothing here is resolved yet.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ImportClause {
    /// The name as written in the target module, before alias resolution.
    pub imported_name: SmolStr,
    /// The locally visible name. Equals `imported_name` when no `as` form
    /// was given; never empty.
    pub alias: SmolStr,
    /// The module path as written, unresolved.
    pub module_path: SmolStr,
    /// Span of `imported_name`'s token inside the comment text.
    pub name_range: TextRange,
    /// Span of the module path text (without quotes) inside the comment text.
    pub path_range: TextRange,
}

impl ImportClause {
    /// Whether this clause renames the imported symbol locally.
    pub fn is_aliased(&self) -> bool {
        self.imported_name != self.alias
    }
}

/// Extract every import clause from a comment's raw text.
///
/// Clause groups are matched non-overlapping, left to right. Within a group
/// the import list is split on commas, pieces are trimmed, and empty pieces
/// (trailing commas) are dropped. A piece containing the literal `" as "`
/// splits into name and alias at its first occurrence.
///
/// Pieces whose name does not lex as an identifier are skipped — they cannot
/// name a declaration, and a span for them would be a dead reference.
///
/// Text with no `@import` occurrence yields an empty vec; that is not an
/// error condition.
pub fn parse_import_clauses(comment_text: &str) -> Vec<ImportClause> {
    let mut clauses = Vec::new();

    for caps in IMPORT_PATTERN.captures_iter(comment_text) {
        let (Some(imports), Some(path)) = (caps.get(1), caps.get(2)) else {
            continue;
        };

        let module_path = SmolStr::new(path.as_str());
        let path_range = range_at(path.start(), path.as_str().len());

        for (piece_offset, piece) in split_import_list(imports.as_str()) {
            let (imported_name, alias) = split_alias(piece);
            if !is_type_identifier(imported_name) {
                continue;
            }

            // Name spans are positional: the piece's offset inside the
            // imports capture is tracked through the split, so a name that
            // also occurs as a substring earlier in the match cannot
            // mislocate the span.
            let name_start = imports.start() + piece_offset;
            clauses.push(ImportClause {
                imported_name: SmolStr::new(imported_name),
                alias: SmolStr::new(alias),
                module_path: module_path.clone(),
                name_range: range_at(name_start, imported_name.len()),
                path_range,
            });
        }
    }

    clauses
}

/// Split a comma-separated import list, yielding each non-empty trimmed piece
/// together with its byte offset inside `list`.
fn split_import_list(list: &str) -> impl Iterator<Item = (usize, &str)> {
    let mut raw_pieces = Vec::new();
    let mut start = 0usize;
    for (comma, _) in list.match_indices(',') {
        raw_pieces.push((start, &list[start..comma]));
        start = comma + 1;
    }
    raw_pieces.push((start, &list[start..]));

    raw_pieces.into_iter().filter_map(|(offset, raw)| {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return None;
        }
        let leading = raw.len() - raw.trim_start().len();
        Some((offset + leading, trimmed))
    })
}

/// Split a trimmed piece on the literal `" as "` into (name, alias).
///
/// Without an `as` form, both sides are the piece itself.
fn split_alias(piece: &str) -> (&str, &str) {
    match piece.find(" as ") {
        Some(idx) => {
            let name = piece[..idx].trim_end();
            let alias = piece[idx + " as ".len()..].trim_start();
            (name, alias)
        }
        None => (piece, piece),
    }
}

/// Whether `name` lexes as a type identifier in the host language
/// (XID rules plus `_` and `$`).
fn is_type_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    if !(unicode_ident::is_xid_start(first) || first == '_' || first == '$') {
        return false;
    }
    chars.all(|c| unicode_ident::is_xid_continue(c) || c == '$')
}

fn range_at(start: usize, len: usize) -> TextRange {
    TextRange::at(TextSize::from(start as u32), TextSize::from(len as u32))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text_at(source: &str, range: TextRange) -> &str {
        &source[usize::from(range.start())..usize::from(range.end())]
    }

    #[test]
    fn test_no_import_yields_nothing() {
        assert!(parse_import_clauses("just a comment").is_empty());
        assert!(parse_import_clauses("").is_empty());
        assert!(parse_import_clauses("@import but malformed").is_empty());
    }

    #[test]
    fn test_single_name() {
        let text = "// @import { User } from './types'";
        let clauses = parse_import_clauses(text);

        assert_eq!(clauses.len(), 1);
        assert_eq!(clauses[0].imported_name, "User");
        assert_eq!(clauses[0].alias, "User");
        assert_eq!(clauses[0].module_path, "./types");
        assert!(!clauses[0].is_aliased());
    }

    #[test]
    fn test_alias_form() {
        let clauses = parse_import_clauses("@import { User as UserType } from './types'");

        assert_eq!(clauses.len(), 1);
        assert_eq!(clauses[0].imported_name, "User");
        assert_eq!(clauses[0].alias, "UserType");
        assert!(clauses[0].is_aliased());
    }

    #[test]
    fn test_list_split_is_whitespace_insensitive() {
        let clauses = parse_import_clauses("@import {A, B ,C} from './m'");

        let names: Vec<_> = clauses.iter().map(|c| c.imported_name.as_str()).collect();
        assert_eq!(names, ["A", "B", "C"]);
    }

    #[test]
    fn test_trailing_comma_dropped() {
        let clauses = parse_import_clauses("@import { A, B, } from './m'");
        assert_eq!(clauses.len(), 2);
    }

    #[test]
    fn test_double_quotes() {
        let clauses = parse_import_clauses(r#"@import { Config } from "../config/schema""#);

        assert_eq!(clauses.len(), 1);
        assert_eq!(clauses[0].module_path, "../config/schema");
    }

    #[test]
    fn test_multiple_groups_in_order() {
        let text = "/**\n * @import { A } from './a'\n * @import { B } from './b'\n */";
        let clauses = parse_import_clauses(text);

        assert_eq!(clauses.len(), 2);
        assert_eq!(clauses[0].module_path, "./a");
        assert_eq!(clauses[1].module_path, "./b");
    }

    #[test]
    fn test_name_spans_are_exact() {
        let text = "// @import { User, Feature as Flag } from './types'";
        let clauses = parse_import_clauses(text);

        assert_eq!(text_at(text, clauses[0].name_range), "User");
        assert_eq!(text_at(text, clauses[1].name_range), "Feature");
        assert_eq!(text_at(text, clauses[0].path_range), "./types");
        assert_eq!(clauses[0].path_range, clauses[1].path_range);
    }

    #[test]
    fn test_span_survives_substring_collision() {
        // "Id" also occurs inside "portId" earlier in the match; the span
        // must point at the standalone token, not the embedded substring.
        let text = "// @import { portId, Id } from './ids'";
        let clauses = parse_import_clauses(text);

        assert_eq!(clauses.len(), 2);
        let id_range = clauses[1].name_range;
        assert_eq!(text_at(text, id_range), "Id");
        assert!(id_range.start() > clauses[0].name_range.end());
    }

    #[test]
    fn test_non_identifier_pieces_skipped() {
        let clauses = parse_import_clauses("@import { Ok, not a name, 2Bad } from './m'");

        let names: Vec<_> = clauses.iter().map(|c| c.imported_name.as_str()).collect();
        assert_eq!(names, ["Ok"]);
    }

    #[test]
    fn test_dollar_and_underscore_names() {
        let clauses = parse_import_clauses("@import { _Internal, $Props } from './m'");
        assert_eq!(clauses.len(), 2);
    }

    #[test]
    fn test_empty_braces_yield_nothing() {
        assert!(parse_import_clauses("@import {  } from './m'").is_empty());
    }
}
