//! Reference emission and navigation over fixture files.
//!
//! Exercises the span bookkeeping a host relies on: every emitted range must
//! slice the file text to exactly the referenced token, and each reference
//! must navigate or hover to the right place.

use tsimport::base::{LineCol, LineIndex, TextRange, TextSize};
use tsimport::ide::{
    ReferenceKind, completions, goto_definition, hover, import_references,
};
use tsimport::project::MemoryProject;
use tsimport::resolve::NullObserver;

fn text_at(source: &str, range: TextRange) -> &str {
    &source[usize::from(range.start())..usize::from(range.end())]
}

#[test]
fn test_every_emitted_span_slices_its_token() {
    let project = MemoryProject::new();
    let source = "\
import fs from 'fs';\n\
\n\
/**\n\
 * Shared view models.\n\
 * @import { CommonProps, Size as BadgeSize } from '../common.types'\n\
 * @import { Account } from './models/index'\n\
 */\n\
export const render = () => null;\n";
    let file = project.add_file("components/badge.js", source).unwrap();

    let refs = import_references(&project, file);
    let texts: Vec<(ReferenceKind, &str)> = refs
        .iter()
        .map(|r| (r.kind, text_at(source, r.range)))
        .collect();

    assert_eq!(
        texts,
        vec![
            (ReferenceKind::ModulePath, "../common.types"),
            (ReferenceKind::TypeName, "CommonProps"),
            (ReferenceKind::TypeName, "Size"),
            (ReferenceKind::ModulePath, "./models/index"),
            (ReferenceKind::TypeName, "Account"),
        ]
    );
}

#[test]
fn test_collision_prone_names_span_their_own_token() {
    let project = MemoryProject::new();
    // "Id" is a substring of "portId", which appears earlier in the same
    // match. The span must land on the standalone token.
    let source = "// @import { portId, Id } from './ids'\n";
    let file = project.add_file("app.ts", source).unwrap();

    let refs = import_references(&project, file);
    let id_ref = &refs[2];
    assert_eq!(text_at(source, id_ref.range), "Id");

    // The span begins after "portId," — not inside it.
    let line = LineIndex::new(source);
    let col = line.line_col(id_ref.range.start()).col;
    assert_eq!(&source[col as usize..col as usize + 2], "Id");
    assert!(col > source.find("portId").unwrap() as u32);
}

#[test]
fn test_goto_across_files_with_line_positions() {
    let project = MemoryProject::new();
    let types_source = "// shared\nexport interface CommonProps {\n  id: string;\n}\n";
    let types = project.add_file("common.types.ts", types_source).unwrap();
    let badge = project
        .add_file(
            "components/badge.js",
            "// @import { CommonProps } from '../common.types'\n",
        )
        .unwrap();

    let refs = import_references(&project, badge);
    let type_ref = refs
        .iter()
        .find(|r| r.kind == ReferenceKind::TypeName)
        .unwrap();

    let target = goto_definition(&project, badge, type_ref, &NullObserver).unwrap();
    assert_eq!(target.file, types);

    // Hosts convert the byte range to editor coordinates per file.
    let line = LineIndex::new(types_source);
    assert_eq!(line.line_col(target.range.start()), LineCol::new(1, 0));
}

#[test]
fn test_hover_payload_matches_declaration() {
    let project = MemoryProject::new();
    project
        .add_file(
            "models/user.ts",
            "export interface User {\n  name: string;\n}\n",
        )
        .unwrap();
    project
        .add_file(
            "models/index.ts",
            "// @import { User as Account } from './user'\n",
        )
        .unwrap();
    let app = project
        .add_file(
            "app.ts",
            "// @import { Account } from './models/index'\n",
        )
        .unwrap();

    let refs = import_references(&project, app);
    let account_ref = &refs[1];

    let result = hover(&project, app, account_ref, &NullObserver).unwrap();
    assert_eq!(result.signature, "interface User");
    assert!(result.text.starts_with("export interface User"));
}

#[test]
fn test_completions_stay_empty() {
    let project = MemoryProject::new();
    let file = project
        .add_file("app.ts", "// @import { Us } from './types'\n")
        .unwrap();

    // Mid-name, mid-path, anywhere: no suggestions, by contract.
    for offset in [0u32, 14, 25] {
        assert!(completions(&project, file, TextSize::from(offset)).is_empty());
    }
}
