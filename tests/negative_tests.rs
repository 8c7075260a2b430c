// Oberon-Scope - Module scope table for an Oberon-2 compiler front end
// Copyright (C) 2026  Marcel Joachim Kloubert <marcel@kloubert.dev>
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU Affero General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU Affero General Public License for more details.
//
// You should have received a copy of the GNU Affero General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! Negative/Error tests for the import analysis.
//!
//! Each case describes a compilation unit as a list of module headers,
//! `"Name: Import, Alias := Import"`, and the error codes it must produce.

use oberon_scope::ast::{Ast, Ident, Import, ModuleDecl};
use oberon_scope::{analyze, ErrorCode, Span};
use test_case::test_case;

/// Build an AST from module headers like `"Main: Out, F := Files"`.
///
/// Spans are offsets into the headers joined by newlines.
fn unit(headers: &[&str]) -> Ast {
    let mut ast = Ast::new();
    let mut offset = 0;
    for &header in headers {
        let (name, imports) = header.split_once(':').unwrap_or((header, ""));
        let name = Ident::new(name.trim(), Span::new(offset, offset + name.trim().len()));
        let mut module = ModuleDecl::new(name, Span::new(offset, offset + header.len()));

        let mut cursor = offset + header.find(':').map(|i| i + 1).unwrap_or(header.len());
        for element in imports.split(',').filter(|e| !e.trim().is_empty()) {
            let start = cursor + (element.len() - element.trim_start().len());
            let ident_at = |text: &str, at: usize| {
                Ident::new(text.trim(), Span::new(at, at + text.trim().len()))
            };
            let import = match element.split_once(":=") {
                Some((alias, target)) => {
                    let target_start = start
                        + alias.trim_start().len()
                        + 2
                        + (target.len() - target.trim_start().len());
                    Import::aliased(ident_at(alias, start), ident_at(target, target_start))
                }
                None => Import::new(ident_at(element, start)),
            };
            module = module.with_import(import);
            cursor += element.len() + 1;
        }

        ast.add_module(module);
        offset += header.len() + 1;
    }
    ast
}

fn error_codes(headers: &[&str]) -> Vec<ErrorCode> {
    match analyze(&unit(headers)) {
        Ok(_) => vec![],
        Err(errors) => errors.iter().map(|e| e.code).collect(),
    }
}

// ============================================================================
// Valid Units
// ============================================================================

#[test_case(&[]; "empty_unit")]
#[test_case(&["Main"]; "single_module")]
#[test_case(&["Out", "Main: Out"]; "plain_import")]
#[test_case(&["Files", "Main: F := Files"]; "aliased_import")]
#[test_case(&["Files", "Main: F := Files, Files"]; "alias_and_name")]
#[test_case(&["A", "B: A", "C: A, B"]; "chain")]
fn test_valid_units(headers: &[&str]) {
    assert_eq!(error_codes(headers), vec![]);
}

// ============================================================================
// Undeclared Modules
// ============================================================================

#[test_case(&["Main: Out"]; "nothing_declared")]
#[test_case(&["Main: Lib", "Lib"]; "declared_later")]
#[test_case(&["Files", "Main: F := Files", "Other: F"]; "alias_not_global")]
#[test_case(&["Files", "Main: F := Files, G := F"]; "alias_not_a_module")]
#[test_case(&["Out", "Main: out"]; "case_mismatch")]
fn test_undeclared_module(headers: &[&str]) {
    assert_eq!(error_codes(headers), vec![ErrorCode::UndeclaredModule]);
}

// ============================================================================
// Redeclarations
// ============================================================================

#[test_case(&["Lib", "Lib"], ErrorCode::ModuleRedeclared; "module_twice")]
#[test_case(&["Out", "Main: Out, Out"], ErrorCode::DuplicateImport; "import_twice")]
#[test_case(
    &["Out", "Files", "Main: X := Out, X := Files"],
    ErrorCode::DuplicateImport;
    "alias_twice"
)]
#[test_case(&["Main: Main"], ErrorCode::SelfImport; "self_import")]
#[test_case(&["Main", "Main: Main"], ErrorCode::SelfImport; "self_import_after_redeclared_name")]
fn test_single_error(headers: &[&str], expected: ErrorCode) {
    let codes = error_codes(headers);
    assert_eq!(codes.first(), Some(&expected), "codes: {:?}", codes);
}

#[test]
fn test_error_spans_point_at_identifiers() {
    let headers = ["Main: Out"];
    let errors = analyze(&unit(&headers)).unwrap_err();
    assert_eq!(errors.len(), 1);
    // "Main: Out" -> "Out" starts at byte 6
    assert_eq!(errors[0].span, Span::new(6, 9));
}

#[test]
fn test_errors_keep_source_order() {
    let codes = error_codes(&["A: Nope", "A", "B: B"]);
    assert_eq!(
        codes,
        vec![
            ErrorCode::UndeclaredModule,
            ErrorCode::ModuleRedeclared,
            ErrorCode::SelfImport
        ]
    );
}
