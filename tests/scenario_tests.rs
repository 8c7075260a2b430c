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

//! End-to-end usage of the module table the way a parser drives it.

use oberon_scope::ast::{Ast, Ident, ModuleDecl};
use oberon_scope::{ConsoleReporter, ErrorCode, Errors, ModuleTable, Reporter, Span};
use pretty_assertions::assert_eq;

fn declare(ast: &mut Ast, name: &str, start: usize) -> (Ident, oberon_scope::ModuleId) {
    let ident = Ident::new(name, Span::new(start, start + name.len()));
    let id = ast.add_module(ModuleDecl::new(ident.clone(), Span::new(start, start + name.len())));
    (ident, id)
}

#[test]
fn test_insert_alpha_lookup_beta() {
    let mut ast = Ast::new();
    let (alpha, alpha_id) = declare(&mut ast, "Alpha", 0);
    let mut table = ModuleTable::new(Errors::new());

    table.insert(&alpha, alpha_id);

    assert_eq!(table.lookup("Alpha").map(|e| e.module), Some(alpha_id));
    assert!(table.lookup("Beta").is_none());
}

#[test]
fn test_redeclared_alpha_returns_latest() {
    let mut ast = Ast::new();
    let (v1, v1_id) = declare(&mut ast, "Alpha", 0);
    let (v2, v2_id) = declare(&mut ast, "Alpha", 40);
    let mut table = ModuleTable::new(Errors::new());

    table.insert(&v1, v1_id);
    table.insert(&v2, v2_id);

    let found = table.lookup("Alpha").unwrap();
    assert_eq!(found.module, v2_id);
    assert_eq!(found.span, Span::new(40, 45));
}

#[test]
fn test_empty_table_reports_nothing_by_itself() {
    let table = ModuleTable::new(Errors::new());
    assert!(table.lookup("Anything").is_none());
    assert_eq!(table.into_reporter().len(), 0);
}

#[test]
fn test_enumeration_is_newest_first() {
    let mut ast = Ast::new();
    let mut table = ModuleTable::new(Errors::new());
    for (i, name) in ["X", "Y", "Z"].into_iter().enumerate() {
        let (ident, id) = declare(&mut ast, name, i * 10);
        table.insert(&ident, id);
    }

    let order: Vec<String> = table.scope_entries().map(|e| e.name.clone()).collect();
    assert_eq!(order, vec!["Z", "Y", "X"]);
}

#[test]
fn test_parser_reports_undeclared_reference() {
    let source = "MODULE Main;\n  IMPORT Lib;\nEND Main.\n";
    let mut table = ModuleTable::new(ConsoleReporter::new(Vec::new(), source));

    let reference = Ident::new("Lib", Span::new(22, 25));
    if table.lookup(&reference.name).is_none() {
        table.report_error(
            ErrorCode::UndeclaredModule,
            format!("undeclared module '{}'", reference.name),
            reference.span,
        );
    }

    assert_eq!(table.reporter().error_count(), 1);
    let rendered = String::from_utf8(table.into_reporter().into_inner()).unwrap();
    assert!(rendered.contains("undeclared module 'Lib'"), "{}", rendered);
}

#[test]
fn test_separate_units_do_not_share_errors() {
    let mut first = ModuleTable::new(Errors::new());
    let second = ModuleTable::new(Errors::new());

    first.resolve(&Ident::new("Missing", Span::new(0, 7)));

    assert_eq!(first.reporter().len(), 1);
    assert_eq!(second.reporter().len(), 0);
}
