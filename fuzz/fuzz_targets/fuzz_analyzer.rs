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

//! Fuzz target for the import analysis.
//!
//! Builds random compilation units and feeds them through the analyzer.
//! Analysis should never panic, only return Ok or Err.
//!
//! Run with:
//!   cargo +nightly fuzz run fuzz_analyzer

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use oberon_scope::ast::{Ast, Ident, Import, ModuleDecl};
use oberon_scope::Span;

#[derive(Debug, Arbitrary)]
struct Module {
    name: u8,
    imports: Vec<(Option<u8>, u8)>,
}

fn ident(n: u8, offset: usize) -> Ident {
    Ident::new(format!("M{}", n % 8), Span::new(offset, offset + 2))
}

fuzz_target!(|modules: Vec<Module>| {
    let mut ast = Ast::new();
    for (i, module) in modules.iter().enumerate() {
        let decl = module.imports.iter().fold(
            ModuleDecl::new(ident(module.name, i), Span::default()),
            |decl, (alias, target)| match alias {
                Some(alias) => {
                    decl.with_import(Import::aliased(ident(*alias, i), ident(*target, i)))
                }
                None => decl.with_import(Import::new(ident(*target, i))),
            },
        );
        ast.add_module(decl);
    }

    if let Ok(imports) = oberon_scope::analyze(&ast) {
        for import in imports {
            assert!(import.target < import.importer);
        }
    }
});
