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

//! Fuzz target for the module table.
//!
//! Drives the table with random sequences of operations and checks the
//! lookup invariants after every step.
//!
//! Run with:
//!   cargo +nightly fuzz run fuzz_table
//!
//! Run for a specific duration:
//!   cargo +nightly fuzz run fuzz_table -- -max_total_time=60

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use oberon_scope::ast::{Ast, Ident, ModuleDecl};
use oberon_scope::{Errors, ModuleTable, Span};

#[derive(Debug, Arbitrary)]
enum Op {
    Insert(u8),
    Declare(u8),
    Lookup(u8),
    Resolve(u8),
    PushScope,
    PopScope,
}

fn name(n: u8) -> String {
    // Small alphabet so names collide often
    format!("M{}", n % 16)
}

fuzz_target!(|ops: Vec<Op>| {
    let mut ast = Ast::new();
    let mut table = ModuleTable::new(Errors::new());

    for op in ops {
        match op {
            Op::Insert(n) | Op::Declare(n) => {
                let ident = Ident::new(name(n), Span::default());
                let id = ast.add_module(ModuleDecl::new(ident.clone(), Span::default()));
                let entry = if matches!(op, Op::Insert(_)) {
                    table.insert(&ident, id)
                } else {
                    table.declare(&ident, id)
                };
                let found = table.lookup(&ident.name).expect("inserted name must be found");
                assert_eq!(found.id, entry);
                assert_eq!(found.module, id);
            }
            Op::Lookup(n) => {
                let before = table.reporter().len();
                let _ = table.lookup(&name(n));
                assert_eq!(table.reporter().len(), before);
            }
            Op::Resolve(n) => {
                let found = table.lookup(&name(n)).map(|e| e.module);
                assert_eq!(table.resolve(&Ident::new(name(n), Span::default())), found);
            }
            Op::PushScope => table.push_scope(),
            Op::PopScope => table.pop_scope(),
        }
        assert_eq!(table.scope_entries().count(), table.len());
        assert_eq!(table.is_empty(), table.len() == 0);
    }
});
