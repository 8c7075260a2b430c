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

//! Scope frames of the module table.

use super::entry::{Entry, EntryId};

/// One lexical scope.
///
/// Scopes are strictly nested, so the entries of a scope always occupy the
/// tail of the arena starting at `start`.
#[derive(Debug, Clone, Copy)]
pub(super) struct Scope {
    /// The most recently declared entry, `None` while the scope is empty.
    pub head: Option<EntryId>,
    /// Arena length when the scope was entered.
    pub start: usize,
}

impl Scope {
    pub fn new(start: usize) -> Self {
        Self { head: None, start }
    }
}

/// Iterator over a scope chain, newest entry first.
#[derive(Debug, Clone)]
pub struct Entries<'a> {
    arena: &'a [Entry],
    cursor: Option<EntryId>,
}

impl<'a> Entries<'a> {
    pub(super) fn new(arena: &'a [Entry], head: Option<EntryId>) -> Self {
        Self {
            arena,
            cursor: head,
        }
    }
}

impl<'a> Iterator for Entries<'a> {
    type Item = &'a Entry;

    fn next(&mut self) -> Option<Self::Item> {
        let entry = self.arena.get(self.cursor?.index)?;
        self.cursor = entry.next;
        Some(entry)
    }
}
