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

//! Entries of the module table.
//!
//! Every successful insertion creates exactly one [`Entry`]. Entries live in
//! the table's arena and point at the previously declared entry of the same
//! scope, which makes each scope a singly linked chain, newest first.

use crate::ast::ModuleId;
use crate::error::Span;

/// Handle to an [`Entry`] in a [`ModuleTable`](super::ModuleTable).
///
/// A handle stays valid until the scope it was created in is popped. Arena
/// slots are reused after that, so every handle also carries the serial
/// number of its insertion and a stale handle never matches a newer entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntryId {
    pub(super) index: usize,
    pub(super) serial: u64,
}

impl EntryId {
    /// The position of the entry in the table's arena.
    pub fn index(self) -> usize {
        self.index
    }
}

/// A declared name bound to a module declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    /// Handle of this entry.
    pub id: EntryId,
    /// The name the module is visible under.
    pub name: String,
    /// The span of the declaring identifier.
    pub span: Span,
    /// The declaration, owned by the AST.
    pub module: ModuleId,
    pub(super) next: Option<EntryId>,
}

impl Entry {
    /// The entry declared just before this one in the same scope.
    pub fn next(&self) -> Option<EntryId> {
        self.next
    }
}
