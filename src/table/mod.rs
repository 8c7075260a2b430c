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

//! The module table.
//!
//! Maps module names to their declarations within nested lexical scopes.
//! Each scope is a chain of entries, most recent declaration first, so a
//! name declared twice is shadowed by its later declaration. Lookups fall
//! through to the enclosing scopes once the current scope has no match.
//!
//! The table never fails: [`ModuleTable::insert`] always succeeds and
//! [`ModuleTable::lookup`] simply returns `None` for unknown names. Turning a
//! miss into an error is the caller's decision, made through
//! [`ModuleTable::report_error`] or the [`ModuleTable::resolve`] and
//! [`ModuleTable::declare`] helpers.

mod entry;
mod scope;

pub use entry::{Entry, EntryId};
pub use scope::Entries;

use scope::Scope;

use crate::ast::{Ident, ModuleId};
use crate::error::{CompileError, ErrorCode, Span};
use crate::report::Reporter;

/// Scope-chained table of declared modules.
#[derive(Debug)]
pub struct ModuleTable<R> {
    /// Entries of all open scopes.
    entries: Vec<Entry>,
    /// The innermost scope.
    current: Scope,
    /// Enclosing scopes (outermost first).
    outer: Vec<Scope>,
    /// Number of insertions so far, including popped entries.
    inserted: u64,
    reporter: R,
}

impl<R: Reporter> ModuleTable<R> {
    /// Create an empty table reporting to `reporter`.
    pub fn new(reporter: R) -> Self {
        Self {
            entries: Vec::new(),
            current: Scope::new(0),
            outer: Vec::new(),
            inserted: 0,
            reporter,
        }
    }

    /// Declare `name` as referring to `module` in the current scope.
    ///
    /// Never rejects a name. A name that is already declared in this scope
    /// gets shadowed by the new entry.
    pub fn insert(&mut self, name: &Ident, module: ModuleId) -> EntryId {
        let id = EntryId {
            index: self.entries.len(),
            serial: self.inserted,
        };
        self.inserted += 1;
        self.entries.push(Entry {
            id,
            name: name.name.clone(),
            span: name.span,
            module,
            next: self.current.head,
        });
        self.current.head = Some(id);
        log::trace!(
            "declared '{}' as {:?} at depth {}",
            name.name,
            module,
            self.depth()
        );
        id
    }

    /// Like [`insert`](Self::insert), but reports a redeclaration first if
    /// `name` already exists in the current scope.
    pub fn declare(&mut self, name: &Ident, module: ModuleId) -> EntryId {
        if let Some(existing) = self.find_local(&name.name) {
            let error = CompileError::new(
                ErrorCode::ModuleRedeclared,
                format!("module '{}' is already declared", name.name),
                name.span,
            )
            .with_hint(format!("previously declared at position {}", existing.span.start));
            self.report(error);
        }
        self.insert(name, module)
    }

    /// Look up `name`, searching from the innermost to the outermost scope.
    pub fn lookup(&self, name: &str) -> Option<&Entry> {
        std::iter::once(&self.current)
            .chain(self.outer.iter().rev())
            .find_map(|scope| self.find_in(scope, name))
    }

    /// Look up `name` in the current scope only.
    ///
    /// This is the duplicate check for callers that want to reject
    /// redeclarations.
    pub fn find_local(&self, name: &str) -> Option<&Entry> {
        self.find_in(&self.current, name)
    }

    /// Look up a referenced module, reporting it as undeclared if missing.
    pub fn resolve(&mut self, name: &Ident) -> Option<ModuleId> {
        let found = self.lookup(&name.name).map(|entry| entry.module);
        if found.is_none() {
            self.report(CompileError::new(
                ErrorCode::UndeclaredModule,
                format!("undeclared module '{}'", name.name),
                name.span,
            ));
        }
        found
    }

    /// Forward an error to the reporter.
    pub fn report_error(&mut self, code: ErrorCode, message: impl Into<String>, span: Span) {
        self.report(CompileError::new(code, message, span));
    }

    /// Forward a fully built error to the reporter.
    pub fn report(&mut self, error: CompileError) {
        log::debug!("reporting {}", error);
        self.reporter.report(error);
    }

    /// Get an entry by handle.
    ///
    /// Returns `None` for handles of entries whose scope was popped.
    pub fn entry(&self, id: EntryId) -> Option<&Entry> {
        self.entries
            .get(id.index)
            .filter(|entry| entry.id.serial == id.serial)
    }

    /// Iterate over the current scope, most recent declaration first.
    pub fn scope_entries(&self) -> Entries<'_> {
        Entries::new(&self.entries, self.current.head)
    }

    /// Number of entries in the current scope.
    pub fn len(&self) -> usize {
        self.entries.len() - self.current.start
    }

    /// Check if nothing was declared in the current scope.
    pub fn is_empty(&self) -> bool {
        self.current.head.is_none()
    }

    /// Enter a nested scope.
    pub fn push_scope(&mut self) {
        let parent = std::mem::replace(&mut self.current, Scope::new(self.entries.len()));
        self.outer.push(parent);
        log::debug!("entered scope at depth {}", self.depth());
    }

    /// Leave the current scope, discarding its entries.
    ///
    /// The global scope is never popped.
    pub fn pop_scope(&mut self) {
        if let Some(parent) = self.outer.pop() {
            log::debug!(
                "leaving scope at depth {} with {} entries",
                self.depth() + 1,
                self.len()
            );
            self.entries.truncate(self.current.start);
            self.current = parent;
        }
    }

    /// Check if we're in the global scope.
    pub fn is_global_scope(&self) -> bool {
        self.outer.is_empty()
    }

    /// Get the current scope depth (the global scope has depth 1).
    pub fn depth(&self) -> usize {
        self.outer.len() + 1
    }

    /// The reporter errors are forwarded to.
    pub fn reporter(&self) -> &R {
        &self.reporter
    }

    /// Mutable access to the reporter, e.g. to drain collected errors.
    pub fn reporter_mut(&mut self) -> &mut R {
        &mut self.reporter
    }

    /// Discard the table and give back the reporter.
    pub fn into_reporter(self) -> R {
        self.reporter
    }

    fn find_in(&self, scope: &Scope, name: &str) -> Option<&Entry> {
        Entries::new(&self.entries, scope.head).find(|entry| entry.name == name)
    }
}
