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

//! Module declarations as handed over by the parser.
//!
//! Only the parts of an Oberon-2 module header the module table cares about
//! are modelled here: the module name and its `IMPORT` list. The [`Ast`] owns
//! every [`ModuleDecl`]; everybody else refers to one through a [`ModuleId`].

use crate::error::Span;

/// Handle to a [`ModuleDecl`] stored in an [`Ast`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ModuleId(usize);

impl ModuleId {
    /// The position of the module in its [`Ast`].
    pub fn index(self) -> usize {
        self.0
    }
}

/// An identifier together with where it was written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ident {
    /// The identifier text.
    pub name: String,
    /// The span of the identifier.
    pub span: Span,
}

impl Ident {
    /// Create a new identifier.
    pub fn new(name: impl Into<String>, span: Span) -> Self {
        Self {
            name: name.into(),
            span,
        }
    }
}

/// One element of an `IMPORT` list, e.g. `Out` or `F := Files`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Import {
    /// The local alias, if any.
    pub alias: Option<Ident>,
    /// The imported module.
    pub module: Ident,
    /// The span of the whole import element.
    pub span: Span,
}

impl Import {
    /// Create an import without alias.
    pub fn new(module: Ident) -> Self {
        let span = module.span;
        Self {
            alias: None,
            module,
            span,
        }
    }

    /// Create an aliased import (`alias := module`).
    pub fn aliased(alias: Ident, module: Ident) -> Self {
        let span = alias.span.merge(&module.span);
        Self {
            alias: Some(alias),
            module,
            span,
        }
    }

    /// The name the imported module is visible under inside the importer.
    pub fn local_name(&self) -> &Ident {
        self.alias.as_ref().unwrap_or(&self.module)
    }
}

/// A parsed module declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleDecl {
    /// The module name.
    pub name: Ident,
    /// The import list, in source order.
    pub imports: Vec<Import>,
    /// The span of the whole declaration.
    pub span: Span,
}

impl ModuleDecl {
    /// Create a module declaration without imports.
    pub fn new(name: Ident, span: Span) -> Self {
        Self {
            name,
            imports: Vec::new(),
            span,
        }
    }

    /// Append an import to the import list.
    pub fn with_import(mut self, import: Import) -> Self {
        self.imports.push(import);
        self
    }
}

/// All module declarations of one compilation unit.
#[derive(Debug, Clone, Default)]
pub struct Ast {
    modules: Vec<ModuleDecl>,
}

impl Ast {
    /// Create an empty AST.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a module declaration and return its handle.
    pub fn add_module(&mut self, module: ModuleDecl) -> ModuleId {
        let id = ModuleId(self.modules.len());
        self.modules.push(module);
        id
    }

    /// Get a module declaration by handle.
    pub fn module(&self, id: ModuleId) -> Option<&ModuleDecl> {
        self.modules.get(id.0)
    }

    /// Iterate over all modules in source order.
    pub fn iter(&self) -> impl Iterator<Item = (ModuleId, &ModuleDecl)> {
        self.modules
            .iter()
            .enumerate()
            .map(|(index, module)| (ModuleId(index), module))
    }

    /// Number of modules in the unit.
    pub fn len(&self) -> usize {
        self.modules.len()
    }

    /// Check if the unit declares no modules.
    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }
}
