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

//! Oberon-Scope Library
//!
//! The module table used by the semantic analysis of an Oberon-2 compiler
//! front end: it records declared module names, binds each to its parsed
//! declaration and resolves module references back to their declaration.
//!
//! # Modules
//!
//! - [`error`] - Error types and error formatting
//! - [`report`] - Error reporters
//! - [`ast`] - Module declarations produced by the parser
//! - [`table`] - The scope-chained module table
//! - [`analyzer`] - Import resolution for a compilation unit
//!
//! # Example
//!
//! ```
//! use oberon_scope::ast::{Ast, Ident, Import, ModuleDecl};
//! use oberon_scope::{analyze, Span};
//!
//! let mut ast = Ast::new();
//! let out = ast.add_module(ModuleDecl::new(
//!     Ident::new("Out", Span::new(7, 10)),
//!     Span::new(0, 20),
//! ));
//! ast.add_module(
//!     ModuleDecl::new(Ident::new("Main", Span::new(28, 32)), Span::new(21, 60))
//!         .with_import(Import::new(Ident::new("Out", Span::new(41, 44)))),
//! );
//!
//! let imports = analyze(&ast).expect("all imports resolve");
//! assert_eq!(imports[0].target, out);
//! ```

pub mod analyzer;
pub mod ast;
pub mod error;
pub mod report;
pub mod table;

// Re-export commonly used types
pub use analyzer::{analyze, AnalysisConfig, Analyzer, ResolvedImport};
pub use ast::{Ast, ModuleId};
pub use error::{format_error, CompileError, ErrorCode, Errors, SourceLocation, Span};
pub use report::{ConsoleReporter, Reporter};
pub use table::{Entry, EntryId, ModuleTable};

/// The version of the library.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// The name of the library.
pub const NAME: &str = "Oberon-Scope";
