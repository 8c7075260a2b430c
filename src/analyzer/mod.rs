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

//! Import analysis for a compilation unit.
//!
//! Walks the modules of an [`Ast`] in source order:
//! - resolves every import against the modules declared so far
//! - binds each import under its local name in a scope of its own
//! - declares the module in the global scope
//!
//! Errors are reported and the walk continues, so one pass finds all of them.

mod config;

pub use config::AnalysisConfig;

use crate::ast::{Ast, ModuleDecl, ModuleId};
use crate::error::{CompileError, ErrorCode, Errors, Span};
use crate::report::Reporter;
use crate::table::ModuleTable;

/// An import resolved to its declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedImport {
    /// The importing module.
    pub importer: ModuleId,
    /// The name the target is visible under inside the importer.
    pub alias: String,
    /// The imported module.
    pub target: ModuleId,
    /// The span of the import element.
    pub span: Span,
}

/// The import analyzer.
pub struct Analyzer<R> {
    table: ModuleTable<R>,
    config: AnalysisConfig,
    imports: Vec<ResolvedImport>,
}

impl<R: Reporter> Analyzer<R> {
    /// Create an analyzer reporting to `reporter`.
    pub fn new(reporter: R, config: AnalysisConfig) -> Self {
        Self {
            table: ModuleTable::new(reporter),
            config,
            imports: Vec::new(),
        }
    }

    /// Analyze all modules of a compilation unit.
    pub fn analyze(&mut self, ast: &Ast) {
        for (id, module) in ast.iter() {
            self.analyze_module(id, module);
        }
    }

    /// The module table, holding every module declared so far.
    pub fn table(&self) -> &ModuleTable<R> {
        &self.table
    }

    /// Imports resolved so far, in source order.
    pub fn imports(&self) -> &[ResolvedImport] {
        &self.imports
    }

    /// Finish the analysis, returning the resolved imports and the reporter.
    pub fn finish(self) -> (Vec<ResolvedImport>, R) {
        (self.imports, self.table.into_reporter())
    }

    fn analyze_module(&mut self, id: ModuleId, module: &ModuleDecl) {
        log::debug!("analyzing module '{}'", module.name.name);

        // Targets are resolved before the module's own scope exists, so an
        // alias can never stand in for a module name.
        let targets: Vec<Option<ModuleId>> = module
            .imports
            .iter()
            .map(|import| {
                if import.module.name == module.name.name {
                    self.table.report(
                        CompileError::new(
                            ErrorCode::SelfImport,
                            format!("module '{}' imports itself", module.name.name),
                            import.module.span,
                        )
                        .with_hint("remove the module from its own import list"),
                    );
                    None
                } else {
                    self.table.resolve(&import.module)
                }
            })
            .collect();

        self.table.push_scope();
        for (import, target) in module.imports.iter().zip(targets) {
            let local = import.local_name();
            if self.config.report_duplicate_imports {
                if let Some(previous) = self.table.find_local(&local.name) {
                    let error = CompileError::new(
                        ErrorCode::DuplicateImport,
                        format!("'{}' is imported more than once", local.name),
                        local.span,
                    )
                    .with_hint(format!("first imported at position {}", previous.span.start));
                    self.table.report(error);
                    continue;
                }
            }

            // Unresolved imports still occupy their name so later duplicates
            // are detected, but they are not recorded as resolved. Such an
            // entry points at the importer itself as a placeholder. Nothing
            // reads it, and the pop_scope below discards it.
            self.table.insert(local, target.unwrap_or(id));
            if let Some(target) = target {
                self.imports.push(ResolvedImport {
                    importer: id,
                    alias: local.name.clone(),
                    target,
                    span: import.span,
                });
            }
        }
        self.table.pop_scope();

        if self.config.report_redeclarations {
            self.table.declare(&module.name, id);
        } else {
            self.table.insert(&module.name, id);
        }
    }
}

/// Analyze a compilation unit with the default configuration.
///
/// Returns the resolved imports, or every error found.
pub fn analyze(ast: &Ast) -> Result<Vec<ResolvedImport>, Vec<CompileError>> {
    let mut analyzer = Analyzer::new(Errors::new(), AnalysisConfig::default());
    analyzer.analyze(ast);

    let (imports, errors) = analyzer.finish();
    if errors.is_empty() {
        Ok(imports)
    } else {
        Err(errors.into_vec())
    }
}
