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

//! Configuration of the import analysis.

/// Which optional checks the analyzer performs.
///
/// Undeclared and self imports are always reported; the checks below can be
/// switched off for front ends that accept shadowing declarations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisConfig {
    /// Report a module declared twice in one compilation unit.
    pub report_redeclarations: bool,
    /// Report an alias bound twice in one import list.
    pub report_duplicate_imports: bool,
}

impl AnalysisConfig {
    /// A configuration with every optional check disabled.
    pub fn permissive() -> Self {
        Self {
            report_redeclarations: false,
            report_duplicate_imports: false,
        }
    }
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            report_redeclarations: true,
            report_duplicate_imports: true,
        }
    }
}
