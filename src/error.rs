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

//! Error types for the module scope table.
//!
//! The table itself never fails. Everything in here describes the semantic
//! errors its callers detect and hand to a [`Reporter`](crate::report::Reporter).

use std::ops::Range;
use thiserror::Error;

/// A source span representing a range in the source code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Span {
    /// Start byte offset (inclusive)
    pub start: usize,
    /// End byte offset (exclusive)
    pub end: usize,
}

impl Span {
    /// Create a new span.
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Get the length of this span.
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Check if the span is empty.
    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }

    /// Merge two spans into one that covers both.
    pub fn merge(&self, other: &Span) -> Span {
        Span {
            start: self.start.min(other.start),
            end: self.end.max(other.end),
        }
    }
}

impl From<Range<usize>> for Span {
    fn from(range: Range<usize>) -> Self {
        Self::new(range.start, range.end)
    }
}

impl From<Span> for Range<usize> {
    fn from(span: Span) -> Self {
        span.start..span.end
    }
}

/// Semantic error codes raised around the module table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    /// A module name was referenced but never declared.
    UndeclaredModule,
    /// A module name was declared twice in the same scope.
    ModuleRedeclared,
    /// The same alias appears twice in one import list.
    DuplicateImport,
    /// A module lists itself in its own import list.
    SelfImport,
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl ErrorCode {
    /// Get the numeric code for this error.
    pub fn code(&self) -> &'static str {
        match self {
            ErrorCode::UndeclaredModule => "E200",
            ErrorCode::ModuleRedeclared => "E201",
            ErrorCode::DuplicateImport => "E202",
            ErrorCode::SelfImport => "E203",
        }
    }
}

/// A semantic error with source location.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("[{code}] {message}")]
pub struct CompileError {
    /// The error code.
    pub code: ErrorCode,
    /// The error message.
    pub message: String,
    /// The source span where the error occurred.
    pub span: Span,
    /// Optional hint for fixing the error.
    pub hint: Option<String>,
}

impl CompileError {
    /// Create a new compile error.
    pub fn new(code: ErrorCode, message: impl Into<String>, span: Span) -> Self {
        Self {
            code,
            message: message.into(),
            span,
            hint: None,
        }
    }

    /// Add a hint to this error.
    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }

    /// Get the error code string.
    pub fn code_str(&self) -> &'static str {
        self.code.code()
    }
}

/// Source location with line and column information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceLocation {
    /// Line number (1-indexed).
    pub line: usize,
    /// Column number (1-indexed).
    pub column: usize,
    /// The content of the line.
    pub line_content: String,
}

impl SourceLocation {
    /// Calculate line and column from a byte offset in source code.
    pub fn from_offset(source: &str, offset: usize) -> Self {
        let mut offset = offset.min(source.len());
        while !source.is_char_boundary(offset) {
            offset -= 1;
        }
        let before = &source[..offset];

        let line = before.chars().filter(|&c| c == '\n').count() + 1;

        let line_start = before.rfind('\n').map(|i| i + 1).unwrap_or(0);
        let column = before[line_start..].chars().count() + 1;

        let line_end = source[offset..]
            .find('\n')
            .map(|i| offset + i)
            .unwrap_or(source.len());
        let line_content = source[line_start..line_end].to_string();

        Self {
            line,
            column,
            line_content,
        }
    }
}

/// Format an error with source context.
pub fn format_error(error: &CompileError, source: &str, filename: Option<&str>) -> String {
    let loc = SourceLocation::from_offset(source, error.span.start);
    let filename = filename.unwrap_or("<input>");

    let mut output = String::new();

    output.push_str(&format!("error[{}]: {}\n", error.code_str(), error.message));
    output.push_str(&format!("  --> {}:{}:{}\n", filename, loc.line, loc.column));

    let line_num_width = loc.line.to_string().len();
    output.push_str(&format!("{:>width$} |\n", "", width = line_num_width));
    output.push_str(&format!(
        "{:>width$} | {}\n",
        loc.line,
        loc.line_content,
        width = line_num_width
    ));

    // Columns count chars, so the underline does too. Never underline past
    // the end of the line.
    let underline_start = loc.column - 1;
    let span_end = error.span.end.min(source.len());
    let span_chars = source
        .get(error.span.start.min(span_end)..span_end)
        .map(|text| text.chars().count())
        .unwrap_or_else(|| error.span.len());
    let underline_len = span_chars
        .max(1)
        .min(loc.line_content.chars().count().saturating_sub(underline_start))
        .max(1);
    output.push_str(&format!(
        "{:>width$} | {:>start$}{}\n",
        "",
        "",
        "^".repeat(underline_len),
        width = line_num_width,
        start = underline_start
    ));

    if let Some(hint) = &error.hint {
        output.push_str(&format!(
            "{:>width$} = hint: {}\n",
            "",
            hint,
            width = line_num_width
        ));
    }

    output
}

/// A collection of compile errors.
#[derive(Debug, Default)]
pub struct Errors {
    errors: Vec<CompileError>,
}

impl Errors {
    /// Create a new empty error collection.
    pub fn new() -> Self {
        Self { errors: Vec::new() }
    }

    /// Add an error to the collection.
    pub fn push(&mut self, error: CompileError) {
        self.errors.push(error);
    }

    /// Check if there are any errors.
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Get the number of errors.
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Check if the collection is empty.
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Get an iterator over the errors.
    pub fn iter(&self) -> impl Iterator<Item = &CompileError> {
        self.errors.iter()
    }

    /// Convert into a vector of errors.
    pub fn into_vec(self) -> Vec<CompileError> {
        self.errors
    }
}

impl IntoIterator for Errors {
    type Item = CompileError;
    type IntoIter = std::vec::IntoIter<CompileError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.into_iter()
    }
}
