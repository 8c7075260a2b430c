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

//! Error reporters.
//!
//! A [`Reporter`] receives every semantic error the front end detects.
//! Reporting never stops the analysis; it is up to the owner of the reporter
//! to decide what to do once the pass is over.
//!
//! - [`Errors`] collects errors for later inspection.
//! - [`ConsoleReporter`] renders each error as soon as it arrives.

use std::io::Write;

use ariadne::{Config, IndexType, Label, Report, ReportKind, Source};

use crate::error::{CompileError, Errors};

/// Receiver of semantic errors.
pub trait Reporter {
    /// Report one error.
    fn report(&mut self, error: CompileError);

    /// Number of errors reported so far.
    fn error_count(&self) -> usize;

    /// Check if any error was reported.
    fn has_errors(&self) -> bool {
        self.error_count() > 0
    }
}

impl Reporter for Errors {
    fn report(&mut self, error: CompileError) {
        self.push(error);
    }

    fn error_count(&self) -> usize {
        self.len()
    }
}

impl<R: Reporter + ?Sized> Reporter for &mut R {
    fn report(&mut self, error: CompileError) {
        (**self).report(error);
    }

    fn error_count(&self) -> usize {
        (**self).error_count()
    }
}

/// Renders errors against the source text as they are reported.
pub struct ConsoleReporter<W: Write> {
    out: W,
    source: String,
    color: bool,
    count: usize,
}

impl ConsoleReporter<std::io::Stderr> {
    /// Create a reporter writing to stderr.
    pub fn stderr(source: impl Into<String>) -> Self {
        Self::new(std::io::stderr(), source).with_color(true)
    }
}

impl<W: Write> ConsoleReporter<W> {
    /// Create a reporter writing uncoloured output to `out`.
    pub fn new(out: W, source: impl Into<String>) -> Self {
        Self {
            out,
            source: source.into(),
            color: false,
            count: 0,
        }
    }

    /// Enable or disable ANSI colours.
    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    /// Give back the underlying writer.
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Reporter for ConsoleReporter<W> {
    fn report(&mut self, error: CompileError) {
        self.count += 1;

        // Spans are byte offsets
        let end = error.span.end.min(self.source.len());
        let start = error.span.start.min(end);
        let config = Config::default()
            .with_color(self.color)
            .with_index_type(IndexType::Byte);

        let mut builder = Report::build(ReportKind::Error, (), start)
            .with_config(config)
            .with_code(error.code_str())
            .with_message(&error.message)
            .with_label(Label::new(start..end).with_message(&error.message));
        if let Some(hint) = &error.hint {
            builder = builder.with_help(hint);
        }

        let written = builder
            .finish()
            .write(Source::from(self.source.as_str()), &mut self.out);
        if let Err(err) = written {
            log::warn!("failed to render error {}: {}", error.code_str(), err);
        }
    }

    fn error_count(&self) -> usize {
        self.count
    }
}
