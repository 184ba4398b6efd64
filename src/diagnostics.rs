//! Structured diagnostics with annotated source excerpts.
//!
//! The lexer and parser report through the [`DiagnosticSink`] capability,
//! so drivers choose between console output and structured capture. A
//! fatal condition is additionally propagated to the caller as a
//! [`ReadError`](crate::error::ReadError) immediately after its last
//! `put_*` call; the sink only observes failures, it does not control
//! unwinding.

use crate::error::formatting::highlight_columns;
use crate::reader::Span;
use std::fmt;

/// Severity level of a diagnostic
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    Warning,
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Warning => write!(f, "warning"),
            Severity::Error => write!(f, "error"),
        }
    }
}

/// One annotated source region within a diagnostic.
#[derive(Debug, Clone)]
pub struct Excerpt {
    pub span: Span,
    pub label: Option<String>,
}

/// A reader diagnostic: a message plus one or more annotated excerpts
/// and optional free-form notes.
#[derive(Debug, Clone)]
pub struct Diagnostic {
    pub severity: Severity,
    pub message: String,
    pub excerpts: Vec<Excerpt>,
    pub notes: Vec<String>,
}

impl Diagnostic {
    fn new(severity: Severity, span: &Span, message: &str) -> Self {
        Diagnostic {
            severity,
            message: message.to_string(),
            excerpts: vec![Excerpt {
                span: span.clone(),
                label: None,
            }],
            notes: Vec::new(),
        }
    }

    /// Format with source context: a `-->` header per excerpt, the
    /// offending line, and a caret marking the annotated columns.
    pub fn render(&self) -> String {
        let mut out = format!("{}: {}\n", self.severity, self.message);
        for excerpt in &self.excerpts {
            out.push_str(&render_excerpt(excerpt));
        }
        for note in &self.notes {
            out.push_str(&format!("  = note: {}\n", note));
        }
        out
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.render())
    }
}

fn render_excerpt(excerpt: &Excerpt) -> String {
    let span = &excerpt.span;
    let mut out = format!("  --> {}", span);
    if let Some(label) = &excerpt.label {
        out.push_str(&format!(": {}", label));
    }
    out.push('\n');
    if let Some(line) = span.source.line(span.start.line) {
        let number = span.start.line.to_string();
        let padding = " ".repeat(number.len());
        let finish = if span.finish.line == span.start.line {
            span.finish.column
        } else {
            span.start.column
        };
        out.push_str(&format!(" {} | {}\n", number, line));
        out.push_str(&format!(
            " {} | {}\n",
            padding,
            highlight_columns(line, span.start.column, finish)
        ));
    }
    out
}

/// The output channel both reader passes report through.
///
/// `put_error` and `put_warning` each begin a new diagnostic; the other
/// two operations attach detail to the diagnostic most recently begun.
pub trait DiagnosticSink {
    /// Begin a fatal diagnostic annotating `span`.
    fn put_error(&mut self, span: &Span, message: &str);

    /// Begin an advisory diagnostic annotating `span`.
    fn put_warning(&mut self, span: &Span, message: &str);

    /// Attach additional labeled excerpts to the current diagnostic.
    fn put_lines(&mut self, excerpts: &[(&Span, &str)]);

    /// Attach free-form note lines to the current diagnostic.
    fn put_explain(&mut self, lines: &[&str]);
}

/// Renders diagnostics to stderr as they arrive.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleSink;

impl DiagnosticSink for ConsoleSink {
    fn put_error(&mut self, span: &Span, message: &str) {
        eprint!("{}", Diagnostic::new(Severity::Error, span, message).render());
    }

    fn put_warning(&mut self, span: &Span, message: &str) {
        eprint!("{}", Diagnostic::new(Severity::Warning, span, message).render());
    }

    fn put_lines(&mut self, excerpts: &[(&Span, &str)]) {
        for (span, label) in excerpts {
            eprint!(
                "{}",
                render_excerpt(&Excerpt {
                    span: (*span).clone(),
                    label: Some((*label).to_string()),
                })
            );
        }
    }

    fn put_explain(&mut self, lines: &[&str]) {
        for line in lines {
            eprintln!("  = note: {}", line);
        }
    }
}

/// Captures diagnostics instead of printing them, for tests and tools
/// that post-process reader output.
#[derive(Debug, Default)]
pub struct RecordingSink {
    diagnostics: Vec<Diagnostic>,
}

impl RecordingSink {
    pub fn new() -> Self {
        RecordingSink::default()
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    pub fn warnings(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics
            .iter()
            .filter(|d| d.severity == Severity::Warning)
    }

    pub fn errors(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics
            .iter()
            .filter(|d| d.severity == Severity::Error)
    }
}

impl DiagnosticSink for RecordingSink {
    fn put_error(&mut self, span: &Span, message: &str) {
        self.diagnostics
            .push(Diagnostic::new(Severity::Error, span, message));
    }

    fn put_warning(&mut self, span: &Span, message: &str) {
        self.diagnostics
            .push(Diagnostic::new(Severity::Warning, span, message));
    }

    fn put_lines(&mut self, excerpts: &[(&Span, &str)]) {
        if let Some(current) = self.diagnostics.last_mut() {
            for (span, label) in excerpts {
                current.excerpts.push(Excerpt {
                    span: (*span).clone(),
                    label: Some((*label).to_string()),
                });
            }
        }
    }

    fn put_explain(&mut self, lines: &[&str]) {
        if let Some(current) = self.diagnostics.last_mut() {
            current.notes.extend(lines.iter().map(|s| s.to_string()));
        }
    }
}
