//! Source position tracking

use crate::source::SourceBuffer;
use std::fmt;
use std::sync::Arc;

/// A point in source text. `line` and `column` are 1-based; `offset` is a
/// 1-based byte index into the buffer, always on a character boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    pub line: usize,
    pub column: usize,
    pub offset: usize,
}

impl Position {
    pub fn new(line: usize, column: usize, offset: usize) -> Self {
        Position {
            line,
            column,
            offset,
        }
    }

    /// The beginning of a buffer.
    pub fn start() -> Self {
        Position {
            line: 1,
            column: 1,
            offset: 1,
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// A half-open region of a source buffer: `finish` points just past the
/// last character. Spans are cheap to clone; the buffer handle is shared,
/// not copied, so diagnostics can print surrounding lines long after the
/// lexer is gone.
#[derive(Debug, Clone)]
pub struct Span {
    pub start: Position,
    pub finish: Position,
    pub source: Arc<SourceBuffer>,
}

impl Span {
    pub fn new(start: Position, finish: Position, source: Arc<SourceBuffer>) -> Self {
        Span {
            start,
            finish,
            source,
        }
    }

    /// An empty span at a single position (used for end-of-file).
    pub fn point(at: Position, source: Arc<SourceBuffer>) -> Self {
        Span {
            start: at,
            finish: at,
            source,
        }
    }

    /// The exact source text this span covers.
    pub fn text(&self) -> &str {
        self.source.slice(self.start.offset, self.finish.offset)
    }

    pub fn name(&self) -> &str {
        self.source.name()
    }

    pub fn is_empty(&self) -> bool {
        self.start.offset == self.finish.offset
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.name(), self.start)
    }
}
