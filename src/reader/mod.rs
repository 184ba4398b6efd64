//! The front-end reader: lexing and parsing.
//!
//! The reader turns source text into a position-annotated tree of forms:
//!
//! ```text
//! Source → Lexer → Token → Parser → Node tree
//! ```
//!
//! It resolves bracket matching and quote-family shorthand, and nothing
//! more: no evaluation, no macro expansion, no literal interpretation.
//! Number and string atoms keep their verbatim lexemes. Both passes
//! report through a [`DiagnosticSink`] and abort on the first fatal
//! condition.

mod display;
mod lexer;
mod node;
mod parser;
mod span;
mod token;

// Re-export public API
pub use lexer::{lex, Lexer};
pub use node::{Atom, AtomKind, List, Node};
pub use parser::parse;
pub use span::{Position, Span};
pub use token::{matching_close, matching_open, Token, TokenKind};

use crate::diagnostics::DiagnosticSink;
use crate::error::ReadResult;
use crate::source::SourceBuffer;
use std::sync::Arc;

/// Read a whole source text: build the buffer, lex, parse. The returned
/// root list owns the top-level forms.
pub fn read_source(text: &str, name: &str, sink: &mut dyn DiagnosticSink) -> ReadResult<List> {
    let source = Arc::new(SourceBuffer::new(text, name));
    let tokens = lex(&source, sink)?;
    parse(tokens, sink)
}
