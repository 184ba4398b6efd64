//! # Larch front-end reader
//!
//! The reader for the Larch language: it turns raw source text into a
//! position-annotated tree of forms, ready for macro expansion and code
//! generation further down the pipeline.
//!
//! ## Quick Start
//!
//! ```
//! use larch::{read_source, ConsoleSink};
//!
//! let mut sink = ConsoleSink;
//! let root = read_source("(defun twice (x) (* x 2))", "demo.lr", &mut sink).unwrap();
//! assert_eq!(root.items.len(), 1);
//! ```
//!
//! ## Architecture
//!
//! Reading happens in two passes over a shared [`SourceBuffer`]:
//!
//! 1. **Lexer** - a single forward scan into tokens, each carrying its
//!    exact source substring and span
//! 2. **Parser** - a stack-driven fold into atoms and lists, with
//!    bracket matching by species and reader-macro auto-close
//!
//! Both passes report through a pluggable [`DiagnosticSink`]; fatal
//! conditions surface as [`ReadError`] and abort at the first failure.

pub mod diagnostics;
pub mod error;
pub mod reader;
pub mod source;

pub use diagnostics::{ConsoleSink, Diagnostic, DiagnosticSink, Excerpt, RecordingSink, Severity};
pub use error::{ErrorKind, ReadError, ReadResult};
pub use reader::{
    lex, parse, read_source, Atom, AtomKind, List, Node, Position, Span, Token, TokenKind,
};
pub use source::SourceBuffer;
