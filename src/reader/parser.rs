//! Fold the token stream into the node tree.
//!
//! The parser is a state machine over a current head list and a stack of
//! suspended heads. Bracket matching is by species, reader-macro lists
//! close themselves after exactly one datum, and uneven sibling
//! indentation earns an advisory warning. The first structural failure
//! aborts: no partial tree is returned.

use super::node::{Atom, AtomKind, List, Node};
use super::span::{Position, Span};
use super::token::{Token, TokenKind};
use crate::diagnostics::DiagnosticSink;
use crate::error::{ReadError, ReadResult};
use smallvec::SmallVec;
use std::sync::Arc;

/// An in-progress list. Frames carry the parser-only state (the opener
/// token, the required closer, the auto-close flag); none of it reaches
/// the finished tree.
struct Frame {
    opener: Option<Token>,
    open: Option<char>,
    expects: Option<char>,
    auto_close: bool,
    span: Span,
    items: Vec<Node>,
}

impl Frame {
    fn root(span: Span) -> Self {
        Frame {
            opener: None,
            open: None,
            expects: None,
            auto_close: false,
            span,
            items: Vec::new(),
        }
    }

    fn bracket(token: Token, expects: char) -> Self {
        Frame {
            open: token.contents.chars().next(),
            expects: Some(expects),
            auto_close: false,
            span: token.span.clone(),
            items: Vec::new(),
            opener: Some(token),
        }
    }

    fn reader_macro(token: Token, tag: &str) -> Self {
        let seed = Node::Atom(Atom {
            kind: AtomKind::Symbol,
            contents: tag.to_string(),
            span: token.span.clone(),
        });
        Frame {
            open: None,
            expects: None,
            auto_close: true,
            span: token.span.clone(),
            items: vec![seed],
            opener: Some(token),
        }
    }

    /// Finalize into a list, dropping the transients.
    fn finish(mut self, finish: Position) -> List {
        self.span.finish = finish;
        List {
            open: self.open,
            close: self.expects,
            items: self.items,
            span: self.span,
        }
    }
}

struct Parser {
    head: Frame,
    stack: SmallVec<[Frame; 8]>,
}

impl Parser {
    fn new(root: Frame) -> Self {
        Parser {
            head: root,
            stack: SmallVec::new(),
        }
    }

    fn push(&mut self, frame: Frame) {
        let suspended = std::mem::replace(&mut self.head, frame);
        self.stack.push(suspended);
    }

    /// Finalize the head into its parent's children. A no-op at the
    /// root, which only `run` itself finalizes.
    fn pop(&mut self, finish: Position) {
        if let Some(parent) = self.stack.pop() {
            let frame = std::mem::replace(&mut self.head, parent);
            let list = frame.finish(finish);
            self.head.items.push(Node::List(list));
        }
    }

    /// While the head is a reader-macro list that just received its one
    /// datum, close it. Stacked macros (`''x`) unwind in sequence; the
    /// root never carries the flag, which bounds the loop.
    fn unwind(&mut self, finish: Position) {
        while self.head.auto_close && !self.stack.is_empty() {
            self.pop(finish);
        }
    }

    /// Warn when a new open bracket does not line up with the previous
    /// sibling expression. Advisory only; a missing `)` is the usual
    /// culprit.
    fn indent_check(&self, token: &Token, sink: &mut dyn DiagnosticSink) {
        if let Some(prev) = self.head.items.iter().rev().find_map(Node::as_list) {
            let p = prev.span.start;
            let t = token.span.start;
            if p.line != t.line && p.column != t.column {
                sink.put_warning(
                    &token.span,
                    "Different indent compared with previous expressions.",
                );
                sink.put_explain(&["perhaps a ')' is missing before this expression"]);
            }
        }
    }

    fn close(&mut self, token: &Token, sink: &mut dyn DiagnosticSink) -> ReadResult<()> {
        let found = token.contents.chars().next().unwrap_or(')');
        let open = match token.kind {
            TokenKind::Close(open) => open,
            _ => found,
        };
        if self.head.auto_close {
            let message = format!("'{}' without matching '{}' inside quote", found, open);
            sink.put_error(&token.span, &message);
            if let Some(opener) = &self.head.opener {
                sink.put_lines(&[(&opener.span, "quote started here")]);
            }
            return Err(ReadError::close_inside_quote(found, token.span.start));
        }
        match self.head.expects {
            // the head is the root: nothing is open
            None => {
                let message = format!("'{}' without matching '{}'", found, open);
                sink.put_error(&token.span, &message);
                Err(ReadError::stray_close(found, token.span.start))
            }
            Some(expected) if expected != found => {
                let message = format!("Expected '{}', got '{}'", expected, found);
                sink.put_error(&token.span, &message);
                if let Some(opener) = &self.head.opener {
                    let label = format!("'{}' opened here", opener.contents);
                    sink.put_lines(&[(&opener.span, label.as_str())]);
                }
                Err(ReadError::delimiter_mismatch(expected, found, token.span.start))
            }
            Some(_) => {
                self.pop(token.span.finish);
                self.unwind(token.span.finish);
                Ok(())
            }
        }
    }

    /// End of file with lists still open. The message names the closer
    /// the innermost bracket wants; the annotation points at the
    /// outermost unclosed opener.
    fn unterminated(&self, token: &Token, sink: &mut dyn DiagnosticSink) -> ReadError {
        let expected = std::iter::once(&self.head)
            .chain(self.stack.iter().rev())
            .find_map(|frame| frame.expects)
            .unwrap_or(')');
        let outer = if self.stack.len() >= 2 {
            &self.stack[1]
        } else {
            &self.head
        };
        sink.put_error(&token.span, &format!("Expected '{}', got eof", expected));
        if let Some(opener) = &outer.opener {
            sink.put_lines(&[(&opener.span, "opened here")]);
        }
        ReadError::unterminated_list(expected, outer.span.start)
    }

    fn atom(&mut self, token: Token) {
        let kind = match token.kind {
            TokenKind::Str => AtomKind::Str,
            TokenKind::Key => AtomKind::Key,
            TokenKind::Number => AtomKind::Number,
            _ => AtomKind::Symbol,
        };
        let finish = token.span.finish;
        self.head.items.push(Node::Atom(Atom {
            kind,
            contents: token.contents,
            span: token.span,
        }));
        self.unwind(finish);
    }

    fn run(mut self, tokens: Vec<Token>, sink: &mut dyn DiagnosticSink) -> ReadResult<List> {
        for token in tokens {
            match token.kind {
                TokenKind::Symbol | TokenKind::Key | TokenKind::Str | TokenKind::Number => {
                    self.atom(token);
                }
                TokenKind::Open(expects) => {
                    self.indent_check(&token, sink);
                    self.push(Frame::bracket(token, expects));
                }
                TokenKind::Close(_) => self.close(&token, sink)?,
                // reader macros expect one more datum, so the unwind
                // loop does not run for the macro token itself
                TokenKind::Quote => self.push(Frame::reader_macro(token, "quote")),
                TokenKind::Quasiquote => self.push(Frame::reader_macro(token, "quasiquote")),
                TokenKind::Unquote => self.push(Frame::reader_macro(token, "unquote")),
                TokenKind::UnquoteSplice => {
                    self.push(Frame::reader_macro(token, "unquote-splice"));
                }
                TokenKind::Eof => {
                    if !self.stack.is_empty() {
                        return Err(self.unterminated(&token, sink));
                    }
                    return Ok(self.head.finish(token.span.finish));
                }
            }
        }
        Err(ReadError::generic("token stream ended without eof"))
    }
}

/// Parse a token list (as produced by [`lex`](super::lex)) into the root
/// list of top-level forms. The root has no brackets of its own.
pub fn parse(tokens: Vec<Token>, sink: &mut dyn DiagnosticSink) -> ReadResult<List> {
    let source = match tokens.first() {
        Some(token) => Arc::clone(&token.span.source),
        None => return Err(ReadError::generic("empty token stream")),
    };
    let root = Frame::root(Span::point(Position::start(), source));
    Parser::new(root).run(tokens, sink)
}
