//! Tokenize source text in a single forward scan.

use super::span::{Position, Span};
use super::token::{matching_close, matching_open, Token, TokenKind};
use crate::diagnostics::DiagnosticSink;
use crate::error::{ReadError, ReadResult};
use crate::source::SourceBuffer;
use std::sync::Arc;

/// Brackets end identifier-class lexemes; nothing else does short of
/// whitespace or end of input, so `foo:bar` and `a'b` read as single
/// symbols.
#[inline]
fn is_bracket(c: char) -> bool {
    matches!(c, '(' | ')' | '[' | ']' | '{' | '}')
}

#[inline]
fn is_reader_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n')
}

/// Characters that may continue a number lexeme once one has started.
/// Anything else ends the number; the following text starts a new token.
#[inline]
fn is_number_continuation(c: char) -> bool {
    matches!(c, '0'..='9' | '.' | 'e' | '+' | '-')
}

pub struct Lexer {
    source: Arc<SourceBuffer>,
    pos: usize,
    line: usize,
    column: usize,
}

impl Lexer {
    pub fn new(source: Arc<SourceBuffer>) -> Self {
        Lexer {
            source,
            pos: 0,
            line: 1,
            column: 1,
        }
    }

    fn here(&self) -> Position {
        Position::new(self.line, self.column, self.pos + 1)
    }

    fn current(&self) -> Option<char> {
        self.source.char_at(self.pos + 1)
    }

    fn peek(&self, offset: usize) -> Option<char> {
        self.source.char_at(self.pos + 1 + offset)
    }

    fn consume(&mut self) -> Option<char> {
        let c = self.current();
        if let Some(ch) = c {
            if ch == '\n' {
                self.line += 1;
                self.column = 1;
            } else {
                self.column += 1;
            }
            self.pos += ch.len_utf8();
        }
        c
    }

    fn span_from(&self, start: Position) -> Span {
        Span::new(start, self.here(), Arc::clone(&self.source))
    }

    /// Build a token whose contents are the exact source slice between
    /// `start` and the cursor.
    fn token_from(&self, kind: TokenKind, start: Position) -> Token {
        let span = self.span_from(start);
        let contents = self.source.slice(start.offset, span.finish.offset).to_string();
        Token {
            kind,
            contents,
            span,
        }
    }

    fn single(&mut self, kind: TokenKind, start: Position) -> Token {
        self.consume();
        self.token_from(kind, start)
    }

    /// A leading `#!` line is skipped like a comment so scripts keep
    /// exact positions for everything after the shebang.
    fn skip_shebang(&mut self) {
        if self.source.text().starts_with("#!") {
            while let Some(c) = self.consume() {
                if c == '\n' {
                    break;
                }
            }
        }
    }

    fn skip_comment(&mut self) {
        while let Some(c) = self.consume() {
            if c == '\n' {
                break;
            }
        }
    }

    fn string_literal(&mut self, start: Position, sink: &mut dyn DiagnosticSink) -> ReadResult<Token> {
        self.consume();
        let opener = self.span_from(start);
        loop {
            match self.current() {
                None => {
                    let eof = Span::point(self.here(), Arc::clone(&self.source));
                    sink.put_error(&self.span_from(start), "Unterminated string");
                    sink.put_lines(&[
                        (&opener, "string started here"),
                        (&eof, "end of file here"),
                    ]);
                    return Err(ReadError::unterminated_string(start));
                }
                Some('"') => {
                    self.consume();
                    return Ok(self.token_from(TokenKind::Str, start));
                }
                Some('\\') => {
                    // a backslash consumes the next character unconditionally;
                    // the raw escape stays in the lexeme
                    self.consume();
                    self.consume();
                }
                Some(_) => {
                    self.consume();
                }
            }
        }
    }

    fn number(&mut self, start: Position) -> Token {
        self.consume();
        while self.current().is_some_and(is_number_continuation) {
            self.consume();
        }
        self.token_from(TokenKind::Number, start)
    }

    fn identifier(&mut self, start: Position) -> Token {
        let first = self.consume();
        while let Some(c) = self.current() {
            if is_reader_whitespace(c) || is_bracket(c) {
                break;
            }
            self.consume();
        }
        let kind = if first == Some(':') {
            TokenKind::Key
        } else {
            TokenKind::Symbol
        };
        self.token_from(kind, start)
    }

    /// Scan the whole buffer. The returned list always ends with exactly
    /// one `Eof` token whose span sits just past the last character.
    pub fn tokenize(mut self, sink: &mut dyn DiagnosticSink) -> ReadResult<Vec<Token>> {
        let mut tokens = Vec::new();
        self.skip_shebang();
        while let Some(c) = self.current() {
            let start = self.here();
            match c {
                c if is_reader_whitespace(c) => {
                    self.consume();
                }
                '(' | '[' | '{' => {
                    let token = self.single(TokenKind::Open(matching_close(c)), start);
                    tokens.push(token);
                }
                ')' | ']' | '}' => {
                    let token = self.single(TokenKind::Close(matching_open(c)), start);
                    tokens.push(token);
                }
                '\'' => {
                    let token = self.single(TokenKind::Quote, start);
                    tokens.push(token);
                }
                '`' => {
                    let token = self.single(TokenKind::Quasiquote, start);
                    tokens.push(token);
                }
                ',' => {
                    self.consume();
                    let kind = if self.current() == Some('@') {
                        self.consume();
                        TokenKind::UnquoteSplice
                    } else {
                        TokenKind::Unquote
                    };
                    tokens.push(self.token_from(kind, start));
                }
                ';' => self.skip_comment(),
                '"' => tokens.push(self.string_literal(start, sink)?),
                c if c.is_ascii_digit() => tokens.push(self.number(start)),
                '-' if self.peek(1).is_some_and(|d| d.is_ascii_digit()) => {
                    tokens.push(self.number(start));
                }
                _ => tokens.push(self.identifier(start)),
            }
        }
        let end = self.here();
        tokens.push(Token {
            kind: TokenKind::Eof,
            contents: String::new(),
            span: Span::point(end, Arc::clone(&self.source)),
        });
        Ok(tokens)
    }
}

/// Scan `source` into tokens. Fails through the sink on an unterminated
/// string literal.
pub fn lex(source: &Arc<SourceBuffer>, sink: &mut dyn DiagnosticSink) -> ReadResult<Vec<Token>> {
    Lexer::new(Arc::clone(source)).tokenize(sink)
}
