//! The reader's output tree: atoms and lists.
//!
//! Nodes are built only by the parser and never mutate afterwards. Lists
//! own their children exclusively; there are no parent pointers, so the
//! tree drops cleanly with its root. Downstream passes traverse read-only.

use super::span::Span;

/// Leaf classification, mirroring the token that produced the atom.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AtomKind {
    Symbol,
    Key,
    Str,
    Number,
}

/// A leaf node. `contents` is the verbatim source lexeme: string atoms
/// keep their quotes and raw escapes, number atoms keep their literal
/// text uninterpreted.
#[derive(Debug, Clone)]
pub struct Atom {
    pub kind: AtomKind,
    pub contents: String,
    pub span: Span,
}

/// An ordered sequence of child nodes. `open`/`close` record the bracket
/// characters actually used in source; both are `None` for the root and
/// for reader-macro lists, which have no brackets of their own.
#[derive(Debug, Clone)]
pub struct List {
    pub open: Option<char>,
    pub close: Option<char>,
    pub items: Vec<Node>,
    pub span: Span,
}

impl List {
    /// The tag of a reader-macro list (`quote`, `quasiquote`, `unquote`,
    /// `unquote-splice`), if this list has that shape.
    pub fn reader_macro_tag(&self) -> Option<&str> {
        if self.open.is_some() || self.items.len() != 2 {
            return None;
        }
        match self.items[0].as_symbol() {
            Some(tag @ ("quote" | "quasiquote" | "unquote" | "unquote-splice")) => Some(tag),
            _ => None,
        }
    }
}

#[derive(Debug, Clone)]
pub enum Node {
    Atom(Atom),
    List(List),
}

impl Node {
    pub fn span(&self) -> &Span {
        match self {
            Node::Atom(atom) => &atom.span,
            Node::List(list) => &list.span,
        }
    }

    pub fn as_atom(&self) -> Option<&Atom> {
        match self {
            Node::Atom(atom) => Some(atom),
            Node::List(_) => None,
        }
    }

    pub fn as_list(&self) -> Option<&List> {
        match self {
            Node::List(list) => Some(list),
            Node::Atom(_) => None,
        }
    }

    /// Symbol contents, if this is a symbol atom.
    pub fn as_symbol(&self) -> Option<&str> {
        match self {
            Node::Atom(atom) if atom.kind == AtomKind::Symbol => Some(&atom.contents),
            _ => None,
        }
    }

    /// Check if this is a symbol with the given name.
    pub fn is_symbol(&self, name: &str) -> bool {
        self.as_symbol() == Some(name)
    }
}
