//! Source-shaped rendering of nodes.
//!
//! Atoms print their verbatim lexeme, bracket lists print with the
//! brackets they were written with, and reader-macro lists print with
//! their sigil. This is a debugging surface, not a canonicalizer.

use super::node::{List, Node};
use std::fmt;

fn sigil(tag: &str) -> &'static str {
    match tag {
        "quasiquote" => "`",
        "unquote" => ",",
        "unquote-splice" => ",@",
        _ => "'",
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Node::Atom(atom) => write!(f, "{}", atom.contents),
            Node::List(list) => write!(f, "{}", list),
        }
    }
}

impl fmt::Display for List {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(tag) = self.reader_macro_tag() {
            return write!(f, "{}{}", sigil(tag), self.items[1]);
        }
        if let Some(open) = self.open {
            write!(f, "{}", open)?;
        }
        for (i, item) in self.items.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", item)?;
        }
        if let Some(close) = self.close {
            write!(f, "{}", close)?;
        }
        Ok(())
    }
}
