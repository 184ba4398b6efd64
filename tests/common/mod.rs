//! Shared helpers for the reader test suite.
//!
//! Provides canonical read functions and a span-insensitive structural
//! equality so test files don't copy-paste their own variants.

use larch::{read_source, List, Node, ReadError, RecordingSink};

/// Read source through the full pipeline, discarding diagnostics.
pub fn read(input: &str) -> Result<List, ReadError> {
    let mut sink = RecordingSink::new();
    read_source(input, "<test>", &mut sink)
}

/// Read source, returning the result and everything the sink captured.
pub fn read_with_diagnostics(input: &str) -> (Result<List, ReadError>, RecordingSink) {
    let mut sink = RecordingSink::new();
    let result = read_source(input, "<test>", &mut sink);
    (result, sink)
}

/// Read source expecting failure; returns the rendered error message.
pub fn read_err(input: &str) -> String {
    read(input).expect_err("expected a reader failure").to_string()
}

/// Structural equality ignoring spans.
pub fn node_eq(a: &Node, b: &Node) -> bool {
    match (a, b) {
        (Node::Atom(x), Node::Atom(y)) => x.kind == y.kind && x.contents == y.contents,
        (Node::List(x), Node::List(y)) => list_eq(x, y),
        _ => false,
    }
}

/// Structural equality for lists: brackets, arity, and children.
pub fn list_eq(a: &List, b: &List) -> bool {
    a.open == b.open
        && a.close == b.close
        && a.items.len() == b.items.len()
        && a.items.iter().zip(&b.items).all(|(x, y)| node_eq(x, y))
}
