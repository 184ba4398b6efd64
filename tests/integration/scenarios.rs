// End-to-end reads covering the atoms, bracket species, quote family,
// comments, and number/symbol boundaries the reader must preserve.

use crate::common::{list_eq, read, read_with_diagnostics};
use larch::{lex, AtomKind, List, Node, RecordingSink, SourceBuffer, TokenKind};
use std::sync::Arc;

fn list(node: &Node) -> &List {
    node.as_list().expect("expected a list node")
}

fn atom_contents(node: &Node) -> &str {
    &node.as_atom().expect("expected an atom").contents
}

#[test]
fn defun_reads_as_a_four_element_list() {
    let root = read("(defun f (x) (* x 2))").unwrap();
    assert_eq!(root.items.len(), 1);

    let defun = list(&root.items[0]);
    assert_eq!(defun.items.len(), 4);
    assert!(defun.items[0].is_symbol("defun"));
    assert!(defun.items[1].is_symbol("f"));

    let params = list(&defun.items[2]);
    assert_eq!(params.items.len(), 1);
    assert!(params.items[0].is_symbol("x"));

    let body = list(&defun.items[3]);
    assert_eq!(body.items.len(), 3);
    assert!(body.items[0].is_symbol("*"));
    assert!(body.items[1].is_symbol("x"));
    let two = body.items[2].as_atom().unwrap();
    assert_eq!(two.kind, AtomKind::Number);
    assert_eq!(two.contents, "2");
}

#[test]
fn quote_shorthand_becomes_a_tagged_pair() {
    let root = read("'a").unwrap();
    assert_eq!(root.items.len(), 1);
    let quoted = list(&root.items[0]);
    assert_eq!(quoted.items.len(), 2);
    assert!(quoted.items[0].is_symbol("quote"));
    assert!(quoted.items[1].is_symbol("a"));
}

#[test]
fn unquote_splice_shorthand_becomes_a_tagged_pair() {
    let root = read(",@xs").unwrap();
    assert_eq!(root.items.len(), 1);
    let spliced = list(&root.items[0]);
    assert_eq!(spliced.items.len(), 2);
    assert!(spliced.items[0].is_symbol("unquote-splice"));
    assert!(spliced.items[1].is_symbol("xs"));
}

#[test]
fn all_three_bracket_species_nest_and_are_preserved() {
    let root = read("(a [b {c}])").unwrap();
    let round = list(&root.items[0]);
    assert_eq!((round.open, round.close), (Some('('), Some(')')));
    let square = list(&round.items[1]);
    assert_eq!((square.open, square.close), (Some('['), Some(']')));
    let curly = list(&square.items[1]);
    assert_eq!((curly.open, curly.close), (Some('{'), Some('}')));
    assert!(curly.items[0].is_symbol("c"));
}

#[test]
fn comment_lines_vanish_entirely() {
    let root = read("; just a comment\n42").unwrap();
    assert_eq!(root.items.len(), 1);
    let atom = root.items[0].as_atom().unwrap();
    assert_eq!(atom.kind, AtomKind::Number);
    assert_eq!(atom.contents, "42");
}

#[test]
fn minus_digit_is_a_number_and_minus_letter_a_symbol() {
    let root = read("(-3 -x)").unwrap();
    let pair = list(&root.items[0]);
    let first = pair.items[0].as_atom().unwrap();
    assert_eq!(first.kind, AtomKind::Number);
    assert_eq!(first.contents, "-3");
    let second = pair.items[1].as_atom().unwrap();
    assert_eq!(second.kind, AtomKind::Symbol);
    assert_eq!(second.contents, "-x");
}

#[test]
fn string_atoms_keep_quotes_and_raw_escapes() {
    let root = read(r#"("a\tb" "")"#).unwrap();
    let pair = list(&root.items[0]);
    assert_eq!(atom_contents(&pair.items[0]), r#""a\tb""#);
    assert_eq!(atom_contents(&pair.items[1]), r#""""#);
}

#[test]
fn keys_keep_their_colon() {
    let root = read("(:name \"larch\")").unwrap();
    let pair = list(&root.items[0]);
    let key = pair.items[0].as_atom().unwrap();
    assert_eq!(key.kind, AtomKind::Key);
    assert_eq!(key.contents, ":name");
}

#[test]
fn token_contents_concatenate_to_the_input_minus_layout() {
    let input = "(defun f (x) ; doc\n  '(a -3 :k))";
    let source = Arc::new(SourceBuffer::new(input, "<test>"));
    let mut sink = RecordingSink::new();
    let tokens = lex(&source, &mut sink).unwrap();

    let concatenated: String = tokens.iter().map(|t| t.contents.as_str()).collect();
    let expected: String = input
        .chars()
        .filter(|c| !matches!(c, ' ' | '\t' | '\n'))
        .collect::<String>()
        .replace(";doc", "");
    assert_eq!(concatenated, expected);
    assert_eq!(
        tokens.iter().filter(|t| t.kind == TokenKind::Eof).count(),
        1
    );
}

#[test]
fn every_list_subtree_reparses_to_itself() {
    let input = "(defun f (x)\n  '(a [b {c}] ,@xs -3 :k \"s\"))";
    let root = read(input).unwrap();

    fn check(list: &List) {
        let text = list.span.text().to_string();
        let reread = read(&text).expect("subtree text must reparse");
        assert_eq!(reread.items.len(), 1, "subtree {:?} split apart", text);
        assert!(
            list_eq(reread.items[0].as_list().unwrap(), list),
            "subtree {:?} changed shape on reparse",
            text
        );
        for item in &list.items {
            if let Node::List(inner) = item {
                check(inner);
            }
        }
    }

    for item in &root.items {
        if let Node::List(top) = item {
            check(top);
        }
    }
}

#[test]
fn shebang_line_is_ignored() {
    let root = read("#!/usr/bin/env larch\n(main)").unwrap();
    assert_eq!(root.items.len(), 1);
    assert!(list(&root.items[0]).items[0].is_symbol("main"));
}

#[test]
fn successful_reads_leave_the_sink_empty() {
    let (result, sink) = read_with_diagnostics("(a (b) [c])");
    assert!(result.is_ok());
    assert!(sink.diagnostics().is_empty());
}
