use super::*;
use crate::{Lexer, LogosLexer};
use pretty_assertions::assert_eq;
use quill_ir::TokenKind;

fn kinds(source: &str) -> Vec<MetaKind> {
    match LogosLexer::<MetaKind>::new().tokenize(source) {
        Ok(list) => list.kinds(),
        Err(err) => panic!("lexing {source:?} failed: {err}"),
    }
}

#[test]
fn test_rule_with_groups() {
    use MetaKind::*;
    assert_eq!(
        kinds("expr : term ((PLUS | MINUS) term)* ;"),
        vec![
            Ident, Colon, Ident, LParen, LParen, Ident, Pipe, Ident, RParen, Ident, RParen, Star,
            Semicolon
        ]
    );
}

#[test]
fn test_operator_declaration() {
    use MetaKind::*;
    assert_eq!(
        kinds("expr : %infix PLUS %left 10"),
        vec![Ident, Colon, Infix, Ident, Left, Int]
    );
    assert_eq!(kinds("e: %prefix MINUS 100"), vec![Ident, Colon, Prefix, Ident, Int]);
}

#[test]
fn test_discard_marker_and_suffixes() {
    use MetaKind::*;
    assert_eq!(
        kinds("a : LPAREN [d] b? c+"),
        vec![Ident, Colon, Ident, Discard, Ident, Question, Ident, Plus]
    );
}

#[test]
fn test_names_resolve() {
    assert_eq!(MetaKind::Discard.name(), "Discard");
    assert_eq!(MetaKind::from_name("Infix"), Some(MetaKind::Infix));
}

#[test]
fn test_unknown_directive_is_a_lexical_error() {
    let Err(err) = LogosLexer::<MetaKind>::new().tokenize("a : %bogus") else {
        panic!("expected a lexical error");
    };
    assert_eq!(err.position.column, 5);
}
