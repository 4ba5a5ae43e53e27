use super::*;
use crate::tests::{tok, Tok};

fn list() -> TokenList<Tok> {
    TokenList::new(vec![tok(Tok::Num, "1", 1), tok(Tok::Plus, "+", 3)])
}

#[test]
fn test_advance_and_end() {
    let tokens = list();
    let mut cursor = Cursor::new(&tokens);
    assert!(cursor.check(Tok::Num));
    assert_eq!(cursor.advance().map(|t| t.kind), Some(Tok::Num));
    assert!(cursor.eat(Tok::Num).is_none());
    assert!(cursor.eat(Tok::Plus).is_some());
    assert!(cursor.is_at_end());
    assert!(cursor.advance().is_none());
    assert_eq!(cursor.position(), 2);
}

#[test]
fn test_snapshot_restore() {
    let tokens = list();
    let mut cursor = Cursor::new(&tokens);
    let snapshot = cursor.snapshot();
    cursor.advance();
    assert!(cursor.advanced_since(snapshot));
    cursor.restore(snapshot);
    assert_eq!(cursor.position(), 0);
    assert!(!cursor.advanced_since(snapshot));
}

#[test]
fn test_location_of_end() {
    let tokens = list();
    let cursor = Cursor::new(&tokens);
    let (position, span) = cursor.location_of(5);
    assert_eq!(position, tokens.end_position());
    assert_eq!(span, tokens.end_span());
    assert_eq!(cursor.location_of(1).0.column, 3);
}

#[test]
fn test_snapshot_size() {
    assert!(std::mem::size_of::<CursorSnapshot>() <= 8);
}
