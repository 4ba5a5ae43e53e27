use super::*;
use pretty_assertions::assert_eq;

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
enum Tok {
    Num,
    Plus,
    Eos,
}

crate::impl_token_kind!(Tok { Num, Plus, Eos });

fn tok(kind: Tok, value: &str, column: u32) -> Token<Tok> {
    let offset = column - 1;
    Token::new(
        kind,
        value,
        Position::new(1, column, offset),
        Span::new(offset, offset + u32::try_from(value.len()).unwrap_or(0)),
    )
}

#[test]
fn test_token_kind_names_round_trip() {
    assert_eq!(Tok::Plus.name(), "Plus");
    assert_eq!(Tok::from_name("Num"), Some(Tok::Num));
    assert_eq!(Tok::from_name("expr"), None);
}

#[test]
fn test_token_debug() {
    let token = tok(Tok::Num, "42", 3);
    assert_eq!(format!("{token:?}"), "Num \"42\" @ 1:3");

    let eos = Token::end_of_stream(Tok::Eos, Position::new(2, 1, 10));
    assert_eq!(format!("{eos:?}"), "<eos> @ 2:1");
}

#[test]
fn test_token_containers_debug() {
    let list = TokenList::new(vec![tok(Tok::Num, "1", 1)]);
    assert!(format!("{list:?}").contains("Num \"1\" @ 1:1"));

    let value: crate::Value<Tok, i64> = crate::Value::Token(tok(Tok::Plus, "+", 2));
    assert_eq!(format!("{value:?}"), "Token(Plus \"+\" @ 1:2)");
}

#[test]
fn test_list_end_position_after_last_token() {
    let list = TokenList::new(vec![tok(Tok::Num, "1", 1), tok(Tok::Num, "234", 3)]);
    assert_eq!(list.len(), 2);
    assert_eq!(list.end_position(), Position::new(1, 6, 5));
    assert_eq!(list.end_span(), Span::point(5));
}

#[test]
fn test_list_stops_at_end_of_stream_marker() {
    let eos = Token::end_of_stream(Tok::Eos, Position::new(1, 9, 8));
    let list = TokenList::new(vec![tok(Tok::Num, "1", 1), eos, tok(Tok::Num, "2", 10)]);

    assert_eq!(list.len(), 1);
    assert!(list.get(1).is_none());
    assert_eq!(list.end_position(), Position::new(1, 9, 8));
    assert_eq!(list.kinds(), vec![Tok::Num]);
}

#[test]
fn test_empty_list() {
    let list: TokenList<Tok> = TokenList::empty();
    assert!(list.is_empty());
    assert_eq!(list.end_position(), Position::START);
}

#[test]
fn test_with_end_overrides_position() {
    let list = TokenList::with_end(vec![tok(Tok::Plus, "+", 1)], Position::new(4, 2, 30));
    assert_eq!(list.end_position(), Position::new(4, 2, 30));
}
