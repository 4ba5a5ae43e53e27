use super::*;
use crate::{Callback, Value};
use pretty_assertions::assert_eq;

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
enum Tok {
    Num,
    Plus,
    Minus,
    LParen,
    RParen,
}

crate::impl_token_kind!(Tok {
    Num,
    Plus,
    Minus,
    LParen,
    RParen
});

type G = GrammarNode<Tok>;

fn noop() -> Callback<Tok, ()> {
    Callback::new(|_: Vec<Value<Tok, ()>>| ())
}

fn never(_: &str) -> bool {
    false
}

#[test]
fn test_display_renders_rule_notation() {
    let node = G::zero_or_more(G::Group(vec![
        G::Alternation(vec![G::terminal(Tok::Plus), G::terminal(Tok::Minus)]),
        G::non_terminal("term"),
    ]));
    assert_eq!(node.to_string(), "((Plus | Minus) term)*");

    let discarded = G::terminal(Tok::LParen).discard();
    assert_eq!(discarded.to_string(), "LParen [d]");
    assert_eq!(G::optional(G::non_terminal("x")).to_string(), "x?");
    assert_eq!(G::one_or_more(G::non_terminal("x")).to_string(), "x+");
}

#[test]
fn test_discard_only_marks_references() {
    assert!(G::non_terminal("a").discard().is_discarded());
    let group = G::Group(vec![G::terminal(Tok::Num)]).discard();
    assert!(!group.is_discarded());
}

#[test]
fn test_plain_clauses() {
    assert!(G::terminal(Tok::Num).is_plain());
    assert!(G::non_terminal("a").is_plain());
    assert!(!G::optional(G::terminal(Tok::Num)).is_plain());
    assert!(!G::Alternation(vec![G::terminal(Tok::Num)]).is_plain());
}

#[test]
fn test_can_derive_empty() {
    let nullable_b = |name: &str| name == "b";

    assert!(!G::terminal(Tok::Num).can_derive_empty(&nullable_b));
    assert!(G::non_terminal("b").can_derive_empty(&nullable_b));
    assert!(G::optional(G::terminal(Tok::Num)).can_derive_empty(&never));
    assert!(G::zero_or_more(G::terminal(Tok::Num)).can_derive_empty(&never));
    assert!(!G::one_or_more(G::terminal(Tok::Num)).can_derive_empty(&never));
    assert!(G::one_or_more(G::non_terminal("b")).can_derive_empty(&nullable_b));
    assert!(G::Alternation(vec![G::terminal(Tok::Num), G::non_terminal("b")])
        .can_derive_empty(&nullable_b));
    assert!(!G::Group(vec![G::non_terminal("b"), G::terminal(Tok::Num)])
        .can_derive_empty(&nullable_b));
}

#[test]
fn test_leftmost_skips_nullable_prefix() {
    let clauses = vec![
        G::optional(G::terminal(Tok::Minus)),
        G::zero_or_more(G::non_terminal("a")),
        G::non_terminal("b"),
        G::non_terminal("c"),
    ];
    let mut out = Vec::new();
    leftmost_of_sequence(&clauses, &never, &mut out);
    assert_eq!(out, vec!["a", "b"]);
}

#[test]
fn test_leftmost_of_alternation_collects_every_branch() {
    let node = G::Alternation(vec![
        G::non_terminal("a"),
        G::terminal(Tok::Num),
        G::Group(vec![G::non_terminal("b"), G::non_terminal("c")]),
    ]);
    let mut out = Vec::new();
    node.leftmost_references(&never, &mut out);
    assert_eq!(out, vec!["a", "b"]);
}

#[test]
fn test_right_operand_threshold() {
    assert_eq!(
        OperationMetadata::infix(10, Associativity::Left).right_operand_threshold(),
        11
    );
    assert_eq!(
        OperationMetadata::infix(10, Associativity::Right).right_operand_threshold(),
        10
    );
    assert_eq!(
        OperationMetadata::infix(u32::MAX, Associativity::Left).right_operand_threshold(),
        u64::from(u32::MAX) + 1
    );
    assert!(OperationMetadata::prefix(100).is_unary());
    assert_eq!(OperationMetadata::infix(10, Associativity::Left).to_string(), "infix 10 left");
    assert_eq!(OperationMetadata::postfix(7).to_string(), "postfix 7");
}

#[test]
fn test_configuration_preserves_declaration_order() {
    let mut config = ParserConfiguration::new("expr");
    config.add_rule(Rule::new("expr", vec![G::non_terminal("term")], noop()));
    config.add_rule(Rule::new("term", vec![G::terminal(Tok::Num)], noop()));
    config.add_rule(Rule::new(
        "term",
        vec![
            G::terminal(Tok::LParen),
            G::non_terminal("expr"),
            G::terminal(Tok::RParen),
        ],
        noop(),
    ));

    let names: Vec<&str> = config.non_terminals().map(|nt| nt.name.as_str()).collect();
    assert_eq!(names, vec!["expr", "term"]);
    assert_eq!(config.get("term").map(|nt| nt.rules.len()), Some(2));
    assert_eq!(config.index_of("term"), Some(1));
    assert!(config.is_plain());
    assert!(config.undefined_references().is_empty());
}

#[test]
fn test_configuration_reports_undefined_references_once() {
    let mut config = ParserConfiguration::new("a");
    config.add_rule(Rule::new(
        "a",
        vec![G::non_terminal("missing"), G::optional(G::non_terminal("missing"))],
        noop(),
    ));
    assert!(!config.is_plain());
    assert_eq!(config.undefined_references(), vec![("a", "missing")]);
}

#[test]
fn test_operators_make_an_expression_head() {
    let mut config = ParserConfiguration::new("expr");
    config.add_rule(Rule::new("expr", vec![G::terminal(Tok::Num)], noop()));
    assert!(config.get("expr").is_some_and(|nt| !nt.is_expression()));

    config.add_operator(
        "expr",
        Operator::new(Tok::Minus, OperationMetadata::prefix(100), noop()),
    );
    config.add_operator(
        "expr",
        Operator::new(Tok::Minus, OperationMetadata::infix(10, Associativity::Left), noop()),
    );

    let Some(expr) = config.get("expr") else {
        panic!("expr should exist");
    };
    assert!(expr.is_expression());
    assert_eq!(
        expr.prefix_operator(Tok::Minus).map(|op| op.operation.affix),
        Some(Affix::Prefix)
    );
    assert_eq!(
        expr.trailing_operator(Tok::Minus).map(|op| op.operation.affix),
        Some(Affix::Infix)
    );
    assert!(expr.trailing_operator(Tok::Plus).is_none());
    assert_eq!(expr.operators_with(Affix::Infix).count(), 1);
    assert_eq!(
        config.to_string(),
        "expr : Num\nexpr : Minus prefix 100\nexpr : Minus infix 10 left\n"
    );
}
