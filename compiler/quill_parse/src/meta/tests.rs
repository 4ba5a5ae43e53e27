use super::*;
use crate::tests::Tok;
use pretty_assertions::assert_eq;
use quill_diagnostic::Catalog;

fn parse(rule: &str) -> RuleSyntax<Tok> {
    match MetaGrammar::<Tok>::new().parse(rule) {
        Ok(syntax) => syntax,
        Err(errors) => panic!("{rule:?} failed: {errors:?}"),
    }
}

fn clauses(rule: &str) -> Vec<Vec<GrammarNode<Tok>>> {
    match parse(rule).body {
        RuleBody::Clauses(branches) => branches,
        RuleBody::Operator(op) => panic!("expected clauses, got {op:?}"),
    }
}

/// Render branches back to rule notation.
fn render(branches: &[Vec<GrammarNode<Tok>>]) -> Vec<String> {
    branches
        .iter()
        .map(|branch| {
            branch
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect()
}

#[test]
fn test_terminals_and_references() {
    let syntax = parse("sum : term PLUS term ;");
    assert_eq!(syntax.name, "sum");
    assert_eq!(
        syntax.body,
        RuleBody::Clauses(vec![vec![
            GrammarNode::non_terminal("term"),
            GrammarNode::terminal(Tok::Plus),
            GrammarNode::non_terminal("term"),
        ]])
    );
}

#[test]
fn test_semicolon_is_optional() {
    assert_eq!(parse("a : NUM"), parse("a : NUM;"));
}

#[test]
fn test_discard_marker() {
    assert_eq!(
        clauses("call : IDENT LPAREN[d] args RPAREN [d]"),
        vec![vec![
            GrammarNode::terminal(Tok::Ident),
            GrammarNode::terminal(Tok::LParen).discard(),
            GrammarNode::non_terminal("args"),
            GrammarNode::terminal(Tok::RParen).discard(),
        ]]
    );
}

#[test]
fn test_empty_body_is_epsilon() {
    assert_eq!(parse("empty :").body, RuleBody::Clauses(vec![vec![]]));
    assert_eq!(parse("empty : ;").body, RuleBody::Clauses(vec![vec![]]));
}

#[test]
fn test_top_level_alternatives() {
    assert_eq!(
        render(&clauses("atom : NUM | LPAREN expr RPAREN | MINUS atom")),
        vec!["NUM", "LPAREN expr RPAREN", "MINUS atom"]
    );
}

#[test]
fn test_nested_groups_and_repetition() {
    assert_eq!(
        render(&clauses("expr : term ((PLUS | MINUS) term)*")),
        vec!["term ((PLUS | MINUS) term)*"]
    );
    assert_eq!(
        render(&clauses("list : (item (COMMA[d] item)*)? tail+")),
        vec!["(item (COMMA [d] item)*)? tail+"]
    );
}

#[test]
fn test_single_clause_parentheses_collapse() {
    assert_eq!(
        clauses("a : (b)*"),
        vec![vec![GrammarNode::zero_or_more(GrammarNode::non_terminal("b"))]]
    );
    assert_eq!(
        clauses("a : (NUM | b c)"),
        vec![vec![GrammarNode::Alternation(vec![
            GrammarNode::terminal(Tok::Num),
            GrammarNode::Group(vec![GrammarNode::non_terminal("b"), GrammarNode::non_terminal("c")]),
        ])]]
    );
}

#[test]
fn test_operator_declarations() {
    assert_eq!(
        parse("expr : %infix PLUS %left 10").body,
        RuleBody::Operator(OperatorSyntax {
            affix: Affix::Infix,
            symbol: "PLUS".to_string(),
            associativity: Some(Associativity::Left),
            precedence: "10".to_string(),
        })
    );
    assert_eq!(
        parse("expr : %prefix MINUS 40;").body,
        RuleBody::Operator(OperatorSyntax {
            affix: Affix::Prefix,
            symbol: "MINUS".to_string(),
            associativity: None,
            precedence: "40".to_string(),
        })
    );
    let RuleBody::Operator(op) = parse("expr : %postfix BANG 50").body else {
        panic!("expected an operator");
    };
    assert_eq!(op.affix, Affix::Postfix);
}

#[test]
fn test_malformed_rules_fail() {
    let meta = MetaGrammar::<Tok>::new();
    for rule in [
        "",
        "a",
        "a : (b",
        "a : b )",
        "a : | b",
        "a : %infix PLUS",
        ": b",
        "a : b ; c",
    ] {
        assert!(meta.parse(rule).is_err(), "{rule:?} should not parse");
    }
}

#[test]
fn test_malformed_rule_messages() {
    let meta = MetaGrammar::<Tok>::new();
    let errors = meta.parse("a : b |").unwrap_err();
    assert_eq!(
        errors[0].message(&Catalog::english()),
        "unexpected end of input, expecting one of Ident, LParen"
    );

    let errors = meta.parse("a : b # c").unwrap_err();
    assert!(matches!(&errors[0], ParseError::Lexical(err) if err.text == "#"));
}

#[test]
fn test_meta_grammar_shape() {
    let meta = MetaGrammar::<Tok>::new();
    let config = meta.configuration();
    assert_eq!(config.starting_rule(), "rule");
    assert!(config.undefined_references().is_empty());
    assert_eq!(
        config.to_string().lines().next(),
        Some("rule : Ident Colon [d] body Semicolon [d]?")
    );
}
