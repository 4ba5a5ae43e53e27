use super::*;
use crate::tests::Tok;
use pretty_assertions::assert_eq;
use quill_ir::{Affix, Associativity, GrammarNode, OperationMetadata};
use quill_lexer::LogosLexer;

fn builder() -> ParserBuilder<Tok, i64> {
    ParserBuilder::new().lexer(LogosLexer::<Tok>::new())
}

fn zero(_: Vec<Value<Tok, i64>>) -> i64 {
    0
}

fn build_errors(builder: ParserBuilder<Tok, i64>, root: &str) -> BuildErrors {
    match builder.build(ParserKind::Ebnf, root) {
        Ok(_) => panic!("build should fail"),
        Err(errors) => errors,
    }
}

fn codes(errors: &BuildErrors) -> Vec<ErrorCode> {
    errors.iter().map(|err| err.code).collect()
}

#[test]
fn test_rules_keep_registration_order() {
    let parser = builder()
        .production("sum", "expr : term ((PLUS | MINUS) term)*", zero)
        .production("number", "term : NUM", zero)
        .production("group", "term : LPAREN[d] expr RPAREN[d]", zero)
        .build(ParserKind::Ebnf, "expr")
        .unwrap();

    let config = parser.configuration();
    assert_eq!(config.starting_rule(), "expr");
    assert_eq!(
        config.to_string(),
        "expr : term ((PLUS | MINUS) term)*\n\
         term : NUM\n\
         term : LPAREN [d] expr RPAREN [d]\n"
    );
    let term = config.get("term").unwrap();
    assert_eq!(term.rules[0].production, "number");
    assert_eq!(term.rules[1].rule_string, "term : LPAREN[d] expr RPAREN[d]");
}

#[test]
fn test_top_level_alternatives_become_rules() {
    let parser = builder()
        .production("atom", "atom : NUM | IDENT | LPAREN atom RPAREN", zero)
        .build(ParserKind::Plain, "atom")
        .unwrap();

    let atom = parser.configuration().get("atom").unwrap();
    assert_eq!(atom.rules.len(), 3);
    assert!(atom.rules.iter().all(|rule| rule.production == "atom"));
    assert_eq!(atom.rules[1].clauses, vec![GrammarNode::terminal(Tok::Ident)]);
}

#[test]
fn test_productions_share_a_callback() {
    let parser = builder()
        .productions("list", ["list : item (COMMA item)*", "item : NUM", "item : IDENT"], zero)
        .build(ParserKind::Ebnf, "list")
        .unwrap();
    assert_eq!(parser.configuration().len(), 2);
    assert_eq!(parser.configuration().get("item").unwrap().rules.len(), 2);
}

#[test]
fn test_operator_declarations() {
    let parser = builder()
        .production("number", "expr : NUM", zero)
        .production("add", "expr : %infix PLUS 10", zero)
        .production("pow", "expr : %infix CARET %right 30", zero)
        .production("neg", "expr : %prefix MINUS 40", zero)
        .production("fact", "expr : %postfix BANG 50;", zero)
        .build(ParserKind::Ebnf, "expr")
        .unwrap();

    let expr = parser.configuration().get("expr").unwrap();
    assert!(expr.is_expression());
    let operations: Vec<OperationMetadata> = expr.operators.iter().map(|op| op.operation).collect();
    assert_eq!(
        operations,
        vec![
            OperationMetadata::infix(10, Associativity::Left),
            OperationMetadata::infix(30, Associativity::Right),
            OperationMetadata::prefix(40),
            OperationMetadata::postfix(50),
        ]
    );
    assert_eq!(expr.operators[2].kind, Tok::Minus);
    assert_eq!(expr.operators_with(Affix::Prefix).count(), 1);
    assert_eq!(expr.operators[0].production, "add");
}

// Extraction errors

#[test]
fn test_malformed_rule_stops_the_build() {
    let errors = build_errors(
        ParserBuilder::new()
            .production("bad", "a : (b", zero)
            .production("good", "b : NUM", zero),
        "missing",
    );
    assert_eq!(codes(&errors), vec![ErrorCode::E2001]);
    assert!(errors.is_fatal());
    assert_eq!(
        errors.errors()[0].message,
        "rule error [a : (b] : unexpected end of input, expecting one of \
         Discard, Question, Star, Plus, Ident, LParen, Pipe, RParen"
    );
}

#[test]
fn test_every_malformed_rule_is_reported() {
    let errors = build_errors(
        builder()
            .production("one", "a :: b", zero)
            .production("two", "b", zero),
        "a",
    );
    assert_eq!(codes(&errors), vec![ErrorCode::E2001, ErrorCode::E2001]);
    assert!(errors.errors()[1].message.starts_with("rule error [b] : unexpected end of input"));
}

#[test]
fn test_invalid_operator_declarations() {
    let errors = build_errors(
        builder()
            .production("number", "expr : NUM", zero)
            .production("symbol", "expr : %infix plus 10", zero)
            .production("precedence", "expr : %infix PLUS 99999999999", zero)
            .production("unary", "expr : %prefix MINUS %left 40", zero),
        "expr",
    );
    let messages: Vec<&str> = errors.iter().map(|err| err.message.as_str()).collect();
    assert_eq!(
        messages,
        vec![
            "invalid operator declaration [expr : %infix plus 10] : 'plus' is not a token kind",
            "invalid operator declaration [expr : %infix PLUS 99999999999] : '99999999999' is not a valid precedence",
            "invalid operator declaration [expr : %prefix MINUS %left 40] : prefix operators take no associativity",
        ]
    );
    assert!(errors.iter().all(|err| err.code == ErrorCode::E2006));
}

// Validation errors

#[test]
fn test_missing_starting_rule() {
    let errors = build_errors(builder().production("n", "term : NUM", zero), "expr");
    assert_eq!(codes(&errors), vec![ErrorCode::E2004]);
    assert_eq!(errors.to_string(), "[E2004] starting rule 'expr' is not defined");
}

#[test]
fn test_undefined_non_terminal() {
    let errors = build_errors(
        builder().production("product", "term : factor (STAR factor)*", zero),
        "term",
    );
    assert_eq!(codes(&errors), vec![ErrorCode::E2003]);
    assert_eq!(
        errors.errors()[0].message,
        "non-terminal 'factor' used by 'term' is never defined"
    );
    assert!(!errors.is_fatal());
}

#[test]
fn test_plain_kind_rejects_ebnf_rules() {
    let grammar = || {
        builder()
            .production("list", "list : NUM (COMMA NUM)*", zero)
            .production("pair", "pair : NUM COMMA NUM", zero)
    };
    let errors = match grammar().build(ParserKind::Plain, "list") {
        Ok(_) => panic!("plain build should fail"),
        Err(errors) => errors,
    };
    assert_eq!(codes(&errors), vec![ErrorCode::E2005]);
    assert_eq!(
        errors.errors()[0].message,
        "rule [list : NUM (COMMA NUM)*] uses EBNF constructs, which the plain parser does not support"
    );
    assert!(grammar().build(ParserKind::Ebnf, "list").is_ok());
}

#[test]
fn test_direct_left_recursion() {
    let errors = build_errors(
        builder()
            .production("sum", "expr : expr PLUS term", zero)
            .production("single", "expr : term", zero)
            .production("number", "term : NUM", zero),
        "expr",
    );
    assert_eq!(codes(&errors), vec![ErrorCode::E2002]);
    assert_eq!(errors.errors()[0].level, ErrorLevel::Fatal);
    assert_eq!(errors.errors()[0].message, "left recursion detected :\nexpr > expr");
}

#[test]
fn test_indirect_left_recursion_through_nullable_prefix() {
    let errors = build_errors(
        builder()
            .production("a", "a : MINUS? b NUM", zero)
            .production("b", "b : c PLUS | NUM", zero)
            .production("c", "c : a", zero),
        "a",
    );
    assert_eq!(
        errors.errors()[0].message,
        "left recursion detected :\na > b > c > a"
    );
}

#[test]
fn test_lexer_is_required() {
    let errors = build_errors(ParserBuilder::new().production("n", "term : NUM", zero), "term");
    assert_eq!(codes(&errors), vec![ErrorCode::E2007]);
    assert_eq!(errors.errors()[0].message, "no lexer configured");

    let errors = build_errors(
        ParserBuilder::new()
            .production("n", "term : NUM", zero)
            .lexer_with(|| Err::<LogosLexer<Tok>, _>("bad pattern")),
        "term",
    );
    assert_eq!(errors.errors()[0].message, "lexer construction failed : bad pattern");
}

#[test]
fn test_validation_errors_are_collected() {
    let errors = build_errors(
        ParserBuilder::new()
            .production("loop", "a : a NUM", zero)
            .production("dangling", "b : missing", zero),
        "start",
    );
    assert_eq!(
        codes(&errors),
        vec![ErrorCode::E2004, ErrorCode::E2003, ErrorCode::E2002, ErrorCode::E2007]
    );
    assert!(errors.has_code(ErrorCode::E2002));
    assert!(!errors.has_code(ErrorCode::E2005));
    assert!(errors.is_fatal());
    assert_eq!(
        errors.iter().map(|err| err.level).collect::<Vec<_>>(),
        vec![ErrorLevel::Error, ErrorLevel::Error, ErrorLevel::Fatal, ErrorLevel::Error]
    );
}

#[test]
fn test_french_build_messages() {
    let errors = build_errors(
        builder()
            .catalog(Catalog::french())
            .production("n", "term : NUM", zero),
        "expr",
    );
    assert_eq!(
        errors.errors()[0].message,
        "la règle de départ 'expr' n'est pas définie"
    );
}
