//! The hard-wired meta-grammar and its reduction callbacks.
//!
//! Built from `GrammarNode` values rather than rule strings, since rule
//! strings need this grammar to be parsed in the first place.

use quill_ir::{Affix, Associativity, Callback, GrammarNode, ParserConfiguration, Rule, TokenKind, Value};
use quill_lexer::MetaKind;

use super::{MetaValue, OperatorSyntax, RuleBody, RuleSyntax};

pub(super) const ROOT: &str = "rule";

type Arg<K> = Value<MetaKind, MetaValue<K>>;

fn t(kind: MetaKind) -> GrammarNode<MetaKind> {
    GrammarNode::terminal(kind)
}

fn n(name: &str) -> GrammarNode<MetaKind> {
    GrammarNode::non_terminal(name)
}

fn any_of(kinds: &[MetaKind]) -> GrammarNode<MetaKind> {
    GrammarNode::Alternation(kinds.iter().copied().map(t).collect())
}

pub(super) fn configuration<K: TokenKind>() -> ParserConfiguration<MetaKind, MetaValue<K>> {
    let mut config = ParserConfiguration::new(ROOT);
    let mut add = |name: &str, clauses: Vec<GrammarNode<MetaKind>>, callback: Callback<MetaKind, MetaValue<K>>| {
        config.add_rule(Rule::new(name, clauses, callback));
    };

    add(
        ROOT,
        vec![
            t(MetaKind::Ident),
            t(MetaKind::Colon).discard(),
            n("body"),
            GrammarNode::optional(t(MetaKind::Semicolon).discard()),
        ],
        Callback::new(rule::<K>),
    );

    // Operator declarations first: `%infix` never starts a clause.
    add("body", vec![n("operator")], Callback::new(operator_body::<K>));
    add("body", vec![n("alternation")], Callback::new(clause_body::<K>));
    add("body", vec![], Callback::new(|_| MetaValue::Body(RuleBody::epsilon())));

    add(
        "operator",
        vec![
            any_of(&[MetaKind::Infix, MetaKind::Prefix, MetaKind::Postfix]),
            t(MetaKind::Ident),
            GrammarNode::optional(any_of(&[MetaKind::Left, MetaKind::Right])),
            t(MetaKind::Int),
        ],
        Callback::new(operator::<K>),
    );

    add(
        "alternation",
        vec![
            n("sequence"),
            GrammarNode::zero_or_more(GrammarNode::Group(vec![
                t(MetaKind::Pipe).discard(),
                n("sequence"),
            ])),
        ],
        Callback::new(alternation::<K>),
    );

    add(
        "sequence",
        vec![GrammarNode::one_or_more(n("clause"))],
        Callback::new(sequence::<K>),
    );

    add(
        "clause",
        vec![
            n("atom"),
            GrammarNode::optional(any_of(&[MetaKind::Question, MetaKind::Star, MetaKind::Plus])),
        ],
        Callback::new(clause::<K>),
    );

    add(
        "atom",
        vec![
            t(MetaKind::Ident),
            GrammarNode::optional(t(MetaKind::Discard)),
        ],
        Callback::new(reference::<K>),
    );
    add(
        "atom",
        vec![
            t(MetaKind::LParen).discard(),
            n("alternation"),
            t(MetaKind::RParen).discard(),
        ],
        Callback::new(parenthesized::<K>),
    );

    config
}

// Callbacks. The grammar fixes the shape of their arguments; a shape that
// does not fit degrades to an empty value instead of panicking.

fn text<K>(arg: Option<Arg<K>>) -> String {
    arg.and_then(Value::into_token)
        .map(|token| token.value)
        .unwrap_or_default()
}

fn out<K>(arg: Option<Arg<K>>) -> Option<MetaValue<K>> {
    arg.and_then(Value::into_out)
}

/// The token inside a `?` clause, if it matched.
fn optional_kind<K>(arg: Option<Arg<K>>) -> Option<MetaKind> {
    arg.and_then(Value::into_optional)
        .flatten()
        .and_then(Value::into_token)
        .map(|token| token.kind)
}

fn rule<K>(args: Vec<Arg<K>>) -> MetaValue<K> {
    let mut args = args.into_iter();
    let name = text(args.next());
    let body = match out(args.next()) {
        Some(MetaValue::Body(body)) => body,
        _ => RuleBody::epsilon(),
    };
    MetaValue::Rule(RuleSyntax { name, body })
}

fn operator_body<K>(args: Vec<Arg<K>>) -> MetaValue<K> {
    match out(args.into_iter().next()) {
        Some(MetaValue::Operator(operator)) => MetaValue::Body(RuleBody::Operator(operator)),
        _ => MetaValue::Body(RuleBody::epsilon()),
    }
}

fn clause_body<K>(args: Vec<Arg<K>>) -> MetaValue<K> {
    match out(args.into_iter().next()) {
        Some(MetaValue::Branches(branches)) => MetaValue::Body(RuleBody::Clauses(branches)),
        _ => MetaValue::Body(RuleBody::epsilon()),
    }
}

fn operator<K>(args: Vec<Arg<K>>) -> MetaValue<K> {
    let mut args = args.into_iter();
    let affix = match args.next().and_then(Value::into_token).map(|t| t.kind) {
        Some(MetaKind::Prefix) => Affix::Prefix,
        Some(MetaKind::Postfix) => Affix::Postfix,
        _ => Affix::Infix,
    };
    let symbol = text(args.next());
    let associativity = match optional_kind(args.next()) {
        Some(MetaKind::Left) => Some(Associativity::Left),
        Some(MetaKind::Right) => Some(Associativity::Right),
        _ => None,
    };
    let precedence = text(args.next());
    MetaValue::Operator(OperatorSyntax {
        affix,
        symbol,
        associativity,
        precedence,
    })
}

fn alternation<K>(args: Vec<Arg<K>>) -> MetaValue<K> {
    let mut args = args.into_iter();
    let mut branches = Vec::new();
    if let Some(MetaValue::Sequence(first)) = out(args.next()) {
        branches.push(first);
    }
    let rest = args.next().and_then(Value::into_list).unwrap_or_default();
    for item in rest {
        if let Some(MetaValue::Sequence(branch)) = item.into_out() {
            branches.push(branch);
        }
    }
    MetaValue::Branches(branches)
}

fn sequence<K>(args: Vec<Arg<K>>) -> MetaValue<K> {
    let items = args
        .into_iter()
        .next()
        .and_then(Value::into_list)
        .unwrap_or_default();
    let clauses = items
        .into_iter()
        .filter_map(|item| match item.into_out() {
            Some(MetaValue::Clause(clause)) => Some(clause),
            _ => None,
        })
        .collect();
    MetaValue::Sequence(clauses)
}

fn clause<K>(args: Vec<Arg<K>>) -> MetaValue<K> {
    let mut args = args.into_iter();
    let Some(MetaValue::Clause(atom)) = out(args.next()) else {
        return MetaValue::Sequence(Vec::new());
    };
    let clause = match optional_kind(args.next()) {
        Some(MetaKind::Question) => GrammarNode::Optional(Box::new(atom)),
        Some(MetaKind::Star) => GrammarNode::ZeroOrMore(Box::new(atom)),
        Some(MetaKind::Plus) => GrammarNode::OneOrMore(Box::new(atom)),
        _ => atom,
    };
    MetaValue::Clause(clause)
}

fn reference<K: TokenKind>(args: Vec<Arg<K>>) -> MetaValue<K> {
    let mut args = args.into_iter();
    let name = text(args.next());
    let discarded = optional_kind(args.next()).is_some();
    let node = match K::from_name(&name) {
        Some(kind) => GrammarNode::terminal(kind),
        None => GrammarNode::non_terminal(name),
    };
    MetaValue::Clause(if discarded { node.discard() } else { node })
}

fn parenthesized<K>(args: Vec<Arg<K>>) -> MetaValue<K> {
    match out(args.into_iter().next()) {
        Some(MetaValue::Branches(branches)) => MetaValue::Clause(group(branches)),
        _ => MetaValue::Clause(GrammarNode::Group(Vec::new())),
    }
}

/// `( a )` is just `a`, `( a b )` a group, `( a | b c )` an alternation.
fn group<K>(mut branches: Vec<Vec<GrammarNode<K>>>) -> GrammarNode<K> {
    if branches.len() == 1 {
        if let Some(branch) = branches.pop() {
            return branch_node(branch);
        }
    }
    GrammarNode::Alternation(branches.into_iter().map(branch_node).collect())
}

fn branch_node<K>(mut branch: Vec<GrammarNode<K>>) -> GrammarNode<K> {
    if branch.len() == 1 {
        if let Some(clause) = branch.pop() {
            return clause;
        }
    }
    GrammarNode::Group(branch)
}
