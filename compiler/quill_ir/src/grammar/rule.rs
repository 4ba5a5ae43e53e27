//! Rules, operators and the non-terminals that own them.

use std::fmt;

use super::{write_separated, GrammarNode, OperationMetadata};
use crate::{Affix, Callback, TokenKind};

/// One alternative production of a non-terminal.
#[derive(Debug)]
pub struct Rule<K, OUT> {
    pub non_terminal: String,
    pub clauses: Vec<GrammarNode<K>>,
    /// The rule string this rule was parsed from, kept for diagnostics.
    pub rule_string: String,
    /// Name of the production the callback was registered under.
    pub production: String,
    pub callback: Callback<K, OUT>,
}

impl<K: TokenKind, OUT> Rule<K, OUT> {
    pub fn new(
        non_terminal: impl Into<String>,
        clauses: Vec<GrammarNode<K>>,
        callback: Callback<K, OUT>,
    ) -> Self {
        let non_terminal = non_terminal.into();
        Rule {
            production: non_terminal.clone(),
            non_terminal,
            clauses,
            rule_string: String::new(),
            callback,
        }
    }

    #[must_use]
    pub fn with_rule_string(mut self, rule_string: impl Into<String>) -> Self {
        self.rule_string = rule_string.into();
        self
    }

    #[must_use]
    pub fn with_production(mut self, production: impl Into<String>) -> Self {
        self.production = production.into();
        self
    }

    /// True if every clause is a direct terminal or non-terminal reference.
    pub fn is_plain(&self) -> bool {
        self.clauses.iter().all(GrammarNode::is_plain)
    }

    /// True if the clause sequence matches the empty input.
    pub fn can_derive_empty(&self, nullable: &impl Fn(&str) -> bool) -> bool {
        self.clauses.iter().all(|c| c.can_derive_empty(nullable))
    }

    /// Non-terminals that can be the leftmost symbol of this rule.
    pub fn leftmost_references(&self, nullable: &impl Fn(&str) -> bool) -> Vec<&str> {
        let mut out = Vec::new();
        super::leftmost_of_sequence(&self.clauses, nullable, &mut out);
        out
    }
}

impl<K: TokenKind, OUT> fmt::Display for Rule<K, OUT> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} :", self.non_terminal)?;
        if !self.clauses.is_empty() {
            f.write_str(" ")?;
            write_separated(f, &self.clauses, " ")?;
        }
        Ok(())
    }
}

/// An operator of an expression head.
#[derive(Debug)]
pub struct Operator<K, OUT> {
    pub kind: K,
    pub operation: OperationMetadata,
    pub rule_string: String,
    pub production: String,
    pub callback: Callback<K, OUT>,
}

impl<K: TokenKind, OUT> Operator<K, OUT> {
    pub fn new(kind: K, operation: OperationMetadata, callback: Callback<K, OUT>) -> Self {
        Operator {
            kind,
            operation,
            rule_string: String::new(),
            production: kind.name().to_string(),
            callback,
        }
    }

    #[must_use]
    pub fn with_rule_string(mut self, rule_string: impl Into<String>) -> Self {
        self.rule_string = rule_string.into();
        self
    }

    #[must_use]
    pub fn with_production(mut self, production: impl Into<String>) -> Self {
        self.production = production.into();
        self
    }
}

/// A named grammar symbol and its ordered alternatives.
///
/// A non-terminal that declares at least one operator is an expression
/// head: its rules are the operand alternatives and its operators are
/// combined by precedence climbing.
#[derive(Debug)]
pub struct NonTerminal<K, OUT> {
    pub name: String,
    /// Alternatives in try order.
    pub rules: Vec<Rule<K, OUT>>,
    /// Operators in declaration order.
    pub operators: Vec<Operator<K, OUT>>,
}

impl<K: TokenKind, OUT> NonTerminal<K, OUT> {
    pub fn new(name: impl Into<String>) -> Self {
        NonTerminal {
            name: name.into(),
            rules: Vec::new(),
            operators: Vec::new(),
        }
    }

    #[inline]
    pub fn is_expression(&self) -> bool {
        !self.operators.is_empty()
    }

    /// The first prefix operator declared for `kind`.
    pub fn prefix_operator(&self, kind: K) -> Option<&Operator<K, OUT>> {
        self.operators
            .iter()
            .find(|op| op.kind == kind && op.operation.affix == Affix::Prefix)
    }

    /// The first infix or postfix operator declared for `kind`.
    pub fn trailing_operator(&self, kind: K) -> Option<&Operator<K, OUT>> {
        self.operators
            .iter()
            .find(|op| op.kind == kind && op.operation.affix != Affix::Prefix)
    }

    /// Iterate over operators of one affix.
    pub fn operators_with(&self, affix: Affix) -> impl Iterator<Item = &Operator<K, OUT>> {
        self.operators
            .iter()
            .filter(move |op| op.operation.affix == affix)
    }

    /// True if some alternative matches the empty input.
    pub fn can_derive_empty(&self, nullable: &impl Fn(&str) -> bool) -> bool {
        self.rules.iter().any(|rule| rule.can_derive_empty(nullable))
    }
}
