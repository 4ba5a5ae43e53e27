//! Grammar model.
//!
//! A rule string such as `expr : term ((PLUS | MINUS) term)*` becomes one
//! [`Rule`] whose clauses are [`GrammarNode`]s. Rules for the same name are
//! collected into a [`NonTerminal`], and all non-terminals form the
//! [`ParserConfiguration`].

mod configuration;
mod operation;
mod rule;

pub use configuration::ParserConfiguration;
pub use operation::{Affix, Associativity, OperationMetadata};
pub use rule::{NonTerminal, Operator, Rule};

use std::fmt;

use crate::TokenKind;

/// One clause within a rule.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum GrammarNode<K> {
    /// Matches one token of `kind`.
    Terminal { kind: K, discarded: bool },
    /// Matches the named non-terminal.
    NonTerminal { name: String, discarded: bool },
    /// Matches every child in order.
    Group(Vec<GrammarNode<K>>),
    /// Matches the inner clause or nothing.
    Optional(Box<GrammarNode<K>>),
    /// Matches the inner clause as many times as possible, possibly zero.
    ZeroOrMore(Box<GrammarNode<K>>),
    /// Matches the inner clause at least once.
    OneOrMore(Box<GrammarNode<K>>),
    /// Matches the first branch that succeeds.
    Alternation(Vec<GrammarNode<K>>),
}

impl<K: TokenKind> GrammarNode<K> {
    pub fn terminal(kind: K) -> Self {
        GrammarNode::Terminal {
            kind,
            discarded: false,
        }
    }

    pub fn non_terminal(name: impl Into<String>) -> Self {
        GrammarNode::NonTerminal {
            name: name.into(),
            discarded: false,
        }
    }

    /// Mark a terminal or non-terminal reference as discarded.
    ///
    /// Other clauses are returned unchanged.
    #[must_use]
    pub fn discard(self) -> Self {
        match self {
            GrammarNode::Terminal { kind, .. } => GrammarNode::Terminal {
                kind,
                discarded: true,
            },
            GrammarNode::NonTerminal { name, .. } => GrammarNode::NonTerminal {
                name,
                discarded: true,
            },
            other => other,
        }
    }

    pub fn optional(inner: GrammarNode<K>) -> Self {
        GrammarNode::Optional(Box::new(inner))
    }

    pub fn zero_or_more(inner: GrammarNode<K>) -> Self {
        GrammarNode::ZeroOrMore(Box::new(inner))
    }

    pub fn one_or_more(inner: GrammarNode<K>) -> Self {
        GrammarNode::OneOrMore(Box::new(inner))
    }

    /// True for clauses the plain recursive-descent parser understands.
    pub fn is_plain(&self) -> bool {
        matches!(
            self,
            GrammarNode::Terminal { .. } | GrammarNode::NonTerminal { .. }
        )
    }

    pub fn is_discarded(&self) -> bool {
        matches!(
            self,
            GrammarNode::Terminal {
                discarded: true,
                ..
            } | GrammarNode::NonTerminal {
                discarded: true,
                ..
            }
        )
    }

    /// Visit every non-terminal name referenced anywhere in this clause.
    pub fn for_each_reference<'a>(&'a self, f: &mut impl FnMut(&'a str)) {
        match self {
            GrammarNode::Terminal { .. } => {}
            GrammarNode::NonTerminal { name, .. } => f(name.as_str()),
            GrammarNode::Group(children) | GrammarNode::Alternation(children) => {
                for child in children {
                    child.for_each_reference(f);
                }
            }
            GrammarNode::Optional(inner)
            | GrammarNode::ZeroOrMore(inner)
            | GrammarNode::OneOrMore(inner) => inner.for_each_reference(f),
        }
    }

    /// Whether this clause can match without consuming a token.
    ///
    /// `nullable` answers the same question for non-terminal references.
    pub fn can_derive_empty(&self, nullable: &impl Fn(&str) -> bool) -> bool {
        match self {
            GrammarNode::Terminal { .. } => false,
            GrammarNode::NonTerminal { name, .. } => nullable(name.as_str()),
            GrammarNode::Group(children) => children.iter().all(|c| c.can_derive_empty(nullable)),
            GrammarNode::Alternation(branches) => {
                branches.iter().any(|b| b.can_derive_empty(nullable))
            }
            GrammarNode::Optional(_) | GrammarNode::ZeroOrMore(_) => true,
            GrammarNode::OneOrMore(inner) => inner.can_derive_empty(nullable),
        }
    }

    /// Non-terminals that can appear as the leftmost symbol of this clause.
    ///
    /// Used by the left-recursion checker to build its edge set.
    pub fn leftmost_references<'a>(
        &'a self,
        nullable: &impl Fn(&str) -> bool,
        out: &mut Vec<&'a str>,
    ) {
        match self {
            GrammarNode::Terminal { .. } => {}
            GrammarNode::NonTerminal { name, .. } => out.push(name.as_str()),
            GrammarNode::Group(children) => leftmost_of_sequence(children, nullable, out),
            GrammarNode::Alternation(branches) => {
                for branch in branches {
                    branch.leftmost_references(nullable, out);
                }
            }
            GrammarNode::Optional(inner)
            | GrammarNode::ZeroOrMore(inner)
            | GrammarNode::OneOrMore(inner) => inner.leftmost_references(nullable, out),
        }
    }
}

/// Leftmost non-terminals of a clause sequence, looking past nullable prefixes.
pub(crate) fn leftmost_of_sequence<'a, K: TokenKind>(
    clauses: &'a [GrammarNode<K>],
    nullable: &impl Fn(&str) -> bool,
    out: &mut Vec<&'a str>,
) {
    for clause in clauses {
        clause.leftmost_references(nullable, out);
        if !clause.can_derive_empty(nullable) {
            break;
        }
    }
}

impl<K: TokenKind> fmt::Display for GrammarNode<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GrammarNode::Terminal { kind, discarded } => {
                write!(f, "{}", kind.name())?;
                if *discarded {
                    write!(f, " [d]")?;
                }
                Ok(())
            }
            GrammarNode::NonTerminal { name, discarded } => {
                write!(f, "{name}")?;
                if *discarded {
                    write!(f, " [d]")?;
                }
                Ok(())
            }
            GrammarNode::Group(children) => {
                write!(f, "(")?;
                write_separated(f, children, " ")?;
                write!(f, ")")
            }
            GrammarNode::Alternation(branches) => {
                write!(f, "(")?;
                write_separated(f, branches, " | ")?;
                write!(f, ")")
            }
            GrammarNode::Optional(inner) => write!(f, "{inner}?"),
            GrammarNode::ZeroOrMore(inner) => write!(f, "{inner}*"),
            GrammarNode::OneOrMore(inner) => write!(f, "{inner}+"),
        }
    }
}

pub(crate) fn write_separated<K: TokenKind>(
    f: &mut fmt::Formatter<'_>,
    nodes: &[GrammarNode<K>],
    separator: &str,
) -> fmt::Result {
    for (i, node) in nodes.iter().enumerate() {
        if i > 0 {
            f.write_str(separator)?;
        }
        write!(f, "{node}")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests;
