//! Rule-string parsing.
//!
//! Rule strings are parsed by Quill itself: [`MetaGrammar`] is a hard-wired
//! configuration over [`MetaKind`] tokens, run by the EBNF engine and
//! reduced by callbacks that build [`RuleSyntax`] values.
//!
//! ```text
//! rule        := IDENT ':' body ';'?
//! body        := operator | alternation | (nothing)
//! operator    := ('%infix' | '%prefix' | '%postfix') IDENT ('%left' | '%right')? INT
//! alternation := sequence ('|' sequence)*
//! sequence    := clause+
//! clause      := atom ('?' | '*' | '+')?
//! atom        := IDENT '[d]'? | '(' alternation ')'
//! ```

mod grammar;

use std::fmt;

use quill_ir::{Affix, Associativity, GrammarNode, ParserConfiguration, TokenKind};
use quill_lexer::{Lexer, LogosLexer, MetaKind};

use crate::engine::{EbnfRecursiveDescentParser, SyntaxParser};
use crate::error::ParseError;
use crate::reduce::reduce;

/// A parsed rule string.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct RuleSyntax<K> {
    /// The non-terminal the rule belongs to.
    pub name: String,
    pub body: RuleBody<K>,
}

#[derive(Clone, Eq, PartialEq, Debug)]
pub enum RuleBody<K> {
    /// Top-level alternatives, each a clause sequence. An empty rule is a
    /// single empty sequence.
    Clauses(Vec<Vec<GrammarNode<K>>>),
    /// An operator declaration for an expression head.
    Operator(OperatorSyntax),
}

impl<K> RuleBody<K> {
    pub(crate) fn epsilon() -> Self {
        RuleBody::Clauses(vec![Vec::new()])
    }
}

/// `%infix PLUS %left 10`, before the symbol and precedence are resolved.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct OperatorSyntax {
    pub affix: Affix,
    pub symbol: String,
    pub associativity: Option<Associativity>,
    pub precedence: String,
}

/// Intermediate results of the meta-grammar callbacks.
#[derive(Clone, Eq, PartialEq, Debug)]
pub enum MetaValue<K> {
    Rule(RuleSyntax<K>),
    Body(RuleBody<K>),
    Operator(OperatorSyntax),
    Branches(Vec<Vec<GrammarNode<K>>>),
    Sequence(Vec<GrammarNode<K>>),
    Clause(GrammarNode<K>),
}

/// Parser for rule strings whose identifiers resolve against `K`.
pub struct MetaGrammar<K: TokenKind> {
    lexer: LogosLexer<MetaKind>,
    engine: EbnfRecursiveDescentParser<MetaKind, MetaValue<K>>,
}

impl<K: TokenKind> MetaGrammar<K> {
    pub fn new() -> Self {
        MetaGrammar {
            lexer: LogosLexer::new(),
            engine: EbnfRecursiveDescentParser::new(std::sync::Arc::new(grammar::configuration())),
        }
    }

    /// Parse one rule string.
    ///
    /// Identifiers naming a kind of `K` become terminals; all others are
    /// non-terminal references.
    pub fn parse(&self, rule_string: &str) -> Result<RuleSyntax<K>, Vec<ParseError<MetaKind>>> {
        let tokens = self
            .lexer
            .tokenize(rule_string)
            .map_err(|err| vec![ParseError::from(err)])?;
        let tree = self.engine.parse(&tokens, grammar::ROOT)?;
        match reduce(tree).map_err(|err| vec![err])? {
            MetaValue::Rule(rule) => Ok(rule),
            // The root callback always builds a rule.
            _ => Err(vec![ParseError::MissingCallback {
                name: grammar::ROOT.to_string(),
            }]),
        }
    }

    /// The meta-grammar itself.
    pub fn configuration(&self) -> &ParserConfiguration<MetaKind, MetaValue<K>> {
        self.engine.configuration()
    }
}

impl<K: TokenKind> Default for MetaGrammar<K> {
    fn default() -> Self {
        MetaGrammar::new()
    }
}

impl<K: TokenKind> fmt::Debug for MetaGrammar<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MetaGrammar")
            .field("non_terminals", &self.configuration().len())
            .finish()
    }
}

#[cfg(test)]
mod tests;
