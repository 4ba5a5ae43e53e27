//! Recursive-descent syntax parsing.
//!
//! Both engines share one matcher:
//! - Alternatives are tried in declaration order; the first full match wins.
//! - A failed alternative restores the cursor to where the non-terminal
//!   started, so the next alternative sees the same input.
//! - Every failed terminal expectation is recorded by token index. The
//!   reported error sits at the furthest index and lists every kind expected
//!   there, in first-seen order.
//! - Expression heads are matched by precedence climbing (`expr.rs`).
//!
//! The EBNF engine additionally matches groups, options, repetitions and
//! alternations (`ebnf.rs`).
//!
//! Matching never touches callbacks; reduction runs on the finished tree.

mod ebnf;
mod expr;

use std::fmt;
use std::sync::Arc;

use quill_ir::{GrammarNode, NonTerminal, ParserConfiguration, Rule, SyntaxNode, TokenKind, TokenList};
use tracing::trace;

use crate::cursor::Cursor;
use crate::error::{FailureTracker, ParseError};
use crate::stack::ensure_sufficient_stack;

/// Which matcher a parser is built with.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub enum ParserKind {
    /// Rules are plain sequences of terminal and non-terminal references.
    Plain,
    /// Rules may also use `( )`, `|`, `?`, `*` and `+`.
    #[default]
    Ebnf,
}

impl fmt::Display for ParserKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParserKind::Plain => write!(f, "plain"),
            ParserKind::Ebnf => write!(f, "ebnf"),
        }
    }
}

/// Turns a token sequence into a syntax tree for one configuration.
pub trait SyntaxParser<K: TokenKind, OUT>: Send + Sync {
    fn configuration(&self) -> &ParserConfiguration<K, OUT>;

    /// Match `tokens` against the non-terminal `start`.
    ///
    /// The whole input must be consumed.
    fn parse(
        &self,
        tokens: &TokenList<K>,
        start: &str,
    ) -> Result<SyntaxNode<K, OUT>, Vec<ParseError<K>>>;
}

/// Parser for grammars made of plain clause sequences.
pub struct RecursiveDescentParser<K, OUT> {
    configuration: Arc<ParserConfiguration<K, OUT>>,
}

impl<K: TokenKind, OUT> RecursiveDescentParser<K, OUT> {
    pub fn new(configuration: Arc<ParserConfiguration<K, OUT>>) -> Self {
        RecursiveDescentParser { configuration }
    }
}

impl<K: TokenKind, OUT> SyntaxParser<K, OUT> for RecursiveDescentParser<K, OUT> {
    fn configuration(&self) -> &ParserConfiguration<K, OUT> {
        &self.configuration
    }

    fn parse(
        &self,
        tokens: &TokenList<K>,
        start: &str,
    ) -> Result<SyntaxNode<K, OUT>, Vec<ParseError<K>>> {
        run(&self.configuration, tokens, start, ParserKind::Plain)
    }
}

/// Parser for grammars using the EBNF combinators.
pub struct EbnfRecursiveDescentParser<K, OUT> {
    configuration: Arc<ParserConfiguration<K, OUT>>,
}

impl<K: TokenKind, OUT> EbnfRecursiveDescentParser<K, OUT> {
    pub fn new(configuration: Arc<ParserConfiguration<K, OUT>>) -> Self {
        EbnfRecursiveDescentParser { configuration }
    }
}

impl<K: TokenKind, OUT> SyntaxParser<K, OUT> for EbnfRecursiveDescentParser<K, OUT> {
    fn configuration(&self) -> &ParserConfiguration<K, OUT> {
        &self.configuration
    }

    fn parse(
        &self,
        tokens: &TokenList<K>,
        start: &str,
    ) -> Result<SyntaxNode<K, OUT>, Vec<ParseError<K>>> {
        run(&self.configuration, tokens, start, ParserKind::Ebnf)
    }
}

/// Build the engine for `kind`.
pub fn syntax_parser<K: TokenKind, OUT: 'static>(
    kind: ParserKind,
    configuration: Arc<ParserConfiguration<K, OUT>>,
) -> Box<dyn SyntaxParser<K, OUT>> {
    match kind {
        ParserKind::Plain => Box::new(RecursiveDescentParser::new(configuration)),
        ParserKind::Ebnf => Box::new(EbnfRecursiveDescentParser::new(configuration)),
    }
}

fn run<K: TokenKind, OUT>(
    configuration: &ParserConfiguration<K, OUT>,
    tokens: &TokenList<K>,
    start: &str,
    kind: ParserKind,
) -> Result<SyntaxNode<K, OUT>, Vec<ParseError<K>>> {
    if !configuration.contains(start) {
        return Err(vec![ParseError::UnknownStartingRule {
            name: start.to_string(),
        }]);
    }

    let mut matcher = Matcher::new(configuration, tokens, kind);
    match matcher.non_terminal(start) {
        Some(tree) if matcher.cursor.is_at_end() => Ok(tree),
        Some(_) => {
            trace!(
                position = matcher.cursor.position(),
                "input left over after a full match"
            );
            matcher.failures.reach(matcher.cursor.position());
            Err(vec![matcher.into_error()])
        }
        None => Err(vec![matcher.into_error()]),
    }
}

/// Per-parse matching state over a shared configuration.
struct Matcher<'a, K, OUT> {
    configuration: &'a ParserConfiguration<K, OUT>,
    cursor: Cursor<'a, K>,
    failures: FailureTracker<K>,
    kind: ParserKind,
}

impl<'a, K: TokenKind, OUT> Matcher<'a, K, OUT> {
    fn new(
        configuration: &'a ParserConfiguration<K, OUT>,
        tokens: &'a TokenList<K>,
        kind: ParserKind,
    ) -> Self {
        Matcher {
            configuration,
            cursor: Cursor::new(tokens),
            failures: FailureTracker::new(),
            kind,
        }
    }

    fn into_error(self) -> ParseError<K> {
        let cursor = self.cursor;
        self.failures
            .into_error(|index| {
                let (position, span) = cursor.location_of(index);
                (cursor.tokens().get(index).cloned(), position, span)
            })
            .into()
    }

    /// Match the named non-terminal at the cursor.
    ///
    /// On failure the cursor is back where it started.
    fn non_terminal(&mut self, name: &str) -> Option<SyntaxNode<K, OUT>> {
        let configuration = self.configuration;
        let Some(non_terminal) = configuration.get(name) else {
            trace!(non_terminal = name, "reference to undefined non-terminal");
            self.failures.reach(self.cursor.position());
            return None;
        };
        ensure_sufficient_stack(|| {
            if non_terminal.is_expression() {
                self.expression(non_terminal, 0)
            } else {
                self.alternatives(non_terminal)
            }
        })
    }

    /// Try each rule of `non_terminal` in order.
    fn alternatives(&mut self, non_terminal: &'a NonTerminal<K, OUT>) -> Option<SyntaxNode<K, OUT>> {
        let start = self.cursor.snapshot();
        for rule in &non_terminal.rules {
            trace!(
                non_terminal = %non_terminal.name,
                rule = %rule,
                position = self.cursor.position(),
                "trying alternative"
            );
            if let Some(node) = self.rule(rule) {
                return Some(node);
            }
            trace!(
                non_terminal = %non_terminal.name,
                failed_at = self.cursor.position(),
                furthest = ?self.failures.furthest(),
                "backtracking"
            );
            self.cursor.restore(start);
        }
        None
    }

    fn rule(&mut self, rule: &'a Rule<K, OUT>) -> Option<SyntaxNode<K, OUT>> {
        let mut node = SyntaxNode::rule(rule.non_terminal.as_str(), rule.callback.clone());
        for clause in &rule.clauses {
            self.clause(clause, &mut node)?;
        }
        Some(node)
    }

    /// Match one clause, appending what it matched to `parent`.
    ///
    /// On failure the cursor may have moved; callers restore it.
    fn clause(&mut self, clause: &'a GrammarNode<K>, parent: &mut SyntaxNode<K, OUT>) -> Option<()> {
        match clause {
            GrammarNode::Terminal { kind, discarded } => {
                let token = self.terminal(*kind)?;
                parent.push_token(token.clone(), *discarded);
                Some(())
            }
            GrammarNode::NonTerminal { name, discarded } => {
                let mut child = self.non_terminal(name)?;
                child.discarded = *discarded;
                parent.push_node(child);
                Some(())
            }
            _ if self.kind == ParserKind::Ebnf => self.combinator(clause, parent),
            _ => {
                trace!(clause = %clause, "EBNF clause in a plain grammar");
                self.failures.reach(self.cursor.position());
                None
            }
        }
    }

    /// Consume a token of `kind`, or record the expectation.
    fn terminal(&mut self, kind: K) -> Option<&'a quill_ir::Token<K>> {
        let token = self.cursor.eat(kind);
        if token.is_none() {
            self.failures.expect(self.cursor.position(), kind);
        }
        token
    }
}
