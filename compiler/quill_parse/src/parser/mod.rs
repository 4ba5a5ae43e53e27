//! The parser handed out by [`ParserBuilder::build`](crate::ParserBuilder::build).
//!
//! A `Parser` is a cheap handle over an immutable configuration, engine
//! and lexer. Clones share them, and any number of parses may run at
//! once; each parse owns its cursor, failure tracker and tree.

use std::fmt;
use std::sync::Arc;

use quill_diagnostic::Catalog;
use quill_ir::{ParserConfiguration, SyntaxNode, TokenKind, TokenList};
use quill_lexer::Lexer;
use rayon::prelude::*;
use tracing::debug;

use crate::engine::{syntax_parser, ParserKind, SyntaxParser};
use crate::error::{sort_furthest_first, ParseError};
use crate::reduce::reduce;

/// Result of one parse: the root callback's output, or every error found.
pub type ParseResult<K, OUT> = Result<OUT, Vec<ParseError<K>>>;

struct ParserInner<K: TokenKind, OUT> {
    kind: ParserKind,
    engine: Box<dyn SyntaxParser<K, OUT>>,
    lexer: Arc<dyn Lexer<K>>,
    catalog: Catalog,
}

/// Parses text with a built grammar.
pub struct Parser<K: TokenKind, OUT> {
    inner: Arc<ParserInner<K, OUT>>,
}

impl<K: TokenKind, OUT: 'static> Parser<K, OUT> {
    pub(crate) fn new(
        kind: ParserKind,
        configuration: Arc<ParserConfiguration<K, OUT>>,
        lexer: Arc<dyn Lexer<K>>,
        catalog: Catalog,
    ) -> Self {
        Parser {
            inner: Arc::new(ParserInner {
                kind,
                engine: syntax_parser(kind, configuration),
                lexer,
                catalog,
            }),
        }
    }
}

impl<K: TokenKind, OUT> Parser<K, OUT> {
    /// Lex and parse `text` from the starting rule.
    pub fn parse(&self, text: &str) -> ParseResult<K, OUT> {
        self.parse_rule(text, self.configuration().starting_rule())
    }

    /// Lex and parse `text` from the non-terminal `start`.
    pub fn parse_rule(&self, text: &str, start: &str) -> ParseResult<K, OUT> {
        let tokens = self.tokenize(text)?;
        self.parse_tokens_from(&tokens, start)
    }

    /// Parse already lexed tokens from the starting rule.
    pub fn parse_tokens(&self, tokens: &TokenList<K>) -> ParseResult<K, OUT> {
        self.parse_tokens_from(tokens, self.configuration().starting_rule())
    }

    /// Lex and match `text` without running any callback.
    pub fn parse_syntax_tree(&self, text: &str) -> Result<SyntaxNode<K, OUT>, Vec<ParseError<K>>> {
        let tokens = self.tokenize(text)?;
        self.syntax_tree(&tokens, self.configuration().starting_rule())
    }

    /// Parse every text in parallel. Results are in input order.
    pub fn parse_batch<S>(&self, texts: &[S]) -> Vec<ParseResult<K, OUT>>
    where
        S: AsRef<str> + Sync,
        OUT: Send,
    {
        debug!(texts = texts.len(), "parsing batch");
        texts.par_iter().map(|text| self.parse(text.as_ref())).collect()
    }

    pub fn configuration(&self) -> &ParserConfiguration<K, OUT> {
        self.inner.engine.configuration()
    }

    pub fn kind(&self) -> ParserKind {
        self.inner.kind
    }

    pub fn catalog(&self) -> Catalog {
        self.inner.catalog
    }

    /// Render a syntax tree as indented text.
    pub fn dump(&self, tree: &SyntaxNode<K, OUT>) -> String {
        tree.dump()
    }

    /// Render `errors` against `source` with this parser's catalog.
    pub fn report(&self, source: &str, errors: &[ParseError<K>]) -> String {
        errors
            .iter()
            .map(|err| err.report(source, &self.inner.catalog))
            .collect()
    }

    fn tokenize(&self, text: &str) -> Result<TokenList<K>, Vec<ParseError<K>>> {
        self.inner
            .lexer
            .tokenize(text)
            .map_err(|err| vec![ParseError::from(err)])
    }

    fn syntax_tree(
        &self,
        tokens: &TokenList<K>,
        start: &str,
    ) -> Result<SyntaxNode<K, OUT>, Vec<ParseError<K>>> {
        debug!(start, tokens = tokens.len(), kind = %self.inner.kind, "parsing");
        self.inner.engine.parse(tokens, start).map_err(|mut errors| {
            sort_furthest_first(&mut errors);
            errors
        })
    }

    fn parse_tokens_from(&self, tokens: &TokenList<K>, start: &str) -> ParseResult<K, OUT> {
        let tree = self.syntax_tree(tokens, start)?;
        reduce(tree).map_err(|err| vec![err])
    }
}

impl<K: TokenKind, OUT> Clone for Parser<K, OUT> {
    fn clone(&self) -> Self {
        Parser {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<K: TokenKind, OUT> fmt::Debug for Parser<K, OUT> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Parser")
            .field("kind", &self.inner.kind)
            .field("starting_rule", &self.configuration().starting_rule())
            .field("non_terminals", &self.configuration().len())
            .finish()
    }
}
