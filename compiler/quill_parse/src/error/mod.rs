//! Parse errors.
//!
//! A failed parse reports where matching got furthest and which token kinds
//! would have let it continue there. Message text comes from a
//! [`Catalog`], so the same error renders in any supported locale.

use std::fmt;

use quill_diagnostic::emitter::SourceReport;
use quill_diagnostic::{Catalog, ErrorCode, MessageId};
use quill_ir::{Position, Span, Token, TokenKind};
use quill_lexer::LexicalError;
use smallvec::SmallVec;

/// Expected token kinds, in the order they were first recorded.
pub type ExpectedKinds<K> = SmallVec<[K; 8]>;

/// Matching stopped at a token (or the end of input) no alternative accepts.
#[derive(Clone, Eq, PartialEq, Hash)]
pub struct UnexpectedTokenSyntaxError<K> {
    /// The offending token; `None` at end of input.
    pub unexpected: Option<Token<K>>,
    pub position: Position,
    pub span: Span,
    pub expected: ExpectedKinds<K>,
}

impl<K: TokenKind> UnexpectedTokenSyntaxError<K> {
    #[inline]
    pub fn is_end_of_input(&self) -> bool {
        self.unexpected.is_none()
    }

    #[inline]
    pub fn line(&self) -> u32 {
        self.position.line
    }

    #[inline]
    pub fn column(&self) -> u32 {
        self.position.column
    }

    /// Expected kinds as a comma-separated list of names.
    pub fn expected_names(&self) -> String {
        let names: Vec<&str> = self.expected.iter().map(TokenKind::name).collect();
        names.join(", ")
    }

    pub fn code(&self) -> ErrorCode {
        if self.is_end_of_input() {
            ErrorCode::E1002
        } else {
            ErrorCode::E1001
        }
    }

    /// Pick one of the four message templates.
    pub fn message_id(&self) -> MessageId {
        match (self.is_end_of_input(), self.expected.is_empty()) {
            (true, true) => MessageId::UnexpectedEos,
            (true, false) => MessageId::UnexpectedEosExpecting,
            (false, true) => MessageId::UnexpectedToken,
            (false, false) => MessageId::UnexpectedTokenExpecting,
        }
    }

    pub fn message(&self, catalog: &Catalog) -> String {
        let (text, kind) = match &self.unexpected {
            Some(token) => (token.value.as_str(), token.kind.name()),
            None => ("", ""),
        };
        let expected = self.expected_names();
        catalog.text(self.message_id(), &[text, kind, expected.as_str()])
    }
}

impl<K: TokenKind> fmt::Debug for UnexpectedTokenSyntaxError<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UnexpectedTokenSyntaxError")
            .field("unexpected", &self.unexpected)
            .field("position", &self.position)
            .field("expected", &self.expected)
            .finish()
    }
}

impl<K: TokenKind> fmt::Display for UnexpectedTokenSyntaxError<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message(&Catalog::english()))
    }
}

impl<K: TokenKind> std::error::Error for UnexpectedTokenSyntaxError<K> {}

/// Any failure of a single parse call.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum ParseError<K: TokenKind> {
    UnexpectedToken(UnexpectedTokenSyntaxError<K>),
    Lexical(LexicalError),
    /// The requested starting non-terminal does not exist.
    UnknownStartingRule { name: String },
    /// A syntax tree node reached reduction without a callback.
    MissingCallback { name: String },
}

impl<K: TokenKind> ParseError<K> {
    pub fn code(&self) -> ErrorCode {
        match self {
            ParseError::UnexpectedToken(err) => err.code(),
            ParseError::Lexical(_) => ErrorCode::E1003,
            ParseError::UnknownStartingRule { .. } => ErrorCode::E2004,
            ParseError::MissingCallback { .. } => ErrorCode::E1004,
        }
    }

    /// Where the error was detected. Errors rank by this position.
    pub fn position(&self) -> Position {
        match self {
            ParseError::UnexpectedToken(err) => err.position,
            ParseError::Lexical(err) => err.position,
            ParseError::UnknownStartingRule { .. } | ParseError::MissingCallback { .. } => {
                Position::START
            }
        }
    }

    pub fn span(&self) -> Span {
        match self {
            ParseError::UnexpectedToken(err) => err.span,
            ParseError::Lexical(err) => err.span,
            ParseError::UnknownStartingRule { .. } | ParseError::MissingCallback { .. } => {
                Span::DUMMY
            }
        }
    }

    #[inline]
    pub fn line(&self) -> u32 {
        self.position().line
    }

    #[inline]
    pub fn column(&self) -> u32 {
        self.position().column
    }

    pub fn as_unexpected(&self) -> Option<&UnexpectedTokenSyntaxError<K>> {
        match self {
            ParseError::UnexpectedToken(err) => Some(err),
            _ => None,
        }
    }

    pub fn message(&self, catalog: &Catalog) -> String {
        match self {
            ParseError::UnexpectedToken(err) => err.message(catalog),
            ParseError::Lexical(err) => catalog.text(MessageId::UnrecognizedInput, &[err.text.as_str()]),
            ParseError::UnknownStartingRule { name } => {
                catalog.text(MessageId::MissingStartingRule, &[name.as_str()])
            }
            ParseError::MissingCallback { name } => {
                catalog.text(MessageId::MissingCallback, &[name.as_str()])
            }
        }
    }

    /// Render a source-annotated report.
    pub fn report(&self, source: &str, catalog: &Catalog) -> String {
        let mut report = SourceReport::new(self.code(), self.message(catalog), self.span().to_range());
        if let ParseError::UnexpectedToken(err) = self {
            if !err.expected.is_empty() {
                report = report.with_label(err.expected_names());
            }
        }
        report.render(source)
    }
}

impl<K: TokenKind> From<UnexpectedTokenSyntaxError<K>> for ParseError<K> {
    fn from(err: UnexpectedTokenSyntaxError<K>) -> Self {
        ParseError::UnexpectedToken(err)
    }
}

impl<K: TokenKind> From<LexicalError> for ParseError<K> {
    fn from(err: LexicalError) -> Self {
        ParseError::Lexical(err)
    }
}

impl<K: TokenKind> fmt::Display for ParseError<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message(&Catalog::english()))
    }
}

impl<K: TokenKind> std::error::Error for ParseError<K> {}

/// Sort errors furthest first, keeping discovery order among equals.
pub fn sort_furthest_first<K: TokenKind>(errors: &mut [ParseError<K>]) {
    errors.sort_by(|a, b| b.position().cmp(&a.position()));
}

/// Records the furthest token index any expectation failed at.
///
/// Expectations at the same index are merged; earlier indices are dropped.
pub(crate) struct FailureTracker<K> {
    index: Option<usize>,
    expected: ExpectedKinds<K>,
}

impl<K: TokenKind> FailureTracker<K> {
    pub(crate) fn new() -> Self {
        FailureTracker {
            index: None,
            expected: SmallVec::new(),
        }
    }

    /// `kind` would have matched at `index`.
    pub(crate) fn expect(&mut self, index: usize, kind: K) {
        self.reach(index);
        if self.index == Some(index) && !self.expected.contains(&kind) {
            self.expected.push(kind);
        }
    }

    /// Matching stopped at `index` without a specific expectation.
    pub(crate) fn reach(&mut self, index: usize) {
        match self.index {
            Some(furthest) if furthest >= index => {}
            _ => {
                self.index = Some(index);
                self.expected.clear();
            }
        }
    }

    pub(crate) fn furthest(&self) -> Option<usize> {
        self.index
    }

    pub(crate) fn into_error(
        self,
        location: impl FnOnce(usize) -> (Option<Token<K>>, Position, Span),
    ) -> UnexpectedTokenSyntaxError<K> {
        let (unexpected, position, span) = location(self.index.unwrap_or(0));
        UnexpectedTokenSyntaxError {
            unexpected,
            position,
            span,
            expected: self.expected,
        }
    }
}
