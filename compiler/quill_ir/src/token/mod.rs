//! Token types handed over by a lexer collaborator.
//!
//! Quill never produces tokens itself (apart from its own rule-string
//! lexer); it only reads them by index so failed alternatives can rewind.

mod list;

pub use list::TokenList;

use std::fmt;
use std::hash::Hash;

use crate::{Position, Span};

/// A token kind supplied by the host grammar.
///
/// Rule strings refer to kinds by name, so every kind must be able to
/// round-trip through [`TokenKind::name`] and [`TokenKind::from_name`].
/// For fieldless enums use [`impl_token_kind!`](crate::impl_token_kind).
pub trait TokenKind: Copy + Eq + Hash + fmt::Debug + Send + Sync + 'static {
    /// Name used for this kind in rule strings and diagnostics.
    fn name(&self) -> &'static str;

    /// Resolve a rule-string identifier to a kind.
    ///
    /// Identifiers that do not resolve are treated as non-terminal references.
    fn from_name(name: &str) -> Option<Self>;
}

/// A token with its text and location.
#[derive(Clone, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Token<K> {
    pub kind: K,
    /// Source text of the token.
    pub value: String,
    pub position: Position,
    pub span: Span,
    /// Marks an explicit end-of-stream token; it never matches a terminal.
    pub is_end_of_stream: bool,
}

impl<K: TokenKind> Token<K> {
    #[inline]
    pub fn new(kind: K, value: impl Into<String>, position: Position, span: Span) -> Self {
        Token {
            kind,
            value: value.into(),
            position,
            span,
            is_end_of_stream: false,
        }
    }

    /// Create an explicit end-of-stream marker.
    pub fn end_of_stream(kind: K, position: Position) -> Self {
        Token {
            kind,
            value: String::new(),
            position,
            span: Span::point(position.offset),
            is_end_of_stream: true,
        }
    }

    /// Create a token with a dummy location, for tests and synthesized input.
    pub fn dummy(kind: K, value: impl Into<String>) -> Self {
        Token::new(kind, value, Position::START, Span::DUMMY)
    }

    /// Position right after this token's text.
    pub fn end_position(&self) -> Position {
        self.position.advance_over(&self.value)
    }
}

impl<K: fmt::Debug> fmt::Debug for Token<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_end_of_stream {
            write!(f, "<eos> @ {}:{}", self.position.line, self.position.column)
        } else {
            write!(
                f,
                "{:?} {:?} @ {}:{}",
                self.kind,
                self.value,
                self.position.line,
                self.position.column
            )
        }
    }
}

#[cfg(test)]
mod tests;
