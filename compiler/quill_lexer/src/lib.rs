//! Lexing for the Quill parser generator.
//!
//! Quill parsers consume a [`TokenList`]; where it comes from is up to the
//! host. This crate defines the [`Lexer`] seam, a [`LogosLexer`] that adapts
//! any `logos` token enum, and [`MetaKind`], the token kinds of rule strings.

mod logos_lexer;
mod meta;

pub use logos_lexer::LogosLexer;
pub use meta::MetaKind;

use quill_ir::{Position, Span, TokenKind, TokenList};

/// Input a lexer could not turn into a token.
#[derive(Clone, Eq, PartialEq, Hash, Debug, thiserror::Error)]
#[error("unrecognized input {text:?} at {position}")]
pub struct LexicalError {
    /// The unrecognized text.
    pub text: String,
    pub position: Position,
    pub span: Span,
}

impl LexicalError {
    pub fn new(text: impl Into<String>, position: Position, span: Span) -> Self {
        LexicalError {
            text: text.into(),
            position,
            span,
        }
    }
}

/// Turns source text into tokens.
///
/// Implementations are shared by every parse of a parser, possibly from
/// several threads at once.
pub trait Lexer<K: TokenKind>: Send + Sync {
    fn tokenize(&self, source: &str) -> Result<TokenList<K>, LexicalError>;
}
