//! Cross-module tests and shared fixtures.
//!
//! - `arithmetic`: end-to-end grammars built from rule strings
//! - `grammar`: build-time validation
//! - `properties`: proptest properties for precedence climbing and
//!   left-recursion detection
//!
//! Unit tests of single modules live next to them (`engine/tests.rs`, ...)
//! and share the `Tok` fixture below.

#![allow(clippy::unwrap_used, clippy::expect_used)]


use logos::Logos;
use quill_ir::{Position, Span, Token, TokenKind, TokenList};
use quill_lexer::{Lexer, LogosLexer};

/// Token kinds of the test grammars.
///
/// Rule strings refer to them by their upper-case names (`NUM`, `PLUS`).
#[derive(Logos, Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[logos(skip r"[ \t\r\n]+")]
pub(crate) enum Tok {
    #[regex(r"[0-9]+")]
    Num,
    #[regex(r"[a-z][a-z0-9_]*")]
    Ident,
    #[token("+")]
    Plus,
    #[token("-")]
    Minus,
    #[token("*")]
    Star,
    #[token("/")]
    Slash,
    #[token("^")]
    Caret,
    #[token("!")]
    Bang,
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token(",")]
    Comma,
}

impl TokenKind for Tok {
    fn name(&self) -> &'static str {
        match self {
            Tok::Num => "NUM",
            Tok::Ident => "IDENT",
            Tok::Plus => "PLUS",
            Tok::Minus => "MINUS",
            Tok::Star => "STAR",
            Tok::Slash => "SLASH",
            Tok::Caret => "CARET",
            Tok::Bang => "BANG",
            Tok::LParen => "LPAREN",
            Tok::RParen => "RPAREN",
            Tok::Comma => "COMMA",
        }
    }

    fn from_name(name: &str) -> Option<Self> {
        Some(match name {
            "NUM" => Tok::Num,
            "IDENT" => Tok::Ident,
            "PLUS" => Tok::Plus,
            "MINUS" => Tok::Minus,
            "STAR" => Tok::Star,
            "SLASH" => Tok::Slash,
            "CARET" => Tok::Caret,
            "BANG" => Tok::Bang,
            "LPAREN" => Tok::LParen,
            "RPAREN" => Tok::RParen,
            "COMMA" => Tok::Comma,
            _ => return None,
        })
    }
}

/// A single-line token starting at 1-based `column`.
pub(crate) fn tok(kind: Tok, value: &str, column: u32) -> Token<Tok> {
    let offset = column - 1;
    let len = u32::try_from(value.len()).unwrap();
    Token::new(
        kind,
        value,
        Position::new(1, column, offset),
        Span::new(offset, offset + len),
    )
}

pub(crate) fn lex(source: &str) -> TokenList<Tok> {
    LogosLexer::<Tok>::new().tokenize(source).unwrap()
}
