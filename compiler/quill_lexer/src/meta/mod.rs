//! Token kinds of the rule notation.

use logos::Logos;

/// Tokens of a rule string such as `expr : term ((PLUS | MINUS) term)* ;`.
#[derive(Logos, Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[logos(skip r"[ \t\r\n]+")]
pub enum MetaKind {
    #[regex(r"[A-Za-z_][A-Za-z0-9_]*")]
    Ident,
    #[regex(r"[0-9]+")]
    Int,
    #[token(":")]
    Colon,
    #[token(";")]
    Semicolon,
    #[token("|")]
    Pipe,
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token("?")]
    Question,
    #[token("*")]
    Star,
    #[token("+")]
    Plus,
    /// `[d]` discard marker.
    #[token("[d]")]
    Discard,
    #[token("%infix")]
    Infix,
    #[token("%prefix")]
    Prefix,
    #[token("%postfix")]
    Postfix,
    #[token("%left")]
    Left,
    #[token("%right")]
    Right,
}

quill_ir::impl_token_kind!(MetaKind {
    Ident,
    Int,
    Colon,
    Semicolon,
    Pipe,
    LParen,
    RParen,
    Question,
    Star,
    Plus,
    Discard,
    Infix,
    Prefix,
    Postfix,
    Left,
    Right,
});

#[cfg(test)]
mod tests;
