//! Adapter from `logos` token enums to [`TokenList`].

use std::fmt;
use std::marker::PhantomData;

use logos::Logos;
use quill_ir::{Position, Span, Token, TokenKind, TokenList};

use crate::{LexicalError, Lexer};

/// Lexes with the `logos` automaton derived for `K`.
///
/// Tokens get 1-based line/column positions; skipped input (whitespace,
/// comments) still advances them. The first unrecognized slice stops
/// lexing with a [`LexicalError`].
pub struct LogosLexer<K> {
    _kind: PhantomData<fn() -> K>,
}

impl<K> LogosLexer<K>
where
    K: TokenKind + for<'s> Logos<'s, Source = str, Extras = ()>,
{
    pub fn new() -> Self {
        LogosLexer { _kind: PhantomData }
    }
}

impl<K> Default for LogosLexer<K>
where
    K: TokenKind + for<'s> Logos<'s, Source = str, Extras = ()>,
{
    fn default() -> Self {
        LogosLexer::new()
    }
}

impl<K> Clone for LogosLexer<K> {
    fn clone(&self) -> Self {
        LogosLexer { _kind: PhantomData }
    }
}

impl<K> fmt::Debug for LogosLexer<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("LogosLexer")
    }
}

impl<K> Lexer<K> for LogosLexer<K>
where
    K: TokenKind + for<'s> Logos<'s, Source = str, Extras = ()>,
{
    fn tokenize(&self, source: &str) -> Result<TokenList<K>, LexicalError> {
        let mut tokens = Vec::new();
        let mut lexer = K::lexer(source);
        let mut position = Position::START;
        let mut consumed = 0usize;

        while let Some(result) = lexer.next() {
            let range = lexer.span();
            position = position.advance_over(&source[consumed..range.start]);
            let slice = lexer.slice();
            let span = Span::from_range(range.clone());

            match result {
                Ok(kind) => tokens.push(Token::new(kind, slice, position, span)),
                Err(_) => return Err(LexicalError::new(slice, position, span)),
            }

            position = position.advance_over(slice);
            consumed = range.end;
        }

        let end = position.advance_over(&source[consumed..]);
        Ok(TokenList::with_end(tokens, end))
    }
}
