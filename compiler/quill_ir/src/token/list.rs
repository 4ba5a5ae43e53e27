//! Indexable token sequence.

use super::{Token, TokenKind};
use crate::{Position, Span};

/// A finite, indexable token sequence.
///
/// Matching only sees the tokens before the first end-of-stream marker, so
/// lexers that append an explicit EOS token and lexers that don't behave
/// the same. The end position is where "unexpected end of input" errors
/// are reported.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct TokenList<K> {
    tokens: Vec<Token<K>>,
    /// Number of matchable tokens (index of the first EOS marker).
    limit: usize,
    end: Position,
}

impl<K: TokenKind> TokenList<K> {
    /// Create from a Vec of tokens.
    ///
    /// The end position is taken from the first end-of-stream marker if
    /// there is one, otherwise it is the position right after the last token.
    pub fn new(tokens: Vec<Token<K>>) -> Self {
        let limit = tokens
            .iter()
            .position(|t| t.is_end_of_stream)
            .unwrap_or(tokens.len());
        let end = match tokens.get(limit) {
            Some(eos) => eos.position,
            None => tokens
                .last()
                .map_or(Position::START, Token::end_position),
        };
        TokenList { tokens, limit, end }
    }

    /// Create from tokens with an explicit end-of-input position.
    pub fn with_end(tokens: Vec<Token<K>>, end: Position) -> Self {
        let mut list = TokenList::new(tokens);
        list.end = end;
        list
    }

    /// Create an empty list.
    pub fn empty() -> Self {
        TokenList::new(Vec::new())
    }

    /// Number of matchable tokens.
    #[inline]
    pub fn len(&self) -> usize {
        self.limit
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.limit == 0
    }

    /// Get the matchable token at `index`.
    #[inline]
    pub fn get(&self, index: usize) -> Option<&Token<K>> {
        if index < self.limit {
            self.tokens.get(index)
        } else {
            None
        }
    }

    /// Position where the input ends.
    #[inline]
    pub fn end_position(&self) -> Position {
        self.end
    }

    /// Zero-length span at the end of input.
    pub fn end_span(&self) -> Span {
        Span::point(self.end.offset)
    }

    /// Iterate over the matchable tokens.
    pub fn iter(&self) -> std::slice::Iter<'_, Token<K>> {
        self.tokens[..self.limit].iter()
    }

    /// Kinds of the matchable tokens, mostly useful in tests.
    pub fn kinds(&self) -> Vec<K> {
        self.iter().map(|t| t.kind).collect()
    }
}

impl<K: TokenKind> From<Vec<Token<K>>> for TokenList<K> {
    fn from(tokens: Vec<Token<K>>) -> Self {
        TokenList::new(tokens)
    }
}

impl<K: TokenKind> FromIterator<Token<K>> for TokenList<K> {
    fn from_iter<I: IntoIterator<Item = Token<K>>>(iter: I) -> Self {
        TokenList::new(iter.into_iter().collect())
    }
}

impl<'a, K: TokenKind> IntoIterator for &'a TokenList<K> {
    type Item = &'a Token<K>;
    type IntoIter = std::slice::Iter<'a, Token<K>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
