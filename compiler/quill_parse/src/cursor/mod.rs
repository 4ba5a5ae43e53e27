//! Token cursor with O(1) snapshot and restore.

use quill_ir::{Position, Span, Token, TokenKind, TokenList};

/// A saved cursor position.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct CursorSnapshot(usize);

/// Cursor over the matchable tokens of a [`TokenList`].
///
/// Backtracking is a matter of restoring an index; tokens are never copied
/// until they are placed into the tree.
pub struct Cursor<'a, K> {
    tokens: &'a TokenList<K>,
    pos: usize,
}

impl<'a, K: TokenKind> Cursor<'a, K> {
    pub fn new(tokens: &'a TokenList<K>) -> Self {
        Cursor { tokens, pos: 0 }
    }

    /// Get the current position in the token stream.
    #[inline]
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Set the cursor position directly.
    #[inline]
    pub fn set_position(&mut self, pos: usize) {
        debug_assert!(
            pos <= self.tokens.len(),
            "cursor position {} out of bounds (max {})",
            pos,
            self.tokens.len()
        );
        self.pos = pos;
    }

    #[inline]
    pub fn snapshot(&self) -> CursorSnapshot {
        CursorSnapshot(self.pos)
    }

    #[inline]
    pub fn restore(&mut self, snapshot: CursorSnapshot) {
        self.set_position(snapshot.0);
    }

    /// True if `snapshot` was taken at an earlier position.
    #[inline]
    pub fn advanced_since(&self, snapshot: CursorSnapshot) -> bool {
        self.pos > snapshot.0
    }

    /// The current token, or `None` at end of input.
    #[inline]
    pub fn current(&self) -> Option<&'a Token<K>> {
        self.tokens.get(self.pos)
    }

    #[inline]
    pub fn current_kind(&self) -> Option<K> {
        self.current().map(|t| t.kind)
    }

    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.pos >= self.tokens.len()
    }

    /// Check if the current token matches the given kind.
    #[inline]
    pub fn check(&self, kind: K) -> bool {
        self.current_kind() == Some(kind)
    }

    /// Consume and return the current token.
    pub fn advance(&mut self) -> Option<&'a Token<K>> {
        let token = self.current()?;
        self.pos += 1;
        Some(token)
    }

    /// Consume the current token if it has `kind`.
    pub fn eat(&mut self, kind: K) -> Option<&'a Token<K>> {
        if self.check(kind) {
            self.advance()
        } else {
            None
        }
    }

    pub fn tokens(&self) -> &'a TokenList<K> {
        self.tokens
    }

    /// Position and span of the token at `index`, or of the end of input.
    pub fn location_of(&self, index: usize) -> (Position, Span) {
        match self.tokens.get(index) {
            Some(token) => (token.position, token.span),
            None => (self.tokens.end_position(), self.tokens.end_span()),
        }
    }
}

#[cfg(test)]
mod tests;
