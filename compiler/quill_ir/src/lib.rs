//! Quill IR - grammar and syntax tree types.
//!
//! This crate contains the data structures shared by every stage of the
//! Quill parser generator:
//! - Spans and line/column positions
//! - Tokens and `TokenList` produced by a lexer collaborator
//! - The grammar model (`GrammarNode`, `Rule`, `NonTerminal`, `ParserConfiguration`)
//! - Operator metadata for precedence-climbing expression heads
//! - The syntax tree (`SyntaxNode`) and the values handed to reduction callbacks
//!
//! # Design Philosophy
//!
//! - **Closed sums**: grammar clauses are one enum, matched exhaustively.
//! - **Read-only after build**: a `ParserConfiguration` is never mutated by
//!   parsing, so one configuration serves any number of concurrent parses.
//! - **One node type**: expression metadata is an optional attachment on
//!   `SyntaxNode`, not a parallel hierarchy.

/// Compile-time assertion that a type has a specific size.
///
/// Used to prevent accidental size regressions in frequently-allocated types.
#[macro_export]
macro_rules! static_assert_size {
    ($ty:ty, $size:expr) => {
        const _: [(); $size] = [(); ::std::mem::size_of::<$ty>()];
    };
}

/// Implement [`TokenKind`] for a fieldless enum, using the variant names as
/// the names rule strings refer to.
///
/// ```text
/// enum Tok { Num, Plus, Minus }
/// quill_ir::impl_token_kind!(Tok { Num, Plus, Minus });
/// ```
#[macro_export]
macro_rules! impl_token_kind {
    ($ty:ty { $($variant:ident),+ $(,)? }) => {
        impl $crate::TokenKind for $ty {
            fn name(&self) -> &'static str {
                match self {
                    $(Self::$variant => stringify!($variant),)+
                }
            }

            fn from_name(name: &str) -> Option<Self> {
                match name {
                    $(stringify!($variant) => Some(Self::$variant),)+
                    _ => None,
                }
            }
        }
    };
}

mod grammar;
mod span;
pub mod syntax;
mod token;
mod value;

pub use grammar::{
    Affix, Associativity, GrammarNode, NonTerminal, OperationMetadata, Operator,
    ParserConfiguration, Rule,
};
pub use span::{Position, Span};
pub use syntax::{NodeKind, SyntaxElement, SyntaxLeaf, SyntaxNode};
pub use token::{Token, TokenKind, TokenList};
pub use value::{Callback, Value};
