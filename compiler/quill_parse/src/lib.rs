//! Recursive-descent parser generator core for Quill.
//!
//! Productions pair a rule string with a reduction callback:
//!
//! ```text
//! expr : term ((PLUS | MINUS) term)*
//! expr : %infix STAR %left 20
//! ```
//!
//! [`ParserBuilder`] parses the rule strings with the self-hosted
//! meta-grammar, rejects left-recursive and otherwise broken grammars, and
//! builds a [`Parser`]. Parsing matches tokens into a [`SyntaxNode`] tree
//! by ordered, backtracking recursive descent, then reduces the tree
//! bottom-up through the callbacks.
//!
//! [`SyntaxNode`]: quill_ir::SyntaxNode

mod builder;
mod cursor;
mod engine;
mod error;
mod meta;
mod parser;
mod recursion;
mod reduce;
mod stack;

pub use builder::{BuildError, BuildErrors, ParserBuilder};
pub use cursor::{Cursor, CursorSnapshot};
pub use engine::{
    syntax_parser, EbnfRecursiveDescentParser, ParserKind, RecursiveDescentParser, SyntaxParser,
};
pub use error::{sort_furthest_first, ExpectedKinds, ParseError, UnexpectedTokenSyntaxError};
pub use meta::{MetaGrammar, MetaValue, OperatorSyntax, RuleBody, RuleSyntax};
pub use parser::{ParseResult, Parser};
pub use recursion::{check_left_recursion, nullable_non_terminals, render_cycles};
pub use reduce::{reduce, reduce_node};

#[cfg(test)]
mod tests;

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Call this once at startup. Safe to call multiple times.
/// Enable with `RUST_LOG=quill_parse=debug`, or `trace` to follow every
/// alternative and backtrack.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        // Only initialize if RUST_LOG is set
        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .init();
        }
    });
}
