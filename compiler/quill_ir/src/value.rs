//! Reduction values and callbacks.
//!
//! A callback receives one [`Value`] per non-discarded child of the node it
//! reduces, in clause order, and returns the host's output type.

use std::fmt;
use std::sync::Arc;

use crate::Token;

/// What a reduction callback sees for one matched clause.
#[derive(Clone, PartialEq, Debug)]
pub enum Value<K, OUT> {
    /// A matched terminal.
    Token(Token<K>),
    /// The reduced output of a non-terminal or expression.
    Out(OUT),
    /// The items matched by `*` or `+`, flattened across iterations.
    List(Vec<Value<K, OUT>>),
    /// The result of `?`: `None` if the clause did not match. A match of
    /// several values, or of discarded clauses only, is wrapped as a `List`.
    Optional(Option<Box<Value<K, OUT>>>),
}

impl<K, OUT> Value<K, OUT> {
    pub fn into_token(self) -> Option<Token<K>> {
        match self {
            Value::Token(token) => Some(token),
            _ => None,
        }
    }

    pub fn into_out(self) -> Option<OUT> {
        match self {
            Value::Out(out) => Some(out),
            _ => None,
        }
    }

    pub fn into_list(self) -> Option<Vec<Value<K, OUT>>> {
        match self {
            Value::List(items) => Some(items),
            _ => None,
        }
    }

    /// Unwrap an optional value. Returns `None` if this is not `Optional`,
    /// `Some(None)` if the optional clause did not match.
    pub fn into_optional(self) -> Option<Option<Value<K, OUT>>> {
        match self {
            Value::Optional(inner) => Some(inner.map(|boxed| *boxed)),
            _ => None,
        }
    }

    pub fn as_token(&self) -> Option<&Token<K>> {
        match self {
            Value::Token(token) => Some(token),
            _ => None,
        }
    }

    pub fn as_out(&self) -> Option<&OUT> {
        match self {
            Value::Out(out) => Some(out),
            _ => None,
        }
    }
}

type CallbackFn<K, OUT> = dyn Fn(Vec<Value<K, OUT>>) -> OUT + Send + Sync;

/// A shared reduction callback bound to a rule or operator.
pub struct Callback<K, OUT>(Arc<CallbackFn<K, OUT>>);

impl<K, OUT> Callback<K, OUT> {
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(Vec<Value<K, OUT>>) -> OUT + Send + Sync + 'static,
    {
        Callback(Arc::new(f))
    }

    #[inline]
    pub fn call(&self, args: Vec<Value<K, OUT>>) -> OUT {
        (self.0)(args)
    }
}

impl<K, OUT> Clone for Callback<K, OUT> {
    fn clone(&self) -> Self {
        Callback(Arc::clone(&self.0))
    }
}

impl<K, OUT> fmt::Debug for Callback<K, OUT> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Callback(..)")
    }
}
