//! Reduction of a finished syntax tree.
//!
//! Runs bottom-up after matching succeeded, so callbacks only ever see
//! the alternatives that made it into the tree. Each rule or expression
//! node calls its callback with one [`Value`] per non-discarded child.

use quill_ir::{NodeKind, SyntaxElement, SyntaxNode, TokenKind, Value};

use crate::error::ParseError;
use crate::stack::ensure_sufficient_stack;

/// Reduce a tree whose root is a rule or expression node to its output.
pub fn reduce<K: TokenKind, OUT>(root: SyntaxNode<K, OUT>) -> Result<OUT, ParseError<K>> {
    match reduce_node(root)? {
        Value::Out(out) => Ok(out),
        // Only rule and expression nodes produce `Out`.
        _ => Err(ParseError::MissingCallback {
            name: String::from("<root>"),
        }),
    }
}

/// Reduce any node to the value its parent's callback receives.
pub fn reduce_node<K: TokenKind, OUT>(node: SyntaxNode<K, OUT>) -> Result<Value<K, OUT>, ParseError<K>> {
    ensure_sufficient_stack(|| {
        let SyntaxNode {
            name,
            kind,
            children,
            callback,
            ..
        } = node;
        let matched = !children.is_empty();
        let values = child_values(children)?;

        match kind {
            NodeKind::Rule | NodeKind::Expression => match callback {
                Some(callback) => Ok(Value::Out(callback.call(values))),
                None => Err(ParseError::MissingCallback { name }),
            },
            NodeKind::Many | NodeKind::Group => Ok(Value::List(values)),
            // A match made only of discarded clauses is still a match.
            NodeKind::Optional if !matched => Ok(Value::Optional(None)),
            NodeKind::Optional => {
                let inner = match <[Value<K, OUT>; 1]>::try_from(values) {
                    Ok([only]) => only,
                    Err(values) => Value::List(values),
                };
                Ok(Value::Optional(Some(Box::new(inner))))
            }
        }
    })
}

fn child_values<K: TokenKind, OUT>(
    children: Vec<SyntaxElement<K, OUT>>,
) -> Result<Vec<Value<K, OUT>>, ParseError<K>> {
    let mut values = Vec::with_capacity(children.len());
    for child in children {
        match child {
            SyntaxElement::Leaf(leaf) if !leaf.discarded => values.push(Value::Token(leaf.token)),
            SyntaxElement::Node(node) if !node.discarded => values.push(reduce_node(node)?),
            _ => {}
        }
    }
    Ok(values)
}
