//! Precedence climbing for expression heads.
//!
//! An expression head's rules are its operand alternatives and its
//! operators combine operands:
//!
//! ```text
//! climb(min) := unary ( infix climb(threshold) | postfix )*
//!               while the operator's precedence is at least `min`
//! unary      := prefix climb(prefix precedence) | operand
//! ```
//!
//! `threshold` is one above the operator's precedence for left-associative
//! operators and equal to it for right-associative ones, which gives the
//! tree its associativity directly.

use quill_ir::{Affix, NonTerminal, SyntaxElement, SyntaxLeaf, SyntaxNode, TokenKind};
use tracing::trace;

use super::Matcher;

impl<'a, K: TokenKind, OUT> Matcher<'a, K, OUT> {
    pub(super) fn expression(
        &mut self,
        head: &'a NonTerminal<K, OUT>,
        min_precedence: u64,
    ) -> Option<SyntaxNode<K, OUT>> {
        let mut left = self.unary(head)?;

        loop {
            let operator = self.cursor.current().and_then(|token| {
                head.trailing_operator(token.kind)
                    .filter(|op| u64::from(op.operation.precedence) >= min_precedence)
                    .map(|op| (token, op))
            });
            let Some((token, operator)) = operator else {
                for op in head.operators.iter().filter(|op| {
                    op.operation.affix != Affix::Prefix
                        && u64::from(op.operation.precedence) >= min_precedence
                }) {
                    self.failures.expect(self.cursor.position(), op.kind);
                }
                break;
            };

            let before_operator = self.cursor.snapshot();
            self.cursor.advance();
            let operator_leaf = SyntaxElement::Leaf(SyntaxLeaf {
                token: token.clone(),
                discarded: false,
            });

            let children = match operator.operation.affix {
                Affix::Postfix => vec![SyntaxElement::Node(left), operator_leaf],
                Affix::Infix => {
                    let threshold = operator.operation.right_operand_threshold();
                    let Some(right) = self.expression(head, threshold) else {
                        trace!(
                            operator = token.kind.name(),
                            position = self.cursor.position(),
                            "no right operand, leaving operator unconsumed"
                        );
                        self.cursor.restore(before_operator);
                        break;
                    };
                    vec![
                        SyntaxElement::Node(left),
                        operator_leaf,
                        SyntaxElement::Node(right),
                    ]
                }
                // trailing_operator never yields prefix operators
                Affix::Prefix => {
                    self.cursor.restore(before_operator);
                    break;
                }
            };

            left = SyntaxNode::expression(
                head.name.as_str(),
                operator.operation,
                operator.callback.clone(),
                children,
            );
        }

        Some(left)
    }

    fn unary(&mut self, head: &'a NonTerminal<K, OUT>) -> Option<SyntaxNode<K, OUT>> {
        let prefix = self
            .cursor
            .current()
            .and_then(|token| head.prefix_operator(token.kind).map(|op| (token, op)));

        if let Some((token, operator)) = prefix {
            let before_operator = self.cursor.snapshot();
            self.cursor.advance();
            if let Some(operand) = self.expression(head, u64::from(operator.operation.precedence)) {
                return Some(SyntaxNode::expression(
                    head.name.as_str(),
                    operator.operation,
                    operator.callback.clone(),
                    vec![
                        SyntaxElement::Leaf(SyntaxLeaf {
                            token: token.clone(),
                            discarded: false,
                        }),
                        SyntaxElement::Node(operand),
                    ],
                ));
            }
            self.cursor.restore(before_operator);
        }

        for op in head.operators_with(Affix::Prefix) {
            self.failures.expect(self.cursor.position(), op.kind);
        }
        self.alternatives(head)
    }
}
