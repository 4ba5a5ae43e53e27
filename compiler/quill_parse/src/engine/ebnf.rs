//! Grouping, option, repetition and alternation clauses.
//!
//! Groups and alternation branches are matched into bypass nodes, which
//! splice into whatever node they are pushed onto. Repetitions and options
//! keep their own node so reduction can hand callbacks a list or an
//! optional value.

use quill_ir::{GrammarNode, NodeKind, SyntaxNode, TokenKind};
use tracing::trace;

use super::Matcher;

impl<'a, K: TokenKind, OUT> Matcher<'a, K, OUT> {
    pub(super) fn combinator(
        &mut self,
        clause: &'a GrammarNode<K>,
        parent: &mut SyntaxNode<K, OUT>,
    ) -> Option<()> {
        match clause {
            GrammarNode::Group(children) => {
                let mut group = SyntaxNode::bypass();
                for child in children {
                    self.clause(child, &mut group)?;
                }
                parent.push_node(group);
                Some(())
            }
            GrammarNode::Alternation(branches) => {
                let branch = self.alternation(branches)?;
                parent.push_node(branch);
                Some(())
            }
            GrammarNode::Optional(inner) => {
                let mut optional = SyntaxNode::new(clause.to_string(), NodeKind::Optional);
                let start = self.cursor.snapshot();
                if self.clause(inner, &mut optional).is_none() {
                    self.cursor.restore(start);
                    optional.children.clear();
                }
                parent.push_node(optional);
                Some(())
            }
            GrammarNode::ZeroOrMore(inner) => {
                let mut many = SyntaxNode::new(clause.to_string(), NodeKind::Many);
                self.repeat(inner, &mut many);
                parent.push_node(many);
                Some(())
            }
            GrammarNode::OneOrMore(inner) => {
                let mut many = SyntaxNode::new(clause.to_string(), NodeKind::Many);
                self.clause(inner, &mut many)?;
                self.repeat(inner, &mut many);
                parent.push_node(many);
                Some(())
            }
            GrammarNode::Terminal { .. } | GrammarNode::NonTerminal { .. } => {
                self.clause(clause, parent)
            }
        }
    }

    /// First matching branch, as a bypass node.
    fn alternation(&mut self, branches: &'a [GrammarNode<K>]) -> Option<SyntaxNode<K, OUT>> {
        let start = self.cursor.snapshot();
        for branch in branches {
            let mut node = SyntaxNode::bypass();
            if self.clause(branch, &mut node).is_some() {
                return Some(node);
            }
            self.cursor.restore(start);
        }
        None
    }

    /// Match `inner` greedily into `many`.
    ///
    /// Stops at the first failed iteration, or one that consumed nothing.
    fn repeat(&mut self, inner: &'a GrammarNode<K>, many: &mut SyntaxNode<K, OUT>) {
        loop {
            let start = self.cursor.snapshot();
            let mut iteration = SyntaxNode::bypass();
            if self.clause(inner, &mut iteration).is_none() {
                self.cursor.restore(start);
                break;
            }
            if !self.cursor.advanced_since(start) {
                trace!(clause = %inner, "repetition matched nothing, stopping");
                self.cursor.restore(start);
                break;
            }
            many.push_node(iteration);
        }
    }
}
