//! Syntax tree produced by a successful parse.
//!
//! There is one node type. Expression nodes carry their
//! [`OperationMetadata`]; production nodes carry none. Group and
//! alternation nodes are bypass nodes: [`SyntaxNode::push`] splices their
//! children into the parent, so a finished tree never contains one.

use std::fmt;

use crate::{Affix, Associativity, Callback, OperationMetadata, Token, TokenKind};

/// What a node was built from, which decides how it is reduced.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum NodeKind {
    /// One alternative of a non-terminal.
    Rule,
    /// An operator application inside an expression head.
    Expression,
    /// A `*` or `+` repetition.
    Many,
    /// A `?` clause.
    Optional,
    /// A parenthesized group or alternation. Always spliced away.
    Group,
}

/// A matched token.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct SyntaxLeaf<K> {
    pub token: Token<K>,
    /// Kept in the tree, hidden from callbacks.
    pub discarded: bool,
}

/// A child of a [`SyntaxNode`].
pub enum SyntaxElement<K, OUT> {
    Node(SyntaxNode<K, OUT>),
    Leaf(SyntaxLeaf<K>),
}

impl<K: TokenKind, OUT> SyntaxElement<K, OUT> {
    pub fn as_node(&self) -> Option<&SyntaxNode<K, OUT>> {
        match self {
            SyntaxElement::Node(node) => Some(node),
            SyntaxElement::Leaf(_) => None,
        }
    }

    pub fn as_token(&self) -> Option<&Token<K>> {
        match self {
            SyntaxElement::Leaf(leaf) => Some(&leaf.token),
            SyntaxElement::Node(_) => None,
        }
    }

    pub fn is_discarded(&self) -> bool {
        match self {
            SyntaxElement::Node(node) => node.discarded,
            SyntaxElement::Leaf(leaf) => leaf.discarded,
        }
    }
}

impl<K: TokenKind, OUT> Clone for SyntaxElement<K, OUT> {
    fn clone(&self) -> Self {
        match self {
            SyntaxElement::Node(node) => SyntaxElement::Node(node.clone()),
            SyntaxElement::Leaf(leaf) => SyntaxElement::Leaf(leaf.clone()),
        }
    }
}

impl<K: TokenKind, OUT> fmt::Debug for SyntaxElement<K, OUT> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SyntaxElement::Node(node) => node.fmt(f),
            SyntaxElement::Leaf(leaf) => leaf.token.fmt(f),
        }
    }
}

/// A node of the syntax tree.
pub struct SyntaxNode<K, OUT> {
    /// Non-terminal name, or the clause text for repetition and optional nodes.
    pub name: String,
    pub kind: NodeKind,
    pub children: Vec<SyntaxElement<K, OUT>>,
    /// Set for expression nodes only.
    pub operation: Option<OperationMetadata>,
    /// Reduction callback for rule and expression nodes.
    pub callback: Option<Callback<K, OUT>>,
    /// Kept in the tree, hidden from the parent's callback.
    pub discarded: bool,
}

impl<K: TokenKind, OUT> SyntaxNode<K, OUT> {
    pub fn new(name: impl Into<String>, kind: NodeKind) -> Self {
        SyntaxNode {
            name: name.into(),
            kind,
            children: Vec::new(),
            operation: None,
            callback: None,
            discarded: false,
        }
    }

    /// A production node reduced by `callback`.
    pub fn rule(name: impl Into<String>, callback: Callback<K, OUT>) -> Self {
        SyntaxNode {
            callback: Some(callback),
            ..SyntaxNode::new(name, NodeKind::Rule)
        }
    }

    /// An expression node. Children must already be in affix order.
    pub fn expression(
        name: impl Into<String>,
        operation: OperationMetadata,
        callback: Callback<K, OUT>,
        children: Vec<SyntaxElement<K, OUT>>,
    ) -> Self {
        SyntaxNode {
            operation: Some(operation),
            callback: Some(callback),
            children,
            ..SyntaxNode::new(name, NodeKind::Expression)
        }
    }

    /// A structural wrapper spliced into its parent on push.
    pub fn bypass() -> Self {
        SyntaxNode::new(String::new(), NodeKind::Group)
    }

    #[inline]
    pub fn is_bypass(&self) -> bool {
        self.kind == NodeKind::Group
    }

    /// Append a child, splicing the children of a bypass node in its place.
    pub fn push(&mut self, child: SyntaxElement<K, OUT>) {
        match child {
            SyntaxElement::Node(node) if node.is_bypass() => {
                self.children.extend(node.children);
            }
            other => self.children.push(other),
        }
    }

    pub fn push_node(&mut self, node: SyntaxNode<K, OUT>) {
        self.push(SyntaxElement::Node(node));
    }

    pub fn push_token(&mut self, token: Token<K>, discarded: bool) {
        self.push(SyntaxElement::Leaf(SyntaxLeaf { token, discarded }));
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    #[inline]
    pub fn is_expression(&self) -> bool {
        self.operation.is_some()
    }

    pub fn is_binary(&self) -> bool {
        self.operation.is_some_and(|op| op.is_binary())
    }

    pub fn is_unary(&self) -> bool {
        self.operation.is_some_and(|op| op.is_unary())
    }

    pub fn affix(&self) -> Option<Affix> {
        self.operation.map(|op| op.affix)
    }

    pub fn precedence(&self) -> Option<u32> {
        self.operation.map(|op| op.precedence)
    }

    pub fn associativity(&self) -> Option<Associativity> {
        self.operation.map(|op| op.associativity)
    }

    /// Left operand: `children[0]` for infix and postfix nodes.
    pub fn left(&self) -> Option<&SyntaxElement<K, OUT>> {
        match self.affix()? {
            Affix::Infix | Affix::Postfix => self.children.first(),
            Affix::Prefix => None,
        }
    }

    /// Right operand: `children[2]` for infix, `children[1]` for prefix nodes.
    pub fn right(&self) -> Option<&SyntaxElement<K, OUT>> {
        match self.affix()? {
            Affix::Infix => self.children.get(2),
            Affix::Prefix => self.children.get(1),
            Affix::Postfix => None,
        }
    }

    /// The operator token of an expression node.
    pub fn operator(&self) -> Option<&Token<K>> {
        let index = match self.affix()? {
            Affix::Prefix => 0,
            Affix::Infix | Affix::Postfix => 1,
        };
        self.children.get(index)?.as_token()
    }

    /// Child nodes, skipping leaves.
    pub fn child_nodes(&self) -> impl Iterator<Item = &SyntaxNode<K, OUT>> {
        self.children.iter().filter_map(SyntaxElement::as_node)
    }

    /// Every token under this node, left to right.
    pub fn tokens(&self) -> Vec<&Token<K>> {
        let mut out = Vec::new();
        self.collect_tokens(&mut out);
        out
    }

    fn collect_tokens<'a>(&'a self, out: &mut Vec<&'a Token<K>>) {
        for child in &self.children {
            match child {
                SyntaxElement::Leaf(leaf) => out.push(&leaf.token),
                SyntaxElement::Node(node) => node.collect_tokens(out),
            }
        }
    }

    /// Pre-order walk over this node and every descendant node, with depth.
    pub fn visit<'a>(&'a self, f: &mut impl FnMut(&'a SyntaxNode<K, OUT>, usize)) {
        self.visit_at(0, f);
    }

    fn visit_at<'a>(&'a self, depth: usize, f: &mut impl FnMut(&'a SyntaxNode<K, OUT>, usize)) {
        f(self, depth);
        for node in self.child_nodes() {
            node.visit_at(depth + 1, f);
        }
    }

    /// Render the tree as indented text.
    ///
    /// Nodes are `+ name`, with the operation appended for expressions;
    /// leaves are `- Kind "text"`. Discarded elements end with `[d]`.
    pub fn dump(&self) -> String {
        TreeDump(self).to_string()
    }

    fn write_tree(&self, f: &mut fmt::Formatter<'_>, depth: usize) -> fmt::Result {
        write!(f, "{:indent$}+ {}", "", self.name, indent = depth * 2)?;
        if let Some(op) = self.operation {
            write!(f, " <{op}>")?;
        }
        if self.discarded {
            f.write_str(" [d]")?;
        }
        f.write_str("\n")?;
        for child in &self.children {
            match child {
                SyntaxElement::Node(node) => node.write_tree(f, depth + 1)?,
                SyntaxElement::Leaf(leaf) => {
                    write!(
                        f,
                        "{:indent$}- {} {:?}",
                        "",
                        leaf.token.kind.name(),
                        leaf.token.value,
                        indent = (depth + 1) * 2
                    )?;
                    if leaf.discarded {
                        f.write_str(" [d]")?;
                    }
                    f.write_str("\n")?;
                }
            }
        }
        Ok(())
    }
}

/// Display adapter behind [`SyntaxNode::dump`].
struct TreeDump<'a, K, OUT>(&'a SyntaxNode<K, OUT>);

impl<K: TokenKind, OUT> fmt::Display for TreeDump<'_, K, OUT> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.write_tree(f, 0)
    }
}

impl<K: TokenKind, OUT> Clone for SyntaxNode<K, OUT> {
    fn clone(&self) -> Self {
        SyntaxNode {
            name: self.name.clone(),
            kind: self.kind,
            children: self.children.clone(),
            operation: self.operation,
            callback: self.callback.clone(),
            discarded: self.discarded,
        }
    }
}

impl<K: TokenKind, OUT> fmt::Debug for SyntaxNode<K, OUT> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SyntaxNode")
            .field("name", &self.name)
            .field("kind", &self.kind)
            .field("operation", &self.operation)
            .field("discarded", &self.discarded)
            .field("children", &self.children)
            .finish_non_exhaustive()
    }
}
