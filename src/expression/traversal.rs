//! Read-only walks over a built tree.
//!
//! All walks use an explicit stack, so they never recurse deeper than the caller.

use crate::expression::ast::{ExpressionNode, ExpressionTree};

/// Which child of its parent a node is
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

/// A parent-to-child link, as a renderer would draw it
pub type Edge<'a> = (&'a ExpressionNode, &'a ExpressionNode, Side);

impl ExpressionNode {
    /// Node, left subtree, right subtree
    pub fn preorder(&self) -> Vec<&ExpressionNode> {
        let mut result = Vec::new();
        let mut stack = vec![self];

        while let Some(node) = stack.pop() {
            result.push(node);
            if let (Some(left), Some(right)) = (node.left(), node.right()) {
                stack.push(right);
                stack.push(left);
            }
        }

        result
    }

    /// Left subtree, node, right subtree
    pub fn inorder(&self) -> Vec<&ExpressionNode> {
        let mut result = Vec::new();
        let mut stack = Vec::new();
        let mut current = Some(self);

        loop {
            while let Some(node) = current {
                stack.push(node);
                current = node.left();
            }
            match stack.pop() {
                Some(node) => {
                    result.push(node);
                    current = node.right();
                }
                None => break,
            }
        }

        result
    }

    /// Left subtree, right subtree, node
    pub fn postorder(&self) -> Vec<&ExpressionNode> {
        let mut result = Vec::new();
        let mut stack = vec![self];

        // Collect node-right-left, then reverse.
        while let Some(node) = stack.pop() {
            result.push(node);
            if let (Some(left), Some(right)) = (node.left(), node.right()) {
                stack.push(left);
                stack.push(right);
            }
        }

        result.reverse();
        result
    }

    /// Every parent-to-child link, parents visited in pre-order
    pub fn edges(&self) -> Vec<Edge<'_>> {
        let mut edges = Vec::new();
        for node in self.preorder() {
            if let (Some(left), Some(right)) = (node.left(), node.right()) {
                edges.push((node, left, Side::Left));
                edges.push((node, right, Side::Right));
            }
        }
        edges
    }

    /// Number of nodes on the longest root-to-leaf path; a lone operand has depth 1
    pub fn depth(&self) -> usize {
        let mut deepest = 0;
        let mut stack = vec![(self, 1usize)];

        while let Some((node, level)) = stack.pop() {
            deepest = deepest.max(level);
            if let (Some(left), Some(right)) = (node.left(), node.right()) {
                stack.push((left, level + 1));
                stack.push((right, level + 1));
            }
        }

        deepest
    }

    pub fn node_count(&self) -> usize {
        self.preorder().len()
    }

    pub fn leaf_count(&self) -> usize {
        self.preorder().iter().filter(|node| node.is_leaf()).count()
    }
}

impl ExpressionTree {
    pub fn preorder(&self) -> Vec<&ExpressionNode> {
        self.root.preorder()
    }

    pub fn inorder(&self) -> Vec<&ExpressionNode> {
        self.root.inorder()
    }

    pub fn postorder(&self) -> Vec<&ExpressionNode> {
        self.root.postorder()
    }

    pub fn edges(&self) -> Vec<Edge<'_>> {
        self.root.edges()
    }

    pub fn depth(&self) -> usize {
        self.root.depth()
    }

    pub fn node_count(&self) -> usize {
        self.root.node_count()
    }

    pub fn leaf_count(&self) -> usize {
        self.root.leaf_count()
    }
}
