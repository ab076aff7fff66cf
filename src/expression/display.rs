use std::fmt;

use crate::expression::ast::{ExpressionNode, ExpressionTree, NodeValue, Operator};

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl fmt::Display for NodeValue {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            NodeValue::Number(n) => write!(f, "{}", n),
            NodeValue::Operator(op) => write!(f, "{}", op),
        }
    }
}

/// Fully parenthesized infix form, which parses back to the same tree
impl fmt::Display for ExpressionNode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ExpressionNode::Operand(n) => write!(f, "{}", n),
            ExpressionNode::Operator {
                operator,
                left,
                right,
            } => write!(f, "({} {} {})", left, operator, right),
        }
    }
}

impl fmt::Display for ExpressionTree {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.root)
    }
}
