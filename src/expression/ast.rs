/// Binary arithmetic operators understood by the parser
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    Add,
    Sub,
    Mul,
    Div,
    Pow,
}

impl Operator {
    /// Map an operator symbol to its operator, if it is one
    pub fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            '+' => Some(Operator::Add),
            '-' => Some(Operator::Sub),
            '*' => Some(Operator::Mul),
            '/' => Some(Operator::Div),
            '^' => Some(Operator::Pow),
            _ => None,
        }
    }

    pub fn symbol(&self) -> char {
        match self {
            Operator::Add => '+',
            Operator::Sub => '-',
            Operator::Mul => '*',
            Operator::Div => '/',
            Operator::Pow => '^',
        }
    }
}

/// The value held by a node: a number for leaves, an operator otherwise
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NodeValue {
    Number(f64),
    Operator(Operator),
}

/// A node of a binary expression tree.
///
/// Operands are leaves. Operators always own exactly two children.
#[derive(Debug, Clone, PartialEq)]
pub enum ExpressionNode {
    Operand(f64),
    Operator {
        operator: Operator,
        left: Box<ExpressionNode>,
        right: Box<ExpressionNode>,
    },
}

impl ExpressionNode {
    pub fn operand(value: f64) -> Self {
        ExpressionNode::Operand(value)
    }

    pub fn operator(operator: Operator, left: ExpressionNode, right: ExpressionNode) -> Self {
        ExpressionNode::Operator {
            operator,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    pub fn value(&self) -> NodeValue {
        match self {
            ExpressionNode::Operand(n) => NodeValue::Number(*n),
            ExpressionNode::Operator { operator, .. } => NodeValue::Operator(*operator),
        }
    }

    pub fn left(&self) -> Option<&ExpressionNode> {
        match self {
            ExpressionNode::Operand(_) => None,
            ExpressionNode::Operator { left, .. } => Some(left),
        }
    }

    pub fn right(&self) -> Option<&ExpressionNode> {
        match self {
            ExpressionNode::Operand(_) => None,
            ExpressionNode::Operator { right, .. } => Some(right),
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, ExpressionNode::Operand(_))
    }
}

/// An expression tree built once from its source text and never mutated
#[derive(Debug, Clone, PartialEq)]
pub struct ExpressionTree {
    pub(crate) root: ExpressionNode,
    pub(crate) source: String,
}

impl ExpressionTree {
    pub fn root(&self) -> &ExpressionNode {
        &self.root
    }

    /// The text the tree was built from, exactly as given
    pub fn source(&self) -> &str {
        &self.source
    }
}
