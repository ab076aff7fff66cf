//! exprtree - Binary expression trees for fully parenthesized arithmetic
//!
//! This library parses infix expressions such as `((2+3)*4)` into a binary tree of
//! operators and operands, evaluates the tree, and exposes read-only traversals so
//! the finished tree can be rendered elsewhere.
//!
//! Subexpressions split on their leftmost operator outside any parentheses. There is
//! no operator precedence: `2+3*4` is `2+(3*4)` but `2*3+4` is `2*(3+4)`. Parenthesize
//! fully for the conventional reading.

pub mod expression;
pub mod utils;

// Re-export the main public API
pub use expression::{
    Edge, ExpressionError, ExpressionNode, ExpressionTree, NodeValue, Operator, Side,
};
pub use utils::{UtilsError, batch_lines, validate_expression_input};

/// Build the tree for an expression and evaluate it in one step
///
/// # Arguments
///
/// * `expression` - A fully parenthesized infix expression over `+ - * / ^`
///
/// # Errors
///
/// This function will return an error if:
/// * The parentheses are unbalanced
/// * An operand is not a number, or an operand or operator is missing
/// * Evaluation divides by zero or has no real result
///
/// # Examples
///
/// ```
/// use exprtree::{ExpressionError, evaluate_expression};
///
/// assert_eq!(evaluate_expression("((2+3)*4)"), Ok(20.0));
/// assert_eq!(evaluate_expression("(5/0)"), Err(ExpressionError::DivisionByZero));
/// ```
pub fn evaluate_expression(expression: &str) -> Result<f64, ExpressionError> {
    ExpressionTree::build(expression)?.evaluate()
}
