//! Expression trees: building from text, evaluation and rendering

mod ast;
pub mod constants;
mod display;
mod errors;
mod eval;
mod latex;
mod parser;
mod traversal;

pub use ast::{ExpressionNode, ExpressionTree, NodeValue, Operator};
pub use errors::ExpressionError;
pub use parser::check_parentheses;
pub use traversal::{Edge, Side};

#[cfg(test)]
mod properties;
